// This module defines the concrete geometry types wrapped by `Geometry`.
// It includes the primitive `Coordinates`, single geometries (`PointGeometry`,
// `LineStringGeometry`, `PolygonGeometry` built from `RingGeometry`), their
// multi-geometry counterparts and the recursive `GeometryCollection`.
// Composite types share `CompositeGeometryTrait`; single types implement
// `SingleGeometryTrait` to lift themselves into a multi-geometry.

mod coordinates;
mod geometry_collection;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod ring;
mod traits;

pub use coordinates::*;
pub use geometry_collection::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;

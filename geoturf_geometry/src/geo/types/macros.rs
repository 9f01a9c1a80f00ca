/// Lets a composite geometry be built from a list of anything its members can
/// be built from: an owned `Vec`, a borrowed `Vec`, a slice or an array reference.
#[macro_export]
macro_rules! impl_composite_from {
	($($composite:ty => $member:ty),* $(,)?) => {$(
		impl<T> From<Vec<T>> for $composite
		where
			$member: From<T>,
		{
			fn from(items: Vec<T>) -> Self {
				Self(items.into_iter().map(Into::into).collect())
			}
		}

		impl<'a, T> From<&'a [T]> for $composite
		where
			$member: From<&'a T>,
		{
			fn from(items: &'a [T]) -> Self {
				Self(items.iter().map(Into::into).collect())
			}
		}

		impl<'a, T> From<&'a Vec<T>> for $composite
		where
			$member: From<&'a T>,
		{
			fn from(items: &'a Vec<T>) -> Self {
				Self::from(items.as_slice())
			}
		}

		impl<'a, T, const N: usize> From<&'a [T; N]> for $composite
		where
			$member: From<&'a T>,
		{
			fn from(items: &'a [T; N]) -> Self {
				Self::from(items.as_slice())
			}
		}
	)*};
}

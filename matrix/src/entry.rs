use core::fmt::{Debug, Display};

/// An integer type that can be stored in a [`CsrMatrix`](crate::CsrMatrix).
///
/// `Self::default()` is the additive identity. Sums and products wrap on overflow, in every build
/// profile.
pub trait Entry:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
    fn wrapping_add(self, rhs: Self) -> Self;

    fn wrapping_mul(self, rhs: Self) -> Self;

    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

macro_rules! impl_entry {
    ($($t:ty),* $(,)?) => {
        $(
            impl Entry for $t {
                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$t>::wrapping_mul(self, rhs)
                }
            }
        )*
    };
}

impl_entry!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

use std::fmt::Debug;

/// Trait for integers that can address an element of a list.
///
/// Implemented for every primitive integer up to 64 bits, signed or not, so that
/// `list.get(-1)` is expressible and reported as out of range instead of being
/// unrepresentable.
pub trait ListIndex
where
    Self: Debug + Copy,
{
    /// Converts this index to an offset, or `None` if it is negative or does not
    /// fit in a `usize`.
    fn to_offset(self) -> Option<usize>;

    /// Widens this index for error reporting.
    fn to_signed(self) -> i128;
}

macro_rules! impl_list_index {
    ($($t:ty),* $(,)?) => {
        $(
            impl ListIndex for $t {
                #[inline]
                fn to_offset(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }

                #[inline]
                fn to_signed(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_list_index!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_has_no_offset() {
        assert_eq!((-1_i32).to_offset(), None);
        assert_eq!(i64::MIN.to_offset(), None);
        assert_eq!((-1_isize).to_signed(), -1);
    }

    #[test]
    fn unsigned_round_trips() {
        assert_eq!(0_u8.to_offset(), Some(0));
        assert_eq!(42_u32.to_offset(), Some(42));
        assert_eq!(usize::MAX.to_offset(), Some(usize::MAX));
        assert_eq!(u64::MAX.to_signed(), u64::MAX as i128);
    }
}

/// Sums of weights along paths.
///
/// Every non-negative weight of a built-in integer type fits,
/// so narrow weight types never cut path lengths short.
pub type Distance = u128;

/// Edge weights.
///
/// Shortest-path search adds weights up as [Distance]s,
/// and it is only correct when no weight is negative.
pub trait Weight: Copy + Ord + std::fmt::Debug + std::fmt::Display {
    fn is_negative(&self) -> bool;

    /// The weight as a path length.
    /// Negative weights are rejected when edges are added, so they never get here.
    fn to_distance(self) -> Distance;
}

macro_rules! impl_signed_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn is_negative(&self) -> bool {
                    *self < 0
                }

                fn to_distance(self) -> Distance {
                    debug_assert!(self >= 0);
                    self as Distance
                }
            }
        )*
    };
}

macro_rules! impl_unsigned_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn is_negative(&self) -> bool {
                    false
                }

                fn to_distance(self) -> Distance {
                    self as Distance
                }
            }
        )*
    };
}

impl_signed_weight!(i8, i16, i32, i64, i128, isize);
impl_unsigned_weight!(u8, u16, u32, u64, u128, usize);

use core::fmt;
use core::num::NonZeroU32;

/// One-based segment number as given in the well definition.
///
/// - `u32` keeps memory small
/// - `NonZero` makes `Option<SegmentNumber>` the same size as a plain number,
///   so "no outlet" (outlet 0 in the restart layout) costs nothing
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentNumber(NonZeroU32);

impl SegmentNumber {
    /// The top segment of every multi-segment well.
    pub const TOP: Self = Self(NonZeroU32::MIN);

    /// Create from a one-based number. Returns `None` for zero.
    pub fn new(number: u32) -> Option<Self> {
        NonZeroU32::new(number).map(Self)
    }

    /// One-based number.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Zero-based slot (`number - 1`) used for per-segment window offsets.
    pub fn slot(self) -> usize {
        self.0.get() as usize - 1
    }
}

/// One-based branch identifier. Branch 1 is the main stem.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchId(NonZeroU32);

impl BranchId {
    /// The main branch, which always holds the top segment.
    pub const MAIN: Self = Self(NonZeroU32::MIN);

    pub fn new(id: u32) -> Option<Self> {
        NonZeroU32::new(id).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Zero-based column in branch-shaped arrays.
    pub fn slot(self) -> usize {
        self.0.get() as usize - 1
    }

    pub fn is_main(self) -> bool {
        self == Self::MAIN
    }
}

macro_rules! one_based_fmt {
    ($ty:ident, $name:literal) => {
        impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", $name, self.0)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

one_based_fmt!(SegmentNumber, "Seg");
one_based_fmt!(BranchId, "Branch");

/// Restart-array integer for an optional segment (0 when absent).
pub fn segment_or_zero(segment: Option<SegmentNumber>) -> i32 {
    segment.map_or(0, |s| s.get() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_a_segment() {
        assert!(SegmentNumber::new(0).is_none());
        assert_eq!(SegmentNumber::new(7).unwrap().get(), 7);
        assert_eq!(SegmentNumber::new(7).unwrap().slot(), 6);
    }

    #[test]
    fn option_segment_is_small() {
        assert_eq!(
            core::mem::size_of::<SegmentNumber>(),
            core::mem::size_of::<Option<SegmentNumber>>()
        );
    }

    #[test]
    fn main_branch_and_top_segment() {
        assert!(BranchId::MAIN.is_main());
        assert_eq!(BranchId::new(3).unwrap().slot(), 2);
        assert_eq!(SegmentNumber::TOP.get(), 1);
        assert_eq!(segment_or_zero(None), 0);
        assert_eq!(segment_or_zero(SegmentNumber::new(12)), 12);
    }

    #[test]
    fn display_is_plain_number() {
        assert_eq!(format!("{}", BranchId::new(5).unwrap()), "5");
        assert_eq!(format!("{:?}", SegmentNumber::new(2).unwrap()), "Seg(2)");
    }
}

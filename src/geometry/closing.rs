/// One of the two defining points of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The `a` point, at rate `0`.
    A,
    /// The `b` point, at rate `1`.
    B,
}

/// Which ends of the two lines in a shortest-segment query are closed.
///
/// A closed A-end keeps that line's rate from dropping below `0`, a closed
/// B-end keeps it from rising above `1`. Open ends leave the rate unbounded,
/// so a line closed at one end behaves like a ray and a line closed at both
/// ends like a finite segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClosingFlags {
    pub l1_a: bool,
    pub l1_b: bool,
    pub l2_a: bool,
    pub l2_b: bool,
}

impl ClosingFlags {
    /// Both lines infinite.
    pub const OPEN: Self = Self::new(false, false, false, false);

    /// First line infinite, second line a finite segment.
    pub const SEGMENT: Self = Self::new(false, false, true, true);

    /// Creates flags for each end of both lines.
    #[must_use]
    pub const fn new(l1_a: bool, l1_b: bool, l2_a: bool, l2_b: bool) -> Self {
        Self {
            l1_a,
            l1_b,
            l2_a,
            l2_b,
        }
    }

    /// Flags for the same query with `l1` and `l2` exchanged.
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self::new(self.l2_a, self.l2_b, self.l1_a, self.l1_b)
    }

    /// Returns `true` when no end is closed.
    #[must_use]
    pub const fn is_open(self) -> bool {
        !(self.l1_a || self.l1_b || self.l2_a || self.l2_b)
    }
}

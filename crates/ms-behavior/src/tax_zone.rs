//! Which trips pay the PFH tax.

use std::ops::RangeInclusive;

use ms_core::Cell;

/// The taxed band of the grid.
///
/// A trip is taxed if **any one** of four tests passes: origin x, destination
/// x, origin y or destination y falls inside its band.  This is a union of
/// independent range tests, not containment of both endpoints in a
/// rectangle, so a trip that merely starts in the x band is taxed wherever it
/// ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaxZone {
    pub x: RangeInclusive<u32>,
    pub y: RangeInclusive<u32>,
}

impl Default for TaxZone {
    fn default() -> Self {
        Self { x: 12..=37, y: 12..=39 }
    }
}

impl TaxZone {
    pub fn new(x: RangeInclusive<u32>, y: RangeInclusive<u32>) -> Self {
        Self { x, y }
    }

    /// `true` if a trip from `origin` to `destination` is tax-applicable.
    pub fn applies(&self, origin: Cell, destination: Cell) -> bool {
        self.x.contains(&origin.x)
            || self.x.contains(&destination.x)
            || self.y.contains(&origin.y)
            || self.y.contains(&destination.y)
    }
}

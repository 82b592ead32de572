// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

/// The state of one grid cell at the start of a propagation run.
///
/// `Empty` cells take no part in the spread. `Dormant` cells can be
/// activated by an orthogonally adjacent active cell; `Active` cells are the
/// sources the wavefront spreads from. During a run a cell's effective state
/// moves from dormant to active at most once and never back.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CellState {
    /// Not part of the propagation medium; blocks the spread.
    Empty,
    /// Can be activated by an adjacent active cell.
    Dormant,
    /// Spreading to its orthogonal neighbors.
    Active,
}

impl CellState {
    /// Parses the raw `0/1/2` digit encoding used by instance data.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use seiche_grid::cell::CellState;
    ///
    /// assert_eq!(CellState::from_digit(0), Some(CellState::Empty));
    /// assert_eq!(CellState::from_digit(1), Some(CellState::Dormant));
    /// assert_eq!(CellState::from_digit(2), Some(CellState::Active));
    /// assert_eq!(CellState::from_digit(3), None);
    /// ```
    #[inline]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(CellState::Empty),
            1 => Some(CellState::Dormant),
            2 => Some(CellState::Active),
            _ => None,
        }
    }

    /// Returns `true` if the cell is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, CellState::Empty)
    }

    /// Returns `true` if the cell is dormant.
    #[inline]
    pub fn is_dormant(&self) -> bool {
        matches!(self, CellState::Dormant)
    }

    /// Returns `true` if the cell is active.
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, CellState::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_digit() {
        assert_eq!(CellState::from_digit(0), Some(CellState::Empty));
        assert_eq!(CellState::from_digit(1), Some(CellState::Dormant));
        assert_eq!(CellState::from_digit(2), Some(CellState::Active));
        assert_eq!(CellState::from_digit(7), None);
    }

    #[test]
    fn test_predicates() {
        assert!(CellState::Empty.is_empty());
        assert!(CellState::Dormant.is_dormant());
        assert!(CellState::Active.is_active());
        assert!(!CellState::Dormant.is_active());
    }
}

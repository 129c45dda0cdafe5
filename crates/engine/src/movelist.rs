//! A destination list that avoids heap allocations.

use crate::square::Square;
use std::ops::Index;

/// A rook or cannon in the open reaches at most 8 + 9 points; nothing reaches more.
const MAX_TARGETS: usize = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareList {
    squares: [Square; MAX_TARGETS],
    count: usize,
}

impl SquareList {
    pub fn new() -> Self {
        Self {
            squares: [Square::default(); MAX_TARGETS],
            count: 0,
        }
    }

    pub fn add(&mut self, sq: Square) {
        debug_assert!(self.count < MAX_TARGETS, "destination list overflow");
        if self.count < MAX_TARGETS {
            self.squares[self.count] = sq;
            self.count += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn contains(&self, sq: Square) -> bool {
        self.as_slice().contains(&sq)
    }

    pub fn as_slice(&self) -> &[Square] {
        &self.squares[0..self.count]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.as_slice().iter()
    }
}

impl Default for SquareList {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for SquareList {
    type Output = Square;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a SquareList {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! Bubble wrap: a grid of bubbles popped one at a time.

use serde::Serialize;

use crate::error::{HavenError, Result};

pub const BUBBLE_COUNT: usize = 30;
pub const BUBBLE_COLUMNS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PopOutcome {
    Popped,
    AlreadyPopped,
    /// The last intact bubble was popped.
    Cleared,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BubbleGrid {
    popped: [bool; BUBBLE_COUNT],
}

impl Default for BubbleGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl BubbleGrid {
    pub fn new() -> Self {
        Self {
            popped: [false; BUBBLE_COUNT],
        }
    }

    pub fn is_popped(&self, index: usize) -> bool {
        self.popped.get(index).copied().unwrap_or(false)
    }

    pub fn remaining(&self) -> usize {
        self.popped.iter().filter(|p| !**p).count()
    }

    pub fn is_cleared(&self) -> bool {
        self.popped.iter().all(|p| *p)
    }

    pub fn pop(&mut self, index: usize) -> Result<PopOutcome> {
        let bubble = self.popped.get_mut(index).ok_or_else(|| {
            HavenError::invalid_input(format!(
                "bubble {index} is outside the grid of {BUBBLE_COUNT}"
            ))
        })?;
        if *bubble {
            return Ok(PopOutcome::AlreadyPopped);
        }
        *bubble = true;

        Ok(if self.is_cleared() {
            PopOutcome::Cleared
        } else {
            PopOutcome::Popped
        })
    }

    /// A fresh sheet with every bubble intact.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Rows of `BUBBLE_COLUMNS` flags, `true` where popped.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.popped.chunks(BUBBLE_COLUMNS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_is_idempotent() {
        let mut grid = BubbleGrid::new();
        assert_eq!(grid.pop(3).unwrap(), PopOutcome::Popped);
        assert_eq!(grid.pop(3).unwrap(), PopOutcome::AlreadyPopped);
        assert!(grid.is_popped(3));
        assert_eq!(grid.remaining(), BUBBLE_COUNT - 1);
    }

    #[test]
    fn test_last_pop_clears_and_reset_refills() {
        let mut grid = BubbleGrid::new();
        for i in 0..BUBBLE_COUNT - 1 {
            assert_eq!(grid.pop(i).unwrap(), PopOutcome::Popped);
        }
        assert!(!grid.is_cleared());
        assert_eq!(grid.pop(BUBBLE_COUNT - 1).unwrap(), PopOutcome::Cleared);
        assert!(grid.is_cleared());

        grid.reset();
        assert_eq!(grid.remaining(), BUBBLE_COUNT);
        assert_eq!(grid.rows().count(), BUBBLE_COUNT / BUBBLE_COLUMNS);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut grid = BubbleGrid::new();
        assert!(grid.pop(BUBBLE_COUNT).unwrap_err().is_invalid_input());
        assert_eq!(grid.remaining(), BUBBLE_COUNT);
    }
}

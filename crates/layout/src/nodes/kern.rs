use super::size::SizeLevel;
use crate::config::{GROW_FACTOR, SHRINK_FACTOR};
use std::fmt;

/// A fixed amount of (normally negative) spacing.
///
/// In a horizontal list this is the correction between letters such as A and
/// V; in a vertical list its width denotes vertical spacing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Kern {
    level: SizeLevel,
    width: f64,
}

impl Kern {
    pub fn new(width: f64) -> Self {
        Self {
            level: SizeLevel::default(),
            width,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn shrink(&mut self) {
        if self.level.shrink() {
            self.width *= SHRINK_FACTOR;
        }
    }

    pub fn grow(&mut self) {
        self.level.grow();
        self.width *= GROW_FACTOR;
    }
}

impl fmt::Display for Kern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "k{:.2}", self.width)
    }
}

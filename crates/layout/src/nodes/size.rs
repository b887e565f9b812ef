use crate::config::NUM_SIZE_LEVELS;

/// Tracks how many shrink/grow steps were applied to a node.
///
/// Shrinking counts up and stops scaling once the level reaches
/// [`NUM_SIZE_LEVELS`]; growing counts down and always scales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeLevel(i32);

impl SizeLevel {
    pub fn get(self) -> i32 {
        self.0
    }

    /// Steps one level smaller. Returns whether the node should still scale.
    pub(crate) fn shrink(&mut self) -> bool {
        self.0 += 1;
        self.is_scalable()
    }

    pub(crate) fn grow(&mut self) {
        self.0 -= 1;
    }

    /// Whether the level is still below the smallest size.
    pub fn is_scalable(self) -> bool {
        self.0 < NUM_SIZE_LEVELS
    }
}

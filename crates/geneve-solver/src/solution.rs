//! Result of solving one field.

/// Value chosen for a field and the random budget left afterwards.
///
/// `value` is `None` when no constraint pinned the field and the budget was
/// already exhausted.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<V> {
    pub value: Option<V>,
    pub left_attempts: u32,
}

impl<V> Solution<V> {
    pub fn new(value: Option<V>, left_attempts: u32) -> Self {
        Self {
            value,
            left_attempts,
        }
    }

    /// Converts the value, keeping the budget.
    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> Solution<U> {
        Solution {
            value: self.value.map(f),
            left_attempts: self.left_attempts,
        }
    }
}

pub mod bst;
pub mod doubly;
pub mod queue;
pub mod singly;
pub mod stack;

use thiserror::Error;

/// Returned by the fixed-capacity containers when an insert would exceed
/// the capacity chosen at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("container is full (capacity {capacity})")]
pub struct CapacityError {
    pub capacity: usize,
}

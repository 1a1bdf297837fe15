//! Domain factories for creating domain entities and value objects.

use std::sync::atomic::{AtomicI32, Ordering};

use super::{ItemId, error::ValueObjectError};

/// Factory for generating ItemId instances.
///
/// Hands out sequential identifiers. Repositories may still reject a
/// generated id (for example when it is already stored).
#[derive(Debug)]
pub struct ItemIdFactory {
    next: AtomicI32,
}

impl ItemIdFactory {
    /// Create a factory whose first id is 1.
    pub fn new() -> Self {
        Self {
            next: AtomicI32::new(1),
        }
    }

    /// Create a factory that continues after `last`.
    ///
    /// The first generated id is `last + 1`. If `last` is `i32::MAX`,
    /// every call to `generate` fails.
    pub fn starting_after(last: ItemId) -> Self {
        match last.value().checked_add(1) {
            Some(next) => Self {
                next: AtomicI32::new(next),
            },
            None => Self {
                next: AtomicI32::new(i32::MIN),
            },
        }
    }

    /// Generate the next ItemId.
    ///
    /// # Errors
    ///
    /// Returns `ValueObjectError::ItemIdExhausted` once the i32 range is used up.
    pub fn generate(&self) -> Result<ItemId, ValueObjectError> {
        // i32::MIN marks an exhausted factory.
        self.next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                if current == i32::MIN {
                    None
                } else {
                    Some(current.checked_add(1).unwrap_or(i32::MIN))
                }
            })
            .map(ItemId::new)
            .map_err(|_| ValueObjectError::ItemIdExhausted)
    }
}

impl Default for ItemIdFactory {
    fn default() -> Self {
        Self::new()
    }
}

//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ValueObjectError;

/// Maximum number of characters allowed in an item name
pub const MAX_ITEM_NAME_LENGTH: usize = 30;

/// Item identifier value object.
///
/// Represents the unique integer identifier of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i32);

impl ItemId {
    /// Create a new ItemId.
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the inner i32 value.
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Item name value object.
///
/// A name is 1 to `MAX_ITEM_NAME_LENGTH` characters long. Length is counted
/// in Unicode scalar values, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    /// Create a new ItemName.
    ///
    /// # Arguments
    ///
    /// * `name` - The item name string
    ///
    /// # Returns
    ///
    /// A Result containing the ItemName or an error if validation fails
    pub fn new(name: String) -> Result<Self, ValueObjectError> {
        Self::validate(&name)?;
        Ok(Self(name))
    }

    /// Check a candidate name without taking ownership of it.
    ///
    /// # Errors
    ///
    /// * `ValueObjectError::ItemNameEmpty` - the name is empty
    /// * `ValueObjectError::ItemNameTooLong` - the name exceeds `MAX_ITEM_NAME_LENGTH` characters
    pub fn validate(name: &str) -> Result<(), ValueObjectError> {
        if name.is_empty() {
            return Err(ValueObjectError::ItemNameEmpty);
        }
        let len = name.chars().count();
        if len > MAX_ITEM_NAME_LENGTH {
            return Err(ValueObjectError::ItemNameTooLong {
                max: MAX_ITEM_NAME_LENGTH,
                actual: len,
            });
        }
        Ok(())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ItemName {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Todo Models
//!
//! Data structures shown by the list view.

use std::fmt;

/// Identifier assigned to a todo item when it is saved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single todo entry
#[derive(Debug, Clone, PartialEq)]
pub struct TodoItem {
    pub id: ItemId,
    /// Title as saved; never blank
    title: String,
    pub completed: bool,
}

impl TodoItem {
    /// Create a new, not yet completed item
    pub(crate) fn new(id: ItemId, title: String) -> Self {
        Self {
            id,
            title,
            completed: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = TodoItem::new(ItemId(1), "Buy milk".to_string());
        assert_eq!(item.id, ItemId(1));
        assert_eq!(item.title(), "Buy milk");
        assert!(!item.completed);
    }

    #[test]
    fn test_item_id_display() {
        assert_eq!(ItemId(7).to_string(), "#7");
    }
}

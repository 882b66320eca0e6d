//! Controller Errors

use thiserror::Error;

use crate::models::ItemId;

/// Common result type for controller operations
pub type TodoResult<T> = Result<T, TodoError>;

/// Errors raised by state transitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// Save attempted while the draft is empty or whitespace only
    #[error("todo title must not be blank")]
    BlankInput,
    /// Save attempted with no dialog open
    #[error("add dialog is not open")]
    DialogClosed,
    #[error("no todo item with id {0}")]
    ItemNotFound(ItemId),
}

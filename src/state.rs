//! Application State Controller
//!
//! Owns the todo list and the add-dialog state. Every user intent is applied
//! here as one synchronous step; the store wraps this type and notifies the
//! views afterwards.

use crate::error::{TodoError, TodoResult};
use crate::models::{ItemId, TodoItem};

/// How a saved draft becomes an item title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitlePolicy {
    /// Store the draft exactly as typed
    #[default]
    Verbatim,
    /// Store the draft without surrounding whitespace
    Trimmed,
}

impl TitlePolicy {
    fn apply(self, draft: &str) -> String {
        match self {
            TitlePolicy::Verbatim => draft.to_string(),
            TitlePolicy::Trimmed => draft.trim().to_string(),
        }
    }
}

/// Ordered, append-only list of todo items
#[derive(Debug, Clone, PartialEq)]
pub struct TodoList {
    items: Vec<TodoItem>,
    next_id: u32,
}

impl Default for TodoList {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl TodoList {
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    /// Caller guarantees `title` is not blank
    fn push(&mut self, title: String) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items.push(TodoItem::new(id, title));
        id
    }

    fn toggle(&mut self, id: ItemId) -> TodoResult<bool> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(TodoError::ItemNotFound(id))?;
        item.completed = !item.completed;
        Ok(item.completed)
    }
}

/// Transient state of the add-item dialog
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DialogState {
    pub visible: bool,
    pub draft_text: String,
    pub show_validation_error: bool,
}

/// Dialog state as seen by the views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    Closed,
    Open,
    OpenWithError,
}

impl DialogState {
    pub fn phase(&self) -> DialogPhase {
        match (self.visible, self.show_validation_error) {
            (false, _) => DialogPhase::Closed,
            (true, false) => DialogPhase::Open,
            (true, true) => DialogPhase::OpenWithError,
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// User intents emitted by the views
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    OpenAddDialog,
    UpdateDraftText(String),
    ClearDraftText,
    Save,
    Cancel,
    ToggleCompleted(ItemId),
}

/// Result of applying an intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing observable changed
    Unchanged,
    DialogChanged,
    ItemAdded(ItemId),
    ItemToggled { id: ItemId, completed: bool },
    Rejected(TodoError),
}

/// The whole application state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TodoState {
    pub todos: TodoList,
    pub dialog: DialogState,
    pub title_policy: TitlePolicy,
}

impl TodoState {
    pub fn new(title_policy: TitlePolicy) -> Self {
        Self {
            title_policy,
            ..Default::default()
        }
    }

    pub fn open_add_dialog(&mut self) {
        self.dialog.visible = true;
    }

    pub fn update_draft_text(&mut self, text: impl Into<String>) {
        self.dialog.draft_text = text.into();
    }

    pub fn clear_draft_text(&mut self) {
        self.dialog.draft_text.clear();
    }

    /// Append the draft as a new item and close the dialog.
    ///
    /// A blank draft raises the validation flag and leaves everything else
    /// as it was. Nothing changes while the dialog is closed.
    pub fn save(&mut self) -> TodoResult<ItemId> {
        if !self.dialog.visible {
            return Err(TodoError::DialogClosed);
        }
        if self.dialog.draft_text.trim().is_empty() {
            self.dialog.show_validation_error = true;
            return Err(TodoError::BlankInput);
        }
        let title = self.title_policy.apply(&self.dialog.draft_text);
        let id = self.todos.push(title);
        self.dialog.reset();
        Ok(id)
    }

    /// Close the dialog and discard the draft
    pub fn cancel(&mut self) {
        self.dialog.reset();
    }

    /// Flip the completed flag of one item, returning the new value
    pub fn toggle_completed(&mut self, id: ItemId) -> TodoResult<bool> {
        self.todos.toggle(id)
    }

    pub fn apply(&mut self, intent: Intent) -> Outcome {
        let before = self.dialog.clone();
        match intent {
            Intent::OpenAddDialog => self.open_add_dialog(),
            Intent::UpdateDraftText(text) => self.update_draft_text(text),
            Intent::ClearDraftText => self.clear_draft_text(),
            Intent::Cancel => self.cancel(),
            Intent::Save => {
                return match self.save() {
                    Ok(id) => Outcome::ItemAdded(id),
                    Err(TodoError::DialogClosed) => Outcome::Unchanged,
                    Err(err) => Outcome::Rejected(err),
                };
            }
            Intent::ToggleCompleted(id) => {
                return match self.toggle_completed(id) {
                    Ok(completed) => Outcome::ItemToggled { id, completed },
                    Err(err) => Outcome::Rejected(err),
                };
            }
        }
        if self.dialog == before {
            Outcome::Unchanged
        } else {
            Outcome::DialogChanged
        }
    }
}

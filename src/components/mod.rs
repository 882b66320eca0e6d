//! UI Components
//!
//! Leptos components for the single todo screen.

mod add_button;
mod add_todo_dialog;
mod todo_list;
mod todo_row;
mod top_bar;

pub use add_button::AddButton;
pub use add_todo_dialog::AddTodoDialog;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
pub use top_bar::TopBar;

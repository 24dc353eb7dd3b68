//! UI Components
//!
//! Leptos components of the todo widget.

mod new_todo_form;
mod progress_header;
mod status_legend;
mod status_menu;
mod todo_list_view;
mod todo_row;

pub use new_todo_form::NewTodoForm;
pub use progress_header::ProgressHeader;
pub use status_legend::StatusLegend;
pub use status_menu::StatusMenu;
pub use todo_list_view::TodoListView;
pub use todo_row::TodoRow;

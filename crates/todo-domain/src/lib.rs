//! Todo Domain
//!
//! UI-free core of the status todo widget:
//! - error: domain errors
//! - status: the closed status set and its presentation keys
//! - todo: the todo record and its validated text
//! - list: the ordered list store, its mutations and selection
//! - progress: derived completion metric and badge

mod error;
mod status;
mod todo;
mod list;
mod progress;

pub use error::{DomainError, DomainResult};
pub use status::TodoStatus;
pub use todo::{Todo, TodoId, TodoText};
pub use list::TodoList;
pub use progress::{completion_percentage, Badge, StatusCounts};

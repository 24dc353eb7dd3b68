//! Presentation Helpers
//!
//! Pure formatting used by the components.

use todo_domain::TodoStatus;

/// "3. Buy milk"
pub fn row_label(position: usize, text: &str) -> String {
    format!("{}. {}", position, text)
}

/// Mount/unmount phase of a row, driven by CSS transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMotion {
    /// Just mounted, transitions in on the next frame
    Entering,
    Idle,
    /// Delete clicked, removed once the transition ends
    Leaving,
}

/// Class list of a todo row
pub fn row_class(status: TodoStatus, selected: bool, motion: RowMotion) -> String {
    let mut c = format!("todo-row {}", status.color_class());
    if selected { c.push_str(" selected"); }
    match motion {
        RowMotion::Entering => c.push_str(" entering"),
        RowMotion::Idle => {}
        RowMotion::Leaving => c.push_str(" leaving"),
    }
    c
}

/// Inline style of the progress bar fill
pub fn progress_style(percentage: f64) -> String {
    format!("width: {:.1}%;", percentage.clamp(0.0, 100.0))
}

//! Dialog rendering helpers used by the dialog component and the language picker

pub mod common;
pub mod scroll_behavior;
pub mod system_dialogs;

pub use scroll_behavior::DialogScroll;

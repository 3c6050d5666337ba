//! Chat View UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions (chat query, PDF upload)
//! - view_model.rs: ChatViewVm with RwSignals
//! - view.rs: Main component ChatView
//! - message_row.rs: Transcript row and typing placeholder

mod message_row;
mod model;
mod view;
mod view_model;

pub use message_row::{MessageRow, TypingRow};
pub use view::ChatView;
pub use view_model::ChatViewVm;

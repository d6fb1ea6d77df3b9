//! State Management
//!
//! UI-wide reactive state shared through context.

pub mod global;
pub mod requests;

pub use global::{provide_global_state, use_global_state, GlobalState};
pub use requests::RequestTracker;

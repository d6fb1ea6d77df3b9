//! UI Components
//!
//! Reusable Leptos components shared by the views.

pub mod loading;
pub mod nav;
pub mod stat_card;
pub mod toast;

pub use loading::{ListSkeleton, Loading};
pub use nav::Nav;
pub use stat_card::StatCard;
pub use toast::Toast;

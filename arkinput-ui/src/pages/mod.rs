//! Pages
//!
//! Top-level view components, one per routed path.

pub mod dashboard;
pub mod records;
pub mod settings;

pub use dashboard::Dashboard;
pub use records::Records;
pub use settings::Settings;

use leptos::*;

use crate::routes::ViewKind;

/// Construct the view component for a route target
pub fn render(view: ViewKind) -> View {
    match view {
        ViewKind::Dashboard => view! { <Dashboard /> }.into_view(),
        ViewKind::Records => view! { <Records /> }.into_view(),
        ViewKind::Settings => view! { <Settings /> }.into_view(),
    }
}

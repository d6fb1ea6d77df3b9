//! Loading Component
//!
//! Spinners and skeleton states.

use leptos::*;

/// Block loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading-spinner" />
        </div>
    }
}

/// Skeleton loader for list items
#[component]
pub fn ListSkeleton(#[prop(default = 3)] count: usize) -> impl IntoView {
    view! {
        <div class="skeleton-list">
            {(0..count).map(|_| view! { <div class="skeleton-row" /> }).collect_view()}
        </div>
    }
}

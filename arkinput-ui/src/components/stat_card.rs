//! Stat Card Component
//!
//! A single headline number with a caption.

use leptos::*;

#[component]
pub fn StatCard(
    /// Caption shown above the value
    label: &'static str,
    /// Value to display, `None` while unknown
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Optional secondary line
    #[prop(optional, into)]
    hint: Option<Signal<String>>,
) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <span class="stat-label">{label}</span>
            <div class="stat-value">
                {move || value.get().unwrap_or_else(|| "—".to_string())}
            </div>
            {hint.map(|hint| view! { <div class="stat-hint">{move || hint.get()}</div> })}
        </div>
    }
}

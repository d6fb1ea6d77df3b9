//! Navigation Component
//!
//! Header navigation bar with one link per routed view.

use leptos::*;
use leptos_router::*;

use crate::routes::ViewKind;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="nav-inner">
                // Logo and brand
                <A href=ViewKind::Dashboard.path() class="brand">
                    <span class="brand-mark">"⌨"</span>
                    <span class="brand-name">"ArkInput"</span>
                </A>

                <div class="nav-links">
                    {ViewKind::ALL
                        .into_iter()
                        .map(|view| view! { <NavLink href=view.path() label=view.label() /> })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A href=href class="nav-link" active_class="active">
            {label}
        </A>
    }
}

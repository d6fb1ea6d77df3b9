//! Toast Notification Component
//!
//! Shows success and error messages raised by the views.

use leptos::*;

use crate::state::use_global_state;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_global_state();

    view! {
        <div class="toasts">
            {move || {
                state.success.get().map(|msg| view! {
                    <ToastMessage message=msg variant=ToastVariant::Success />
                })
            }}

            {move || {
                state.error.get().map(|msg| view! {
                    <div on:click=move |_| state.clear_error()>
                        <ToastMessage message=msg variant=ToastVariant::Error />
                    </div>
                })
            }}
        </div>
    }
}

#[derive(Clone, Copy)]
enum ToastVariant {
    Success,
    Error,
}

#[component]
fn ToastMessage(#[prop(into)] message: String, variant: ToastVariant) -> impl IntoView {
    let (icon, class) = match variant {
        ToastVariant::Success => ("✓", "toast toast-success"),
        ToastVariant::Error => ("✕", "toast toast-error"),
    };

    view! {
        <div class=class role="status">
            <span class="toast-icon">{icon}</span>
            <span class="toast-message">{message}</span>
        </div>
    }
}

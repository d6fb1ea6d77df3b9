//! Browser tests for toast expiry.

#![cfg(target_arch = "wasm32")]

use arkinput_ui::state::GlobalState;
use gloo_timers::future::TimeoutFuture;
use leptos::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn replacing_a_toast_restarts_its_expiry() {
    let runtime = create_runtime();
    let state = GlobalState::new();

    state.show_success("Settings saved");
    TimeoutFuture::new(2_000).await;
    state.show_success("Records exported");

    // The first toast's 3 s timer has passed; it must not clear the second
    TimeoutFuture::new(1_500).await;
    assert_eq!(
        state.success.get_untracked().as_deref(),
        Some("Records exported")
    );

    TimeoutFuture::new(2_000).await;
    assert_eq!(state.success.get_untracked(), None);

    runtime.dispose();
}

#[wasm_bindgen_test]
async fn clearing_an_error_cancels_its_expiry() {
    let runtime = create_runtime();
    let state = GlobalState::new();

    state.show_error("Purge failed: database is locked");
    TimeoutFuture::new(2_000).await;
    state.clear_error();
    assert_eq!(state.error.get_untracked(), None);

    // Shown before the cleared toast's 5 s timer would have fired
    state.show_error("Export failed: disk full");
    TimeoutFuture::new(3_500).await;
    assert_eq!(
        state.error.get_untracked().as_deref(),
        Some("Export failed: disk full")
    );

    runtime.dispose();
}

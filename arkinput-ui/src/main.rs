//! ArkInput Dashboard entry point.

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Startup failures stay uncaught; the anchor is left empty
    if let Err(err) = arkinput_ui::mount() {
        wasm_bindgen::throw_str(&format!("ArkInput failed to start: {err}"));
    }
}

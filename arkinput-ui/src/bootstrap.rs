//! Application Bootstrap
//!
//! Validates the route table and mounts the routed [`App`] into the page's
//! `#app` element. Mounting happens once per page load; there is no unmount.

use std::cell::Cell;

use leptos::*;
use thiserror::Error;
use wasm_bindgen::JsCast;

use crate::app::App;
use crate::routes::{RouteTable, RouteTableError};

/// Id of the element the application renders into
pub const MOUNT_ID: &str = "app";

/// Fatal startup failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BootstrapError {
    #[error("window is not available")]
    MissingWindow,

    #[error("document is not available")]
    MissingDocument,

    #[error("mount anchor #{0} not found")]
    MissingAnchor(&'static str),

    #[error("mount anchor #{0} is not an HTML element")]
    AnchorNotHtml(&'static str),

    #[error("invalid route table: {0}")]
    InvalidRoutes(#[from] RouteTableError),

    #[error("application is already mounted")]
    AlreadyMounted,
}

thread_local! {
    static MOUNTED: Cell<bool> = const { Cell::new(false) };
}

/// Whether [`mount`] has completed on this page
pub fn is_mounted() -> bool {
    MOUNTED.with(Cell::get)
}

/// Mount the application onto `#app`.
///
/// Fails without touching the page if the route table is invalid or the
/// anchor is missing, and refuses a second mount.
pub fn mount() -> Result<(), BootstrapError> {
    if is_mounted() {
        return Err(BootstrapError::AlreadyMounted);
    }

    RouteTable::standard().validate()?;
    let anchor = find_anchor(MOUNT_ID)?;

    mount_to(anchor, || view! { <App /> });
    MOUNTED.with(|m| m.set(true));

    web_sys::console::log_1(&format!("ArkInput mounted on #{MOUNT_ID}").into());
    Ok(())
}

fn find_anchor(id: &'static str) -> Result<web_sys::HtmlElement, BootstrapError> {
    let document = web_sys::window()
        .ok_or(BootstrapError::MissingWindow)?
        .document()
        .ok_or(BootstrapError::MissingDocument)?;

    document
        .get_element_by_id(id)
        .ok_or(BootstrapError::MissingAnchor(id))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| BootstrapError::AnchorNotHtml(id))
}

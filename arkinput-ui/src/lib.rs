//! ArkInput Dashboard
//!
//! Client-side rendered Leptos application for browsing the input history
//! recorded by the ArkInput desktop app.
//!
//! # Architecture
//!
//! - [`routes`]: the static route table (`/` redirects to `/dashboard`)
//! - [`bootstrap`]: validates the table and mounts [`app::App`] onto `#app`
//! - [`pages`]: Dashboard, Records and Settings views
//! - [`bridge`]: typed calls into the desktop host

pub mod app;
pub mod bootstrap;
pub mod bridge;
pub mod components;
pub mod dto;
pub mod format;
pub mod pages;
pub mod routes;
pub mod state;

pub use bootstrap::{mount, BootstrapError, MOUNT_ID};
pub use routes::{RouteTable, ViewKind, ROUTES};

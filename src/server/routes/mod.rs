//! Route Handlers

pub mod health;

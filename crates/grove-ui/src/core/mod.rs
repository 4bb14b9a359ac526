//! Core, DOM-free primitives for theme handling.
pub mod config;
pub mod env;
pub mod observers;
pub mod store;
pub mod theme;

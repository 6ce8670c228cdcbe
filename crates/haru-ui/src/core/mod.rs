//! Core, DOM-free primitives and helpers for the Web UI.
pub mod auth;
pub mod color;
pub mod menu;
pub mod redirect;
pub mod theme;
pub mod tokens;

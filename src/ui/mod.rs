//! Terminal front end: routing, input handling and rendering.

pub mod app;
pub mod components;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod views;

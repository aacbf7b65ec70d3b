//! The interactive shell: argument parsing, the read loop and rendering.

pub mod commands;
pub mod render;
pub mod setup;

//! Application state and the terminal event loop.
//!
//! `ChatApp` is split across files by concern; each file adds an
//! `impl ChatApp` block.

mod core;
mod draw;
mod event_loop;
mod input;
mod polling;
mod shutdown;
mod stdin;

pub use core::ChatApp;

//! tanya-core — Pure conversation logic, no UI.
//!
//! This crate contains the transcript, the keyword-dispatch reply table, and
//! the conversation engine behind the portfolio chat assistant. It is
//! completely UI-agnostic — frontends (TUI, Web) send commands over an mpsc
//! queue and subscribe to events via tokio::broadcast.

pub mod config;
pub mod conversation;
pub mod engine;
pub mod events;
pub mod rules;
pub mod types;

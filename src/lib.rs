//! Scribe - a chat-command quotebook with quote cards.
//!
//! This library exposes the core modules for use by the binary and in
//! integration tests.

pub mod app;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod persistence;
pub mod quotebook;
pub mod render;
pub mod transport;

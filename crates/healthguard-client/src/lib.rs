//! HealthGuard client library
//!
//! This crate provides the core functionality for the HealthGuard desktop
//! client: the auth API wrapper, local session storage, the login/signup form
//! and the page shell.

pub mod config;
pub mod error;
pub mod network;
pub mod state;
pub mod ui;

// ABOUTME: Library crate for the visitor check-in kiosk exposing public API for testing and embedding

#![allow(missing_docs)]

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod directory;
pub mod models;
pub mod wizard;

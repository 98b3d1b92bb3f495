//! Command handlers

pub mod bookmark;
pub mod completions;
pub mod config;
pub mod genj;

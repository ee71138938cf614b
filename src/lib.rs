//! Imgbatch - batch image-format converter
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod converter;
pub mod report;

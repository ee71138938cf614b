//! Imgbatch-Common: Shared error types and path utilities.
//!
//! This crate provides functionality shared across imgbatch:
//!
//! - **Path Utilities**: Case-insensitive suffix matching and artifact naming
//! - **Error Handling**: Fatal run errors and result aliases
//!
//! # Examples
//!
//! ```
//! use imgbatch_common::paths::artifact_name;
//! use imgbatch_common::{Error, Result};
//!
//! assert_eq!(artifact_name("IMAGE.PPM", ".ppm", ".png").as_deref(), Some("IMAGE.png"));
//! assert_eq!(artifact_name("notes.txt", ".ppm", ".png"), None);
//!
//! fn example() -> Result<()> {
//!     Err(Error::invalid_input("empty suffix"))
//! }
//! assert!(example().is_err());
//! ```

pub mod error;
pub mod paths;

pub use error::{Error, Result};

//! Domain rules shared by the database and HTTP layers.
//!
//! Nothing in this crate performs I/O. Each module owns the constants,
//! status enums, and validation helpers for one area of the system.

pub mod analytics;
pub mod application;
pub mod error;
pub mod internship;
pub mod pagination;
pub mod portfolio;
pub mod roles;
pub mod submission;
pub mod task;
pub mod theme;
pub mod types;

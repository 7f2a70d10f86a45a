//! Data core for the vendor-management dashboard: a read-only record store,
//! a shared filter engine, derived page metrics, and one command per page
//! that hands a serializable view to the presentation layer.

pub mod commands;
pub mod db;
pub mod error;
pub mod logger;
pub mod models;
pub mod navigation;
pub mod services;
pub mod settings;
pub mod utils;

pub use error::{DeskError, Result};

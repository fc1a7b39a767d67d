//! Data models.

pub mod challan;
pub mod config;

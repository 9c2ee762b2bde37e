//! Resource model and processor contracts for the kiln processing pipeline

pub mod error;
pub mod plugin;
pub mod types;

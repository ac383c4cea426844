//! Configuration for the compliance engine.
//!
//! This module provides the statutory limit constants ([`ComplianceConfig`])
//! and a loader for jurisdiction configuration directories.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ComplianceConfig, JurisdictionMetadata, STATUTORY_OVERTIME_MULTIPLIER};

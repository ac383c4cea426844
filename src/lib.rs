//! Labor Compliance & Cost Engine
//!
//! This crate provides pure, deterministic validators for statutory
//! rest-period, working-hour, and overtime rules, a labor cost calculator
//! with an overtime premium multiplier, and an audit-ready compliance
//! report generator with JSON and CSV export.

#![warn(missing_docs)]

pub mod config;
pub mod cost;
pub mod error;
pub mod models;
pub mod report;
pub mod validation;
pub mod visual;

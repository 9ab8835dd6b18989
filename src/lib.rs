//! sysfetch — one-shot Linux system information collector.
//!
//! Provides:
//! - `collector` — system facts acquisition from `/proc`, release files
//!   and package manager tooling
//! - `model` — immutable snapshot data model
//! - `fmt` — human-readable formatting helpers (uptime, memory sizes)
//! - `cli` — argument parsing and colored table rendering

pub mod cli;
pub mod collector;
pub mod fmt;
pub mod model;

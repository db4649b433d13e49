//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the kit:
//! - Math and colour types
//! - Logging setup

pub mod math;
pub mod logging;

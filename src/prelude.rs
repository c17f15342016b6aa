// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Jesof

//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for convenient use.
//! Users of the library can import everything they need with:
//!
//! ```rust
//! use mcpinger::prelude::*;
//! ```

// Core types
pub use crate::config::Config;
pub use crate::error::{AppError, ProbeError, Result};

// Cache types
pub use crate::cache::{ProbeHandle, ProbeOutcome, StatusCache};

// Lookup types
pub use crate::lookup::StatusField;

// Ping client
pub use crate::minecraft::{PingTarget, Pinger, ServerStatus};

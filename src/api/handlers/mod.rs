// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Jesof

mod health;
mod lookup;
mod status;

pub use health::health_check;
pub use lookup::lookup_handler;
pub use status::{cache_clear_handler, status_handler};

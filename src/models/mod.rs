// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod banner;
pub mod professional;
pub mod quote;
pub mod stats;

pub use banner::{Banner, ClickEvent};
pub use professional::{Professional, ProfessionalPatch};
pub use quote::{Quote, QuoteItems, QuoteStatus, QuoteTotal};
pub use stats::PlatformStats;

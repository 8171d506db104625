// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transport layer utilities for explorer clients.
//!
//! # Pacing
//!
//! [`MinDelayLayer`] wraps any Tower service and guarantees a fixed pause
//! after each call completes before the next one starts. The explorer client
//! composes it around its HTTP service:
//!
//! ```rust,ignore
//! use semioledger::transport::MinDelayLayer;
//! use tower::Layer;
//! use std::time::Duration;
//!
//! let service = MinDelayLayer::new(Duration::from_millis(250)).layer(http_service);
//! ```

mod min_delay;

pub use min_delay::{MinDelayLayer, MinDelayService};

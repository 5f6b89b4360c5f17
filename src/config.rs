// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

/// Environment variable name for the server bind address.
pub const HOST_ENV: &str = "HOST";

/// Default bind address when `HOST` is unset.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Environment variable name for the server bind port.
pub const PORT_ENV: &str = "PORT";

/// Default bind port when `PORT` is unset or unparsable.
pub const DEFAULT_PORT: u16 = 8080;

/// Default `tracing` filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

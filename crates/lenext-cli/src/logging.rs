// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use tracing_subscriber::EnvFilter;

/// Installs a `tracing_subscriber` on stderr using `LENEXT_LOG` first, then `RUST_LOG`, then `warn`.
///
/// stdout is reserved for results.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// The log filter used by [`init_tracing`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env("LENEXT_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

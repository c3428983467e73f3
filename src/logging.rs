// Copyright 2026 the Signet Authors
// SPDX-License-Identifier: Apache-2.0

//! Tracing setup for embedding applications.

/// Initialize a tracing subscriber (can be controlled via RUST_LOG env var).
///
/// Optional convenience for embedders that do not install their own
/// subscriber; the engine itself only emits through `tracing` macros.
/// Panics if a global subscriber is already set.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("signet=info".parse().unwrap()),
        )
        .init();
}

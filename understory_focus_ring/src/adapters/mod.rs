// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to host focus rings on other Understory crates.
//!
//! Enabled via feature flags so the core stays `no_std` without them.

#[cfg(feature = "scene_adapter")]
pub mod scene;

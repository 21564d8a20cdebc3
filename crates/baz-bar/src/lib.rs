// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # baz-bar
//!
//! Provider of the optional `com.example.bar.Bar` module.
//!
//! Linking this crate is what puts `Bar` into a deployment; a build without
//! it leaves [`baz_core::Baz::bar_true`] failing with a missing dependency.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use std::sync::Arc;

use baz_core::{Bar, ModuleRegistryBuilder};

/// The `com.example.bar.Bar` module.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticBar;

impl StaticBar {
    /// Creates the module.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Bar for StaticBar {
    fn bar_true(&self) -> bool {
        true
    }
}

/// Installs [`StaticBar`] into a registry being built.
#[must_use]
pub fn install(builder: ModuleRegistryBuilder) -> ModuleRegistryBuilder {
    tracing::debug!("installing com.example.bar.Bar");
    builder.with::<dyn Bar>(Arc::new(StaticBar::new()))
}

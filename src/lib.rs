//! Baz: a subject with a deferred, optional `com.example.bar.Bar` module.
//!
//! Whether a deployment carries `Bar` is decided twice: at build time by the
//! `bar` cargo feature, which links the `baz-bar` provider, and at start-up
//! by [`DeploymentConfig`](baz_core::DeploymentConfig), which can disable a
//! linked module.
//!
//! # Quick Start
//!
//! ```rust
//! use baz::prelude::*;
//!
//! let baz = baz::deploy(&DeploymentConfig::default()).unwrap();
//! assert!(baz.baz_true());
//! assert!(baz.foo_true());
//! # #[cfg(not(feature = "bar"))]
//! assert!(baz.bar_true().unwrap_err().is_missing_dependency());
//! ```

// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod deployment;

pub use baz_core as core;
#[cfg(feature = "bar")]
pub use baz_bar as bar;

pub use deployment::{deploy, linked_modules, registry_for};

/// Prelude module for common imports.
pub mod prelude {
    pub use baz_core::{
        Bar, Baz, BazError, Capability, DeploymentConfig, ModuleName, ModuleRegistry,
    };
}

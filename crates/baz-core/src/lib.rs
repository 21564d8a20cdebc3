// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # baz-core
//!
//! The [`Baz`] subject and deferred resolution of optional modules.
//!
//! - [`Baz`] exposes `baz_true`, `foo_true` and `bar_true`
//! - [`Capability`] names an optional module interface such as [`Bar`]
//! - [`ModuleRegistry`] holds the optional modules a deployment carries
//! - [`DeploymentConfig`] decides which linked modules are enabled
//!
//! An absent optional module never stops a subject from being built. The
//! call that needs it fails with [`BazError::MissingDependency`].
//!
//! ## Example
//!
//! ```rust
//! use baz_core::Baz;
//!
//! let baz = Baz::new();
//! assert!(baz.baz_true());
//! assert!(baz.foo_true());
//!
//! let err = baz.bar_true().unwrap_err();
//! assert!(err.is_missing_dependency());
//! assert_eq!(err.to_string(), "missing dependency: com.example.bar.Bar");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod capability;
pub mod config;
pub mod error;
pub mod registry;
pub mod subject;
#[cfg(test)]
pub mod tests;
pub mod types;

pub use capability::{Bar, Capability};
pub use config::{DeploymentConfig, ModulesConfig};
pub use error::{BazError, Result};
pub use registry::{ModuleRegistry, ModuleRegistryBuilder};
pub use subject::Baz;
pub use types::ModuleName;

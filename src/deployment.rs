//! Deployment assembly.
//!
//! Builds the module registry for a deployment from the providers linked
//! into this build, minus whatever the configuration disables.

use std::sync::Arc;

use baz_core::{Bar, Baz, DeploymentConfig, ModuleName, ModuleRegistry, Result};

/// Names of the optional modules linked into this build.
#[must_use]
pub fn linked_modules() -> Vec<ModuleName> {
    let mut linked = Vec::new();
    if cfg!(feature = "bar") {
        linked.push(ModuleName::of::<dyn Bar>());
    }
    linked
}

/// Builds the registry for `config`.
///
/// Disabling a module that is not linked is not an error; the module is
/// simply absent either way.
#[must_use]
pub fn registry_for(config: &DeploymentConfig) -> ModuleRegistry {
    let builder = ModuleRegistry::builder();
    #[cfg(feature = "bar")]
    let builder = baz_bar::install(builder);

    let builder = config
        .modules
        .disabled
        .iter()
        .fold(builder, |builder, module| builder.without(module));

    let registry = builder.build();
    tracing::info!(
        deployment = %config.name,
        modules = registry.len(),
        disabled = config.modules.disabled.len(),
        "assembled deployment"
    );
    registry
}

/// Validates `config` and builds a [`Baz`] over its deployment.
///
/// # Errors
/// Returns an error if the configuration is invalid. A missing optional
/// module is not an error here; it surfaces from the call that needs it.
pub fn deploy(config: &DeploymentConfig) -> Result<Baz> {
    config.validate()?;
    Ok(Baz::with_registry(Arc::new(registry_for(config))))
}

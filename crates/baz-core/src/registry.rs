//! Registry of optional modules installed in a deployment.
//!
//! The registry is assembled once through [`ModuleRegistryBuilder`] and is
//! immutable afterwards: a module absent at build time stays absent for the
//! life of the process. Lookups happen at call time, so subjects holding a
//! registry can be constructed whether or not their optional modules exist.

use std::any::Any;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::capability::Capability;
use crate::error::{BazError, Result};
use crate::types::ModuleName;

/// Installed provider, stored as `Arc<C>` behind `Any` so capabilities of
/// different interface types share one map.
type Provider = Box<dyn Any + Send + Sync>;

/// Immutable set of optional modules available to a deployment.
#[derive(Default)]
pub struct ModuleRegistry {
    modules: BTreeMap<ModuleName, Provider>,
}

impl ModuleRegistry {
    /// Creates a registry with no optional modules.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Starts building a registry.
    #[must_use]
    pub fn builder() -> ModuleRegistryBuilder {
        ModuleRegistryBuilder::default()
    }

    /// Resolves the provider for capability `C`.
    ///
    /// # Errors
    /// Returns [`BazError::MissingDependency`] naming `C`'s module if no
    /// provider was installed.
    pub fn resolve<C: Capability + ?Sized>(&self) -> Result<Arc<C>> {
        let name = ModuleName::of::<C>();
        let provider = self
            .modules
            .get(&name)
            .and_then(|provider| provider.downcast_ref::<Arc<C>>());

        match provider {
            Some(provider) => {
                tracing::debug!(module = %name, "resolved optional module");
                Ok(Arc::clone(provider))
            }
            None => {
                tracing::warn!(module = %name, "optional module is not present in this deployment");
                Err(BazError::missing_dependency(name))
            }
        }
    }

    /// Returns true if a provider for `C` is installed.
    #[must_use]
    pub fn provides<C: Capability + ?Sized>(&self) -> bool {
        self.modules
            .get(&ModuleName::of::<C>())
            .is_some_and(|provider| provider.is::<Arc<C>>())
    }

    /// Returns true if a module with this name is installed.
    #[must_use]
    pub fn contains(&self, name: &ModuleName) -> bool {
        self.modules.contains_key(name)
    }

    /// Names of the installed modules, in sorted order.
    pub fn module_names(&self) -> impl Iterator<Item = &ModuleName> {
        self.modules.keys()
    }

    /// Number of installed modules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Returns true if no optional modules are installed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl std::fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.modules.keys()).finish()
    }
}

/// Builder for [`ModuleRegistry`].
#[derive(Default)]
pub struct ModuleRegistryBuilder {
    modules: BTreeMap<ModuleName, Provider>,
}

impl ModuleRegistryBuilder {
    /// Installs `provider` as the module for capability `C`.
    ///
    /// Installing the same capability twice keeps the last provider.
    #[must_use]
    pub fn with<C: Capability + ?Sized>(mut self, provider: Arc<C>) -> Self {
        let name = ModuleName::of::<C>();
        if self.modules.insert(name.clone(), Box::new(provider)).is_some() {
            tracing::warn!(module = %name, "replacing previously installed module");
        }
        self
    }

    /// Removes the module with this name, if installed.
    #[must_use]
    pub fn without(mut self, name: &ModuleName) -> Self {
        if self.modules.remove(name).is_some() {
            tracing::debug!(module = %name, "removed optional module");
        }
        self
    }

    /// Finishes the registry.
    #[must_use]
    pub fn build(self) -> ModuleRegistry {
        tracing::debug!(modules = self.modules.len(), "built module registry");
        ModuleRegistry {
            modules: self.modules,
        }
    }
}

impl std::fmt::Debug for ModuleRegistryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.modules.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Bar;

    struct AlwaysBar(bool);

    impl Bar for AlwaysBar {
        fn bar_true(&self) -> bool {
            self.0
        }
    }

    fn bar_name() -> ModuleName {
        ModuleName::parse("com.example.bar.Bar").unwrap()
    }

    #[test]
    fn test_empty_registry_reports_missing_dependency() {
        let registry = ModuleRegistry::empty();
        assert!(registry.is_empty());

        let err = registry.resolve::<dyn Bar>().err().unwrap();
        assert!(err.is_missing_dependency());
        assert_eq!(err.missing_module(), Some(&bar_name()));
    }

    #[test]
    fn test_resolve_installed_provider() {
        let registry = ModuleRegistry::builder()
            .with::<dyn Bar>(Arc::new(AlwaysBar(true)))
            .build();

        assert_eq!(registry.len(), 1);
        assert!(registry.provides::<dyn Bar>());
        assert!(registry.contains(&bar_name()));
        assert!(registry.resolve::<dyn Bar>().unwrap().bar_true());
    }

    #[test]
    fn test_last_installed_provider_wins() {
        let registry = ModuleRegistry::builder()
            .with::<dyn Bar>(Arc::new(AlwaysBar(true)))
            .with::<dyn Bar>(Arc::new(AlwaysBar(false)))
            .build();

        assert_eq!(registry.len(), 1);
        assert!(!registry.resolve::<dyn Bar>().unwrap().bar_true());
    }

    #[test]
    fn test_without_removes_module() {
        let registry = ModuleRegistry::builder()
            .with::<dyn Bar>(Arc::new(AlwaysBar(true)))
            .without(&bar_name())
            .build();

        assert!(registry.is_empty());
        assert!(!registry.provides::<dyn Bar>());
        assert!(registry.resolve::<dyn Bar>().is_err());
    }

    #[test]
    fn test_without_unknown_module_is_noop() {
        let registry = ModuleRegistry::builder()
            .with::<dyn Bar>(Arc::new(AlwaysBar(true)))
            .without(&ModuleName::parse("com.example.qux.Qux").unwrap())
            .build();

        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_module_names_and_debug() {
        let registry = ModuleRegistry::builder()
            .with::<dyn Bar>(Arc::new(AlwaysBar(true)))
            .build();

        let names: Vec<_> = registry.module_names().map(ModuleName::as_str).collect();
        assert_eq!(names, vec!["com.example.bar.Bar"]);
        assert_eq!(format!("{registry:?}"), r#"{ModuleName("com.example.bar.Bar")}"#);
    }
}

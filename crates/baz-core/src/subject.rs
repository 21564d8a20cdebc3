//! The [`Baz`] subject.

use std::sync::Arc;

use crate::capability::Bar;
use crate::error::Result;
use crate::registry::ModuleRegistry;

/// Value object exposing three boolean queries.
///
/// `baz_true` and `foo_true` need nothing beyond the object itself.
/// `bar_true` needs the optional `com.example.bar.Bar` module, which is
/// looked up in the registry at call time. Construction therefore never
/// fails; only the call that needs the absent module does.
#[derive(Debug, Clone, Default)]
pub struct Baz {
    modules: Arc<ModuleRegistry>,
}

impl Baz {
    /// Creates a subject with no optional modules installed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a subject resolving optional modules from `modules`.
    #[must_use]
    pub fn with_registry(modules: Arc<ModuleRegistry>) -> Self {
        Self { modules }
    }

    /// Always `true`.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn baz_true(&self) -> bool {
        true
    }

    /// Always `true`.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn foo_true(&self) -> bool {
        true
    }

    /// Answers the `bar` query through the optional `com.example.bar.Bar`
    /// module.
    ///
    /// # Errors
    /// Returns [`BazError::MissingDependency`](crate::BazError::MissingDependency)
    /// naming `com.example.bar.Bar` if the module is absent from this
    /// deployment.
    pub fn bar_true(&self) -> Result<bool> {
        let bar = self.modules.resolve::<dyn Bar>()?;
        Ok(bar.bar_true())
    }

    /// Returns true if `bar_true` can reach its module.
    #[must_use]
    pub fn has_bar(&self) -> bool {
        self.modules.provides::<dyn Bar>()
    }

    /// Registry this subject resolves optional modules from.
    #[must_use]
    pub fn modules(&self) -> &ModuleRegistry {
        &self.modules
    }
}

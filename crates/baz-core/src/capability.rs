//! Optional module interfaces.
//!
//! A [`Capability`] is the interface of a module that a deployment may or may
//! not carry. Interfaces are trait objects (`dyn Bar`); providers live in
//! their own crates and are installed into a
//! [`ModuleRegistry`](crate::registry::ModuleRegistry) when the deployment is
//! assembled.

/// Interface of an optional module, identified by its fully-qualified name.
pub trait Capability: Send + Sync + 'static {
    /// Fully-qualified module name, e.g. `com.example.bar.Bar`.
    const NAME: &'static str;
}

/// Interface of the optional `com.example.bar.Bar` module.
pub trait Bar: Send + Sync {
    /// Returns the module's answer to the `bar` query.
    fn bar_true(&self) -> bool;
}

impl Capability for dyn Bar {
    const NAME: &'static str = "com.example.bar.Bar";
}

const _: () = assert!(crate::types::ModuleName::is_valid(<dyn Bar as Capability>::NAME));

// Demos are allowed to use expect/unwrap for simplicity
#![allow(clippy::expect_used, clippy::unwrap_used)]

//! Baz Example
//!
//! Deploys a Baz and runs its three queries.
//!
//! # Usage
//!
//! ```bash
//! # Without the optional module: bar reports a missing dependency
//! cargo run --example baz
//!
//! # With com.example.bar.Bar linked in
//! cargo run --example baz --features bar
//!
//! # With a deployment config
//! cargo run --example baz --features bar -- deployment.toml
//! ```

use baz::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => DeploymentConfig::load(&path).expect("failed to load deployment config"),
        None => DeploymentConfig::default(),
    };

    let linked: Vec<_> = baz::linked_modules().iter().map(ToString::to_string).collect();
    tracing::info!(linked = ?linked, "optional modules linked into this build");

    let baz = baz::deploy(&config).expect("invalid deployment config");

    println!("baz_true: {}", baz.baz_true());
    println!("foo_true: {}", baz.foo_true());
    match baz.bar_true() {
        Ok(answer) => println!("bar_true: {answer}"),
        Err(BazError::MissingDependency { module }) => {
            println!("bar_true: unavailable ({module} is not part of this deployment)");
        }
        Err(e) => println!("bar_true: failed ({e})"),
    }
}

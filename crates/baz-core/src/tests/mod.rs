//! Behaviour tests for the Baz subject.
//!
//! | Suite | Covers |
//! |-------|--------|
//! | `subject` | The three queries on a fresh subject |
//! | `optional` | Deferred resolution of `com.example.bar.Bar` |

pub mod mocks;

pub use mocks::MockBar;

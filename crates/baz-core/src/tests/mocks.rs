//! Mock implementations for testing.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use crate::capability::Bar;
use crate::registry::ModuleRegistry;
use crate::subject::Baz;

/// Mock `com.example.bar.Bar` provider.
///
/// Answers with a configurable value and counts how often it was asked.
pub struct MockBar {
    answer: AtomicBool,
    calls: AtomicU32,
}

impl MockBar {
    /// Creates a mock answering `true`.
    pub fn new() -> Arc<Self> {
        Self::answering(true)
    }

    /// Creates a mock answering `answer`.
    pub fn answering(answer: bool) -> Arc<Self> {
        Arc::new(Self {
            answer: AtomicBool::new(answer),
            calls: AtomicU32::new(0),
        })
    }

    /// Changes the answer for subsequent calls.
    pub fn set_answer(&self, answer: bool) {
        self.answer.store(answer, Ordering::SeqCst);
    }

    /// Number of `bar_true` calls received.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Bar for MockBar {
    fn bar_true(&self) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.load(Ordering::SeqCst)
    }
}

/// Builds a subject whose registry carries `bar`.
pub fn baz_with(bar: &Arc<MockBar>) -> Baz {
    let provider: Arc<dyn Bar> = Arc::clone(bar) as Arc<dyn Bar>;
    let registry = ModuleRegistry::builder().with::<dyn Bar>(provider).build();
    Baz::with_registry(Arc::new(registry))
}

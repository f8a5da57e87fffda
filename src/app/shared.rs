//! Thread-sicherer Zugriff auf eine gemeinsam genutzte Engine.

use std::sync::{Arc, Mutex, MutexGuard};

use super::SelectionEngine;
use crate::core::{GeometryEngine, PlanarGeometryEngine};

/// Teilbares Handle auf eine [`SelectionEngine`].
///
/// Jeder Einstiegspunkt läuft unter einem einzigen Lock; Operationen
/// verschiedener Threads werden dadurch serialisiert.
#[derive(Debug)]
pub struct SharedSelectionEngine<G = PlanarGeometryEngine> {
    inner: Arc<Mutex<SelectionEngine<G>>>,
}

impl<G> Clone for SharedSelectionEngine<G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<G: GeometryEngine> SharedSelectionEngine<G> {
    pub fn new(engine: SelectionEngine<G>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Führt `f` unter dem Lock aus.
    pub fn with<R>(&self, f: impl FnOnce(&mut SelectionEngine<G>) -> R) -> R {
        let mut guard = self.lock();
        f(&mut guard)
    }

    /// Sperrt die Engine. Ein vergifteter Lock wird übernommen statt zu paniken.
    pub fn lock(&self) -> MutexGuard<'_, SelectionEngine<G>> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            log::warn!("Engine-Lock war vergiftet, Zustand wird übernommen");
            poisoned.into_inner()
        })
    }
}

impl<G: GeometryEngine> From<SelectionEngine<G>> for SharedSelectionEngine<G> {
    fn from(engine: SelectionEngine<G>) -> Self {
        Self::new(engine)
    }
}

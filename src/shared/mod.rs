//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die Engine, Persistenz und CLI gemeinsam nutzen.

pub mod options;

pub use options::EngineOptions;
pub use options::{HISTORY_DEPTH, LINE_BUFFER_DISTANCE};

//! Engine State — zentrale Datenhaltung einer Selektions-Sitzung.

mod engine_state;
mod selection;

pub use engine_state::EngineState;
pub use selection::SelectionState;

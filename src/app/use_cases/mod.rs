//! Use-Cases der Engine-Orchestrierung.

pub mod exclusion;
pub mod history;
pub mod selection;

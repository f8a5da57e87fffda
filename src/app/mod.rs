//! Application-Layer: Engine, Controller, State, Commands und Use-Cases.

pub mod command_log;
pub mod command_parse;
pub mod controller;
pub mod engine;
pub mod events;
pub mod history;
pub mod shared;
/// Engine-Zustand
///
/// Punktmenge, Selektion, Undo-Verlauf und Optionen einer Sitzung.
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use command_parse::parse_command;
pub use controller::SelectionController;
pub use engine::SelectionEngine;
pub use events::EngineCommand;
pub use history::{ExclusionChange, MembershipChange, UndoEntry, UndoStack};
pub use shared::SharedSelectionEngine;
pub use state::{EngineState, SelectionState};
pub use use_cases::selection::SelectionOutcome;

//! Commands für den Command-Datenfluss zwischen Host und Engine.

mod command;

pub use command::EngineCommand;

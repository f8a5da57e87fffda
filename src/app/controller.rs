//! Controller für zentrale Command-Verarbeitung.

use super::{CommandLog, EngineCommand, SelectionEngine};
use crate::core::GeometryEngine;
use crate::persistence;

/// Führt Commands des Hosts auf einer Engine aus und protokolliert sie.
#[derive(Debug, Default)]
pub struct SelectionController {
    command_log: CommandLog,
}

impl SelectionController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Führt einen mutierenden Command auf der Engine aus.
    ///
    /// Nur Datei-Commands können fehlschlagen; Selektions-Commands sind
    /// immer erfolgreich (ggf. ohne Wirkung).
    pub fn handle_command<G: GeometryEngine>(
        &mut self,
        engine: &mut SelectionEngine<G>,
        command: EngineCommand,
    ) -> anyhow::Result<()> {
        self.command_log.record(&command);

        match command {
            // === Selektion ===
            EngineCommand::SelectByGeometry {
                geometry,
                buffer_distance,
            } => {
                engine.select_by_geometry(&geometry, buffer_distance);
            }
            EngineCommand::SelectByTap { point_id } => {
                engine.select_by_tap(point_id);
            }
            EngineCommand::SelectNearest {
                position,
                frame,
                max_distance,
            } => {
                if engine.select_nearest(position, frame, max_distance).is_none() {
                    log::debug!("Kein Punkt im Radius {} um {:?}", max_distance, position);
                }
            }
            EngineCommand::SelectAll => engine.select_all(),
            EngineCommand::ClearAll => engine.clear_all(),

            // === Ausschluss & Verlauf ===
            EngineCommand::SetExcluded { point_id, excluded } => {
                engine.set_excluded(point_id, excluded);
            }
            EngineCommand::Undo => {
                engine.undo();
            }

            // === Datei-I/O ===
            EngineCommand::LoadPoints { path } => {
                let store = persistence::load_points_from_file(&path)?;
                engine.replace_points(store);
            }
            EngineCommand::SavePoints { path } => {
                persistence::save_points_to_file(engine.points(), &path)?;
            }
        }

        Ok(())
    }

    /// Bisher ausgeführte Commands.
    pub fn command_log(&self) -> &CommandLog {
        &self.command_log
    }
}

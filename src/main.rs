//! Map Point Select (CLI).
//!
//! Lädt oder erzeugt die Punktmenge, wendet Selektions-Befehle der Reihe nach
//! an und gibt die resultierende Selektion aus.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use map_point_select::app::parse_command;
use map_point_select::{
    load_or_generate, save_points_to_file, CoordinateFrame, EngineOptions, SelectionController,
    SelectionEngine,
};

/// Kartenpunkte per Form, Tippen und Ausschluss selektieren.
#[derive(Debug, Parser)]
#[command(name = "map-point-select", version, about)]
struct Cli {
    /// Optionen-Datei (Standard: map_point_select.toml neben der Binary)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Punktdatei (überschreibt `points_file` aus den Optionen)
    #[arg(long)]
    points: Option<PathBuf>,

    /// Koordinatensystem der Formen (wgs84, web-mercator, local-N)
    #[arg(long, default_value = "wgs84")]
    frame: CoordinateFrame,

    /// Korridorbreite in Metern für Linien ohne `@abstand`
    #[arg(long)]
    line_buffer: Option<f64>,

    /// Punktmenge nach den Befehlen zurückschreiben
    #[arg(long)]
    save: bool,

    /// Befehle, z.B. `rect:-2.72,56.05,-2.70,56.07` `tap:3` `exclude:5` `undo`
    commands: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Map Point Select v{} startet...", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = cli.config.clone().unwrap_or_else(EngineOptions::config_path);
    let mut options = EngineOptions::load_from_file(&config_path);
    if let Some(distance) = cli.line_buffer {
        options.line_buffer_distance = distance;
    }

    // Befehle vor jedem Dateizugriff prüfen
    let commands = cli
        .commands
        .iter()
        .map(|token| parse_command(token, cli.frame, options.tap_radius))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let points_path = cli
        .points
        .clone()
        .unwrap_or_else(|| PathBuf::from(&options.points_file));
    let store = load_or_generate(&points_path, &options);

    let mut engine = SelectionEngine::new(store, options);
    let mut controller = SelectionController::new();
    for command in commands {
        if let Err(e) = controller.handle_command(&mut engine, command) {
            log::error!("Befehl fehlgeschlagen: {:#}", e);
        }
    }

    if cli.save {
        save_points_to_file(engine.points(), &points_path)
            .with_context(|| format!("Speichern nach {} fehlgeschlagen", points_path.display()))?;
    }

    for id in engine.ordered_selection() {
        let name = engine
            .point(id)
            .and_then(|p| p.name.as_deref())
            .unwrap_or("-");
        println!("{id}\t{name}");
    }
    log::info!(
        "{} von {} Punkten selektiert, {} ausgeschlossen, Undo-Tiefe {}",
        engine.selected_count(),
        engine.points().len(),
        engine.points().excluded_ids().count(),
        engine.undo_depth()
    );

    Ok(())
}

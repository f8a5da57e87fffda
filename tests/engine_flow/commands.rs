use glam::DVec2;
use map_point_select::app::parse_command;
use map_point_select::{CoordinateFrame, EngineCommand, SelectionController, SharedSelectionEngine};

use super::common::{ids, scenario_engine, LOCAL};

#[test]
fn test_controller_applies_parsed_commands_in_order() {
    let mut engine = scenario_engine();
    let mut controller = SelectionController::new();

    for token in ["rect:-1,-1,10,10", "exclude:1", "tap:2", "undo"] {
        let command = parse_command(token, LOCAL, 1.0).expect("gültiger Befehl");
        controller
            .handle_command(&mut engine, command)
            .expect("Selektions-Befehle schlagen nie fehl");
    }

    assert_eq!(engine.current_selection(), &ids(&[0]));
    assert!(engine.is_excluded(1));
    assert_eq!(controller.command_log().len(), 4);
    assert_eq!(
        controller.command_log().entries().last().map(String::as_str),
        Some("Undo")
    );
}

#[test]
fn test_controller_scenario_with_exclusion_and_select_all() {
    let mut engine = scenario_engine();
    let mut controller = SelectionController::new();

    let commands = vec![
        EngineCommand::SetExcluded {
            point_id: 2,
            excluded: true,
        },
        EngineCommand::SelectAll,
        EngineCommand::SelectNearest {
            position: DVec2::new(0.2, 0.1),
            frame: LOCAL,
            max_distance: 1.0,
        },
    ];
    for command in commands {
        controller
            .handle_command(&mut engine, command)
            .expect("Befehl erwartet erfolgreich");
    }

    assert_eq!(engine.current_selection(), &ids(&[1]));
    assert_eq!(engine.undo_depth(), 1);
}

#[test]
fn test_shared_engine_serializes_access() {
    let shared = SharedSelectionEngine::new(scenario_engine());
    let worker = shared.clone();

    std::thread::spawn(move || {
        worker.with(|engine| {
            engine.select_by_tap(0);
            engine.select_by_tap(1);
        })
    })
    .join()
    .expect("Worker darf nicht paniken");

    shared.with(|engine| {
        assert_eq!(engine.current_selection(), &ids(&[0, 1]));
        assert!(engine.undo());
        assert_eq!(engine.current_selection(), &ids(&[0]));
    });
}

#[test]
fn test_frame_names_parse() {
    assert_eq!("wgs84".parse::<CoordinateFrame>().ok(), Some(CoordinateFrame::Wgs84));
    assert_eq!(
        "EPSG:3857".parse::<CoordinateFrame>().ok(),
        Some(CoordinateFrame::WebMercator)
    );
    assert_eq!(
        "local-4".parse::<CoordinateFrame>().ok(),
        Some(CoordinateFrame::Local(4))
    );
    assert!("utm".parse::<CoordinateFrame>().is_err());
}

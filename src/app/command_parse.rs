//! Textform von Commands für die Kommandozeile.
//!
//! Syntax je Token:
//! - `rect:minx,miny,maxx,maxy`
//! - `lasso:x1,y1;x2,y2;...`
//! - `line:x1,y1;x2,y2;...[@abstand]`
//! - `ellipse:cx,cy,rx,ry[,drehung_grad]`
//! - `shape:<Geometry-JSON>`
//! - `tap:id`, `near:x,y`, `exclude:id`, `include:id`
//! - `all`, `clear`, `undo`, `load:pfad`, `save:pfad`

use anyhow::{bail, Context, Result};
use glam::DVec2;

use super::EngineCommand;
use crate::core::{CoordinateFrame, Geometry, Shape};

fn parse_numbers(text: &str) -> Result<Vec<f64>> {
    text.split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .with_context(|| format!("Keine Zahl: '{}'", part.trim()))
        })
        .collect()
}

fn parse_vertex(text: &str) -> Result<DVec2> {
    match parse_numbers(text)?.as_slice() {
        [x, y] => Ok(DVec2::new(*x, *y)),
        _ => bail!("Punkt erwartet als x,y: '{}'", text),
    }
}

fn parse_path(text: &str) -> Result<Vec<DVec2>> {
    let path = text
        .split(';')
        .filter(|part| !part.trim().is_empty())
        .map(parse_vertex)
        .collect::<Result<Vec<_>>>()?;
    if path.is_empty() {
        bail!("Mindestens ein Punkt erwartet");
    }
    Ok(path)
}

fn parse_id(text: &str) -> Result<u64> {
    text.trim()
        .parse()
        .with_context(|| format!("Ungültige Punkt-ID: '{}'", text.trim()))
}

fn geometry_command(geometry: Geometry, buffer_distance: Option<f64>) -> EngineCommand {
    EngineCommand::SelectByGeometry {
        geometry,
        buffer_distance,
    }
}

/// Übersetzt ein Token in einen Command.
///
/// Formen liegen in `frame`; `near:` sucht im Radius `tap_radius`.
pub fn parse_command(token: &str, frame: CoordinateFrame, tap_radius: f64) -> Result<EngineCommand> {
    let token = token.trim();
    let (verb, args) = token.split_once(':').unwrap_or((token, ""));

    let command = match verb.to_ascii_lowercase().as_str() {
        "all" => EngineCommand::SelectAll,
        "clear" => EngineCommand::ClearAll,
        "undo" => EngineCommand::Undo,
        "tap" => EngineCommand::SelectByTap {
            point_id: parse_id(args)?,
        },
        "exclude" => EngineCommand::SetExcluded {
            point_id: parse_id(args)?,
            excluded: true,
        },
        "include" => EngineCommand::SetExcluded {
            point_id: parse_id(args)?,
            excluded: false,
        },
        "near" => EngineCommand::SelectNearest {
            position: parse_vertex(args)?,
            frame,
            max_distance: tap_radius,
        },
        "rect" => match parse_numbers(args)?.as_slice() {
            [min_x, min_y, max_x, max_y] => geometry_command(
                Geometry::rectangle(
                    frame,
                    DVec2::new(*min_x, *min_y),
                    DVec2::new(*max_x, *max_y),
                ),
                None,
            ),
            _ => bail!("rect erwartet minx,miny,maxx,maxy"),
        },
        "lasso" => geometry_command(Geometry::polygon(frame, parse_path(args)?), None),
        "line" => {
            let (path, distance) = match args.rsplit_once('@') {
                Some((path, distance)) => (
                    path,
                    Some(
                        distance
                            .trim()
                            .parse::<f64>()
                            .with_context(|| format!("Ungültiger Abstand: '{}'", distance))?,
                    ),
                ),
                None => (args, None),
            };
            geometry_command(Geometry::polyline(frame, parse_path(path)?), distance)
        }
        "ellipse" => {
            let numbers = parse_numbers(args)?;
            let (center, radii, rotation_deg) = match numbers.as_slice() {
                [cx, cy, rx, ry] => (DVec2::new(*cx, *cy), DVec2::new(*rx, *ry), 0.0),
                [cx, cy, rx, ry, rot] => (DVec2::new(*cx, *cy), DVec2::new(*rx, *ry), *rot),
                _ => bail!("ellipse erwartet cx,cy,rx,ry[,drehung]"),
            };
            geometry_command(
                Geometry {
                    frame,
                    shape: Shape::Ellipse {
                        center,
                        radii,
                        rotation: rotation_deg.to_radians(),
                    },
                },
                None,
            )
        }
        "shape" => {
            let geometry: Geometry =
                serde_json::from_str(args).context("Ungültige Geometrie (JSON)")?;
            geometry_command(geometry, None)
        }
        "load" if !args.is_empty() => EngineCommand::LoadPoints { path: args.into() },
        "save" if !args.is_empty() => EngineCommand::SavePoints { path: args.into() },
        _ => bail!("Unbekannter Befehl: '{}'", token),
    };
    Ok(command)
}

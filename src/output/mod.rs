//! Rendering planned flights as JSON or GeoJSON.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use serde_json::{Value, json};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::domain::Position;

pub const PATH_DESCRIPTION: &str = "Drone path from restaurant to Appleton Tower";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Array of {"lng", "lat"} objects
    #[default]
    Json,
    /// FeatureCollection with one LineString
    Geojson,
}

/// Waypoints as a plain JSON array
pub fn to_json(waypoints: &[Position]) -> Value {
    json!(waypoints)
}

/// Waypoints as a GeoJSON FeatureCollection holding a single LineString
pub fn to_geojson(waypoints: &[Position]) -> Value {
    let coordinates: Vec<[f64; 2]> = waypoints.iter().map(|p| [p.lng, p.lat]).collect();

    json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": {
                "type": "LineString",
                "coordinates": coordinates,
            },
            "properties": {
                "description": PATH_DESCRIPTION,
            },
        }],
    })
}

pub fn render(waypoints: &[Position], format: OutputFormat) -> Result<String> {
    let value = match format {
        OutputFormat::Json => to_json(waypoints),
        OutputFormat::Geojson => to_geojson(waypoints),
    };
    serde_json::to_string_pretty(&value).context("Failed to serialize flight path")
}

/// Write `body` to `output`, or to stdout when no file is given
pub fn write_output(body: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => fs::write(path, format!("{}\n", body))
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", body).context("Failed to write to stdout")
        }
    }
}

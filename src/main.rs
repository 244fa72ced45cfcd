use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;

use dronepath::api::{RestClient, load_catalog};
use dronepath::config::{ApiConfig, FileConfig};
use dronepath::delivery::plan_delivery;
use dronepath::domain::{Catalog, NamedRegion, Order, Position};
use dronepath::geometry::{distance, is_close_to, is_inside, next_position, validate_position};
use dronepath::orders::validate_order;
use dronepath::output::{OutputFormat, render, write_output};

/// Plan pizza delivery drone flights around no-fly zones
///
/// Examples:
///   # Plan an order against the live REST service
///   dronepath path --order order.json
///
///   # Plan against a local snapshot and write GeoJSON
///   dronepath path --order order.json --data-dir snapshot/ --format geojson -o path.geojson
///
///   # Check an order without planning
///   dronepath validate --order order.json --date 2025-01-20
///
///   # One move north-east of Appleton Tower
///   dronepath next-position -3.186874 55.944494 45
#[derive(Parser, Debug)]
#[command(name = "dronepath")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches dronepath.toml if not provided)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate an order and plan its delivery flight
    Path {
        /// Order JSON file
        #[arg(long)]
        order: PathBuf,

        /// Directory with restaurants.json, noFlyZones.json and optionally
        /// centralArea.json (defaults to the REST service)
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Date used for the card expiry check (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Give up after expanding this many search nodes
        #[arg(long)]
        max_expansions: Option<usize>,
    },

    /// Validate an order and print the result as JSON
    Validate {
        /// Order JSON file
        #[arg(long)]
        order: PathBuf,

        /// Directory holding the catalog snapshot
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Date used for the card expiry check (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Euclidean distance between two positions, in degrees
    Distance {
        #[arg(allow_negative_numbers = true)]
        lng1: f64,
        #[arg(allow_negative_numbers = true)]
        lat1: f64,
        #[arg(allow_negative_numbers = true)]
        lng2: f64,
        #[arg(allow_negative_numbers = true)]
        lat2: f64,
    },

    /// Whether two positions are within 0.00015 degrees of each other
    CloseTo {
        #[arg(allow_negative_numbers = true)]
        lng1: f64,
        #[arg(allow_negative_numbers = true)]
        lat1: f64,
        #[arg(allow_negative_numbers = true)]
        lng2: f64,
        #[arg(allow_negative_numbers = true)]
        lat2: f64,
    },

    /// Position after one move at the given angle (degrees, counter-clockwise from east)
    NextPosition {
        #[arg(allow_negative_numbers = true)]
        lng: f64,
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        angle: f64,
    },

    /// Whether a position lies inside (or on the edge of) a region
    InRegion {
        /// Region JSON file ({"name", "vertices"})
        #[arg(long)]
        region: PathBuf,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
        #[arg(allow_negative_numbers = true)]
        lat: f64,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let file_config = FileConfig::resolve(args.config.as_deref())?;

    init_logger(args.verbose || file_config.verbose);

    match args.command {
        Command::Path {
            order,
            data_dir,
            format,
            output,
            date,
            max_expansions,
        } => {
            let data_dir = data_dir.or_else(|| file_config.data_dir.clone());
            let format = format.unwrap_or(file_config.format);
            run_path(
                &file_config,
                &order,
                data_dir.as_deref(),
                format,
                output.as_deref(),
                date,
                max_expansions,
            )
        }
        Command::Validate {
            order,
            data_dir,
            date,
        } => {
            let data_dir = data_dir.or_else(|| file_config.data_dir.clone());
            let order = read_order(&order)?;
            let catalog = acquire_catalog(data_dir.as_deref(), &file_config.api)?;
            let result = validate_order(&order, &catalog, date.unwrap_or_else(today));
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        Command::Distance {
            lng1,
            lat1,
            lng2,
            lat2,
        } => {
            let d = distance(&Position::new(lng1, lat1), &Position::new(lng2, lat2))?;
            println!("{}", d);
            Ok(())
        }
        Command::CloseTo {
            lng1,
            lat1,
            lng2,
            lat2,
        } => {
            let close = is_close_to(&Position::new(lng1, lat1), &Position::new(lng2, lat2))?;
            println!("{}", close);
            Ok(())
        }
        Command::NextPosition { lng, lat, angle } => {
            let next = next_position(&Position::new(lng, lat), angle)?;
            println!("{}", serde_json::to_string_pretty(&next)?);
            Ok(())
        }
        Command::InRegion { region, lng, lat } => {
            let contents = std::fs::read_to_string(&region)
                .with_context(|| format!("Failed to read region file: {:?}", region))?;
            let region: NamedRegion =
                serde_json::from_str(&contents).context("Failed to parse region file")?;
            region.validate()?;

            let point = Position::new(lng, lat);
            validate_position(&point)?;
            println!("{}", is_inside(&point, &region.vertices));
            Ok(())
        }
    }
}

fn run_path(
    file_config: &FileConfig,
    order_path: &Path,
    data_dir: Option<&Path>,
    format: OutputFormat,
    output: Option<&Path>,
    date: Option<NaiveDate>,
    max_expansions: Option<usize>,
) -> Result<()> {
    let total_start = Instant::now();

    let order = read_order(order_path)?;
    let catalog = acquire_catalog(data_dir, &file_config.api)?;

    let mut planner_config = file_config.planner.clone();
    if let Some(limit) = max_expansions {
        planner_config.max_expansions = limit;
    }

    let spinner = create_spinner("Planning flight path...");
    let start = Instant::now();
    let path = match plan_delivery(
        &order,
        &catalog,
        date.unwrap_or_else(today),
        &planner_config,
        file_config.destination,
    ) {
        Ok(path) => path,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e).context("Failed to plan delivery");
        }
    };
    spinner.finish_with_message(format!(
        "Planned {} moves ({} nodes expanded) in {:.2?}",
        path.move_count(),
        path.nodes_expanded(),
        start.elapsed()
    ));

    let body = render(&path.into_waypoints(), format)?;
    write_output(&body, output)?;

    if let Some(output) = output {
        eprintln!(
            "Wrote {} in {:.2?}",
            output.display(),
            total_start.elapsed()
        );
    }
    Ok(())
}

fn read_order(path: &Path) -> Result<Order> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read order file: {:?}", path))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse order file: {:?}", path))
}

fn acquire_catalog(data_dir: Option<&Path>, api: &ApiConfig) -> Result<Catalog> {
    let spinner = create_spinner("Loading restaurants and regions...");

    let catalog = match data_dir {
        Some(dir) => load_catalog(dir)
            .with_context(|| format!("Failed to load catalog from {}", dir.display())),
        None => RestClient::new(api)
            .and_then(|client| client.fetch_catalog())
            .with_context(|| format!("Failed to fetch catalog from {}", api.base_url)),
    };

    match catalog {
        Ok(catalog) => {
            spinner.finish_with_message(format!(
                "Loaded {} restaurants, {} no-fly zones",
                catalog.restaurants.len(),
                catalog.no_fly_zones.len()
            ));
            Ok(catalog)
        }
        Err(e) => {
            spinner.finish_and_clear();
            Err(e)
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

//! Compute a refuel plan from a JSON request file.

use anyhow::Context;
use clap::Parser;
use refuel_cli::load_request;
use refuel_core::{plan_route, PriceIndex};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Compute where and how much to refuel along a route
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Request file with route, car and prices
    #[arg(long)]
    input: PathBuf,

    /// Override the request's safety reserve distance in kilometers
    #[arg(long)]
    reservoir: Option<u32>,

    /// Emit the plan as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let request = load_request(&args.input)?;
    let reservoir_km = args.reservoir.unwrap_or(request.reservoir_km);
    let prices = PriceIndex::from_records(&request.prices);

    let plan = plan_route(&request.route, &request.car, reservoir_km, &prices).with_context(
        || {
            format!(
                "planning {} -> {}",
                request.route.origin, request.route.destination
            )
        },
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!(
        "{} -> {} ({:.0} km, reserve {} km)",
        request.route.origin, request.route.destination, request.route.total_distance_km, reservoir_km
    );
    for stop in &plan.stops {
        println!(
            "  #{} {:>8.1} km  {}  {:>5.1} L @ {:.3} EUR/L = {:>7.2} EUR",
            stop.stop_number,
            stop.distance_from_start_km,
            stop.country,
            stop.fuel_to_add_liters,
            stop.price_per_liter_eur,
            stop.cost_eur
        );
    }
    println!(
        "{} stops, {:.2} L consumed, {:.2} EUR total",
        plan.number_of_stops, plan.total_fuel_liters, plan.total_cost_eur
    );
    Ok(())
}

//! Segment a route and report feasibility without computing a plan.

use clap::Parser;
use refuel_cli::load_request;
use refuel_core::{check_feasibility, segment_route, PlanningContext};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Inspect a route's country runs and feasibility for a vehicle
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Request file with route, car and prices
    #[arg(long)]
    input: PathBuf,

    /// Override the request's safety reserve distance in kilometers
    #[arg(long)]
    reservoir: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let request = load_request(&args.input)?;
    let reservoir_km = args.reservoir.unwrap_or(request.reservoir_km);

    let ctx = PlanningContext::new(&request.car, reservoir_km)?;
    let segments = segment_route(&request.route.waypoints)?;

    println!(
        "{} -> {}: {} country runs, max range {:.1} km, safe range {:.1} km",
        request.route.origin,
        request.route.destination,
        segments.len(),
        ctx.max_range_km,
        ctx.safe_range_km
    );
    for segment in &segments {
        println!(
            "  {}  {:>8.1} -> {:>8.1} km  ({:.1} km, {} waypoints)",
            segment.country,
            segment.start_km,
            segment.end_km,
            segment.length_km(),
            segment.waypoints.len()
        );
    }

    let feasibility = check_feasibility(&segments, &ctx)?;
    match &feasibility.warning {
        Some(warning) => println!("feasible with warning: {warning}"),
        None => println!("feasible"),
    }
    println!("at least {} stops expected", feasibility.min_stops_estimate);
    Ok(())
}

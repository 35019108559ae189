//! CLI entry-point for regional (weather + trend) risk scoring.

use anyhow::Result;
use clap::Args as ClapArgs;
use rand::thread_rng;
use tracing::{info, instrument};

use crate::{
    api::types::RiskScoreDto,
    config::Settings,
    context::{trend, weather},
    risk,
};

/// Args for the `outlook` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// City to fetch weather and case trends for.
    #[arg(long)]
    pub city: String,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let observation = weather::current_weather_or_default(&settings, &args.city).await;
    info!(
        city = %observation.city,
        temp = observation.temperature_celsius,
        humidity = observation.humidity_percent,
        condition = %observation.condition,
        "weather observation"
    );

    let trends = trend::sample_trends(&mut thread_rng(), &args.city);
    let scores = risk::assess_with_context(&observation, &trends);

    let report: Vec<RiskScoreDto> = scores.values().map(RiskScoreDto::from).collect();
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

//! `report` command: route metrics as a text table or JSON.

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use deliverynet_core::{
    MetricsError, MetricsParameters, Network, RouteMetrics, RouteMetricsEvaluator,
};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::network::{load_network, select_route};
use crate::{
    ARG_AVG_SPEED, ARG_DEPOT, ARG_FORMAT, ARG_FUEL_EFFICIENCY, ARG_NETWORK, ARG_ROUTE, CliError,
};

/// Output format of the `report` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ReportFormat {
    /// Aligned, human-readable rows.
    #[default]
    Text,
    /// The metrics as a JSON object.
    Json,
}

/// CLI arguments for the `report` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "report",
    long_about = "Evaluate one route of a delivery network and report its \
                 total travel time, estimated distance, estimated fuel use \
                 and delivery count. Without --network the built-in Cali \
                 sample is used. Values can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Report metrics for a delivery route"
)]
#[ortho_config(prefix = "DELIVERYNET")]
pub(crate) struct ReportArgs {
    /// Path to a JSON network document.
    #[arg(long = ARG_NETWORK, value_name = "path")]
    #[serde(default)]
    pub(crate) network: Option<Utf8PathBuf>,
    /// Name of the route to evaluate. Defaults to the first declared route.
    #[arg(long = ARG_ROUTE, value_name = "name")]
    #[serde(default)]
    pub(crate) route: Option<String>,
    /// Location excluded from the delivery count. Defaults to the network depot.
    #[arg(long = ARG_DEPOT, value_name = "id")]
    #[serde(default)]
    pub(crate) depot: Option<String>,
    /// Average speed in kilometres per minute (default 0.5).
    #[arg(long = ARG_AVG_SPEED, value_name = "km_per_min")]
    #[serde(default)]
    pub(crate) avg_speed: Option<f64>,
    /// Fuel efficiency in kilometres per litre (default 10).
    #[arg(long = ARG_FUEL_EFFICIENCY, value_name = "km_per_litre")]
    #[serde(default)]
    pub(crate) fuel_efficiency: Option<f64>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<ReportFormat>,
}

impl ReportArgs {
    pub(crate) fn into_config(self) -> Result<ReportConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(ReportConfig::from(merged))
    }
}

/// Resolved `report` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ReportConfig {
    /// Network document, or `None` for the sample network.
    pub(crate) network: Option<Utf8PathBuf>,
    /// Route name, or `None` for the first declared route.
    pub(crate) route: Option<String>,
    /// Depot override.
    pub(crate) depot: Option<String>,
    /// Tuning parameters with defaults filled in.
    pub(crate) parameters: MetricsParameters,
    /// Output format.
    pub(crate) format: ReportFormat,
}

impl From<ReportArgs> for ReportConfig {
    fn from(args: ReportArgs) -> Self {
        let defaults = MetricsParameters::default();
        Self {
            network: args.network,
            route: args.route,
            depot: args.depot,
            parameters: MetricsParameters {
                avg_speed_km_per_min: args.avg_speed.unwrap_or(defaults.avg_speed_km_per_min),
                fuel_efficiency_km_per_liter: args
                    .fuel_efficiency
                    .unwrap_or(defaults.fuel_efficiency_km_per_liter),
            },
            format: args.format.unwrap_or_default(),
        }
    }
}

pub(super) fn run_report(args: ReportArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_report_with(args, &mut stdout)
}

pub(super) fn run_report_with(args: ReportArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let network = load_network(config.network.as_deref())?;
    let named = select_route(&network, config.route.as_deref())?;
    let depot = resolve_depot(&network, config.depot)?;
    let outcome = RouteMetricsEvaluator::new(config.parameters).evaluate(
        &network.graph,
        &named.route,
        &depot,
    );
    let payload = match config.format {
        ReportFormat::Text => render_text(&named.name, &depot, &outcome),
        ReportFormat::Json => render_json(&outcome)?,
    };
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteReport)
}

fn resolve_depot(network: &Network, depot: Option<String>) -> Result<String, CliError> {
    match depot {
        None => Ok(network.depot.clone()),
        Some(depot) if network.graph.location(&depot).is_some() => Ok(depot),
        Some(depot) => Err(CliError::UnknownDepot { depot }),
    }
}

pub(crate) fn render_text(
    route: &str,
    depot: &str,
    outcome: &Result<RouteMetrics, MetricsError>,
) -> String {
    let mut lines = vec![format!("Route: {route}"), format!("Depot: {depot}")];
    match outcome {
        Ok(metrics) => lines.extend([
            row("Total time", format!("{} minutes", format_minutes(metrics.total_time_minutes))),
            row("Estimated distance", format!("{:.2} km", metrics.distance_km)),
            row("Estimated fuel", format!("{:.2} litres", metrics.fuel_liters)),
            row("Deliveries", metrics.delivery_count.to_string()),
        ]),
        Err(err) => lines.push(format!("Route metrics unavailable: {err}")),
    }
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

#[derive(Serialize)]
#[serde(untagged)]
enum JsonReport<'a> {
    Metrics(&'a RouteMetrics),
    Failure { error: String },
}

pub(crate) fn render_json(outcome: &Result<RouteMetrics, MetricsError>) -> Result<String, CliError> {
    let report = match outcome {
        Ok(metrics) => JsonReport::Metrics(metrics),
        Err(err) => JsonReport::Failure {
            error: err.to_string(),
        },
    };
    let mut payload = serde_json::to_string_pretty(&report).map_err(CliError::SerialiseReport)?;
    payload.push('\n');
    Ok(payload)
}

fn row(label: &str, value: String) -> String {
    format!("{label:<20}{value}")
}

fn format_minutes(minutes: f64) -> String {
    if minutes.fract() == 0.0 {
        format!("{minutes:.0}")
    } else {
        format!("{minutes:.2}")
    }
}

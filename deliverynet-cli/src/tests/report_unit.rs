//! Focused unit tests covering report configuration and formatting.

use super::helpers::{SMALL_NETWORK, Workspace};
use super::*;
use deliverynet_core::{MetricsError, MetricsParameters, RouteMetrics, sample};
use crate::report::{ReportConfig, ReportFormat, render_json, render_text, run_report_with};
use rstest::{fixture, rstest};

#[fixture]
fn example_metrics() -> RouteMetrics {
    RouteMetrics {
        total_time_minutes: 64.0,
        distance_km: 32.0,
        fuel_liters: 3.2,
        delivery_count: 3,
    }
}

fn run_to_string(args: ReportArgs) -> Result<String, CliError> {
    let mut buffer = Vec::new();
    run_report_with(args, &mut buffer)?;
    Ok(String::from_utf8(buffer).expect("utf-8 report"))
}

#[rstest]
fn config_fills_default_parameters() {
    let config = ReportConfig::from(ReportArgs::default());
    assert_eq!(config.parameters, MetricsParameters::default());
    assert_eq!(config.format, ReportFormat::Text);
    assert_eq!(config.network, None);
}

#[rstest]
fn config_keeps_overrides() {
    let config = ReportConfig::from(ReportArgs {
        avg_speed: Some(1.0),
        fuel_efficiency: Some(5.0),
        format: Some(ReportFormat::Json),
        ..ReportArgs::default()
    });
    assert_eq!(config.parameters.avg_speed_km_per_min, 1.0);
    assert_eq!(config.parameters.fuel_efficiency_km_per_liter, 5.0);
    assert_eq!(config.format, ReportFormat::Json);
}

#[rstest]
fn text_report_lists_every_metric(example_metrics: RouteMetrics) {
    let text = render_text("example", sample::DEPOT, &Ok(example_metrics));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "Route: example",
            "Depot: Centro Distribucion CEDI - Sur",
            "Total time          64 minutes",
            "Estimated distance  32.00 km",
            "Estimated fuel      3.20 litres",
            "Deliveries          3",
        ]
    );
}

#[rstest]
fn text_report_shows_fractional_minutes(mut example_metrics: RouteMetrics) {
    example_metrics.total_time_minutes = 7.5;
    let text = render_text("r", "d", &Ok(example_metrics));
    assert!(text.contains("Total time          7.50 minutes"));
}

#[rstest]
fn text_report_explains_failures() {
    let err = MetricsError::MissingEdge {
        origin: sample::GRANADA.to_owned(),
        destination: sample::CIUDAD_JARDIN.to_owned(),
    };
    let text = render_text("r", "d", &Err(err));
    let last = text.lines().last().expect("failure line");
    assert!(last.starts_with("Route metrics unavailable: "));
    assert!(last.contains(sample::GRANADA));
}

#[rstest]
fn json_report_is_the_metrics_object(example_metrics: RouteMetrics) {
    let json = render_json(&Ok(example_metrics)).expect("serialise");
    let decoded: RouteMetrics = serde_json::from_str(&json).expect("metrics json");
    assert_eq!(decoded, example_metrics);
}

#[rstest]
fn json_report_carries_the_error() {
    let err = MetricsError::InvalidParameter {
        name: "fuel_efficiency_km_per_liter",
        value: 0.0,
    };
    let json = render_json(&Err(err)).expect("serialise");
    let decoded: serde_json::Value = serde_json::from_str(&json).expect("error json");
    let message = decoded
        .get("error")
        .and_then(serde_json::Value::as_str)
        .expect("error message");
    assert!(message.contains("fuel_efficiency_km_per_liter"));
}

#[rstest]
fn sample_report_without_a_network_file() {
    let report = run_to_string(ReportArgs::default()).expect("sample report");
    assert!(report.contains("Route: example"));
    assert!(report.contains("64 minutes"));
}

#[rstest]
#[case::loop_route("loop", "Total time          40 minutes")]
#[case::broken_route("broken", "Route metrics unavailable: ")]
fn reports_named_routes(#[case] route: &str, #[case] expected: &str) {
    let workspace = Workspace::new();
    let network = workspace.write("network.json", SMALL_NETWORK);
    let report = run_to_string(ReportArgs {
        network: Some(network),
        route: Some(route.to_owned()),
        ..ReportArgs::default()
    })
    .expect("report succeeds even for invalid routes");
    assert!(report.contains(expected), "report was:\n{report}");
}

#[rstest]
fn unknown_route_is_an_error() {
    let err = run_to_string(ReportArgs {
        route: Some("missing".to_owned()),
        ..ReportArgs::default()
    })
    .expect_err("unknown route");
    match err {
        CliError::UnknownRoute { name } => assert_eq!(name, "missing"),
        other => panic!("expected UnknownRoute, found {other:?}"),
    }
}

#[rstest]
fn unknown_depot_is_an_error() {
    let err = run_to_string(ReportArgs {
        depot: Some("warehouse".to_owned()),
        ..ReportArgs::default()
    })
    .expect_err("unknown depot");
    assert!(matches!(err, CliError::UnknownDepot { depot } if depot == "warehouse"));
}

#[rstest]
fn missing_network_file_is_reported() {
    let workspace = Workspace::new();
    let path = workspace.root().join("absent.json");
    let err = run_to_string(ReportArgs {
        network: Some(path.clone()),
        ..ReportArgs::default()
    })
    .expect_err("missing network");
    match err {
        CliError::MissingSourceFile { field, path: missing } => {
            assert_eq!(field, ARG_NETWORK);
            assert_eq!(missing, path);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn directory_network_path_is_not_a_file() {
    let workspace = Workspace::new();
    let err = run_to_string(ReportArgs {
        network: Some(workspace.root().to_path_buf()),
        ..ReportArgs::default()
    })
    .expect_err("directory network path");
    assert!(matches!(err, CliError::SourcePathNotFile { .. }));
}

#[rstest]
fn malformed_network_is_reported() {
    let workspace = Workspace::new();
    let path = workspace.write("network.json", "{ not json");
    let err = run_to_string(ReportArgs {
        network: Some(path),
        ..ReportArgs::default()
    })
    .expect_err("malformed network");
    assert!(matches!(err, CliError::InvalidNetwork { .. }));
}

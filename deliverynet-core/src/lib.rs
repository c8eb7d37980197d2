//! Core domain types for the DeliveryNet engine.
//!
//! A [`DeliveryGraph`] holds named locations joined by directed edges
//! weighted in minutes. A [`Route`] is an explicit list of legs over that
//! graph. The [`metrics`] module turns the pair into travel time, estimated
//! distance, estimated fuel use and a delivery count. [`scene::MapScene`]
//! prepares the same data for a map renderer.
//!
//! Constructors and evaluators return `Result` so invalid data surfaces as
//! an error value instead of a sentinel.

#![forbid(unsafe_code)]

pub mod graph;
mod location;
pub mod metrics;
mod route;
pub mod sample;
pub mod scene;

#[cfg(feature = "serde")]
pub mod document;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use graph::{DeliveryGraph, Edge, GraphError};
pub use location::Location;
pub use metrics::{MetricsError, MetricsParameters, RouteMetrics, RouteMetricsEvaluator};
pub use route::{Route, RouteLeg};
pub use scene::{MapRenderer, MapScene};

#[cfg(feature = "serde")]
pub use document::{DocumentError, NamedRoute, Network, NetworkDocument};

//! Facade crate for the DeliveryNet route metrics engine.
//!
//! This crate re-exports the core domain types and, behind the `geojson`
//! feature, the GeoJSON map renderer.

#![forbid(unsafe_code)]

pub use deliverynet_core::{
    DeliveryGraph, Edge, GraphError, Location, MapRenderer, MapScene, MetricsError,
    MetricsParameters, Route, RouteLeg, RouteMetrics, RouteMetricsEvaluator, metrics, sample,
    scene,
};

#[cfg(feature = "serde")]
pub use deliverynet_core::{DocumentError, NamedRoute, Network, NetworkDocument};

#[cfg(feature = "geojson")]
pub use deliverynet_map::{GeoJsonError, GeoJsonRenderer, feature_collection};

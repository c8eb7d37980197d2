//! Aggregate route metrics with a fixed set of tuning parameters.

use log::{debug, warn};

use super::{
    DEFAULT_AVG_SPEED_KM_PER_MIN, DEFAULT_FUEL_EFFICIENCY_KM_PER_LITER, MetricsError,
    count_deliveries, distance_for_minutes, estimate_fuel, total_time,
};
use crate::{DeliveryGraph, Route};

/// Tuning parameters for distance and fuel estimates.
///
/// Neither value is a physical measurement. They are assumptions about the
/// fleet that callers are expected to override.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MetricsParameters {
    /// Average travel speed in kilometres per minute.
    pub avg_speed_km_per_min: f64,
    /// Vehicle fuel efficiency in kilometres per litre.
    pub fuel_efficiency_km_per_liter: f64,
}

impl Default for MetricsParameters {
    fn default() -> Self {
        Self {
            avg_speed_km_per_min: DEFAULT_AVG_SPEED_KM_PER_MIN,
            fuel_efficiency_km_per_liter: DEFAULT_FUEL_EFFICIENCY_KM_PER_LITER,
        }
    }
}

/// The four indicators computed for one route.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteMetrics {
    /// Sum of the travel times of every leg.
    pub total_time_minutes: f64,
    /// Estimated distance travelled.
    pub distance_km: f64,
    /// Estimated fuel consumed.
    pub fuel_liters: f64,
    /// Distinct delivery points visited, depot excluded.
    pub delivery_count: usize,
}

/// Computes [`RouteMetrics`] for routes over a delivery graph.
///
/// # Examples
/// ```
/// use deliverynet_core::{MetricsParameters, RouteMetricsEvaluator, sample};
///
/// let evaluator = RouteMetricsEvaluator::new(MetricsParameters::default());
/// let metrics = evaluator.evaluate(
///     &sample::cali_network(),
///     &sample::example_route(),
///     sample::DEPOT,
/// )?;
///
/// assert_eq!(metrics.total_time_minutes, 64.0);
/// assert_eq!(metrics.delivery_count, 3);
/// # Ok::<(), deliverynet_core::MetricsError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RouteMetricsEvaluator {
    parameters: MetricsParameters,
}

impl RouteMetricsEvaluator {
    /// Create an evaluator using `parameters` for every route.
    #[must_use]
    pub const fn new(parameters: MetricsParameters) -> Self {
        Self { parameters }
    }

    /// Parameters this evaluator was built with.
    #[must_use]
    pub const fn parameters(&self) -> MetricsParameters {
        self.parameters
    }

    /// Evaluate `route` over `graph`, treating `depot` as the origin.
    ///
    /// # Errors
    ///
    /// Returns the first [`MetricsError`] raised by the individual metrics.
    /// Nothing is computed past the failure.
    pub fn evaluate(
        &self,
        graph: &DeliveryGraph,
        route: &Route,
        depot: &str,
    ) -> Result<RouteMetrics, MetricsError> {
        debug!("evaluating route with {} legs from {depot:?}", route.len());
        self.try_evaluate(graph, route, depot).inspect_err(|err| {
            warn!("route rejected: {err}");
        })
    }

    fn try_evaluate(
        &self,
        graph: &DeliveryGraph,
        route: &Route,
        depot: &str,
    ) -> Result<RouteMetrics, MetricsError> {
        let total_time_minutes = total_time(graph, route)?;
        let distance_km =
            distance_for_minutes(total_time_minutes, self.parameters.avg_speed_km_per_min)?;
        let fuel_liters = estimate_fuel(distance_km, self.parameters.fuel_efficiency_km_per_liter)?;
        Ok(RouteMetrics {
            total_time_minutes,
            distance_km,
            fuel_liters,
            delivery_count: count_deliveries(route, depot),
        })
    }
}

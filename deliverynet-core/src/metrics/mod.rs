//! Route performance indicators.
//!
//! Four pure functions derive the travel time, estimated distance, estimated
//! fuel use and delivery count of an explicit route. [`RouteMetricsEvaluator`]
//! chains them with a set of [`MetricsParameters`].
//!
//! Distance and fuel are estimates. Distance is travel time multiplied by an
//! average speed. Fuel is distance divided by a fuel efficiency.

mod error;
mod evaluator;

use std::collections::HashSet;

use crate::{DeliveryGraph, Route};

pub use error::MetricsError;
pub use evaluator::{MetricsParameters, RouteMetrics, RouteMetricsEvaluator};

/// Default average speed: 0.5 km per minute, i.e. 30 km/h.
pub const DEFAULT_AVG_SPEED_KM_PER_MIN: f64 = 0.5;

/// Default fuel efficiency in kilometres per litre.
pub const DEFAULT_FUEL_EFFICIENCY_KM_PER_LITER: f64 = 10.0;

/// Sum of the travel times of every leg of `route`, in minutes.
///
/// # Errors
///
/// Returns [`MetricsError::MissingEdge`] for the first leg that is not an
/// edge of `graph`. Remaining legs are not inspected.
///
/// # Examples
/// ```
/// use deliverynet_core::metrics::total_time;
/// use deliverynet_core::sample;
///
/// let graph = sample::cali_network();
/// let minutes = total_time(&graph, &sample::example_route())?;
/// assert_eq!(minutes, 64.0);
/// # Ok::<(), deliverynet_core::MetricsError>(())
/// ```
#[expect(clippy::float_arithmetic, reason = "accumulating edge weights")]
pub fn total_time(graph: &DeliveryGraph, route: &Route) -> Result<f64, MetricsError> {
    route.legs().iter().try_fold(0.0, |acc, leg| {
        let minutes = graph.weight(&leg.origin, &leg.destination).ok_or_else(|| {
            MetricsError::MissingEdge {
                origin: leg.origin.clone(),
                destination: leg.destination.clone(),
            }
        })?;
        Ok(acc + minutes)
    })
}

/// Estimated distance of `route` in kilometres: total time times average speed.
///
/// # Errors
///
/// Propagates [`MetricsError::MissingEdge`] from [`total_time`] unchanged.
/// Only a route that can be walked has its speed checked, returning
/// [`MetricsError::InvalidParameter`] when `avg_speed_km_per_min` is not a
/// finite, strictly positive number.
pub fn estimate_distance(
    graph: &DeliveryGraph,
    route: &Route,
    avg_speed_km_per_min: f64,
) -> Result<f64, MetricsError> {
    let minutes = total_time(graph, route)?;
    distance_for_minutes(minutes, avg_speed_km_per_min)
}

#[expect(clippy::float_arithmetic, reason = "distance = time * speed")]
fn distance_for_minutes(minutes: f64, avg_speed_km_per_min: f64) -> Result<f64, MetricsError> {
    let speed = require_positive("avg_speed_km_per_min", avg_speed_km_per_min)?;
    Ok(minutes * speed)
}

/// Estimated fuel use in litres for `distance_km` at the given efficiency.
///
/// # Errors
///
/// Returns [`MetricsError::InvalidParameter`] when
/// `fuel_efficiency_km_per_liter` is zero, negative or not finite, whatever
/// the distance.
///
/// # Examples
/// ```
/// use deliverynet_core::metrics::estimate_fuel;
///
/// assert_eq!(estimate_fuel(32.0, 10.0)?, 3.2);
/// assert!(estimate_fuel(32.0, 0.0).is_err());
/// # Ok::<(), deliverynet_core::MetricsError>(())
/// ```
#[expect(clippy::float_arithmetic, reason = "fuel = distance / efficiency")]
pub fn estimate_fuel(
    distance_km: f64,
    fuel_efficiency_km_per_liter: f64,
) -> Result<f64, MetricsError> {
    let efficiency = require_positive(
        "fuel_efficiency_km_per_liter",
        fuel_efficiency_km_per_liter,
    )?;
    Ok(distance_km / efficiency)
}

/// Number of distinct destinations visited by `route`, excluding `origin`.
///
/// Only the first visit to a destination counts, so a point served twice in
/// one route is one delivery.
///
/// # Examples
/// ```
/// use deliverynet_core::Route;
/// use deliverynet_core::metrics::count_deliveries;
///
/// let route = Route::through(["depot", "a", "b", "a", "depot"]);
/// assert_eq!(count_deliveries(&route, "depot"), 2);
/// assert_eq!(count_deliveries(&Route::default(), "depot"), 0);
/// ```
#[must_use]
pub fn count_deliveries(route: &Route, origin: &str) -> usize {
    let mut visited = HashSet::new();
    route
        .destinations()
        .filter(|&destination| destination != origin && visited.insert(destination))
        .count()
}

fn require_positive(name: &'static str, value: f64) -> Result<f64, MetricsError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(MetricsError::InvalidParameter { name, value })
    }
}

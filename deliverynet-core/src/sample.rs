//! Simulated delivery network in the south of Cali.
//!
//! Six locations, twelve directed edges weighted in minutes and one example
//! route. Every call builds fresh values so callers can treat the sample as
//! ordinary input data.

use crate::{DeliveryGraph, Location, Route};

/// Distribution centre the example route starts and ends at.
pub const DEPOT: &str = "Centro Distribucion CEDI - Sur";
/// Delivery point 1, Tequendama.
pub const TEQUENDAMA: &str = "Punto Entrega 1 - Tequendama";
/// Delivery point 2, Granada.
pub const GRANADA: &str = "Punto Entrega 2 - Granada";
/// Delivery point 3, San Antonio.
pub const SAN_ANTONIO: &str = "Punto Entrega 3 - San Antonio";
/// Delivery point 4, Ciudad Jardin.
pub const CIUDAD_JARDIN: &str = "Punto Entrega 4 - Ciudad Jardin";
/// Delivery point 5, Menga (north of the city).
pub const MENGA: &str = "Punto Entrega 5 - Menga";

// (id, latitude, longitude)
const LOCATIONS: [(&str, f64, f64); 6] = [
    (DEPOT, 3.34, -76.53),
    (TEQUENDAMA, 3.43, -76.52),
    (GRANADA, 3.45, -76.51),
    (SAN_ANTONIO, 3.44, -76.52),
    (CIUDAD_JARDIN, 3.36, -76.53),
    (MENGA, 3.51, -76.47),
];

const EDGES: [(&str, &str, f64); 12] = [
    (DEPOT, TEQUENDAMA, 20.0),
    (DEPOT, CIUDAD_JARDIN, 10.0),
    (TEQUENDAMA, DEPOT, 25.0),
    (TEQUENDAMA, GRANADA, 15.0),
    (TEQUENDAMA, SAN_ANTONIO, 5.0),
    (GRANADA, TEQUENDAMA, 18.0),
    (GRANADA, MENGA, 30.0),
    (SAN_ANTONIO, TEQUENDAMA, 7.0),
    (SAN_ANTONIO, CIUDAD_JARDIN, 20.0),
    (CIUDAD_JARDIN, DEPOT, 12.0),
    (CIUDAD_JARDIN, SAN_ANTONIO, 22.0),
    (MENGA, DEPOT, 40.0),
];

const EXAMPLE_STOPS: [&str; 5] = [DEPOT, CIUDAD_JARDIN, SAN_ANTONIO, TEQUENDAMA, DEPOT];

/// Sample locations in declaration order.
pub fn locations() -> impl Iterator<Item = Location> {
    LOCATIONS
        .into_iter()
        .map(|(id, latitude, longitude)| Location::new(id, latitude, longitude))
}

/// Sample edges as `(origin, destination, minutes)`.
pub fn edges() -> impl Iterator<Item = (&'static str, &'static str, f64)> {
    EDGES.into_iter()
}

/// The complete sample network.
///
/// # Panics
///
/// Panics if the literal sample data breaks a graph invariant, which this
/// module's tests rule out.
#[must_use]
pub fn cali_network() -> DeliveryGraph {
    match DeliveryGraph::from_parts(locations(), edges()) {
        Ok(graph) => graph,
        Err(err) => panic!("sample network is inconsistent: {err}"),
    }
}

/// Example route: depot, Ciudad Jardin, San Antonio, Tequendama and back.
#[must_use]
pub fn example_route() -> Route {
    Route::through(EXAMPLE_STOPS)
}

//! JSON description of a delivery network and its routes.
//!
//! A document lists locations, directed edges and named routes. It is
//! converted into a validated [`Network`] before anything is evaluated, so a
//! malformed document never reaches the metrics.
//!
//! ```json
//! {
//!   "depot": "depot",
//!   "locations": [
//!     { "id": "depot", "latitude": 3.34, "longitude": -76.53 },
//!     { "id": "shop", "latitude": 3.36, "longitude": -76.53 }
//!   ],
//!   "edges": [
//!     { "origin": "depot", "destination": "shop", "minutes": 10 },
//!     { "origin": "shop", "destination": "depot", "minutes": 12 }
//!   ],
//!   "routes": [
//!     { "name": "loop", "stops": ["depot", "shop", "depot"] }
//!   ]
//! }
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{DeliveryGraph, GraphError, Location, Route, RouteLeg, sample};

/// A location entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Unique location id.
    pub id: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

/// A directed edge entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Origin location id.
    pub origin: String,
    /// Destination location id.
    pub destination: String,
    /// Travel time in minutes.
    pub minutes: f64,
}

/// A named route entry.
///
/// A route is written either as explicit `legs` (`[origin, destination]`
/// pairs) or as consecutive `stops`, not both.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteRecord {
    /// Name used to select the route.
    pub name: String,
    /// Explicit `[origin, destination]` legs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub legs: Vec<[String; 2]>,
    /// Stops visited in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stops: Vec<String>,
}

/// Serialised form of a delivery network.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NetworkDocument {
    /// Depot id. Defaults to the first location when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depot: Option<String>,
    /// Locations of the network.
    pub locations: Vec<LocationRecord>,
    /// Directed edges of the network.
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
    /// Routes available for evaluation.
    #[serde(default)]
    pub routes: Vec<RouteRecord>,
}

/// Errors raised while reading a [`NetworkDocument`].
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The JSON payload could not be decoded.
    #[error("failed to parse network document: {0}")]
    Parse(#[from] serde_json::Error),
    /// The locations or edges do not form a valid graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// The document has no locations.
    #[error("network document has no locations")]
    EmptyNetwork,
    /// The depot is not one of the locations.
    #[error("depot {depot:?} is not a location of the network")]
    UnknownDepot {
        /// Offending depot id.
        depot: String,
    },
    /// A route has an empty name.
    #[error("route #{index} has no name")]
    UnnamedRoute {
        /// Zero-based position of the route in the document.
        index: usize,
    },
    /// Two routes share a name.
    #[error("route {name:?} is defined more than once")]
    DuplicateRoute {
        /// Repeated route name.
        name: String,
    },
    /// A route lists both `legs` and `stops`.
    #[error("route {name:?} must define either legs or stops, not both")]
    AmbiguousRoute {
        /// Offending route name.
        name: String,
    },
}

impl NetworkDocument {
    /// Decode a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Parse`] when the text is not a valid document.
    pub fn from_json_str(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the document and build the network it describes.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError`] for graph violations, a missing or unknown
    /// depot, and unnamed, duplicated or ambiguous routes.
    pub fn into_network(self) -> Result<Network, DocumentError> {
        let Self {
            depot,
            locations,
            edges,
            routes,
        } = self;
        let depot = match depot {
            Some(depot) => depot,
            None => locations
                .first()
                .map(|record| record.id.clone())
                .ok_or(DocumentError::EmptyNetwork)?,
        };
        let graph = DeliveryGraph::from_parts(
            locations
                .into_iter()
                .map(|record| Location::new(record.id, record.latitude, record.longitude)),
            edges
                .into_iter()
                .map(|record| (record.origin, record.destination, record.minutes)),
        )?;
        if graph.location(&depot).is_none() {
            return Err(DocumentError::UnknownDepot { depot });
        }
        let mut named = Vec::with_capacity(routes.len());
        for (index, record) in routes.into_iter().enumerate() {
            let route = NamedRoute::try_from_record(index, record)?;
            if named.iter().any(|existing: &NamedRoute| existing.name == route.name) {
                return Err(DocumentError::DuplicateRoute { name: route.name });
            }
            named.push(route);
        }
        debug!(
            "loaded network with {} locations, {} edges and {} routes",
            graph.location_count(),
            graph.edge_count(),
            named.len()
        );
        Ok(Network {
            graph,
            depot,
            routes: named,
        })
    }
}

/// A route with the name it was declared under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRoute {
    /// Route name.
    pub name: String,
    /// The route itself.
    pub route: Route,
}

impl NamedRoute {
    fn try_from_record(index: usize, record: RouteRecord) -> Result<Self, DocumentError> {
        let RouteRecord { name, legs, stops } = record;
        if name.trim().is_empty() {
            return Err(DocumentError::UnnamedRoute { index });
        }
        if !legs.is_empty() && !stops.is_empty() {
            return Err(DocumentError::AmbiguousRoute { name });
        }
        let route: Route = if stops.is_empty() {
            legs.into_iter()
                .map(|[origin, destination]| RouteLeg::new(origin, destination))
                .collect()
        } else {
            Route::through(stops)
        };
        Ok(Self { name, route })
    }
}

/// A validated network ready for evaluation and rendering.
#[derive(Debug, Clone)]
pub struct Network {
    /// The delivery graph.
    pub graph: DeliveryGraph,
    /// Depot excluded from delivery counts.
    pub depot: String,
    /// Routes in declaration order.
    pub routes: Vec<NamedRoute>,
}

impl Network {
    /// Name of the example route in [`Network::sample`].
    pub const SAMPLE_ROUTE: &'static str = "example";

    /// The built-in Cali network with its example route.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            graph: sample::cali_network(),
            depot: sample::DEPOT.to_owned(),
            routes: vec![NamedRoute {
                name: Self::SAMPLE_ROUTE.to_owned(),
                route: sample::example_route(),
            }],
        }
    }

    /// Look up a route by name.
    #[must_use]
    pub fn route(&self, name: &str) -> Option<&NamedRoute> {
        self.routes.iter().find(|named| named.name == name)
    }

    /// The first declared route, if any.
    #[must_use]
    pub fn default_route(&self) -> Option<&NamedRoute> {
        self.routes.first()
    }
}

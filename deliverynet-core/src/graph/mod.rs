//! Directed, weighted graph of delivery locations.
//!
//! Edges carry travel time in minutes. The graph is directed, so `A -> B`
//! and `B -> A` are independent edges and may carry different weights.
//! Both locations and edges keep their insertion order, which is the order
//! reports and map scenes present them in.

mod error;

use std::collections::HashMap;

use log::debug;

use crate::Location;

pub use error::GraphError;

/// A directed connection between two locations.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    origin: String,
    destination: String,
    minutes: f64,
}

impl Edge {
    /// Id of the location the edge leaves from.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Id of the location the edge arrives at.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Travel time along the edge in minutes.
    #[must_use]
    pub const fn minutes(&self) -> f64 {
        self.minutes
    }
}

/// In-memory delivery network.
///
/// # Examples
/// ```
/// use deliverynet_core::{DeliveryGraph, Location};
///
/// # fn main() -> Result<(), deliverynet_core::GraphError> {
/// let mut graph = DeliveryGraph::new();
/// graph.add_location(Location::new("depot", 3.34, -76.53))?;
/// graph.add_location(Location::new("shop", 3.36, -76.53))?;
/// graph.add_edge("depot", "shop", 10.0)?;
///
/// assert_eq!(graph.weight("depot", "shop"), Some(10.0));
/// assert!(!graph.contains_edge("shop", "depot"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeliveryGraph {
    locations: Vec<Location>,
    location_index: HashMap<String, usize>,
    edges: Vec<Edge>,
    // origin -> destination -> position in `edges`
    adjacency: HashMap<String, HashMap<String, usize>>,
}

impl DeliveryGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from locations and `(origin, destination, minutes)` triples.
    ///
    /// Locations are added before edges, so edges may reference any location
    /// in the list regardless of order.
    ///
    /// # Errors
    ///
    /// Returns the first [`GraphError`] raised by [`Self::add_location`] or
    /// [`Self::add_edge`].
    pub fn from_parts<L, E, S>(locations: L, edges: E) -> Result<Self, GraphError>
    where
        L: IntoIterator<Item = Location>,
        E: IntoIterator<Item = (S, S, f64)>,
        S: AsRef<str>,
    {
        let mut graph = Self::new();
        for location in locations {
            graph.add_location(location)?;
        }
        for (origin, destination, minutes) in edges {
            graph.add_edge(origin.as_ref(), destination.as_ref(), minutes)?;
        }
        debug!(
            "built delivery graph with {} locations and {} edges",
            graph.location_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Add a location.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateLocation`] when the id is taken.
    pub fn add_location(&mut self, location: Location) -> Result<(), GraphError> {
        if self.location_index.contains_key(location.id()) {
            return Err(GraphError::DuplicateLocation {
                id: location.id().to_owned(),
            });
        }
        self.location_index
            .insert(location.id().to_owned(), self.locations.len());
        self.locations.push(location);
        Ok(())
    }

    /// Add a directed edge with a travel time in minutes.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownLocation`] if either endpoint is missing,
    /// [`GraphError::InvalidWeight`] for non-finite or non-positive weights
    /// and [`GraphError::DuplicateEdge`] if the ordered pair already exists.
    pub fn add_edge(
        &mut self,
        origin: &str,
        destination: &str,
        minutes: f64,
    ) -> Result<(), GraphError> {
        for endpoint in [origin, destination] {
            if !self.location_index.contains_key(endpoint) {
                return Err(GraphError::UnknownLocation {
                    origin: origin.to_owned(),
                    destination: destination.to_owned(),
                    missing: endpoint.to_owned(),
                });
            }
        }
        if !minutes.is_finite() || minutes <= 0.0 {
            return Err(GraphError::InvalidWeight {
                origin: origin.to_owned(),
                destination: destination.to_owned(),
                minutes,
            });
        }
        if self.contains_edge(origin, destination) {
            return Err(GraphError::DuplicateEdge {
                origin: origin.to_owned(),
                destination: destination.to_owned(),
            });
        }
        self.adjacency
            .entry(origin.to_owned())
            .or_default()
            .insert(destination.to_owned(), self.edges.len());
        self.edges.push(Edge {
            origin: origin.to_owned(),
            destination: destination.to_owned(),
            minutes,
        });
        Ok(())
    }

    /// Look up a location by id.
    #[must_use]
    pub fn location(&self, id: &str) -> Option<&Location> {
        self.location_index
            .get(id)
            .and_then(|&index| self.locations.get(index))
    }

    /// Look up the edge for an ordered pair.
    #[must_use]
    pub fn edge(&self, origin: &str, destination: &str) -> Option<&Edge> {
        self.adjacency
            .get(origin)
            .and_then(|targets| targets.get(destination))
            .and_then(|&index| self.edges.get(index))
    }

    /// Travel time in minutes for an ordered pair, if the edge exists.
    #[must_use]
    pub fn weight(&self, origin: &str, destination: &str) -> Option<f64> {
        self.edge(origin, destination).map(Edge::minutes)
    }

    /// Whether the ordered pair has an edge.
    #[must_use]
    pub fn contains_edge(&self, origin: &str, destination: &str) -> bool {
        self.edge(origin, destination).is_some()
    }

    /// Locations in insertion order.
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of locations.
    #[must_use]
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn triangle() -> DeliveryGraph {
        DeliveryGraph::from_parts(
            [
                Location::new("a", 0.0, 0.0),
                Location::new("b", 0.0, 1.0),
                Location::new("c", 1.0, 1.0),
            ],
            [("a", "b", 5.0), ("b", "a", 7.0), ("b", "c", 3.0)],
        )
        .expect("triangle should build")
    }

    #[rstest]
    fn edges_are_directed(triangle: DeliveryGraph) {
        assert_eq!(triangle.weight("a", "b"), Some(5.0));
        assert_eq!(triangle.weight("b", "a"), Some(7.0));
        assert_eq!(triangle.weight("c", "b"), None);
        assert!(!triangle.contains_edge("a", "c"));
    }

    #[rstest]
    fn preserves_insertion_order(triangle: DeliveryGraph) {
        let ids: Vec<&str> = triangle.locations().iter().map(Location::id).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        let pairs: Vec<(&str, &str)> = triangle
            .edges()
            .iter()
            .map(|edge| (edge.origin(), edge.destination()))
            .collect();
        assert_eq!(pairs, [("a", "b"), ("b", "a"), ("b", "c")]);
    }

    #[rstest]
    fn rejects_duplicate_location(mut triangle: DeliveryGraph) {
        let err = triangle
            .add_location(Location::new("a", 5.0, 5.0))
            .expect_err("duplicate id");
        assert_eq!(err, GraphError::DuplicateLocation { id: "a".into() });
        assert_eq!(triangle.location_count(), 3);
    }

    #[rstest]
    fn rejects_edge_to_unknown_location(mut triangle: DeliveryGraph) {
        let err = triangle
            .add_edge("a", "z", 1.0)
            .expect_err("unknown destination");
        assert!(matches!(
            err,
            GraphError::UnknownLocation { ref missing, .. } if missing == "z"
        ));
    }

    #[rstest]
    fn rejects_duplicate_edge(mut triangle: DeliveryGraph) {
        let err = triangle.add_edge("a", "b", 9.0).expect_err("duplicate pair");
        assert!(matches!(err, GraphError::DuplicateEdge { .. }));
        assert_eq!(triangle.weight("a", "b"), Some(5.0));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-3.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_invalid_weight(mut triangle: DeliveryGraph, #[case] minutes: f64) {
        let err = triangle
            .add_edge("c", "a", minutes)
            .expect_err("weight must be positive");
        assert!(matches!(err, GraphError::InvalidWeight { .. }));
        assert_eq!(triangle.edge_count(), 3);
    }

    #[rstest]
    fn allows_self_loops(mut triangle: DeliveryGraph) {
        triangle.add_edge("c", "c", 2.0).expect("self loop");
        assert_eq!(triangle.weight("c", "c"), Some(2.0));
    }
}

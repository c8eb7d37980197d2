use thiserror::Error;

/// Errors from the route metrics in [`crate::metrics`].
///
/// Either one is fatal to the computation that raised it. No partial metrics
/// are produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricsError {
    /// A route leg has no matching edge in the graph.
    ///
    /// The route is invalid as a whole. It does not contribute zero minutes.
    #[error("route leg {origin:?} -> {destination:?} is not an edge of the network")]
    MissingEdge {
        /// Origin of the first offending leg.
        origin: String,
        /// Destination of the first offending leg.
        destination: String,
    },
    /// A tuning parameter is not a finite, strictly positive number.
    #[error("parameter {name} must be a positive number, got {value}")]
    InvalidParameter {
        /// Name of the rejected parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

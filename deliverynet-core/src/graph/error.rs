use thiserror::Error;

/// Errors from [`crate::DeliveryGraph`] construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// A location with the same id was already added.
    #[error("location {id:?} is already part of the network")]
    DuplicateLocation {
        /// Offending location id.
        id: String,
    },
    /// An edge endpoint does not name a known location.
    #[error("edge {origin:?} -> {destination:?} references unknown location {missing:?}")]
    UnknownLocation {
        /// Origin of the rejected edge.
        origin: String,
        /// Destination of the rejected edge.
        destination: String,
        /// The endpoint that is not in the network.
        missing: String,
    },
    /// The ordered pair already has an edge.
    #[error("edge {origin:?} -> {destination:?} is already part of the network")]
    DuplicateEdge {
        /// Origin of the rejected edge.
        origin: String,
        /// Destination of the rejected edge.
        destination: String,
    },
    /// Travel time must be a finite, strictly positive number of minutes.
    #[error("edge {origin:?} -> {destination:?} has invalid travel time {minutes} min")]
    InvalidWeight {
        /// Origin of the rejected edge.
        origin: String,
        /// Destination of the rejected edge.
        destination: String,
        /// The rejected weight.
        minutes: f64,
    },
}

//! Test-only fixtures shared by unit, behaviour and property tests.

use std::convert::Infallible;

use crate::scene::{MapRenderer, MapScene};
use crate::{DeliveryGraph, GraphError, Location, Route};

/// Id of the `index`-th stop of a [`chain`].
#[must_use]
pub fn stop_id(index: usize) -> String {
    format!("stop-{index}")
}

/// A straight chain `stop-0 -> stop-1 -> ... -> stop-n` with the given weights,
/// plus the route that drives it end to end.
///
/// # Errors
///
/// Returns [`GraphError::InvalidWeight`] if any weight is not positive.
pub fn chain(weights: &[f64]) -> Result<(DeliveryGraph, Route), GraphError> {
    let stops: Vec<String> = (0..=weights.len()).map(stop_id).collect();
    let locations = stops
        .iter()
        .zip(0_u32..)
        .map(|(id, offset)| Location::new(id.as_str(), 0.0, f64::from(offset)));
    let edges = stops
        .iter()
        .zip(stops.iter().skip(1))
        .zip(weights.iter().copied())
        .map(|((origin, destination), minutes)| (origin.as_str(), destination.as_str(), minutes));
    let graph = DeliveryGraph::from_parts(locations, edges)?;
    Ok((graph, Route::through(stops)))
}

/// `MapRenderer` that keeps every scene it is given.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    /// Scenes in the order they were rendered.
    pub scenes: Vec<MapScene>,
}

impl MapRenderer for RecordingRenderer {
    type Error = Infallible;

    fn render(&mut self, scene: &MapScene) -> Result<(), Self::Error> {
        self.scenes.push(scene.clone());
        Ok(())
    }
}

//! Map-ready view of a delivery network.
//!
//! [`MapScene`] holds the geometry a map draws: one marker per location, one
//! straight segment per edge and a travel-time label at the midpoint of each
//! segment. Edges that belong to a highlighted route are flagged so a
//! renderer can draw them differently. Drawing, basemap tiles and styling
//! belong to the [`MapRenderer`] that consumes the scene.

use geo::{BoundingRect, Centroid, Coord, Line, MultiPoint, Point, Rect};

use crate::{DeliveryGraph, Route};

/// Default padding in degrees around the network when framing a map.
pub const DEFAULT_BOUNDS_MARGIN_DEGREES: f64 = 0.01;

/// A location drawn as a point marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Location id, used as the marker label.
    pub id: String,
    /// Marker position.
    pub position: Point<f64>,
}

/// An edge drawn as a straight line between its endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Origin location id.
    pub origin: String,
    /// Destination location id.
    pub destination: String,
    /// Geometry from origin to destination.
    pub line: Line<f64>,
    /// Travel time in minutes.
    pub minutes: f64,
    /// Whether the edge is part of the highlighted route.
    pub highlighted: bool,
}

/// Which group a weight label belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelEmphasis {
    /// Label of an ordinary network edge.
    Network,
    /// Label of an edge on the highlighted route.
    Route,
}

impl LabelEmphasis {
    /// Stable lowercase name, used as a property value by renderers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Route => "route",
        }
    }
}

/// Travel-time annotation placed at the midpoint of a segment.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightLabel {
    /// Rendered text, e.g. `"22"`.
    pub text: String,
    /// Label anchor.
    pub position: Point<f64>,
    /// Label group.
    pub emphasis: LabelEmphasis,
}

/// Everything a map needs to show a network and, optionally, one route.
///
/// # Examples
/// ```
/// use deliverynet_core::{sample, scene::MapScene};
///
/// let graph = sample::cali_network();
/// let route = sample::example_route();
/// let scene = MapScene::build(&graph, Some(&route));
///
/// assert_eq!(scene.markers().len(), 6);
/// assert_eq!(scene.highlighted_segments().count(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MapScene {
    markers: Vec<Marker>,
    segments: Vec<Segment>,
    labels: Vec<WeightLabel>,
    has_highlight: bool,
}

impl MapScene {
    /// Build a scene for `graph`, flagging the legs of `highlight` if given.
    ///
    /// Edges whose endpoints are unknown cannot occur in a [`DeliveryGraph`],
    /// so every edge yields exactly one segment and one label.
    #[must_use]
    pub fn build(graph: &DeliveryGraph, highlight: Option<&Route>) -> Self {
        let markers = graph
            .locations()
            .iter()
            .map(|location| Marker {
                id: location.id().to_owned(),
                position: location.point(),
            })
            .collect();

        let segments: Vec<Segment> = graph
            .edges()
            .iter()
            .filter_map(|edge| {
                let start = graph.location(edge.origin())?.coordinate();
                let end = graph.location(edge.destination())?.coordinate();
                Some(Segment {
                    origin: edge.origin().to_owned(),
                    destination: edge.destination().to_owned(),
                    line: Line::new(start, end),
                    minutes: edge.minutes(),
                    highlighted: highlight
                        .is_some_and(|route| route.contains_leg(edge.origin(), edge.destination())),
                })
            })
            .collect();

        let labels = segments.iter().map(WeightLabel::for_segment).collect();

        Self {
            markers,
            segments,
            labels,
            has_highlight: highlight.is_some(),
        }
    }

    /// Location markers in graph order.
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Edge segments in graph order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Weight labels, one per segment, in the same order.
    #[must_use]
    pub fn labels(&self) -> &[WeightLabel] {
        &self.labels
    }

    /// Segments that belong to the highlighted route.
    pub fn highlighted_segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|segment| segment.highlighted)
    }

    /// Whether the scene was built with a route to highlight.
    #[must_use]
    pub const fn has_highlight(&self) -> bool {
        self.has_highlight
    }

    /// Map title matching the scene contents.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        if self.has_highlight {
            "Delivery network with highlighted route"
        } else {
            "Simulated delivery network"
        }
    }

    /// Bounding box of all markers padded by `margin_degrees` on every side.
    ///
    /// Returns `None` when the scene has no markers.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "padding coordinates")]
    pub fn bounds(&self, margin_degrees: f64) -> Option<Rect<f64>> {
        let points: MultiPoint<f64> = self.markers.iter().map(|marker| marker.position).collect();
        let rect = points.bounding_rect()?;
        let (min, max) = (rect.min(), rect.max());
        Some(Rect::new(
            Coord {
                x: min.x - margin_degrees,
                y: min.y - margin_degrees,
            },
            Coord {
                x: max.x + margin_degrees,
                y: max.y + margin_degrees,
            },
        ))
    }
}

impl WeightLabel {
    fn for_segment(segment: &Segment) -> Self {
        Self {
            text: format_minutes(segment.minutes),
            // The centroid of a straight line is its midpoint.
            position: segment.line.centroid(),
            emphasis: if segment.highlighted {
                LabelEmphasis::Route
            } else {
                LabelEmphasis::Network
            },
        }
    }
}

fn format_minutes(minutes: f64) -> String {
    if minutes.fract() == 0.0 {
        format!("{minutes:.0}")
    } else {
        format!("{minutes}")
    }
}

/// Sink that turns a [`MapScene`] into a concrete map.
///
/// Implementations own every presentation concern: projection, basemap tiles,
/// colours and output format.
pub trait MapRenderer {
    /// Error raised when rendering fails.
    type Error;

    /// Render `scene`.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` when the renderer cannot produce its output.
    fn render(&mut self, scene: &MapScene) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;
    use crate::test_support::RecordingRenderer;
    use rstest::{fixture, rstest};

    #[fixture]
    fn graph() -> DeliveryGraph {
        sample::cali_network()
    }

    #[rstest]
    fn without_highlight_no_segment_is_flagged(graph: DeliveryGraph) {
        let scene = MapScene::build(&graph, None);
        assert_eq!(scene.segments().len(), 12);
        assert_eq!(scene.highlighted_segments().count(), 0);
        assert!(
            scene
                .labels()
                .iter()
                .all(|label| label.emphasis == LabelEmphasis::Network)
        );
        assert_eq!(scene.title(), "Simulated delivery network");
    }

    #[rstest]
    fn highlight_follows_direction(graph: DeliveryGraph) {
        let route = sample::example_route();
        let scene = MapScene::build(&graph, Some(&route));
        let flagged: Vec<(&str, &str)> = scene
            .highlighted_segments()
            .map(|segment| (segment.origin.as_str(), segment.destination.as_str()))
            .collect();
        // Graph order, not route order. Ciudad Jardin -> depot stays plain
        // although the route drives depot -> Ciudad Jardin.
        assert_eq!(
            flagged,
            [
                (sample::DEPOT, sample::CIUDAD_JARDIN),
                (sample::TEQUENDAMA, sample::DEPOT),
                (sample::SAN_ANTONIO, sample::TEQUENDAMA),
                (sample::CIUDAD_JARDIN, sample::SAN_ANTONIO),
            ]
        );
        assert_eq!(scene.title(), "Delivery network with highlighted route");
    }

    #[rstest]
    fn labels_sit_at_segment_midpoints(graph: DeliveryGraph) {
        let route = sample::example_route();
        let scene = MapScene::build(&graph, Some(&route));
        let (segment, label) = scene
            .segments()
            .iter()
            .zip(scene.labels())
            .find(|(segment, _)| {
                segment.origin == sample::DEPOT && segment.destination == sample::CIUDAD_JARDIN
            })
            .expect("depot -> ciudad jardin edge");
        assert_eq!(label.text, "10");
        assert_eq!(label.emphasis, LabelEmphasis::Route);
        assert!(segment.highlighted);
        assert!((label.position.x() - -76.53).abs() < 1e-9);
        assert!((label.position.y() - 3.35).abs() < 1e-9);
    }

    #[rstest]
    fn bounds_are_padded(graph: DeliveryGraph) {
        let scene = MapScene::build(&graph, None);
        let rect = scene
            .bounds(DEFAULT_BOUNDS_MARGIN_DEGREES)
            .expect("non-empty scene");
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
        assert!(close(rect.min().x, -76.54));
        assert!(close(rect.max().x, -76.46));
        assert!(close(rect.min().y, 3.33));
        assert!(close(rect.max().y, 3.52));
    }

    #[rstest]
    fn empty_graph_has_no_bounds() {
        let scene = MapScene::build(&DeliveryGraph::new(), None);
        assert!(scene.markers().is_empty());
        assert_eq!(scene.bounds(0.0), None);
    }

    #[rstest]
    fn renderers_receive_the_built_scene(graph: DeliveryGraph) {
        let scene = MapScene::build(&graph, Some(&sample::example_route()));
        let mut renderer = RecordingRenderer::default();
        let Ok(()) = renderer.render(&scene);
        assert_eq!(renderer.scenes, [scene]);
    }

    #[rstest]
    #[case(22.0, "22")]
    #[case(7.5, "7.5")]
    fn formats_label_text(#[case] minutes: f64, #[case] expected: &str) {
        assert_eq!(format_minutes(minutes), expected);
    }
}

//! GeoJSON output for DeliveryNet map scenes.
//!
//! [`GeoJsonRenderer`] is a [`MapRenderer`] that writes a scene as a GeoJSON
//! `FeatureCollection`. Any web map or GIS tool can then lay the network over
//! a basemap of its choice. Features carry a `kind` property that tells
//! locations, edges and weight labels apart:
//!
//! | kind           | geometry   | properties                                          |
//! |----------------|------------|-----------------------------------------------------|
//! | `location`     | Point      | `name`                                              |
//! | `edge`         | LineString | `origin`, `destination`, `minutes`, `highlighted`   |
//! | `weight_label` | Point      | `text`, `emphasis` (`network` or `route`)           |

#![forbid(unsafe_code)]

use std::io::Write;

use deliverynet_core::scene::{
    DEFAULT_BOUNDS_MARGIN_DEGREES, MapRenderer, MapScene, Marker, Segment, WeightLabel,
};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};
use log::debug;
use thiserror::Error;

/// Errors from [`GeoJsonRenderer`].
#[derive(Debug, Error)]
pub enum GeoJsonError {
    /// Encoding the collection or writing it to the sink failed.
    #[error("failed to serialise GeoJSON: {0}")]
    Serialise(#[from] serde_json::Error),
    /// Writing the trailing newline failed.
    #[error("failed to write GeoJSON: {0}")]
    Write(#[from] std::io::Error),
}

/// Convert `scene` into a GeoJSON feature collection.
///
/// The collection's `bbox` frames every location with `margin_degrees` of
/// padding, and its `title` foreign member mirrors [`MapScene::title`].
///
/// # Examples
/// ```
/// use deliverynet_core::{sample, scene::MapScene};
/// use deliverynet_map::feature_collection;
///
/// let scene = MapScene::build(&sample::cali_network(), None);
/// let collection = feature_collection(&scene, 0.01);
///
/// // six locations, twelve edges, twelve labels
/// assert_eq!(collection.features.len(), 30);
/// ```
#[must_use]
pub fn feature_collection(scene: &MapScene, margin_degrees: f64) -> FeatureCollection {
    let features = scene
        .segments()
        .iter()
        .map(segment_feature)
        .chain(scene.markers().iter().map(marker_feature))
        .chain(scene.labels().iter().map(label_feature))
        .collect();
    let bbox = scene
        .bounds(margin_degrees)
        .map(|rect| vec![rect.min().x, rect.min().y, rect.max().x, rect.max().y]);
    let mut foreign_members = JsonObject::new();
    foreign_members.insert("title".to_owned(), JsonValue::from(scene.title()));
    FeatureCollection {
        bbox,
        features,
        foreign_members: Some(foreign_members),
    }
}

fn feature(geometry: Value, properties: JsonObject) -> Feature {
    Feature {
        geometry: Some(Geometry::new(geometry)),
        properties: Some(properties),
        ..Feature::default()
    }
}

fn marker_feature(marker: &Marker) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("kind".to_owned(), JsonValue::from("location"));
    properties.insert("name".to_owned(), JsonValue::from(marker.id.as_str()));
    feature(Value::from(&marker.position), properties)
}

fn segment_feature(segment: &Segment) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("kind".to_owned(), JsonValue::from("edge"));
    properties.insert(
        "origin".to_owned(),
        JsonValue::from(segment.origin.as_str()),
    );
    properties.insert(
        "destination".to_owned(),
        JsonValue::from(segment.destination.as_str()),
    );
    properties.insert("minutes".to_owned(), JsonValue::from(segment.minutes));
    properties.insert(
        "highlighted".to_owned(),
        JsonValue::from(segment.highlighted),
    );
    feature(Value::from(&segment.line), properties)
}

fn label_feature(label: &WeightLabel) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("kind".to_owned(), JsonValue::from("weight_label"));
    properties.insert("text".to_owned(), JsonValue::from(label.text.as_str()));
    properties.insert(
        "emphasis".to_owned(),
        JsonValue::from(label.emphasis.as_str()),
    );
    feature(Value::from(&label.position), properties)
}

/// Writes scenes as pretty-printed GeoJSON to `W`.
///
/// # Examples
/// ```
/// use deliverynet_core::{MapRenderer, sample, scene::MapScene};
/// use deliverynet_map::GeoJsonRenderer;
///
/// # fn main() -> Result<(), deliverynet_map::GeoJsonError> {
/// let route = sample::example_route();
/// let scene = MapScene::build(&sample::cali_network(), Some(&route));
///
/// let mut renderer = GeoJsonRenderer::new(Vec::new());
/// renderer.render(&scene)?;
/// let json = String::from_utf8(renderer.into_inner()).expect("utf-8 output");
/// assert!(json.contains("\"FeatureCollection\""));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct GeoJsonRenderer<W> {
    writer: W,
    margin_degrees: f64,
}

impl<W: Write> GeoJsonRenderer<W> {
    /// Create a renderer writing to `writer` with the default bounds margin.
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            margin_degrees: DEFAULT_BOUNDS_MARGIN_DEGREES,
        }
    }

    /// Override the padding, in degrees, applied to the collection's `bbox`.
    #[must_use]
    pub const fn with_margin(mut self, margin_degrees: f64) -> Self {
        self.margin_degrees = margin_degrees;
        self
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MapRenderer for GeoJsonRenderer<W> {
    type Error = GeoJsonError;

    fn render(&mut self, scene: &MapScene) -> Result<(), Self::Error> {
        let collection = feature_collection(scene, self.margin_degrees);
        debug!(
            "writing GeoJSON scene with {} features",
            collection.features.len()
        );
        serde_json::to_writer_pretty(&mut self.writer, &collection)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deliverynet_core::sample;
    use rstest::{fixture, rstest};

    #[fixture]
    fn highlighted_scene() -> MapScene {
        let route = sample::example_route();
        MapScene::build(&sample::cali_network(), Some(&route))
    }

    fn kind(feature: &Feature) -> Option<&str> {
        feature
            .properties
            .as_ref()
            .and_then(|properties| properties.get("kind"))
            .and_then(JsonValue::as_str)
    }

    #[rstest]
    fn edges_are_drawn_before_locations(highlighted_scene: MapScene) {
        let collection = feature_collection(&highlighted_scene, 0.0);
        let kinds: Vec<Option<&str>> = collection.features.iter().map(kind).collect();
        assert_eq!(kinds.first(), Some(&Some("edge")));
        assert_eq!(kinds.get(12), Some(&Some("location")));
        assert_eq!(kinds.last(), Some(&Some("weight_label")));
    }

    #[rstest]
    fn highlighted_edges_are_flagged(highlighted_scene: MapScene) {
        let collection = feature_collection(&highlighted_scene, 0.0);
        let highlighted = collection
            .features
            .iter()
            .filter(|feature| kind(feature) == Some("edge"))
            .filter(|feature| {
                feature
                    .properties
                    .as_ref()
                    .and_then(|properties| properties.get("highlighted"))
                    .and_then(JsonValue::as_bool)
                    == Some(true)
            })
            .count();
        assert_eq!(highlighted, 4);
    }

    #[rstest]
    fn edge_geometry_is_a_line_string(highlighted_scene: MapScene) {
        let collection = feature_collection(&highlighted_scene, 0.0);
        let geometry = collection
            .features
            .first()
            .and_then(|feature| feature.geometry.as_ref())
            .expect("edge geometry");
        assert!(matches!(geometry.value, Value::LineString(ref points) if points.len() == 2));
    }

    #[rstest]
    fn collection_carries_bbox_and_title(highlighted_scene: MapScene) {
        let collection = feature_collection(&highlighted_scene, 0.0);
        let bbox = collection.bbox.expect("bbox");
        assert_eq!(bbox.len(), 4);
        assert!(bbox.first().is_some_and(|min_x| (min_x - -76.53).abs() < 1e-9));
        let title = collection
            .foreign_members
            .as_ref()
            .and_then(|members| members.get("title"))
            .and_then(JsonValue::as_str);
        assert_eq!(title, Some("Delivery network with highlighted route"));
    }

    #[rstest]
    fn renderer_writes_parseable_json(highlighted_scene: MapScene) {
        let mut renderer = GeoJsonRenderer::new(Vec::new()).with_margin(0.05);
        renderer.render(&highlighted_scene).expect("render to memory");
        let bytes = renderer.into_inner();
        let parsed: JsonValue = serde_json::from_slice(&bytes).expect("valid json");
        assert_eq!(
            parsed.get("type").and_then(JsonValue::as_str),
            Some("FeatureCollection")
        );
        assert!(bytes.ends_with(b"\n"));
    }
}

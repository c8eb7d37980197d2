use geo::{Coord, Point};

/// A named place in the delivery network.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`, matching the
/// axis order used throughout `geo`.
///
/// # Examples
/// ```
/// use deliverynet_core::Location;
///
/// let depot = Location::new("Centro Distribucion CEDI - Sur", 3.34, -76.53);
///
/// assert_eq!(depot.id(), "Centro Distribucion CEDI - Sur");
/// assert_eq!(depot.latitude(), 3.34);
/// assert_eq!(depot.longitude(), -76.53);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    id: String,
    coordinate: Coord<f64>,
}

impl Location {
    /// Construct a location from its id and a latitude/longitude pair in degrees.
    pub fn new(id: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self::at(
            id,
            Coord {
                x: longitude,
                y: latitude,
            },
        )
    }

    /// Construct a location from an existing coordinate.
    pub fn at(id: impl Into<String>, coordinate: Coord<f64>) -> Self {
        Self {
            id: id.into(),
            coordinate,
        }
    }

    /// Unique identifier of the location.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Position as a `geo` coordinate.
    #[must_use]
    pub const fn coordinate(&self) -> Coord<f64> {
        self.coordinate
    }

    /// Position as a `geo` point.
    #[must_use]
    pub fn point(&self) -> Point<f64> {
        Point::from(self.coordinate)
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.coordinate.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.coordinate.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_stores_longitude_on_x_axis() {
        let location = Location::new("Menga", 3.51, -76.47);
        assert_eq!(
            location.coordinate(),
            Coord {
                x: -76.47,
                y: 3.51
            }
        );
        assert_eq!(location.point().x(), -76.47);
    }
}

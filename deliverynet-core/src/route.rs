//! Explicit delivery routes.
//!
//! A route is a literal, ordered list of directed legs. It is not computed
//! from the graph and is not checked against it on construction: the metrics
//! evaluator reports the first leg that has no matching edge.

/// One directed hop of a route.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteLeg {
    /// Id of the location the leg starts at.
    pub origin: String,
    /// Id of the location the leg ends at.
    pub destination: String,
}

impl RouteLeg {
    /// Construct a leg between two location ids.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    /// Whether the leg connects `origin` to `destination` in that direction.
    #[must_use]
    pub fn connects(&self, origin: &str, destination: &str) -> bool {
        self.origin == origin && self.destination == destination
    }
}

/// An ordered sequence of legs.
///
/// Revisits are allowed and the route does not have to return to where it
/// started.
///
/// # Examples
/// ```
/// use deliverynet_core::Route;
///
/// let route = Route::through(["depot", "a", "b", "depot"]);
///
/// assert_eq!(route.len(), 3);
/// assert!(route.contains_leg("a", "b"));
/// assert!(!route.contains_leg("b", "a"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Route {
    legs: Vec<RouteLeg>,
}

impl Route {
    /// Construct a route from its legs.
    #[must_use]
    pub const fn new(legs: Vec<RouteLeg>) -> Self {
        Self { legs }
    }

    /// Construct a route from `(origin, destination)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(origin, destination)| RouteLeg::new(origin, destination))
                .collect(),
        )
    }

    /// Construct a route visiting `stops` in order, one leg per consecutive pair.
    ///
    /// Fewer than two stops yield an empty route.
    pub fn through<I, S>(stops: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stops: Vec<String> = stops.into_iter().map(Into::into).collect();
        Self::new(
            stops
                .windows(2)
                .filter_map(|pair| match pair {
                    [origin, destination] => {
                        Some(RouteLeg::new(origin.clone(), destination.clone()))
                    }
                    _ => None,
                })
                .collect(),
        )
    }

    /// Legs in travel order.
    #[must_use]
    pub fn legs(&self) -> &[RouteLeg] {
        &self.legs
    }

    /// Number of legs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Whether the route has no legs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Whether any leg travels from `origin` to `destination`.
    #[must_use]
    pub fn contains_leg(&self, origin: &str, destination: &str) -> bool {
        self.legs.iter().any(|leg| leg.connects(origin, destination))
    }

    /// Destination of every leg in travel order, repeats included.
    pub fn destinations(&self) -> impl Iterator<Item = &str> {
        self.legs.iter().map(|leg| leg.destination.as_str())
    }
}

impl FromIterator<RouteLeg> for Route {
    fn from_iter<I: IntoIterator<Item = RouteLeg>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

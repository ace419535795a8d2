pub mod style;
pub mod svg;

pub use style::PlotStyle;

use crate::error::PlotError;
use crate::models::{LocationMap, Point};

/// Which series a marker belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Token,
    Power,
}

/// A plotted point
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub point: Point,
}

/// Text drawn with its baseline starting at `point`
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub point: Point,
}

/// Axis-aligned data bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Smallest box containing every point, or `None` for an empty set
    pub fn enclosing<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Bounds { min: *p, max: *p },
                Some(b) => Bounds {
                    min: Point::new(b.min.x.min(p.x), b.min.y.min(p.y)),
                    max: Point::new(b.max.x.max(p.x), b.max.y.max(p.y)),
                },
            })
        })
    }

    /// Grows each side by `fraction` of the span; a zero span grows by one unit
    pub fn padded(self, fraction: f64) -> Self {
        let pad = |span: f64| if span > 0.0 { span * fraction } else { 1.0 };
        let dx = pad(self.max.x - self.min.x);
        let dy = pad(self.max.y - self.min.y);
        Bounds {
            min: Point::new(self.min.x - dx, self.min.y - dy),
            max: Point::new(self.max.x + dx, self.max.y + dy),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Scatter plot of a location map: tokens and powers as two series plus their labels
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScatterPlot {
    pub markers: Vec<Marker>,
    pub labels: Vec<Label>,
}

impl ScatterPlot {
    /// Lays out markers and labels for every location.
    ///
    /// A location is labeled with its name at the token point. Locations without a token
    /// are labeled at their lowest-index power; a location with neither is an error.
    /// Every power point is labeled with its index.
    pub fn from_locations(locations: &LocationMap) -> Result<Self, PlotError> {
        let mut plot = ScatterPlot::default();

        for (name, record) in locations {
            let anchor = match (record.token, record.lowest_power()) {
                (Some(token), _) => {
                    plot.markers.push(Marker {
                        kind: MarkerKind::Token,
                        point: token,
                    });
                    token
                }
                (None, Some((_, power))) => power,
                (None, None) => {
                    return Err(PlotError::MissingAnchor {
                        location: name.clone(),
                    })
                }
            };
            plot.labels.push(Label {
                text: name.clone(),
                point: anchor,
            });

            for (index, power) in &record.powers {
                plot.markers.push(Marker {
                    kind: MarkerKind::Power,
                    point: *power,
                });
                plot.labels.push(Label {
                    text: index.to_string(),
                    point: *power,
                });
            }
        }

        tracing::debug!(
            markers = plot.markers.len(),
            labels = plot.labels.len(),
            "Scatter plot laid out"
        );
        Ok(plot)
    }

    /// Data bounds of all markers
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::enclosing(self.markers.iter().map(|m| &m.point))
    }

    pub fn count(&self, kind: MarkerKind) -> usize {
        self.markers.iter().filter(|m| m.kind == kind).count()
    }

    /// Renders the plot as a standalone SVG document
    pub fn render_svg(&self, style: &PlotStyle) -> String {
        svg::render(self, style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocationRecord;
    use crate::parsers::LocationsParser;

    #[test]
    fn test_token_and_power_series() {
        let locations = LocationsParser::parse_str(
            "A.token: x:1,y:2\nA.powers.1: x:3,y:4\nA.powers.2: x:5,y:6",
        )
        .unwrap();

        let plot = ScatterPlot::from_locations(&locations).unwrap();
        assert_eq!(plot.count(MarkerKind::Token), 1);
        assert_eq!(plot.count(MarkerKind::Power), 2);

        let texts: Vec<&str> = plot.labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["A", "1", "2"]);
        assert_eq!(plot.labels[0].point, Point::new(1.0, 2.0));
    }

    #[test]
    fn test_powers_only_label_uses_lowest_index() {
        let locations =
            LocationsParser::parse_str("B.powers.5: x:5,y:5\nB.powers.2: x:2,y:2").unwrap();

        let plot = ScatterPlot::from_locations(&locations).unwrap();
        assert_eq!(plot.count(MarkerKind::Token), 0);
        assert_eq!(plot.labels[0].text, "B");
        assert_eq!(plot.labels[0].point, Point::new(2.0, 2.0));
    }

    #[test]
    fn test_location_without_anchor_fails() {
        let mut locations = LocationMap::new();
        locations.insert("Empty".to_string(), LocationRecord::default());

        let err = ScatterPlot::from_locations(&locations).unwrap_err();
        assert_eq!(
            err,
            PlotError::MissingAnchor {
                location: "Empty".to_string()
            }
        );
    }

    #[test]
    fn test_token_only_location_has_no_power_markers() {
        let locations = LocationsParser::parse_str("C.token: x:0,y:0").unwrap();
        let plot = ScatterPlot::from_locations(&locations).unwrap();
        assert_eq!(plot.markers.len(), 1);
        assert_eq!(plot.labels.len(), 1);
    }

    #[test]
    fn test_bounds_padding() {
        let points = [Point::new(0.0, 10.0), Point::new(10.0, 10.0)];
        let bounds = Bounds::enclosing(&points).unwrap().padded(0.1);
        assert_eq!(bounds.min, Point::new(-1.0, 9.0));
        assert_eq!(bounds.max, Point::new(11.0, 11.0));
    }
}

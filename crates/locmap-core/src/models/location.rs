use super::Point;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// All locations of a map, keyed by name in order of first appearance
pub type LocationMap = IndexMap<String, LocationRecord>;

/// Coordinates attached to one named location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LocationRecord {
    /// Primary coordinate of the location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<Point>,
    /// Secondary coordinates, keyed by power index (file order preserved)
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub powers: IndexMap<u32, Point>,
}

impl LocationRecord {
    /// Stores the token point, replacing an earlier one
    pub fn set_token(&mut self, point: Point) {
        self.token = Some(point);
    }

    /// Stores a power point; an existing index keeps its position and takes the new value
    pub fn insert_power(&mut self, index: u32, point: Point) {
        self.powers.insert(index, point);
    }

    /// Power with the lowest numeric index, if any
    pub fn lowest_power(&self) -> Option<(u32, Point)> {
        self.powers
            .iter()
            .min_by_key(|(index, _)| **index)
            .map(|(index, point)| (*index, *point))
    }

    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.powers.is_empty()
    }
}

/// What a designator (`Castle.token`, `Castle.powers.1`) points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Designator {
    Token,
    Power(u32),
}

impl fmt::Display for Designator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Designator::Token => write!(f, "token"),
            Designator::Power(index) => write!(f, "powers.{}", index),
        }
    }
}

/// One parsed line of a locations file
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub name: String,
    pub designator: Designator,
    pub point: Point,
}

impl Entry {
    /// Merges the entry into the map, creating the location on first sight
    pub fn apply(self, locations: &mut LocationMap) {
        let record = locations.entry(self.name).or_default();
        match self.designator {
            Designator::Token => record.set_token(self.point),
            Designator::Power(index) => record.insert_power(index, self.point),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowest_power_ignores_insertion_order() {
        let mut record = LocationRecord::default();
        record.insert_power(3, Point::new(3.0, 3.0));
        record.insert_power(2, Point::new(2.0, 2.0));
        record.insert_power(7, Point::new(7.0, 7.0));

        assert_eq!(record.lowest_power(), Some((2, Point::new(2.0, 2.0))));
    }

    #[test]
    fn apply_keeps_first_appearance_order() {
        let mut locations = LocationMap::new();
        for (name, designator) in [
            ("Castle", Designator::Token),
            ("Well", Designator::Power(1)),
            ("Castle", Designator::Power(1)),
        ] {
            Entry {
                name: name.to_string(),
                designator,
                point: Point::default(),
            }
            .apply(&mut locations);
        }

        let names: Vec<&str> = locations.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Castle", "Well"]);
        assert!(locations["Castle"].token.is_some());
        assert_eq!(locations["Castle"].powers.len(), 1);
    }
}

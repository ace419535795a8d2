use crate::error::{LocmapError, ParseError};
use crate::models::{Designator, Entry, LocationMap, Point};
use std::path::Path;
use tracing::debug;

/// Closing brackets that may trail the y value (`{x:1.0,y:2.0}`)
///
/// Only these are stripped. Any other trailing character, such as `;` or `!`,
/// leaves the y value unparseable and the line is rejected as `InvalidNumber`.
const CLOSING_BRACKETS: [char; 3] = ['}', ')', ']'];

/// Parser for line-oriented locations files
///
/// Every non-blank line has the form `<designator>: x:<float>,y:<float>` where the
/// designator is either `<name>.token` or `<name>.powers.<index>`.
pub struct LocationsParser;

impl LocationsParser {
    /// Reads and parses a locations file
    pub fn parse_file(path: &Path) -> Result<LocationMap, LocmapError> {
        let content = std::fs::read_to_string(path).map_err(|source| LocmapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let locations = Self::parse_str(&content)?;
        debug!(
            path = ?path,
            locations = locations.len(),
            "Parsed locations file"
        );
        Ok(locations)
    }

    /// Parses the whole text of a locations file, stopping at the first malformed line
    pub fn parse_str(content: &str) -> Result<LocationMap, ParseError> {
        let mut locations = LocationMap::new();
        for (idx, raw) in content.lines().enumerate() {
            if raw.trim().is_empty() {
                continue;
            }
            Self::parse_line(idx + 1, raw)?.apply(&mut locations);
        }
        Ok(locations)
    }

    /// Parses a single line; `line` is the 1-based line number used in errors
    pub fn parse_line(line: usize, text: &str) -> Result<Entry, ParseError> {
        let trimmed = text.trim();
        let mut segments = trimmed.split_whitespace();
        let (designator, value) = match (segments.next(), segments.next(), segments.next()) {
            (Some(designator), Some(value), None) => (designator, value),
            _ => {
                return Err(ParseError::MissingValue {
                    line,
                    text: trimmed.to_string(),
                })
            }
        };

        let designator = designator.strip_suffix(':').unwrap_or(designator);
        let (name, designator) = Self::parse_designator(line, designator)?;
        let point = Self::parse_point(line, value)?;

        Ok(Entry {
            name,
            designator,
            point,
        })
    }

    fn parse_designator(line: usize, designator: &str) -> Result<(String, Designator), ParseError> {
        let parts: Vec<&str> = designator.split('.').collect();
        match parts.as_slice() {
            [name, "token"] if !name.is_empty() => Ok((name.to_string(), Designator::Token)),
            [name, "powers", index] if !name.is_empty() => {
                let index = index.parse::<u32>().map_err(|_| ParseError::InvalidPowerIndex {
                    line,
                    index: index.to_string(),
                })?;
                Ok((name.to_string(), Designator::Power(index)))
            }
            _ => Err(ParseError::InvalidDesignator {
                line,
                designator: designator.to_string(),
            }),
        }
    }

    fn parse_point(line: usize, value: &str) -> Result<Point, ParseError> {
        let fields: Vec<&str> = value.split(',').collect();
        let [x_field, y_field] = fields.as_slice() else {
            return Err(ParseError::FieldCount {
                line,
                text: value.to_string(),
            });
        };

        let x = Self::parse_field(line, x_field)?;
        let y = Self::parse_field(line, y_field.trim_end_matches(CLOSING_BRACKETS))?;
        Ok(Point::new(x, y))
    }

    /// Parses the numeric part of a `label:value` field
    fn parse_field(line: usize, field: &str) -> Result<f64, ParseError> {
        let (_, raw) = field
            .split_once(':')
            .ok_or_else(|| ParseError::MalformedField {
                line,
                field: field.to_string(),
            })?;

        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| ParseError::InvalidNumber {
                line,
                value: raw.to_string(),
            })
    }
}

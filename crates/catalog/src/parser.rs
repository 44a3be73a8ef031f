//! Parser for the restaurant CSV export.
//!
//! The dataset is a comma-separated file with a header row. Columns are
//! located by name, so extra columns are ignored and order does not matter:
//! - required: name, city, primary_cuisine, cost_category, cost, rating
//! - optional: latitude, longitude
//!
//! Fields may be wrapped in double quotes (a doubled quote escapes a quote
//! inside a quoted field). Quoted fields cannot span lines.

use crate::error::{CatalogError, Result};
use crate::types::*;
use rayon::prelude::*;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Cell values treated as "no value" for optional fields
const MISSING_MARKERS: [&str; 5] = ["nan", "na", "n/a", "null", "none"];

/// Read a file with ISO-8859-1 encoding (Latin-1)
///
/// The export was written as Latin-1, not UTF-8. Every byte maps directly
/// to the Unicode code point of the same value, so decoding never fails.
fn read_lines_latin1(path: &Path) -> Result<Vec<String>> {
    let mut file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    let content: String = bytes.iter().map(|&b| b as char).collect();

    Ok(content.lines().map(|s| s.to_string()).collect())
}

/// Positions of the columns the loader reads, resolved from the header row
#[derive(Debug, Clone, Copy)]
struct Columns {
    name: usize,
    city: usize,
    primary_cuisine: usize,
    cost_category: usize,
    cost: usize,
    rating: usize,
    latitude: Option<usize>,
    longitude: Option<usize>,
}

impl Columns {
    fn from_header(header: &[String]) -> Result<Self> {
        let find = |column: &str| {
            header
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(column))
        };
        let require = |column: &str| {
            find(column).ok_or_else(|| CatalogError::MissingColumn {
                column: column.to_string(),
            })
        };

        Ok(Self {
            name: require("name")?,
            city: require("city")?,
            primary_cuisine: require("primary_cuisine")?,
            cost_category: require("cost_category")?,
            cost: require("cost")?,
            rating: require("rating")?,
            latitude: find("latitude"),
            longitude: find("longitude"),
        })
    }

    /// Smallest number of fields a row needs for every located column
    fn min_fields(&self) -> usize {
        [
            Some(self.name),
            Some(self.city),
            Some(self.primary_cuisine),
            Some(self.cost_category),
            Some(self.cost),
            Some(self.rating),
            self.latitude,
            self.longitude,
        ]
        .into_iter()
        .flatten()
        .max()
        .map_or(0, |idx| idx + 1)
    }
}

/// Split one CSV line into trimmed fields
///
/// Example: `a,"b, c","say ""hi"""` -> `["a", "b, c", "say \"hi\""]`
fn split_fields(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if current.trim().is_empty() => {
                current.clear();
                in_quotes = true;
            }
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }

    if in_quotes {
        return Err("Unterminated quoted field".to_string());
    }
    fields.push(current.trim().to_string());
    Ok(fields)
}

fn is_missing(value: &str) -> bool {
    value.is_empty() || MISSING_MARKERS.iter().any(|m| value.eq_ignore_ascii_case(m))
}

fn optional_text(value: &str) -> Option<String> {
    if is_missing(value) {
        None
    } else {
        Some(value.to_string())
    }
}

fn optional_number(value: &str, field: &str, line: usize) -> Result<Option<f64>> {
    if is_missing(value) {
        return Ok(None);
    }
    let invalid = || CatalogError::InvalidValue {
        line,
        field: field.to_string(),
        value: value.to_string(),
    };
    let number: f64 = value.parse().map_err(|_| invalid())?;
    if !number.is_finite() {
        return Err(invalid());
    }
    Ok(Some(number))
}

/// Parse and validate a single data row
fn parse_row(fields: &[String], columns: &Columns, line: usize) -> Result<Restaurant> {
    if fields.len() < columns.min_fields() {
        return Err(CatalogError::ParseError {
            line,
            reason: format!(
                "Expected at least {} fields but found {}",
                columns.min_fields(),
                fields.len()
            ),
        });
    }
    let invalid = |field: &str, value: &str| CatalogError::InvalidValue {
        line,
        field: field.to_string(),
        value: value.to_string(),
    };

    let name = fields[columns.name].clone();
    if name.is_empty() {
        return Err(CatalogError::ParseError {
            line,
            reason: "Missing name".to_string(),
        });
    }

    let cost_category = match optional_text(&fields[columns.cost_category]) {
        Some(raw) => Some(
            raw.parse::<CostCategory>()
                .map_err(|_| invalid("cost_category", &raw))?,
        ),
        None => None,
    };

    let cost = optional_number(&fields[columns.cost], "cost", line)?;
    if cost.is_some_and(|c| c < 0.0) {
        return Err(invalid("cost", &fields[columns.cost]));
    }

    let rating = optional_number(&fields[columns.rating], "rating", line)?;
    if rating.is_some_and(|r| !(0.0..=5.0).contains(&r)) {
        return Err(invalid("rating", &fields[columns.rating]));
    }

    let latitude = match columns.latitude {
        Some(idx) => optional_number(&fields[idx], "latitude", line)?,
        None => None,
    };
    let longitude = match columns.longitude {
        Some(idx) => optional_number(&fields[idx], "longitude", line)?,
        None => None,
    };
    let location = match (latitude, longitude) {
        (Some(lat), Some(lon)) => {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(invalid("latitude", &lat.to_string()));
            }
            if !(-180.0..=180.0).contains(&lon) {
                return Err(invalid("longitude", &lon.to_string()));
            }
            Some(GeoPoint {
                latitude: lat,
                longitude: lon,
            })
        }
        (None, None) => None,
        _ => {
            return Err(CatalogError::ParseError {
                line,
                reason: "latitude and longitude must be present together".to_string(),
            });
        }
    };

    Ok(Restaurant {
        name,
        city: fields[columns.city].clone(),
        primary_cuisine: optional_text(&fields[columns.primary_cuisine]),
        cost_category,
        cost,
        rating,
        location,
    })
}

/// Parse already-decoded lines (header first) into restaurant records
///
/// Blank lines are skipped. Rows are parsed in parallel; the returned
/// records keep file order.
pub fn parse_lines(lines: &[String]) -> Result<Vec<Restaurant>> {
    let Some(header_idx) = lines.iter().position(|l| !l.trim().is_empty()) else {
        return Ok(Vec::new());
    };
    let header = split_fields(&lines[header_idx]).map_err(|reason| CatalogError::ParseError {
        line: header_idx + 1,
        reason,
    })?;
    let columns = Columns::from_header(&header)?;

    let data_start = header_idx + 1;
    lines[data_start..]
        .par_iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            let line_no = data_start + idx + 1;
            let fields = split_fields(line).map_err(|reason| CatalogError::ParseError {
                line: line_no,
                reason,
            })?;
            parse_row(&fields, &columns, line_no)
        })
        .collect()
}

/// Parse the restaurant CSV file at `path`
pub fn parse_restaurants(path: &Path) -> Result<Vec<Restaurant>> {
    let lines = read_lines_latin1(path)?;
    parse_lines(&lines)
}

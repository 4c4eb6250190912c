/// Parsing of the textual railroad-map format into a [`RailMap`].
///
/// The format is a triangle of road symbols:
///
/// ```text
/// N            city count, N >= 1
/// s s ... s    N-1 symbols: roads from city 0 to cities 1..N-1
/// ...
/// s            1 symbol: the road from city N-2 to city N-1
/// ```
///
/// Row `i` (0-based) holds `N - 1 - i` symbols; symbol `j` of row `i`
/// describes the road between city `i` and city `i + j + 1`. The symbol
/// alphabet is `{B, R}` (see [`RoadKind`]); anything else fails with
/// [`MapParseError::UnknownRoadType`] and no verdict may be produced.
use serde::Serialize;

use crate::road::RoadKind;

// ---------------------------------------------------------------------------
// RailMap
// ---------------------------------------------------------------------------

/// A parsed railroad map: the city count plus the triangular road table.
///
/// Immutable after parsing. Row `i` of [`RailMap::rows`] holds the gauges of
/// the roads from city `i` to every higher-numbered city, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RailMap {
    city_count: usize,
    rows: Vec<Vec<RoadKind>>,
}

impl RailMap {
    /// Returns the number of cities in the map.
    pub fn city_count(&self) -> usize {
        self.city_count
    }

    /// Returns the triangular road table. Row `i`, entry `j` is the road
    /// between city `i` and city `i + j + 1`.
    pub fn rows(&self) -> &[Vec<RoadKind>] {
        &self.rows
    }

    /// Returns the total number of roads, `N * (N - 1) / 2`.
    pub fn road_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Returns the number of roads of the given gauge.
    pub fn roads_of_kind(&self, kind: RoadKind) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|&&k| k == kind)
            .count()
    }
}

// ---------------------------------------------------------------------------
// MapParseError
// ---------------------------------------------------------------------------

/// Errors that can occur while parsing the textual map format.
///
/// [`MapParseError::UnknownRoadType`] is the domain error: the input named a
/// road gauge outside the `{B, R}` alphabet. The remaining variants are
/// structural (wrong city count line, wrong row shape); all of them are
/// fatal — a malformed map never yields a verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapParseError {
    /// The first line is missing, not an integer, or names zero cities.
    InvalidCityCount {
        /// The offending first line, or `None` if the input was empty.
        line: Option<String>,
    },

    /// A road symbol outside the `{B, R}` alphabet.
    UnknownRoadType {
        /// 1-based input line number.
        line: usize,
        /// 1-based column within the line.
        column: usize,
        /// The unrecognized character.
        symbol: char,
    },

    /// The input ended before all `N - 1` road rows were read.
    MissingRow {
        /// 0-based index of the first missing row.
        row: usize,
        /// Number of road rows the city count implies.
        expected_rows: usize,
    },

    /// A road row has the wrong number of symbols.
    RowLength {
        /// 0-based index of the malformed row.
        row: usize,
        /// Number of symbols the row should contain.
        expected: usize,
        /// Number of symbols actually found.
        found: usize,
    },

    /// Non-blank content after the last road row.
    TrailingContent {
        /// 1-based input line number of the first trailing line.
        line: usize,
    },
}

impl std::fmt::Display for MapParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapParseError::InvalidCityCount { line: Some(line) } => {
                write!(f, "invalid city count: {line:?}")
            }
            MapParseError::InvalidCityCount { line: None } => {
                write!(f, "invalid city count: input is empty")
            }
            MapParseError::UnknownRoadType {
                line,
                column,
                symbol,
            } => {
                write!(
                    f,
                    "unknown road type {symbol:?} at line {line}, column {column} (expected 'B' or 'R')"
                )
            }
            MapParseError::MissingRow { row, expected_rows } => {
                write!(
                    f,
                    "missing road row {row}: expected {expected_rows} rows after the city count"
                )
            }
            MapParseError::RowLength {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "road row {row} has {found} symbols, expected {expected}"
                )
            }
            MapParseError::TrailingContent { line } => {
                write!(f, "unexpected content after the last road row at line {line}")
            }
        }
    }
}

impl std::error::Error for MapParseError {}

// ---------------------------------------------------------------------------
// parse_map
// ---------------------------------------------------------------------------

/// Parses the textual map format into a [`RailMap`].
///
/// Lines are split on `'\n'` with a trailing `'\r'` stripped, so CRLF input
/// is accepted. Blank lines after the last road row are tolerated; any other
/// surplus content is an error.
///
/// # Errors
///
/// - [`MapParseError::InvalidCityCount`] — first line missing, not an
///   integer, or `0`.
/// - [`MapParseError::UnknownRoadType`] — a symbol outside `{B, R}`.
/// - [`MapParseError::MissingRow`] — fewer than `N - 1` road rows.
/// - [`MapParseError::RowLength`] — row `i` does not hold `N - 1 - i`
///   symbols.
/// - [`MapParseError::TrailingContent`] — non-blank content after the last
///   row.
pub fn parse_map(input: &str) -> Result<RailMap, MapParseError> {
    let mut lines = input.lines();

    let count_line = lines.next().ok_or(MapParseError::InvalidCityCount { line: None })?;
    let city_count: usize = count_line
        .trim()
        .parse()
        .map_err(|_| MapParseError::InvalidCityCount {
            line: Some(count_line.to_owned()),
        })?;
    if city_count == 0 {
        return Err(MapParseError::InvalidCityCount {
            line: Some(count_line.to_owned()),
        });
    }

    let expected_rows = city_count - 1;
    let mut rows: Vec<Vec<RoadKind>> = Vec::with_capacity(expected_rows);

    for row_index in 0..expected_rows {
        let line = lines.next().ok_or(MapParseError::MissingRow {
            row: row_index,
            expected_rows,
        })?;
        // `lines()` already strips `\r\n`; only the row body remains.
        let expected_len = city_count - 1 - row_index;

        let mut row: Vec<RoadKind> = Vec::with_capacity(expected_len);
        for (col, symbol) in line.chars().enumerate() {
            let kind =
                RoadKind::try_from(symbol).map_err(|symbol| MapParseError::UnknownRoadType {
                    // +2: one for 1-based numbering, one for the count line.
                    line: row_index + 2,
                    column: col + 1,
                    symbol,
                })?;
            row.push(kind);
        }

        if row.len() != expected_len {
            return Err(MapParseError::RowLength {
                row: row_index,
                expected: expected_len,
                found: row.len(),
            });
        }
        rows.push(row);
    }

    // Tolerate trailing blank lines; reject anything else.
    for (extra, line) in lines.enumerate() {
        if !line.trim().is_empty() {
            return Err(MapParseError::TrailingContent {
                line: expected_rows + 2 + extra,
            });
        }
    }

    Ok(RailMap { city_count, rows })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

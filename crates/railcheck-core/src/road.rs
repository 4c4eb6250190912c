/// Road gauges and their input symbols.
///
/// Every pair of cities on a railroad map is connected by exactly one road,
/// and a road is either wide-gauge (`'B'`) or narrow-gauge (`'R'`). The gauge
/// decides the direction of the logical edge used for cycle detection: wide
/// roads point from the lower-numbered city to the higher-numbered one,
/// narrow roads point the other way. See [`crate::graph::build_graph`].
use serde::{Deserialize, Serialize};

/// The input symbol for a wide-gauge road.
pub const WIDE_SYMBOL: char = 'B';

/// The input symbol for a narrow-gauge road.
pub const NARROW_SYMBOL: char = 'R';

/// The gauge of a single road between two cities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadKind {
    /// Wide gauge (`'B'`): the logical edge points low → high.
    Wide,
    /// Narrow gauge (`'R'`): the logical edge points high → low.
    Narrow,
}

impl RoadKind {
    /// Returns the input symbol for this gauge.
    pub fn symbol(self) -> char {
        match self {
            RoadKind::Wide => WIDE_SYMBOL,
            RoadKind::Narrow => NARROW_SYMBOL,
        }
    }

    /// Returns the `snake_case` name of this gauge.
    pub fn as_str(self) -> &'static str {
        match self {
            RoadKind::Wide => "wide",
            RoadKind::Narrow => "narrow",
        }
    }
}

impl TryFrom<char> for RoadKind {
    type Error = char;

    /// Maps an input symbol to its gauge.
    ///
    /// This is the single point where an unrecognized road symbol is
    /// rejected; the offending character is returned as the error so the
    /// parser can wrap it with position information.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            WIDE_SYMBOL => Ok(RoadKind::Wide),
            NARROW_SYMBOL => Ok(RoadKind::Narrow),
            other => Err(other),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

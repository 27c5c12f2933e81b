//! Discrete edge-weight scale.
//!
//! Edge weights live on the ordered scale `…, 1/4, 1/3, 1/2, 1, 2, 3, …`:
//! either an integer `n ≥ 1` or a unit fraction `1/k` with `k ≥ 2`.
//! Every write goes through [`Weight::normalize`], so nothing else can be
//! stored on an edge.
//!
//! Internally a weight is its position ("rank") on that scale: integers map
//! to themselves and `1/k` maps to `2 - k`, so `1/2` is rank 0, `1/3` is
//! rank -1 and so on. Stepping is then plain integer arithmetic.

use serde::{Deserialize, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Largest integer weight and largest fraction denominator.
const MAX_MAGNITUDE: i64 = u32::MAX as i64;

/// A normalized, strictly positive edge weight.
///
/// Serializes as a JSON integer for whole weights and as a float for
/// fractions; deserializes from any [`RawWeight`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(from = "RawWeight")]
pub struct Weight {
    rank: i64,
}

/// Direction of a single step along the weight scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepDirection {
    /// Towards larger weights (`1/3 → 1/2 → 1 → 2`).
    Up,
    /// Towards smaller weights (`2 → 1 → 1/2 → 1/3`).
    Down,
}

impl Weight {
    /// The default weight of a fresh edge.
    pub const ONE: Weight = Weight { rank: 1 };

    /// Integer weight `n`; zero is lifted to 1.
    pub fn integer(n: u32) -> Self {
        Weight {
            rank: i64::from(n.max(1)),
        }
    }

    /// Unit fraction `1/k`; denominators below 2 collapse to 1.
    pub fn unit_fraction(k: u32) -> Self {
        if k <= 1 {
            Self::ONE
        } else {
            Weight {
                rank: 2 - i64::from(k),
            }
        }
    }

    /// Snap an arbitrary number onto the scale.
    ///
    /// Values `≥ 1` round to the nearest integer, values in `(0, 1)` snap to
    /// the nearest unit fraction with denominator `≥ 2`. Non-finite and
    /// non-positive input normalizes to 1.
    pub fn normalize(raw: f64) -> Self {
        if !raw.is_finite() || raw <= 0.0 {
            return Self::ONE;
        }
        if raw >= 1.0 {
            let n = raw.round().min(MAX_MAGNITUDE as f64);
            return Self::integer(n as u32);
        }
        let k = (1.0 / raw).round().clamp(2.0, MAX_MAGNITUDE as f64);
        Self::unit_fraction(k as u32)
    }

    /// Parse user input: a number (`"3"`, `"0.5"`) or a ratio (`"1/3"`).
    ///
    /// Anything unparseable normalizes to 1.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let value = match raw.split_once('/') {
            Some((num, den)) => match (num.trim().parse::<f64>(), den.trim().parse::<f64>()) {
                (Ok(num), Ok(den)) if den != 0.0 => num / den,
                _ => return Self::ONE,
            },
            None => match raw.parse::<f64>() {
                Ok(v) => v,
                Err(_) => return Self::ONE,
            },
        };
        Self::normalize(value)
    }

    /// Numeric value used for route costs.
    pub fn value(self) -> f64 {
        if self.rank >= 1 {
            self.rank as f64
        } else {
            1.0 / (2 - self.rank) as f64
        }
    }

    /// Integer value, if this weight is not a fraction.
    pub fn as_integer(self) -> Option<u32> {
        (self.rank >= 1).then(|| self.rank as u32)
    }

    /// Denominator `k` of `1/k`, if this weight is a fraction.
    pub fn denominator(self) -> Option<u32> {
        (self.rank <= 0).then(|| (2 - self.rank) as u32)
    }

    /// Move one position along the scale, saturating at the extremes.
    ///
    /// `1 ↓ = 1/2`, `1/2 ↑ = 1`, `1/k ↑ = 1/(k-1)`.
    pub fn step(self, direction: StepDirection) -> Self {
        let rank = match direction {
            StepDirection::Up => self.rank + 1,
            StepDirection::Down => self.rank - 1,
        };
        Weight {
            rank: rank.clamp(2 - MAX_MAGNITUDE, MAX_MAGNITUDE),
        }
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.denominator() {
            Some(k) => write!(f, "1/{}", k),
            None => write!(f, "{}", self.rank),
        }
    }
}

impl FromStr for Weight {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Weight::parse(s))
    }
}

impl Serialize for Weight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_integer() {
            Some(n) => serializer.serialize_u32(n),
            None => serializer.serialize_f64(self.value()),
        }
    }
}

impl From<Weight> for f64 {
    fn from(w: Weight) -> f64 {
        w.value()
    }
}

/// Unnormalized weight input, as found in documents and commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawWeight {
    /// A JSON number.
    Number(f64),
    /// A textual weight such as `"2"` or `"1/4"`.
    Text(String),
}

impl RawWeight {
    /// Normalize onto the weight scale.
    pub fn normalize(&self) -> Weight {
        match self {
            RawWeight::Number(v) => Weight::normalize(*v),
            RawWeight::Text(s) => Weight::parse(s),
        }
    }
}

impl From<RawWeight> for Weight {
    fn from(raw: RawWeight) -> Self {
        raw.normalize()
    }
}

impl From<f64> for RawWeight {
    fn from(v: f64) -> Self {
        RawWeight::Number(v)
    }
}

impl From<&str> for RawWeight {
    fn from(s: &str) -> Self {
        RawWeight::Text(s.to_string())
    }
}

impl From<String> for RawWeight {
    fn from(s: String) -> Self {
        RawWeight::Text(s)
    }
}

//! Comfort class of a route.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an unrecognised comfort class.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid comfort class: {name}")]
pub struct InvalidComfort {
    name: String,
}

/// Travel class offered on a route.
///
/// Comfort is informational: it is reported on trip segments but never
/// influences which path the planner selects.
///
/// # Examples
///
/// ```
/// use trip_planner::domain::Comfort;
///
/// let premium = Comfort::parse("Premium").unwrap();
/// assert_eq!(premium.as_str(), "Premium");
/// assert_eq!(premium.comfort_score(), 4);
///
/// // Names are case-sensitive
/// assert!(Comfort::parse("premium").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comfort {
    Economy,
    Standard,
    Premium,
    Express,
}

impl Comfort {
    /// Every comfort class, in ascending order of price.
    pub const ALL: [Comfort; 4] = [
        Comfort::Economy,
        Comfort::Standard,
        Comfort::Express,
        Comfort::Premium,
    ];

    /// Parse a comfort class from its name.
    pub fn parse(s: &str) -> Result<Self, InvalidComfort> {
        match s {
            "Economy" => Ok(Comfort::Economy),
            "Standard" => Ok(Comfort::Standard),
            "Premium" => Ok(Comfort::Premium),
            "Express" => Ok(Comfort::Express),
            _ => Err(InvalidComfort {
                name: s.to_string(),
            }),
        }
    }

    /// Returns the class name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Comfort::Economy => "Economy",
            Comfort::Standard => "Standard",
            Comfort::Premium => "Premium",
            Comfort::Express => "Express",
        }
    }

    /// Passenger-facing comfort score, 1 (basic) to 4 (luxury).
    pub fn comfort_score(&self) -> u8 {
        match self {
            Comfort::Economy => 1,
            Comfort::Standard => 2,
            Comfort::Express => 3,
            Comfort::Premium => 4,
        }
    }

    /// Fare multiplier relative to an Economy ticket.
    pub fn price_factor(&self) -> f64 {
        match self {
            Comfort::Economy => 1.0,
            Comfort::Standard => 1.3,
            Comfort::Express => 1.5,
            Comfort::Premium => 1.8,
        }
    }
}

impl FromStr for Comfort {
    type Err = InvalidComfort;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Comfort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_classes() {
        assert_eq!(Comfort::parse("Economy"), Ok(Comfort::Economy));
        assert_eq!(Comfort::parse("Standard"), Ok(Comfort::Standard));
        assert_eq!(Comfort::parse("Premium"), Ok(Comfort::Premium));
        assert_eq!(Comfort::parse("Express"), Ok(Comfort::Express));
    }

    #[test]
    fn reject_unknown() {
        assert!(Comfort::parse("").is_err());
        assert!(Comfort::parse("economy").is_err());
        assert!(Comfort::parse("First").is_err());
    }

    #[test]
    fn error_display() {
        let err = Comfort::parse("First").unwrap_err();
        assert_eq!(err.to_string(), "invalid comfort class: First");
    }

    #[test]
    fn display_roundtrip() {
        for comfort in Comfort::ALL {
            assert_eq!(comfort.to_string().parse::<Comfort>(), Ok(comfort));
        }
    }

    #[test]
    fn all_is_ordered_by_price() {
        let factors: Vec<f64> = Comfort::ALL.iter().map(Comfort::price_factor).collect();
        assert!(factors.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn scores() {
        assert_eq!(Comfort::Economy.comfort_score(), 1);
        assert_eq!(Comfort::Standard.comfort_score(), 2);
        assert_eq!(Comfort::Express.comfort_score(), 3);
        assert_eq!(Comfort::Premium.comfort_score(), 4);
    }
}

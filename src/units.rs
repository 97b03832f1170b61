use std::str::FromStr;

use crate::errors::FlightError;

/// Measurement units accepted for distances and speeds.
///
/// The drone itself always works in centimetres; values in any other
/// units are converted before being sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Centimetres,
    Inches,
    Metres,
    Feet,
}

impl Units {
    /// Converts a value in these units to whole centimetres.
    pub fn to_cm(&self, value: f64) -> i64 {
        let factor = match self {
            Units::Centimetres => 1.0,
            Units::Inches => 2.54,
            Units::Metres => 100.0,
            Units::Feet => 30.48,
        };
        (value * factor).round() as i64
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Centimetres => "cm",
            Units::Inches => "in",
            Units::Metres => "m",
            Units::Feet => "ft",
        }
    }
}

impl FromStr for Units {
    type Err = FlightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cm" => Ok(Units::Centimetres),
            "in" => Ok(Units::Inches),
            "m" => Ok(Units::Metres),
            "ft" => Ok(Units::Feet),
            _ => Err(FlightError::IncorrectUnits { msg: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_whole_centimetres() {
        assert_eq!(Units::Centimetres.to_cm(42.0), 42);
        assert_eq!(Units::Inches.to_cm(12.0), 30);
        assert_eq!(Units::Metres.to_cm(1.0), 100);
        assert_eq!(Units::Metres.to_cm(2.5), 250);
        assert_eq!(Units::Feet.to_cm(3.0), 91);
    }

    #[test]
    fn parses_unit_names() {
        assert_eq!("cm".parse::<Units>().unwrap(), Units::Centimetres);
        assert_eq!("in".parse::<Units>().unwrap(), Units::Inches);
        assert_eq!("m".parse::<Units>().unwrap(), Units::Metres);
        assert_eq!("ft".parse::<Units>().unwrap(), Units::Feet);
        assert!("furlongs".parse::<Units>().is_err());
    }
}

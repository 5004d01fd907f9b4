//! Domain types for graphs and pixels.

use crate::error::{PixelaError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a graph on the service, always of the form `graph<N>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraphId(String);

impl GraphId {
    /// Builds the id for the `sequence`-th graph of an account.
    pub fn from_sequence(sequence: u32) -> Result<Self> {
        crate::ensure!(
            sequence > 0,
            PixelaError::validation_field(
                "graph sequence number must be positive",
                "sequence_number",
            )
        );
        Ok(Self(format!("graph{sequence}")))
    }

    /// The id as sent on the wire.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for GraphId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated calendar date for a pixel, serialized as `YYYYMMDD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PixelDate(NaiveDate);

impl PixelDate {
    /// Validates a (year, month, day) triple.
    ///
    /// Years outside `1..=9999` are rejected so the wire form stays eight digits.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        crate::ensure!(
            (1..=9999).contains(&year),
            PixelaError::validation_field(format!("year {year} is out of range 1..=9999"), "date")
        );
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                PixelaError::validation_field(
                    format!("{year:04}-{month:02}-{day:02} is not a valid calendar date"),
                    "date",
                )
            })
    }

    /// Wire representation, e.g. `20250920`.
    pub fn to_wire(self) -> String {
        format!(
            "{:04}{:02}{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }

    /// The underlying chrono date.
    pub const fn as_naive(self) -> NaiveDate {
        self.0
    }
}

impl From<PixelDate> for NaiveDate {
    fn from(date: PixelDate) -> Self {
        date.0
    }
}

impl TryFrom<NaiveDate> for PixelDate {
    type Error = PixelaError;

    fn try_from(date: NaiveDate) -> Result<Self> {
        Self::from_ymd(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for PixelDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

/// Accepts both `YYYYMMDD` and `YYYY-MM-DD`.
impl FromStr for PixelDate {
    type Err = PixelaError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let parsed = if s.len() == 8 && s.bytes().all(|b| b.is_ascii_digit()) {
            NaiveDate::parse_from_str(s, "%Y%m%d")
        } else {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
        };
        let date = parsed.map_err(|_| {
            PixelaError::validation_field(
                format!("'{s}' is not a date (expected YYYYMMDD or YYYY-MM-DD)"),
                "date",
            )
        })?;
        Self::try_from(date)
    }
}

impl Serialize for PixelDate {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

impl<'de> Deserialize<'de> for PixelDate {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Kind of quantity a graph records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Whole numbers
    Int,
    /// Floating point numbers
    Float,
}

impl ValueType {
    /// Wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueType {
    type Err = PixelaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "int" | "integer" => Ok(Self::Int),
            "float" => Ok(Self::Float),
            other => Err(PixelaError::validation_field(
                format!("unsupported value type '{other}' (expected int or float)"),
                "type",
            )),
        }
    }
}

/// Display colour of a graph's pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphColor {
    /// Green
    Shibafu,
    /// Red
    Momiji,
    /// Blue
    Sora,
    /// Yellow
    Ichou,
    /// Purple
    Ajisai,
    /// Black
    Kuro,
}

impl GraphColor {
    /// Every supported colour, in the service's documented order.
    pub const ALL: [Self; 6] = [
        Self::Shibafu,
        Self::Momiji,
        Self::Sora,
        Self::Ichou,
        Self::Ajisai,
        Self::Kuro,
    ];

    /// Wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shibafu => "shibafu",
            Self::Momiji => "momiji",
            Self::Sora => "sora",
            Self::Ichou => "ichou",
            Self::Ajisai => "ajisai",
            Self::Kuro => "kuro",
        }
    }

    /// English colour name.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Shibafu => "green",
            Self::Momiji => "red",
            Self::Sora => "blue",
            Self::Ichou => "yellow",
            Self::Ajisai => "purple",
            Self::Kuro => "black",
        }
    }
}

impl fmt::Display for GraphColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraphColor {
    type Err = PixelaError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|color| color.as_str() == wanted || color.display_name() == wanted)
            .ok_or_else(|| {
                let message = format!("unsupported graph color '{wanted}'");
                PixelaError::validation_field(message, "color")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_id_from_sequence() {
        assert_eq!(GraphId::from_sequence(1).unwrap().as_str(), "graph1");
        assert_eq!(GraphId::from_sequence(42).unwrap().to_string(), "graph42");
        assert!(GraphId::from_sequence(0).unwrap_err().is_validation());
    }

    #[test]
    fn test_pixel_date_wire_format() {
        assert_eq!(PixelDate::from_ymd(2025, 9, 20).unwrap().to_wire(), "20250920");
        assert_eq!(PixelDate::from_ymd(2025, 1, 5).unwrap().to_wire(), "20250105");
        assert_eq!(PixelDate::from_ymd(812, 3, 4).unwrap().to_wire(), "08120304");
    }

    #[test]
    fn test_pixel_date_rejects_invalid_dates() {
        let invalid = [
            (2025, 2, 30),
            (2025, 13, 1),
            (2025, 0, 10),
            (2025, 4, 31),
            (2023, 2, 29),
            (0, 1, 1),
            (10000, 1, 1),
        ];
        for (y, m, d) in invalid {
            let error = PixelDate::from_ymd(y, m, d).unwrap_err();
            assert!(error.is_validation(), "{y}-{m}-{d} should be rejected");
        }
        assert!(PixelDate::from_ymd(2024, 2, 29).is_ok());
    }

    #[test]
    fn test_pixel_date_parsing() {
        let compact: PixelDate = "20250920".parse().unwrap();
        let dashed: PixelDate = "2025-09-20".parse().unwrap();
        assert_eq!(compact, dashed);
        assert!("20250230".parse::<PixelDate>().is_err());
        assert!("yesterday".parse::<PixelDate>().is_err());
    }

    #[test]
    fn test_pixel_date_serde() {
        let date = PixelDate::from_ymd(2025, 9, 20).unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), r#""20250920""#);
        let back: PixelDate = serde_json::from_str(r#""20250920""#).unwrap();
        assert_eq!(back, date);
    }

    #[test]
    fn test_value_type_names() {
        assert_eq!(serde_json::to_string(&ValueType::Int).unwrap(), r#""int""#);
        assert_eq!("float".parse::<ValueType>().unwrap(), ValueType::Float);
        assert_eq!("Integer".parse::<ValueType>().unwrap(), ValueType::Int);
        assert!("decimal".parse::<ValueType>().is_err());
    }

    #[test]
    fn test_graph_color_names() {
        assert_eq!(serde_json::to_string(&GraphColor::Shibafu).unwrap(), r#""shibafu""#);
        assert_eq!("purple".parse::<GraphColor>().unwrap(), GraphColor::Ajisai);
        assert_eq!("KURO".parse::<GraphColor>().unwrap(), GraphColor::Kuro);
        assert_eq!(GraphColor::Momiji.display_name(), "red");
        assert!("orange".parse::<GraphColor>().is_err());
    }
}

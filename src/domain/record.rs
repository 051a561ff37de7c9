//! Input records and column naming (input boundary).
//!
//! A [`RawRecord`] is one row as handed over by whatever reads the user's
//! file. Every recognised field is carried as a [`FieldValue`], so "absent",
//! "blank" and "numeric" are explicit states rather than map lookups.

use std::fmt;
use std::str::FromStr;

/// The six input fields the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Symbol,
    Open,
    High,
    Low,
    Close,
    PreviousClose,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Symbol,
        Field::Open,
        Field::High,
        Field::Low,
        Field::Close,
        Field::PreviousClose,
    ];

    /// Fields that must parse for a row to compute.
    pub const REQUIRED: [Field; 3] = [Field::High, Field::Low, Field::Close];
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(FieldNaming::Standard.column(*self))
    }
}

/// A single cell value as received.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    #[default]
    Missing,
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// Blank strings stay `Text`; coercion decides what blank means.
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<Option<&str>> for FieldValue {
    fn from(value: Option<&str>) -> Self {
        match value {
            Some(v) => FieldValue::Text(v.to_string()),
            None => FieldValue::Missing,
        }
    }
}

/// One input row, before any parsing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub symbol: FieldValue,
    pub open: FieldValue,
    pub high: FieldValue,
    pub low: FieldValue,
    pub close: FieldValue,
    pub previous_close: FieldValue,
}

impl RawRecord {
    pub fn get(&self, field: Field) -> &FieldValue {
        match field {
            Field::Symbol => &self.symbol,
            Field::Open => &self.open,
            Field::High => &self.high,
            Field::Low => &self.low,
            Field::Close => &self.close,
            Field::PreviousClose => &self.previous_close,
        }
    }

    pub fn set(&mut self, field: Field, value: FieldValue) {
        let slot = match field {
            Field::Symbol => &mut self.symbol,
            Field::Open => &mut self.open,
            Field::High => &mut self.high,
            Field::Low => &mut self.low,
            Field::Close => &mut self.close,
            Field::PreviousClose => &mut self.previous_close,
        };
        *slot = value;
    }

    pub fn with(mut self, field: Field, value: impl Into<FieldValue>) -> Self {
        self.set(field, value.into());
        self
    }
}

/// Column naming scheme of the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldNaming {
    /// `Symbol, Open, High, Low, Close, Previous Close`
    Standard,
    /// `SYMBOL, OPEN_PRICE, HIGH_PRICE, LOW_PRICE, CLOSE_PRICE, PREV_CL_PR`
    Exchange,
}

impl FieldNaming {
    pub fn column(self, field: Field) -> &'static str {
        match (self, field) {
            (FieldNaming::Standard, Field::Symbol) => "Symbol",
            (FieldNaming::Standard, Field::Open) => "Open",
            (FieldNaming::Standard, Field::High) => "High",
            (FieldNaming::Standard, Field::Low) => "Low",
            (FieldNaming::Standard, Field::Close) => "Close",
            (FieldNaming::Standard, Field::PreviousClose) => "Previous Close",
            (FieldNaming::Exchange, Field::Symbol) => "SYMBOL",
            (FieldNaming::Exchange, Field::Open) => "OPEN_PRICE",
            (FieldNaming::Exchange, Field::High) => "HIGH_PRICE",
            (FieldNaming::Exchange, Field::Low) => "LOW_PRICE",
            (FieldNaming::Exchange, Field::Close) => "CLOSE_PRICE",
            (FieldNaming::Exchange, Field::PreviousClose) => "PREV_CL_PR",
        }
    }

    /// Field named by `header` under this scheme. Surrounding whitespace is
    /// ignored; matching is otherwise exact.
    pub fn field_for(self, header: &str) -> Option<Field> {
        let header = header.trim();
        Field::ALL
            .into_iter()
            .find(|&field| self.column(field) == header)
    }

    /// Required columns absent from `headers`, in declaration order.
    pub fn missing_required<'a, I>(self, headers: I) -> Vec<&'static str>
    where
        I: IntoIterator<Item = &'a str> + Clone,
    {
        Field::REQUIRED
            .into_iter()
            .filter(|&field| {
                !headers
                    .clone()
                    .into_iter()
                    .any(|h| self.field_for(h) == Some(field))
            })
            .map(|field| self.column(field))
            .collect()
    }

    /// Picks the scheme whose required columns are all present. `Standard`
    /// wins when both match.
    pub fn detect<'a, I>(headers: I) -> Option<FieldNaming>
    where
        I: IntoIterator<Item = &'a str> + Clone,
    {
        [FieldNaming::Standard, FieldNaming::Exchange]
            .into_iter()
            .find(|naming| naming.missing_required(headers.clone()).is_empty())
    }
}

impl fmt::Display for FieldNaming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldNaming::Standard => write!(f, "standard"),
            FieldNaming::Exchange => write!(f, "exchange"),
        }
    }
}

impl FromStr for FieldNaming {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(FieldNaming::Standard),
            "exchange" => Ok(FieldNaming::Exchange),
            other => Err(format!("unknown field naming '{other}'")),
        }
    }
}

/// How the input's column names are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamingChoice {
    /// Detect from the header row.
    #[default]
    Auto,
    Fixed(FieldNaming),
}

impl NamingChoice {
    /// Resolve against a header row. `None` when auto-detection finds no
    /// matching scheme.
    pub fn resolve<'a, I>(self, headers: I) -> Option<FieldNaming>
    where
        I: IntoIterator<Item = &'a str> + Clone,
    {
        match self {
            NamingChoice::Fixed(naming) => Some(naming),
            NamingChoice::Auto => FieldNaming::detect(headers),
        }
    }
}

impl FromStr for NamingChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") {
            Ok(NamingChoice::Auto)
        } else {
            s.parse::<FieldNaming>().map(NamingChoice::Fixed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_names_standard() {
        let n = FieldNaming::Standard;
        assert_eq!(n.column(Field::Symbol), "Symbol");
        assert_eq!(n.column(Field::PreviousClose), "Previous Close");
    }

    #[test]
    fn column_names_exchange() {
        let n = FieldNaming::Exchange;
        assert_eq!(n.column(Field::High), "HIGH_PRICE");
        assert_eq!(n.column(Field::PreviousClose), "PREV_CL_PR");
    }

    #[test]
    fn field_for_trims_header() {
        assert_eq!(
            FieldNaming::Standard.field_for("  Previous Close "),
            Some(Field::PreviousClose)
        );
        assert_eq!(FieldNaming::Standard.field_for("HIGH_PRICE"), None);
        assert_eq!(FieldNaming::Exchange.field_for("HIGH_PRICE"), Some(Field::High));
    }

    #[test]
    fn missing_required_lists_absent_columns() {
        let headers = ["Symbol", "High", "Volume"];
        assert_eq!(
            FieldNaming::Standard.missing_required(headers),
            vec!["Low", "Close"]
        );
    }

    #[test]
    fn detect_standard() {
        let headers = ["Symbol", "High", "Low", "Close"];
        assert_eq!(FieldNaming::detect(headers), Some(FieldNaming::Standard));
    }

    #[test]
    fn detect_exchange() {
        let headers = ["SYMBOL", "OPEN_PRICE", "HIGH_PRICE", "LOW_PRICE", "CLOSE_PRICE"];
        assert_eq!(FieldNaming::detect(headers), Some(FieldNaming::Exchange));
    }

    #[test]
    fn detect_none_when_incomplete() {
        let headers = ["Symbol", "High", "LOW_PRICE"];
        assert_eq!(FieldNaming::detect(headers), None);
    }

    #[test]
    fn naming_from_str() {
        assert_eq!("Standard".parse::<FieldNaming>(), Ok(FieldNaming::Standard));
        assert_eq!(" exchange ".parse::<FieldNaming>(), Ok(FieldNaming::Exchange));
        assert!("nse".parse::<FieldNaming>().is_err());
    }

    #[test]
    fn naming_choice_parses_auto() {
        assert_eq!("AUTO".parse::<NamingChoice>(), Ok(NamingChoice::Auto));
        assert_eq!(
            "exchange".parse::<NamingChoice>(),
            Ok(NamingChoice::Fixed(FieldNaming::Exchange))
        );
    }

    #[test]
    fn naming_choice_fixed_ignores_headers() {
        let headers = ["Symbol", "High", "Low", "Close"];
        assert_eq!(
            NamingChoice::Fixed(FieldNaming::Exchange).resolve(headers),
            Some(FieldNaming::Exchange)
        );
        assert_eq!(NamingChoice::Auto.resolve(headers), Some(FieldNaming::Standard));
    }

    #[test]
    fn record_builder_sets_fields() {
        let rec = RawRecord::default()
            .with(Field::Symbol, "BHP")
            .with(Field::High, 110.0);
        assert_eq!(rec.get(Field::Symbol), &FieldValue::text("BHP"));
        assert_eq!(rec.get(Field::High), &FieldValue::Number(110.0));
        assert!(rec.get(Field::Open).is_missing());
    }
}

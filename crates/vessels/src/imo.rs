//! IMO ship identification numbers.
//!
//! An IMO number is the literal prefix `IMO` (any case) followed by exactly
//! seven decimal digits. The last digit is a check digit: the first six digits
//! are weighted 7, 6, 5, 4, 3, 2 and the sum taken modulo 10.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use fleet_core::{FleetError, FleetResult};

const PREFIX: &str = "IMO";
const DIGIT_COUNT: usize = 7;
const WEIGHTS: [u32; 6] = [7, 6, 5, 4, 3, 2];

/// A validated IMO number.
///
/// Only obtainable through [`ImoNumber::parse`] (or the conversions built on
/// it), so holding one proves the text passed every rule. The original text is
/// kept verbatim, including the case of the prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImoNumber(String);

impl ImoNumber {
    /// Validate `raw` as an IMO number. The first violated rule wins.
    pub fn parse(raw: &str) -> FleetResult<Self> {
        let has_prefix = raw
            .get(..PREFIX.len())
            .is_some_and(|p| p.eq_ignore_ascii_case(PREFIX));
        if !has_prefix {
            return Err(FleetError::invalid_imo(
                "IMO number must start with the letters \"IMO\".",
            ));
        }

        let digits = &raw[PREFIX.len()..];
        if digits.chars().count() != DIGIT_COUNT {
            return Err(FleetError::invalid_imo(
                "After the \"IMO\" prefix, exactly 7 digits are required.",
            ));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FleetError::invalid_imo(
                "The characters after \"IMO\" must all be digits.",
            ));
        }

        let values: Vec<u8> = digits.bytes().map(|b| b - b'0').collect();
        let mut body = [0u8; 6];
        body.copy_from_slice(&values[..6]);

        let expected = checksum_digit(body);
        let actual = values[6];
        if actual != expected {
            return Err(FleetError::invalid_imo(format!(
                "Invalid IMO checksum: expected {expected}, but found {actual}."
            )));
        }

        Ok(Self(raw.to_owned()))
    }

    /// Like [`ImoNumber::parse`], for callers whose input may be missing.
    pub fn parse_opt(raw: Option<&str>) -> FleetResult<Self> {
        match raw {
            Some(raw) => Self::parse(raw),
            None => Err(FleetError::invalid_imo("IMO number must not be null.")),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Check digit for the first six digits (each `0..=9`) of an IMO number.
pub fn checksum_digit(first_six: [u8; 6]) -> u8 {
    let sum: u32 = first_six
        .iter()
        .zip(WEIGHTS)
        .map(|(&d, w)| u32::from(d) * w)
        .sum();
    (sum % 10) as u8
}

impl core::fmt::Display for ImoNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ImoNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::borrow::Borrow<str> for ImoNumber {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for ImoNumber {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ImoNumber {
    type Error = FleetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for ImoNumber {
    type Error = FleetError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ImoNumber> for String {
    fn from(value: ImoNumber) -> Self {
        value.0
    }
}

//! Lenient numeric deserializers
//!
//! Crowdsourced exports are loosely typed: the same column may hold numbers,
//! numeric strings, blanks or junk. These helpers coerce what they can and
//! map everything else to `None`, matching a "to numeric, errors become
//! missing" policy.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Int(i64),
    Float(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

impl Loose {
    fn into_f64(self) -> Option<f64> {
        match self {
            Loose::Int(v) => Some(v as f64),
            Loose::Float(v) => Some(v),
            Loose::Text(s) => s.trim().parse::<f64>().ok(),
            Loose::Other(_) => None,
        }
        .filter(|v| v.is_finite())
    }
}

/// Integer or numeric string; anything non-integral becomes `None`
pub fn optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Loose>::deserialize(deserializer)?;
    Ok(value.and_then(|loose| match loose {
        Loose::Int(v) => Some(v),
        other => other
            .into_f64()
            .filter(|v| v.fract() == 0.0 && v.abs() < i64::MAX as f64)
            .map(|v| v as i64),
    }))
}

/// Integer or numeric string narrowed to `i32`
pub fn optional_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_i64(deserializer)?.and_then(|v| i32::try_from(v).ok()))
}

/// Integer or numeric string narrowed to `u32`
pub fn optional_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_i64(deserializer)?.and_then(|v| u32::try_from(v).ok()))
}

/// Integer or numeric string narrowed to `u16`
pub fn optional_u16<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_i64(deserializer)?.and_then(|v| u16::try_from(v).ok()))
}

/// Float or numeric string; NaN and junk become `None`
pub fn optional_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Loose>::deserialize(deserializer)?;
    Ok(value.and_then(Loose::into_f64))
}

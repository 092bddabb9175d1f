//! Wire duration scalars, `P<n>D` for days and `P<n>N` for nights.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::WireError;

lazy_static! {
    static ref DAYS_RE: Regex = Regex::new(r"^P(?P<n>[0-9]+)D$").unwrap();
    static ref NIGHTS_RE: Regex = Regex::new(r"^P(?P<n>[0-9]+)N$").unwrap();
}

/// A duration counted in days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Days(pub u32);

impl FromStr for Days {
    type Err = WireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = DAYS_RE.captures(s).ok_or_else(|| {
            WireError::Decode(format!(
                "invalid duration format: {s}, expected format is 'PxD'"
            ))
        })?;
        // The pattern guarantees digits only.
        let n = caps["n"].parse().map_err(|_| {
            WireError::Decode(format!("duration out of range: {s}"))
        })?;
        Ok(Self(n))
    }
}

impl fmt::Display for Days {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}D", self.0)
    }
}

impl Serialize for Days {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Days {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A duration counted in nights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nights(pub u32);

impl FromStr for Nights {
    type Err = WireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = NIGHTS_RE.captures(s).ok_or_else(|| {
            WireError::Decode(format!(
                "invalid duration format: {s}, expected format is 'PxN'"
            ))
        })?;
        let n = caps["n"].parse().map_err(|_| {
            WireError::Decode(format!("duration out of range: {s}"))
        })?;
        Ok(Self(n))
    }
}

impl fmt::Display for Nights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}N", self.0)
    }
}

impl Serialize for Nights {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Nights {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

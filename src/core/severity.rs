//! Severity definitions
//!
//! Severities are ordered by verbosity: a lower number is more severe.
//! `Debug` deliberately ranks above `Warn` and `Info`.

use super::error::LoggerError;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Severity {
    Fatal = 0,
    Error = 1,
    Debug = 2,
    Warn = 3,
    Info = 4,
    Trace = 5,
    #[default]
    Silly = 6,
}

impl Severity {
    /// Every severity, most severe first
    pub const ALL: [Severity; 7] = [
        Severity::Fatal,
        Severity::Error,
        Severity::Debug,
        Severity::Warn,
        Severity::Info,
        Severity::Trace,
        Severity::Silly,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Fatal => "fatal",
            Severity::Error => "error",
            Severity::Debug => "debug",
            Severity::Warn => "warn",
            Severity::Info => "info",
            Severity::Trace => "trace",
            Severity::Silly => "silly",
        }
    }

    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Whether records at this severity belong on the error stream
    #[inline]
    pub fn is_error_stream(self) -> bool {
        self <= Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fatal" => Ok(Severity::Fatal),
            "error" => Ok(Severity::Error),
            "debug" => Ok(Severity::Debug),
            "warn" | "warning" => Ok(Severity::Warn),
            "info" => Ok(Severity::Info),
            "trace" => Ok(Severity::Trace),
            "silly" => Ok(Severity::Silly),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = LoggerError;

    fn try_from(value: u8) -> Result<Self, LoggerError> {
        Severity::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| LoggerError::invalid_level(value.to_string()))
    }
}

impl From<Severity> for u8 {
    fn from(level: Severity) -> Self {
        level.as_u8()
    }
}

// Records carry the numeric rank, not the name.
impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

#[derive(Clone, Copy)]
struct SeverityVisitor;

impl<'de> Visitor<'de> for SeverityVisitor {
    type Value = Severity;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a severity name or a number between 0 and 6")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Severity, E> {
        u8::try_from(v)
            .ok()
            .and_then(|v| Severity::try_from(v).ok())
            .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Severity, E> {
        u64::try_from(v)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
            .and_then(|v| self.visit_u64(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Severity, E> {
        v.parse()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SeverityVisitor)
    }
}

//! Primitive types and newtypes for type-safe API interactions.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A device identifier assigned by the push service.
///
/// # Example
///
/// ```
/// use baidupush_rs::ChannelId;
///
/// let channel = ChannelId::new("4215667327923129295");
/// println!("Channel: {}", channel);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(String);

impl ChannelId {
    /// Create a new channel ID from a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the channel ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ChannelId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for ChannelId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ChannelId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Platform the app's devices run on. Sent with every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceType {
    /// Android devices
    Android,
    /// Apple iOS devices
    Ios,
}

impl DeviceType {
    /// Numeric platform identifier used on the wire.
    pub fn code(&self) -> u8 {
        match self {
            DeviceType::Android => 3,
            DeviceType::Ios => 4,
        }
    }

    /// Look up a platform by its wire identifier.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            3 => Some(DeviceType::Android),
            4 => Some(DeviceType::Ios),
            _ => None,
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Kind of payload a push carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MsgType {
    /// Pass-through message delivered to the app
    #[default]
    Message,
    /// Notification shown by the system
    Notification,
}

impl MsgType {
    /// Numeric identifier used on the wire.
    pub fn code(&self) -> u8 {
        match self {
            MsgType::Message => 0,
            MsgType::Notification => 1,
        }
    }

    /// Look up a message type by its wire identifier.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(MsgType::Message),
            1 => Some(MsgType::Notification),
            _ => None,
        }
    }
}

impl fmt::Display for MsgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// iOS certificate environment a push is delivered through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeployStatus {
    /// Development certificate
    Development,
    /// Production certificate
    Production,
}

impl DeployStatus {
    /// Numeric identifier used on the wire.
    pub fn code(&self) -> u8 {
        match self {
            DeployStatus::Development => 1,
            DeployStatus::Production => 2,
        }
    }
}

impl fmt::Display for DeployStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A Unix timestamp the service may encode either as a JSON number or as a
/// numeric string, depending on the operation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SendTime {
    /// `1700000000`
    Number(i64),
    /// `"1700000000"`
    Text(String),
}

impl SendTime {
    /// Normalize to seconds since the Unix epoch.
    pub fn epoch_seconds(&self) -> Result<i64, std::num::ParseIntError> {
        match self {
            SendTime::Number(n) => Ok(*n),
            SendTime::Text(s) => s.trim().parse(),
        }
    }
}

/// Deserialize a number-or-string timestamp into epoch seconds.
///
/// Non-numeric strings are rejected rather than read as zero.
pub(crate) fn epoch_seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    SendTime::deserialize(deserializer)?
        .epoch_seconds()
        .map_err(serde::de::Error::custom)
}

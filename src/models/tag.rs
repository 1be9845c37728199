//! Tag models.

use serde::{Deserialize, Serialize};

use super::primitives::{epoch_seconds, ChannelId, DeviceType};
use crate::client::ParameterSet;

/// Maximum number of devices one add/delete call may carry.
pub const MAX_TAG_DEVICES: usize = 10;

/// Information about one tag of the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagInfo {
    /// Tag identifier
    pub tid: String,
    /// Tag name
    pub tag: String,
    /// Free-form description
    #[serde(default)]
    pub info: String,
    /// Tag type (deprecated by the service)
    #[serde(rename = "type", default)]
    pub kind: i64,
    /// Unix time the tag was created
    #[serde(deserialize_with = "epoch_seconds")]
    pub create_time: i64,
}

/// Result of a tag listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagsInfo {
    /// Number of tags of the app
    pub total_num: u64,
    /// The tags on this page
    #[serde(rename = "result", default)]
    pub tags: Vec<TagInfo>,
}

impl TagsInfo {
    /// Find a tag by name on this page.
    pub fn find(&self, name: &str) -> Option<&TagInfo> {
        self.tags.iter().find(|info| info.tag == name)
    }
}

/// Per-device outcome of adding devices to or removing them from a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagResult {
    /// The device
    pub channel_id: ChannelId,
    /// Zero on success
    pub result: i64,
}

impl TagResult {
    /// Returns `true` if the device was added or removed.
    pub fn is_success(&self) -> bool {
        self.result == 0
    }
}

/// Filter and paging options for listing tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagQuery {
    /// Only this tag
    pub tag: Option<String>,
    /// Offset of the first tag (default 0)
    pub start: Option<u32>,
    /// Maximum number of tags, 1-100 (default 100)
    pub limit: Option<u32>,
    /// Unix time after which the service rejects this request
    pub expires: Option<i64>,
    /// Platform override for this request
    pub device_type: Option<DeviceType>,
}

impl TagQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only return the named tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Set the offset of the first tag.
    pub fn start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the maximum number of tags.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the request expiry time.
    pub fn expires(mut self, unix_seconds: i64) -> Self {
        self.expires = Some(unix_seconds);
        self
    }

    /// Override the channel's device type for this request.
    pub fn device_type(mut self, device_type: DeviceType) -> Self {
        self.device_type = Some(device_type);
        self
    }
}

impl From<TagQuery> for ParameterSet {
    fn from(query: TagQuery) -> Self {
        let mut params = ParameterSet::new();
        if let Some(v) = query.tag {
            params.set("tag", v);
        }
        if let Some(v) = query.start {
            params.set("start", v);
        }
        if let Some(v) = query.limit {
            params.set("limit", v);
        }
        if let Some(v) = query.expires {
            params.set("expires", v);
        }
        if let Some(v) = query.device_type {
            params.set("device_type", v);
        }
        params
    }
}

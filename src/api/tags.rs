//! Tag service.

use std::sync::Arc;

use crate::client::{ApiResponse, ChannelInner, Operation, ParameterSet};
use crate::models::{ChannelId, TagResult, TagsInfo, MAX_TAG_DEVICES};
use crate::{Error, Result};

/// Service for tag management and tag membership.
///
/// Tag names are 1-128 characters; `default` is reserved by the service.
///
/// # Example
///
/// ```no_run
/// use baidupush_rs::ChannelId;
/// use baidupush_rs::models::TagQuery;
///
/// # async fn example(channel: baidupush_rs::Channel) -> baidupush_rs::Result<()> {
/// channel.tags().create("beta").await?;
///
/// let results = channel
///     .tags()
///     .add_devices("beta", &[ChannelId::new("4215667327923129295")])
///     .await?;
/// assert!(results.iter().all(|r| r.is_success()));
///
/// let tags = channel.tags().list(TagQuery::new()).await?;
/// println!("{} tags", tags.total_num);
/// # Ok(())
/// # }
/// ```
pub struct TagsService {
    inner: Arc<ChannelInner>,
}

impl TagsService {
    pub(crate) fn new(inner: Arc<ChannelInner>) -> Self {
        Self { inner }
    }

    /// List the app's tags.
    pub async fn list(&self, query: impl Into<ParameterSet>) -> Result<ApiResponse<TagsInfo>> {
        self.inner
            .call(Operation::QueryTagsInfo, ParameterSet::new(), query.into())
            .await
    }

    /// Create an empty tag. Returns the tag name echoed by the service.
    pub async fn create(&self, tag: &str) -> Result<ApiResponse<String>> {
        self.manage(Operation::CreateTag, tag, "create").await
    }

    /// Delete a tag. Returns the tag name echoed by the service.
    ///
    /// Deleting a tag that does not exist fails with server code 30611.
    pub async fn delete(&self, tag: &str) -> Result<ApiResponse<String>> {
        self.manage(Operation::DeleteTag, tag, "delete").await
    }

    /// Bind 1 to 10 devices to a tag.
    pub async fn add_devices(
        &self,
        tag: &str,
        channel_ids: &[ChannelId],
    ) -> Result<ApiResponse<Vec<TagResult>>> {
        self.manage_devices(Operation::AddTagDevices, tag, channel_ids)
            .await
    }

    /// Unbind 1 to 10 devices from a tag.
    pub async fn delete_devices(
        &self,
        tag: &str,
        channel_ids: &[ChannelId],
    ) -> Result<ApiResponse<Vec<TagResult>>> {
        self.manage_devices(Operation::DeleteTagDevices, tag, channel_ids)
            .await
    }

    /// Number of devices bound to a tag.
    pub async fn device_count(&self, tag: &str) -> Result<ApiResponse<u64>> {
        #[derive(serde::Deserialize)]
        struct Response {
            device_num: u64,
        }

        let response: ApiResponse<Response> = self
            .inner
            .call(
                Operation::GetTagDeviceNum,
                ParameterSet::new().with("tag", tag),
                ParameterSet::new(),
            )
            .await?;

        Ok(response.map(|r| r.device_num))
    }

    async fn manage(
        &self,
        operation: Operation,
        tag: &str,
        action: &str,
    ) -> Result<ApiResponse<String>> {
        #[derive(serde::Deserialize)]
        struct Response {
            tag: String,
            result: i64,
        }

        let response: ApiResponse<Response> = self
            .inner
            .call(operation, ParameterSet::new().with("tag", tag), ParameterSet::new())
            .await?;

        if response.result != 0 {
            return Err(Error::BusinessFailure {
                code: response.result,
                message: format!("{} tag {} failed", action, response.tag),
            });
        }

        Ok(response.map(|r| r.tag))
    }

    async fn manage_devices(
        &self,
        operation: Operation,
        tag: &str,
        channel_ids: &[ChannelId],
    ) -> Result<ApiResponse<Vec<TagResult>>> {
        if channel_ids.is_empty() || channel_ids.len() > MAX_TAG_DEVICES {
            return Err(Error::InvalidParameter(format!(
                "invalid channel ID number {} - must be [1, {}]",
                channel_ids.len(),
                MAX_TAG_DEVICES
            )));
        }

        #[derive(serde::Deserialize)]
        struct Response {
            #[serde(default)]
            result: Vec<TagResult>,
        }

        let mandatory = ParameterSet::new()
            .with("tag", tag)
            .with("channel_ids", serde_json::to_string(channel_ids)?);

        let response: ApiResponse<Response> = self
            .inner
            .call(operation, mandatory, ParameterSet::new())
            .await?;

        Ok(response.map(|r| r.result))
    }
}

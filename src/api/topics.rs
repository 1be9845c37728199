//! Topic service.

use std::sync::Arc;

use crate::client::{ApiResponse, ChannelInner, Operation, ParameterSet};
use crate::models::TopicList;
use crate::Result;

/// Service for listing the topics batch pushes were grouped under.
pub struct TopicsService {
    inner: Arc<ChannelInner>,
}

impl TopicsService {
    pub(crate) fn new(inner: Arc<ChannelInner>) -> Self {
        Self { inner }
    }

    /// List the app's topics.
    pub async fn list(&self, query: impl Into<ParameterSet>) -> Result<ApiResponse<TopicList>> {
        self.inner
            .call(Operation::QueryTopicList, ParameterSet::new(), query.into())
            .await
    }
}

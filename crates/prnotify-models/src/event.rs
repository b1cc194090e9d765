//! Typed view over the inbound event payload.
//!
//! The payload itself stays an arbitrary JSON document (templates can reach
//! any field of it); this view only captures what routing needs. Every field
//! is optional and a field of the wrong type reads as absent, so unexpected
//! payloads degrade to a skip instead of a parse failure.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

/// Pull request event action.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhEventAction {
    /// Assigned.
    Assigned,
    /// Closed.
    Closed,
    /// Converted to draft.
    ConvertedToDraft,
    /// Edited.
    Edited,
    /// Labeled.
    Labeled,
    /// Opened.
    Opened,
    /// Reopened.
    Reopened,
    /// Ready for review.
    ReadyForReview,
    /// Review requested.
    ReviewRequested,
    /// Submitted (review events).
    Submitted,
    /// Synchronize.
    Synchronize,
    /// Anything else.
    #[serde(other)]
    Other,
}

impl GhEventAction {
    /// Whether this action makes a pull request worth announcing.
    pub fn is_ready_for_review_trigger(self) -> bool {
        matches!(
            self,
            Self::ReadyForReview | Self::Opened | Self::Synchronize | Self::Reopened
        )
    }
}

/// Review state.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum GhReviewState {
    /// Approved.
    Approved,
    /// Changes requested.
    ChangesRequested,
    /// Commented.
    Commented,
    /// Dismissed.
    Dismissed,
    /// Pending.
    Pending,
    /// Anything else.
    #[serde(other)]
    Other,
}

/// Review part of the payload.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct GhEventReview {
    /// State.
    #[serde(default, deserialize_with = "lenient")]
    pub state: Option<GhReviewState>,
}

/// Pull request part of the payload.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct GhEventPullRequest {
    /// Number.
    #[serde(default, deserialize_with = "lenient")]
    pub number: Option<u64>,
    /// Draft.
    #[serde(default, deserialize_with = "lenient")]
    pub draft: Option<bool>,
}

impl GhEventPullRequest {
    /// Is the pull request a draft?
    pub fn is_draft(&self) -> bool {
        self.draft.unwrap_or(false)
    }
}

/// Routing view of an event payload.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct GhEvent {
    /// Action.
    #[serde(default, deserialize_with = "lenient")]
    pub action: Option<GhEventAction>,
    /// Review, present on review events.
    #[serde(default, deserialize_with = "lenient")]
    pub review: Option<GhEventReview>,
    /// Pull request.
    #[serde(default, deserialize_with = "lenient")]
    pub pull_request: Option<GhEventPullRequest>,
}

impl GhEvent {
    /// Extract the routing view from a raw payload.
    ///
    /// Never fails: a payload that is not an object yields an empty view.
    pub fn from_payload(payload: &Value) -> Self {
        Self::deserialize(payload).unwrap_or_default()
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

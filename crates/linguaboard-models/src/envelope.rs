//! Response envelopes shared by the admin endpoints.
//!
//! Most admin endpoints answer `{ "successmessage": ..., "data": ... }`;
//! listings add `totalCount` and, when paginated server-side, `page` and
//! `limit`. Learner endpoints use `message` instead of `successmessage`, so
//! both are accepted.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub successmessage: Option<String>,
    // No `default`: it would bound `T: Default`. Missing reads as `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> DataEnvelope<T> {
    /// The payload, if the backend sent one.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEnvelope<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub successmessage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl<T> ListEnvelope<T> {
    /// Total reported by the backend, falling back to the number of items
    /// received.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total_count.unwrap_or(self.data.len() as u64)
    }

    /// Number of server-side pages, if the response was paginated.
    #[must_use]
    pub fn total_pages(&self) -> Option<u64> {
        let limit = u64::from(self.limit?);
        if limit == 0 {
            return None;
        }
        Some(self.total().div_ceil(limit))
    }
}

/// Bare `{ "message": ... }` acknowledgement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// `{ "_id": ... }` payload returned by content deletions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedId<I> {
    #[serde(rename = "_id")]
    pub id: I,
}

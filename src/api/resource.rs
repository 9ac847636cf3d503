use fake::Dummy;
use serde::{Deserialize, Serialize};

/// Defines post data structure as returned by the backend.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub image_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>, // RFC 3339
}

/// Defines the payload for creating a post.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub image: String, // base64
    pub image_type: String,
}

/// Defines the envelope wrapping list responses.
///
#[derive(Debug, Deserialize)]
pub(crate) struct ListWrapper<T> {
    pub data: Vec<T>,
}

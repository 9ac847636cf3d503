//! Posts backend access.
//!
//! `PostStore` is the seam the add-post screen and the network handler talk
//! to; `Api` implements it over HTTP.

mod client;
mod error;
mod resource;

pub use error::{ApiError, SubmissionError};
pub use resource::*;

use async_trait::async_trait;
use client::Client;
use log::*;

/// Operations the application needs from the posts backend.
///
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Create a post. Failures carry a human readable message.
    async fn create_post(&self, post: &NewPost) -> Result<(), SubmissionError>;

    /// Return the posts shown in the list view.
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError>;
}

/// Responsible for asynchronous interaction with the posts API.
///
pub struct Api {
    client: Client,
}

impl Api {
    /// Returns a new instance for the given base URL and optional token.
    ///
    pub fn new(base_url: &str, access_token: Option<&str>) -> Result<Api, ApiError> {
        debug!("Initializing posts API client for {}...", base_url);
        Ok(Api {
            client: Client::new(base_url, access_token)?,
        })
    }
}

#[async_trait]
impl PostStore for Api {
    async fn create_post(&self, post: &NewPost) -> Result<(), SubmissionError> {
        debug!(
            "Creating post '{}' with {} bytes of {} image data...",
            post.title,
            post.image.len(),
            post.image_type
        );
        self.client.post("posts", post).await?;
        Ok(())
    }

    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        debug!("Requesting posts...");
        let wrapper: ListWrapper<Post> = self.client.get("posts").await?;
        debug!("Retrieved {} posts", wrapper.data.len());
        Ok(wrapper.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn new_post() -> NewPost {
        NewPost {
            title: "Hello".to_string(),
            body: "World".to_string(),
            image: "aGVsbG8=".to_string(),
            image_type: "jpeg".to_string(),
        }
    }

    #[tokio::test]
    async fn create_post_sends_json_payload() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/posts").json_body(json!({
                    "title": "Hello",
                    "body": "World",
                    "image": "aGVsbG8=",
                    "imageType": "jpeg",
                }));
                then.status(201).json_body(json!({ "data": { "id": "1" } }));
            })
            .await;

        let api = Api::new(&server.base_url(), None).unwrap();
        api.create_post(&new_post()).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn create_post_sends_bearer_token() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/posts")
                    .header("authorization", "Bearer secret");
                then.status(201);
            })
            .await;

        let api = Api::new(&server.base_url(), Some("secret")).unwrap();
        api.create_post(&new_post()).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn create_post_surfaces_server_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/posts");
                then.status(422)
                    .json_body(json!({ "message": "Title already taken" }));
            })
            .await;

        let api = Api::new(&server.base_url(), None).unwrap();
        let error = api.create_post(&new_post()).await.unwrap_err();
        assert_eq!(error.message, "Title already taken");
    }

    #[tokio::test]
    async fn create_post_surfaces_plain_text_errors() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/posts");
                then.status(500).body("Internal Server Error");
            })
            .await;

        let api = Api::new(&server.base_url(), None).unwrap();
        let error = api.create_post(&new_post()).await.unwrap_err();
        assert_eq!(error.message, "Internal Server Error");
    }

    #[tokio::test]
    async fn list_posts_unwraps_data() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/posts");
                then.status(200).json_body(json!({
                    "data": [
                        {
                            "id": "1",
                            "title": "Hello",
                            "body": "World",
                            "imageType": "jpeg",
                            "createdAt": "2024-05-01T10:00:00Z"
                        },
                        { "id": "2", "title": "Second" }
                    ]
                }));
            })
            .await;

        let api = Api::new(&server.base_url(), None).unwrap();
        let posts = api.list_posts().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "Hello");
        assert_eq!(posts[0].image_type.as_deref(), Some("jpeg"));
        assert_eq!(posts[0].created_at.as_deref(), Some("2024-05-01T10:00:00Z"));
        assert_eq!(posts[1].body, "");
    }

    #[tokio::test]
    async fn list_posts_reports_status_errors() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/posts");
                then.status(503).body("maintenance");
            })
            .await;

        let api = Api::new(&server.base_url(), None).unwrap();
        let error = api.list_posts().await.unwrap_err();
        assert!(matches!(error, ApiError::Status { status: 503, .. }));
    }
}

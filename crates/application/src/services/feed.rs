//! Feed operations.

use std::sync::Arc;

use alumnet_domain::request::ApiRequest;
use alumnet_domain::{Comment, NewPost, Page, PageQuery, Post};
use uuid::Uuid;

use crate::error::ApiError;
use crate::ports::ApiTransport;

/// Feed and post operations.
pub struct FeedApi<T> {
    transport: Arc<T>,
}

impl<T: ApiTransport> FeedApi<T> {
    /// Creates the service.
    pub const fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Lists feed posts, newest first.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn list(&self, query: &PageQuery) -> Result<Page<Post>, ApiError> {
        let req = ApiRequest::get("/feed/posts").with_query(query)?;
        self.transport.execute(req).await?.json()
    }

    /// Publishes a post.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn create(&self, post: &NewPost) -> Result<Post, ApiError> {
        let req = ApiRequest::post("/feed/posts").with_json(post)?;
        self.transport.execute(req).await?.json()
    }

    /// Lists comments on a post.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn comments(
        &self,
        post_id: Uuid,
        query: &PageQuery,
    ) -> Result<Page<Comment>, ApiError> {
        let req = ApiRequest::get(format!("/feed/posts/{post_id}/comments")).with_query(query)?;
        self.transport.execute(req).await?.json()
    }

    /// Adds a comment to a post.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn comment(&self, post_id: Uuid, body: &str) -> Result<Comment, ApiError> {
        let req = ApiRequest::post(format!("/feed/posts/{post_id}/comments"))
            .with_json(&serde_json::json!({ "body": body }))?;
        self.transport.execute(req).await?.json()
    }

    /// Likes a post.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn like(&self, post_id: Uuid) -> Result<(), ApiError> {
        let req = ApiRequest::post(format!("/feed/posts/{post_id}/like"));
        self.transport.execute(req).await?.json()
    }

    /// Deletes one of the caller's posts.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`] with 403 when the post belongs to someone else.
    pub async fn delete(&self, post_id: Uuid) -> Result<(), ApiError> {
        let req = ApiRequest::delete(format!("/feed/posts/{post_id}"));
        self.transport.execute(req).await?.json()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use alumnet_domain::request::HttpMethod;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::StubTransport;

    #[tokio::test]
    async fn test_list_encodes_pagination() {
        let body = serde_json::json!({
            "items": [],
            "page": 2,
            "per_page": 20,
            "total": 0,
        })
        .to_string();
        let transport = Arc::new(StubTransport::replying(&[&body]));
        let api = FeedApi::new(Arc::clone(&transport));

        let page = api.list(&PageQuery::page(2).per_page(20)).await.unwrap();
        assert_eq!(page.page, 2);

        let requests = transport.requests();
        assert_eq!(requests[0].path, "/feed/posts");
        assert_eq!(requests[0].query.as_deref(), Some("page=2&per_page=20"));
        assert!(requests[0].require_auth);
    }

    #[tokio::test]
    async fn test_create_posts_json_body() {
        let body = serde_json::json!({
            "id": "0188d6a0-0000-7000-8000-000000000003",
            "author_id": "0188d6a0-0000-7000-8000-000000000001",
            "author_name": "Grad User",
            "body": "hello class of 2010",
            "created_at": "2026-01-01T00:00:00Z",
        })
        .to_string();
        let transport = Arc::new(StubTransport::replying(&[&body]));
        let api = FeedApi::new(Arc::clone(&transport));

        let post = api.create(&NewPost::new("hello class of 2010")).await.unwrap();
        assert_eq!(post.body, "hello class of 2010");

        let requests = transport.requests();
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(
            requests[0].body,
            Some(serde_json::json!({"body": "hello class of 2010"}))
        );
    }

    #[tokio::test]
    async fn test_like_accepts_empty_reply() {
        let transport = Arc::new(StubTransport::new());
        let api = FeedApi::new(Arc::clone(&transport));

        // Stub answers 204 with no body; decoding to () must succeed.
        api.like(Uuid::now_v7()).await.unwrap();
        assert_eq!(transport.requests().len(), 1);
    }
}

use crate::api::{NewPost, PostStore};
use crate::state::State;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    CreatePost { generation: u64, post: NewPost },
    FetchPosts,
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    store: &'a dyn PostStore,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, store: &'a dyn PostStore) -> Self {
        Handler { state, store }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::CreatePost { generation, post } => self.create_post(generation, post).await?,
            Event::FetchPosts => self.fetch_posts().await?,
        }
        Ok(())
    }

    /// Create the post without holding the state lock, then hand the result
    /// back to the add-post screen.
    ///
    async fn create_post(&mut self, generation: u64, post: NewPost) -> Result<()> {
        info!("Creating post '{}'...", post.title);
        let result = self.store.create_post(&post).await;
        if result.is_ok() {
            info!("Post '{}' created.", post.title);
        }
        let mut state = self.state.lock().await;
        let outcome = state.complete_submission(generation, result);
        debug!("Submission {} finished: {:?}", generation, outcome);
        Ok(())
    }

    /// Update state with the latest posts.
    ///
    async fn fetch_posts(&mut self) -> Result<()> {
        info!("Fetching posts...");
        match self.store.list_posts().await {
            Ok(posts) => {
                info!("Received {} posts.", posts.len());
                let mut state = self.state.lock().await;
                state.set_posts(posts);
                Ok(())
            }
            Err(e) => {
                {
                    let mut state = self.state.lock().await;
                    state.set_posts_error(e.to_string());
                }
                Err(e.into())
            }
        }
    }
}

//! Test doubles for the store, navigation and notification seams.

use crate::api::{ApiError, NewPost, Post, PostStore, SubmissionError};
use crate::state::{Navigate, Notification, Notify, View};
use async_trait::async_trait;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Mutex;

/// In-memory post store with call tracking and error injection.
///
#[derive(Default)]
pub struct FakeStore {
    create_error: Option<String>,
    list_error: Option<String>,
    posts: Vec<Post>,
    created: Mutex<Vec<NewPost>>,
}

impl FakeStore {
    /// Store whose `create_post` fails with the message.
    pub fn failing(message: &str) -> Self {
        FakeStore {
            create_error: Some(message.to_string()),
            ..FakeStore::default()
        }
    }

    /// Store whose `list_posts` returns the posts.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        FakeStore {
            posts,
            ..FakeStore::default()
        }
    }

    /// Store whose `list_posts` fails with a status error.
    pub fn failing_list(message: &str) -> Self {
        FakeStore {
            list_error: Some(message.to_string()),
            ..FakeStore::default()
        }
    }

    /// Posts passed to `create_post`, in call order.
    pub fn created(&self) -> Vec<NewPost> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl PostStore for FakeStore {
    async fn create_post(&self, post: &NewPost) -> Result<(), SubmissionError> {
        self.created.lock().unwrap().push(post.clone());
        match &self.create_error {
            Some(message) => Err(SubmissionError::new(message.clone())),
            None => Ok(()),
        }
    }

    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        match &self.list_error {
            Some(message) => Err(ApiError::Status {
                status: 500,
                message: message.clone(),
            }),
            None => Ok(self.posts.clone()),
        }
    }
}

/// Navigator double recording every destination.
///
#[derive(Default)]
pub struct RecordingNavigator {
    pub visits: Vec<View>,
}

impl Navigate for RecordingNavigator {
    fn navigate(&mut self, view: View) {
        self.visits.push(view);
    }
}

/// Notifier double recording every notification.
///
#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: Vec<Notification>,
}

impl Notify for RecordingNotifier {
    fn show_message(&mut self, notification: Notification) {
        self.messages.push(notification);
    }
}

/// Side effect seen by an `EffectLog`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Navigated(View),
    Notified(Notification),
}

/// Navigator and notifier double writing into one shared log, so the order
/// of navigation and notification can be checked. Clones share the log.
///
#[derive(Clone, Default)]
pub struct EffectLog {
    effects: Rc<RefCell<Vec<Effect>>>,
}

impl EffectLog {
    /// Effects in the order they happened.
    pub fn effects(&self) -> Vec<Effect> {
        self.effects.borrow().clone()
    }
}

impl Navigate for EffectLog {
    fn navigate(&mut self, view: View) {
        self.effects.borrow_mut().push(Effect::Navigated(view));
    }
}

impl Notify for EffectLog {
    fn show_message(&mut self, notification: Notification) {
        self.effects.borrow_mut().push(Effect::Notified(notification));
    }
}

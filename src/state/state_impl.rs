use super::error::StateError;
use super::navigation::{Navigate, Navigator, View};
use super::toast::Toasts;
use crate::api::{Post, SubmissionError};
use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::screens::{AddPostScreen, SubmitOutcome};
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use log::*;
use ratatui::widgets::ListState;

/// Houses data representative of application state.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    spinner_index: usize,
    navigator: Navigator,
    add_post: AddPostScreen,
    toasts: Toasts,
    posts: Vec<Post>,
    posts_list_state: ListState,
    posts_loading: bool,
    posts_error: Option<String>,
    theme: Theme,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        let mut navigator = Navigator::new(View::AllPosts);
        let add_post = AddPostScreen::mount(&mut navigator, None);
        State {
            net_sender: None,
            spinner_index: 0,
            navigator,
            add_post,
            toasts: Toasts::default(),
            posts: vec![],
            posts_list_state: ListState::default(),
            posts_loading: false,
            posts_error: None,
            theme: Theme::default(),
        }
    }
}

impl State {
    /// Return new state with the add-post screen in front of the post list.
    ///
    pub fn new(net_sender: NetworkEventSender, theme: Theme, image_directory: Option<&str>) -> Self {
        let mut navigator = Navigator::new(View::AllPosts);
        let add_post = AddPostScreen::mount(&mut navigator, image_directory);
        let mut state = State {
            net_sender: Some(net_sender),
            navigator,
            add_post,
            theme,
            ..State::default()
        };
        state.navigate(View::AddPost);
        state
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Advance the spinner index.
    ///
    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index += 1;
        if self.spinner_index >= SPINNER_FRAME_COUNT {
            self.spinner_index = 0;
        }
        self
    }

    /// Return the current spinner index.
    ///
    pub fn get_spinner_index(&self) -> usize {
        self.spinner_index
    }

    /// Periodic housekeeping: spinner, expired toasts, screen focus events.
    ///
    pub fn tick(&mut self) -> &mut Self {
        self.advance_spinner_index();
        self.toasts.prune();
        self.add_post.tick();
        self
    }

    /// Return the current view.
    ///
    pub fn current_view(&self) -> View {
        self.navigator.current_view()
    }

    /// Navigate to the view and let it react to gaining focus.
    ///
    pub fn navigate(&mut self, view: View) -> &mut Self {
        let previous = self.current_view();
        self.navigator.navigate(view);
        if previous != view {
            self.view_focused(view);
        }
        self
    }

    /// Go back to the previous view.
    ///
    pub fn back(&mut self) -> &mut Self {
        if self.navigator.back().is_some() {
            self.view_focused(self.current_view());
        }
        self
    }

    fn view_focused(&mut self, view: View) {
        match view {
            View::AddPost => self.add_post.tick(),
            View::AllPosts => self.refresh_posts(),
        }
    }

    /// Return the navigator.
    ///
    #[cfg(test)]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Return the add-post screen.
    ///
    pub fn add_post(&self) -> &AddPostScreen {
        &self.add_post
    }

    /// Return the add-post screen for editing.
    ///
    pub fn add_post_mut(&mut self) -> &mut AddPostScreen {
        &mut self.add_post
    }

    /// Return the live toasts.
    ///
    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    /// Validate the draft and hand it to the network thread.
    ///
    pub fn submit_post(&mut self) -> &mut Self {
        let ticket = match self.add_post.begin_submit() {
            Ok(ticket) => ticket,
            Err(outcome) => {
                debug!("Submit ended before dispatch: {:?}", outcome);
                return self;
            }
        };
        let generation = ticket.generation;
        if let Err(e) = self.dispatch(NetworkEvent::CreatePost {
            generation,
            post: ticket.post,
        }) {
            self.complete_submission(generation, Err(SubmissionError::new(e.to_string())));
        }
        self
    }

    /// Apply the result of a create-post call made by the network thread.
    ///
    pub fn complete_submission(
        &mut self,
        generation: u64,
        result: Result<(), SubmissionError>,
    ) -> SubmitOutcome {
        let outcome =
            self.add_post
                .finish_submit(generation, result, &mut self.navigator, &mut self.toasts);
        if outcome == SubmitOutcome::Created {
            self.refresh_posts();
        }
        outcome
    }

    /// Request a fresh post list.
    ///
    pub fn refresh_posts(&mut self) {
        self.posts_loading = true;
        if let Err(e) = self.dispatch(NetworkEvent::FetchPosts) {
            warn!("Unable to refresh posts: {}", e);
            self.posts_loading = false;
        }
    }

    /// Set the list of posts.
    ///
    pub fn set_posts(&mut self, posts: Vec<Post>) -> &mut Self {
        self.posts = posts;
        self.posts_loading = false;
        self.posts_error = None;
        if self.posts.is_empty() {
            self.posts_list_state.select(None);
        } else {
            self.posts_list_state.select(Some(0));
        }
        self
    }

    /// Record a failed post list request.
    ///
    pub fn set_posts_error(&mut self, message: String) -> &mut Self {
        self.posts_loading = false;
        self.posts_error = Some(message);
        self
    }

    /// Return the list of posts.
    ///
    pub fn get_posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn get_posts_error(&self) -> Option<&str> {
        self.posts_error.as_deref()
    }

    pub fn is_posts_loading(&self) -> bool {
        self.posts_loading
    }

    /// Return the list state for the posts list.
    ///
    pub fn get_posts_list_state(&mut self) -> &mut ListState {
        &mut self.posts_list_state
    }

    /// Select the next post, wrapping around.
    ///
    pub fn next_post_index(&mut self) -> &mut Self {
        if self.posts.is_empty() {
            return self;
        }
        let next = match self.posts_list_state.selected() {
            Some(i) if i + 1 < self.posts.len() => i + 1,
            _ => 0,
        };
        self.posts_list_state.select(Some(next));
        self
    }

    /// Select the previous post, wrapping around.
    ///
    pub fn previous_post_index(&mut self) -> &mut Self {
        if self.posts.is_empty() {
            return self;
        }
        let previous = match self.posts_list_state.selected() {
            Some(0) | None => self.posts.len() - 1,
            Some(i) => i - 1,
        };
        self.posts_list_state.select(Some(previous));
        self
    }

    /// Send the event to the network thread.
    ///
    pub fn dispatch(&self, event: NetworkEvent) -> Result<(), StateError> {
        let net_sender = self.net_sender.as_ref().ok_or(StateError::DispatcherNotSet)?;
        net_sender.send(event).map_err(|err| {
            error!("Received error from network dispatch: {}", err);
            StateError::DispatchFailed(err.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::PickedImage;
    use crate::state::NotificationKind;
    use fake::{Fake, Faker};
    use std::sync::mpsc;

    fn connected() -> (State, mpsc::Receiver<NetworkEvent>) {
        let (tx, rx) = mpsc::channel();
        (State::new(tx, Theme::default(), None), rx)
    }

    fn fill(state: &mut State) {
        let screen = state.add_post_mut();
        screen.set_title("Hello");
        screen.set_body("World");
        screen.on_image_picked(PickedImage {
            data: "aGVsbG8=".to_string(),
            kind: "jpeg".to_string(),
        });
    }

    #[test]
    fn new_state_shows_add_post_over_post_list() {
        let (state, _rx) = connected();
        assert_eq!(state.current_view(), View::AddPost);
        assert_eq!(state.navigator().depth(), 2);
        assert_eq!(state.navigator().listener_count(View::AddPost), 1);
    }

    #[test]
    fn submit_post_dispatches_create_event() {
        let (mut state, rx) = connected();
        fill(&mut state);
        state.submit_post();

        assert!(state.add_post().draft().is_submitting);
        match rx.try_recv().unwrap() {
            NetworkEvent::CreatePost { generation, post } => {
                assert_eq!(generation, state.add_post().generation());
                assert_eq!(post.title, "Hello");
                assert_eq!(post.image_type, "jpeg");
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn invalid_submit_dispatches_nothing() {
        let (mut state, rx) = connected();
        state.submit_post();
        assert_eq!(
            state.add_post().draft().error.as_deref(),
            Some("Please enter a title.")
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn submit_without_dispatcher_reports_error_on_form() {
        let mut state = State::default();
        fill(&mut state);
        state.submit_post();
        let draft = state.add_post().draft();
        assert!(!draft.is_submitting);
        assert_eq!(draft.error.as_deref(), Some("Network dispatcher not set"));
        assert_eq!(draft.title, "Hello");
    }

    #[test]
    fn successful_completion_shows_post_list_and_toast() {
        let (mut state, rx) = connected();
        fill(&mut state);
        state.submit_post();
        let generation = match rx.try_recv().unwrap() {
            NetworkEvent::CreatePost { generation, .. } => generation,
            other => panic!("unexpected event {:?}", other),
        };

        let outcome = state.complete_submission(generation, Ok(()));
        assert_eq!(outcome, SubmitOutcome::Created);
        assert_eq!(state.current_view(), View::AllPosts);
        assert_eq!(state.add_post().draft().title, "");
        let toast = state.toasts().current().unwrap();
        assert_eq!(toast.notification.kind, NotificationKind::Success);
        assert_eq!(
            toast.notification.message,
            "Your post was successfully created."
        );
        assert!(matches!(rx.try_recv().unwrap(), NetworkEvent::FetchPosts));
        assert!(state.is_posts_loading());
    }

    #[test]
    fn failed_completion_stays_on_form() {
        let (mut state, _rx) = connected();
        fill(&mut state);
        state.submit_post();
        let generation = state.add_post().generation();

        let outcome =
            state.complete_submission(generation, Err(SubmissionError::new("Network error")));
        assert_eq!(outcome, SubmitOutcome::Failed("Network error".to_string()));
        assert_eq!(state.current_view(), View::AddPost);
        assert_eq!(
            state.add_post().draft().error.as_deref(),
            Some("Network error")
        );
        assert!(state.toasts().is_empty());
    }

    #[test]
    fn returning_to_add_post_resets_form() {
        let (mut state, _rx) = connected();
        fill(&mut state);
        state.back();
        assert_eq!(state.current_view(), View::AllPosts);
        assert_eq!(state.add_post().draft().title, "Hello");

        state.navigate(View::AddPost);
        let draft = state.add_post().draft();
        assert_eq!(draft.title, "");
        assert!(draft.image.is_none());
        // The clear signal was handed to the picker while focusing.
        assert!(!draft.clear_image_signal);
    }

    #[test]
    fn back_to_post_list_requests_refresh() {
        let (mut state, rx) = connected();
        state.back();
        assert!(matches!(rx.try_recv().unwrap(), NetworkEvent::FetchPosts));
    }

    #[test]
    fn set_posts_selects_first() {
        let mut state = State::default();
        let posts = vec![Faker.fake::<Post>(), Faker.fake::<Post>()];
        state.set_posts(posts.clone());
        assert_eq!(state.get_posts(), posts.as_slice());
        assert_eq!(state.get_posts_list_state().selected(), Some(0));

        state.set_posts(vec![]);
        assert_eq!(state.get_posts_list_state().selected(), None);
    }

    #[test]
    fn post_index_wraps() {
        let mut state = State::default();
        state.set_posts(vec![
            Faker.fake::<Post>(),
            Faker.fake::<Post>(),
            Faker.fake::<Post>(),
        ]);
        state.previous_post_index();
        assert_eq!(state.get_posts_list_state().selected(), Some(2));
        state.next_post_index();
        assert_eq!(state.get_posts_list_state().selected(), Some(0));
        state.next_post_index();
        assert_eq!(state.get_posts_list_state().selected(), Some(1));
    }

    #[test]
    fn set_posts_error_stops_loading() {
        let mut state = State::default();
        state.refresh_posts();
        assert!(!state.is_posts_loading());
        state.set_posts_error("offline".to_string());
        assert_eq!(state.get_posts_error(), Some("offline"));
    }

    #[test]
    fn spinner_index_wraps() {
        let mut state = State::default();
        for _ in 0..SPINNER_FRAME_COUNT {
            state.advance_spinner_index();
        }
        assert_eq!(state.get_spinner_index(), 0);
    }
}

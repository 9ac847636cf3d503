//! Add-post screen.
//!
//! Owns the draft post while the screen is mounted. Submitting is split in
//! two halves so the awaited create call can run without holding the
//! application state: `begin_submit` validates and hands out a ticket
//! stamped with the current generation, `finish_submit` applies the result.
//! Every reset bumps the generation, so results of submissions started
//! before a reset are ignored.

use super::error::ValidationError;
use super::image_picker::{ImagePicker, PickedImage};
use crate::api::{NewPost, SubmissionError};
use crate::state::{
    FocusSubscription, Icon, IconPosition, Navigate, Navigator, Notification, NotificationKind,
    Notify, View,
};
use crossterm::event::KeyEvent;
use log::*;
use std::time::Duration;
use tui_textarea::TextArea;

pub const SUCCESS_MESSAGE: &str = "Your post was successfully created.";
pub const SUCCESS_DURATION: Duration = Duration::from_millis(3000);

/// Specifying the focusable parts of the form.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FormField {
    Image,
    Title,
    Body,
    Submit,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Image => FormField::Title,
            FormField::Title => FormField::Body,
            FormField::Body => FormField::Submit,
            FormField::Submit => FormField::Image,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormField::Image => FormField::Submit,
            FormField::Title => FormField::Image,
            FormField::Body => FormField::Title,
            FormField::Submit => FormField::Body,
        }
    }
}

/// Draft post form state.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DraftPost {
    pub title: String,
    pub body: String,
    pub image: Option<PickedImage>,
    pub error: Option<String>,
    pub is_submitting: bool,
    pub clear_image_signal: bool,
}

impl DraftPost {
    /// Check required fields in order; the first missing one wins.
    ///
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.body.is_empty() {
            return Err(ValidationError::MissingBody);
        }
        match &self.image {
            Some(image) if !image.data.is_empty() => Ok(()),
            _ => Err(ValidationError::MissingImage),
        }
    }
}

/// A validated post on its way to the store.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitTicket {
    pub generation: u64,
    pub post: NewPost,
}

/// Specifying how a submit attempt ended.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid(ValidationError),
    /// A submission is already in flight; nothing was sent.
    Busy,
    /// The post was created and the form reset.
    Created,
    /// The store rejected the post; the message is on the form.
    Failed(String),
    /// The result belongs to a form that has since been reset.
    Stale,
}

/// The add-post screen: draft form, body editor, image picker and the
/// focus subscription that resets it.
///
pub struct AddPostScreen {
    draft: DraftPost,
    body_input: TextArea<'static>,
    picker: ImagePicker,
    focus: FormField,
    generation: u64,
    focus_events: FocusSubscription,
}

/// The fixed notification shown after a post was created.
///
pub fn post_created_notification() -> Notification {
    Notification {
        message: SUCCESS_MESSAGE.to_string(),
        kind: NotificationKind::Success,
        duration: SUCCESS_DURATION,
        icon: Icon::new("success", IconPosition::Left),
    }
}

fn new_body_input() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_placeholder_text("Body");
    textarea
}

impl AddPostScreen {
    /// Mount the screen: empty form plus a focus listener on the navigator.
    ///
    pub fn mount(navigator: &mut Navigator, image_directory: Option<&str>) -> Self {
        AddPostScreen {
            draft: DraftPost::default(),
            body_input: new_body_input(),
            picker: ImagePicker::new(image_directory),
            focus: FormField::Image,
            generation: 0,
            focus_events: navigator.subscribe_focus(View::AddPost),
        }
    }

    pub fn draft(&self) -> &DraftPost {
        &self.draft
    }

    pub fn picker(&self) -> &ImagePicker {
        &self.picker
    }

    pub fn picker_mut(&mut self) -> &mut ImagePicker {
        &mut self.picker
    }

    pub fn body_input(&self) -> &TextArea<'static> {
        &self.body_input
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn previous_field(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn push_title_char(&mut self, c: char) {
        self.draft.title.push(c);
    }

    pub fn pop_title_char(&mut self) {
        self.draft.title.pop();
    }

    /// Replace the body text.
    ///
    pub fn set_body(&mut self, body: &str) {
        let lines: Vec<String> = body.split('\n').map(str::to_owned).collect();
        self.body_input = TextArea::new(lines);
        self.body_input.set_placeholder_text("Body");
        self.sync_body();
    }

    /// Forward a key to the body editor.
    ///
    pub fn input_body(&mut self, key: KeyEvent) {
        self.body_input.input(key);
        self.sync_body();
    }

    fn sync_body(&mut self) {
        self.draft.body = self.body_input.lines().join("\n");
    }

    /// Store the picked image data and type together.
    ///
    pub fn on_image_picked(&mut self, image: PickedImage) {
        self.draft.image = Some(image);
    }

    /// Ask the picker to load the typed path and keep the result.
    ///
    pub fn pick_image(&mut self) {
        if let Some(image) = self.picker.pick() {
            self.on_image_picked(image);
        }
    }

    /// Empty every field and tell the picker to drop its preview.
    ///
    pub fn reset(&mut self) {
        self.draft = DraftPost {
            clear_image_signal: true,
            ..DraftPost::default()
        };
        self.body_input = new_body_input();
        self.focus = FormField::Image;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Reset once if the screen regained focus since the last call.
    /// Returns whether a reset happened.
    ///
    pub fn handle_focus_events(&mut self) -> bool {
        if self.focus_events.drain() == 0 {
            return false;
        }
        debug!("{:?} focused, clearing form.", self.focus_events.view());
        self.reset();
        true
    }

    /// Consume the one-shot clear signal.
    ///
    pub fn take_clear_signal(&mut self) -> bool {
        std::mem::take(&mut self.draft.clear_image_signal)
    }

    /// Process focus events and hand the clear signal to the picker.
    ///
    pub fn tick(&mut self) {
        self.handle_focus_events();
        let clear = self.take_clear_signal();
        self.picker.apply_clear_signal(clear);
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.draft.validate()
    }

    /// Validate the draft and, when it passes, mark the form as submitting
    /// and return a ticket for the store call.
    ///
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, SubmitOutcome> {
        if self.draft.is_submitting {
            debug!("Ignoring submit while a post is being created.");
            return Err(SubmitOutcome::Busy);
        }
        self.draft.error = None;
        if let Err(e) = self.draft.validate() {
            debug!("Post failed validation: {}", e);
            self.draft.error = Some(e.to_string());
            self.draft.is_submitting = false;
            return Err(SubmitOutcome::Invalid(e));
        }
        let (image, image_type) = match &self.draft.image {
            Some(image) => (image.data.clone(), image.kind.clone()),
            None => return Err(SubmitOutcome::Invalid(ValidationError::MissingImage)),
        };
        info!("Valid post '{}', submitting...", self.draft.title);
        self.draft.is_submitting = true;
        Ok(SubmitTicket {
            generation: self.generation,
            post: NewPost {
                title: self.draft.title.clone(),
                body: self.draft.body.clone(),
                image,
                image_type,
            },
        })
    }

    /// Apply the result of the submission started with the ticket of the
    /// given generation. On success the form is reset, then the post list
    /// is shown, then the success notification; on failure the message is
    /// kept on the form and the fields stay as they were.
    ///
    pub fn finish_submit(
        &mut self,
        generation: u64,
        result: Result<(), SubmissionError>,
        navigator: &mut dyn Navigate,
        notifier: &mut dyn Notify,
    ) -> SubmitOutcome {
        if generation != self.generation {
            warn!(
                "Ignoring result of submission {} after the form was reset.",
                generation
            );
            return SubmitOutcome::Stale;
        }
        match result {
            Ok(()) => {
                self.reset();
                navigator.navigate(View::AllPosts);
                notifier.show_message(post_created_notification());
                SubmitOutcome::Created
            }
            Err(e) => {
                error!("Failed to create post: {}", e.message);
                self.draft.error = Some(e.message.clone());
                self.draft.is_submitting = false;
                SubmitOutcome::Failed(e.message)
            }
        }
    }

    /// Validate, create the post through the store and apply the result in
    /// one go. The application splits this across the UI and network threads
    /// (`State::submit_post` and `State::complete_submission`).
    ///
    #[cfg(test)]
    pub async fn submit(
        &mut self,
        store: &dyn crate::api::PostStore,
        navigator: &mut dyn Navigate,
        notifier: &mut dyn Notify,
    ) -> SubmitOutcome {
        let ticket = match self.begin_submit() {
            Ok(ticket) => ticket,
            Err(outcome) => return outcome,
        };
        let result = store.create_post(&ticket.post).await;
        self.finish_submit(ticket.generation, result, navigator, notifier)
    }
}

use crate::screens::FormField;
use crate::state::{State, View};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        error!("Failed to read terminal event: {}", e);
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(handle_key(key, state)),
            Event::Tick => {
                state.tick();
                Ok(true)
            }
        }
    }
}

/// Apply a key press to the state. Returns false if exit was requested.
///
pub fn handle_key(key: KeyEvent, state: &mut State) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }
    match state.current_view() {
        View::AllPosts => handle_all_posts_key(key, state),
        View::AddPost => {
            handle_add_post_key(key, state);
            true
        }
    }
}

fn handle_all_posts_key(key: KeyEvent, state: &mut State) -> bool {
    match key.code {
        KeyCode::Char('q') => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        KeyCode::Char('n') => {
            state.navigate(View::AddPost);
        }
        KeyCode::Char('r') => {
            state.refresh_posts();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            state.next_post_index();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.previous_post_index();
        }
        _ => {}
    }
    true
}

/// Check the key is a character to insert rather than a Ctrl or Alt chord.
///
fn is_text_input(key: &KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn handle_add_post_key(key: KeyEvent, state: &mut State) {
    if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.submit_post();
        return;
    }
    match key.code {
        KeyCode::Esc => {
            state.back();
            return;
        }
        KeyCode::Tab => {
            state.add_post_mut().next_field();
            return;
        }
        KeyCode::BackTab => {
            state.add_post_mut().previous_field();
            return;
        }
        _ => {}
    }

    let screen = state.add_post_mut();
    match screen.focus() {
        FormField::Image => match key.code {
            KeyCode::Enter => screen.pick_image(),
            KeyCode::Backspace => screen.picker_mut().pop_path_char(),
            KeyCode::Char(c) if is_text_input(&key) => screen.picker_mut().push_path_char(c),
            _ => {}
        },
        FormField::Title => match key.code {
            KeyCode::Enter => screen.next_field(),
            KeyCode::Backspace => screen.pop_title_char(),
            KeyCode::Char(c) if is_text_input(&key) => screen.push_title_char(c),
            _ => {}
        },
        FormField::Body => screen.input_body(key),
        FormField::Submit => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                state.submit_post();
            }
        }
    }
}

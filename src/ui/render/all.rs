use super::add_post::add_post;
use super::all_posts::all_posts;
use super::footer::footer;
use super::log::log;
use super::toast::toast;
use super::Frame;
use crate::state::{State, View};
use ratatui::layout::{Constraint, Direction, Layout};

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let size = frame.size();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(1)])
        .split(size);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(rows[0]);

    match state.current_view() {
        View::AddPost => add_post(frame, columns[0], state),
        View::AllPosts => all_posts(frame, columns[0], state),
    }
    log(frame, columns[1], state);
    footer(frame, rows[1], state);

    // Toasts sit on top of everything else.
    toast(frame, rows[0], state);
}

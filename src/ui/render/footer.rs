use super::Frame;
use crate::screens::FormField;
use crate::state::{State, View};
use crate::ui::widgets::styling;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph};

/// Return key hints for the current view.
///
fn hints(state: &State) -> &'static str {
    match state.current_view() {
        View::AllPosts => " n: new post, r: refresh, j/k: navigate, q: quit",
        View::AddPost => match state.add_post().focus() {
            FormField::Image => " Enter: load image, Tab: next field, Ctrl+S: post, Esc: back",
            FormField::Submit => " Enter: post, Tab: next field, Esc: back",
            _ => " Tab: next field, Shift+Tab: previous field, Ctrl+S: post, Esc: back",
        },
    }
}

/// Render footer widget according to state.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &mut State) {
    let line = Line::styled(hints(state), styling::muted_text_style(state.get_theme()));
    frame.render_widget(Paragraph::new(line), size);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_follow_the_focused_field() {
        let mut state = State::default();
        assert!(hints(&state).contains("new post"));
        state.navigate(View::AddPost);
        assert!(hints(&state).contains("load image"));
        state.add_post_mut().previous_field();
        assert!(hints(&state).starts_with(" Enter: post"));
    }
}

use super::Frame;
use crate::screens::{AddPostScreen, FormField};
use crate::state::State;
use crate::ui::widgets::{spinner, styling};
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

fn field_block<'a>(title: &'a str, active: bool, theme: &Theme) -> Block<'a> {
    let block = Block::default().borders(Borders::ALL).title(title);
    if active {
        block
            .border_style(styling::active_block_border_style(theme))
            .title_style(styling::active_block_title_style())
    } else {
        block.border_style(styling::normal_block_border_style(theme))
    }
}

/// Render the add-post form.
///
pub fn add_post(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let spinner_index = state.get_spinner_index();
    let screen = state.add_post();
    let error = screen.draft().error.clone();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if error.is_some() { 3 } else { 0 }), // Error
            Constraint::Length(5),                                    // Image
            Constraint::Length(3),                                    // Title
            Constraint::Min(5),                                       // Body
            Constraint::Length(3),                                    // Submit
        ])
        .split(size);

    if let Some(message) = error {
        let banner = Paragraph::new(message)
            .style(styling::error_banner_style(&theme))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.error.to_color())),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(banner, chunks[0]);
    }

    image(frame, chunks[1], screen, &theme);

    let title_text = if screen.draft().title.is_empty() {
        Line::styled("Title", styling::muted_text_style(&theme))
    } else {
        Line::styled(
            screen.draft().title.clone(),
            styling::normal_text_style(&theme),
        )
    };
    let title = Paragraph::new(title_text).block(field_block(
        "Title",
        screen.focus() == FormField::Title,
        &theme,
    ));
    frame.render_widget(title, chunks[2]);

    let mut body = screen.body_input().clone();
    body.set_block(field_block(
        "Body",
        screen.focus() == FormField::Body,
        &theme,
    ));
    body.set_style(styling::normal_text_style(&theme));
    if screen.focus() != FormField::Body {
        body.set_cursor_style(styling::normal_text_style(&theme));
    }
    frame.render_widget(body.widget(), chunks[3]);

    let button = if screen.draft().is_submitting {
        Line::from(vec![
            Span::styled(
                spinner::frame(spinner_index),
                Style::default().fg(theme.primary.to_color()),
            ),
            Span::raw(" Posting..."),
        ])
    } else {
        Line::styled(
            "Post",
            Style::default()
                .fg(theme.primary.to_color())
                .add_modifier(Modifier::BOLD),
        )
    };
    let submit = Paragraph::new(button)
        .alignment(Alignment::Center)
        .block(field_block(
            "",
            screen.focus() == FormField::Submit,
            &theme,
        ));
    frame.render_widget(submit, chunks[4]);
}

/// Render the image picker: path input, then preview or error.
///
fn image(frame: &mut Frame, size: Rect, screen: &AddPostScreen, theme: &Theme) {
    let picker = screen.picker();
    let mut lines = vec![Line::from(vec![
        Span::styled("Path: ", styling::muted_text_style(theme)),
        Span::styled(
            picker.path_input().to_string(),
            styling::normal_text_style(theme),
        ),
    ])];
    if let Some(e) = picker.error() {
        lines.push(Line::styled(
            e.to_string(),
            Style::default().fg(theme.error.to_color()),
        ));
    } else if let Some(preview) = picker.preview() {
        lines.push(Line::styled(
            format!(
                "{} ({}, {} bytes)",
                preview.file_name, preview.kind, preview.size
            ),
            Style::default().fg(theme.success.to_color()),
        ));
    } else {
        lines.push(Line::styled(
            "No image selected",
            styling::muted_text_style(theme),
        ));
    }
    let paragraph = Paragraph::new(lines).block(field_block(
        "Image",
        screen.focus() == FormField::Image,
        theme,
    ));
    frame.render_widget(paragraph, size);
}

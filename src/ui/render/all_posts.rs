use super::Frame;
use crate::state::State;
use crate::ui::widgets::{spinner, styling};
use crate::utils::text::{excerpt, format_timestamp};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

const EXCERPT_LENGTH: usize = 60;

/// Render the list of posts.
///
pub fn all_posts(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Posts ({})", state.get_posts().len()))
        .border_style(styling::active_block_border_style(&theme));

    if let Some(e) = state.get_posts_error() {
        let paragraph = Paragraph::new(Line::styled(
            format!("Failed to load posts: {}", e),
            Style::default().fg(theme.error.to_color()),
        ))
        .block(block);
        frame.render_widget(paragraph, size);
        return;
    }

    if state.get_posts().is_empty() {
        let text = if state.is_posts_loading() {
            format!("{} Loading posts...", spinner::frame(state.get_spinner_index()))
        } else {
            "No posts yet. Press n to write one.".to_string()
        };
        let paragraph =
            Paragraph::new(Line::styled(text, styling::muted_text_style(&theme))).block(block);
        frame.render_widget(paragraph, size);
        return;
    }

    let items: Vec<ListItem> = state
        .get_posts()
        .iter()
        .map(|post| {
            let mut header = vec![Span::styled(
                post.title.clone(),
                styling::normal_text_style(&theme),
            )];
            if let Some(created_at) = &post.created_at {
                header.push(Span::styled(
                    format!("  {}", format_timestamp(created_at)),
                    styling::muted_text_style(&theme),
                ));
            }
            if let Some(image_type) = &post.image_type {
                header.push(Span::styled(
                    format!("  [{}]", image_type),
                    Style::default().fg(theme.info.to_color()),
                ));
            }
            ListItem::new(vec![
                Line::from(header),
                Line::styled(
                    format!("  {}", excerpt(&post.body, EXCERPT_LENGTH)),
                    styling::muted_text_style(&theme),
                ),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(styling::active_list_item_style(&theme))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, size, state.get_posts_list_state());
}

use super::Frame;
use crate::state::{IconPosition, NotificationKind, State, Toast};
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Return the toast area in the bottom-right corner of `area`.
///
fn toast_area(area: Rect) -> Rect {
    let width = 44u16.min(area.width.saturating_sub(4));
    let height = 3u16.min(area.height);
    let x = area.x + area.width.saturating_sub(width + 2);
    let y = area.y + area.height.saturating_sub(height + 1);
    Rect::new(x, y, width, height)
}

fn kind_color(kind: NotificationKind, theme: &Theme) -> ratatui::style::Color {
    match kind {
        NotificationKind::Success => theme.success.to_color(),
        NotificationKind::Info => theme.info.to_color(),
        NotificationKind::Warning => theme.warning.to_color(),
        NotificationKind::Error => theme.error.to_color(),
    }
}

/// Build the message line with the icon on the configured side.
///
fn toast_line(toast: &Toast, theme: &Theme) -> Line<'static> {
    let notification = &toast.notification;
    let icon = Span::styled(
        notification.icon.glyph(),
        Style::default().fg(kind_color(notification.kind, theme)),
    );
    let message = Span::styled(
        notification.message.clone(),
        Style::default()
            .fg(theme.text.to_color())
            .add_modifier(Modifier::BOLD),
    );
    match notification.icon.position {
        IconPosition::Left => Line::from(vec![icon, Span::raw(" "), message]),
        IconPosition::Right => Line::from(vec![message, Span::raw(" "), icon]),
    }
}

/// Render the current toast, if any.
///
pub fn toast(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let toast = match state.toasts().current() {
        Some(toast) => toast,
        None => return,
    };
    let area = toast_area(size);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(kind_color(toast.notification.kind, theme)))
        .style(Style::default().bg(theme.background.to_color()));
    let paragraph = Paragraph::new(toast_line(toast, theme))
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });
    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

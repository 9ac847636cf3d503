use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders},
};
use tui_logger::TuiLoggerWidget;

/// Render log widget according to state.
///
pub fn log(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let block = Block::default()
        .title("Log")
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    let widget = TuiLoggerWidget::default()
        .block(block)
        .style(styling::normal_text_style(theme))
        .style_error(Style::default().fg(theme.error.to_color()))
        .style_warn(Style::default().fg(theme.warning.to_color()))
        .style_info(Style::default().fg(theme.info.to_color()))
        .style_debug(styling::muted_text_style(theme))
        .style_trace(styling::muted_text_style(theme));
    frame.render_widget(widget, size);
}

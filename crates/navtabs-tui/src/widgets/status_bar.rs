use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let mode_str = if app.strip.disabled() {
            "DISABLED"
        } else {
            "NORMAL"
        };

        let active = app
            .active_tab()
            .map(|t| t.name.to_string())
            .unwrap_or_else(|| "-".to_string());

        let step = match app.strip.scroll_step().value() {
            Some(step) => format!("{:.1}", step),
            None => "?".to_string(),
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(
                " {} | {} | step: {} | scroll: {}",
                mode_str,
                active,
                step,
                if app.strip.scroll_enabled() { "on" } else { "off" }
            )
        };

        let help_hint = " q:quit h/l:tabs 1-9:jump d:disable r:remount ";
        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg).bg(theme.bg)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg)),
            Span::styled(help_hint, Style::default().fg(theme.muted).bg(theme.bg)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Body under the strip: what the selection owner currently shows
pub struct TabContentWidget;

impl TabContentWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
        let theme = &app.theme;
        let title = app
            .active_tab()
            .map(|t| format!(" {} ", t.name))
            .unwrap_or_else(|| " No active tab ".to_string());

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted))
            .style(Style::default().bg(theme.bg).fg(theme.fg));

        let label = Style::default().fg(theme.muted);
        let value = Style::default()
            .fg(theme.fg)
            .add_modifier(Modifier::BOLD);
        let row = |name: &'static str, text: String| {
            Line::from(vec![Span::styled(name, label), Span::styled(text, value)])
        };

        let count = app.strip.tab_count();
        let position = match app.strip.active_index() {
            Some(i) => format!("{} of {} (id {})", i + 1, count, app.strip.active_tab().id),
            None => format!("none of {} (id {})", count, app.strip.active_tab().id),
        };
        let measurement = app.strip.measurement();
        let fmt_width = |w: Option<f64>| w.map(|w| format!("{:.0}", w)).unwrap_or_else(|| "?".into());
        let underline = app.strip.underline(now);

        let lines = vec![
            row("Tab:       ", position),
            row("Row:       ", fmt_width(measurement.tab_row_width)),
            row("Viewport:  ", fmt_width(measurement.viewport_width)),
            row(
                "Scroll:    ",
                format!(
                    "{:.0} / {:.0}",
                    app.host.viewport.offset_at(now),
                    app.host.viewport.max_offset()
                ),
            ),
            row(
                "Underline: ",
                format!("x {:.0}  width {:.0}", underline.offset.x, underline.width),
            ),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

use std::time::Instant;

use navtabs_core::StyleSlot;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

/// Glyph used for the underline bar
const UNDERLINE_GLYPH: &str = "━";

pub struct TabStripWidget;

impl TabStripWidget {
    /// Inner width available to the tab row inside `area`
    pub fn viewport_width(area: Rect) -> u16 {
        area.width.saturating_sub(2)
    }

    pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
        let theme = &app.theme;
        let wrap_style = theme.style_for(&app.strip.slot_style(StyleSlot::Wrap));
        let row_style = theme.style_for(&app.strip.slot_style(StyleSlot::Tabs));

        let title = if app.strip.scrollable() {
            " Tabs ◀▶ "
        } else {
            " Tabs "
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(wrap_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(snapshot) = app.host.layout.snapshot() else {
            return;
        };
        if inner.height == 0 {
            return;
        }
        let layout = &app.host.layout;
        let scroll = app.scroll_cells(now);

        // Label row
        let mut spans = Vec::new();
        let mut cursor = 0i32;
        for (index, tab) in app.strip.tabs().iter().enumerate() {
            let Some(metrics) = snapshot.tab(index) else {
                continue;
            };
            let start = layout.to_cells(metrics.offset);
            let width = layout.to_cells(metrics.size).max(0) as usize;
            if start > cursor {
                spans.push(Span::styled(" ".repeat((start - cursor) as usize), row_style));
            }

            let style = app.strip.tab_style(index);
            let container = theme.style_for(&style.container);
            let text = theme.style_for(&style.container.clone().merge(&style.text));
            let label = tab.name.to_string();
            let label_width = label.width();
            let left = width.saturating_sub(label_width) / 2;
            let right = width.saturating_sub(label_width + left);

            spans.push(Span::styled(" ".repeat(left), container));
            spans.push(Span::styled(label, text));
            spans.push(Span::styled(" ".repeat(right), container));
            cursor = start + width as i32;
        }

        let labels = Paragraph::new(Line::from(spans))
            .style(row_style)
            .scroll((0, scroll));
        frame.render_widget(labels, Rect { height: 1, ..inner });

        if inner.height < 2 {
            return;
        }

        // Underline row
        let underline = app.strip.underline(now);
        let x = layout.to_cells(underline.offset.x).max(0) as usize;
        let width = layout.to_cells(underline.width).max(0) as usize;
        let color = theme.underline_color(&app.strip.slot_style(StyleSlot::Underline));
        let line = if width > 0 {
            Line::from(vec![
                Span::styled(" ".repeat(x), row_style),
                Span::styled(UNDERLINE_GLYPH.repeat(width), row_style.fg(color)),
            ])
        } else {
            Line::default()
        };
        let bar = Paragraph::new(line).style(row_style).scroll((0, scroll));
        frame.render_widget(
            bar,
            Rect {
                y: inner.y + 1,
                height: 1,
                ..inner
            },
        );
    }
}

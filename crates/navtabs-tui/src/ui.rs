use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;
use crate::widgets::{StatusBarWidget, TabContentWidget, TabStripWidget};

/// Height of the strip: borders, label row and underline row
const STRIP_HEIGHT: u16 = 4;

/// Lay out and draw one frame
pub fn draw(frame: &mut Frame, app: &mut App, now: Instant) {
    let size = frame.area();

    // Main layout: strip + content + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(STRIP_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    app.layout(TabStripWidget::viewport_width(main_layout[0]), now);

    TabStripWidget::render(frame, main_layout[0], app, now);
    TabContentWidget::render(frame, main_layout[1], app, now);
    StatusBarWidget::render(frame, main_layout[2], app);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use navtabs_core::{AppConfig, TabDescriptor};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::input::Action;

    fn create_test_terminal(width: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, 12);
        Terminal::new(backend).unwrap()
    }

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    fn small_config() -> AppConfig {
        AppConfig {
            tabs: vec![
                TabDescriptor::new(1, "One"),
                TabDescriptor::new(2, "Two"),
                TabDescriptor::new(3, "Three"),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn render_shows_labels_and_status() {
        let mut terminal = create_test_terminal(80);
        let mut app = App::new(Arc::new(small_config())).unwrap();
        let now = Instant::now();

        terminal.draw(|frame| draw(frame, &mut app, now)).unwrap();

        let labels = row_text(&terminal, 1);
        assert!(labels.contains("One"));
        assert!(labels.contains("Three"));
        assert!(row_text(&terminal, 11).contains("q:quit"));
    }

    #[test]
    fn underline_settles_under_active_tab() {
        let mut terminal = create_test_terminal(80);
        let mut app = App::new(Arc::new(small_config())).unwrap();
        let t0 = Instant::now();

        terminal.draw(|frame| draw(frame, &mut app, t0)).unwrap();
        app.handle_action(Action::LastTab, t0);
        let done = t0 + Duration::from_millis(600);
        app.tick(done);
        terminal.draw(|frame| draw(frame, &mut app, done)).unwrap();

        // Tabs fit, so "Three" (7 cells with padding) sits at the right edge
        let underline = row_text(&terminal, 2);
        let start = underline.find('━').unwrap();
        let bar: String = underline.chars().filter(|c| *c == '━').collect();
        assert_eq!(bar.chars().count(), 7);
        let labels = row_text(&terminal, 1);
        let label_start = labels.find("Three").unwrap();
        assert_eq!(
            labels[..label_start].chars().count() - 1,
            underline[..start].chars().count()
        );
    }

    #[test]
    fn overflowing_row_scrolls_into_view() {
        let mut terminal = create_test_terminal(30);
        let mut app = App::new(Arc::new(AppConfig::default())).unwrap();
        let t0 = Instant::now();

        terminal.draw(|frame| draw(frame, &mut app, t0)).unwrap();
        assert!(row_text(&terminal, 1).contains("Home"));
        assert!(app.strip.scroll_enabled());

        app.handle_action(Action::LastTab, t0);
        let done = t0 + Duration::from_millis(600);
        app.tick(done);
        terminal.draw(|frame| draw(frame, &mut app, done)).unwrap();

        let labels = row_text(&terminal, 1);
        assert!(!labels.contains("Home"));
        assert!(labels.contains("Settings"));
    }
}

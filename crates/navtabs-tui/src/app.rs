use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Result};
use navtabs_core::animation::{GroupCompleted, UnderlineTransition};
use navtabs_core::{
    ActiveTabRef, AppConfig, Host, LayoutMetrics, StripEvent, TabDescriptor, TabId, TabStrip,
    TabStripProps,
};
use tracing::{debug, info, trace};

use crate::input::Action;
use crate::layout::TerminalLayout;
use crate::theme::Theme;
use crate::viewport::ScrollViewport;

/// The terminal side of the strip: layout, scroll viewport and the
/// selection owner.
pub struct TerminalHost {
    pub layout: TerminalLayout,
    pub viewport: ScrollViewport,
    /// Index the strip considers active, mirrored before each run
    active: Option<usize>,
    now: Instant,
    pending_selection: Option<TabId>,
}

impl TerminalHost {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            layout: TerminalLayout::new(config.ui.cell_width),
            viewport: ScrollViewport::new(&config.strip),
            active: None,
            now: Instant::now(),
            pending_selection: None,
        }
    }

    fn sync<C>(&mut self, strip: &TabStrip<C>, now: Instant) {
        self.active = strip.active_index();
        self.now = now;
    }

    fn take_selection(&mut self) -> Option<TabId> {
        self.pending_selection.take()
    }
}

impl<C> Host<C> for TerminalHost {
    fn measure_active_tab(&mut self) -> Option<LayoutMetrics> {
        let index = self.active?;
        self.layout.snapshot()?.tab(index)
    }

    fn scroll_to(&mut self, x: f64, animated: bool) {
        self.viewport.scroll_to(x, animated, self.now);
    }

    fn on_tab(&mut self, tab: &TabDescriptor<C>) {
        debug!(id = %tab.id, name = %tab.name, "Tab selected");
        self.pending_selection = Some(tab.id.clone());
    }

    fn animate_underline(&mut self, transition: &UnderlineTransition) {
        trace!(
            group = transition.group,
            x = transition.offset.to.x,
            width = transition.width.to,
            "Underline animating"
        );
    }

    fn underline_settled(&mut self, completed: GroupCompleted) {
        trace!(group = completed.group, "Underline settled");
    }
}

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub strip: TabStrip,
    pub host: TerminalHost,
    pub theme: Theme,
    pub should_quit: bool,
    pub status_message: Option<String>,
    mounted: bool,
}

impl App {
    pub fn new(config: Arc<AppConfig>) -> Result<Self> {
        let active = config
            .initial_active()
            .ok_or_else(|| anyhow!("No tabs configured"))?;
        let props = TabStripProps::new(config.tabs.clone(), active)
            .styles(config.styles.clone())
            .strip_config(config.strip.clone());
        let strip = TabStrip::new(props)?;

        Ok(Self {
            host: TerminalHost::new(&config),
            theme: Theme::from_overrides(&config.ui.theme),
            strip,
            config,
            should_quit: false,
            status_message: None,
            mounted: false,
        })
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn active_tab(&self) -> Option<&TabDescriptor> {
        self.strip.active_index().and_then(|i| self.strip.tabs().get(i))
    }

    /// Whether frames should be delivered at the animation rate
    pub fn is_animating(&self) -> bool {
        self.strip.is_animating() || self.host.viewport.is_animating()
    }

    /// Current horizontal scroll in whole cells
    pub fn scroll_cells(&self, now: Instant) -> u16 {
        if !self.strip.scrollable() {
            return 0;
        }
        let offset = self.host.viewport.offset_at(now);
        self.host.layout.to_cells(offset).max(0) as u16
    }

    /// Lay out the tab row for a viewport `viewport_cells` wide and feed the
    /// resulting layout events to the strip. Call before every draw.
    pub fn layout(&mut self, viewport_cells: u16, now: Instant) {
        let events = self.host.layout.layout_pass(&self.strip, viewport_cells);
        if let Some(snapshot) = self.host.layout.snapshot() {
            self.host
                .viewport
                .set_bounds(snapshot.row.size, snapshot.viewport.size);
        }
        for event in events {
            self.run(event, now);
        }
        if !self.mounted {
            self.mounted = true;
            self.run(StripEvent::ActiveTabMounted, now);
        }
    }

    /// Advance animations
    pub fn tick(&mut self, now: Instant) {
        self.run(StripEvent::Frame, now);
        self.host.viewport.tick(now);
    }

    pub fn on_resize(&mut self, width: u16, height: u16, now: Instant) {
        debug!(width, height, "Terminal resized");
        if self.config.strip.remeasure_on_resize {
            self.remount(now);
        }
    }

    pub fn remount(&mut self, now: Instant) {
        self.host.layout.reset();
        self.host.viewport.reset();
        self.run(StripEvent::Remount, now);
    }

    /// Press the tab at `index`, the way a tap on it would
    pub fn press(&mut self, index: usize, now: Instant) {
        self.run(StripEvent::TabPressed(index), now);

        // Selection owner: adopt the selection as the new active tab
        if let Some(id) = self.host.take_selection() {
            let commands = self.strip.set_active_tab(ActiveTabRef::new(id));
            self.host.sync(&self.strip, now);
            self.strip.execute(commands, now, &mut self.host);
            self.clear_status();
        } else if self.strip.disabled() {
            self.set_status("Selection disabled");
        }
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        let count = self.strip.tab_count();
        let current = self.strip.active_index().unwrap_or(0);
        match action {
            Action::Quit => self.should_quit = true,
            Action::NextTab => self.press((current + 1).min(count - 1), now),
            Action::PrevTab => self.press(current.saturating_sub(1), now),
            Action::FirstTab => self.press(0, now),
            Action::LastTab => self.press(count - 1, now),
            Action::SelectIndex(index) => {
                if index < count {
                    self.press(index, now);
                }
            }
            Action::ToggleDisabled => {
                let disabled = !self.strip.disabled();
                self.strip.set_disabled(disabled);
                info!(disabled, "Toggled selection callback");
                self.set_status(if disabled {
                    "Selection disabled"
                } else {
                    "Selection enabled"
                });
            }
            Action::Remount => {
                self.remount(now);
                self.set_status("Remounted");
            }
            Action::None => {}
        }
    }

    fn run(&mut self, event: StripEvent, now: Instant) {
        self.host.sync(&self.strip, now);
        self.strip.run(event, now, &mut self.host);
    }
}

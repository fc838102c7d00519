//! The tab strip controller.
//!
//! Everything the widget does is a reaction to a named [`StripEvent`]. One
//! transition function, [`TabStrip::dispatch`], folds the event into the
//! widget's state and returns the [`StripCommand`]s the host should execute.
//! [`TabStrip::run`] is the same thing wired to a [`Host`] implementation.

use std::collections::HashSet;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, trace, warn};

use crate::animation::{AnimatedUnderlineState, GroupCompleted, UnderlineAnimator, UnderlineTransition};
use crate::config::StripConfig;
use crate::geometry::{Element, LayoutMetrics};
use crate::measurement::{MeasurementState, ScrollStep};
use crate::scroll::{self, ScrollRequest};
use crate::style::{StyleOverrides, StyleSlot, StyleSpec, TabStyle};
use crate::tab::{find_active, ActiveTabRef, TabDescriptor};

/// Inputs from the host renderer and the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StripEvent {
    /// Layout pass finished for the tab row
    TabRowLaidOut(LayoutMetrics),
    /// Layout pass finished for the scroll viewport
    ViewportLaidOut(LayoutMetrics),
    /// Layout pass finished for the active tab
    ActiveTabLaidOut(LayoutMetrics),
    /// The active tab element was (re)mounted; its geometry must be queried
    ActiveTabMounted,
    /// Answer to a [`StripCommand::MeasureActiveTab`] query
    ActiveTabMeasured(LayoutMetrics),
    /// The user pressed the tab at this index
    TabPressed(usize),
    /// Animation frame
    Frame,
    /// Throw away all measurements, as a fresh mount would
    Remount,
}

impl StripEvent {
    /// Element whose layout this event reports, if any
    pub fn element(&self) -> Option<Element> {
        match self {
            StripEvent::TabRowLaidOut(_) => Some(Element::TabRow),
            StripEvent::ViewportLaidOut(_) => Some(Element::Viewport),
            StripEvent::ActiveTabLaidOut(_) | StripEvent::ActiveTabMeasured(_) => {
                Some(Element::ActiveTab)
            }
            _ => None,
        }
    }
}

/// Requests for the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum StripCommand {
    /// Scroll the viewport; fire and forget
    ScrollTo(ScrollRequest),
    /// Start (or supersede) the underline's parallel group
    AnimateUnderline(UnderlineTransition),
    /// Both underline tweens of a group finished
    UnderlineSettled(GroupCompleted),
    /// Forward the selection to its owner
    Select { index: usize },
    /// Query the active tab's geometry
    MeasureActiveTab,
}

/// The host renderer as seen by the strip.
pub trait Host<C = ()> {
    /// Imperative measure of the active tab element
    fn measure_active_tab(&mut self) -> Option<LayoutMetrics>;

    /// Scroll the viewport to `x`
    fn scroll_to(&mut self, x: f64, animated: bool);

    /// Selection owner callback
    fn on_tab(&mut self, tab: &TabDescriptor<C>);

    /// Underline group started. Hosts that sample [`TabStrip::underline`]
    /// every frame can ignore this.
    fn animate_underline(&mut self, _transition: &UnderlineTransition) {}

    fn underline_settled(&mut self, _completed: GroupCompleted) {}
}

/// Configuration surface of the widget.
#[derive(Debug, Clone)]
pub struct TabStripProps<C = ()> {
    pub tabs: Vec<TabDescriptor<C>>,
    pub active_tab: ActiveTabRef,
    pub styles: StyleOverrides,
    pub strip: StripConfig,
}

impl<C> TabStripProps<C> {
    pub fn new(tabs: Vec<TabDescriptor<C>>, active_tab: ActiveTabRef) -> Self {
        Self {
            tabs,
            active_tab,
            styles: StyleOverrides::default(),
            strip: StripConfig::default(),
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.strip.disabled = disabled;
        self
    }

    pub fn use_native_driver(mut self, use_native_driver: bool) -> Self {
        self.strip.use_native_driver = use_native_driver;
        self
    }

    pub fn styles(mut self, styles: StyleOverrides) -> Self {
        self.styles = styles;
        self
    }

    pub fn strip_config(mut self, strip: StripConfig) -> Self {
        self.strip = strip;
        self
    }

    /// Reject props the widget cannot work with. Duplicate ids and an active
    /// id that matches no tab are allowed but logged.
    pub fn validate(&self) -> crate::Result<()> {
        if self.tabs.is_empty() {
            return Err(crate::Error::InvalidProps("tabs must not be empty".into()));
        }

        let mut seen = HashSet::new();
        for tab in &self.tabs {
            if !seen.insert(&tab.id) {
                warn!(id = %tab.id, "Duplicate tab id");
            }
        }

        if find_active(&self.tabs, &self.active_tab).is_none() {
            warn!(id = %self.active_tab.id, "Active tab matches no tab");
        }
        Ok(())
    }
}

pub struct TabStrip<C = ()> {
    props: TabStripProps<C>,
    measurement: MeasurementState,
    underline: UnderlineAnimator,
    active_index: Option<usize>,
    active_geometry: Option<LayoutMetrics>,
}

impl<C> TabStrip<C> {
    /// Mount the widget. The host should follow up with
    /// [`StripEvent::ActiveTabMounted`] once the active tab is on screen.
    pub fn new(props: TabStripProps<C>) -> crate::Result<Self> {
        props.validate()?;
        let active_index = find_active(&props.tabs, &props.active_tab);
        let underline = UnderlineAnimator::new(&props.strip);
        debug!(tabs = props.tabs.len(), ?active_index, "Tab strip mounted");
        Ok(Self {
            props,
            measurement: MeasurementState::new(),
            underline,
            active_index,
            active_geometry: None,
        })
    }

    pub fn props(&self) -> &TabStripProps<C> {
        &self.props
    }

    pub fn tabs(&self) -> &[TabDescriptor<C>] {
        &self.props.tabs
    }

    pub fn tab_count(&self) -> usize {
        self.props.tabs.len()
    }

    pub fn active_tab(&self) -> &ActiveTabRef {
        &self.props.active_tab
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active_index == Some(index)
    }

    pub fn measurement(&self) -> &MeasurementState {
        &self.measurement
    }

    pub fn scroll_step(&self) -> ScrollStep {
        self.measurement.scroll_step
    }

    pub fn scroll_enabled(&self) -> bool {
        self.measurement.scroll_enabled
    }

    /// Whether the row sits inside a scrolling viewport. True until the
    /// first measurement proves the row fits.
    pub fn scrollable(&self) -> bool {
        self.measurement.scroll_enabled
    }

    pub fn disabled(&self) -> bool {
        self.props.strip.disabled
    }

    /// Toggle the selection callback without remounting
    pub fn set_disabled(&mut self, disabled: bool) {
        self.props.strip.disabled = disabled;
    }

    /// Last measured geometry of the active tab
    pub fn active_geometry(&self) -> Option<LayoutMetrics> {
        self.active_geometry
    }

    pub fn underline(&self, now: Instant) -> AnimatedUnderlineState {
        self.underline.sample(now)
    }

    pub fn underline_animator(&self) -> &UnderlineAnimator {
        &self.underline
    }

    /// Whether the host needs to keep delivering frames
    pub fn is_animating(&self) -> bool {
        self.underline.is_animating()
    }

    pub fn tab_style(&self, index: usize) -> TabStyle {
        self.props.styles.resolve_tab(self.is_active(index))
    }

    pub fn slot_style(&self, slot: StyleSlot) -> StyleSpec {
        self.props.styles.resolve(slot)
    }

    /// Selection changed externally. The newly active element has to be
    /// measured before the underline can follow it.
    pub fn set_active_tab(&mut self, active: ActiveTabRef) -> Vec<StripCommand> {
        if active == self.props.active_tab {
            return Vec::new();
        }
        self.active_index = find_active(&self.props.tabs, &active);
        if self.active_index.is_none() {
            warn!(id = %active.id, "Active tab matches no tab");
        }
        self.props.active_tab = active;
        self.active_geometry = None;
        match self.active_index {
            Some(_) => vec![StripCommand::MeasureActiveTab],
            None => Vec::new(),
        }
    }

    /// Fold one event into the state and return the resulting host requests.
    pub fn dispatch(&mut self, event: StripEvent, now: Instant) -> Vec<StripCommand> {
        let tab_count = self.tab_count();
        if let Some(element) = event.element() {
            trace!(?element, ?event, "Layout reported");
        }
        match event {
            StripEvent::TabRowLaidOut(metrics) => {
                if let Some(geometry) = self.measurement.on_tab_row_measured(metrics.size, tab_count) {
                    self.log_geometry(geometry.scroll_enabled);
                }
                Vec::new()
            }
            StripEvent::ViewportLaidOut(metrics) => {
                if let Some(geometry) = self.measurement.on_viewport_measured(metrics.size, tab_count) {
                    self.log_geometry(geometry.scroll_enabled);
                }
                Vec::new()
            }
            StripEvent::ActiveTabLaidOut(metrics) | StripEvent::ActiveTabMeasured(metrics) => {
                self.on_active_tab_measured(metrics, now)
            }
            StripEvent::ActiveTabMounted => {
                if self.active_index.is_some() {
                    vec![StripCommand::MeasureActiveTab]
                } else {
                    Vec::new()
                }
            }
            StripEvent::TabPressed(index) => self.on_tab_selected(index),
            StripEvent::Frame => self
                .underline
                .tick(now)
                .map(StripCommand::UnderlineSettled)
                .into_iter()
                .collect(),
            StripEvent::Remount => {
                info!("Remounting tab strip");
                self.measurement.reset();
                self.underline = UnderlineAnimator::new(&self.props.strip);
                self.active_geometry = None;
                self.dispatch(StripEvent::ActiveTabMounted, now)
            }
        }
    }

    /// [`Self::dispatch`] followed by executing the commands on `host`.
    /// Measure queries are answered synchronously and fed back in.
    pub fn run<H: Host<C>>(&mut self, event: StripEvent, now: Instant, host: &mut H) {
        let commands = self.dispatch(event, now);
        self.execute(commands, now, host);
    }

    /// Execute `commands` on `host`, e.g. the ones returned by
    /// [`Self::set_active_tab`].
    pub fn execute<H: Host<C>>(&mut self, commands: Vec<StripCommand>, now: Instant, host: &mut H) {
        let mut pending = commands;
        while !pending.is_empty() {
            let mut follow_up = Vec::new();
            for command in pending {
                match command {
                    StripCommand::ScrollTo(request) => host.scroll_to(request.x, request.animated),
                    StripCommand::AnimateUnderline(transition) => host.animate_underline(&transition),
                    StripCommand::UnderlineSettled(completed) => host.underline_settled(completed),
                    StripCommand::Select { index } => {
                        if let Some(tab) = self.props.tabs.get(index) {
                            host.on_tab(tab);
                        }
                    }
                    StripCommand::MeasureActiveTab => {
                        if let Some(metrics) = host.measure_active_tab() {
                            follow_up.extend(self.dispatch(StripEvent::ActiveTabMeasured(metrics), now));
                        }
                    }
                }
            }
            pending = follow_up;
        }
    }

    fn log_geometry(&self, scroll_enabled: bool) {
        if scroll_enabled {
            info!(step = ?self.measurement.scroll_step.value(), "Tab row overflows viewport");
        } else {
            info!("Tab row fits viewport, scrolling disabled");
        }
    }

    fn on_active_tab_measured(&mut self, metrics: LayoutMetrics, now: Instant) -> Vec<StripCommand> {
        if self.active_index.is_none() {
            return Vec::new();
        }
        self.active_geometry = Some(metrics);

        // Same target as the running (or finished) group: nothing to re-seed
        let target = self.underline.target();
        if !self.underline.is_idle()
            && target.offset.x == metrics.offset
            && target.width == metrics.size
        {
            return Vec::new();
        }

        self.underline
            .move_underline(metrics.offset, metrics.size, now)
            .map(StripCommand::AnimateUnderline)
            .into_iter()
            .collect()
    }

    fn on_tab_selected(&mut self, index: usize) -> Vec<StripCommand> {
        let tab_count = self.tab_count();
        if index >= tab_count {
            warn!(index, tab_count, "Tab index out of range");
            return Vec::new();
        }

        let mut commands = Vec::new();
        if let Some(request) = scroll::on_tab_selected(&self.measurement, index, tab_count) {
            debug!(index, x = request.x, "Scrolling to selected tab");
            commands.push(StripCommand::ScrollTo(request));
        }
        if !self.props.strip.disabled {
            commands.push(StripCommand::Select { index });
        }
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn strip(count: usize) -> TabStrip {
        let tabs = (0..count)
            .map(|i| TabDescriptor::new(i as i64, format!("Tab {}", i)))
            .collect();
        TabStrip::new(TabStripProps::new(tabs, ActiveTabRef::new(0))).unwrap()
    }

    #[test]
    fn test_rejects_empty_tabs() {
        let props: TabStripProps = TabStripProps::new(Vec::new(), ActiveTabRef::new(0));
        assert!(matches!(
            TabStrip::new(props),
            Err(crate::Error::InvalidProps(_))
        ));
    }

    #[test]
    fn test_measurements_in_any_order() {
        let now = Instant::now();
        let mut a = strip(5);
        a.dispatch(StripEvent::TabRowLaidOut(LayoutMetrics::width(500.0)), now);
        a.dispatch(StripEvent::ViewportLaidOut(LayoutMetrics::width(300.0)), now);

        let mut b = strip(5);
        b.dispatch(StripEvent::ViewportLaidOut(LayoutMetrics::width(300.0)), now);
        b.dispatch(StripEvent::TabRowLaidOut(LayoutMetrics::width(500.0)), now);

        assert_eq!(a.scroll_step(), ScrollStep::Computed { step: 40.0 });
        assert_eq!(a.measurement(), b.measurement());
    }

    #[test]
    fn test_mount_queries_active_tab() {
        let mut s = strip(3);
        assert_eq!(
            s.dispatch(StripEvent::ActiveTabMounted, Instant::now()),
            vec![StripCommand::MeasureActiveTab]
        );
    }

    #[test]
    fn test_repeated_identical_geometry_does_not_restart() {
        let now = Instant::now();
        let mut s = strip(3);
        let metrics = LayoutMetrics::new(0.0, 60.0);
        assert_eq!(s.dispatch(StripEvent::ActiveTabMeasured(metrics), now).len(), 1);
        assert!(s
            .dispatch(StripEvent::ActiveTabLaidOut(metrics), now + Duration::from_millis(10))
            .is_empty());
    }

    #[test]
    fn test_event_elements() {
        let metrics = LayoutMetrics::width(10.0);
        assert_eq!(StripEvent::TabRowLaidOut(metrics).element(), Some(Element::TabRow));
        assert_eq!(StripEvent::ActiveTabMeasured(metrics).element(), Some(Element::ActiveTab));
        assert_eq!(StripEvent::Frame.element(), None);
    }

    #[test]
    fn test_out_of_range_press_is_ignored() {
        let mut s = strip(2);
        assert!(s.dispatch(StripEvent::TabPressed(7), Instant::now()).is_empty());
    }

    #[test]
    fn test_set_active_tab_requests_measure() {
        let mut s = strip(3);
        assert!(s.set_active_tab(ActiveTabRef::new(0)).is_empty());
        assert_eq!(
            s.set_active_tab(ActiveTabRef::new(2)),
            vec![StripCommand::MeasureActiveTab]
        );
        assert_eq!(s.active_index(), Some(2));
        assert!(s.set_active_tab(ActiveTabRef::new(99)).is_empty());
        assert_eq!(s.active_index(), None);
    }

    #[test]
    fn test_remount_resets_measurement() {
        let now = Instant::now();
        let mut s = strip(5);
        s.dispatch(StripEvent::TabRowLaidOut(LayoutMetrics::width(500.0)), now);
        s.dispatch(StripEvent::ViewportLaidOut(LayoutMetrics::width(300.0)), now);
        s.dispatch(StripEvent::ActiveTabMeasured(LayoutMetrics::new(0.0, 50.0)), now);

        let commands = s.dispatch(StripEvent::Remount, now);
        assert_eq!(commands, vec![StripCommand::MeasureActiveTab]);
        assert_eq!(s.scroll_step(), ScrollStep::Unmeasured);
        assert!(s.underline_animator().is_idle());
        assert_eq!(s.active_geometry(), None);
    }
}

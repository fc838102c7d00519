//! Terminal layout of the tab row.
//!
//! Tabs are laid out in terminal cells and reported to the strip in layout
//! units (`cell_width` px per cell), the way a graphical host reports pixels.
//! Like such a host, an element whose geometry did not change between two
//! passes does not get a new layout event.

use navtabs_core::{LayoutMetrics, StripEvent, TabStrip};
use unicode_width::UnicodeWidthStr;

/// Geometry of one layout pass, in layout units.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    pub row: LayoutMetrics,
    pub viewport: LayoutMetrics,
    pub tabs: Vec<LayoutMetrics>,
}

impl LayoutSnapshot {
    pub fn tab(&self, index: usize) -> Option<LayoutMetrics> {
        self.tabs.get(index).copied()
    }
}

#[derive(Debug, Clone)]
pub struct TerminalLayout {
    cell_width: f64,
    last: Option<LayoutSnapshot>,
    last_active: Option<usize>,
    last_scrollable: bool,
}

impl TerminalLayout {
    pub fn new(cell_width: f64) -> Self {
        Self {
            cell_width,
            last: None,
            last_active: None,
            last_scrollable: false,
        }
    }

    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    /// Most recent pass
    pub fn snapshot(&self) -> Option<&LayoutSnapshot> {
        self.last.as_ref()
    }

    /// Forget previous passes so the next one reports every element
    pub fn reset(&mut self) {
        self.last = None;
        self.last_active = None;
        self.last_scrollable = false;
    }

    /// Layout units to whole cells
    pub fn to_cells(&self, units: f64) -> i32 {
        (units / self.cell_width).round() as i32
    }

    fn to_units(&self, cells: u32) -> f64 {
        cells as f64 * self.cell_width
    }

    /// Lay out the row for a viewport `viewport_cells` wide.
    ///
    /// Tabs take their label width plus padding. When they fit, the spare
    /// space is spread between them (first and last tab touch the edges).
    pub fn compute<C>(&self, strip: &TabStrip<C>, viewport_cells: u16) -> LayoutSnapshot {
        let widths: Vec<u32> = strip
            .tabs()
            .iter()
            .enumerate()
            .map(|(index, tab)| {
                let padding = strip.tab_style(index).container.padding.unwrap_or(0);
                let pad_cells = (padding as f64 / self.cell_width).round() as u32;
                tab.name.to_string().width() as u32 + 2 * pad_cells
            })
            .collect();

        let content: u32 = widths.iter().sum();
        let viewport = viewport_cells as u32;
        let spare = viewport.saturating_sub(content);
        let gaps = widths.len().saturating_sub(1) as u32;

        let mut tabs = Vec::with_capacity(widths.len());
        let mut x = 0u32;
        for (index, width) in widths.iter().enumerate() {
            tabs.push(LayoutMetrics::new(self.to_units(x), self.to_units(*width)));
            x += width;
            if gaps > 0 && (index as u32) < gaps {
                // Remainder goes to the leftmost gaps
                x += spare / gaps + u32::from((index as u32) < spare % gaps);
            }
        }

        LayoutSnapshot {
            row: LayoutMetrics::width(self.to_units(content.max(viewport))),
            viewport: LayoutMetrics::width(self.to_units(viewport)),
            tabs,
        }
    }

    /// Run a layout pass and return the layout events for elements whose
    /// geometry changed since the previous pass.
    pub fn layout_pass<C>(&mut self, strip: &TabStrip<C>, viewport_cells: u16) -> Vec<StripEvent> {
        let snapshot = self.compute(strip, viewport_cells);
        let active = strip.active_index();
        let scrollable = strip.scrollable();
        let mut events = Vec::new();

        let previous = self.last.as_ref();
        if previous.map(|p| p.row) != Some(snapshot.row) {
            events.push(StripEvent::TabRowLaidOut(snapshot.row));
        }
        // The viewport only exists while the row scrolls; a newly mounted
        // viewport reports even if its width is unchanged
        if scrollable
            && (previous.map(|p| p.viewport) != Some(snapshot.viewport) || !self.last_scrollable)
        {
            events.push(StripEvent::ViewportLaidOut(snapshot.viewport));
        }
        if let Some(index) = active {
            let current = snapshot.tab(index);
            let before = if self.last_active == active {
                previous.and_then(|p| p.tab(index))
            } else {
                None
            };
            if let Some(metrics) = current.filter(|m| Some(*m) != before) {
                events.push(StripEvent::ActiveTabLaidOut(metrics));
            }
        }

        self.last = Some(snapshot);
        self.last_active = active;
        self.last_scrollable = scrollable;
        events
    }
}

//! Headless run of the strip against equal-width tabs.

use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use serde::Serialize;

use navtabs_core::animation::{GroupCompleted, UnderlineTransition};
use navtabs_core::{
    ActiveTabRef, AppConfig, Host, LayoutMetrics, StripEvent, TabDescriptor, TabId, TabStrip,
    TabStripProps,
};

pub struct SimulateArgs {
    pub tabs: usize,
    pub row: f64,
    pub viewport: f64,
    pub select: Vec<usize>,
    pub interval_ms: u64,
    pub json: bool,
}

/// What the host was asked to do
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Scroll { x: f64, animated: bool },
    Select { id: TabId },
    Underline(UnderlineTransition),
    Settled(GroupCompleted),
}

#[derive(Debug, Serialize)]
pub struct TraceEntry {
    pub at_ms: u64,
    pub event: String,
    pub records: Vec<Record>,
}

#[derive(Debug, Serialize)]
pub struct Trace {
    pub step: Option<f64>,
    pub scroll_enabled: bool,
    pub entries: Vec<TraceEntry>,
}

/// Host whose tabs all share the row equally
struct SimHost {
    tab_width: f64,
    active: Option<usize>,
    records: Vec<Record>,
    selection: Option<TabId>,
}

impl SimHost {
    fn geometry(&self, index: usize) -> LayoutMetrics {
        LayoutMetrics::new(index as f64 * self.tab_width, self.tab_width)
    }
}

impl Host for SimHost {
    fn measure_active_tab(&mut self) -> Option<LayoutMetrics> {
        self.active.map(|i| self.geometry(i))
    }

    fn scroll_to(&mut self, x: f64, animated: bool) {
        self.records.push(Record::Scroll { x, animated });
    }

    fn on_tab(&mut self, tab: &TabDescriptor) {
        self.selection = Some(tab.id.clone());
        self.records.push(Record::Select { id: tab.id.clone() });
    }

    fn animate_underline(&mut self, transition: &UnderlineTransition) {
        self.records.push(Record::Underline(*transition));
    }

    fn underline_settled(&mut self, completed: GroupCompleted) {
        self.records.push(Record::Settled(completed));
    }
}

/// Drive a strip through mount, the given presses, and a final settle
pub fn simulate(config: &AppConfig, args: &SimulateArgs) -> Result<Trace> {
    if args.tabs == 0 {
        bail!("--tabs must be at least 1");
    }

    let tabs = (0..args.tabs)
        .map(|i| TabDescriptor::new(i as i64, format!("Tab {}", i)))
        .collect();
    let props = TabStripProps::new(tabs, ActiveTabRef::new(0)).strip_config(config.strip.clone());
    let mut strip = TabStrip::new(props)?;
    let mut host = SimHost {
        tab_width: args.row / args.tabs as f64,
        active: strip.active_index(),
        records: Vec::new(),
        selection: None,
    };

    let t0 = Instant::now();
    let mut entries = Vec::new();
    let mut record = |host: &mut SimHost, at: Duration, event: String| {
        let records = std::mem::take(&mut host.records);
        if !records.is_empty() {
            entries.push(TraceEntry {
                at_ms: at.as_millis() as u64,
                event,
                records,
            });
        }
    };

    strip.run(StripEvent::TabRowLaidOut(LayoutMetrics::width(args.row)), t0, &mut host);
    strip.run(StripEvent::ViewportLaidOut(LayoutMetrics::width(args.viewport)), t0, &mut host);
    strip.run(StripEvent::ActiveTabMounted, t0, &mut host);
    record(&mut host, Duration::ZERO, "mount".to_string());

    let interval = Duration::from_millis(args.interval_ms);
    let mut at = Duration::ZERO;
    for &index in &args.select {
        at += interval;
        let now = t0 + at;
        strip.run(StripEvent::Frame, now, &mut host);
        record(&mut host, at, "frame".to_string());

        strip.run(StripEvent::TabPressed(index), now, &mut host);
        if let Some(id) = host.selection.take() {
            let commands = strip.set_active_tab(ActiveTabRef::new(id));
            host.active = strip.active_index();
            strip.execute(commands, now, &mut host);
        }
        record(&mut host, at, format!("press {}", index));
    }

    at += strip.underline_animator().duration();
    strip.run(StripEvent::Frame, t0 + at, &mut host);
    record(&mut host, at, "frame".to_string());

    Ok(Trace {
        step: strip.scroll_step().value(),
        scroll_enabled: strip.scroll_enabled(),
        entries,
    })
}

pub fn run(config: &AppConfig, args: SimulateArgs) -> Result<()> {
    let trace = simulate(config, &args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&trace)?);
        return Ok(());
    }

    match trace.step {
        Some(step) => println!(
            "step: {:.2} (scroll {})",
            step,
            if trace.scroll_enabled { "enabled" } else { "disabled" }
        ),
        None => println!("step: unmeasured"),
    }
    for entry in &trace.entries {
        for record in &entry.records {
            println!("{:>6} ms  {:<10} {}", entry.at_ms, entry.event, describe(record));
        }
    }
    Ok(())
}

fn describe(record: &Record) -> String {
    match record {
        Record::Scroll { x, animated } => {
            format!("scroll to {:.1}{}", x, if *animated { " (animated)" } else { "" })
        }
        Record::Select { id } => format!("select tab {}", id),
        Record::Underline(t) => format!(
            "underline #{}: x {:.1} -> {:.1}, width {:.1} -> {:.1} over {} ms",
            t.group, t.offset.from.x, t.offset.to.x, t.width.from, t.width.to, t.width.duration_ms
        ),
        Record::Settled(c) => format!("underline #{} settled", c.group),
    }
}

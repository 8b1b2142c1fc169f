//! Count-up animation for statistic numbers.

use std::ops::ControlFlow;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use folio_dom::{Easing, Event, Observer, RootMargin, SharedDocument};
use log::debug;
use tokio::time::Instant;

use crate::page::{Behavior, EventResult};
use crate::runtime::{ScheduledTask, has_runtime};

pub const ANIMATED_CLASS: &str = "animated";
pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);
/// Roughly one frame at 60fps.
pub const FRAME: Duration = Duration::from_millis(16);

/// Targets at or above this are shown with a `+` suffix.
pub const PLUS_SUFFIX_FROM: u64 = 100;

/// A count from zero up to `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    pub target: u64,
    pub duration: Duration,
    pub easing: Easing,
}

impl CountUp {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            duration: DEFAULT_DURATION,
            easing: Easing::Linear,
        }
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// `min(elapsed / duration, 1)`.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn value_at(&self, elapsed: Duration) -> u64 {
        let p = self.progress(elapsed);
        if p >= 1.0 {
            return self.target;
        }
        (self.easing.apply(p) * self.target as f32).floor() as u64
    }

    pub fn label_at(&self, elapsed: Duration) -> String {
        self.label(self.value_at(elapsed))
    }

    pub fn final_label(&self) -> String {
        self.label(self.target)
    }

    fn label(&self, value: u64) -> String {
        if self.target >= PLUS_SUFFIX_FROM {
            format!("{value}+")
        } else {
            value.to_string()
        }
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

/// Parse the number a stat element shows, ignoring everything but digits.
pub fn parse_target(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

#[derive(Debug)]
struct Stat {
    id: String,
    count: CountUp,
}

/// Starts a count-up on each stat element when it is half visible.
#[derive(Debug)]
pub struct Counters {
    document: SharedDocument,
    observer: Observer,
    stats: Vec<Stat>,
    tasks: Mutex<Vec<ScheduledTask>>,
}

impl Counters {
    /// Watch elements with `class` whose text contains a number.
    pub fn install(document: &SharedDocument, class: &str) -> Self {
        let stats = document.with(|doc| {
            doc.query_class(class)
                .into_iter()
                .filter_map(|id| {
                    let el = doc.get(&id)?;
                    let target = el
                        .get_data("target")
                        .and_then(|t| parse_target(t))
                        .or_else(|| parse_target(&el.text_content()))?;
                    Some(Stat {
                        id,
                        count: CountUp::new(target),
                    })
                })
                .collect::<Vec<_>>()
        });
        debug!("counters: {} stats", stats.len());
        Self {
            document: document.clone(),
            observer: Observer::new(0.5, RootMargin::default()),
            stats,
            tasks: Mutex::new(Vec::new()),
        }
    }

    fn tasks(&self) -> MutexGuard<'_, Vec<ScheduledTask>> {
        self.tasks.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn target(&self, id: &str) -> Option<u64> {
        self.stats.iter().find(|s| s.id == id).map(|s| s.count.target)
    }

    /// Start counting for stats that just became visible. Each stat
    /// animates at most once. Returns how many started.
    pub fn refresh(&self) -> usize {
        let started: Vec<&Stat> = self.document.with_mut(|doc| {
            let viewport = doc.viewport;
            let mut started = Vec::new();
            for stat in &self.stats {
                let Some(el) = doc.get(&stat.id) else {
                    continue;
                };
                if el.has_class(ANIMATED_CLASS)
                    || !self
                        .observer
                        .is_intersecting(&viewport, el.offset_top, el.height)
                {
                    continue;
                }
                doc.update(&stat.id, |el| {
                    el.add_class(ANIMATED_CLASS);
                    el.set_text(stat.count.label(0));
                });
                started.push(stat);
            }
            started
        });

        for stat in &started {
            self.animate(stat);
        }
        started.len()
    }

    fn animate(&self, stat: &Stat) {
        if !has_runtime() {
            let label = stat.count.final_label();
            self.document
                .with_mut(|doc| doc.update(&stat.id, |el| el.set_text(label)));
            return;
        }

        let document = self.document.clone();
        let id = stat.id.clone();
        let count = stat.count;
        let start = Instant::now();
        let mut task = ScheduledTask::new("count-up");
        task.start_repeating(FRAME, move || {
            let elapsed = start.elapsed();
            let label = count.label_at(elapsed);
            document.with_mut(|doc| doc.update(&id, |el| el.set_text(label)));
            if count.is_finished(elapsed) {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        let mut tasks = self.tasks();
        tasks.retain(ScheduledTask::is_running);
        tasks.push(task);
    }
}

impl Behavior for Counters {
    fn name(&self) -> &'static str {
        "counters"
    }

    fn on_event(&self, event: &Event) -> EventResult {
        match event {
            Event::Scroll { .. } | Event::Resize { .. } => (self.refresh() > 0).into(),
            _ => EventResult::Ignored,
        }
    }
}

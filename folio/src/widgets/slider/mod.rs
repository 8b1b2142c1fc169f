//! Carousel with paged navigation, dot indicators and autoplay.
//!
//! Slides are shown `per_view` at a time, where `per_view` follows the
//! viewport width through the configured breakpoints. The track element
//! is offset by `-(page * card_pitch * per_view)` pixels; prev/next
//! buttons are disabled at the first/last page and the dot for the
//! current page carries the `active` class.
//!
//! Autoplay advances one page per interval and wraps from the last page
//! back to the first. Manual navigation never wraps. Hovering the track
//! pauses autoplay; leaving it restarts the interval if autoplay is still
//! wanted. A start requested while hovering takes effect on leave.
//!
//! # Example
//!
//! ```ignore
//! let doc = SharedDocument::new(document);
//! if let Some(slider) = Slider::initialize(&doc, SliderConfig::default()) {
//!     slider.go_to_page(5); // clamped to the last page
//!     page.mount(slider);
//! }
//! ```

mod events;
mod layout;
pub mod render;
mod state;

pub use layout::SliderLayout;
pub use state::{Direction, SliderState, total_pages};

use std::ops::ControlFlow;
use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockWriteGuard};

use folio_dom::SharedDocument;
use log::{debug, warn};

use crate::config::SliderConfig;
use crate::runtime::ScheduledTask;

#[derive(Debug)]
struct SliderInner {
    config: SliderConfig,
    document: SharedDocument,
    state: RwLock<SliderState>,
    autoplay: Mutex<ScheduledTask>,
}

impl SliderInner {
    fn state_mut(&self) -> RwLockWriteGuard<'_, SliderState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    fn autoplay(&self) -> MutexGuard<'_, ScheduledTask> {
        self.autoplay.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Render `state` while the caller still holds the state lock.
    fn render(&self, state: &SliderState) -> SliderLayout {
        let layout = SliderLayout::compute(state, self.config.card_pitch());
        self.document
            .with_mut(|doc| render::apply(doc, &self.config, &layout));
        layout
    }

    fn rebuild(&self, state: &SliderState) {
        self.document.with_mut(|doc| {
            render::build_dots(doc, &self.config, state.total_pages(), state.current_page())
        });
        self.render(state);
    }

    fn autoplay_tick(&self) {
        let mut state = self.state_mut();
        state.advance_wrapping();
        debug!(
            "slider {}: autoplay to page {}/{}",
            self.config.track_id,
            state.current_page(),
            state.total_pages()
        );
        self.render(&state);
    }
}

/// A carousel bound to one slider element.
///
/// Cloning yields another handle to the same slider.
#[derive(Debug, Clone)]
pub struct Slider {
    inner: Arc<SliderInner>,
}

impl Slider {
    /// Bind to the slider markup named in `config`.
    ///
    /// Returns `None` when any of the track, prev, next or dots elements
    /// is missing, so pages without a slider simply don't get one, or when
    /// the config is invalid. Otherwise sizes pages for the current
    /// viewport, builds the dots, renders page 0 and, if enabled, starts
    /// autoplay.
    pub fn initialize(document: &SharedDocument, config: SliderConfig) -> Option<Self> {
        if let Err(e) = config.validate() {
            warn!("slider {}: {e}", config.track_id);
            return None;
        }

        let (slides, width) = document.with(|doc| {
            let present = [
                &config.track_id,
                &config.prev_id,
                &config.next_id,
                &config.dots_id,
            ]
            .iter()
            .all(|id| doc.contains(id));
            present.then(|| {
                (
                    doc.query_class_within(&config.track_id, &config.slide_class),
                    doc.viewport.width,
                )
            })
        })?;

        let per_view = config.slides_per_view(width);
        let state = SliderState::new(slides, per_view);
        debug!(
            "slider {}: {} slides, {} per view, {} pages",
            config.track_id,
            state.slide_count(),
            per_view,
            state.total_pages()
        );

        let inner = Arc::new(SliderInner {
            autoplay: Mutex::new(ScheduledTask::new("slider autoplay")),
            config,
            document: document.clone(),
            state: RwLock::new(state),
        });
        {
            let state = inner.state_mut();
            inner.rebuild(&state);
        }

        let slider = Self { inner };
        if slider.inner.config.autoplay {
            slider.start_autoplay();
        }
        Some(slider)
    }

    pub fn config(&self) -> &SliderConfig {
        &self.inner.config
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Snapshot of the pagination state.
    pub fn state(&self) -> SliderState {
        self.inner
            .state
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|e| e.into_inner().clone())
    }

    pub fn current_page(&self) -> usize {
        self.state().current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.state().total_pages()
    }

    pub fn slides_per_view(&self) -> usize {
        self.state().slides_per_view()
    }

    pub fn slide_count(&self) -> usize {
        self.state().slide_count()
    }

    /// Layout for the current state.
    pub fn layout(&self) -> SliderLayout {
        SliderLayout::compute(&self.state(), self.inner.config.card_pitch())
    }

    /// IDs of the dot elements currently in the document.
    pub fn dot_ids(&self) -> Vec<String> {
        self.inner
            .document
            .with(|doc| doc.query_class_within(&self.inner.config.dots_id, render::DOT_CLASS))
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Show `target`, clamped into `[0, total_pages - 1]`.
    pub fn go_to_page(&self, target: i64) {
        let mut state = self.inner.state_mut();
        if state.go_to(target) {
            debug!(
                "slider {}: page {} (requested {})",
                self.inner.config.track_id,
                state.current_page(),
                target
            );
        }
        self.inner.render(&state);
    }

    /// Move one page. No-op at the boundary in that direction.
    ///
    /// Returns whether the page changed.
    pub fn advance(&self, direction: Direction) -> bool {
        let mut state = self.inner.state_mut();
        let moved = state.advance(direction);
        if moved {
            self.inner.render(&state);
        }
        moved
    }

    pub fn next(&self) -> bool {
        self.advance(Direction::Forward)
    }

    pub fn prev(&self) -> bool {
        self.advance(Direction::Backward)
    }

    /// Re-evaluate the breakpoint for the current viewport width.
    ///
    /// Crossing a breakpoint rebuilds the dots and returns to page 0.
    /// Returns whether the page size changed.
    pub fn on_viewport_resize(&self) -> bool {
        let width = self.inner.document.viewport().width;
        let per_view = self.inner.config.slides_per_view(width);

        let mut state = self.inner.state_mut();
        if !state.set_slides_per_view(per_view) {
            return false;
        }
        debug!(
            "slider {}: width {} -> {} per view, {} pages",
            self.inner.config.track_id,
            width,
            per_view,
            state.total_pages()
        );
        self.inner.rebuild(&state);
        true
    }

    // -------------------------------------------------------------------------
    // Autoplay
    // -------------------------------------------------------------------------

    /// Begin advancing one page per interval, replacing any running timer.
    ///
    /// While the pointer hovers the track the request is only recorded
    /// and the timer starts on leave. Returns whether a timer is now
    /// running: false while hovering, outside an async runtime, or for a
    /// zero interval.
    pub fn start_autoplay(&self) -> bool {
        let hovering = {
            let mut state = self.inner.state_mut();
            state.set_autoplay_wanted(true);
            !state.autoplay_active()
        };
        if hovering {
            debug!(
                "slider {}: autoplay deferred until pointer leaves",
                self.inner.config.track_id
            );
            self.inner.autoplay().stop();
            return false;
        }
        self.schedule_autoplay()
    }

    fn schedule_autoplay(&self) -> bool {
        let weak = Arc::downgrade(&self.inner);
        self.inner
            .autoplay()
            .start_repeating(self.inner.config.interval(), move || match weak.upgrade() {
                Some(inner) => {
                    inner.autoplay_tick();
                    ControlFlow::Continue(())
                }
                None => ControlFlow::Break(()),
            })
    }

    /// Cancel autoplay, including a start deferred by hover. Safe to call
    /// when it isn't running.
    ///
    /// Returns whether a running timer was cancelled.
    pub fn stop_autoplay(&self) -> bool {
        self.inner.state_mut().set_autoplay_wanted(false);
        self.inner.autoplay().stop()
    }

    pub fn is_autoplay_running(&self) -> bool {
        self.inner.autoplay().is_running()
    }

    /// Whether autoplay is allowed to run (the pointer isn't hovering).
    pub fn autoplay_active(&self) -> bool {
        self.state().autoplay_active()
    }

    /// Whether autoplay was requested and not stopped since, hovering or
    /// not.
    pub fn autoplay_wanted(&self) -> bool {
        self.state().autoplay_wanted()
    }

    /// Pointer entered the track: pause.
    pub fn on_pointer_enter(&self) {
        self.inner.state_mut().set_autoplay_active(false);
        self.inner.autoplay().stop();
    }

    /// Pointer left the track: resume if autoplay is wanted.
    pub fn on_pointer_leave(&self) {
        let resume = {
            let mut state = self.inner.state_mut();
            state.set_autoplay_active(true);
            state.should_autoplay()
        };
        if resume {
            self.schedule_autoplay();
        }
    }
}

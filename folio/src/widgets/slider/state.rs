//! Slider pagination state.
//!
//! Pure data: no document access, no timers.

/// Navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Pagination state for one slider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderState {
    /// Slide element IDs, fixed at initialization.
    slides: Vec<String>,
    slides_per_view: usize,
    current_page: usize,
    /// False while the pointer hovers the slider.
    autoplay_active: bool,
    /// Autoplay was requested and not stopped since.
    autoplay_wanted: bool,
}

impl SliderState {
    pub fn new(slides: Vec<String>, slides_per_view: usize) -> Self {
        Self {
            slides,
            slides_per_view: slides_per_view.max(1),
            current_page: 0,
            autoplay_active: true,
            autoplay_wanted: false,
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn slides(&self) -> &[String] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides_per_view(&self) -> usize {
        self.slides_per_view
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// `ceil(slides / per_view)`, never less than one page.
    pub fn total_pages(&self) -> usize {
        total_pages(self.slides.len(), self.slides_per_view)
    }

    pub fn last_page(&self) -> usize {
        self.total_pages() - 1
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page == 0
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page == self.last_page()
    }

    pub fn autoplay_active(&self) -> bool {
        self.autoplay_active
    }

    pub fn autoplay_wanted(&self) -> bool {
        self.autoplay_wanted
    }

    /// Autoplay is wanted and the pointer is not hovering.
    pub fn should_autoplay(&self) -> bool {
        self.autoplay_wanted && self.autoplay_active
    }

    /// Slide IDs visible on the current page.
    pub fn visible_slides(&self) -> &[String] {
        let start = (self.current_page * self.slides_per_view).min(self.slides.len());
        let end = (start + self.slides_per_view).min(self.slides.len());
        &self.slides[start..end]
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Jump to `target`, clamped into range. Returns whether the page changed.
    pub fn go_to(&mut self, target: i64) -> bool {
        let page = target.clamp(0, self.last_page() as i64) as usize;
        let changed = page != self.current_page;
        self.current_page = page;
        changed
    }

    /// Move one page, stopping at the boundaries. Returns whether it moved.
    pub fn advance(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Forward if !self.is_last_page() => {
                self.current_page += 1;
                true
            }
            Direction::Backward if !self.is_first_page() => {
                self.current_page -= 1;
                true
            }
            _ => false,
        }
    }

    /// Move forward one page, wrapping from the last page to the first.
    pub fn advance_wrapping(&mut self) {
        if self.is_last_page() {
            self.current_page = 0;
        } else {
            self.current_page += 1;
        }
    }

    /// Change page size. Resets to the first page when it actually changes.
    ///
    /// Returns whether the page size changed.
    pub fn set_slides_per_view(&mut self, slides_per_view: usize) -> bool {
        let slides_per_view = slides_per_view.max(1);
        if slides_per_view == self.slides_per_view {
            return false;
        }
        self.slides_per_view = slides_per_view;
        self.current_page = 0;
        true
    }

    pub fn set_autoplay_active(&mut self, active: bool) {
        self.autoplay_active = active;
    }

    pub fn set_autoplay_wanted(&mut self, wanted: bool) {
        self.autoplay_wanted = wanted;
    }
}

/// Number of pages for `slides` at `per_view` slides per page.
pub fn total_pages(slides: usize, per_view: usize) -> usize {
    slides.div_ceil(per_view.max(1)).max(1)
}

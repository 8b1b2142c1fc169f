/// High-level page events with element targeting.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Primary-button click on an element.
    Click { target: String },
    /// Pointer moved onto an element's region.
    PointerEnter { target: String },
    /// Pointer left an element's region.
    PointerLeave { target: String },
    /// Viewport resized.
    Resize { width: f32, height: f32 },
    /// Document scrolled to the given vertical offset.
    Scroll { y: f32 },
    /// Text input value changed.
    Input { target: String, value: String },
    /// Form submitted.
    Submit { target: String },
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Event::Click {
            target: target.into(),
        }
    }

    pub fn pointer_enter(target: impl Into<String>) -> Self {
        Event::PointerEnter {
            target: target.into(),
        }
    }

    pub fn pointer_leave(target: impl Into<String>) -> Self {
        Event::PointerLeave {
            target: target.into(),
        }
    }

    pub fn input(target: impl Into<String>, value: impl Into<String>) -> Self {
        Event::Input {
            target: target.into(),
            value: value.into(),
        }
    }

    pub fn submit(target: impl Into<String>) -> Self {
        Event::Submit {
            target: target.into(),
        }
    }

    /// The element this event is aimed at, if any.
    ///
    /// Resize and scroll are window-level and have no target.
    pub fn target(&self) -> Option<&str> {
        match self {
            Event::Click { target }
            | Event::PointerEnter { target }
            | Event::PointerLeave { target }
            | Event::Input { target, .. }
            | Event::Submit { target } => Some(target),
            Event::Resize { .. } | Event::Scroll { .. } => None,
        }
    }

    /// Window-level events are broadcast to every listener.
    pub fn is_broadcast(&self) -> bool {
        self.target().is_none()
    }
}

//! Pointer gestures for the project gallery.
//!
//! DOM touch and mouse events are converted to [`PointerInput`] at the
//! component boundary, so everything here only deals with x coordinates.

use crate::gallery::Direction;

/// Horizontal travel a gesture must exceed to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;
/// Travel past this marks the gesture as a drag, which suppresses the click.
pub const DRAG_THRESHOLD_PX: f64 = 5.0;
/// Viewports at or below this width are treated as mobile.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Touch { x: f64 },
    Mouse { x: f64 },
}

impl PointerInput {
    pub fn x(self) -> f64 {
        match self {
            PointerInput::Touch { x } | PointerInput::Mouse { x } => x,
        }
    }
}

/// Swiping left (finger travels toward smaller x) shows the next image.
pub fn classify_swipe(start_x: f64, end_x: f64) -> Option<Direction> {
    let travel = start_x - end_x;
    if travel > SWIPE_THRESHOLD_PX {
        Some(Direction::Next)
    } else if travel < -SWIPE_THRESHOLD_PX {
        Some(Direction::Previous)
    } else {
        None
    }
}

#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start_x: Option<f64>,
    last_x: Option<f64>,
    dragging: bool,
}

impl SwipeTracker {
    pub fn begin(&mut self, input: PointerInput) {
        self.start_x = Some(input.x());
        self.last_x = Some(input.x());
        self.dragging = false;
    }

    pub fn track(&mut self, input: PointerInput) {
        let Some(start) = self.start_x else {
            return;
        };
        self.last_x = Some(input.x());
        if (input.x() - start).abs() > DRAG_THRESHOLD_PX {
            self.dragging = true;
        }
    }

    /// Ends the gesture. Without an end sample the last tracked position is used.
    pub fn finish(&mut self, input: Option<PointerInput>) -> Option<Direction> {
        let start = self.start_x.take()?;
        let end = input.map(PointerInput::x).or(self.last_x.take())?;
        if (end - start).abs() > DRAG_THRESHOLD_PX {
            self.dragging = true;
        }
        classify_swipe(start, end)
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
        self.last_x = None;
    }

    pub fn is_active(&self) -> bool {
        self.start_x.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

pub fn is_mobile_width(width: f64) -> bool {
    width <= f64::from(MOBILE_BREAKPOINT_PX)
}

pub fn mobile_media_query() -> String {
    format!("(max-width: {MOBILE_BREAKPOINT_PX}px)")
}

/// The modal gallery is desktop only and never opens at the end of a drag.
pub fn allows_modal(is_mobile: bool, dragging: bool) -> bool {
    !is_mobile && !dragging
}

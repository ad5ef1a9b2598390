//! Pointer input tracking for mouse and touch.
//!
//! Both sources feed the same state machine; drag math never distinguishes
//! them. The host is expected to call [`InputState::clear`] on window blur
//! or visibility loss so no gesture sticks when the release event is lost.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Where a pointer event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// Unified pointer event for mouse and touch handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point, source: PointerSource },
    Move { position: Point },
    Up { position: Point },
}

/// Double-click detection constants.
const DOUBLE_CLICK_TIME_MS: u128 = 500;
const DOUBLE_CLICK_DISTANCE: f64 = 5.0;

/// Tracks the current pointer state across frames.
#[derive(Debug, Clone)]
pub struct InputState {
    /// Current pointer position in overlay coordinates.
    pub position: Point,
    /// Previous pointer position for delta calculations.
    previous_position: Point,
    /// Active press, if any.
    down_source: Option<PointerSource>,
    /// Start position of the current press.
    pub drag_start: Option<Point>,
    /// Last press time for double-click detection.
    last_click_time: Option<Instant>,
    /// Last press position for double-click detection.
    last_click_position: Option<Point>,
    /// Whether the latest press completed a double-click.
    double_click_detected: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            position: Point::ZERO,
            previous_position: Point::ZERO,
            down_source: None,
            drag_start: None,
            last_click_time: None,
            last_click_position: None,
            double_click_detected: false,
        }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call at the start of each frame to reset per-frame flags.
    pub fn begin_frame(&mut self) {
        self.previous_position = self.position;
        self.double_click_detected = false;
    }

    /// Process a pointer event.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position, source } => {
                self.position = position;
                self.down_source = Some(source);
                self.drag_start = Some(position);
                self.detect_double_click(position);
            }
            PointerEvent::Move { position } => {
                self.position = position;
            }
            PointerEvent::Up { position } => {
                self.position = position;
                self.down_source = None;
                self.drag_start = None;
            }
        }
    }

    fn detect_double_click(&mut self, position: Point) {
        let now = Instant::now();
        if let (Some(last_time), Some(last_pos)) = (self.last_click_time, self.last_click_position)
        {
            let elapsed = now.duration_since(last_time).as_millis();
            let distance = ((position.x - last_pos.x).powi(2) + (position.y - last_pos.y).powi(2))
                .sqrt();
            if elapsed < DOUBLE_CLICK_TIME_MS && distance < DOUBLE_CLICK_DISTANCE {
                self.double_click_detected = true;
                // Reset so a triple-click is not a second double-click.
                self.last_click_time = None;
                self.last_click_position = None;
                return;
            }
        }
        self.last_click_time = Some(now);
        self.last_click_position = Some(position);
    }

    /// Drop all press state. For window blur or visibility loss.
    pub fn clear(&mut self) {
        self.down_source = None;
        self.drag_start = None;
        self.double_click_detected = false;
    }

    /// Whether a press is active, regardless of source.
    pub fn is_down(&self) -> bool {
        self.down_source.is_some()
    }

    /// Source of the active press, if any.
    pub fn down_source(&self) -> Option<PointerSource> {
        self.down_source
    }

    /// Whether the latest press completed a double-click or double-tap.
    pub fn is_double_click(&self) -> bool {
        self.double_click_detected
    }

    /// Pointer movement since the last frame.
    pub fn pointer_delta(&self) -> Vec2 {
        Vec2::new(
            self.position.x - self.previous_position.x,
            self.position.y - self.previous_position.y,
        )
    }

    /// Delta from the press start, if a press is active.
    pub fn drag_delta(&self) -> Option<Vec2> {
        self.drag_start.map(|start| {
            Vec2::new(self.position.x - start.x, self.position.y - start.y)
        })
    }
}

//! Pointer-driven visual states for interactive controls
//!
//! Presentation only: nothing here feeds back into form state.

use crate::constants;

/// Visual state of a control under the pointer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PointerState {
    #[default]
    Resting,
    Hovered,
    Pressed,
}

/// Pointer events a control reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
    Down,
    Up,
    Cancel,
}

impl PointerState {
    pub fn next(self, event: PointerEvent) -> Self {
        match (self, event) {
            (_, PointerEvent::Leave | PointerEvent::Cancel) => PointerState::Resting,
            (_, PointerEvent::Down) => PointerState::Pressed,
            (PointerState::Resting, PointerEvent::Enter) => PointerState::Hovered,
            (PointerState::Pressed, PointerEvent::Up) => PointerState::Hovered,
            (state, _) => state,
        }
    }
}

/// Scale targets for the hover and press states; resting is always 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffordanceStyle {
    pub hover_scale: f64,
    pub press_scale: f64,
}

impl AffordanceStyle {
    pub const STYLE_PILL: Self = Self {
        hover_scale: constants::STYLE_HOVER_SCALE,
        press_scale: constants::STYLE_PRESS_SCALE,
    };

    pub const SUBMIT_CIRCLE: Self = Self {
        hover_scale: constants::SUBMIT_HOVER_SCALE,
        press_scale: constants::SUBMIT_PRESS_SCALE,
    };

    pub fn scale(&self, state: PointerState) -> f64 {
        match state {
            PointerState::Resting => 1.0,
            PointerState::Hovered => self.hover_scale,
            PointerState::Pressed => self.press_scale,
        }
    }

    /// CSS transform for a state
    pub fn transform(&self, state: PointerState) -> String {
        format!("scale({})", self.scale(state))
    }
}

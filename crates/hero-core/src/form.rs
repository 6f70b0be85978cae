//! Prompt form interaction state
//!
//! One `PromptFormState` belongs to one mounted form. It changes only through
//! typing and style selection; submitting takes a snapshot and leaves it alone.

use serde::Serialize;

use crate::descriptor::{HeroButton, default_buttons};

/// Local state of a single prompt form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptFormState {
    pub prompt_text: String,
    pub selected_button_index: Option<usize>,
}

/// Payload emitted when the submit control is activated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptSubmission {
    pub prompt_text: String,
    pub selected_button_index: Option<usize>,
}

impl PromptFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the prompt text. Selection is untouched.
    pub fn set_prompt_text(&mut self, text: impl Into<String>) {
        self.prompt_text = text.into();
    }

    /// Select the button at `index` if it is a style button.
    ///
    /// Returns whether the selection changed.
    pub fn select_style(&mut self, index: usize, buttons: &[HeroButton]) -> bool {
        let is_style = buttons.get(index).is_some_and(HeroButton::is_style);
        if !is_style || self.selected_button_index == Some(index) {
            return false;
        }
        self.selected_button_index = Some(index);
        true
    }

    /// Snapshot for the submit event. No validation, no clearing.
    pub fn submit(&self) -> PromptSubmission {
        PromptSubmission {
            prompt_text: self.prompt_text.clone(),
            selected_button_index: self.selected_button_index,
        }
    }
}

/// The two controls a form renders from its resolved button list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormControls {
    /// Pill with label, always slot 0
    pub style: HeroButton,
    /// Icon-only circle, always slot 1
    pub submit: HeroButton,
}

impl FormControls {
    /// Slot index of the style control
    pub const STYLE_INDEX: usize = 0;

    /// Pick the rendered controls. Entries past the second are not rendered.
    pub fn from_buttons(buttons: &[HeroButton]) -> Self {
        match buttons {
            [style, submit, ..] => Self {
                style: style.clone(),
                submit: submit.clone(),
            },
            // Resolved lists always have two entries
            _ => Self::from_buttons(&default_buttons()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ButtonKind;

    #[test]
    fn test_new_state_is_empty() {
        let state = PromptFormState::new();
        assert_eq!(state.prompt_text, "");
        assert_eq!(state.selected_button_index, None);
    }

    #[test]
    fn test_typing_updates_text_only() {
        let mut state = PromptFormState::new();
        state.set_prompt_text("a sunset over mountains");
        assert_eq!(state.prompt_text, "a sunset over mountains");
        assert_eq!(state.selected_button_index, None);

        state.selected_button_index = Some(0);
        state.set_prompt_text("a sunrise");
        assert_eq!(state.selected_button_index, Some(0));
    }

    #[test]
    fn test_submit_snapshot_keeps_text() {
        let mut state = PromptFormState::new();
        state.set_prompt_text("cat");

        let submission = state.submit();
        assert_eq!(
            submission,
            PromptSubmission {
                prompt_text: "cat".to_string(),
                selected_button_index: None,
            }
        );
        assert_eq!(state.prompt_text, "cat");
    }

    #[test]
    fn test_empty_prompt_still_submits() {
        let submission = PromptFormState::new().submit();
        assert_eq!(submission.prompt_text, "");
    }

    #[test]
    fn test_select_style_only_for_style_buttons() {
        let buttons = default_buttons();
        let mut state = PromptFormState::new();

        assert!(!state.select_style(1, &buttons));
        assert_eq!(state.selected_button_index, None);

        assert!(state.select_style(0, &buttons));
        assert_eq!(state.selected_button_index, Some(0));

        // Re-selecting is a no-op, not a toggle
        assert!(!state.select_style(0, &buttons));
        assert_eq!(state.selected_button_index, Some(0));

        assert!(!state.select_style(7, &buttons));
        assert_eq!(state.selected_button_index, Some(0));
    }

    #[test]
    fn test_submit_carries_selection() {
        let mut state = PromptFormState::new();
        state.set_prompt_text("dog");
        state.select_style(0, &default_buttons());
        assert_eq!(state.submit().selected_button_index, Some(0));
    }

    #[test]
    fn test_form_controls_use_first_two_slots() {
        let buttons = vec![
            HeroButton::new("Anime", ButtonKind::Style, "Palette"),
            HeroButton::new("Go", ButtonKind::Submit, "Send"),
            HeroButton::new("Noir", ButtonKind::Style, "Moon"),
        ];
        let controls = FormControls::from_buttons(&buttons);
        assert_eq!(controls.style.title, "Anime");
        assert_eq!(controls.submit.title, "Go");
    }

    #[test]
    fn test_form_controls_fall_back_on_short_input() {
        let controls = FormControls::from_buttons(&[]);
        assert_eq!(controls.style.title, "No style");
        assert_eq!(controls.submit.icon, "Send");
    }
}

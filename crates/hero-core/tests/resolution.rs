//! End-to-end resolution tests: content in, render model out

use hero_core::constants::{DEFAULT_DESCRIPTION, DEFAULT_TITLE};
use hero_core::*;
use pretty_assertions::assert_eq;

fn json(source: &str) -> SectionDescriptor {
    parse_descriptor(source, ContentFormat::Json).unwrap()
}

/// A single supplied button is discarded, not merged
#[test]
fn test_single_button_and_empty_title() {
    let section = json(r#"{"disabled": false, "title": "", "buttons": [{"title": "X", "type": "style", "icon": "A"}]}"#);
    let model = resolve(Some(&section)).unwrap();

    assert_eq!(model.title, DEFAULT_TITLE);
    assert_eq!(model.description, DEFAULT_DESCRIPTION);
    assert_eq!(model.buttons, default_buttons());
    assert!(model.buttons.iter().all(|b| b.title != "X"));
}

#[test]
fn test_disabled_section_from_toml() {
    let section = parse_descriptor("disabled = true\ntitle = \"Hidden\"", ContentFormat::Toml).unwrap();
    assert_eq!(resolve(Some(&section)), None);
}

#[test]
fn test_supplied_buttons_kept_in_order() {
    let section = json(
        r#"{"buttons": [
            {"title": "Photo", "type": "style", "icon": "Camera"},
            {"title": "Go", "type": "submit", "icon": "Send"},
            {"title": "Sketch", "type": "style", "icon": "Pencil"}
        ]}"#,
    );
    let model = resolve(Some(&section)).unwrap();

    let titles: Vec<&str> = model.buttons.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Photo", "Go", "Sketch"]);

    // Only the first two become controls
    let controls = FormControls::from_buttons(&model.buttons);
    assert_eq!(controls.style.title, "Photo");
    assert_eq!(controls.submit.kind, ButtonKind::Submit);
}

#[test]
fn test_title_and_description_fall_back_independently() {
    let only_title = resolve(Some(&json(r#"{"title": "Dream big"}"#))).unwrap();
    assert_eq!(only_title.title, "Dream big");
    assert_eq!(only_title.description, DEFAULT_DESCRIPTION);

    let only_description = resolve(Some(&json(r#"{"description": "Words to pictures"}"#))).unwrap();
    assert_eq!(only_description.title, DEFAULT_TITLE);
    assert_eq!(only_description.description, "Words to pictures");
}

#[test]
fn test_floating_images_keep_order() {
    let section = json(
        r#"{"floating_images": [
            {"src": "/a.png", "class_name": "left-4 top-10", "duration": 6, "y_offset": 12, "delay": 0.5},
            {"src": "/b.png", "class_name": "right-8 top-24"}
        ]}"#,
    );
    let model = resolve(Some(&section)).unwrap();
    assert_eq!(model.floating_images.len(), 2);
    assert_eq!(model.floating_images[0].src, "/a.png");
    assert_eq!(model.floating_images[0].duration, Some(6.0));
    assert_eq!(model.floating_images[1].delay, None);
}

#[test]
fn test_interaction_scenario() {
    let model = resolve(Some(&SectionDescriptor::default())).unwrap();
    let mut state = PromptFormState::new();
    assert_eq!(state.prompt_text, "");

    state.set_prompt_text("a sunset over mountains");
    assert_eq!(state.prompt_text, "a sunset over mountains");
    assert_eq!(state.selected_button_index, None);

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

    assert!(state.select_style(FormControls::STYLE_INDEX, &model.buttons));
    assert_eq!(state.submit().selected_button_index, Some(0));
}

#[test]
fn test_two_forms_do_not_share_state() {
    let mut first = PromptFormState::new();
    let second = PromptFormState::new();
    first.set_prompt_text("only here");
    assert_eq!(second.prompt_text, "");
}

#[test]
fn test_resolved_model_serializes() {
    let model = resolve(Some(&SectionDescriptor::default())).unwrap();
    let value = serde_json::to_value(&model).unwrap();
    assert_eq!(value["buttons"][1]["type"], "submit");
    assert_eq!(value["form_hints"]["trust_text"], serde_json::Value::Null);
}

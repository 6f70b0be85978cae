//! Descriptor to render model resolution
//!
//! Each field has its own small resolver so the fallback rules can be tested
//! without rendering anything. `resolve` just composes them.

use serde::Serialize;

use crate::constants;
use crate::descriptor::{Announcement, FloatingImage, HeroButton, HeroForm, SectionDescriptor, default_buttons};

/// Fully-defaulted, render-ready hero content
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedHeroModel {
    pub title: String,
    pub description: String,
    pub background_ref: String,
    pub background_alt: String,
    /// Always at least two entries
    pub buttons: Vec<HeroButton>,
    pub form_hints: FormHints,
    pub floating_images: Vec<FloatingImage>,
    /// Present only when the banner is switched on
    pub announcement: Option<Announcement>,
}

/// Prompt form hints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormHints {
    pub placeholder: String,
    pub trust_text: Option<String>,
}

/// Resolve a descriptor into a render model.
///
/// Returns `None` when there is nothing to render: no descriptor, or a disabled one.
pub fn resolve(descriptor: Option<&SectionDescriptor>) -> Option<ResolvedHeroModel> {
    let section = descriptor.filter(|d| !d.is_disabled())?;

    Some(ResolvedHeroModel {
        title: resolve_title(section.title.as_deref()),
        description: resolve_description(section.description.as_deref()),
        background_ref: resolve_background(section.background_ref.as_deref()),
        background_alt: resolve_background_alt(section.title.as_deref()),
        buttons: resolve_buttons(section.buttons.as_deref()),
        form_hints: resolve_form_hints(section.form.as_ref()),
        floating_images: section.floating_images.clone(),
        announcement: resolve_announcement(section.announcement.as_ref(), section.show_announcement),
    })
}

/// Supplied text unless absent or empty
fn text_or(supplied: Option<&str>, fallback: &str) -> String {
    match supplied {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => fallback.to_string(),
    }
}

pub fn resolve_title(title: Option<&str>) -> String {
    text_or(title, constants::DEFAULT_TITLE)
}

pub fn resolve_description(description: Option<&str>) -> String {
    text_or(description, constants::DEFAULT_DESCRIPTION)
}

pub fn resolve_background(background_ref: Option<&str>) -> String {
    text_or(background_ref, constants::DEFAULT_BACKGROUND)
}

/// Alt text follows the raw title, not the defaulted one
pub fn resolve_background_alt(title: Option<&str>) -> String {
    text_or(title, constants::DEFAULT_BACKGROUND_ALT)
}

pub fn resolve_placeholder(placeholder: Option<&str>) -> String {
    text_or(placeholder, constants::DEFAULT_PLACEHOLDER)
}

/// The supplied list when it has at least two buttons, otherwise the default pair.
///
/// All or nothing: supplied and default buttons are never mixed.
pub fn resolve_buttons(supplied: Option<&[HeroButton]>) -> Vec<HeroButton> {
    match supplied {
        Some(buttons) if buttons.len() >= constants::MIN_SUPPLIED_BUTTONS => buttons.to_vec(),
        _ => default_buttons(),
    }
}

pub fn resolve_form_hints(form: Option<&HeroForm>) -> FormHints {
    FormHints {
        placeholder: resolve_placeholder(form.and_then(|f| f.placeholder.as_deref())),
        trust_text: form.and_then(|f| f.trust_text.clone()).filter(|t| !t.is_empty()),
    }
}

pub fn resolve_announcement(announcement: Option<&Announcement>, show: Option<bool>) -> Option<Announcement> {
    if show.unwrap_or(false) { announcement.cloned() } else { None }
}

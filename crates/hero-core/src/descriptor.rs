//! Section descriptor as supplied by the content source
//!
//! Every field is optional. Absence is never an error; the resolver fills it in.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Hero section content configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionDescriptor {
    /// Opaque identifier, not used for rendering
    pub name: Option<String>,
    /// Suppresses the whole section when true
    pub disabled: Option<bool>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Handle or URL of the background asset
    #[serde(alias = "background")]
    pub background_ref: Option<String>,
    /// Decorative overlays, in render order
    pub floating_images: Vec<FloatingImage>,
    pub form: Option<HeroForm>,
    pub buttons: Option<Vec<HeroButton>>,
    pub announcement: Option<Announcement>,
    /// Banner visibility, independent of `disabled`
    pub show_announcement: Option<bool>,
}

impl SectionDescriptor {
    pub fn is_disabled(&self) -> bool {
        self.disabled.unwrap_or(false)
    }
}

/// Secondary image floating over the background
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FloatingImage {
    pub src: String,
    /// Placement/style classes
    #[serde(default, alias = "className")]
    pub class_name: String,
    /// Animation period in seconds
    #[serde(default)]
    pub duration: Option<f64>,
    /// Vertical float distance in pixels
    #[serde(default, alias = "yOffset")]
    pub y_offset: Option<f64>,
    /// Animation start delay in seconds
    #[serde(default)]
    pub delay: Option<f64>,
    #[serde(default)]
    pub alt: Option<String>,
}

/// Hints forwarded to the prompt form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroForm {
    pub placeholder: Option<String>,
    #[serde(alias = "trustText")]
    pub trust_text: Option<String>,
}

/// Announcement banner content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Announcement {
    pub title: Option<String>,
    pub description: Option<String>,
    pub label: Option<String>,
    pub url: Option<String>,
    pub target: Option<String>,
}

/// One of the prompt form's action buttons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroButton {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ButtonKind,
    /// Symbolic icon name, resolved by the icon renderer
    pub icon: String,
}

impl HeroButton {
    pub fn new(title: impl Into<String>, kind: ButtonKind, icon: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind,
            icon: icon.into(),
        }
    }

    pub fn is_style(&self) -> bool {
        self.kind == ButtonKind::Style
    }
}

/// Button role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    /// Selects a generation style; never submits
    Style,
    /// Hands the prompt off downstream
    Submit,
}

impl ButtonKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonKind::Style => "style",
            ButtonKind::Submit => "submit",
        }
    }
}

impl std::fmt::Display for ButtonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The fixed two-button list used whenever the supplied one is too short
pub fn default_buttons() -> Vec<HeroButton> {
    vec![
        HeroButton::new(constants::DEFAULT_STYLE_TITLE, ButtonKind::Style, constants::DEFAULT_STYLE_ICON),
        HeroButton::new(constants::DEFAULT_SUBMIT_TITLE, ButtonKind::Submit, constants::DEFAULT_SUBMIT_ICON),
    ]
}

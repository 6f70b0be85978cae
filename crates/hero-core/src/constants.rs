//! Built-in copy and assets for the hero section
//!
//! Every optional descriptor field that renders something has its fallback here.

// =============================================================================
// Text
// =============================================================================

/// Heading shown when the descriptor has no title
pub const DEFAULT_TITLE: &str = "AI Image Generator";

/// Supporting paragraph shown when the descriptor has no description
pub const DEFAULT_DESCRIPTION: &str = "Try the ultimate Image Generator. Access the most advanced AI models and create AI images with just a prompt or an image reference.";

/// Textarea placeholder when the form hints omit one
pub const DEFAULT_PLACEHOLDER: &str = "Describe what you want to see";

// =============================================================================
// Background
// =============================================================================

/// Cover image used when the descriptor has no background reference
pub const DEFAULT_BACKGROUND: &str =
    "https://cdn-front.freepik.com/images/ai/image-generator/cover/image-generator-header.webp";

/// Alt text for the background when the section has no title of its own
pub const DEFAULT_BACKGROUND_ALT: &str = "Abstract AI creative background";

// =============================================================================
// Buttons
// =============================================================================

/// A supplied button list shorter than this is replaced wholesale
pub const MIN_SUPPLIED_BUTTONS: usize = 2;

/// Label of the default style button
pub const DEFAULT_STYLE_TITLE: &str = "No style";

/// Icon of the default style button
pub const DEFAULT_STYLE_ICON: &str = "Sparkles";

/// Label of the default submit button (used as its accessible name)
pub const DEFAULT_SUBMIT_TITLE: &str = "Generate";

/// Icon of the default submit button
pub const DEFAULT_SUBMIT_ICON: &str = "Send";

// =============================================================================
// Pointer affordance magnitudes
// =============================================================================

/// Style pill grows 5% on hover
pub const STYLE_HOVER_SCALE: f64 = 1.05;

/// Style pill shrinks 5% while pressed
pub const STYLE_PRESS_SCALE: f64 = 0.95;

/// Submit circle grows 10% on hover
pub const SUBMIT_HOVER_SCALE: f64 = 1.1;

/// Submit circle shrinks 10% while pressed
pub const SUBMIT_PRESS_SCALE: f64 = 0.9;

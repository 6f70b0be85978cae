//! Hero section resolution model
//!
//! Turns an optional, partially-filled section descriptor into a render-ready
//! model and holds the prompt form's local interaction state. No rendering
//! happens here; see the `hero-web` crate for the views.

pub mod affordance;
pub mod constants;
pub mod content;
pub mod descriptor;
pub mod form;
pub mod resolve;

pub use affordance::{AffordanceStyle, PointerEvent, PointerState};
pub use content::{ContentError, ContentFormat, load_descriptor, parse_descriptor};
pub use descriptor::{Announcement, ButtonKind, FloatingImage, HeroButton, HeroForm, SectionDescriptor, default_buttons};
pub use form::{FormControls, PromptFormState, PromptSubmission};
pub use resolve::{FormHints, ResolvedHeroModel, resolve, resolve_buttons, resolve_placeholder};

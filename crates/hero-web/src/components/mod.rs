mod affordance;
mod announcement;
mod cover_image;
mod hero;
mod icon;
mod prompt_form;

pub use affordance::Affordance;
pub use announcement::AnnouncementPill;
pub use cover_image::{CoverImage, ImageLayout};
pub use hero::Hero;
pub use icon::Icon;
pub use prompt_form::PromptForm;

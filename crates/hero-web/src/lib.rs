//! Hero landing section for the web, rendered client-side with Leptos

mod app;
mod components;
mod console;
mod pages;

pub use app::App;
pub use components::{Hero, PromptForm};

use hero_core::{ContentFormat, PromptSubmission, SectionDescriptor, parse_descriptor, resolve};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::Hero;
use crate::console;

/// Hero content bundled at build time
const HERO_CONTENT: &str = include_str!("../../content/hero.toml");

/// Parse the bundled content; a broken file hides the section instead of failing the page
fn load_hero_section() -> Option<SectionDescriptor> {
    match parse_descriptor(HERO_CONTENT, ContentFormat::Toml) {
        Ok(section) => Some(section),
        Err(e) => {
            console::error(&format!("Hero content error: {}", e));
            None
        }
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let section = load_hero_section();
    let page_title = resolve(section.as_ref()).map(|model| model.title).unwrap_or_default();

    // Generation backend is not wired up yet; submissions only reach the console
    let on_submit = Callback::new(|submission: PromptSubmission| {
        console::log(&format!(
            "Prompt submitted: {:?} (style: {:?})",
            submission.prompt_text, submission.selected_button_index
        ));
    });

    view! {
        <Title text=page_title />
        <main class="min-h-screen bg-[var(--background)]">
            <Hero section=Signal::stored(section) on_submit=on_submit />
        </main>
    }
}

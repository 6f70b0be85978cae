use hero_core::{FloatingImage, PromptSubmission, ResolvedHeroModel, SectionDescriptor, resolve};
use leptos::prelude::*;

use crate::components::{AnnouncementPill, CoverImage, ImageLayout, PromptForm};

/// Inline custom properties driving the float animation of one image
pub fn float_style(image: &FloatingImage) -> String {
    let mut vars = Vec::new();
    if let Some(duration) = image.duration {
        vars.push(format!("--float-duration: {}s", duration));
    }
    if let Some(y_offset) = image.y_offset {
        vars.push(format!("--float-y: {}px", y_offset));
    }
    if let Some(delay) = image.delay {
        vars.push(format!("--float-delay: {}s", delay));
    }
    vars.join("; ")
}

/// Hero section - full-bleed background, bottom-anchored copy and the prompt form
///
/// Renders nothing when the descriptor is absent or disabled. The form stays
/// mounted across descriptor changes for as long as the section is visible.
#[component]
pub fn Hero(
    #[prop(into)] section: Signal<Option<SectionDescriptor>>,
    #[prop(optional)] on_submit: Option<Callback<PromptSubmission>>,
) -> impl IntoView {
    let model = Memo::new(move |_| section.with(|s| resolve(s.as_ref())));
    let visible = Memo::new(move |_| model.with(Option::is_some));

    // Reads one field of the resolved model, empty while hidden
    let field = move |read: fn(&ResolvedHeroModel) -> String| {
        move || model.with(|m| m.as_ref().map(read).unwrap_or_default())
    };

    let title = field(|m| m.title.clone());
    let description = field(|m| m.description.clone());
    let background = Signal::derive(field(|m| m.background_ref.clone()));
    let background_alt = Signal::derive(field(|m| m.background_alt.clone()));

    let placeholder = Signal::derive(move || model.with(|m| m.as_ref().map(|m| m.form_hints.placeholder.clone())));
    let trust_text = Signal::derive(move || model.with(|m| m.as_ref().and_then(|m| m.form_hints.trust_text.clone())));
    let buttons = Signal::derive(move || model.with(|m| m.as_ref().map(|m| m.buttons.clone())));

    let announcement = move || {
        model
            .with(|m| m.as_ref().and_then(|m| m.announcement.clone()))
            .map(|announcement| view! { <AnnouncementPill announcement=announcement /> })
    };

    let floating_images = move || {
        model
            .with(|m| m.as_ref().map(|m| m.floating_images.clone()).unwrap_or_default())
            .into_iter()
            .map(|image| {
                let style = float_style(&image);
                view! {
                    <img
                        src=image.src
                        alt=image.alt.unwrap_or_default()
                        class=format!("hero-float absolute {}", image.class_name)
                        style=style
                        loading="lazy"
                    />
                }
            })
            .collect_view()
    };

    view! {
        <Show when=move || visible.get()>
            <section class="relative w-full overflow-hidden bg-[var(--background)]">
                <div class="relative mx-auto my-0 min-h-[780px] w-full max-w-[1576px] lg:rounded-xl">
                    // Background image and gradient
                    <div class="absolute inset-0 z-0">
                        <CoverImage src=background alt=background_alt layout=ImageLayout::CoverTop />
                        <div class="absolute inset-0 bg-gradient-to-t from-[var(--background)] via-black/60 to-black/40"></div>
                    </div>

                    // Decorative floating images
                    <div class="pointer-events-none absolute inset-0 z-0" aria-hidden="true">
                        {floating_images}
                    </div>

                    // Content, anchored to the bottom
                    <div class="relative z-10 flex h-[780px] flex-col justify-end gap-8 p-6 pb-16 sm:p-8 md:p-10 lg:p-11 xl:p-16">
                        <div class="flex flex-col items-start gap-8">
                            {announcement}

                            <div class="max-w-[676px] text-left text-white">
                                <h1 class="text-balance text-4xl font-bold leading-tight [text-shadow:0_2px_4px_rgba(0,0,0,0.5)] lg:text-5xl xl:text-6xl">
                                    {title}
                                </h1>
                                <p class="mt-4 max-w-2xl text-balance text-base font-normal leading-relaxed text-white/80 [text-shadow:0_1px_3px_rgba(0,0,0,0.4)]">
                                    {description}
                                </p>
                            </div>

                            <PromptForm
                                placeholder=placeholder
                                trust_text=trust_text
                                buttons=buttons
                                on_submit=on_submit
                            />
                        </div>
                    </div>
                </div>
            </section>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_style_all_fields() {
        let image = FloatingImage {
            src: "/a.png".to_string(),
            duration: Some(6.0),
            y_offset: Some(12.5),
            delay: Some(0.5),
            ..Default::default()
        };
        assert_eq!(float_style(&image), "--float-duration: 6s; --float-y: 12.5px; --float-delay: 0.5s");
    }

    #[test]
    fn test_float_style_without_timing() {
        let image = FloatingImage {
            src: "/b.png".to_string(),
            ..Default::default()
        };
        assert_eq!(float_style(&image), "");
    }
}

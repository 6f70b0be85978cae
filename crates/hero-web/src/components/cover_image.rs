use leptos::prelude::*;

/// How an image fills its box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageLayout {
    /// Fill and crop, keeping the top edge
    CoverTop,
    /// Fill and crop around the center
    Cover,
}

impl ImageLayout {
    pub fn class(&self) -> &'static str {
        match self {
            ImageLayout::CoverTop => "h-full w-full object-cover object-top",
            ImageLayout::Cover => "h-full w-full object-cover object-center",
        }
    }
}

/// Image renderer - full-size image in its positioned parent
/// Load failures are left to the browser's broken-image handling.
#[component]
pub fn CoverImage(
    #[prop(into)] src: Signal<String>,
    #[prop(into)] alt: Signal<String>,
    #[prop(default = ImageLayout::CoverTop)] layout: ImageLayout,
) -> impl IntoView {
    view! {
        <img
            src=move || src.get()
            alt=move || alt.get()
            class=layout.class()
            loading="eager"
            decoding="async"
        />
    }
}

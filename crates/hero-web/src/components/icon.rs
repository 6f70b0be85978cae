use leptos::prelude::*;

use crate::console;

/// Stroke paths (24x24 viewbox) for the icons content may name
const GLYPHS: &[(&str, &[&str])] = &[
    (
        "Sparkles",
        &[
            "M9.937 15.5A2 2 0 0 0 8.5 14.063l-6.135-1.582a.5.5 0 0 1 0-.962L8.5 9.936A2 2 0 0 0 9.937 8.5l1.582-6.135a.5.5 0 0 1 .963 0L14.063 8.5A2 2 0 0 0 15.5 9.937l6.135 1.581a.5.5 0 0 1 0 .964L15.5 14.063a2 2 0 0 0-1.437 1.437l-1.582 6.135a.5.5 0 0 1-.963 0z",
            "M20 3v4",
            "M22 5h-4",
            "M4 17v2",
            "M5 18H3",
        ],
    ),
    (
        "Send",
        &[
            "M14.536 21.686a.5.5 0 0 0 .937-.024l6.5-19a.496.496 0 0 0-.635-.635l-19 6.5a.5.5 0 0 0-.024.937l7.93 3.18a2 2 0 0 1 1.112 1.11z",
            "m21.854 2.147-10.94 10.939",
        ],
    ),
    (
        "Wand",
        &[
            "M15 4V2",
            "M15 16v-2",
            "M8 9h2",
            "M20 9h2",
            "M17.8 11.8 19 13",
            "M15 9h.01",
            "M17.8 6.2 19 5",
            "m3 21 9-9",
            "M12.2 6.2 11 5",
        ],
    ),
    ("ArrowRight", &["M5 12h14", "m12 5 7 7-7 7"]),
    ("ChevronRight", &["m9 18 6-6-6-6"]),
];

/// Look up the stroke paths for a symbolic icon name
pub fn glyph(name: &str) -> Option<&'static [&'static str]> {
    GLYPHS.iter().find(|(known, _)| *known == name).map(|(_, paths)| *paths)
}

/// Icon resolver - renders a named stroke icon
/// Unknown names render an empty box of the same size and log a warning.
#[component]
pub fn Icon(name: Signal<String>, #[prop(default = 16)] size: u32) -> impl IntoView {
    Effect::new(move |_| {
        name.with(|n| {
            if glyph(n).is_none() {
                console::warn(&format!("Unknown icon: {}", n));
            }
        });
    });

    let paths = move || {
        let paths = name.with(|n| glyph(n).unwrap_or(&[]));
        paths.iter().map(|d| view! { <path d=*d /> }).collect_view()
    };

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size.to_string()
            height=size.to_string()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths}
        </svg>
    }
}

use hero_core::Announcement;
use leptos::prelude::*;

use crate::components::Icon;

const PILL_CLASS: &str = "inline-flex items-center gap-2 rounded-full border border-white/15 bg-black/40 px-3 py-1 text-sm text-white/90 backdrop-blur-md";

/// `rel` to pair with a link target
pub fn link_rel(target: Option<&str>) -> Option<&'static str> {
    (target == Some("_blank")).then_some("noopener noreferrer")
}

/// Announcement banner above the heading
#[component]
pub fn AnnouncementPill(announcement: Announcement) -> impl IntoView {
    let Announcement {
        title,
        description,
        label,
        url,
        target,
    } = announcement;

    let body = view! {
        {label.map(|label| view! {
            <span class="rounded-full bg-white/15 px-2 py-0.5 text-xs font-semibold uppercase">{label}</span>
        })}
        {title.map(|title| view! { <span class="font-medium">{title}</span> })}
        {description.map(|description| view! { <span class="hidden text-white/60 sm:inline">{description}</span> })}
    };

    match url {
        Some(url) => {
            let rel = link_rel(target.as_deref());
            view! {
                <a href=url target=target rel=rel class=PILL_CLASS>
                    {body}
                    <Icon name=Signal::derive(|| "ChevronRight".to_string()) size=14 />
                </a>
            }
            .into_any()
        }
        None => view! { <div class=PILL_CLASS>{body}</div> }.into_any(),
    }
}

use hero_core::{
    AffordanceStyle, ButtonKind, FormControls, HeroButton, PromptFormState, PromptSubmission, resolve_buttons,
    resolve_placeholder,
};
use leptos::prelude::*;

use crate::components::{Affordance, Icon};
use crate::console;

/// Prompt form - textarea plus style and submit controls
///
/// Owns its `PromptFormState`; the state lives as long as this component is
/// mounted, so prop changes never reset what the user typed.
#[component]
pub fn PromptForm(
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional, into)] trust_text: MaybeProp<String>,
    /// Raw button list; lists shorter than two are replaced by the default pair
    #[prop(optional, into)]
    buttons: MaybeProp<Vec<HeroButton>>,
    /// Receives each activation of the submit control
    #[prop(optional_no_strip)]
    on_submit: Option<Callback<PromptSubmission>>,
) -> impl IntoView {
    let state = RwSignal::new(PromptFormState::new());

    let form_buttons = Memo::new(move |_| resolve_buttons(buttons.get().as_deref()));
    let controls = Memo::new(move |_| form_buttons.with(|b| FormControls::from_buttons(b)));

    let placeholder_text = move || resolve_placeholder(placeholder.get().as_deref());
    let trust_line = move || {
        trust_text
            .get()
            .filter(|t| !t.is_empty())
            .map(|t| view! { <p class="text-xs text-white/50">{t}</p> })
    };

    let select_style = Callback::new(move |_: ()| {
        form_buttons.with_untracked(|b| {
            state.update(|s| {
                s.select_style(FormControls::STYLE_INDEX, b);
            })
        });
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let submission = state.with_untracked(PromptFormState::submit);
        match on_submit {
            Some(on_submit) => on_submit.run(submission),
            None => console::log(&format!("Prompt submitted with no handler: {:?}", submission.prompt_text)),
        }
    };

    let style_title = move || controls.with(|c| c.style.title.clone());
    let style_icon = Signal::derive(move || controls.with(|c| c.style.icon.clone()));
    let submit_icon = Signal::derive(move || controls.with(|c| c.submit.icon.clone()));
    let submit_label = Signal::derive(move || controls.with(|c| c.submit.title.clone()));

    view! {
        <form
            class="relative z-10 flex w-full max-w-xl flex-col gap-7 rounded-3xl border border-white/10 bg-[var(--card,#1f1f1f)] p-5 backdrop-blur-xl"
            on:submit=submit
        >
            <textarea
                name="prompt"
                rows="2"
                class="block w-full resize-none border-none bg-transparent text-lg text-[var(--foreground)] outline-none placeholder:text-[var(--muted-foreground)] focus-visible:outline-none"
                placeholder=placeholder_text
                prop:value=move || state.with(|s| s.prompt_text.clone())
                on:input=move |ev| state.update(|s| s.set_prompt_text(event_target_value(&ev)))
            ></textarea>

            <div class="flex items-center justify-between">
                // Style pill: labeled, never submits
                <Affordance
                    button_type="button"
                    kind=ButtonKind::Style
                    affordance=AffordanceStyle::STYLE_PILL
                    class="flex items-center gap-2 rounded-full bg-zinc-800/80 px-5 py-2.5 text-sm font-semibold text-white/90 transition-colors hover:bg-zinc-700/80"
                    on_press=select_style
                >
                    <Icon name=style_icon />
                    <span class="truncate">{style_title}</span>
                </Affordance>

                // Submit circle: icon only
                <Affordance
                    button_type="submit"
                    kind=ButtonKind::Submit
                    affordance=AffordanceStyle::SUBMIT_CIRCLE
                    class="group flex h-10 w-10 min-w-10 items-center justify-center rounded-full bg-zinc-800/80 p-3 text-white transition-colors hover:bg-zinc-700/80"
                    aria_label=submit_label
                >
                    <Icon name=submit_icon />
                </Affordance>
            </div>

            {trust_line}
        </form>
    }
}

use hero_core::{AffordanceStyle, ButtonKind, PointerEvent, PointerState};
use leptos::prelude::*;

/// Interactive affordance - a button that scales with pointer hover and press
/// The pointer state is purely visual and never reaches the caller.
#[component]
pub fn Affordance(
    /// `type` attribute of the underlying button
    #[prop(into)]
    button_type: String,
    /// The control's role in the form, exposed as `data-type`
    kind: ButtonKind,
    affordance: AffordanceStyle,
    #[prop(into)] class: String,
    #[prop(optional)] aria_label: Option<Signal<String>>,
    #[prop(optional)] on_press: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let pointer = RwSignal::new(PointerState::default());
    let advance = move |event: PointerEvent| pointer.update(|state| *state = state.next(event));

    let style = move || {
        format!(
            "transform: {}; transition: transform 150ms ease-out",
            affordance.transform(pointer.get())
        )
    };

    view! {
        <button
            type=button_type
            data-type=kind.as_str()
            class=class
            aria-label=move || aria_label.map(|label| label.get())
            style=style
            on:pointerenter=move |_| advance(PointerEvent::Enter)
            on:pointerleave=move |_| advance(PointerEvent::Leave)
            on:pointerdown=move |_| advance(PointerEvent::Down)
            on:pointerup=move |_| advance(PointerEvent::Up)
            on:pointercancel=move |_| advance(PointerEvent::Cancel)
            on:click=move |_| {
                if let Some(on_press) = on_press {
                    on_press.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

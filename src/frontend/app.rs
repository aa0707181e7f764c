use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use postgen::app::render::LOADING_TEXT;
use postgen::app::{DraftSection, View, ViewState, render};
use postgen::config::Config;

use crate::api;

#[component]
pub fn App() -> impl IntoView {
    // Resolved once at build time, like the rest of the bundle
    let endpoint = Config::from_override(option_env!("POSTGEN_API_URL")).generate_url();

    let state = RwSignal::new(ViewState::new());
    let view_model = Memo::new(move |_| state.with(render));

    // Settlements arriving after unmount are dropped by the state itself
    on_cleanup(move || {
        let _ = state.try_update(|s| s.detach());
    });

    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        state.update(|s| s.set_prompt(value));
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(submission) = state.try_update(|s| s.submit()).flatten() else {
            return;
        };
        let endpoint = endpoint.clone();

        spawn_local(async move {
            let outcome = api::generate(&endpoint, &submission.prompt).await;
            if let Err(e) = &outcome {
                web_sys::console::error_1(&format!("Generate request failed: {}", e).into());
            }
            // None when the component is already disposed
            let _ = state.try_update(|s| s.settle(submission.id, outcome));
        });
    };

    view! {
        <div class="container mx-auto max-w-xl my-8 font-sans">
            <h1 class="text-3xl font-bold mb-4">{move || view_model.get().title}</h1>
            <form on:submit=on_submit class="mb-4">
                <input
                    type="text"
                    placeholder=move || view_model.get().placeholder
                    prop:value=move || view_model.get().prompt
                    on:input=on_input
                    class="w-full p-2 text-base"
                />
                <button
                    type="submit"
                    disabled=move || !view_model.get().submit.enabled
                    class="mt-2 px-4 py-2"
                >
                    {move || view_model.get().submit.label}
                </button>
            </form>

            {move || view_model.get().error.map(|error| view! { <p class="text-red-600">{error}</p> })}

            <Show when=move || view_model.get().loading>
                <p>{LOADING_TEXT}</p>
            </Show>

            {move || view_model.get().summary.map(|summary| view! {
                <div>
                    <h2 class="text-2xl font-semibold">"Summary"</h2>
                    <p class="whitespace-pre-wrap">{summary}</p>
                </div>
            })}

            <Drafts view_model=view_model/>
        </div>
    }
}

#[component]
fn Drafts(view_model: Memo<View>) -> impl IntoView {
    view! {
        <Show when=move || !view_model.get().drafts.is_empty()>
            <div>
                <h2 class="text-2xl font-semibold">"Drafts"</h2>
                <For
                    each=move || view_model.get().drafts
                    key=|draft: &DraftSection| draft.clone()
                    children=move |draft: DraftSection| {
                        view! {
                            <h3 class="text-xl font-medium">{draft.platform}</h3>
                            <p class="whitespace-pre-wrap">{draft.text}</p>
                        }
                    }
                />
            </div>
        </Show>
    }
}

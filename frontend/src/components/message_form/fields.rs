//! Inputs of the message editor. Rendering only; validation lives in
//! `msgdesk::forms`.

use super::form_state::FormState;
use crate::components::notice::FieldHint;
use leptos::prelude::*;
use msgdesk::forms::Field;

#[component]
pub fn MessageFields(
    state: FormState,
    /// Edit mode: the author is shown but cannot change.
    author_locked: bool,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label for="title" class="label">
                <span class="label-text">"Título"</span>
            </label>
            <input
                id="title"
                type="text"
                on:input=move |ev| state.title.set(event_target_value(&ev))
                prop:value=move || state.title.get()
                class="input input-bordered w-full"
            />
            <FieldHint errors=state.errors field=Field::Title />
        </div>

        <div class="form-control">
            <label for="body" class="label">
                <span class="label-text">"Corpo"</span>
            </label>
            <textarea
                id="body"
                rows="6"
                on:input=move |ev| state.body.set(event_target_value(&ev))
                prop:value=move || state.body.get()
                class="textarea textarea-bordered w-full"
            ></textarea>
            <FieldHint errors=state.errors field=Field::Body />
        </div>

        <div class="grid grid-cols-2 gap-4">
            <div class="form-control">
                <label for="author" class="label">
                    <span class="label-text">"Autor"</span>
                </label>
                <input
                    id="author"
                    type="text"
                    readonly=author_locked
                    disabled=author_locked
                    on:input=move |ev| state.author.set(event_target_value(&ev))
                    prop:value=move || state.author.get()
                    class="input input-bordered w-full"
                />
                <FieldHint errors=state.errors field=Field::Author />
            </div>
            <div class="form-control">
                <label for="status" class="label">
                    <span class="label-text">"Status"</span>
                </label>
                <input
                    id="status"
                    type="text"
                    placeholder="open"
                    on:input=move |ev| state.status.set(event_target_value(&ev))
                    prop:value=move || state.status.get()
                    class="input input-bordered w-full"
                />
                <FieldHint errors=state.errors field=Field::Status />
            </div>
        </div>
    }
}

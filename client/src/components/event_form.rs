//! "Create New Event" form.

use leptos::prelude::*;

use crate::state::event_draft::{self, EventDraft, EventField};

#[component]
pub fn CreateNewEvent() -> impl IntoView {
    let draft = RwSignal::new(EventDraft::default());
    let info = RwSignal::new(String::new());

    let on_input = move |ev: leptos::ev::Event| {
        let Some(name) = input_name(&ev) else {
            return;
        };
        let value = event_target_value(&ev);
        draft.update(|d| {
            d.set_by_name(&name, value);
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match event_draft::submit(&draft.get_untracked()) {
            Ok(()) => info.set(event_draft::SUBMITTED_MESSAGE.to_owned()),
            Err(missing) => info.set(event_draft::missing_fields_message(&missing)),
        }
    };

    let value_of = move |field: EventField| move || draft.with(|d| d.get(field).to_owned());

    view! {
        <div class="event-form-page">
            <form class="event-form" on:submit=on_submit>
                <h1>"Create New Event"</h1>
                <label class="event-form__label">
                    "Title"
                    <input
                        class="event-form__input"
                        type="text"
                        name=EventField::Title.name()
                        required=true
                        prop:value=value_of(EventField::Title)
                        on:input=on_input
                    />
                </label>
                <label class="event-form__label">
                    "Date"
                    <input
                        class="event-form__input"
                        type="date"
                        name=EventField::Date.name()
                        required=true
                        prop:value=value_of(EventField::Date)
                        on:input=on_input
                    />
                </label>
                <label class="event-form__label">
                    "Location"
                    <input
                        class="event-form__input"
                        type="text"
                        name=EventField::Location.name()
                        required=true
                        prop:value=value_of(EventField::Location)
                        on:input=on_input
                    />
                </label>
                <label class="event-form__label">
                    "Description"
                    <textarea
                        class="event-form__input event-form__textarea"
                        name=EventField::Description.name()
                        required=true
                        prop:value=value_of(EventField::Description)
                        on:input=on_input
                    ></textarea>
                </label>
                <button class="btn event-form__submit" type="submit">
                    "Create Event"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="event-form__message">{move || info.get()}</p>
                </Show>
            </form>
        </div>
    }
}

/// `name` attribute of the element that fired `ev`.
fn input_name(ev: &leptos::ev::Event) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let target = ev.target()?;
        let element = target.dyn_into::<web_sys::Element>().ok()?;
        element.get_attribute("name")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        None
    }
}

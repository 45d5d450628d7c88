use dioxus::prelude::*;
use store::PropertyRecord;

use crate::context::{use_api_client, use_catalog};
use crate::dialogs::BrowserDialogs;
use crate::forms::PropertyForm;
use crate::sync::{submit_create, SubmitOutcome};

/// `#add-property-form`. On a successful create the catalog is refreshed,
/// `on_created` fires (the parent closes the modal) and the fields are cleared.
/// On failure everything stays as typed.
#[component]
pub fn AddPropertyForm(on_created: EventHandler<()>) -> Element {
    let mut form = use_signal(PropertyForm::default);
    let client = use_api_client();
    let mut catalog = use_catalog();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = form.read().to_draft();
        let client = client.clone();
        spawn(async move {
            let outcome =
                submit_create::<PropertyRecord, _, _>(&client, &BrowserDialogs, &draft).await;
            if let SubmitOutcome::Created { refreshed } = outcome {
                if let Some(records) = refreshed {
                    catalog.write().replace(records);
                }
                on_created.call(());
                form.set(PropertyForm::default());
            }
        });
    };

    rsx! {
        form {
            id: "add-property-form",
            onsubmit: onsubmit,
            div {
                class: "form-group",
                label { r#for: "property-title", "Title" }
                input {
                    id: "property-title",
                    name: "title",
                    r#type: "text",
                    required: true,
                    value: "{form.read().title}",
                    oninput: move |evt: FormEvent| form.write().title = evt.value(),
                }
            }
            div {
                class: "form-group",
                label { r#for: "property-address", "Address" }
                input {
                    id: "property-address",
                    name: "address",
                    r#type: "text",
                    required: true,
                    value: "{form.read().address}",
                    oninput: move |evt: FormEvent| form.write().address = evt.value(),
                }
            }
            div {
                class: "form-group",
                label { r#for: "property-description", "Description" }
                textarea {
                    id: "property-description",
                    name: "description",
                    rows: "3",
                    value: "{form.read().description}",
                    oninput: move |evt: FormEvent| form.write().description = evt.value(),
                }
            }
            div {
                class: "form-group",
                label { r#for: "property-price", "Price" }
                input {
                    id: "property-price",
                    name: "price",
                    r#type: "number",
                    step: "any",
                    min: "0",
                    required: true,
                    value: "{form.read().price}",
                    oninput: move |evt: FormEvent| form.write().price = evt.value(),
                }
            }
            div {
                class: "form-actions",
                button { class: "btn-primary", r#type: "submit", "Save Property" }
            }
        }
    }
}

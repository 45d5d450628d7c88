use dioxus::prelude::*;
use store::CustomerRecord;

use crate::context::{use_api_client, use_catalog};
use crate::dialogs::BrowserDialogs;
use crate::forms::CustomerForm;
use crate::sync::{submit_create, SubmitOutcome};

/// `#add-customer-form`. Same lifecycle as the property form.
#[component]
pub fn AddCustomerForm(on_created: EventHandler<()>) -> Element {
    let mut form = use_signal(CustomerForm::default);
    let client = use_api_client();
    let mut catalog = use_catalog();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = form.read().to_draft();
        let client = client.clone();
        spawn(async move {
            let outcome =
                submit_create::<CustomerRecord, _, _>(&client, &BrowserDialogs, &draft).await;
            if let SubmitOutcome::Created { refreshed } = outcome {
                if let Some(records) = refreshed {
                    catalog.write().replace(records);
                }
                on_created.call(());
                form.set(CustomerForm::default());
            }
        });
    };

    rsx! {
        form {
            id: "add-customer-form",
            onsubmit: onsubmit,
            div {
                class: "form-group",
                label { r#for: "customer-name", "Name" }
                input {
                    id: "customer-name",
                    name: "name",
                    r#type: "text",
                    required: true,
                    value: "{form.read().name}",
                    oninput: move |evt: FormEvent| form.write().name = evt.value(),
                }
            }
            div {
                class: "form-group",
                label { r#for: "customer-email", "Email" }
                input {
                    id: "customer-email",
                    name: "email",
                    r#type: "email",
                    required: true,
                    value: "{form.read().email}",
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }
            }
            div {
                class: "form-group",
                label { r#for: "customer-phone", "Phone" }
                input {
                    id: "customer-phone",
                    name: "phone",
                    r#type: "tel",
                    value: "{form.read().phone}",
                    oninput: move |evt: FormEvent| form.write().phone = evt.value(),
                }
            }
            div {
                class: "form-actions",
                button { class: "btn-primary", r#type: "submit", "Save Customer" }
            }
        }
    }
}

//! # Dashboard: page shell and action dispatch
//!
//! [`DashboardState`] is the page's synchronous UI state: which view is shown
//! and which modals are open. It changes only through [`DashboardState::dispatch`],
//! which maps an [`Action`] to a state change and reports what happened as
//! [`DashboardEvent`]s. Nothing is looked up by name on a global object; every
//! control holds a handler that dispatches a typed action.
//!
//! The asynchronous actions (create, delete) live in the form components and
//! in [`Dashboard`]'s delete handlers, all built on [`crate::sync`].

use dioxus::prelude::*;
use store::{CustomerRecord, PropertyRecord};

use crate::add_customer::AddCustomerForm;
use crate::add_property::AddPropertyForm;
use crate::context::{use_api_client, use_catalog};
use crate::dialogs::BrowserDialogs;
use crate::icons::FaPlus;
use crate::modal::{ClickTarget, ModalKind, ModalOverlay, Modals};
use crate::stats::StatCard;
use crate::sync::{confirm_delete, DeleteOutcome};
use crate::tables::{CustomerTable, PropertyTable};
use crate::views::{NavLinks, View, ViewSection, ViewSwitcher};
use crate::{glyphs, Icon};

const DASHBOARD_CSS: Asset = asset!("/assets/styling/dashboard.css");

/// A synchronous UI action.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Show the view called `name`; `link` is the nav link that triggered it.
    SwitchView { name: String, link: Option<View> },
    ShowModal(ModalKind),
    CloseModal(ModalKind),
    /// A click landed inside an open modal.
    ModalClick(ModalKind, ClickTarget),
}

#[derive(Clone, Debug, PartialEq)]
pub enum DashboardEvent {
    ViewChanged(Option<View>),
    ModalShown(ModalKind),
    ModalClosed(ModalKind),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub views: ViewSwitcher,
    pub modals: Modals,
}

impl DashboardState {
    pub fn dispatch(&mut self, action: Action) -> Vec<DashboardEvent> {
        match action {
            Action::SwitchView { name, link } => {
                self.views.switch(&name, link);
                vec![DashboardEvent::ViewChanged(self.views.visible())]
            }
            Action::ShowModal(kind) => {
                self.modals.show(kind);
                vec![DashboardEvent::ModalShown(kind)]
            }
            Action::CloseModal(kind) => {
                self.modals.close(kind);
                vec![DashboardEvent::ModalClosed(kind)]
            }
            Action::ModalClick(kind, target) => {
                if self.modals.click(kind, target) {
                    vec![DashboardEvent::ModalClosed(kind)]
                } else {
                    Vec::new()
                }
            }
        }
    }
}

/// The whole page: navigation, the three view sections and both modals.
/// Must be rendered inside [`crate::ClientProvider`].
#[component]
pub fn Dashboard() -> Element {
    let mut state = use_signal(DashboardState::default);
    let catalog = use_catalog();
    let client = use_api_client();

    let mut dispatch = move |action: Action| {
        let events = state.write().dispatch(action);
        for event in events {
            tracing::debug!("{:?}", event);
        }
    };

    // Re-run after every state change, so after every view switch.
    use_effect(move || {
        let _ = state.read();
        glyphs::refresh();
    });

    let delete_client = client.clone();
    let on_delete_property = move |id: i64| {
        let client = delete_client.clone();
        let mut catalog = catalog;
        spawn(async move {
            let outcome = confirm_delete::<PropertyRecord, _, _>(&client, &BrowserDialogs, id).await;
            if let DeleteOutcome::Completed {
                refreshed: Some(records),
                ..
            } = outcome
            {
                catalog.write().replace(records);
            }
        });
    };

    let on_delete_customer = move |id: i64| {
        let client = client.clone();
        let mut catalog = catalog;
        spawn(async move {
            let outcome = confirm_delete::<CustomerRecord, _, _>(&client, &BrowserDialogs, id).await;
            if let DeleteOutcome::Completed {
                refreshed: Some(records),
                ..
            } = outcome
            {
                catalog.write().replace(records);
            }
        });
    };

    let current = state.read().clone();
    let property_count = catalog.read().properties.len();
    let customer_count = catalog.read().customers.len();

    rsx! {
        document::Stylesheet { href: DASHBOARD_CSS }

        div {
            class: "app-layout",

            aside {
                class: "sidebar",
                div { class: "brand", "Nusatek" }
                NavLinks {
                    switcher: current.views.clone(),
                    on_switch: move |view: View| dispatch(Action::SwitchView {
                        name: view.name().to_string(),
                        link: Some(view),
                    }),
                }
            }

            main {
                class: "main-content",

                ViewSection {
                    view: View::Dashboard,
                    visible: current.views.is_visible(View::Dashboard),
                    h1 { "Overview" }
                    div {
                        class: "stats-grid",
                        StatCard { id: "total-properties", label: "Total Properties", value: property_count }
                        StatCard { id: "total-customers", label: "Total Customers", value: customer_count }
                    }
                }

                ViewSection {
                    view: View::Properties,
                    visible: current.views.is_visible(View::Properties),
                    div {
                        class: "section-header",
                        h1 { "Properties" }
                        button {
                            class: "btn-primary",
                            onclick: move |_| dispatch(Action::ShowModal(ModalKind::AddProperty)),
                            Icon { icon: FaPlus, width: 14, height: 14 }
                            span { "Add Property" }
                        }
                    }
                    PropertyTable { on_delete: on_delete_property }
                }

                ViewSection {
                    view: View::Customers,
                    visible: current.views.is_visible(View::Customers),
                    div {
                        class: "section-header",
                        h1 { "Customers" }
                        button {
                            class: "btn-primary",
                            onclick: move |_| dispatch(Action::ShowModal(ModalKind::AddCustomer)),
                            Icon { icon: FaPlus, width: 14, height: 14 }
                            span { "Add Customer" }
                        }
                    }
                    CustomerTable { on_delete: on_delete_customer }
                }
            }
        }

        ModalOverlay {
            kind: ModalKind::AddProperty,
            visible: current.modals.is_visible(ModalKind::AddProperty),
            on_click: move |target: ClickTarget| dispatch(Action::ModalClick(ModalKind::AddProperty, target)),
            on_close: move |_| dispatch(Action::CloseModal(ModalKind::AddProperty)),
            AddPropertyForm {
                on_created: move |_| dispatch(Action::CloseModal(ModalKind::AddProperty)),
            }
        }

        ModalOverlay {
            kind: ModalKind::AddCustomer,
            visible: current.modals.is_visible(ModalKind::AddCustomer),
            on_click: move |target: ClickTarget| dispatch(Action::ModalClick(ModalKind::AddCustomer, target)),
            on_close: move |_| dispatch(Action::CloseModal(ModalKind::AddCustomer)),
            AddCustomerForm {
                on_created: move |_| dispatch(Action::CloseModal(ModalKind::AddCustomer)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_view_action() {
        let mut state = DashboardState::default();
        let events = state.dispatch(Action::SwitchView {
            name: "customers".to_string(),
            link: Some(View::Customers),
        });
        assert_eq!(events, vec![DashboardEvent::ViewChanged(Some(View::Customers))]);
        assert!(state.views.is_visible(View::Customers));
        assert!(!state.views.is_visible(View::Dashboard));
        assert!(state.views.is_link_active(View::Customers));
    }

    #[test]
    fn test_modal_actions() {
        let mut state = DashboardState::default();
        assert_eq!(
            state.dispatch(Action::ShowModal(ModalKind::AddProperty)),
            vec![DashboardEvent::ModalShown(ModalKind::AddProperty)]
        );

        // Clicking the card is not a dismissal.
        assert!(state
            .dispatch(Action::ModalClick(ModalKind::AddProperty, ClickTarget::Content))
            .is_empty());
        assert!(state.modals.is_visible(ModalKind::AddProperty));

        assert_eq!(
            state.dispatch(Action::ModalClick(ModalKind::AddProperty, ClickTarget::Backdrop)),
            vec![DashboardEvent::ModalClosed(ModalKind::AddProperty)]
        );
        assert!(!state.modals.is_visible(ModalKind::AddProperty));
    }

    #[test]
    fn test_close_modal_leaves_views_alone() {
        let mut state = DashboardState::default();
        state.dispatch(Action::SwitchView {
            name: "properties".to_string(),
            link: None,
        });
        state.dispatch(Action::ShowModal(ModalKind::AddCustomer));
        state.dispatch(Action::CloseModal(ModalKind::AddCustomer));

        assert!(state.views.is_visible(View::Properties));
        assert_eq!(state.modals, Modals::default());
    }
}

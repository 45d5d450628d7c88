use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

/// The two data-entry overlays on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModalKind {
    AddProperty,
    AddCustomer,
}

impl ModalKind {
    /// Element id of the backdrop.
    pub fn element_id(self) -> &'static str {
        match self {
            ModalKind::AddProperty => "add-modal",
            ModalKind::AddCustomer => "add-customer-modal",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ModalKind::AddProperty => "Add Property",
            ModalKind::AddCustomer => "Add Customer",
        }
    }
}

/// Where a click inside an open modal landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed overlay itself.
    Backdrop,
    /// The card or anything inside it.
    Content,
}

/// Visibility of every modal. All start hidden.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modals {
    add_property: bool,
    add_customer: bool,
}

impl Modals {
    pub fn is_visible(&self, kind: ModalKind) -> bool {
        match kind {
            ModalKind::AddProperty => self.add_property,
            ModalKind::AddCustomer => self.add_customer,
        }
    }

    pub fn show(&mut self, kind: ModalKind) {
        *self.slot(kind) = true;
    }

    pub fn close(&mut self, kind: ModalKind) {
        *self.slot(kind) = false;
    }

    /// Outside-click dismissal: only a click on the backdrop closes.
    /// Returns whether the modal was closed.
    pub fn click(&mut self, kind: ModalKind, target: ClickTarget) -> bool {
        if target == ClickTarget::Backdrop && self.is_visible(kind) {
            self.close(kind);
            return true;
        }
        false
    }

    fn slot(&mut self, kind: ModalKind) -> &mut bool {
        match kind {
            ModalKind::AddProperty => &mut self.add_property,
            ModalKind::AddCustomer => &mut self.add_customer,
        }
    }
}

/// A full-screen backdrop that centers its children in a modal card.
/// Clicks are reported with their [`ClickTarget`]; clicks on the card do not
/// bubble to the backdrop.
#[component]
pub fn ModalOverlay(
    kind: ModalKind,
    visible: bool,
    on_click: EventHandler<ClickTarget>,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            id: kind.element_id(),
            class: "modal",
            style: if visible { "display: block" } else { "display: none" },
            onclick: move |_| on_click.call(ClickTarget::Backdrop),
            div {
                class: "modal-content",
                onclick: move |evt: Event<MouseData>| {
                    evt.stop_propagation();
                    on_click.call(ClickTarget::Content);
                },
                div {
                    class: "modal-header",
                    h2 { "{kind.title()}" }
                    button {
                        class: "close-btn",
                        r#type: "button",
                        title: "Close",
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 16, height: 16 }
                    }
                }
                {children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initially_hidden() {
        let modals = Modals::default();
        assert!(!modals.is_visible(ModalKind::AddProperty));
        assert!(!modals.is_visible(ModalKind::AddCustomer));
    }

    #[test]
    fn test_show_and_close() {
        let mut modals = Modals::default();
        modals.show(ModalKind::AddCustomer);
        assert!(modals.is_visible(ModalKind::AddCustomer));
        assert!(!modals.is_visible(ModalKind::AddProperty));
        modals.close(ModalKind::AddCustomer);
        assert!(!modals.is_visible(ModalKind::AddCustomer));
    }

    #[test]
    fn test_backdrop_click_closes_content_click_does_not() {
        let mut modals = Modals::default();
        modals.show(ModalKind::AddProperty);

        assert!(!modals.click(ModalKind::AddProperty, ClickTarget::Content));
        assert!(modals.is_visible(ModalKind::AddProperty));

        assert!(modals.click(ModalKind::AddProperty, ClickTarget::Backdrop));
        assert!(!modals.is_visible(ModalKind::AddProperty));
    }

    #[test]
    fn test_backdrop_click_only_affects_its_modal() {
        let mut modals = Modals::default();
        modals.show(ModalKind::AddProperty);
        modals.show(ModalKind::AddCustomer);

        modals.click(ModalKind::AddCustomer, ClickTarget::Backdrop);
        assert!(modals.is_visible(ModalKind::AddProperty));
        assert!(!modals.is_visible(ModalKind::AddCustomer));
    }
}

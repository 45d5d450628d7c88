//! Named view sections and the navigation that switches between them.
//!
//! Exactly one section is shown at a time (or none, after switching to a name
//! that does not exist), and at most one nav link carries the `active` class.

use dioxus::prelude::*;

use crate::icons::{FaBuilding, FaHouse, FaUsers};
use crate::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Dashboard,
    Properties,
    Customers,
}

impl View {
    pub const ALL: [View; 3] = [View::Dashboard, View::Properties, View::Customers];

    pub fn name(self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Properties => "properties",
            View::Customers => "customers",
        }
    }

    pub fn from_name(name: &str) -> Option<View> {
        View::ALL.into_iter().find(|v| v.name() == name)
    }

    /// Element id of the section, e.g. `view-customers`.
    pub fn section_id(self) -> String {
        format!("view-{}", self.name())
    }

    pub fn label(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Properties => "Properties",
            View::Customers => "Customers",
        }
    }
}

/// Which section is visible and which nav link is marked active.
///
/// The two are tracked separately: switching without a link reference clears
/// the active marker even though a section is shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewSwitcher {
    visible: Option<View>,
    active_link: Option<View>,
}

impl Default for ViewSwitcher {
    fn default() -> Self {
        Self {
            visible: Some(View::Dashboard),
            active_link: Some(View::Dashboard),
        }
    }
}

impl ViewSwitcher {
    /// Hide every section, show the one called `name`, and move the active
    /// marker to `link`.
    pub fn switch(&mut self, name: &str, link: Option<View>) {
        self.visible = View::from_name(name);
        self.active_link = link;
        if self.visible.is_none() {
            tracing::warn!("No view named {:?}", name);
        }
    }

    pub fn visible(&self) -> Option<View> {
        self.visible
    }

    pub fn is_visible(&self, view: View) -> bool {
        self.visible == Some(view)
    }

    pub fn is_link_active(&self, link: View) -> bool {
        self.active_link == Some(link)
    }
}

/// `.nav-links` anchors, one per [`View`].
#[component]
pub fn NavLinks(switcher: ViewSwitcher, on_switch: EventHandler<View>) -> Element {
    rsx! {
        nav {
            class: "nav-links",
            for view in View::ALL {
                a {
                    key: "{view.name()}",
                    href: "#",
                    class: if switcher.is_link_active(view) { "active" } else { "" },
                    onclick: move |evt: Event<MouseData>| {
                        evt.prevent_default();
                        on_switch.call(view);
                    },
                    {nav_icon(view)}
                    span { "{view.label()}" }
                }
            }
        }
    }
}

fn nav_icon(view: View) -> Element {
    match view {
        View::Dashboard => rsx! { Icon { icon: FaHouse, width: 16, height: 16 } },
        View::Properties => rsx! { Icon { icon: FaBuilding, width: 16, height: 16 } },
        View::Customers => rsx! { Icon { icon: FaUsers, width: 16, height: 16 } },
    }
}

/// A `.view-section` shown only when it is the visible view.
#[component]
pub fn ViewSection(view: View, visible: bool, children: Element) -> Element {
    rsx! {
        section {
            id: view.section_id(),
            class: "view-section",
            style: if visible { "display: block" } else { "display: none" },
            {children}
        }
    }
}

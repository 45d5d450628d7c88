//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod dialogs;
pub use dialogs::{BrowserDialogs, Dialogs};

pub mod forms;
pub use forms::{parse_float, CustomerForm, PropertyForm};

pub mod glyphs;

mod local_time;

pub mod sync;
pub use sync::{confirm_delete, fetch_collection, submit_create, DeleteOutcome, SubmitOutcome};

mod context;
pub use context::{
    refresh_into, use_api_client, use_catalog, use_display, ApiClient, ClientProvider,
};

pub mod modal;
pub use modal::{ClickTarget, ModalKind, ModalOverlay, Modals};

pub mod views;
pub use views::{NavLinks, View, ViewSection, ViewSwitcher};

pub mod tables;
pub use tables::{CustomerTable, PropertyTable, TableBody};

mod stats;
pub use stats::StatCard;

mod add_property;
pub use add_property::AddPropertyForm;

mod add_customer;
pub use add_customer::AddCustomerForm;

pub mod dashboard;
pub use dashboard::{Action, Dashboard, DashboardEvent, DashboardState};

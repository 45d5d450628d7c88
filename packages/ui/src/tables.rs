//! # Tables: the property and customer renderers
//!
//! Rendering is split in two. [`property_body`] and [`customer_body`] are pure
//! functions of the [`Catalog`] that produce a [`TableBody`] of display-ready
//! rows; [`PropertyTable`] and [`CustomerTable`] turn that into a `<tbody>`.
//!
//! Record fields are untrusted. They only ever reach the page as Dioxus text
//! nodes and attribute values, which are escaped, never as raw markup.

use dioxus::prelude::*;
use store::{
    format_currency, format_date, Catalog, Collection, CustomerRecord, DisplayConfig,
    PropertyRecord,
};

use crate::context::{use_catalog, use_display};
use crate::icons::FaTrash;
use crate::local_time::to_local;
use crate::{glyphs, Icon};

/// Column count shared by both tables; the placeholder row spans all of them.
pub const COLUMNS: usize = 5;

/// What a `<tbody>` should contain.
#[derive(Clone, Debug, PartialEq)]
pub enum TableBody<Row> {
    /// Nothing fetched yet.
    Pending,
    /// The collection is empty: one row with this message.
    Placeholder(&'static str),
    Rows(Vec<Row>),
}

impl<Row> TableBody<Row> {
    /// Number of `<tr>` elements this body renders.
    pub fn row_count(&self) -> usize {
        match self {
            TableBody::Pending => 0,
            TableBody::Placeholder(_) => 1,
            TableBody::Rows(rows) => rows.len(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PropertyRow {
    /// Bound to the row's delete action.
    pub id: i64,
    pub title: String,
    pub created: String,
    pub address: String,
    pub price: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CustomerRow {
    /// Bound to the row's delete action.
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: String,
    pub active: bool,
}

fn body_from<R, Row>(
    collection: &Collection<R>,
    empty_message: &'static str,
    row: impl Fn(&R) -> Row,
) -> TableBody<Row> {
    match collection.records() {
        None => TableBody::Pending,
        Some([]) => TableBody::Placeholder(empty_message),
        Some(records) => TableBody::Rows(records.iter().map(row).collect()),
    }
}

pub fn property_body(catalog: &Catalog, display: &DisplayConfig) -> TableBody<PropertyRow> {
    body_from(&catalog.properties, "No properties found.", |p: &PropertyRecord| {
        PropertyRow {
            id: p.id,
            title: p.title.clone(),
            created: format_date(&to_local(&p.created_at), display),
            address: p.address.clone(),
            price: format_currency(p.price, display),
        }
    })
}

pub fn customer_body(catalog: &Catalog) -> TableBody<CustomerRow> {
    body_from(&catalog.customers, "No customers found.", |c: &CustomerRecord| {
        CustomerRow {
            id: c.id,
            name: c.name.clone(),
            email: c.email.clone(),
            phone: c.phone.clone().unwrap_or_else(|| "-".to_string()),
            status: c.status.to_string(),
            active: c.status.is_active(),
        }
    })
}

fn placeholder(message: &'static str) -> Element {
    rsx! {
        tr {
            td {
                colspan: "{COLUMNS}",
                class: "table-placeholder",
                "{message}"
            }
        }
    }
}

/// Click handler for a row's delete button; it reports that row's id.
fn delete_click(id: i64, mut on_delete: impl FnMut(i64)) -> impl FnMut() {
    move || on_delete(id)
}

#[component]
fn DeleteButton(id: i64, on_delete: EventHandler<i64>) -> Element {
    let mut click = delete_click(id, move |id| on_delete.call(id));

    rsx! {
        button {
            class: "action-btn",
            title: "Delete",
            "data-id": "{id}",
            onclick: move |_| click(),
            Icon { icon: FaTrash, width: 14, height: 14 }
        }
    }
}

/// `#property-table-body` and its header.
#[component]
pub fn PropertyTable(on_delete: EventHandler<i64>) -> Element {
    let catalog = use_catalog();
    let display = use_display();
    let body = property_body(&catalog.read(), &display);

    // Runs after every re-render caused by a catalog change.
    use_effect(move || {
        let _ = catalog.read();
        glyphs::refresh();
    });

    let content = match body {
        TableBody::Pending => rsx! {},
        TableBody::Placeholder(message) => placeholder(message),
        TableBody::Rows(rows) => rsx! {
            for row in rows {
                tr {
                    key: "{row.id}",
                    td {
                        div { class: "cell-title", "{row.title}" }
                        div { class: "cell-subtitle", "{row.created}" }
                    }
                    td { "{row.address}" }
                    td { class: "cell-money", "{row.price}" }
                    td { span { class: "status-badge active", "Active" } }
                    td { DeleteButton { id: row.id, on_delete: on_delete } }
                }
            }
        },
    };

    rsx! {
        table {
            class: "data-table",
            thead {
                tr {
                    th { "Property" }
                    th { "Address" }
                    th { "Price" }
                    th { "Status" }
                    th { "Actions" }
                }
            }
            tbody { id: "property-table-body", {content} }
        }
    }
}

/// `#customer-table-body` and its header.
#[component]
pub fn CustomerTable(on_delete: EventHandler<i64>) -> Element {
    let catalog = use_catalog();
    let body = customer_body(&catalog.read());

    use_effect(move || {
        let _ = catalog.read();
        glyphs::refresh();
    });

    let content = match body {
        TableBody::Pending => rsx! {},
        TableBody::Placeholder(message) => placeholder(message),
        TableBody::Rows(rows) => rsx! {
            for row in rows {
                tr {
                    key: "{row.id}",
                    td {
                        div { class: "cell-title", "{row.name}" }
                        div { class: "cell-subtitle", "ID: {row.id}" }
                    }
                    td { "{row.email}" }
                    td { "{row.phone}" }
                    td {
                        span {
                            class: if row.active { "status-badge active" } else { "status-badge" },
                            "{row.status}"
                        }
                    }
                    td { DeleteButton { id: row.id, on_delete: on_delete } }
                }
            }
        },
    };

    rsx! {
        table {
            class: "data-table",
            thead {
                tr {
                    th { "Customer" }
                    th { "Email" }
                    th { "Phone" }
                    th { "Status" }
                    th { "Actions" }
                }
            }
            tbody { id: "customer-table-body", {content} }
        }
    }
}

//! # Domain records for properties and customers
//!
//! Defines the records returned by the REST backend's collection endpoints and
//! the drafts sent when creating new ones. Every record type implements
//! [`Resource`], which ties it to its [`EntityKind`], its draft type and its
//! slot in the client-side [`Catalog`].
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`PropertyRecord`] | A listed property: title, address, description, price and creation time. |
//! | [`CustomerRecord`] | A customer: name, email, optional phone and a [`CustomerStatus`]. |
//! | [`NewProperty`] | Request body for `POST /api/v1/properties`. |
//! | [`NewCustomer`] | Request body for `POST /api/v1/customers`. |
//!
//! Identity is always the server-assigned `id`. Records are never mutated on the
//! client; a new fetch replaces the whole collection.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::{Catalog, Collection};

/// The two independent collections the client displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Properties,
    Customers,
}

impl EntityKind {
    /// Singular noun used in prompts: "property", "customer".
    pub fn singular(self) -> &'static str {
        match self {
            EntityKind::Properties => "property",
            EntityKind::Customers => "customer",
        }
    }

    /// Plural noun used in messages and element ids.
    pub fn plural(self) -> &'static str {
        match self {
            EntityKind::Properties => "properties",
            EntityKind::Customers => "customers",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural())
    }
}

/// A record type served from a collection endpoint.
pub trait Resource: Clone + PartialEq + DeserializeOwned + 'static {
    /// Body sent when creating a record of this type.
    type Draft: Serialize + Clone + PartialEq;

    const KIND: EntityKind;

    fn id(&self) -> i64;

    fn collection(catalog: &Catalog) -> &Collection<Self>;

    fn collection_mut(catalog: &mut Catalog) -> &mut Collection<Self>;
}

/// A property as returned by `GET /api/v1/properties`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub id: i64,
    pub title: String,
    pub address: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub created_at: DateTime<FixedOffset>,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

impl Resource for PropertyRecord {
    type Draft = NewProperty;

    const KIND: EntityKind = EntityKind::Properties;

    fn id(&self) -> i64 {
        self.id
    }

    fn collection(catalog: &Catalog) -> &Collection<Self> {
        &catalog.properties
    }

    fn collection_mut(catalog: &mut Catalog) -> &mut Collection<Self> {
        &mut catalog.properties
    }
}

/// A customer as returned by `GET /api/v1/customers`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// The backend sends `""` for a missing phone number.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub phone: Option<String>,
    pub status: CustomerStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

impl Resource for CustomerRecord {
    type Draft = NewCustomer;

    const KIND: EntityKind = EntityKind::Customers;

    fn id(&self) -> i64 {
        self.id
    }

    fn collection(catalog: &Catalog) -> &Collection<Self> {
        &catalog.customers
    }

    fn collection_mut(catalog: &mut Catalog) -> &mut Collection<Self> {
        &mut catalog.customers
    }
}

/// Customer status. Only `Active` is styled specially; anything else the
/// backend sends is kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CustomerStatus {
    Active,
    Other(String),
}

impl CustomerStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, CustomerStatus::Active)
    }

    pub fn as_str(&self) -> &str {
        match self {
            CustomerStatus::Active => "Active",
            CustomerStatus::Other(s) => s,
        }
    }
}

impl From<String> for CustomerStatus {
    fn from(s: String) -> Self {
        if s == "Active" {
            CustomerStatus::Active
        } else {
            CustomerStatus::Other(s)
        }
    }
}

impl From<CustomerStatus> for String {
    fn from(status: CustomerStatus) -> Self {
        match status {
            CustomerStatus::Active => "Active".to_string(),
            CustomerStatus::Other(s) => s,
        }
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /api/v1/properties`.
///
/// `price` is whatever the form's float coercion produced; a NaN is written as
/// JSON `null` by `serde_json`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewProperty {
    pub title: String,
    pub address: String,
    pub description: String,
    pub price: f64,
}

/// Body of `POST /api/v1/customers`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: CustomerStatus,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_from_backend_json() {
        let json = r#"{
            "id": 7,
            "title": "Unit A",
            "description": "Corner unit",
            "address": "Jl. Test",
            "price": 150000,
            "created_at": "2024-03-01T10:20:30.123456+07:00",
            "updated_at": "2024-03-01T10:20:30+07:00"
        }"#;
        let p: PropertyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, 7);
        assert_eq!(p.title, "Unit A");
        assert_eq!(p.price, 150000.0);
        assert_eq!(p.created_at.to_rfc3339(), "2024-03-01T10:20:30.123456+07:00");
        assert!(p.updated_at.is_some());
    }

    #[test]
    fn test_customer_phone_and_status() {
        let json = r#"[
            {"id": 1, "name": "Ana", "email": "ana@example.com", "phone": "", "status": "Active"},
            {"id": 2, "name": "Budi", "email": "budi@example.com", "phone": "0812", "status": "Inactive"},
            {"id": 3, "name": "Citra", "email": "citra@example.com", "status": "Active"}
        ]"#;
        let customers: Vec<CustomerRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(customers[0].phone, None);
        assert!(customers[0].status.is_active());
        assert_eq!(customers[1].phone.as_deref(), Some("0812"));
        assert_eq!(
            customers[1].status,
            CustomerStatus::Other("Inactive".to_string())
        );
        assert_eq!(customers[2].phone, None);
    }

    #[test]
    fn test_new_customer_serializes_status_as_string() {
        let draft = NewCustomer {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: "0812".to_string(),
            status: CustomerStatus::Active,
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Ana",
                "email": "ana@example.com",
                "phone": "0812",
                "status": "Active"
            })
        );
    }

    #[test]
    fn test_nan_price_serializes_as_null() {
        let draft = NewProperty {
            title: "T".to_string(),
            address: "A".to_string(),
            description: String::new(),
            price: f64::NAN,
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert!(value["price"].is_null());
    }
}

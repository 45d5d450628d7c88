//! # API crate: REST client for the property and customer backend
//!
//! The backend exposes one JSON CRUD collection per entity type. This crate
//! wraps those endpoints in a typed client shared by every frontend.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`RestClient`]: `list`, `create` and `delete` generic over a [`store::Resource`] |
//! | [`transport`] | The [`Transport`] seam, with a `reqwest` implementation and an in-memory one for tests |
//! | [`error`] | [`FetchError`], the network / HTTP / parse failure taxonomy |
//!
//! ## Endpoints
//!
//! | Method | Path | Body |
//! |--------|------|------|
//! | `GET` | `/api/v1/properties` | none |
//! | `POST` | `/api/v1/properties` | `{title, address, description, price}` |
//! | `DELETE` | `/api/v1/properties/{id}` | none |
//! | `GET` | `/api/v1/customers` | none |
//! | `POST` | `/api/v1/customers` | `{name, email, phone, status}` |
//! | `DELETE` | `/api/v1/customers/{id}` | none |
//!
//! Paths come from [`store::ApiConfig`] so a deployment can move them.

pub mod client;
pub mod error;
pub mod transport;

pub use client::{ensure_success, RestClient};
pub use error::FetchError;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, MemoryTransport, Method, Transport};

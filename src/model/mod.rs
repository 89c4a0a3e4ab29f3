//! Request and response records exchanged over the HTTP API.
//!
//! DTOs are plain serde types with OpenAPI schemas. The server converts them to
//! domain parameter types at the controller boundary before any storage access.

pub mod api;
pub mod demanda;
pub mod health;

//! HTTP request handlers.
//!
//! Controllers extract path, query and body values, convert DTOs into validated
//! parameter types, call the service layer, and convert results back into DTOs.

pub mod demanda;
pub mod health;

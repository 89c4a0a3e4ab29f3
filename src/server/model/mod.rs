//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types are built from
//! DTOs by validating constructors, so services only ever see well-formed input.

pub mod demanda;

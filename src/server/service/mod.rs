//! Business logic layer.
//!
//! Services sit between controllers and repositories. They receive validated
//! parameter types, run the existence checks each operation requires, and return
//! domain models or `AppError` variants that controllers map to status codes.

pub mod demanda;

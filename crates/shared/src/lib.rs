//! Shared domain types and wire DTOs for the OrdersService dashboard.

pub mod domain;
pub mod error;
pub mod protocol;

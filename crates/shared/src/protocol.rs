use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{OrderId, UserId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub description: String,
    pub price: f64,
}

// The server serializes a user without orders as `"orders": null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<OrderSummary>, D::Error>
where
    D: Deserializer<'de>,
{
    let orders = Option::<Vec<OrderSummary>>::deserialize(deserializer)?;
    Ok(orders.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub orders: Vec<OrderSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub description: String,
    pub price: f64,
}

/// Partial update for `PATCH /api/users/{id}`. Absent fields are omitted from
/// the body entirely so the server only touches what actually changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UpdateUserRequest {
    /// Collects the fields whose submitted value differs from the snapshot the
    /// edit form was opened with.
    pub fn diff(initial: &UserSummary, name: &str, email: &str) -> Self {
        Self {
            name: (name != initial.name).then(|| name.to_string()),
            email: (email != initial.email).then(|| email.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// Partial update for `PATCH /api/orders/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateOrderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl UpdateOrderRequest {
    pub fn diff(initial: &OrderSummary, description: &str, price: f64) -> Self {
        Self {
            description: (description != initial.description).then(|| description.to_string()),
            price: (price != initial.price).then_some(price),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.price.is_none()
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;

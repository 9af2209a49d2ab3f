//! Backend commands queued from UI to backend worker.

use shared::domain::{OrderId, UserId};
use shared::protocol::{
    CreateOrderRequest, CreateUserRequest, UpdateOrderRequest, UpdateUserRequest,
};

pub enum BackendCommand {
    FetchUsers,
    CreateUser {
        request: CreateUserRequest,
    },
    UpdateUser {
        user_id: UserId,
        request: UpdateUserRequest,
    },
    DeleteUser {
        user_id: UserId,
    },
    CreateOrder {
        user_id: UserId,
        request: CreateOrderRequest,
    },
    UpdateOrder {
        order_id: OrderId,
        request: UpdateOrderRequest,
    },
    DeleteOrder {
        order_id: OrderId,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FetchUsers => "fetch_users",
            Self::CreateUser { .. } => "create_user",
            Self::UpdateUser { .. } => "update_user",
            Self::DeleteUser { .. } => "delete_user",
            Self::CreateOrder { .. } => "create_order",
            Self::UpdateOrder { .. } => "update_order",
            Self::DeleteOrder { .. } => "delete_order",
        }
    }
}

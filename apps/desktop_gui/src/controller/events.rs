//! Backend->UI events, user-facing notices, and submit-failure wording.

use client_core::ApiClientError;
use shared::domain::{OrderId, UserId};
use shared::protocol::UserSummary;

pub enum UiEvent {
    /// Fresh full snapshot; replaces whatever the UI currently shows.
    UsersLoaded(Vec<UserSummary>),
    /// Fetch failed; logged by the worker, the UI just stops its spinner.
    FetchFailed,
    UserDeleted { user_id: UserId },
    UserDeleteFailed { user_id: UserId },
    OrderDeleted { order_id: OrderId },
    OrderDeleteFailed { order_id: OrderId },
    /// A form submission succeeded; close the modal and show the notice.
    SubmitOk { notice: String },
    /// A form submission failed; keep the modal open for another attempt.
    SubmitFailed { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitContext {
    CreateUser,
    UpdateUser,
    CreateOrder,
    UpdateOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

pub const EMAIL_TAKEN_MESSAGE: &str = "The specified email is already taken";

/// A duplicate-email conflict gets its own wording; everything else collapses
/// into a generic per-context failure line.
pub fn submit_failure_message(context: SubmitContext, err: &ApiClientError) -> String {
    match (context, err) {
        (SubmitContext::CreateUser | SubmitContext::UpdateUser, ApiClientError::Conflict) => {
            EMAIL_TAKEN_MESSAGE.to_string()
        }
        (SubmitContext::CreateUser, _) => "Failed to create user".to_string(),
        (SubmitContext::UpdateUser, _) => "Failed to update user".to_string(),
        (SubmitContext::CreateOrder, _) => "Failed to create order".to_string(),
        (SubmitContext::UpdateOrder, _) => "Failed to update order".to_string(),
    }
}

#[cfg(test)]
#[path = "tests/events_tests.rs"]
mod tests;

//! Dashboard state and the transitions applied from backend events.

use std::collections::HashSet;

use shared::domain::{OrderId, UserId};
use shared::protocol::{OrderSummary, UserSummary};

use crate::controller::events::{Notice, UiEvent};
use crate::ui::forms::{OrderForm, UserForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
}

/// The single modal slot. Each variant carries the entity it targets, so an
/// open modal can never point at a missing target.
pub enum ActiveModal {
    CreatingUser {
        form: UserForm,
    },
    EditingUser {
        initial: UserSummary,
        form: UserForm,
    },
    AddingOrder {
        user: UserSummary,
        form: OrderForm,
    },
    EditingOrder {
        initial: OrderSummary,
        form: OrderForm,
    },
}

pub struct DashboardState {
    pub users: Vec<UserSummary>,
    pub load_phase: LoadPhase,
    pub busy_users: HashSet<UserId>,
    pub busy_orders: HashSet<OrderId>,
    pub active_modal: Option<ActiveModal>,
    pub submit_in_flight: bool,
    pub notice: Option<Notice>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            load_phase: LoadPhase::Loading,
            busy_users: HashSet::new(),
            busy_orders: HashSet::new(),
            active_modal: None,
            submit_in_flight: false,
            notice: None,
        }
    }

    /// Opening a modal replaces whichever one was active before.
    pub fn open_modal(&mut self, modal: ActiveModal) {
        self.active_modal = Some(modal);
        self.submit_in_flight = false;
    }

    pub fn close_modal(&mut self) {
        self.active_modal = None;
        self.submit_in_flight = false;
    }

    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::UsersLoaded(users) => {
                self.users = users;
                self.load_phase = LoadPhase::Ready;
            }
            UiEvent::FetchFailed => {
                self.load_phase = LoadPhase::Ready;
            }
            UiEvent::UserDeleted { user_id } => {
                self.busy_users.remove(&user_id);
                self.notice = Some(Notice::success("User deleted successfully"));
            }
            UiEvent::UserDeleteFailed { user_id } => {
                self.busy_users.remove(&user_id);
            }
            UiEvent::OrderDeleted { order_id } => {
                self.busy_orders.remove(&order_id);
                self.notice = Some(Notice::success("Order deleted successfully"));
            }
            UiEvent::OrderDeleteFailed { order_id } => {
                self.busy_orders.remove(&order_id);
            }
            UiEvent::SubmitOk { notice } => {
                self.close_modal();
                self.notice = Some(Notice::success(notice));
            }
            UiEvent::SubmitFailed { message } => {
                self.submit_in_flight = false;
                self.notice = Some(Notice::error(message));
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;

//! Header, notice banner, and the users/orders accordion list.

use shared::protocol::{OrderSummary, UserSummary};

use crate::controller::events::{Notice, NoticeKind};
use crate::controller::reducer::{DashboardState, LoadPhase};
use shared::domain::{OrderId, UserId};

/// Actions collected while rendering; applied by the app shell after the
/// panels are drawn so rendering never mutates list state mid-iteration.
pub enum PanelAction {
    Refresh,
    OpenCreateUser,
    OpenEditUser(UserSummary),
    OpenAddOrder(UserSummary),
    OpenEditOrder(OrderSummary),
    DeleteUser(UserId),
    DeleteOrder(OrderId),
}

/// Title bar; clicking the title refreshes the collection, standing in for the
/// original page reload.
pub fn header_bar(ui: &mut egui::Ui) -> Option<PanelAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        let title = ui.add(
            egui::Label::new(egui::RichText::new("OrdersService").heading())
                .sense(egui::Sense::click()),
        );
        if title.on_hover_text("Refresh").clicked() {
            action = Some(PanelAction::Refresh);
        }
    });
    action
}

pub fn notice_banner(ui: &mut egui::Ui, notice: &mut Option<Notice>) {
    let Some(current) = notice.clone() else {
        return;
    };
    let (fill, stroke) = match current.kind {
        NoticeKind::Success => (
            egui::Color32::from_rgb(42, 86, 56),
            egui::Color32::from_rgb(92, 168, 118),
        ),
        NoticeKind::Info => (
            egui::Color32::from_rgb(47, 66, 97),
            egui::Color32::from_rgb(96, 128, 180),
        ),
        NoticeKind::Error => (
            egui::Color32::from_rgb(111, 53, 53),
            egui::Color32::from_rgb(175, 96, 96),
        ),
    };

    egui::Frame::none()
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, stroke))
        .rounding(8.0)
        .inner_margin(egui::Margin::symmetric(10.0, 8.0))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(&current.message).color(egui::Color32::WHITE));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Dismiss").clicked() {
                        *notice = None;
                    }
                });
            });
        });
    ui.add_space(6.0);
}

pub fn user_list(ui: &mut egui::Ui, state: &DashboardState) -> Vec<PanelAction> {
    let mut actions = Vec::new();

    if state.load_phase == LoadPhase::Loading {
        ui.vertical_centered(|ui| {
            ui.add_space(32.0);
            ui.add(egui::Spinner::new().size(28.0));
            ui.weak("Loading users...");
        });
        return actions;
    }

    if state.users.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(32.0);
            ui.weak("No data");
        });
        return actions;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, true])
        .show(ui, |ui| {
            for user in &state.users {
                user_row(ui, state, user, &mut actions);
                ui.add_space(4.0);
            }
        });
    actions
}

fn user_row(
    ui: &mut egui::Ui,
    state: &DashboardState,
    user: &UserSummary,
    actions: &mut Vec<PanelAction>,
) {
    let busy = state.busy_users.contains(&user.id);
    let id = ui.make_persistent_id(("user-row", user.id.0));

    egui::Frame::group(ui.style()).show(ui, |ui| {
        egui::collapsing_header::CollapsingState::load_with_default_open(ui.ctx(), id, false)
            .show_header(ui, |ui| {
                ui.vertical(|ui| {
                    ui.strong(format!("User: {}", user.name));
                    ui.weak(format!("Email: {}", user.email));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if busy {
                        ui.add(egui::Spinner::new());
                        return;
                    }
                    if ui.button("🗑").on_hover_text("Delete user").clicked() {
                        actions.push(PanelAction::DeleteUser(user.id));
                    }
                    if ui.button("✏").on_hover_text("Edit user").clicked() {
                        actions.push(PanelAction::OpenEditUser(user.clone()));
                    }
                    if ui.button("➕").on_hover_text("Create order").clicked() {
                        actions.push(PanelAction::OpenAddOrder(user.clone()));
                    }
                });
            })
            .body(|ui| {
                if user.orders.is_empty() {
                    ui.weak("No orders yet");
                    return;
                }
                for (index, order) in user.orders.iter().enumerate() {
                    order_row(ui, state, index, order, actions);
                }
            });
    });
}

fn order_row(
    ui: &mut egui::Ui,
    state: &DashboardState,
    index: usize,
    order: &OrderSummary,
    actions: &mut Vec<PanelAction>,
) {
    let busy = state.busy_orders.contains(&order.id);
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(format!("{}. Description: {}", index + 1, order.description));
            ui.weak(format!("Price: {} $", order.price));
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if busy {
                ui.add(egui::Spinner::new());
                return;
            }
            if ui.button("🗑").on_hover_text("Delete order").clicked() {
                actions.push(PanelAction::DeleteOrder(order.id));
            }
            if ui.button("✏").on_hover_text("Edit order").clicked() {
                actions.push(PanelAction::OpenEditOrder(order.clone()));
            }
        });
    });
    ui.separator();
}

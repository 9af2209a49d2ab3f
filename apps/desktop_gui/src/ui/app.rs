//! Application shell: event pump, panel composition, and the active modal.

use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{Notice, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::{ActiveModal, DashboardState, LoadPhase};
use crate::ui::forms::{self, OrderForm, UserForm};
use crate::ui::panels::{self, PanelAction};

pub struct DashboardApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    state: DashboardState,
}

impl DashboardApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            state: DashboardState::new(),
        };
        dispatch_backend_command(
            &app.cmd_tx,
            BackendCommand::FetchUsers,
            &mut app.state.notice,
        );
        app
    }

    fn drain_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.state.apply(event);
        }
    }

    fn handle_action(&mut self, action: PanelAction) {
        match action {
            PanelAction::Refresh => {
                self.state.load_phase = LoadPhase::Loading;
                dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::FetchUsers,
                    &mut self.state.notice,
                );
            }
            PanelAction::OpenCreateUser => {
                self.state.open_modal(ActiveModal::CreatingUser {
                    form: UserForm::empty(),
                });
            }
            PanelAction::OpenEditUser(user) => {
                self.state.open_modal(ActiveModal::EditingUser {
                    form: UserForm::prefilled(&user),
                    initial: user,
                });
            }
            PanelAction::OpenAddOrder(user) => {
                self.state.open_modal(ActiveModal::AddingOrder {
                    user,
                    form: OrderForm::empty(),
                });
            }
            PanelAction::OpenEditOrder(order) => {
                self.state.open_modal(ActiveModal::EditingOrder {
                    form: OrderForm::prefilled(&order),
                    initial: order,
                });
            }
            PanelAction::DeleteUser(user_id) => {
                if dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::DeleteUser { user_id },
                    &mut self.state.notice,
                ) {
                    self.state.busy_users.insert(user_id);
                }
            }
            PanelAction::DeleteOrder(order_id) => {
                if dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::DeleteOrder { order_id },
                    &mut self.state.notice,
                ) {
                    self.state.busy_orders.insert(order_id);
                }
            }
        }
    }

    fn show_active_modal(&mut self, ctx: &egui::Context) {
        let DashboardState {
            active_modal,
            submit_in_flight,
            notice,
            ..
        } = &mut self.state;
        let Some(modal) = active_modal.as_mut() else {
            return;
        };

        let in_flight = *submit_in_flight;
        let mut open = true;
        let mut submission: Option<BackendCommand> = None;

        match modal {
            ActiveModal::CreatingUser { form } => {
                egui::Window::new("Create User")
                    .open(&mut open)
                    .collapsible(false)
                    .resizable(false)
                    .default_width(320.0)
                    .show(ctx, |ui| {
                        forms::labeled_text_field(
                            ui,
                            "Name",
                            &mut form.name,
                            &form.name_error,
                            !in_flight,
                        );
                        forms::labeled_text_field(
                            ui,
                            "Email",
                            &mut form.email,
                            &form.email_error,
                            !in_flight,
                        );
                        if forms::submit_button(ui, "Create User", in_flight) && form.validate() {
                            submission = Some(BackendCommand::CreateUser {
                                request: form.create_request(),
                            });
                        }
                    });
            }
            ActiveModal::EditingUser { initial, form } => {
                egui::Window::new("Edit User")
                    .open(&mut open)
                    .collapsible(false)
                    .resizable(false)
                    .default_width(320.0)
                    .show(ctx, |ui| {
                        forms::labeled_text_field(
                            ui,
                            "Name",
                            &mut form.name,
                            &form.name_error,
                            !in_flight,
                        );
                        forms::labeled_text_field(
                            ui,
                            "Email",
                            &mut form.email,
                            &form.email_error,
                            !in_flight,
                        );
                        if forms::submit_button(ui, "Save", in_flight) && form.validate() {
                            let request = form.update_request(initial);
                            if request.is_empty() {
                                *notice = Some(Notice::info("No changes to save"));
                            } else {
                                submission = Some(BackendCommand::UpdateUser {
                                    user_id: initial.id,
                                    request,
                                });
                            }
                        }
                    });
            }
            ActiveModal::AddingOrder { user, form } => {
                egui::Window::new("Create Order")
                    .open(&mut open)
                    .collapsible(false)
                    .resizable(false)
                    .default_width(320.0)
                    .show(ctx, |ui| {
                        ui.weak(format!("For user: {}", user.name));
                        ui.add_space(4.0);
                        forms::labeled_text_field(
                            ui,
                            "Description",
                            &mut form.description,
                            &form.description_error,
                            !in_flight,
                        );
                        forms::price_field(ui, form, !in_flight);
                        if forms::submit_button(ui, "Create Order", in_flight) && form.validate() {
                            submission = Some(BackendCommand::CreateOrder {
                                user_id: user.id,
                                request: form.create_request(),
                            });
                        }
                    });
            }
            ActiveModal::EditingOrder { initial, form } => {
                egui::Window::new("Edit Order")
                    .open(&mut open)
                    .collapsible(false)
                    .resizable(false)
                    .default_width(320.0)
                    .show(ctx, |ui| {
                        forms::labeled_text_field(
                            ui,
                            "Description",
                            &mut form.description,
                            &form.description_error,
                            !in_flight,
                        );
                        forms::price_field(ui, form, !in_flight);
                        if forms::submit_button(ui, "Save", in_flight) && form.validate() {
                            let request = form.update_request(initial);
                            if request.is_empty() {
                                *notice = Some(Notice::info("No changes to save"));
                            } else {
                                submission = Some(BackendCommand::UpdateOrder {
                                    order_id: initial.id,
                                    request,
                                });
                            }
                        }
                    });
            }
        }

        if let Some(cmd) = submission {
            // Only mark the submit in flight once the command is queued; a
            // dropped command produces no completion event to clear the flag.
            if dispatch_backend_command(&self.cmd_tx, cmd, notice) {
                *submit_in_flight = true;
            }
        } else if !open {
            *active_modal = None;
            *submit_in_flight = false;
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_ui_events();

        let mut actions = Vec::new();
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            actions.extend(panels::header_bar(ui));
            ui.add_space(4.0);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            if ui.button("Create User").clicked() {
                actions.push(PanelAction::OpenCreateUser);
            }
            ui.add_space(8.0);
            panels::notice_banner(ui, &mut self.state.notice);
            actions.extend(panels::user_list(ui, &self.state));
        });

        for action in actions {
            self.handle_action(action);
        }
        self.show_active_modal(ctx);

        // Worker events arrive between frames; poll for them promptly.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

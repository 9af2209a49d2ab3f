//! Backend worker: owns the tokio runtime and the HTTP client, executes queued
//! commands, and ships `UiEvent`s back to the render thread.
//!
//! Consistency model: every successful mutation is followed by a full
//! `list_users` refetch, so the UI only ever renders real server snapshots.

use crossbeam_channel::{Receiver, Sender};
use std::thread;

use client_core::DashboardClient;
use tracing::{debug, error, info};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{submit_failure_message, SubmitContext, UiEvent};

pub fn launch(server_url: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::FetchFailed);
                return;
            }
        };
        runtime.block_on(run_worker(server_url, cmd_rx, ui_tx));
    });
}

async fn run_worker(server_url: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    info!(server_url = %server_url, "backend worker ready");
    let client = DashboardClient::new(server_url);

    while let Ok(cmd) = cmd_rx.recv() {
        debug!(command = cmd.name(), "processing backend command");
        match cmd {
            BackendCommand::FetchUsers => {
                refresh(&client, &ui_tx).await;
            }
            BackendCommand::CreateUser { request } => {
                match client.create_user(&request).await {
                    Ok(()) => {
                        let _ = ui_tx.try_send(UiEvent::SubmitOk {
                            notice: "User created successfully".to_string(),
                        });
                        refresh(&client, &ui_tx).await;
                    }
                    Err(err) => {
                        let _ = ui_tx.try_send(UiEvent::SubmitFailed {
                            message: submit_failure_message(SubmitContext::CreateUser, &err),
                        });
                    }
                }
            }
            BackendCommand::UpdateUser { user_id, request } => {
                match client.update_user(user_id, &request).await {
                    Ok(()) => {
                        let _ = ui_tx.try_send(UiEvent::SubmitOk {
                            notice: "User updated successfully".to_string(),
                        });
                        refresh(&client, &ui_tx).await;
                    }
                    Err(err) => {
                        let _ = ui_tx.try_send(UiEvent::SubmitFailed {
                            message: submit_failure_message(SubmitContext::UpdateUser, &err),
                        });
                    }
                }
            }
            BackendCommand::DeleteUser { user_id } => match client.delete_user(user_id).await {
                Ok(()) => {
                    let _ = ui_tx.try_send(UiEvent::UserDeleted { user_id });
                    refresh(&client, &ui_tx).await;
                }
                Err(err) => {
                    error!(user_id = user_id.0, "failed to delete user: {err}");
                    let _ = ui_tx.try_send(UiEvent::UserDeleteFailed { user_id });
                }
            },
            BackendCommand::CreateOrder { user_id, request } => {
                match client.create_order(user_id, &request).await {
                    Ok(()) => {
                        let _ = ui_tx.try_send(UiEvent::SubmitOk {
                            notice: "Order created successfully".to_string(),
                        });
                        refresh(&client, &ui_tx).await;
                    }
                    Err(err) => {
                        let _ = ui_tx.try_send(UiEvent::SubmitFailed {
                            message: submit_failure_message(SubmitContext::CreateOrder, &err),
                        });
                    }
                }
            }
            BackendCommand::UpdateOrder { order_id, request } => {
                match client.update_order(order_id, &request).await {
                    Ok(()) => {
                        let _ = ui_tx.try_send(UiEvent::SubmitOk {
                            notice: "Order updated successfully".to_string(),
                        });
                        refresh(&client, &ui_tx).await;
                    }
                    Err(err) => {
                        let _ = ui_tx.try_send(UiEvent::SubmitFailed {
                            message: submit_failure_message(SubmitContext::UpdateOrder, &err),
                        });
                    }
                }
            }
            BackendCommand::DeleteOrder { order_id } => match client.delete_order(order_id).await {
                Ok(()) => {
                    let _ = ui_tx.try_send(UiEvent::OrderDeleted { order_id });
                    refresh(&client, &ui_tx).await;
                }
                Err(err) => {
                    error!(order_id = order_id.0, "failed to delete order: {err}");
                    let _ = ui_tx.try_send(UiEvent::OrderDeleteFailed { order_id });
                }
            },
        }
    }
    debug!("command queue disconnected; backend worker exiting");
}

// Fetch failures are logged only; the UI keeps its last snapshot and simply
// drops the loading indicator.
async fn refresh(client: &DashboardClient, ui_tx: &Sender<UiEvent>) {
    match client.list_users().await {
        Ok(users) => {
            let _ = ui_tx.try_send(UiEvent::UsersLoaded(users));
        }
        Err(err) => {
            error!("failed to fetch users: {err}");
            let _ = ui_tx.try_send(UiEvent::FetchFailed);
        }
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;

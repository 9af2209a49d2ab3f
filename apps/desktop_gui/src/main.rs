//! OrdersService desktop dashboard.
//!
//! The egui thread never blocks on the network: it queues commands over a
//! bounded channel to a worker thread that owns a tokio runtime, and drains
//! result events back each frame.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod backend_bridge;
mod controller;
mod ui;

#[derive(Debug, Parser)]
#[command(name = "orders-dashboard", about = "Desktop dashboard for the OrdersService API")]
struct Args {
    /// Base URL of the OrdersService backend.
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    server_url: url::Url,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    tracing::info!(server_url = %args.server_url, "starting dashboard");

    let (cmd_tx, cmd_rx) = crossbeam_channel::bounded(64);
    let (ui_tx, ui_rx) = crossbeam_channel::bounded(256);
    backend_bridge::runtime::launch(args.server_url.to_string(), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "OrdersService",
        options,
        Box::new(move |_cc| Box::new(ui::app::DashboardApp::new(cmd_tx, ui_rx))),
    )
}

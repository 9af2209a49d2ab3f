use crossbeam_channel::bounded;

use super::dispatch_backend_command;
use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::NoticeKind;

#[test]
fn queued_command_reports_success_without_a_notice() {
    let (cmd_tx, cmd_rx) = bounded(1);
    let mut notice = None;

    assert!(dispatch_backend_command(
        &cmd_tx,
        BackendCommand::FetchUsers,
        &mut notice
    ));
    assert!(notice.is_none());
    assert!(matches!(cmd_rx.try_recv(), Ok(BackendCommand::FetchUsers)));
}

#[test]
fn full_queue_reports_failure_with_an_error_notice() {
    let (cmd_tx, _cmd_rx) = bounded(1);
    cmd_tx.try_send(BackendCommand::FetchUsers).unwrap();
    let mut notice = None;

    assert!(!dispatch_backend_command(
        &cmd_tx,
        BackendCommand::FetchUsers,
        &mut notice
    ));
    assert_eq!(notice.map(|n| n.kind), Some(NoticeKind::Error));
}

#[test]
fn disconnected_worker_reports_failure_with_an_error_notice() {
    let (cmd_tx, cmd_rx) = bounded(1);
    drop(cmd_rx);
    let mut notice = None;

    assert!(!dispatch_backend_command(
        &cmd_tx,
        BackendCommand::FetchUsers,
        &mut notice
    ));
    assert_eq!(notice.map(|n| n.kind), Some(NoticeKind::Error));
}

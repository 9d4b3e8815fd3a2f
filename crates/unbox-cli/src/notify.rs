//! Desktop notification backend.
//!
//! Shells out to the platform's notification tool: `notify-send` on Linux
//! and the BSDs, `osascript` on macOS. Other platforms report the backend as
//! unavailable.

use std::io;
use std::process::Command;
use std::process::Stdio;

use unbox_core::Notification;
use unbox_core::Notifier;
use unbox_core::NotifyError;

/// Application name shown by the notification daemon.
const APP_NAME: &str = "File Extractor";

/// Sends notifications through the desktop environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopNotifier;

impl DesktopNotifier {
    pub const fn new() -> Self {
        Self
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        let mut command = build_command(notification)?;
        let program = command.get_program().to_string_lossy().into_owned();

        let status = command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|err| match err.kind() {
                io::ErrorKind::NotFound => NotifyError::Unavailable(format!("{program} not found")),
                _ => NotifyError::Delivery(format!("{program}: {err}")),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(NotifyError::Delivery(format!("{program} exited with {status}")))
        }
    }
}

#[cfg(target_os = "macos")]
fn build_command(notification: &Notification) -> Result<Command, NotifyError> {
    let script = format!(
        "display notification \"{}\" with title \"{}\" subtitle \"{APP_NAME}\"",
        escape_applescript(&notification.message),
        escape_applescript(&notification.title)
    );
    let mut command = Command::new("osascript");
    command.arg("-e").arg(script);
    Ok(command)
}

#[cfg(all(unix, not(target_os = "macos")))]
fn build_command(notification: &Notification) -> Result<Command, NotifyError> {
    let mut command = Command::new("notify-send");
    command
        .arg("--app-name")
        .arg(APP_NAME)
        .arg(&notification.title)
        .arg(&notification.message);
    Ok(command)
}

#[cfg(not(unix))]
fn build_command(_notification: &Notification) -> Result<Command, NotifyError> {
    Err(NotifyError::Unavailable(format!(
        "{APP_NAME}: desktop notifications are not supported on this platform"
    )))
}

/// Escapes a string for use inside an AppleScript string literal.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn escape_applescript(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

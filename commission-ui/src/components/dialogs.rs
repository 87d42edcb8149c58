use rfd::{MessageButtons, MessageDialog, MessageLevel};
use tracing::debug;

/// Shows a modal error message and blocks until the user dismisses it.
pub fn show_error_dialog(message: &str) {
    let result = MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Error")
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();

    debug!(?result, "error dialog dismissed");
}

//! timeportal main entrypoint.

use timeportal::run;
use timeportal::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(&e);
        if !e.is_user_error() {
            tracing::error!(error = ?e, "command failed");
        }
        std::process::exit(1);
    }
}

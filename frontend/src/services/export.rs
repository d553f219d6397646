use crate::services::logging::Logger;

/// Export the invoice by opening the browser's print dialog. The print
/// stylesheet limits the printed output to the preview region, so "print to
/// PDF" produces just the invoice.
pub fn print_invoice() {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.print() {
                Logger::error_with_component("export", &format!("Print failed: {:?}", e));
            }
        }
        None => Logger::error_with_component("export", "No window available"),
    }
}

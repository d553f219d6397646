pub mod forms;
pub mod invoice_preview;

pub use invoice_preview::InvoicePreview;

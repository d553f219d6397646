pub mod invoice_details_form;
pub mod items_form;
pub mod payment_form;
pub mod recipient_form;
pub mod sender_form;
pub mod totals_form;

pub use invoice_details_form::InvoiceDetailsForm;
pub use items_form::ItemsForm;
pub use payment_form::PaymentForm;
pub use recipient_form::RecipientForm;
pub use sender_form::SenderForm;
pub use totals_form::TotalsForm;

use shared::InvoiceField;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Build an onchange handler that wraps a text input's new value in a
/// document field edit
pub(crate) fn input_edit(
    on_edit: &Callback<InvoiceField>,
    make: fn(String) -> InvoiceField,
) -> Callback<Event> {
    let on_edit = on_edit.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_edit.emit(make(input.value()));
    })
}

/// Same as `input_edit`, for textareas
pub(crate) fn textarea_edit(
    on_edit: &Callback<InvoiceField>,
    make: fn(String) -> InvoiceField,
) -> Callback<Event> {
    let on_edit = on_edit.clone();
    Callback::from(move |e: Event| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        on_edit.emit(make(input.value()));
    })
}

/// Numeric inputs coerce unparsable text to zero here, before the value
/// reaches the computation core
pub(crate) fn number_edit(
    on_edit: &Callback<InvoiceField>,
    make: fn(f64) -> InvoiceField,
) -> Callback<Event> {
    let on_edit = on_edit.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let value = input.value().trim().parse::<f64>().unwrap_or(0.0);
        on_edit.emit(make(value));
    })
}

use shared::{Currency, InvoiceData, InvoiceField};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::{input_edit, number_edit};

#[derive(Properties, PartialEq)]
pub struct InvoiceDetailsFormProps {
    pub data: InvoiceData,
    pub on_edit: Callback<InvoiceField>,
}

#[function_component(InvoiceDetailsForm)]
pub fn invoice_details_form(props: &InvoiceDetailsFormProps) -> Html {
    let on_currency_change = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_edit.emit(InvoiceField::Currency(Currency::from_code(&select.value())));
        })
    };

    html! {
        <section class="form-card">
            <h2>{"Invoice Details"}</h2>
            <div class="form-row">
                <div class="form-group">
                    <label for="invoice-number">{"Invoice Number"}</label>
                    <input
                        type="text"
                        id="invoice-number"
                        value={props.data.invoice_number.clone()}
                        onchange={input_edit(&props.on_edit, InvoiceField::InvoiceNumber)}
                    />
                </div>
                <div class="form-group">
                    <label for="invoice-date">{"Invoice Date"}</label>
                    <input
                        type="date"
                        id="invoice-date"
                        value={props.data.invoice_date.clone()}
                        onchange={input_edit(&props.on_edit, InvoiceField::InvoiceDate)}
                    />
                </div>
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="currency">{"Currency"}</label>
                    <select id="currency" onchange={on_currency_change}>
                        <option value="USD" selected={props.data.currency == Currency::Usd}>
                            {"USD"}
                        </option>
                        <option value="IDR" selected={props.data.currency == Currency::Idr}>
                            {"IDR"}
                        </option>
                    </select>
                </div>
                <div class="form-group">
                    <label for="usd-to-idr-rate">{"USD to IDR Rate"}</label>
                    <input
                        type="number"
                        id="usd-to-idr-rate"
                        value={props.data.usd_to_idr_rate.to_string()}
                        onchange={number_edit(&props.on_edit, InvoiceField::UsdToIdrRate)}
                    />
                </div>
            </div>
        </section>
    }
}

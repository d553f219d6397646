use shared::{InvoiceData, InvoiceField};
use yew::prelude::*;

use super::number_edit;

#[derive(Properties, PartialEq)]
pub struct TotalsFormProps {
    pub data: InvoiceData,
    pub on_edit: Callback<InvoiceField>,
}

#[function_component(TotalsForm)]
pub fn totals_form(props: &TotalsFormProps) -> Html {
    let data = &props.data;

    html! {
        <section class="form-card">
            <h2>{"Totals"}</h2>
            <div class="form-group">
                <label for="tax-percentage">{"Tax Percentage (%)"}</label>
                <input
                    type="number"
                    id="tax-percentage"
                    value={data.tax_percentage.to_string()}
                    onchange={number_edit(&props.on_edit, InvoiceField::TaxPercentage)}
                />
            </div>
            <div class="totals-summary">
                <div class="totals-row">
                    <span>{"Subtotal:"}</span>
                    <span>{data.format_amount(data.subtotal())}</span>
                </div>
                <div class="totals-row">
                    <span>{format!("Tax ({}%):", data.tax_percentage)}</span>
                    <span>{data.format_amount(data.tax_amount())}</span>
                </div>
                <div class="totals-row grand">
                    <span>{"Total Payment:"}</span>
                    <span>{data.format_amount(data.grand_total())}</span>
                </div>
            </div>
        </section>
    }
}

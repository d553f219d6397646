use shared::{InvoiceData, InvoiceField};
use yew::prelude::*;

use super::input_edit;

#[derive(Properties, PartialEq)]
pub struct PaymentFormProps {
    pub data: InvoiceData,
    pub on_edit: Callback<InvoiceField>,
}

#[function_component(PaymentForm)]
pub fn payment_form(props: &PaymentFormProps) -> Html {
    html! {
        <section class="form-card">
            <h2>{"Payment Details"}</h2>
            <div class="form-group">
                <label for="bank-account">{"Bank Account Number"}</label>
                <input
                    type="text"
                    id="bank-account"
                    value={props.data.bank_account.clone()}
                    onchange={input_edit(&props.on_edit, InvoiceField::BankAccount)}
                />
            </div>
            <div class="form-group">
                <label for="account-name">{"Account Name"}</label>
                <input
                    type="text"
                    id="account-name"
                    value={props.data.account_name.clone()}
                    onchange={input_edit(&props.on_edit, InvoiceField::AccountName)}
                />
            </div>
            <div class="form-group">
                <label for="bank-name">{"Bank Name"}</label>
                <input
                    type="text"
                    id="bank-name"
                    value={props.data.bank_name.clone()}
                    onchange={input_edit(&props.on_edit, InvoiceField::BankName)}
                />
            </div>
        </section>
    }
}

use shared::{InvoiceData, InvoiceField};
use yew::prelude::*;

use super::{input_edit, textarea_edit};

#[derive(Properties, PartialEq)]
pub struct RecipientFormProps {
    pub data: InvoiceData,
    pub on_edit: Callback<InvoiceField>,
}

#[function_component(RecipientForm)]
pub fn recipient_form(props: &RecipientFormProps) -> Html {
    html! {
        <section class="form-card">
            <h2>{"To (Recipient)"}</h2>
            <div class="form-group">
                <label for="recipient-company">{"Company Name"}</label>
                <input
                    type="text"
                    id="recipient-company"
                    value={props.data.recipient_company.clone()}
                    onchange={input_edit(&props.on_edit, InvoiceField::RecipientCompany)}
                />
            </div>
            <div class="form-group">
                <label for="recipient-address">{"Address"}</label>
                <textarea
                    id="recipient-address"
                    rows="3"
                    value={props.data.recipient_address.clone()}
                    onchange={textarea_edit(&props.on_edit, InvoiceField::RecipientAddress)}
                />
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="recipient-phone">{"Phone"}</label>
                    <input
                        type="text"
                        id="recipient-phone"
                        value={props.data.recipient_phone.clone()}
                        onchange={input_edit(&props.on_edit, InvoiceField::RecipientPhone)}
                    />
                </div>
                <div class="form-group">
                    <label for="recipient-email">{"Email"}</label>
                    <input
                        type="email"
                        id="recipient-email"
                        value={props.data.recipient_email.clone()}
                        onchange={input_edit(&props.on_edit, InvoiceField::RecipientEmail)}
                    />
                </div>
            </div>
        </section>
    }
}

use shared::{InvoiceData, InvoiceField};
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use super::{input_edit, textarea_edit};

#[derive(Properties, PartialEq)]
pub struct SenderFormProps {
    pub data: InvoiceData,
    pub on_edit: Callback<InvoiceField>,
    /// Emits the raw file; the app reads it into a data URL
    pub on_logo_select: Callback<File>,
}

#[function_component(SenderForm)]
pub fn sender_form(props: &SenderFormProps) -> Html {
    let on_logo_change = {
        let on_logo_select = props.on_logo_select.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_logo_select.emit(file);
            }
        })
    };

    html! {
        <section class="form-card">
            <h2>{"From (Sender)"}</h2>
            <div class="form-group">
                <label for="sender-company">{"Company Name"}</label>
                <input
                    type="text"
                    id="sender-company"
                    value={props.data.sender_company.clone()}
                    onchange={input_edit(&props.on_edit, InvoiceField::SenderCompany)}
                />
            </div>
            <div class="form-group">
                <label for="sender-address">{"Address"}</label>
                <textarea
                    id="sender-address"
                    rows="3"
                    value={props.data.sender_address.clone()}
                    onchange={textarea_edit(&props.on_edit, InvoiceField::SenderAddress)}
                />
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="sender-phone">{"Phone"}</label>
                    <input
                        type="text"
                        id="sender-phone"
                        value={props.data.sender_phone.clone()}
                        onchange={input_edit(&props.on_edit, InvoiceField::SenderPhone)}
                    />
                </div>
                <div class="form-group">
                    <label for="sender-email">{"Email"}</label>
                    <input
                        type="email"
                        id="sender-email"
                        value={props.data.sender_email.clone()}
                        onchange={input_edit(&props.on_edit, InvoiceField::SenderEmail)}
                    />
                </div>
            </div>
            <div class="form-group">
                <label for="sender-website">{"Website"}</label>
                <input
                    type="text"
                    id="sender-website"
                    value={props.data.sender_website.clone()}
                    onchange={input_edit(&props.on_edit, InvoiceField::SenderWebsite)}
                />
            </div>
            <div class="form-group">
                <label for="sender-logo">{"Upload Logo"}</label>
                <input
                    type="file"
                    id="sender-logo"
                    accept="image/*"
                    onchange={on_logo_change}
                />
            </div>
        </section>
    }
}

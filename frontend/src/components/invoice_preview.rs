use shared::InvoiceData;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InvoicePreviewProps {
    pub data: InvoiceData,
}

/// The printable invoice, rendered from the document alone. This region is
/// what "Download PDF" prints.
#[function_component(InvoicePreview)]
pub fn invoice_preview(props: &InvoicePreviewProps) -> Html {
    let data = &props.data;
    let has_payment_details = !data.bank_account.is_empty()
        || !data.account_name.is_empty()
        || !data.bank_name.is_empty();

    html! {
        <div class="invoice-preview" id="invoice-preview">
            <div class="preview-header">
                <div>
                    {if !data.sender_logo.is_empty() {
                        html! { <img src={data.sender_logo.clone()} alt="Logo" class="preview-logo" /> }
                    } else { html! {} }}
                    <h1 class="preview-title">{"INVOICE"}</h1>
                </div>
                <div class="preview-meta">
                    <div class="preview-number">{format!("#{}", data.invoice_number)}</div>
                    <div class="preview-date">{data.invoice_date.clone()}</div>
                </div>
            </div>

            <div class="preview-parties">
                <div>
                    <h3>{"From:"}</h3>
                    <div class="party-details">
                        <div class="party-name">{data.sender_company.clone()}</div>
                        <div class="party-address">{data.sender_address.clone()}</div>
                        {optional_line("Phone", &data.sender_phone)}
                        {optional_line("Email", &data.sender_email)}
                        {optional_line("Website", &data.sender_website)}
                    </div>
                </div>
                <div>
                    <h3>{"To:"}</h3>
                    <div class="party-details">
                        <div class="party-name">{data.recipient_company.clone()}</div>
                        <div class="party-address">{data.recipient_address.clone()}</div>
                        {optional_line("Phone", &data.recipient_phone)}
                        {optional_line("Email", &data.recipient_email)}
                    </div>
                </div>
            </div>

            <table class="preview-items">
                <thead>
                    <tr>
                        <th class="left">{"Project Name"}</th>
                        <th>{"Hours"}</th>
                        <th>{"Rate"}</th>
                        <th>{"Total"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for data.items.iter().map(|item| html! {
                        <tr key={item.id.clone()}>
                            <td class="left">{item.project_name.clone()}</td>
                            <td>{item.total_hours.clone()}</td>
                            <td>{data.format_amount(item.rate_per_hour)}</td>
                            <td>{data.format_amount(item.total_price)}</td>
                        </tr>
                    })}
                </tbody>
            </table>

            <div class="preview-totals">
                <div class="totals-row">
                    <span>{"Subtotal:"}</span>
                    <span>{data.format_amount(data.subtotal())}</span>
                </div>
                <div class="totals-row">
                    <span>{format!("Tax ({}%):", data.tax_percentage)}</span>
                    <span>{data.format_amount(data.tax_amount())}</span>
                </div>
                <div class="totals-row grand">
                    <span>{"Total:"}</span>
                    <span>{data.format_amount(data.grand_total())}</span>
                </div>
            </div>

            {if has_payment_details {
                html! {
                    <div class="preview-payment">
                        <h3>{"Payment Details:"}</h3>
                        {optional_line("Bank", &data.bank_name)}
                        {optional_line("Account Name", &data.account_name)}
                        {optional_line("Account Number", &data.bank_account)}
                    </div>
                }
            } else { html! {} }}
        </div>
    }
}

fn optional_line(label: &str, value: &str) -> Html {
    if value.is_empty() {
        html! {}
    } else {
        html! { <div>{format!("{}: {}", label, value)}</div> }
    }
}

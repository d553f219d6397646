use shared::{InvoiceData, ItemField};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ItemsFormProps {
    pub data: InvoiceData,
    pub on_item_edit: Callback<(String, ItemField)>,
    pub on_add_item: Callback<()>,
    pub on_remove_item: Callback<String>,
}

#[function_component(ItemsForm)]
pub fn items_form(props: &ItemsFormProps) -> Html {
    // The remove button disappears at one item, so the form always has a row
    let show_remove = props.data.items.len() > 1;

    let on_add = {
        let on_add_item = props.on_add_item.clone();
        Callback::from(move |_: MouseEvent| on_add_item.emit(()))
    };

    html! {
        <section class="form-card">
            <h2>{"Items"}</h2>
            {for props.data.items.iter().enumerate().map(|(index, item)| {
                let id = item.id.clone();

                let on_project_change = {
                    let on_item_edit = props.on_item_edit.clone();
                    let id = id.clone();
                    Callback::from(move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        on_item_edit.emit((id.clone(), ItemField::ProjectName(input.value())));
                    })
                };

                let on_hours_change = {
                    let on_item_edit = props.on_item_edit.clone();
                    let id = id.clone();
                    Callback::from(move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        on_item_edit.emit((id.clone(), ItemField::TotalHours(input.value())));
                    })
                };

                let on_rate_change = {
                    let on_item_edit = props.on_item_edit.clone();
                    let id = id.clone();
                    Callback::from(move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        let rate = input.value().trim().parse::<f64>().unwrap_or(0.0);
                        on_item_edit.emit((id.clone(), ItemField::RatePerHour(rate)));
                    })
                };

                let on_remove = {
                    let on_remove_item = props.on_remove_item.clone();
                    let id = id.clone();
                    Callback::from(move |_: MouseEvent| on_remove_item.emit(id.clone()))
                };

                html! {
                    <div class="item-card" key={item.id.clone()}>
                        <div class="item-card-header">
                            <span class="item-label">{format!("Item {}", index + 1)}</span>
                            {if show_remove {
                                html! {
                                    <button
                                        type="button"
                                        class="btn btn-outline btn-small"
                                        onclick={on_remove}
                                    >
                                        {"Remove"}
                                    </button>
                                }
                            } else { html! {} }}
                        </div>
                        <div class="form-group">
                            <label>{"Project Name"}</label>
                            <input
                                type="text"
                                value={item.project_name.clone()}
                                onchange={on_project_change}
                            />
                        </div>
                        <div class="form-row">
                            <div class="form-group">
                                <label>{"Total Hours (hh:mm)"}</label>
                                <input
                                    type="text"
                                    placeholder="00:00"
                                    value={item.total_hours.clone()}
                                    onchange={on_hours_change}
                                />
                            </div>
                            <div class="form-group">
                                <label>{"Rate per Hour"}</label>
                                <input
                                    type="number"
                                    value={item.rate_per_hour.to_string()}
                                    onchange={on_rate_change}
                                />
                            </div>
                        </div>
                        <div class="form-group">
                            <label>{"Total Price"}</label>
                            <input
                                class="readonly"
                                readonly={true}
                                value={props.data.format_amount(item.total_price)}
                            />
                        </div>
                    </div>
                }
            })}
            <button type="button" class="btn btn-outline add-item-btn" onclick={on_add}>
                {"+ Add Item"}
            </button>
        </section>
    }
}

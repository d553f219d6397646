mod components;
mod services;

use components::forms::{
    InvoiceDetailsForm, ItemsForm, PaymentForm, RecipientForm, SenderForm, TotalsForm,
};
use components::InvoicePreview;
use gloo::file::callbacks::FileReader;
use services::export;
use services::logging::Logger;
use services::storage::{DraftStore, LocalDraftStore};
use shared::{InvoiceData, InvoiceField, ItemField, ItemIdAllocator};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    // The single invoice document; every edit clones, mutates and re-sets it
    let data = use_state(InvoiceData::default);
    let item_ids = use_mut_ref(|| ItemIdAllocator::resuming_after(&data.items));
    // Keeps the in-flight logo read alive until its callback fires
    let logo_reader = use_mut_ref(|| Option::<FileReader>::None);
    let draft_saved = use_state(|| false);

    // Load a saved draft on mount
    use_effect_with((), {
        let data = data.clone();
        let item_ids = item_ids.clone();

        move |_| {
            match LocalDraftStore.load() {
                Ok(Some(saved)) => {
                    *item_ids.borrow_mut() = ItemIdAllocator::resuming_after(&saved.items);
                    Logger::info_with_component("app", "Loaded saved draft");
                    data.set(saved);
                }
                Ok(None) => {
                    Logger::debug_with_component("app", "No saved draft found");
                }
                Err(e) => {
                    Logger::warn_with_component("app", &format!("Ignoring saved draft: {}", e));
                }
            }
            || ()
        }
    });

    let on_edit = {
        let data = data.clone();
        Callback::from(move |field: InvoiceField| {
            let mut next = (*data).clone();
            next.apply(field);
            data.set(next);
        })
    };

    let on_item_edit = {
        let data = data.clone();
        Callback::from(move |(id, field): (String, ItemField)| {
            let mut next = (*data).clone();
            next.update_item(&id, field);
            data.set(next);
        })
    };

    let on_add_item = {
        let data = data.clone();
        let item_ids = item_ids.clone();
        Callback::from(move |_: ()| {
            let mut next = (*data).clone();
            next.add_item(&mut item_ids.borrow_mut());
            data.set(next);
        })
    };

    let on_remove_item = {
        let data = data.clone();
        Callback::from(move |id: String| {
            let mut next = (*data).clone();
            next.remove_item(&id);
            data.set(next);
        })
    };

    // Read the selected logo file into a data URL for the preview
    let on_logo_select = {
        let on_edit = on_edit.clone();
        let logo_reader = logo_reader.clone();
        Callback::from(move |file: web_sys::File| {
            let on_edit = on_edit.clone();
            let file = gloo::file::File::from(file);
            let reader = gloo::file::callbacks::read_as_data_url(&file, move |result| {
                match result {
                    Ok(data_url) => on_edit.emit(InvoiceField::SenderLogo(data_url)),
                    Err(e) => Logger::error_with_component(
                        "logo-upload",
                        &format!("Failed to read logo: {}", e),
                    ),
                }
            });
            *logo_reader.borrow_mut() = Some(reader);
        })
    };

    let save_draft = {
        let data = data.clone();
        let draft_saved = draft_saved.clone();
        Callback::from(move |_: MouseEvent| {
            match LocalDraftStore.save(&data) {
                Ok(()) => {
                    draft_saved.set(true);

                    // Clear the confirmation after 3 seconds
                    let draft_saved = draft_saved.clone();
                    spawn_local(async move {
                        gloo::timers::future::TimeoutFuture::new(3000).await;
                        draft_saved.set(false);
                    });
                }
                Err(e) => {
                    Logger::error_with_component("app", &format!("Failed to save draft: {}", e));
                }
            }
        })
    };

    let download_pdf = Callback::from(|_: MouseEvent| export::print_invoice());

    html! {
        <div class="page">
            <header class="page-header">
                <h1>{"Invoice Generator"}</h1>
                <p>{"Create professional invoices with live preview"}</p>
            </header>

            <div class="layout">
                <div class="form-column">
                    <SenderForm
                        data={(*data).clone()}
                        on_edit={on_edit.clone()}
                        on_logo_select={on_logo_select}
                    />
                    <RecipientForm data={(*data).clone()} on_edit={on_edit.clone()} />
                    <PaymentForm data={(*data).clone()} on_edit={on_edit.clone()} />
                    <InvoiceDetailsForm data={(*data).clone()} on_edit={on_edit.clone()} />
                    <ItemsForm
                        data={(*data).clone()}
                        on_item_edit={on_item_edit}
                        on_add_item={on_add_item}
                        on_remove_item={on_remove_item}
                    />
                    <TotalsForm data={(*data).clone()} on_edit={on_edit.clone()} />

                    {if *draft_saved {
                        html! { <div class="form-message success">{"Draft saved successfully!"}</div> }
                    } else { html! {} }}

                    <div class="actions">
                        <button type="button" class="btn btn-outline" onclick={save_draft}>
                            {"Save Draft"}
                        </button>
                        <button type="button" class="btn btn-primary" onclick={download_pdf}>
                            {"Download PDF"}
                        </button>
                    </div>
                </div>

                <div class="preview-column">
                    <InvoicePreview data={(*data).clone()} />
                </div>
            </div>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

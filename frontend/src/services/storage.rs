//! Draft persistence for the invoice form.
//!
//! The whole document is serialized field-for-field as a JSON blob under a
//! fixed key. The store never validates the shape of persisted data; a blob
//! that no longer deserializes surfaces as an error the caller logs and
//! ignores.

use anyhow::{anyhow, Result};
use gloo::storage::{errors::StorageError, LocalStorage, Storage};
use shared::InvoiceData;

/// Local storage key the draft blob is saved under
pub const DRAFT_KEY: &str = "invoice-draft";

/// Storage abstraction for the invoice draft.
///
/// Abstracts the key-value blob store away from the form, so tests can run
/// against an in-memory store without a browser.
pub trait DraftStore {
    /// Persist the full document, replacing any previous draft
    fn save(&self, draft: &InvoiceData) -> Result<()>;

    /// Load the persisted draft; `Ok(None)` when no draft has been saved
    fn load(&self) -> Result<Option<InvoiceData>>;
}

/// Draft store backed by the browser's localStorage
pub struct LocalDraftStore;

impl DraftStore for LocalDraftStore {
    fn save(&self, draft: &InvoiceData) -> Result<()> {
        LocalStorage::set(DRAFT_KEY, draft)
            .map_err(|e| anyhow!("Failed to save draft: {}", e))
    }

    fn load(&self) -> Result<Option<InvoiceData>> {
        match LocalStorage::get::<InvoiceData>(DRAFT_KEY) {
            Ok(draft) => Ok(Some(draft)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(e) => Err(anyhow!("Failed to load draft: {}", e)),
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use shared::InvoiceField;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_store_round_trips_through_local_storage() {
        LocalStorage::delete(DRAFT_KEY);
        let store = LocalDraftStore;
        assert_eq!(store.load().unwrap(), None);

        let mut draft = InvoiceData::default();
        draft.apply(InvoiceField::SenderCompany("Acme Consulting".to_string()));
        draft.apply(InvoiceField::TaxPercentage(11.0));
        store.save(&draft).unwrap();
        assert_eq!(store.load().unwrap(), Some(draft));

        LocalStorage::delete(DRAFT_KEY);
    }

    #[wasm_bindgen_test]
    fn test_local_store_surfaces_malformed_blob_as_error() {
        LocalStorage::raw()
            .set_item(DRAFT_KEY, "not a draft")
            .unwrap();
        assert!(LocalDraftStore.load().is_err());
        LocalStorage::delete(DRAFT_KEY);
    }
}

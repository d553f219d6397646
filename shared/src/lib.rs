use serde::{Deserialize, Serialize};
use std::fmt;

/// Display currency for the invoice.
///
/// USD amounts are rendered directly; IDR amounts are converted with the
/// document's `usd_to_idr_rate` before rendering. Serialized as the plain
/// currency code so saved drafts stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "IDR")]
    Idr,
}

impl Currency {
    /// Currency code as shown in the currency selector
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Idr => "IDR",
        }
    }

    /// Parse a currency code from the selector; unknown codes fall back to USD
    pub fn from_code(code: &str) -> Currency {
        match code {
            "IDR" => Currency::Idr,
            _ => Currency::Usd,
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Usd
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One row of the invoice: work performed under a project name, with a
/// duration and an hourly rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    /// Unique identifier, stable for the lifetime of the row
    pub id: String,
    /// Free-text label, no computational role
    pub project_name: String,
    /// Raw duration text as typed, "H:MM" or "HH:MM"
    pub total_hours: String,
    /// Hourly rate in the USD-equivalent base unit
    pub rate_per_hour: f64,
    /// Derived: hours_to_decimal(total_hours) * rate_per_hour
    pub total_price: f64,
}

impl InvoiceItem {
    /// Create an empty row with the given id
    pub fn blank(id: String) -> Self {
        Self {
            id,
            project_name: String::new(),
            total_hours: String::new(),
            rate_per_hour: 0.0,
            total_price: 0.0,
        }
    }

    /// Re-derive `total_price` from the current duration text and rate.
    /// This is the only place the total is ever written.
    pub fn recompute_total(&mut self) {
        self.total_price = hours_to_decimal(&self.total_hours) * self.rate_per_hour;
    }
}

/// An edit to a single line item, carried from the form layer into
/// `InvoiceData::update_item`. Numeric fields arrive already coerced.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemField {
    ProjectName(String),
    TotalHours(String),
    RatePerHour(f64),
}

/// An edit to a document-level field, carried from the form layer into
/// `InvoiceData::apply`.
#[derive(Debug, Clone, PartialEq)]
pub enum InvoiceField {
    SenderCompany(String),
    SenderAddress(String),
    SenderPhone(String),
    SenderEmail(String),
    SenderWebsite(String),
    SenderLogo(String),
    RecipientCompany(String),
    RecipientAddress(String),
    RecipientPhone(String),
    RecipientEmail(String),
    BankAccount(String),
    AccountName(String),
    BankName(String),
    InvoiceNumber(String),
    InvoiceDate(String),
    Currency(Currency),
    UsdToIdrRate(f64),
    TaxPercentage(f64),
}

/// Allocates line-item ids for the lifetime of a document.
///
/// A monotonic counter rendered as a decimal string. `resuming_after` seeds
/// the counter past every id already present, so ids stay unique across
/// draft save/load cycles.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemIdAllocator {
    next: u64,
}

impl ItemIdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Seed the allocator past the highest numeric id in `items`
    pub fn resuming_after(items: &[InvoiceItem]) -> Self {
        let max = items
            .iter()
            .filter_map(|item| item.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self { next: max + 1 }
    }

    /// Hand out the next id. Never returns the same id twice.
    pub fn allocate(&mut self) -> String {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }
}

impl Default for ItemIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// The full invoice document. Serialized field-for-field (camelCase) as the
/// draft blob; everything outside `items`, `tax_percentage`, `currency` and
/// `usd_to_idr_rate` is opaque display text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceData {
    // Sender
    pub sender_company: String,
    pub sender_address: String,
    pub sender_phone: String,
    pub sender_email: String,
    pub sender_website: String,
    /// Logo as a data-URL string, empty when no logo is set
    pub sender_logo: String,

    // Recipient
    pub recipient_company: String,
    pub recipient_address: String,
    pub recipient_phone: String,
    pub recipient_email: String,

    // Payment details
    pub bank_account: String,
    pub account_name: String,
    pub bank_name: String,

    // Invoice details
    pub invoice_number: String,
    /// ISO date (YYYY-MM-DD)
    pub invoice_date: String,
    pub currency: Currency,
    /// Conversion rate, only meaningful when IDR is selected
    pub usd_to_idr_rate: f64,

    /// Line items; insertion order is display order
    pub items: Vec<InvoiceItem>,

    pub tax_percentage: f64,
}

impl Default for InvoiceData {
    fn default() -> Self {
        Self {
            sender_company: String::new(),
            sender_address: String::new(),
            sender_phone: String::new(),
            sender_email: String::new(),
            sender_website: String::new(),
            sender_logo: String::new(),
            recipient_company: String::new(),
            recipient_address: String::new(),
            recipient_phone: String::new(),
            recipient_email: String::new(),
            bank_account: String::new(),
            account_name: String::new(),
            bank_name: String::new(),
            invoice_number: String::new(),
            invoice_date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            currency: Currency::Usd,
            usd_to_idr_rate: 15000.0,
            items: vec![InvoiceItem::blank("1".to_string())],
            tax_percentage: 0.0,
        }
    }
}

impl InvoiceData {
    /// Apply a document-level field edit
    pub fn apply(&mut self, field: InvoiceField) {
        match field {
            InvoiceField::SenderCompany(value) => self.sender_company = value,
            InvoiceField::SenderAddress(value) => self.sender_address = value,
            InvoiceField::SenderPhone(value) => self.sender_phone = value,
            InvoiceField::SenderEmail(value) => self.sender_email = value,
            InvoiceField::SenderWebsite(value) => self.sender_website = value,
            InvoiceField::SenderLogo(value) => self.sender_logo = value,
            InvoiceField::RecipientCompany(value) => self.recipient_company = value,
            InvoiceField::RecipientAddress(value) => self.recipient_address = value,
            InvoiceField::RecipientPhone(value) => self.recipient_phone = value,
            InvoiceField::RecipientEmail(value) => self.recipient_email = value,
            InvoiceField::BankAccount(value) => self.bank_account = value,
            InvoiceField::AccountName(value) => self.account_name = value,
            InvoiceField::BankName(value) => self.bank_name = value,
            InvoiceField::InvoiceNumber(value) => self.invoice_number = value,
            InvoiceField::InvoiceDate(value) => self.invoice_date = value,
            InvoiceField::Currency(value) => self.currency = value,
            InvoiceField::UsdToIdrRate(value) => self.usd_to_idr_rate = value,
            InvoiceField::TaxPercentage(value) => self.tax_percentage = value,
        }
    }

    /// Apply an edit to the item with the matching id.
    ///
    /// A duration or rate edit re-derives that item's total from the
    /// post-update pair. No matching id is a no-op; other items are never
    /// touched.
    pub fn update_item(&mut self, id: &str, field: ItemField) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            match field {
                ItemField::ProjectName(value) => {
                    item.project_name = value;
                }
                ItemField::TotalHours(value) => {
                    item.total_hours = value;
                    item.recompute_total();
                }
                ItemField::RatePerHour(value) => {
                    item.rate_per_hour = value;
                    item.recompute_total();
                }
            }
        }
    }

    /// Append a blank item with a freshly allocated id
    pub fn add_item(&mut self, ids: &mut ItemIdAllocator) {
        self.items.push(InvoiceItem::blank(ids.allocate()));
    }

    /// Remove the item with the matching id. Removing the last remaining
    /// item is allowed here; the form hides the remove button instead.
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
    }

    /// Sum of all line totals
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(|item| item.total_price).sum()
    }

    /// Tax owed on the subtotal
    pub fn tax_amount(&self) -> f64 {
        self.subtotal() * self.tax_percentage / 100.0
    }

    /// Subtotal plus tax. Tax is owed on top of the subtotal.
    pub fn grand_total(&self) -> f64 {
        self.subtotal() + self.tax_amount()
    }

    /// Render an amount in the document's selected currency
    pub fn format_amount(&self, amount: f64) -> String {
        format_currency(amount, self.currency, self.usd_to_idr_rate)
    }
}

/// Convert duration text ("hh:mm") to decimal hours.
///
/// Total over all strings: each segment that fails to parse as a
/// non-negative integer contributes zero. A string without a colon is all
/// hours.
pub fn hours_to_decimal(text: &str) -> f64 {
    let (hours_text, minutes_text) = match text.split_once(':') {
        Some((hours, minutes)) => (hours, minutes),
        None => (text, ""),
    };
    let hours = hours_text.trim().parse::<u32>().unwrap_or(0);
    let minutes = minutes_text.trim().parse::<u32>().unwrap_or(0);
    hours as f64 + minutes as f64 / 60.0
}

/// Render a monetary amount for display.
///
/// USD renders the amount directly with two decimals. IDR multiplies by the
/// conversion rate, rounds half-away-from-zero to a whole amount, and groups
/// thousands with '.' (the id-ID convention). The rounding is pinned here so
/// output stays identical across platforms.
pub fn format_currency(amount: f64, currency: Currency, usd_to_idr_rate: f64) -> String {
    match currency {
        Currency::Usd => format!("${:.2}", amount),
        Currency::Idr => {
            let converted = (amount * usd_to_idr_rate).round() as i64;
            format!("Rp {}", group_thousands(converted))
        }
    }
}

/// Group a whole amount in threes with '.' separators
fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours_to_decimal_empty() {
        assert_eq!(hours_to_decimal(""), 0.0);
    }

    #[test]
    fn test_hours_to_decimal_hours_and_minutes() {
        assert_eq!(hours_to_decimal("2:30"), 2.5);
        assert_eq!(hours_to_decimal("10:15"), 10.25);
        assert_eq!(hours_to_decimal("0:45"), 0.75);
    }

    #[test]
    fn test_hours_to_decimal_hours_only() {
        // No colon: the whole string is the hours segment
        assert_eq!(hours_to_decimal("2"), 2.0);
    }

    #[test]
    fn test_hours_to_decimal_missing_segments() {
        assert_eq!(hours_to_decimal(":45"), 0.75);
        assert_eq!(hours_to_decimal("2:"), 2.0);
        assert_eq!(hours_to_decimal(":"), 0.0);
    }

    #[test]
    fn test_hours_to_decimal_malformed_segments_degrade_to_zero() {
        assert_eq!(hours_to_decimal("abc"), 0.0);
        assert_eq!(hours_to_decimal("abc:30"), 0.5);
        assert_eq!(hours_to_decimal("2:xyz"), 2.0);
        assert_eq!(hours_to_decimal("-2:30"), 0.5);
    }

    #[test]
    fn test_update_item_hours_recomputes_total() {
        let mut data = InvoiceData::default();
        data.update_item("1", ItemField::RatePerHour(100.0));
        data.update_item("1", ItemField::TotalHours("1:30".to_string()));
        assert_eq!(data.items[0].total_price, 150.0);
    }

    #[test]
    fn test_update_item_rate_recomputes_total() {
        let mut data = InvoiceData::default();
        data.update_item("1", ItemField::TotalHours("2:00".to_string()));
        data.update_item("1", ItemField::RatePerHour(50.0));
        assert_eq!(data.items[0].total_price, 100.0);
    }

    #[test]
    fn test_update_item_project_name_leaves_total_alone() {
        let mut data = InvoiceData::default();
        data.update_item("1", ItemField::TotalHours("1:00".to_string()));
        data.update_item("1", ItemField::RatePerHour(80.0));
        data.update_item("1", ItemField::ProjectName("Website redesign".to_string()));
        assert_eq!(data.items[0].project_name, "Website redesign");
        assert_eq!(data.items[0].total_price, 80.0);
    }

    #[test]
    fn test_update_item_unknown_id_is_noop() {
        let mut data = InvoiceData::default();
        let before = data.clone();
        data.update_item("999", ItemField::RatePerHour(100.0));
        assert_eq!(data, before);
    }

    #[test]
    fn test_update_item_only_touches_matching_item() {
        let mut data = InvoiceData::default();
        let mut ids = ItemIdAllocator::resuming_after(&data.items);
        data.add_item(&mut ids);
        data.update_item("1", ItemField::RatePerHour(100.0));
        assert_eq!(data.items[1].rate_per_hour, 0.0);
        assert_eq!(data.items[1].total_price, 0.0);
    }

    #[test]
    fn test_line_total_stays_consistent_with_inputs() {
        let mut data = InvoiceData::default();
        let edits = [
            ItemField::TotalHours("3:15".to_string()),
            ItemField::RatePerHour(40.0),
            ItemField::TotalHours("0:30".to_string()),
            ItemField::RatePerHour(90.0),
        ];
        for edit in edits {
            data.update_item("1", edit);
            let item = &data.items[0];
            assert_eq!(
                item.total_price,
                hours_to_decimal(&item.total_hours) * item.rate_per_hour
            );
        }
    }

    #[test]
    fn test_add_item_appends_blank_row() {
        let mut data = InvoiceData::default();
        let mut ids = ItemIdAllocator::resuming_after(&data.items);
        data.add_item(&mut ids);
        assert_eq!(data.items.len(), 2);
        let added = &data.items[1];
        assert_eq!(added.id, "2");
        assert_eq!(added.project_name, "");
        assert_eq!(added.total_hours, "");
        assert_eq!(added.rate_per_hour, 0.0);
        assert_eq!(added.total_price, 0.0);
    }

    #[test]
    fn test_add_item_ids_stay_unique() {
        let mut data = InvoiceData::default();
        let mut ids = ItemIdAllocator::resuming_after(&data.items);
        for _ in 0..10_000 {
            data.add_item(&mut ids);
        }
        let mut seen: std::collections::HashSet<String> =
            data.items.iter().map(|item| item.id.clone()).collect();
        assert_eq!(seen.len(), data.items.len());
        // Removing an item never frees its id for reuse
        data.remove_item("5000");
        data.add_item(&mut ids);
        assert!(seen.insert(data.items.last().unwrap().id.clone()));
    }

    #[test]
    fn test_id_allocator_resumes_past_loaded_items() {
        let items = vec![
            InvoiceItem::blank("1".to_string()),
            InvoiceItem::blank("1700000000000".to_string()),
            InvoiceItem::blank("7".to_string()),
        ];
        let mut ids = ItemIdAllocator::resuming_after(&items);
        assert_eq!(ids.allocate(), "1700000000001");
    }

    #[test]
    fn test_id_allocator_ignores_non_numeric_ids() {
        let items = vec![InvoiceItem::blank("draft-item".to_string())];
        let mut ids = ItemIdAllocator::resuming_after(&items);
        assert_eq!(ids.allocate(), "1");
    }

    #[test]
    fn test_remove_item() {
        let mut data = InvoiceData::default();
        let mut ids = ItemIdAllocator::resuming_after(&data.items);
        data.add_item(&mut ids);
        data.add_item(&mut ids);
        data.remove_item("2");
        assert_eq!(data.items.len(), 2);
        assert!(data.items.iter().all(|item| item.id != "2"));
    }

    #[test]
    fn test_remove_last_item_is_allowed() {
        let mut data = InvoiceData::default();
        data.remove_item("1");
        assert!(data.items.is_empty());
        assert_eq!(data.subtotal(), 0.0);
    }

    #[test]
    fn test_subtotal_and_tax_amount() {
        let mut data = InvoiceData::default();
        data.items = vec![
            InvoiceItem {
                total_price: 100.0,
                ..InvoiceItem::blank("1".to_string())
            },
            InvoiceItem {
                total_price: 250.5,
                ..InvoiceItem::blank("2".to_string())
            },
        ];
        data.tax_percentage = 10.0;
        assert_eq!(data.subtotal(), 350.5);
        assert_eq!(data.tax_amount(), 35.05);
    }

    #[test]
    fn test_grand_total_adds_tax_on_top() {
        let mut data = InvoiceData::default();
        data.items[0].total_price = 200.0;
        data.tax_percentage = 10.0;
        assert_eq!(data.grand_total(), 220.0);
    }

    #[test]
    fn test_zero_items_aggregates_to_zero() {
        let mut data = InvoiceData::default();
        data.items.clear();
        data.tax_percentage = 10.0;
        assert_eq!(data.subtotal(), 0.0);
        assert_eq!(data.tax_amount(), 0.0);
        assert_eq!(data.grand_total(), 0.0);
    }

    #[test]
    fn test_format_currency_usd() {
        assert_eq!(format_currency(100.0, Currency::Usd, 15000.0), "$100.00");
        assert_eq!(format_currency(0.0, Currency::Usd, 15000.0), "$0.00");
        assert_eq!(format_currency(1234.5, Currency::Usd, 15000.0), "$1234.50");
    }

    #[test]
    fn test_format_currency_idr_converts_and_groups() {
        assert_eq!(format_currency(100.0, Currency::Idr, 15000.0), "Rp 1.500.000");
        assert_eq!(format_currency(0.0, Currency::Idr, 15000.0), "Rp 0");
        assert_eq!(format_currency(1.0, Currency::Idr, 999.0), "Rp 999");
    }

    #[test]
    fn test_format_currency_idr_rounds_half_away_from_zero() {
        // 0.5 of the smallest unit rounds up, not down
        assert_eq!(format_currency(0.0001, Currency::Idr, 15000.0), "Rp 2");
        assert_eq!(format_currency(0.00003, Currency::Idr, 15000.0), "Rp 0");
    }

    #[test]
    fn test_currency_codes() {
        assert_eq!(Currency::Usd.code(), "USD");
        assert_eq!(Currency::Idr.to_string(), "IDR");
        assert_eq!(Currency::from_code("IDR"), Currency::Idr);
        assert_eq!(Currency::from_code("USD"), Currency::Usd);
        assert_eq!(Currency::from_code("???"), Currency::Usd);
    }

    #[test]
    fn test_draft_blob_uses_camel_case_fields() {
        let data = InvoiceData::default();
        let blob = serde_json::to_string(&data).unwrap();
        assert!(blob.contains("\"senderCompany\""));
        assert!(blob.contains("\"usdToIdrRate\""));
        assert!(blob.contains("\"projectName\""));
        assert!(blob.contains("\"taxPercentage\""));
        assert!(blob.contains("\"currency\":\"USD\""));
        let restored: InvoiceData = serde_json::from_str(&blob).unwrap();
        assert_eq!(restored, data);
    }

    #[test]
    fn test_end_to_end_invoice_scenario() {
        let mut data = InvoiceData::default();
        let mut ids = ItemIdAllocator::resuming_after(&data.items);

        data.update_item("1", ItemField::TotalHours("1:30".to_string()));
        data.update_item("1", ItemField::RatePerHour(100.0));
        assert_eq!(data.items[0].total_price, 150.0);

        data.add_item(&mut ids);
        let second_id = data.items[1].id.clone();
        data.update_item(&second_id, ItemField::TotalHours("2:00".to_string()));
        data.update_item(&second_id, ItemField::RatePerHour(50.0));
        assert_eq!(data.items[1].total_price, 100.0);

        data.apply(InvoiceField::TaxPercentage(8.0));
        assert_eq!(data.subtotal(), 250.0);
        assert_eq!(data.tax_amount(), 20.0);
        assert_eq!(data.grand_total(), 270.0);

        assert_eq!(data.format_amount(data.grand_total()), "$270.00");
        data.apply(InvoiceField::Currency(Currency::Idr));
        assert_eq!(data.format_amount(data.grand_total()), "Rp 4.050.000");
    }
}

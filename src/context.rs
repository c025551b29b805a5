//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::Receipt;
use crate::search::filter_receipts;
use crate::store::{ReceiptStateStoreFields, ReceiptStore};

/// Page section picked from the sidebar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    Receipts,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Home, Section::Receipts];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Receipts => "Receipts",
        }
    }
}

/// Active section and auto-expanded receipt
#[derive(Clone, Copy)]
pub struct ContentContext {
    /// Section shown in the main column - read
    pub current: ReadSignal<Section>,
    /// Section shown in the main column - write
    set_current: WriteSignal<Section>,
    /// Receipt rendered expanded (None = all compact) - read
    pub selected_receipt: ReadSignal<Option<u32>>,
    /// Receipt rendered expanded (None = all compact) - write
    set_selected_receipt: WriteSignal<Option<u32>>,
}

impl ContentContext {
    pub fn new(
        current: (ReadSignal<Section>, WriteSignal<Section>),
        selected_receipt: (ReadSignal<Option<u32>>, WriteSignal<Option<u32>>),
    ) -> Self {
        Self {
            current: current.0,
            set_current: current.1,
            selected_receipt: selected_receipt.0,
            set_selected_receipt: selected_receipt.1,
        }
    }

    pub fn show(&self, section: Section) {
        self.set_current.set(section);
    }

    /// Expand a receipt, or collapse it if it is already expanded
    pub fn toggle_receipt(&self, receipt_id: u32) {
        self.set_selected_receipt
            .update(|selected| *selected = if *selected == Some(receipt_id) { None } else { Some(receipt_id) });
    }

    /// Jump to the receipts section with this receipt expanded
    pub fn open_receipt(&self, receipt_id: u32) {
        self.set_current.set(Section::Receipts);
        self.set_selected_receipt.set(Some(receipt_id));
    }

    pub fn is_expanded(&self, receipt_id: u32) -> bool {
        self.selected_receipt.get() == Some(receipt_id)
    }
}

/// Search query, filtered results and refresh requests
#[derive(Clone, Copy)]
pub struct SearchContext {
    /// Raw text in the search box - read
    pub query: ReadSignal<String>,
    /// Raw text in the search box - write
    set_query: WriteSignal<String>,
    /// Trigger to re-fetch receipts from backend - read
    pub refresh_trigger: ReadSignal<u32>,
    /// Trigger to re-fetch receipts from backend - write
    set_refresh_trigger: WriteSignal<u32>,
    /// Cached receipts filtered by the query
    pub results: Memo<Vec<Receipt>>,
    store: ReceiptStore,
}

impl SearchContext {
    pub fn new(
        query: (ReadSignal<String>, WriteSignal<String>),
        refresh_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        store: ReceiptStore,
    ) -> Self {
        let query_read = query.0;
        let results = Memo::new(move |_| filter_receipts(&store.receipts().get(), &query_read.get()));
        Self {
            query: query.0,
            set_query: query.1,
            refresh_trigger: refresh_trigger.0,
            set_refresh_trigger: refresh_trigger.1,
            results,
            store,
        }
    }

    pub fn set_query(&self, query: String) {
        self.set_query.set(query);
    }

    pub fn clear(&self) {
        self.set_query.set(String::new());
    }

    pub fn has_query(&self) -> bool {
        !self.query.get().trim().is_empty()
    }

    /// Request a re-fetch of receipts
    pub fn refresh(&self) {
        self.set_refresh_trigger.update(|v| *v += 1);
    }

    pub fn is_loading(&self) -> bool {
        self.store.is_loading().get()
    }

    /// Every cached receipt, ignoring the query
    pub fn all_receipts(&self) -> Vec<Receipt> {
        self.store.receipts().get()
    }
}

pub fn use_content() -> ContentContext {
    expect_context::<ContentContext>()
}

pub fn use_search() -> SearchContext {
    expect_context::<SearchContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{store_set_receipts, ReceiptState};
    use reactive_stores::Store;

    fn make_receipt(id: u32, name: &str) -> Receipt {
        Receipt {
            id,
            receipt_code: format!("code{}", id),
            transaction_number: None,
            establishment_name: name.to_string(),
            transaction_date_time: String::new(),
            transaction_tax: 0.0,
            transaction_tip: 0.0,
            transaction_total: 10.0,
            is_owner: false,
            items: Vec::new(),
        }
    }

    fn make_content() -> ContentContext {
        ContentContext::new(signal(Section::Home), signal(None))
    }

    fn make_search() -> (SearchContext, ReceiptStore) {
        let store: ReceiptStore = Store::new(ReceiptState::default());
        let search = SearchContext::new(signal(String::new()), signal(0u32), store);
        (search, store)
    }

    #[test]
    fn test_toggle_receipt_expands_then_collapses() {
        Owner::new().with(|| {
            let content = make_content();
            content.toggle_receipt(7);
            assert_eq!(content.selected_receipt.get_untracked(), Some(7));

            content.toggle_receipt(7);
            assert_eq!(content.selected_receipt.get_untracked(), None);
        });
    }

    #[test]
    fn test_toggle_other_receipt_switches_expansion() {
        Owner::new().with(|| {
            let content = make_content();
            content.toggle_receipt(1);
            content.toggle_receipt(2);
            assert_eq!(content.selected_receipt.get_untracked(), Some(2));
        });
    }

    #[test]
    fn test_open_receipt_jumps_to_receipts() {
        Owner::new().with(|| {
            let content = make_content();
            assert_eq!(content.current.get_untracked(), Section::Home);

            content.open_receipt(3);
            assert_eq!(content.current.get_untracked(), Section::Receipts);
            assert_eq!(content.selected_receipt.get_untracked(), Some(3));

            // opening an already expanded receipt keeps it open
            content.open_receipt(3);
            assert_eq!(content.selected_receipt.get_untracked(), Some(3));
        });
    }

    #[test]
    fn test_refresh_bumps_trigger() {
        Owner::new().with(|| {
            let (search, _) = make_search();
            assert_eq!(search.refresh_trigger.get_untracked(), 0);
            search.refresh();
            search.refresh();
            assert_eq!(search.refresh_trigger.get_untracked(), 2);
        });
    }

    #[test]
    fn test_results_follow_query_and_store() {
        Owner::new().with(|| {
            let (search, store) = make_search();
            assert!(search.results.get_untracked().is_empty());

            store_set_receipts(&store, vec![make_receipt(1, "Subway"), make_receipt(2, "Target")]);
            assert_eq!(search.results.get_untracked().len(), 2);

            search.set_query("sub".to_string());
            let ids: Vec<u32> = search.results.get_untracked().iter().map(|r| r.id).collect();
            assert_eq!(ids, vec![1]);

            store_set_receipts(&store, vec![make_receipt(3, "Subway Express"), make_receipt(4, "Costco")]);
            let ids: Vec<u32> = search.results.get_untracked().iter().map(|r| r.id).collect();
            assert_eq!(ids, vec![3]);
        });
    }

    #[test]
    fn test_whitespace_query_returns_every_receipt() {
        Owner::new().with(|| {
            let (search, store) = make_search();
            let receipts = vec![make_receipt(1, "Subway"), make_receipt(2, "Target")];
            store_set_receipts(&store, receipts.clone());

            search.set_query("   ".to_string());
            assert!(!search.has_query());
            assert_eq!(search.results.get_untracked(), receipts);
        });
    }

    #[test]
    fn test_clear_empties_query() {
        Owner::new().with(|| {
            let (search, store) = make_search();
            store_set_receipts(&store, vec![make_receipt(1, "Subway"), make_receipt(2, "Target")]);

            search.set_query("target".to_string());
            assert!(search.has_query());
            assert_eq!(search.results.get_untracked().len(), 1);

            search.clear();
            assert_eq!(search.query.get_untracked(), "");
            assert!(!search.has_query());
            assert_eq!(search.results.get_untracked().len(), 2);
        });
    }
}

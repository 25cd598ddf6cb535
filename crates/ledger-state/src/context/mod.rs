//! Selected-ledger context shared by every view.

mod store;
mod types;

pub use store::{LedgerContextStore, LEDGER_STORE_KEY, LEDGER_STORE_VERSION};
pub use types::SelectedLedger;

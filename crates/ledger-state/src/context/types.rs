//! Ledger context data types and their persisted shape.

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, Result};

/// Identity and display attributes of the ledger being viewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedLedger {
    pub ledger_id: String,
    pub ledger_name: String,
    pub currency_symbol: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl SelectedLedger {
    pub fn new(
        ledger_id: impl Into<String>,
        ledger_name: impl Into<String>,
        currency_symbol: impl Into<String>,
    ) -> Self {
        Self {
            ledger_id: ledger_id.into(),
            ledger_name: ledger_name.into(),
            currency_symbol: currency_symbol.into(),
            description: None,
            notes: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Check that the required fields are present.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Validation` naming the first blank field.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("ledgerId", &self.ledger_id),
            ("ledgerName", &self.ledger_name),
            ("currencySymbol", &self.currency_symbol),
        ] {
            if value.trim().is_empty() {
                return Err(LedgerError::Validation(format!("{} must not be empty", field)));
            }
        }
        Ok(())
    }
}

/// Fields written to session storage. Everything is nullable on disk; the
/// all-null state means "no ledger selected".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PersistedContext {
    #[serde(default)]
    pub ledger_id: Option<String>,
    #[serde(default)]
    pub ledger_name: Option<String>,
    #[serde(default)]
    pub currency_symbol: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<Option<&SelectedLedger>> for PersistedContext {
    fn from(ledger: Option<&SelectedLedger>) -> Self {
        match ledger {
            None => Self::default(),
            Some(ledger) => Self {
                ledger_id: Some(ledger.ledger_id.clone()),
                ledger_name: Some(ledger.ledger_name.clone()),
                currency_symbol: Some(ledger.currency_symbol.clone()),
                description: ledger.description.clone(),
                notes: ledger.notes.clone(),
            },
        }
    }
}

impl PersistedContext {
    /// Rebuild the in-memory value, rejecting partial states.
    pub fn into_selected(self) -> Result<Option<SelectedLedger>> {
        match (self.ledger_id, self.ledger_name, self.currency_symbol) {
            (None, None, None) => Ok(None),
            (Some(ledger_id), Some(ledger_name), Some(currency_symbol)) => {
                let ledger = SelectedLedger {
                    ledger_id,
                    ledger_name,
                    currency_symbol,
                    description: self.description,
                    notes: self.notes,
                };
                ledger.validate()?;
                Ok(Some(ledger))
            }
            _ => Err(LedgerError::Validation(
                "persisted ledger context is partially set".to_string(),
            )),
        }
    }
}

/// Versioned wrapper around the persisted fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct PersistedEnvelope {
    pub state: PersistedContext,
    pub version: u32,
}

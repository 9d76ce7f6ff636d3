//! Trade domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;
use crate::fx::normalize_currency_code;
use crate::{Error, Result};

/// One journaled trade.
///
/// `converted_amount` is the home-currency value computed when the trade was
/// recorded (or when its currency or amount was last edited). It is never
/// recomputed on a rate refresh.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    pub date: NaiveDate,
    pub currency: String,
    pub amount: Decimal,
    pub converted_amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Set when no rate was available at entry time.
    #[serde(default, skip_serializing_if = "is_false")]
    pub conversion_unavailable: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Trade {
    /// Fresh, time-ordered identifier.
    pub fn generate_id() -> String {
        Uuid::now_v7().to_string()
    }

    pub fn is_win(&self) -> bool {
        self.converted_amount > Decimal::ZERO
    }

    pub fn is_loss(&self) -> bool {
        self.converted_amount < Decimal::ZERO
    }
}

/// Input model for recording a trade.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrade {
    pub date: NaiveDate,
    pub currency: String,
    pub amount: Decimal,
    #[serde(default)]
    pub note: Option<String>,
}

impl NewTrade {
    /// Normalizes the currency code and note.
    pub fn validate(self) -> Result<Self> {
        Ok(Self {
            date: self.date,
            currency: validate_currency(&self.currency)?,
            amount: self.amount,
            note: normalize_note(self.note),
        })
    }
}

/// Partial edit of a trade. Absent fields are left unchanged; an empty note
/// clears the note.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeUpdate {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub note: Option<String>,
}

impl TradeUpdate {
    pub fn validate(self) -> Result<Self> {
        let currency = match self.currency {
            Some(code) => Some(validate_currency(&code)?),
            None => None,
        };
        Ok(Self { currency, ..self })
    }
}

fn validate_currency(code: &str) -> Result<String> {
    if code.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "currency".to_string(),
        )));
    }
    normalize_currency_code(code)
        .map_err(|_| Error::Validation(ValidationError::InvalidCurrency(code.to_string())))
}

/// Empty or whitespace-only notes are stored as absent.
pub fn normalize_note(note: Option<String>) -> Option<String> {
    note.and_then(|n| {
        let trimmed = n.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

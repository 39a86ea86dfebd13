use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date_string;
use crate::error::PayoutError;
use crate::instruction::PayoutInstruction;

/// Server-assigned batch state. The service moves batches through these
/// states on its side; clients only ever read the value back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoutStatus {
    New,
    Funded,
    Processing,
    Complete,
    Failed,
    Cancelled,
}

impl PayoutStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayoutStatus::New => "new",
            PayoutStatus::Funded => "funded",
            PayoutStatus::Processing => "processing",
            PayoutStatus::Complete => "complete",
            PayoutStatus::Failed => "failed",
            PayoutStatus::Cancelled => "cancelled",
        }
    }
}

/// How the service converts batch amounts to the settlement currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PricingMethod {
    #[serde(rename = "manual_2")]
    Manual2,
    /// 24-hour volume-weighted average price.
    #[default]
    #[serde(rename = "vwap_24hr")]
    Vwap24Hr,
}

impl PricingMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingMethod::Manual2 => "manual_2",
            PricingMethod::Vwap24Hr => "vwap_24hr",
        }
    }
}

/// A batch of payout instructions submitted under a single effective
/// date and funding reference.
///
/// The struct maps field-for-field onto the wire payloads of the payout
/// endpoint: request fields serialize according to the per-field policy
/// below, response fields are only ever parsed and are never written
/// back out. Instances are plain owned values; the crate does no I/O.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutBatch {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub guid: Option<String>,

    /// Resource token returned when the batch is created; required by
    /// the service for follow-up requests on the same batch.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub token: Option<String>,

    /// Date the batch is scheduled for processing. The service pins the
    /// time of day itself; only the date travels on the wire.
    #[serde(rename = "effectiveDate", with = "date_string::option", default)]
    pub effective_date: Option<NaiveDate>,

    /// Merchant-provided data, sent even when empty.
    #[serde(default)]
    pub reference: String,

    /// Merchant-provided id used to match funding payments to this
    /// batch, sent even when empty.
    #[serde(rename = "bankTransferId", default)]
    pub bank_transfer_id: String,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub instructions: Vec<PayoutInstruction>,

    /// Sum of the instruction amounts. Snapshotted when the batch is
    /// built with instructions; callers that mutate `instructions`
    /// afterwards must call `recompute_amount` themselves.
    #[serde(default)]
    pub amount: f64,

    #[serde(default)]
    currency: String,

    #[serde(
        rename = "pricingMethod",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub pricing_method: Option<PricingMethod>,

    #[serde(
        rename = "notificationEmail",
        skip_serializing_if = "String::is_empty",
        default
    )]
    pub notification_email: String,

    #[serde(
        rename = "notificationURL",
        skip_serializing_if = "String::is_empty",
        default
    )]
    pub notification_url: String,

    // Response fields; populated when parsing a server payload, never
    // sent back in requests.
    #[serde(skip_serializing, default)]
    pub id: Option<String>,

    #[serde(skip_serializing, default)]
    pub account: Option<String>,

    #[serde(skip_serializing, default)]
    pub status: Option<PayoutStatus>,

    #[serde(skip_serializing, default)]
    pub btc: f64,

    #[serde(
        rename = "requestDate",
        skip_serializing,
        deserialize_with = "date_string::option::deserialize",
        default
    )]
    pub request_date: Option<NaiveDate>,

    #[serde(rename = "percentFee", skip_serializing, default)]
    pub percent_fee: f64,

    #[serde(skip_serializing, default)]
    pub fee: f64,

    #[serde(rename = "depositTotal", skip_serializing, default)]
    pub deposit_total: f64,

    #[serde(rename = "supportPhone", skip_serializing, default)]
    pub support_phone: Option<String>,
}

impl Default for PayoutBatch {
    fn default() -> Self {
        Self {
            guid: None,
            token: None,
            effective_date: None,
            reference: String::new(),
            bank_transfer_id: String::new(),
            instructions: Vec::new(),
            amount: 0.0,
            currency: "USD".to_string(),
            pricing_method: Some(PricingMethod::Vwap24Hr),
            notification_email: String::new(),
            notification_url: String::new(),
            id: None,
            account: None,
            status: None,
            btc: 0.0,
            request_date: None,
            percent_fee: 0.0,
            fee: 0.0,
            deposit_total: 0.0,
            support_phone: None,
        }
    }
}

impl PayoutBatch {
    /// Creates an empty batch, to be populated field by field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an instruction-bearing request batch.
    ///
    /// `amount` is computed here as the sum of the instruction amounts
    /// and is not recomputed if the instruction list is mutated later.
    pub fn with_instructions(
        currency: String,
        effective_date: NaiveDate,
        bank_transfer_id: String,
        reference: String,
        instructions: Vec<PayoutInstruction>,
    ) -> Result<Self, PayoutError> {
        let mut batch = Self::new();
        batch.set_currency(currency)?;
        batch.effective_date = Some(effective_date);
        batch.bank_transfer_id = bank_transfer_id;
        batch.reference = reference;
        batch.instructions = instructions;
        batch.recompute_amount();
        Ok(batch)
    }

    /// The last successfully stored currency code.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Stores a currency code, rejecting anything that is not exactly
    /// three characters. The previously stored value is untouched on
    /// failure. The code is stored verbatim: no case normalization, no
    /// ISO 4217 lookup.
    pub fn set_currency(&mut self, code: String) -> Result<(), PayoutError> {
        if code.chars().count() != 3 {
            return Err(PayoutError::ValidationError(
                "currency code must be exactly three characters".to_string(),
            ));
        }
        self.currency = code;
        Ok(())
    }

    /// Re-snapshots `amount` from the current instruction list.
    pub fn recompute_amount(&mut self) {
        self.amount = self.instructions.iter().map(|i| i.amount).sum();
    }
}

use serde::{Deserialize, Serialize};

/// A single recipient/amount pair within a payout batch.
///
/// Instructions are built by the caller and treated as immutable once
/// placed in a batch; the batch amount is computed from them at
/// construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutInstruction {
    pub amount: f64,

    /// Recipient deposit address.
    pub address: String,

    /// Merchant-provided display label for the recipient.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub label: String,

    // Response fields; populated when parsing a server payload, never
    // sent back in requests.
    #[serde(skip_serializing, default)]
    pub id: Option<String>,

    #[serde(skip_serializing, default)]
    pub status: Option<String>,
}

impl PayoutInstruction {
    pub fn new(amount: f64, address: String) -> Self {
        Self {
            amount,
            address,
            label: String::new(),
            id: None,
            status: None,
        }
    }
}

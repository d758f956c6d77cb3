use serde::{Deserialize, Serialize};

use quill_accounting::{AccountId, PaymentTermId};
use quill_core::{Entity, RecordId, ValueObject};

/// Party identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartyId(pub RecordId);

impl PartyId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for PartyId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// What an address is used for. One address may carry several purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressPurpose {
    Invoice,
    Delivery,
}

/// Postal address of a party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postal_code: Option<String>,
    pub country: String,
    pub purposes: Vec<AddressPurpose>,
}

impl Address {
    pub fn serves(&self, purpose: AddressPurpose) -> bool {
        self.purposes.contains(&purpose)
    }
}

impl ValueObject for Address {}

/// Party record view (customer or supplier side of an invoice).
///
/// All account and payment-term fields are optional: a party may be
/// configured for only one invoice direction, or not at all. Defaulting
/// surfaces the gaps as errors; this view just reports what is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub id: PartyId,
    pub name: String,
    /// Account invoices to this party as a customer post against.
    pub receivable_account: Option<AccountId>,
    /// Account invoices from this party as a supplier post against.
    pub payable_account: Option<AccountId>,
    pub customer_payment_term: Option<PaymentTermId>,
    pub supplier_payment_term: Option<PaymentTermId>,
    pub addresses: Vec<Address>,
    /// Preferred language tag (e.g. "en"). Read by external reporting;
    /// not consumed by defaulting.
    pub language: Option<String>,
}

impl Party {
    /// First address serving the given purpose, in configured order.
    pub fn address_for(&self, purpose: AddressPurpose) -> Option<&Address> {
        self.addresses.iter().find(|a| a.serves(purpose))
    }
}

impl Entity for Party {
    type Id = PartyId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

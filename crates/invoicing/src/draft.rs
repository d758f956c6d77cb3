use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use quill_accounting::{AccountId, CurrencyCode, JournalId, JournalKind, PaymentTermId, TaxId};
use quill_core::CompanyId;
use quill_parties::{Address, PartyId};
use quill_products::{ProductId, UnitOfMeasureId};

/// Whether an invoice is issued to a customer (outgoing) or received from
/// a supplier (incoming).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Outgoing,
    Incoming,
}

impl Direction {
    /// Journal classification invoices of this direction post against.
    pub fn journal_kind(self) -> JournalKind {
        match self {
            Direction::Outgoing => JournalKind::Revenue,
            Direction::Incoming => JournalKind::Expense,
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Direction::Outgoing => "outgoing",
            Direction::Incoming => "incoming",
        };
        f.write_str(s)
    }
}

/// Draft invoice header, fully defaulted but not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftInvoice {
    pub direction: Direction,
    pub company: CompanyId,
    pub currency: CurrencyCode,
    pub currency_date: NaiveDate,
    pub journal: JournalId,
    pub account: AccountId,
    pub payment_term: PaymentTermId,
    pub party: PartyId,
    pub invoice_address: Option<Address>,
    pub description: Option<String>,
}

/// Row marker distinguishing billable lines from presentation rows.
///
/// Defaulting only ever produces `Line`; the other kinds exist in the
/// external schema and are composed by callers directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Line,
    Title,
    Comment,
    Subtotal,
}

/// Draft invoice line, detached until the caller attaches and renumbers it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftInvoiceLine {
    pub kind: LineKind,
    /// Always 1 on a freshly defaulted line; renumbering when composing
    /// several lines is the caller's job.
    pub sequence: u32,
    pub product: ProductId,
    /// Taken verbatim from the caller; rounding and unit conversion are
    /// delegated to the external recomputation hook.
    pub quantity: Decimal,
    pub unit: UnitOfMeasureId,
    /// Price in smallest currency unit (e.g., cents).
    pub unit_price: u64,
    pub account: AccountId,
    pub taxes: Vec<TaxId>,
    pub description: Option<String>,
    pub note: Option<String>,
}

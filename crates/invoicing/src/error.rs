//! Defaulting error taxonomy.
//!
//! Every variant is a master-data gap the caller must fix before invoicing
//! can proceed. Nothing here is retried or recovered locally; errors carry
//! the identity needed for a user-facing message.

use thiserror::Error;

use quill_accounting::JournalKind;
use quill_parties::PartyId;
use quill_products::ProductId;

use crate::draft::Direction;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DefaultingError {
    /// The party lacks the account required for the invoice direction
    /// (receivable for outgoing, payable for incoming).
    #[error("party {party} has no account configured for {direction} invoices")]
    MissingAccount { party: PartyId, direction: Direction },

    /// The party has no payment term configured and no active payment term
    /// exists system-wide.
    #[error("no active payment term configured")]
    MissingPaymentTerm,

    /// No journal of the required accounting kind exists.
    #[error("no journal of kind {kind} configured")]
    MissingJournal { kind: JournalKind },

    /// The product has neither a direct revenue account nor one inherited
    /// from its category.
    #[error("product {product} has no revenue account (direct or via category)")]
    MissingRevenueAccount { product: ProductId },

    /// The product has no expense account.
    #[error("product {product} has no expense account")]
    MissingExpenseAccount { product: ProductId },

    /// No registered unit of measure matches the requested symbol.
    #[error("unknown unit of measure {0:?}")]
    UnknownUnitOfMeasure(String),
}

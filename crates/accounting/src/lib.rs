//! Accounting master data (read-only views).
//!
//! Record views of accounts, journals, payment terms, taxes and currency
//! codes owned by the external framework. This crate holds no business
//! process of its own; the invoicing defaulters select from these records.

pub mod account;
pub mod currency;
pub mod journal;
pub mod tax;
pub mod terms;

pub use account::{Account, AccountId, AccountKind};
pub use currency::CurrencyCode;
pub use journal::{Journal, JournalId, JournalKind};
pub use tax::{Tax, TaxId};
pub use terms::{PaymentTerm, PaymentTermId};

//! Invoice defaulting helpers.
//!
//! Pre-populates draft invoices and invoice lines from a party and a
//! product, deriving journal, account, payment-term, currency, unit and
//! tax defaults. Drafts are in-memory only; persisting them (and the
//! transaction they run inside) belongs to the caller.

pub mod defaults;
pub mod draft;
pub mod error;
pub mod lookup;
pub mod memory;

pub use defaults::{build_line, invoice_defaults, line_defaults, LineSpec};
pub use draft::{Direction, DraftInvoice, DraftInvoiceLine, LineKind};
pub use error::DefaultingError;
pub use lookup::{LineSeed, ListPriceOnly, MasterData, OperatingContext, PricingHook};
pub use memory::{FixedContext, InMemoryMasterData};

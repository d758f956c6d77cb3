//! Seams to the surrounding framework.
//!
//! Defaulting runs inside a transaction the caller owns and reads master
//! data through these traits. Lookups are assumed to be fast indexed reads,
//! so everything here is synchronous.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use quill_accounting::{CurrencyCode, Journal, JournalKind, PaymentTerm, TaxId};
use quill_core::CompanyId;
use quill_parties::PartyId;
use quill_products::{CategoryId, Product, ProductCategory, UnitOfMeasure};

use crate::draft::Direction;

/// The active operating context: which company is transacting, in what
/// currency, on what date, in what language.
pub trait OperatingContext {
    fn company(&self) -> CompanyId;
    fn currency(&self) -> CurrencyCode;
    fn today(&self) -> NaiveDate;
    /// Current language tag (e.g. "en"). Translation itself is external.
    fn language(&self) -> &str;
}

/// Read-only master-data lookups the defaulters depend on.
pub trait MasterData {
    /// First journal of the given kind, if any exists.
    fn journal_by_kind(&self, kind: JournalKind) -> Option<Journal>;

    /// System-wide fallback payment term: the first active one.
    fn first_active_payment_term(&self) -> Option<PaymentTerm>;

    /// Resolve a unit-of-measure symbol against the registered units.
    fn unit_by_symbol(&self, symbol: &str) -> Option<UnitOfMeasure>;

    fn category(&self, id: CategoryId) -> Option<ProductCategory>;
}

/// Values an external pricing rule pre-populates on a line before the
/// list-price fallback runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSeed {
    /// Overrides the product's list price when set.
    pub unit_price: Option<u64>,
    /// Taxes already decided by the rule; the product's customer taxes are
    /// appended after these, never replacing them.
    pub taxes: Vec<TaxId>,
}

/// The "recompute on product change" hook of the surrounding framework.
///
/// Party-specific price lists and tax rules plug in here; defaulting only
/// applies its fallbacks to whatever the hook left unset.
pub trait PricingHook {
    fn on_product_change(
        &self,
        party: PartyId,
        product: &Product,
        quantity: Decimal,
        direction: Direction,
    ) -> LineSeed;
}

/// Hook implementation with no pricing rules: every line falls back to the
/// product's list price.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListPriceOnly;

impl PricingHook for ListPriceOnly {
    fn on_product_change(
        &self,
        _party: PartyId,
        _product: &Product,
        _quantity: Decimal,
        _direction: Direction,
    ) -> LineSeed {
        LineSeed::default()
    }
}

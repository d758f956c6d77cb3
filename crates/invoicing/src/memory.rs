//! In-memory master data, usable as a test double by downstream crates.

use std::collections::HashMap;

use chrono::NaiveDate;

use quill_accounting::{CurrencyCode, Journal, JournalKind, PaymentTerm};
use quill_core::CompanyId;
use quill_products::{CategoryId, ProductCategory, UnitOfMeasure};

use crate::lookup::{MasterData, OperatingContext};

/// `MasterData` backed by plain vectors, preserving insertion order for the
/// "first match" lookups.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMasterData {
    journals: Vec<Journal>,
    payment_terms: Vec<PaymentTerm>,
    units: Vec<UnitOfMeasure>,
    categories: HashMap<CategoryId, ProductCategory>,
}

impl InMemoryMasterData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_journal(mut self, journal: Journal) -> Self {
        self.journals.push(journal);
        self
    }

    pub fn with_payment_term(mut self, term: PaymentTerm) -> Self {
        self.payment_terms.push(term);
        self
    }

    pub fn with_unit(mut self, unit: UnitOfMeasure) -> Self {
        self.units.push(unit);
        self
    }

    pub fn with_category(mut self, category: ProductCategory) -> Self {
        self.categories.insert(category.id, category);
        self
    }
}

impl MasterData for InMemoryMasterData {
    fn journal_by_kind(&self, kind: JournalKind) -> Option<Journal> {
        self.journals.iter().find(|j| j.kind == kind).cloned()
    }

    fn first_active_payment_term(&self) -> Option<PaymentTerm> {
        self.payment_terms.iter().find(|t| t.active).cloned()
    }

    fn unit_by_symbol(&self, symbol: &str) -> Option<UnitOfMeasure> {
        self.units.iter().find(|u| u.symbol == symbol).cloned()
    }

    fn category(&self, id: CategoryId) -> Option<ProductCategory> {
        self.categories.get(&id).cloned()
    }
}

/// Operating context with fixed values, for tests and single-company
/// callers.
#[derive(Debug, Clone)]
pub struct FixedContext {
    pub company: CompanyId,
    pub currency: CurrencyCode,
    pub today: NaiveDate,
    pub language: String,
}

impl FixedContext {
    pub fn new(company: CompanyId, currency: CurrencyCode, today: NaiveDate) -> Self {
        Self {
            company,
            currency,
            today,
            language: "en".to_string(),
        }
    }
}

impl OperatingContext for FixedContext {
    fn company(&self) -> CompanyId {
        self.company
    }

    fn currency(&self) -> CurrencyCode {
        self.currency.clone()
    }

    fn today(&self) -> NaiveDate {
        self.today
    }

    fn language(&self) -> &str {
        &self.language
    }
}

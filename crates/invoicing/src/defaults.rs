//! The two defaulting operations.
//!
//! Both are pure over the supplied records and lookups: they construct a
//! draft or fail, mutate nothing, and leave persistence to the caller.

use rust_decimal::Decimal;
use tracing::debug;

use quill_parties::{AddressPurpose, Party};
use quill_products::Product;

use crate::draft::{Direction, DraftInvoice, DraftInvoiceLine, LineKind};
use crate::error::DefaultingError;
use crate::lookup::{MasterData, OperatingContext, PricingHook};

/// Optional inputs to line defaulting, bundled so call sites stay readable.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineSpec<'a> {
    /// Unit-of-measure symbol to resolve; the product's default unit is
    /// used when omitted.
    pub unit: Option<&'a str>,
    pub description: Option<&'a str>,
    pub note: Option<&'a str>,
}

/// Build a draft invoice header from a party and a direction.
///
/// Journal, account and payment term are selected per direction:
/// outgoing invoices take the party's receivable account and customer
/// payment term against a revenue journal; incoming ones the payable
/// account and supplier term against an expense journal. A party without
/// a term falls back to the first active term system-wide.
pub fn invoice_defaults(
    ctx: &impl OperatingContext,
    data: &impl MasterData,
    party: &Party,
    direction: Direction,
    description: Option<&str>,
) -> Result<DraftInvoice, DefaultingError> {
    debug!(party = %party.id, %direction, "defaulting invoice header");

    // Journal first: the framework fires the direction change before the
    // party change, so a missing journal is reported even for parties that
    // are themselves misconfigured.
    let kind = direction.journal_kind();
    let journal = data
        .journal_by_kind(kind)
        .ok_or(DefaultingError::MissingJournal { kind })?;

    let account = match direction {
        Direction::Outgoing => party.receivable_account,
        Direction::Incoming => party.payable_account,
    }
    .ok_or(DefaultingError::MissingAccount {
        party: party.id,
        direction,
    })?;

    let configured_term = match direction {
        Direction::Outgoing => party.customer_payment_term,
        Direction::Incoming => party.supplier_payment_term,
    };
    let payment_term = match configured_term {
        Some(term) => term,
        None => data
            .first_active_payment_term()
            .map(|t| t.id)
            .ok_or(DefaultingError::MissingPaymentTerm)?,
    };

    Ok(DraftInvoice {
        direction,
        company: ctx.company(),
        currency: ctx.currency(),
        currency_date: ctx.today(),
        journal: journal.id,
        account,
        payment_term,
        party: party.id,
        invoice_address: party.address_for(AddressPurpose::Invoice).cloned(),
        description: description.map(str::to_owned),
    })
}

/// Compute line defaults for a party, direction and product without
/// constructing any invoice.
///
/// The produced line is detached: callers attach it to a draft invoice and
/// renumber `sequence` themselves. The pricing hook runs before the
/// fallbacks, so a hook-supplied unit price wins over the list price and
/// hook-seeded taxes keep their place ahead of the product's customer
/// taxes.
pub fn line_defaults(
    data: &impl MasterData,
    pricing: &impl PricingHook,
    party: &Party,
    direction: Direction,
    product: &Product,
    quantity: Decimal,
    spec: LineSpec<'_>,
) -> Result<DraftInvoiceLine, DefaultingError> {
    debug!(party = %party.id, product = %product.id, %direction, "defaulting invoice line");

    let account = match direction {
        Direction::Outgoing => {
            let category = product.category.and_then(|id| data.category(id));
            product
                .effective_revenue_account(category.as_ref())
                .ok_or(DefaultingError::MissingRevenueAccount {
                    product: product.id,
                })?
        }
        Direction::Incoming => {
            product
                .expense_account
                .ok_or(DefaultingError::MissingExpenseAccount {
                    product: product.id,
                })?
        }
    };

    let unit = match spec.unit {
        Some(symbol) => {
            data.unit_by_symbol(symbol)
                .ok_or_else(|| DefaultingError::UnknownUnitOfMeasure(symbol.to_owned()))?
                .id
        }
        None => product.default_unit,
    };

    let seed = pricing.on_product_change(party.id, product, quantity, direction);
    let unit_price = seed.unit_price.unwrap_or(product.list_price);

    let mut taxes = seed.taxes;
    taxes.extend(product.customer_taxes.iter().copied());

    let description = match (spec.description, spec.note) {
        (Some(desc), _) => Some(desc.to_owned()),
        (None, None) => Some(product.name.clone()),
        (None, Some(_)) => None,
    };

    Ok(DraftInvoiceLine {
        kind: LineKind::Line,
        sequence: 1,
        product: product.id,
        quantity,
        unit,
        unit_price,
        account,
        taxes,
        description,
        note: spec.note.map(str::to_owned),
    })
}

/// Build a draft line governed by an existing draft invoice, inheriting
/// its direction.
///
/// `party` must be the record behind `invoice.party`; the invoice only
/// carries the reference.
pub fn build_line(
    data: &impl MasterData,
    pricing: &impl PricingHook,
    invoice: &DraftInvoice,
    party: &Party,
    product: &Product,
    quantity: Decimal,
    spec: LineSpec<'_>,
) -> Result<DraftInvoiceLine, DefaultingError> {
    line_defaults(data, pricing, party, invoice.direction, product, quantity, spec)
}

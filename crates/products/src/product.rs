use serde::{Deserialize, Serialize};

use quill_accounting::{AccountId, TaxId};
use quill_core::{Entity, RecordId};

use crate::uom::UnitOfMeasureId;

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub RecordId);

impl ProductId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Product category identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub RecordId);

impl CategoryId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Product category record view.
///
/// Categories carry account defaults a product without its own revenue
/// account inherits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCategory {
    pub id: CategoryId,
    pub name: String,
    pub revenue_account: Option<AccountId>,
}

impl Entity for ProductCategory {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Product record view (the fields line defaulting reads).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// List price in smallest currency unit (e.g., cents).
    pub list_price: u64,
    pub default_unit: UnitOfMeasureId,
    /// Revenue account set directly on the product; falls back to the
    /// category's account when unset.
    pub revenue_account: Option<AccountId>,
    /// Expense account; no category fallback.
    pub expense_account: Option<AccountId>,
    pub category: Option<CategoryId>,
    /// Taxes applied when this product is sold.
    pub customer_taxes: Vec<TaxId>,
}

impl Product {
    /// Revenue account in effect: the product's own, else the category's.
    pub fn effective_revenue_account(
        &self,
        category: Option<&ProductCategory>,
    ) -> Option<AccountId> {
        self.revenue_account
            .or_else(|| category.and_then(|c| c.revenue_account))
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_account_id() -> AccountId {
        AccountId::new(RecordId::new())
    }

    fn bare_product() -> Product {
        Product {
            id: ProductId::new(RecordId::new()),
            name: "Widget".to_string(),
            list_price: 1500,
            default_unit: UnitOfMeasureId::new(RecordId::new()),
            revenue_account: None,
            expense_account: None,
            category: None,
            customer_taxes: Vec::new(),
        }
    }

    fn category_with(revenue_account: Option<AccountId>) -> ProductCategory {
        ProductCategory {
            id: CategoryId::new(RecordId::new()),
            name: "Goods".to_string(),
            revenue_account,
        }
    }

    #[test]
    fn direct_revenue_account_wins_over_category() {
        let direct = test_account_id();
        let inherited = test_account_id();
        let mut product = bare_product();
        product.revenue_account = Some(direct);
        let category = category_with(Some(inherited));

        assert_eq!(
            product.effective_revenue_account(Some(&category)),
            Some(direct)
        );
    }

    #[test]
    fn revenue_account_falls_back_to_category() {
        let inherited = test_account_id();
        let product = bare_product();
        let category = category_with(Some(inherited));

        assert_eq!(
            product.effective_revenue_account(Some(&category)),
            Some(inherited)
        );
    }

    #[test]
    fn no_revenue_account_anywhere_resolves_to_none() {
        let product = bare_product();
        assert_eq!(product.effective_revenue_account(None), None);
        assert_eq!(
            product.effective_revenue_account(Some(&category_with(None))),
            None
        );
    }
}

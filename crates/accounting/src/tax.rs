use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use quill_core::{Entity, RecordId};

/// Tax identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxId(pub RecordId);

impl TaxId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for TaxId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Tax record view.
///
/// Tax computation happens in the external framework; defaulting only
/// carries tax references onto draft lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tax {
    pub id: TaxId,
    pub name: String,
    /// Fractional rate, e.g. 0.21 for 21% VAT.
    pub rate: Decimal,
}

impl Entity for Tax {
    type Id = TaxId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

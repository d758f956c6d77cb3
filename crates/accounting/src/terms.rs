use serde::{Deserialize, Serialize};

use quill_core::{Entity, RecordId};

/// Payment term identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentTermId(pub RecordId);

impl PaymentTermId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for PaymentTermId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Payment term record view.
///
/// Only active terms are eligible as a system-wide fallback when a party
/// has no term of its own configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTerm {
    pub id: PaymentTermId,
    pub name: String,
    pub active: bool,
}

impl Entity for PaymentTerm {
    type Id = PaymentTermId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

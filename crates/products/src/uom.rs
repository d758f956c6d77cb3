use serde::{Deserialize, Serialize};

use quill_core::{Entity, RecordId};

/// Unit of measure identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitOfMeasureId(pub RecordId);

impl UnitOfMeasureId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for UnitOfMeasureId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Unit of measure record view.
///
/// Conversion between units is external; defaulting only resolves symbols
/// and carries unit references onto draft lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitOfMeasure {
    pub id: UnitOfMeasureId,
    /// Short symbol callers resolve by, e.g. "u", "kg", "h".
    pub symbol: String,
    pub name: String,
}

impl Entity for UnitOfMeasure {
    type Id = UnitOfMeasureId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

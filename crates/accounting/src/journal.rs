use serde::{Deserialize, Serialize};

use quill_core::{Entity, RecordId};

/// Journal identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JournalId(pub RecordId);

impl JournalId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for JournalId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Accounting classification of a journal.
///
/// Outgoing invoices post against a revenue journal, incoming ones against
/// an expense journal; the remaining kinds exist in the chart but are never
/// selected by invoice defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalKind {
    Revenue,
    Expense,
    Cash,
    General,
}

impl core::fmt::Display for JournalKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            JournalKind::Revenue => "revenue",
            JournalKind::Expense => "expense",
            JournalKind::Cash => "cash",
            JournalKind::General => "general",
        };
        f.write_str(s)
    }
}

/// Journal record view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    pub id: JournalId,
    pub name: String,
    pub kind: JournalKind,
}

impl Entity for Journal {
    type Id = JournalId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

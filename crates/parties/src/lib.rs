//! Parties domain module (customers and suppliers).
//!
//! Record views of parties owned by the external framework, exposing the
//! fields invoice defaulting reads (account references, payment terms,
//! typed addresses). No IO, no HTTP, no storage.

pub mod party;

pub use party::{Address, AddressPurpose, Party, PartyId};

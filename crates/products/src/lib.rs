//! Products domain module (catalog record views).
//!
//! The product fields invoice-line defaulting reads: list price, default
//! unit, account references (with category inheritance for revenue), and
//! customer taxes. No IO, no HTTP, no storage.

pub mod product;
pub mod uom;

pub use product::{CategoryId, Product, ProductCategory, ProductId};
pub use uom::{UnitOfMeasure, UnitOfMeasureId};

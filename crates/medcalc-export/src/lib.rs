//! medcalc-export
//!
//! CSV rendering of calculator results. Pure formatting — the host decides
//! how (or whether) to persist the payload.

pub mod error;
pub mod render;

pub use error::ExportError;
pub use render::to_csv;

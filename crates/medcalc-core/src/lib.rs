//! medcalc-core
//!
//! Pure domain types shared by every calculator: field descriptors, the
//! input mapping, the structured result, and the validation error taxonomy.
//! No I/O — this is the shared vocabulary of the medcalc system.

pub mod error;
pub mod field;
pub mod input;
pub mod output;
pub mod reference;

pub use error::InputError;
pub use field::{FieldDescriptor, FieldOption, FieldType, ShowIf};
pub use input::{Inputs, Value};
pub use output::{ItemKind, Output, OutputItem, Severity};
pub use reference::Reference;

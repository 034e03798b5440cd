//! NF-e generation engine: field model, access key, block builders, and
//! the document assembler.
//!
//! Every block of the document is a [`FieldNode`] with an ordered,
//! independently-declared attribute schema. The assembler wires them
//! together in the mandated order and hands back an [`NfeDocument`] whose
//! `to_xml` renders the envelope.

mod field;
mod generator;
mod identification;
mod item;
mod key;
mod party;
mod tax;
mod totals;
mod xml;

pub use field::{AttrSchema, FieldNode};
pub use generator::{LAYOUT_VERSION, NFE_NAMESPACE, NfeDocument, NfeGenerator};
pub use identification::{CnfSource, FixedCnf, RandomCnf};
pub use key::{AccessKey, MODEL, check_digit};
pub use party::Recipient;
pub use tax::{CofinsVariant, IcmsVariant, PisVariant};

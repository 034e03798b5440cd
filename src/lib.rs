//! # notafiscal
//!
//! Generation engine for the Brazilian electronic fiscal invoice (NF-e):
//! a structured XML document built from a commercial sale, with the
//! official 44-digit access key, its modulo-11 check digit, and the
//! tax-regime-dependent ICMS/PIS/COFINS sub-documents.
//!
//! All quantities and monetary values use [`rust_decimal::Decimal`] —
//! never floating point. The engine performs no I/O: domain data is
//! pre-fetched by the caller, and persistence, transmission to the tax
//! authority, and XML signing all live downstream.
//!
//! ## Quick Start
//!
//! ```rust
//! use notafiscal::core::*;
//! use notafiscal::nfe::NfeGenerator;
//! use rust_decimal_macros::dec;
//!
//! let sale = SaleBuilder::new("5.102", 1)
//!     .branch(
//!         PersonBuilder::new("Loja Matriz Ltda", AddressBuilder::new("São Paulo", "SP").build())
//!             .cnpj("12.345.678/0001-95")
//!             .state_registry("110042490114")
//!             .build(),
//!     )
//!     .client(
//!         PersonBuilder::new("Cliente SA", AddressBuilder::new("Campinas", "SP").build())
//!             .cnpj("23.456.789/0001-77")
//!             .build(),
//!     )
//!     .add_item(
//!         SaleItemBuilder::new("001", "Parafuso", dec!(10), dec!(0.50))
//!             .unit("cx")
//!             .tax_class(TaxClass::Exemption)
//!             .build(),
//!     )
//!     .build();
//!
//! let doc = NfeGenerator::new(&sale).generate().unwrap();
//! assert_eq!(doc.access_key().as_str().len(), 44);
//! let xml = doc.to_xml().unwrap();
//! assert!(xml.contains("<infNFe"));
//! ```

pub mod core;
pub mod nfe;

// Re-export the most used types at the crate root for convenience
pub use crate::core::{NfeError, Sale, TaxClass};
pub use crate::nfe::{NfeDocument, NfeGenerator};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A commercial sale, pre-fetched by the caller. The generation engine
/// performs no I/O: everything the document needs is carried here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    /// Issuing branch. Must expose a corporate identity (CNPJ).
    pub branch: Option<Person>,
    /// Recipient of the invoice.
    pub client: Option<Person>,
    /// Fiscal operation code for the sale, possibly dotted (e.g. "5.102").
    pub cfop: String,
    /// Sequential fiscal invoice number, assigned by the caller.
    pub invoice_number: Option<u64>,
    /// Fiscal document series. 0 for the single-series case.
    pub series: u32,
    /// Line items in their stored order.
    pub items: Vec<SaleItem>,
}

/// A person or company as seen by the engine: whichever identity roles the
/// underlying entity exposes are carried as optional tax ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Legal name (razão social) or personal name.
    pub name: String,
    /// Individual taxpayer id, punctuation allowed ("123.456.789-09").
    pub cpf: Option<String>,
    /// Corporate taxpayer id, punctuation allowed ("12.345.678/0001-95").
    pub cnpj: Option<String>,
    /// State tax registration (inscrição estadual).
    pub state_registry: Option<String>,
    /// Primary address.
    pub address: Address,
}

/// Postal address of a party.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    /// Street (logradouro).
    pub street: String,
    /// Street number.
    pub number: String,
    /// District (bairro).
    pub district: String,
    /// Official IBGE municipality code, when the caller can supply it.
    pub city_code: Option<String>,
    /// Municipality name.
    pub city: String,
    /// State abbreviation (e.g. "SP").
    pub state: String,
}

/// One sale line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleItem {
    /// Product code.
    pub code: String,
    /// Product description.
    pub description: String,
    /// Commercial unit label (e.g. "un", "kg").
    pub unit: String,
    /// Invoiced quantity.
    pub quantity: Decimal,
    /// Unit price.
    pub price: Decimal,
    /// Tax classification driving the ICMS/PIS/COFINS dispatch.
    pub tax_class: TaxClass,
}

impl SaleItem {
    /// Line total before any document-level adjustment.
    pub fn total(&self) -> Decimal {
        self.quantity * self.price
    }
}

/// Tax classification of a sellable, as carried by the product registry.
///
/// Selection of the per-line tax sub-document is a pure function of this
/// value; once a line is built the chosen shape never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxClass {
    /// ICMS-exempt operation (CST 40).
    Exemption,
    /// Untaxed operation (CST 41).
    Untaxed,
    /// ICMS tax substitution regime. No sub-document is emitted yet.
    Substitution,
    /// Service tax (ISS) regime. No sub-document is emitted yet.
    Service,
}

use chrono::{Datelike, Local, NaiveDate};

use super::field::FieldNode;
use super::identification::{CnfSource, RandomCnf, identification_block};
use super::item::line_item_block;
use super::key::{AccessKey, MODEL};
use super::party::{issuer_block, issuer_cnpj, recipient_block};
use super::totals::{signature_placeholder, total_block, transport_block};
use crate::core::{NfeError, Sale, uf_code};

/// Namespace of the fiscal document envelope.
pub const NFE_NAMESPACE: &str = "http://www.portalfiscal.inf.br/nfe";

/// Layout version emitted in `infNFe/@versao`.
pub const LAYOUT_VERSION: &str = "1.10";

/// Assembles the NF-e document tree from a pre-fetched [`Sale`].
///
/// Construction is a pure, sequential tree-building pass: identification,
/// issuer, recipient, one line block per sale item in stored order, then
/// totals, transport and the signature placeholder. Each call builds an
/// independent tree; the only process-wide state is the seed source.
///
/// ```
/// use chrono::NaiveDate;
/// use notafiscal::core::*;
/// use notafiscal::nfe::{FixedCnf, NfeGenerator};
/// use rust_decimal_macros::dec;
///
/// let sale = SaleBuilder::new("5.102", 1)
///     .branch(
///         PersonBuilder::new("Loja Matriz Ltda", AddressBuilder::new("São Paulo", "SP").build())
///             .cnpj("12.345.678/0001-95")
///             .state_registry("110042490114")
///             .build(),
///     )
///     .client(
///         PersonBuilder::new("Cliente SA", AddressBuilder::new("Campinas", "SP").build())
///             .cnpj("23.456.789/0001-77")
///             .build(),
///     )
///     .add_item(
///         SaleItemBuilder::new("001", "Parafuso", dec!(10), dec!(0.50))
///             .tax_class(TaxClass::Exemption)
///             .build(),
///     )
///     .build();
///
/// let doc = NfeGenerator::new(&sale)
///     .with_emission_date(NaiveDate::from_ymd_opt(2009, 10, 28).unwrap())
///     .with_cnf_source(FixedCnf(123_456_789))
///     .generate()
///     .unwrap();
///
/// assert_eq!(doc.access_key().as_str().len(), 44);
/// ```
pub struct NfeGenerator<'a, S: CnfSource = RandomCnf> {
    sale: &'a Sale,
    cnf_source: S,
    emission_date: NaiveDate,
}

impl<'a> NfeGenerator<'a, RandomCnf> {
    /// Generator with a random seed and today's emission date.
    pub fn new(sale: &'a Sale) -> Self {
        Self {
            sale,
            cnf_source: RandomCnf,
            emission_date: Local::now().date_naive(),
        }
    }
}

impl<'a, S: CnfSource> NfeGenerator<'a, S> {
    /// Pin the emission date.
    pub fn with_emission_date(mut self, date: NaiveDate) -> Self {
        self.emission_date = date;
        self
    }

    /// Swap the cNF seed source, e.g. [`FixedCnf`](super::FixedCnf) in
    /// tests.
    pub fn with_cnf_source<T: CnfSource>(self, source: T) -> NfeGenerator<'a, T> {
        NfeGenerator {
            sale: self.sale,
            cnf_source: source,
            emission_date: self.emission_date,
        }
    }

    /// Build the full document tree.
    pub fn generate(mut self) -> Result<NfeDocument, NfeError> {
        let sale = self.sale;
        let branch = sale.branch.as_ref().ok_or(NfeError::Incomplete("branch"))?;
        let client = sale.client.as_ref().ok_or(NfeError::Incomplete("client"))?;
        let number = sale
            .invoice_number
            .ok_or(NfeError::Incomplete("invoice number"))?;
        if sale.items.is_empty() {
            return Err(NfeError::Incomplete("line items"));
        }

        let uf = uf_code(&branch.address.state)?;
        let cnpj = issuer_cnpj(branch)?;
        let aamm = format!(
            "{:02}{:02}",
            self.emission_date.year() % 100,
            self.emission_date.month()
        );
        let cnf = self.cnf_source.next_cnf();

        let key = AccessKey::compose(uf, &aamm, &cnpj, MODEL, sale.series, number, cnf)?;

        let mut ide = identification_block(
            uf,
            cnf,
            sale.series,
            number,
            self.emission_date,
            branch.address.city_code.as_deref(),
        )?;
        ide.set("cDV", key.digit().to_string())?;

        let mut body = FieldNode::new("infNFe", &[]);
        body.set_xml_attr("versao", LAYOUT_VERSION);
        body.set_xml_attr("Id", format!("NFe{key}"));

        body.push(ide);
        body.push(issuer_block(branch)?);
        body.push(recipient_block(client)?);
        for (i, item) in sale.items.iter().enumerate() {
            body.push(line_item_block(i + 1, item, &sale.cfop)?);
        }
        body.push(total_block(sale)?);
        body.push(transport_block());

        let mut root = FieldNode::new("NFe", &[]);
        root.set_xml_attr("xmlns", NFE_NAMESPACE);
        root.push(body);
        root.push(signature_placeholder());

        Ok(NfeDocument { root, key })
    }
}

/// A fully assembled NF-e: the document tree plus its access key.
#[derive(Debug, Clone)]
pub struct NfeDocument {
    root: FieldNode,
    key: AccessKey,
}

impl NfeDocument {
    /// The 44-digit access key of this document.
    pub fn access_key(&self) -> &AccessKey {
        &self.key
    }

    /// The envelope node.
    pub fn root(&self) -> &FieldNode {
        &self.root
    }

    /// Serialize the document. Read-only and idempotent.
    pub fn to_xml(&self) -> Result<String, NfeError> {
        self.root.to_xml()
    }
}

impl std::fmt::Display for NfeDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_xml().map_err(|_| std::fmt::Error)?)
    }
}

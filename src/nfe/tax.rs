//! Tax sub-document registry and per-line dispatch.
//!
//! Each tax situation is a distinct, independently-declared schema picked
//! from a closed registry — schemas are never shared or extended across
//! variants. Which variant a line gets is a pure function of its
//! [`TaxClass`], fixed at construction.

use super::field::{AttrSchema, FieldNode};
use crate::core::{NfeError, TaxClass};

/// ICMS00 — fully taxed.
const ICMS00_ATTRS: AttrSchema = &[
    ("orig", "0"),
    ("CST", "00"),
    ("modBC", ""),
    ("vBC", ""),
    ("pICMS", ""),
    ("vICMS", ""),
];

/// ICMS10 — taxed with tax substitution charged.
const ICMS10_ATTRS: AttrSchema = &[
    ("orig", "0"),
    ("CST", "10"),
    ("modBC", ""),
    ("vBC", ""),
    ("pICMS", ""),
    ("vICMS", ""),
    ("modBCST", ""),
    ("pMVAST", ""),
    ("pRedBCST", ""),
    ("vBCST", ""),
    ("pICMSST", ""),
    ("vICMSST", ""),
];

/// ICMS20 — taxed with a reduced calculation base.
const ICMS20_ATTRS: AttrSchema = &[
    ("orig", "0"),
    ("CST", "20"),
    ("modBC", ""),
    ("pRedBC", ""),
    ("vBC", ""),
    ("pICMS", ""),
    ("vICMS", ""),
];

/// ICMS30 — exempt or untaxed, with tax substitution charged.
const ICMS30_ATTRS: AttrSchema = &[
    ("orig", "0"),
    ("CST", "30"),
    ("modBCST", ""),
    ("pMVAST", ""),
    ("pRedBCST", ""),
    ("vBCST", ""),
    ("pICMSST", ""),
    ("vICMSST", ""),
];

/// ICMS40 group — exempt (40), untaxed (41), suspended (50).
const ICMS40_ATTRS: AttrSchema = &[("orig", "0"), ("CST", "")];

/// PISAliq — rate-based PIS (CST 01/02).
const PIS_ALIQ_ATTRS: AttrSchema = &[
    ("CST", ""),
    ("vBC", "0"),
    ("pPIS", "0"),
    ("vPIS", "0"),
];

/// PISOutr — other PIS operations (CST 99).
const PIS_OUTR_ATTRS: AttrSchema = &[
    ("CST", "99"),
    ("vBC", "0"),
    ("pPIS", "0"),
    ("vPIS", "0"),
];

/// COFINSAliq — rate-based COFINS (CST 01/02).
const COFINS_ALIQ_ATTRS: AttrSchema = &[
    ("CST", ""),
    ("vBC", "0"),
    ("pCOFINS", "0"),
    ("vCOFINS", "0"),
];

/// COFINSOutr — other COFINS operations (CST 99).
const COFINS_OUTR_ATTRS: AttrSchema = &[
    ("CST", "99"),
    ("vBC", "0"),
    ("pCOFINS", "0"),
    ("vCOFINS", "0"),
];

/// The closed set of ICMS sub-document shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IcmsVariant {
    /// CST 00 — fully taxed.
    Full,
    /// CST 10 — taxed, substitution charged.
    Substitution,
    /// CST 20 — reduced base.
    ReducedBase,
    /// CST 30 — exempt/untaxed, substitution charged.
    ExemptSubstitution,
    /// CST 40 — exempt.
    Exempt,
    /// CST 41 — untaxed.
    Untaxed,
    /// CST 50 — suspended.
    Suspended,
}

impl IcmsVariant {
    /// Group element tag. CST 40/41/50 share the ICMS40 group.
    pub fn tag(self) -> &'static str {
        match self {
            IcmsVariant::Full => "ICMS00",
            IcmsVariant::Substitution => "ICMS10",
            IcmsVariant::ReducedBase => "ICMS20",
            IcmsVariant::ExemptSubstitution => "ICMS30",
            IcmsVariant::Exempt | IcmsVariant::Untaxed | IcmsVariant::Suspended => "ICMS40",
        }
    }

    /// Tax situation code.
    pub fn cst(self) -> &'static str {
        match self {
            IcmsVariant::Full => "00",
            IcmsVariant::Substitution => "10",
            IcmsVariant::ReducedBase => "20",
            IcmsVariant::ExemptSubstitution => "30",
            IcmsVariant::Exempt => "40",
            IcmsVariant::Untaxed => "41",
            IcmsVariant::Suspended => "50",
        }
    }

    fn schema(self) -> AttrSchema {
        match self {
            IcmsVariant::Full => ICMS00_ATTRS,
            IcmsVariant::Substitution => ICMS10_ATTRS,
            IcmsVariant::ReducedBase => ICMS20_ATTRS,
            IcmsVariant::ExemptSubstitution => ICMS30_ATTRS,
            IcmsVariant::Exempt | IcmsVariant::Untaxed | IcmsVariant::Suspended => ICMS40_ATTRS,
        }
    }

    /// Build the sub-document for this variant.
    pub fn node(self) -> Result<FieldNode, NfeError> {
        let mut node = FieldNode::new(self.tag(), self.schema());
        node.set("CST", self.cst())?;
        node.set("orig", "0")?;
        Ok(node)
    }
}

/// The closed set of PIS sub-document shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PisVariant {
    /// PISAliq — rate-based operation.
    RateBased,
    /// PISOutr — other operations, CST 99.
    Other,
}

impl PisVariant {
    pub fn tag(self) -> &'static str {
        match self {
            PisVariant::RateBased => "PISAliq",
            PisVariant::Other => "PISOutr",
        }
    }

    pub fn node(self) -> Result<FieldNode, NfeError> {
        let schema = match self {
            PisVariant::RateBased => PIS_ALIQ_ATTRS,
            PisVariant::Other => PIS_OUTR_ATTRS,
        };
        let mut node = FieldNode::new(self.tag(), schema);
        if self == PisVariant::Other {
            node.set("CST", "99")?;
        }
        Ok(node)
    }
}

/// The closed set of COFINS sub-document shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CofinsVariant {
    /// COFINSAliq — rate-based operation.
    RateBased,
    /// COFINSOutr — other operations, CST 99.
    Other,
}

impl CofinsVariant {
    pub fn tag(self) -> &'static str {
        match self {
            CofinsVariant::RateBased => "COFINSAliq",
            CofinsVariant::Other => "COFINSOutr",
        }
    }

    pub fn node(self) -> Result<FieldNode, NfeError> {
        let schema = match self {
            CofinsVariant::RateBased => COFINS_ALIQ_ATTRS,
            CofinsVariant::Other => COFINS_OUTR_ATTRS,
        };
        let mut node = FieldNode::new(self.tag(), schema);
        if self == CofinsVariant::Other {
            node.set("CST", "99")?;
        }
        Ok(node)
    }
}

/// `imposto` — per-line tax block. The ICMS/PIS/COFINS containers are
/// always present, even when the classification produces no sub-document.
pub(crate) fn tax_block(class: TaxClass) -> Result<FieldNode, NfeError> {
    let mut imposto = FieldNode::new("imposto", &[]);
    let mut icms = FieldNode::new("ICMS", &[]);
    let mut pis = FieldNode::new("PIS", &[]);
    let mut cofins = FieldNode::new("COFINS", &[]);

    match class {
        // TODO: emit ICMS10/ICMSST fields once substitution-regime data is
        // carried on the sale line, and the ISS service block.
        TaxClass::Substitution | TaxClass::Service => {}
        TaxClass::Exemption => {
            icms.push(IcmsVariant::Exempt.node()?);
            pis.push(PisVariant::Other.node()?);
            cofins.push(CofinsVariant::Other.node()?);
        }
        TaxClass::Untaxed => {
            icms.push(IcmsVariant::Untaxed.node()?);
            pis.push(PisVariant::Other.node()?);
            cofins.push(CofinsVariant::Other.node()?);
        }
    }

    imposto.push(icms);
    imposto.push(pis);
    imposto.push(cofins);
    Ok(imposto)
}

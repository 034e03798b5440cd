use rust_decimal::Decimal;

use super::field::{AttrSchema, FieldNode};
use crate::core::{NfeError, Sale, format_value};

/// `ICMSTot` — document totals. Only exempt/untaxed regimes are emitted
/// today, so every tax total is zero and vNF equals the product total.
const ICMS_TOTAL_ATTRS: AttrSchema = &[
    ("vBC", ""),
    ("vICMS", ""),
    ("vBCST", ""),
    ("vST", ""),
    ("vProd", ""),
    ("vFrete", ""),
    ("vSeg", ""),
    ("vDesc", ""),
    ("vII", ""),
    ("vIPI", ""),
    ("vPIS", ""),
    ("vCOFINS", ""),
    ("vOutro", ""),
    ("vNF", ""),
];

/// `transp` — freight on the issuer's account by default.
const TRANSPORT_ATTRS: AttrSchema = &[("modFrete", "0")];

/// `total` block with the ICMS totals summed over the sale lines.
pub(crate) fn total_block(sale: &Sale) -> Result<FieldNode, NfeError> {
    let products: Decimal = sale.items.iter().map(|item| item.total()).sum();
    let zero = format_value(Decimal::ZERO);

    let mut icms_total = FieldNode::new("ICMSTot", ICMS_TOTAL_ATTRS);
    for key in [
        "vBC", "vICMS", "vBCST", "vST", "vFrete", "vSeg", "vDesc", "vII", "vIPI", "vPIS",
        "vCOFINS", "vOutro",
    ] {
        icms_total.set(key, zero.clone())?;
    }
    icms_total.set("vProd", format_value(products))?;
    icms_total.set("vNF", format_value(products))?;

    let mut total = FieldNode::new("total", &[]);
    total.push(icms_total);
    Ok(total)
}

/// `transp` block.
pub(crate) fn transport_block() -> FieldNode {
    FieldNode::new("transp", TRANSPORT_ATTRS)
}

/// `Signature` placeholder on the envelope. The XMLDSig itself is computed
/// downstream, after the document leaves this crate.
pub(crate) fn signature_placeholder() -> FieldNode {
    FieldNode::new("Signature", &[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SaleBuilder, SaleItemBuilder};
    use rust_decimal_macros::dec;

    #[test]
    fn totals_sum_line_products() {
        let sale = SaleBuilder::new("5.102", 1)
            .add_item(SaleItemBuilder::new("001", "A", dec!(2), dec!(10)).build())
            .add_item(SaleItemBuilder::new("002", "B", dec!(1), dec!(49.90)).build())
            .build();
        let xml = total_block(&sale).unwrap().to_xml().unwrap();
        assert!(xml.contains("<vProd>69.90</vProd>"));
        assert!(xml.contains("<vNF>69.90</vNF>"));
        assert!(xml.contains("<vICMS>0.00</vICMS>"));
    }

    #[test]
    fn transport_defaults_to_issuer_freight() {
        let xml = transport_block().to_xml().unwrap();
        assert!(xml.contains("<modFrete>0</modFrete>"));
    }
}

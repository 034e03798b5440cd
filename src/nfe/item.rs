use super::field::{AttrSchema, FieldNode};
use super::tax::tax_block;
use crate::core::{NfeError, SaleItem, format_value};

/// `prod` — product/service detail of one line.
const PROD_ATTRS: AttrSchema = &[
    ("cProd", ""),
    ("cEAN", ""),
    ("xProd", ""),
    ("CFOP", ""),
    ("uCom", "un"),
    ("qCom", ""),
    ("vUnCom", ""),
    ("vProd", ""),
    ("cEANTrib", ""),
    ("uTrib", "un"),
    ("qTrib", ""),
    ("vUnTrib", ""),
];

/// `det` — one numbered line of the invoice: product details plus the tax
/// block. `number` is 1-indexed.
pub(crate) fn line_item_block(
    number: usize,
    item: &SaleItem,
    cfop: &str,
) -> Result<FieldNode, NfeError> {
    let mut det = FieldNode::new("det", &[]);
    det.set_xml_attr("nItem", number.to_string());
    det.push(product_details(item, cfop)?);
    det.push(tax_block(item.tax_class)?);
    Ok(det)
}

fn product_details(item: &SaleItem, cfop: &str) -> Result<FieldNode, NfeError> {
    let mut prod = FieldNode::new("prod", PROD_ATTRS);
    prod.set("cProd", item.code.clone())?;
    prod.set("xProd", item.description.clone())?;
    // CFOP is carried dotted in the domain ("5.102"); the document wants
    // digits only.
    prod.set("CFOP", cfop.replace('.', ""))?;
    prod.set("uCom", item.unit.clone())?;
    prod.set("uTrib", item.unit.clone())?;
    prod.set("qCom", format_value(item.quantity))?;
    prod.set("qTrib", format_value(item.quantity))?;
    prod.set("vUnCom", format_value(item.price))?;
    prod.set("vUnTrib", format_value(item.price))?;
    prod.set("vProd", format_value(item.total()))?;
    Ok(prod)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SaleItemBuilder, TaxClass};
    use rust_decimal_macros::dec;

    fn item() -> SaleItem {
        SaleItemBuilder::new("001", "Parafuso sextavado", dec!(10), dec!(0.50))
            .unit("cx")
            .tax_class(TaxClass::Exemption)
            .build()
    }

    #[test]
    fn line_total_is_quantity_times_price() {
        let xml = line_item_block(1, &item(), "5.102").unwrap().to_xml().unwrap();
        assert!(xml.contains("<qCom>10.00</qCom>"));
        assert!(xml.contains("<vUnCom>0.50</vUnCom>"));
        assert!(xml.contains("<vProd>5.00</vProd>"));
    }

    #[test]
    fn cfop_dots_are_stripped() {
        let det = line_item_block(1, &item(), "5.102").unwrap();
        let xml = det.to_xml().unwrap();
        assert!(xml.contains("<CFOP>5102</CFOP>"));
    }

    #[test]
    fn line_is_numbered() {
        let xml = line_item_block(3, &item(), "5.102").unwrap().to_xml().unwrap();
        assert!(xml.contains("<det nItem=\"3\">"));
    }

    #[test]
    fn commercial_and_taxable_fields_match() {
        let det = line_item_block(1, &item(), "5.102").unwrap();
        let xml = det.to_xml().unwrap();
        assert!(xml.contains("<uCom>cx</uCom>"));
        assert!(xml.contains("<uTrib>cx</uTrib>"));
        assert!(xml.contains("<qTrib>10.00</qTrib>"));
        assert!(xml.contains("<vUnTrib>0.50</vUnTrib>"));
    }

    #[test]
    fn unit_falls_back_to_default() {
        let bare = SaleItemBuilder::new("002", "Avulso", dec!(1), dec!(2)).build();
        let xml = line_item_block(1, &bare, "5102").unwrap().to_xml().unwrap();
        assert!(xml.contains("<uCom>un</uCom>"));
        assert!(xml.contains("<uTrib>un</uTrib>"));
    }

    #[test]
    fn tax_block_is_always_appended() {
        let mut inert = item();
        inert.tax_class = TaxClass::Service;
        let xml = line_item_block(1, &inert, "5102").unwrap().to_xml().unwrap();
        assert!(xml.contains("<imposto>"));
    }
}

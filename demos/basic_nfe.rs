//! Generate an NF-e for a small two-line sale and print the XML.
//!
//! Run with: cargo run --example basic_nfe

use notafiscal::core::*;
use notafiscal::nfe::NfeGenerator;
use rust_decimal_macros::dec;

fn main() -> Result<(), NfeError> {
    let sale = SaleBuilder::new("5.102", 42)
        .branch(
            PersonBuilder::new(
                "Loja Matriz Ltda",
                AddressBuilder::new("São Paulo", "SP")
                    .street("Rua das Flores")
                    .number("100")
                    .district("Centro")
                    .city_code("3550308")
                    .build(),
            )
            .cnpj("12.345.678/0001-95")
            .state_registry("110042490114")
            .build(),
        )
        .client(
            PersonBuilder::new(
                "Cliente SA",
                AddressBuilder::new("Campinas", "SP")
                    .street("Av. Brasil")
                    .number("2000")
                    .district("Cambuí")
                    .build(),
            )
            .cnpj("23.456.789/0001-77")
            .build(),
        )
        .add_item(
            SaleItemBuilder::new("001", "Parafuso sextavado", dec!(10), dec!(0.50))
                .unit("cx")
                .tax_class(TaxClass::Exemption)
                .build(),
        )
        .add_item(
            SaleItemBuilder::new("002", "Chave de fenda", dec!(2), dec!(15.90))
                .unit("un")
                .tax_class(TaxClass::Untaxed)
                .build(),
        )
        .build();

    let doc = NfeGenerator::new(&sale).generate()?;

    println!("access key: {}", doc.access_key());
    println!("{}", doc.to_xml()?);
    Ok(())
}

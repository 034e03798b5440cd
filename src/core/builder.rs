use rust_decimal::Decimal;

use super::types::*;

/// Builder for a [`Sale`].
///
/// ```
/// use notafiscal::core::*;
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
///     .add_item(SaleItemBuilder::new("001", "Parafuso", dec!(10), dec!(0.50)).build())
///     .build();
///
/// assert_eq!(sale.items.len(), 1);
/// ```
pub struct SaleBuilder {
    cfop: String,
    invoice_number: Option<u64>,
    series: u32,
    branch: Option<Person>,
    client: Option<Person>,
    items: Vec<SaleItem>,
}

impl SaleBuilder {
    pub fn new(cfop: impl Into<String>, invoice_number: u64) -> Self {
        Self {
            cfop: cfop.into(),
            invoice_number: Some(invoice_number),
            series: 0,
            branch: None,
            client: None,
            items: Vec::new(),
        }
    }

    /// Leave the invoice number unassigned; generation will fail until the
    /// caller resolves one.
    pub fn without_invoice_number(mut self) -> Self {
        self.invoice_number = None;
        self
    }

    pub fn series(mut self, series: u32) -> Self {
        self.series = series;
        self
    }

    pub fn branch(mut self, branch: Person) -> Self {
        self.branch = Some(branch);
        self
    }

    pub fn client(mut self, client: Person) -> Self {
        self.client = Some(client);
        self
    }

    pub fn add_item(mut self, item: SaleItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn build(self) -> Sale {
        Sale {
            branch: self.branch,
            client: self.client,
            cfop: self.cfop,
            invoice_number: self.invoice_number,
            series: self.series,
            items: self.items,
        }
    }
}

/// Builder for a [`Person`].
pub struct PersonBuilder {
    name: String,
    cpf: Option<String>,
    cnpj: Option<String>,
    state_registry: Option<String>,
    address: Address,
}

impl PersonBuilder {
    pub fn new(name: impl Into<String>, address: Address) -> Self {
        Self {
            name: name.into(),
            cpf: None,
            cnpj: None,
            state_registry: None,
            address,
        }
    }

    pub fn cpf(mut self, cpf: impl Into<String>) -> Self {
        self.cpf = Some(cpf.into());
        self
    }

    pub fn cnpj(mut self, cnpj: impl Into<String>) -> Self {
        self.cnpj = Some(cnpj.into());
        self
    }

    pub fn state_registry(mut self, registry: impl Into<String>) -> Self {
        self.state_registry = Some(registry.into());
        self
    }

    pub fn build(self) -> Person {
        Person {
            name: self.name,
            cpf: self.cpf,
            cnpj: self.cnpj,
            state_registry: self.state_registry,
            address: self.address,
        }
    }
}

/// Builder for an [`Address`].
pub struct AddressBuilder {
    street: String,
    number: String,
    district: String,
    city_code: Option<String>,
    city: String,
    state: String,
}

impl AddressBuilder {
    pub fn new(city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            street: String::new(),
            number: String::new(),
            district: String::new(),
            city_code: None,
            city: city.into(),
            state: state.into(),
        }
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street = street.into();
        self
    }

    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    pub fn district(mut self, district: impl Into<String>) -> Self {
        self.district = district.into();
        self
    }

    /// Official IBGE municipality code. When absent a placeholder is
    /// emitted; computing the code is out of scope for this crate.
    pub fn city_code(mut self, code: impl Into<String>) -> Self {
        self.city_code = Some(code.into());
        self
    }

    pub fn build(self) -> Address {
        Address {
            street: self.street,
            number: self.number,
            district: self.district,
            city_code: self.city_code,
            city: self.city,
            state: self.state,
        }
    }
}

/// Builder for a [`SaleItem`].
pub struct SaleItemBuilder {
    code: String,
    description: String,
    unit: String,
    quantity: Decimal,
    price: Decimal,
    tax_class: TaxClass,
}

impl SaleItemBuilder {
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        quantity: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            unit: String::new(),
            quantity,
            price,
            tax_class: TaxClass::Untaxed,
        }
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn tax_class(mut self, class: TaxClass) -> Self {
        self.tax_class = class;
        self
    }

    pub fn build(self) -> SaleItem {
        SaleItem {
            code: self.code,
            description: self.description,
            unit: self.unit,
            quantity: self.quantity,
            price: self.price,
            tax_class: self.tax_class,
        }
    }
}

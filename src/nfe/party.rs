use super::field::{AttrSchema, FieldNode};
use super::identification::CITY_CODE_PLACEHOLDER;
use crate::core::{Address, NfeError, Person};

/// `emit`/`dest` share one shape: exactly one tax-id leaf plus the name.
/// CNPJ and CPF are mutually exclusive; the unset one is omitted.
const PARTY_ATTRS: AttrSchema = &[("CNPJ", ""), ("CPF", ""), ("xNome", "")];

/// `enderEmit`/`enderDest` address sub-block.
const ADDRESS_ATTRS: AttrSchema = &[
    ("xLgr", ""),
    ("nro", ""),
    ("xBairro", ""),
    ("cMun", ""),
    ("xMun", ""),
    ("UF", ""),
];

/// The identity a recipient resolved to, decided once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    /// Individual, bare 11-digit CPF.
    Individual { cpf: String },
    /// Company, bare 14-digit CNPJ.
    Company { cnpj: String },
}

impl Recipient {
    /// Resolve a domain person to its fiscal identity. The individual role
    /// wins when both are present; a party with neither is unresolvable.
    pub fn resolve(person: &Person) -> Result<Self, NfeError> {
        if let Some(cpf) = &person.cpf {
            return Ok(Recipient::Individual {
                cpf: strip_tax_id(cpf, "CPF", 11)?,
            });
        }
        if let Some(cnpj) = &person.cnpj {
            return Ok(Recipient::Company {
                cnpj: strip_tax_id(cnpj, "CNPJ", 14)?,
            });
        }
        Err(NfeError::UnresolvableParty(person.name.clone()))
    }
}

/// Strip punctuation from a tax id and enforce its digit count.
pub(crate) fn strip_tax_id(
    raw: &str,
    kind: &'static str,
    expected: usize,
) -> Result<String, NfeError> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != expected {
        return Err(NfeError::InvalidTaxId {
            kind,
            expected,
            got: digits.len(),
        });
    }
    Ok(digits)
}

/// The issuer's bare CNPJ. Issuers must carry a corporate identity.
pub(crate) fn issuer_cnpj(branch: &Person) -> Result<String, NfeError> {
    let cnpj = branch
        .cnpj
        .as_deref()
        .ok_or_else(|| NfeError::UnresolvableParty(branch.name.clone()))?;
    strip_tax_id(cnpj, "CNPJ", 14)
}

/// `emit` — issuer block: CNPJ, legal name, address, then the state
/// registration leaf. The schema mandates the address before the `IE`.
pub(crate) fn issuer_block(branch: &Person) -> Result<FieldNode, NfeError> {
    let mut emit = FieldNode::new("emit", PARTY_ATTRS);
    emit.set("CNPJ", issuer_cnpj(branch)?)?;
    emit.set("xNome", branch.name.clone())?;
    emit.push(address_block("enderEmit", &branch.address)?);
    if let Some(ie) = &branch.state_registry {
        emit.push_leaf("IE", ie.clone());
    }
    Ok(emit)
}

/// `dest` — recipient block, polymorphic over the resolved identity.
pub(crate) fn recipient_block(client: &Person) -> Result<FieldNode, NfeError> {
    let mut dest = FieldNode::new("dest", PARTY_ATTRS);
    match Recipient::resolve(client)? {
        Recipient::Individual { cpf } => dest.set("CPF", cpf)?,
        Recipient::Company { cnpj } => dest.set("CNPJ", cnpj)?,
    }
    dest.set("xNome", client.name.clone())?;
    dest.push(address_block("enderDest", &client.address)?);
    if let Some(ie) = &client.state_registry {
        dest.push_leaf("IE", ie.clone());
    }
    Ok(dest)
}

fn address_block(tag: &'static str, address: &Address) -> Result<FieldNode, NfeError> {
    let mut node = FieldNode::new(tag, ADDRESS_ATTRS);
    node.set("xLgr", address.street.clone())?;
    node.set("nro", address.number.clone())?;
    node.set("xBairro", address.district.clone())?;
    node.set(
        "cMun",
        address
            .city_code
            .as_deref()
            .unwrap_or(CITY_CODE_PLACEHOLDER),
    )?;
    node.set("xMun", address.city.clone())?;
    node.set("UF", address.state.clone())?;
    Ok(node)
}

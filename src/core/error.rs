use thiserror::Error;

/// Errors that can occur while assembling an NF-e document.
///
/// Generation is pure and deterministic, so every variant is fatal at this
/// layer: retrying with the same inputs reproduces the same failure. The
/// caller is responsible for surfacing these as user-facing messages.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NfeError {
    /// The pre-check-digit access key concatenation is not 43 characters.
    #[error("access key must be 43 digits before the check digit, got {0}")]
    InvalidKeyLength(usize),

    /// A non-numeric character reached the check-digit routine.
    #[error("access key must be numeric, found {0:?}")]
    InvalidKeyDigit(char),

    /// A tax id did not have the mandated number of digits after stripping
    /// punctuation (14 for CNPJ, 11 for CPF).
    #[error("{kind} must have {expected} digits, got {got}")]
    InvalidTaxId {
        /// "CNPJ" or "CPF".
        kind: &'static str,
        expected: usize,
        got: usize,
    },

    /// A party exposes neither an individual (CPF) nor a corporate (CNPJ)
    /// identity, so no issuer/recipient block can be built for it.
    #[error("party {0:?} exposes neither CPF nor CNPJ")]
    UnresolvableParty(String),

    /// An attribute was set or read that is not declared in the element's
    /// schema. Programming error in a block builder.
    #[error("attribute {key:?} is not declared in the schema of <{tag}>")]
    MissingAttribute {
        tag: &'static str,
        key: &'static str,
    },

    /// The sale is missing data the document cannot be built without.
    #[error("sale is incomplete: {0}")]
    Incomplete(&'static str),

    /// The state abbreviation has no official IBGE region code.
    #[error("unknown state abbreviation: {0:?}")]
    UnknownState(String),

    /// XML generation error.
    #[error("XML error: {0}")]
    Xml(String),
}

//! Official IBGE region codes for the Brazilian federation units.
//!
//! The first two digits of the NF-e access key are the issuing state's
//! IBGE code, looked up from the state abbreviation.

use super::error::NfeError;

/// Look up the official 2-digit IBGE code for a state abbreviation.
pub fn uf_code(state: &str) -> Result<&'static str, NfeError> {
    UF_CODES
        .binary_search_by_key(&state, |&(uf, _)| uf)
        .map(|i| UF_CODES[i].1)
        .map_err(|_| NfeError::UnknownState(state.to_string()))
}

/// All 27 federation units, sorted by abbreviation for binary search.
static UF_CODES: &[(&str, &str)] = &[
    ("AC", "12"),
    ("AL", "27"),
    ("AM", "13"),
    ("AP", "16"),
    ("BA", "29"),
    ("CE", "23"),
    ("DF", "53"),
    ("ES", "32"),
    ("GO", "52"),
    ("MA", "21"),
    ("MG", "31"),
    ("MS", "50"),
    ("MT", "51"),
    ("PA", "15"),
    ("PB", "25"),
    ("PE", "26"),
    ("PI", "22"),
    ("PR", "41"),
    ("RJ", "33"),
    ("RN", "24"),
    ("RO", "11"),
    ("RR", "14"),
    ("RS", "43"),
    ("SC", "42"),
    ("SE", "28"),
    ("SP", "35"),
    ("TO", "17"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_states() {
        assert_eq!(uf_code("SP").unwrap(), "35");
        assert_eq!(uf_code("RJ").unwrap(), "33");
        assert_eq!(uf_code("RS").unwrap(), "43");
        assert_eq!(uf_code("DF").unwrap(), "53");
        assert_eq!(uf_code("AC").unwrap(), "12");
    }

    #[test]
    fn unknown_states() {
        assert!(uf_code("XX").is_err());
        assert!(uf_code("").is_err());
        assert!(uf_code("sp").is_err());
        assert!(uf_code("São Paulo").is_err());
    }

    #[test]
    fn list_is_sorted() {
        for window in UF_CODES.windows(2) {
            assert!(
                window[0].0 < window[1].0,
                "state codes not sorted: {} >= {}",
                window[0].0,
                window[1].0
            );
        }
    }

    #[test]
    fn list_count() {
        assert_eq!(UF_CODES.len(), 27);
    }
}

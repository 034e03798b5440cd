use chrono::NaiveDate;
use rand::Rng;

use super::field::{AttrSchema, FieldNode};
use crate::core::NfeError;

/// Emitter process version reported in `verProc`.
const PROCESS_VERSION: &str = concat!("notafiscal-", env!("CARGO_PKG_VERSION"));

/// Placeholder IBGE municipality code, emitted when the caller supplies
/// none. Computing real codes is out of scope.
pub(crate) const CITY_CODE_PLACEHOLDER: &str = "1234567";

/// Source of the random 9-digit cNF seed embedded in the access key.
///
/// Injectable so tests can pin the seed and assert exact keys. The seed
/// only deters guessing of access keys; no cross-document uniqueness is
/// guaranteed.
pub trait CnfSource {
    /// Next seed, uniform in `[100000000, 999999999]`.
    fn next_cnf(&mut self) -> u32;
}

/// Default seed source backed by the thread-local RNG.
#[derive(Debug, Default)]
pub struct RandomCnf;

impl CnfSource for RandomCnf {
    fn next_cnf(&mut self) -> u32 {
        rand::thread_rng().gen_range(100_000_000..=999_999_999)
    }
}

/// Fixed seed source for deterministic generation.
#[derive(Debug, Clone, Copy)]
pub struct FixedCnf(pub u32);

impl CnfSource for FixedCnf {
    fn next_cnf(&mut self) -> u32 {
        self.0
    }
}

/// `ide` — invoice identification block.
///
/// Defaults follow the fiscal layout: cash payment (indPag 0), model 55,
/// outgoing document (tpNF 1), landscape DANFE (tpImp 2), normal emission
/// (tpEmis 1), test environment (tpAmb 2), normal purpose (finNFe 1),
/// taxpayer-application process (procEmi 0).
const IDE_ATTRS: AttrSchema = &[
    ("cUF", ""),
    ("cNF", ""),
    ("natOp", "venda"),
    ("indPag", "0"),
    ("mod", "55"),
    ("serie", "0"),
    ("nNF", ""),
    ("dEmi", ""),
    ("tpNF", "1"),
    ("cMunFG", ""),
    ("tpImp", "2"),
    ("tpEmis", "1"),
    ("cDV", ""),
    ("tpAmb", "2"),
    ("finNFe", "1"),
    ("procEmi", "0"),
    ("verProc", PROCESS_VERSION),
];

/// Build the identification block. The check digit is assigned later by
/// the assembler, once the access key is composed.
pub(crate) fn identification_block(
    uf: &str,
    cnf: u32,
    series: u32,
    number: u64,
    emission_date: NaiveDate,
    city_code: Option<&str>,
) -> Result<FieldNode, NfeError> {
    let mut ide = FieldNode::new("ide", IDE_ATTRS);
    ide.set("cUF", uf)?;
    ide.set("cNF", cnf.to_string())?;
    ide.set("serie", series.to_string())?;
    ide.set("nNF", number.to_string())?;
    ide.set("dEmi", emission_date.to_string())?;
    ide.set("cMunFG", city_code.unwrap_or(CITY_CODE_PLACEHOLDER))?;
    Ok(ide)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn identification_defaults_and_values() {
        let ide =
            identification_block("35", 123_456_789, 0, 1, date(2009, 10, 28), None).unwrap();
        assert_eq!(ide.get("cUF").unwrap(), "35");
        assert_eq!(ide.get("cNF").unwrap(), "123456789");
        assert_eq!(ide.get("natOp").unwrap(), "venda");
        assert_eq!(ide.get("mod").unwrap(), "55");
        assert_eq!(ide.get("dEmi").unwrap(), "2009-10-28");
        assert_eq!(ide.get("cMunFG").unwrap(), CITY_CODE_PLACEHOLDER);
        assert_eq!(ide.get("tpAmb").unwrap(), "2");
        // not assigned yet; omitted from output until the key is composed
        assert_eq!(ide.get("cDV").unwrap(), "");
    }

    #[test]
    fn emission_date_is_iso_formatted() {
        let ide = identification_block("35", 200_000_000, 0, 7, date(2010, 1, 5), None).unwrap();
        assert_eq!(ide.get("dEmi").unwrap(), "2010-01-05");
    }

    #[test]
    fn random_cnf_stays_in_range() {
        let mut source = RandomCnf;
        for _ in 0..1000 {
            let cnf = source.next_cnf();
            assert!((100_000_000..=999_999_999).contains(&cnf));
        }
    }

    #[test]
    fn fixed_cnf_is_fixed() {
        let mut source = FixedCnf(123_456_789);
        assert_eq!(source.next_cnf(), 123_456_789);
        assert_eq!(source.next_cnf(), 123_456_789);
    }
}

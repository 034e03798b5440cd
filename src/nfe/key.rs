//! Access key derivation.
//!
//! Every NF-e carries a 44-digit access key: state code + year-month +
//! issuer CNPJ + model + series + invoice number + random seed, closed by
//! a modulo-11 check digit.

use crate::core::NfeError;

/// Fiscal document model for an NF-e issued in place of model 1/1A.
pub const MODEL: &str = "55";

/// The 44-digit NF-e access key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessKey(String);

impl AccessKey {
    /// Compose the key from its seven fields, zero-padding each to its
    /// mandated width, and append the check digit.
    ///
    /// `uf` is the 2-digit IBGE state code, `aamm` the 2-digit year plus
    /// 2-digit month of emission, `cnpj` the issuer's bare 14-digit tax id.
    pub fn compose(
        uf: &str,
        aamm: &str,
        cnpj: &str,
        model: &str,
        series: u32,
        number: u64,
        cnf: u32,
    ) -> Result<Self, NfeError> {
        let key = format!("{uf}{aamm}{cnpj}{model:0>2}{series:03}{number:09}{cnf:09}");
        let digit = check_digit(&key)?;
        Ok(Self(format!("{key}{digit}")))
    }

    /// The full 44-character key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The check digit (last character).
    pub fn digit(&self) -> char {
        self.0.chars().next_back().unwrap_or('0')
    }
}

impl std::fmt::Display for AccessKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the check digit of a 43-digit key: reverse the digits, weight
/// them cyclically 2,3,..,9,2,3,.. and sum; `r = sum mod 11`; the digit is
/// '0' when `r` is 0 or 1, otherwise `11 - r`.
pub fn check_digit(key: &str) -> Result<char, NfeError> {
    if key.len() != 43 {
        return Err(NfeError::InvalidKeyLength(key.len()));
    }

    const WEIGHTS: [u32; 8] = [2, 3, 4, 5, 6, 7, 8, 9];
    let mut sum = 0u32;
    for (i, c) in key.chars().rev().enumerate() {
        let digit = c.to_digit(10).ok_or(NfeError::InvalidKeyDigit(c))?;
        sum += digit * WEIGHTS[i % WEIGHTS.len()];
    }

    let r = sum % 11;
    if r == 0 || r == 1 {
        Ok('0')
    } else {
        // 2 <= 11 - r <= 9, always a single digit
        Ok(char::from_digit(11 - r, 10).unwrap_or('0'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // cUF 35, AAMM 0909, CNPJ 12345678000195, mod 55, serie 000,
    // nNF 000000001, cNF 123456789
    const KEY_43: &str = "3509091234567800019555000000000001123456789";

    #[test]
    fn check_digit_known_vector() {
        // weighted sum over the reversed digits is 733; 733 mod 11 = 7,
        // so the digit is 11 - 7 = 4
        assert_eq!(check_digit(KEY_43).unwrap(), '4');
    }

    #[test]
    fn check_digit_zero_branch() {
        // all zeros sums to 0, r = 0 maps to '0'
        let zeros = "0".repeat(43);
        assert_eq!(check_digit(&zeros).unwrap(), '0');
    }

    #[test]
    fn check_digit_all_ones() {
        // five full weight cycles (sum 44 each) plus 2+3+4 = 229; 229 mod
        // 11 = 9, digit 2
        let ones = "1".repeat(43);
        assert_eq!(check_digit(&ones).unwrap(), '2');
    }

    #[test]
    fn check_digit_rejects_wrong_length() {
        assert!(matches!(
            check_digit("123"),
            Err(NfeError::InvalidKeyLength(3))
        ));
        assert!(matches!(
            check_digit(&"1".repeat(44)),
            Err(NfeError::InvalidKeyLength(44))
        ));
    }

    #[test]
    fn check_digit_rejects_non_digits() {
        let mut key = "1".repeat(42);
        key.push('x');
        assert!(matches!(
            check_digit(&key),
            Err(NfeError::InvalidKeyDigit('x'))
        ));
    }

    #[test]
    fn compose_pads_and_appends_digit() {
        let key = AccessKey::compose("35", "0909", "12345678000195", MODEL, 0, 1, 123_456_789)
            .unwrap();
        assert_eq!(key.as_str().len(), 44);
        assert_eq!(&key.as_str()[..43], KEY_43);
        assert_eq!(key.digit(), '4');
    }

    #[test]
    fn compose_is_deterministic() {
        let a = AccessKey::compose("35", "0909", "12345678000195", MODEL, 0, 1, 123_456_789);
        let b = AccessKey::compose("35", "0909", "12345678000195", MODEL, 0, 1, 123_456_789);
        assert_eq!(a.unwrap(), b.unwrap());
    }
}

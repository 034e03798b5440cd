use notafiscal::nfe::check_digit;
use proptest::prelude::*;

proptest! {
    // Any 43-digit string yields a single decimal digit.
    #[test]
    fn check_digit_is_a_digit(key in "[0-9]{43}") {
        let digit = check_digit(&key).unwrap();
        prop_assert!(digit.is_ascii_digit());
    }

    // Pure function of the input.
    #[test]
    fn check_digit_is_deterministic(key in "[0-9]{43}") {
        prop_assert_eq!(check_digit(&key).unwrap(), check_digit(&key).unwrap());
    }

    // Anything that is not exactly 43 characters is rejected up front.
    #[test]
    fn wrong_length_is_rejected(key in "[0-9]{0,60}") {
        prop_assume!(key.len() != 43);
        prop_assert!(check_digit(&key).is_err());
    }

    // Cross-check against a forward-order formulation of the same rule:
    // the weight of position i (0-based from the left) is 2 + ((42 - i) mod 8).
    #[test]
    fn check_digit_matches_forward_formulation(key in "[0-9]{43}") {
        let sum: u32 = key
            .chars()
            .enumerate()
            .map(|(i, c)| c.to_digit(10).unwrap() * (2 + (42 - i as u32) % 8))
            .sum();
        let r = sum % 11;
        let expected = if r <= 1 {
            '0'
        } else {
            char::from_digit(11 - r, 10).unwrap()
        };
        prop_assert_eq!(check_digit(&key).unwrap(), expected);
    }
}

use rust_decimal::Decimal;

/// Format a quantity or monetary value for the fiscal document — always at
/// least 2 decimal places, no locale grouping, extra significant fraction
/// digits preserved.
///
/// Every numeric field of the document goes through this function; it is the
/// canonical textual representation and must stay bit-exact.
pub fn format_value(d: Decimal) -> String {
    let s = d.normalize().to_string();
    if let Some(dot_pos) = s.find('.') {
        let decimals = s.len() - dot_pos - 1;
        if decimals < 2 {
            format!("{s}{}", "0".repeat(2 - decimals))
        } else {
            s
        }
    } else {
        format!("{s}.00")
    }
}

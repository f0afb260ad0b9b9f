//! Quantity formatting for report output.

/// Formats an amount with `,` thousands separators, e.g. `1250` -> `"1,250"`.
///
/// Fixed en-US grouping so rendered reports are deterministic regardless of
/// the host locale.
#[must_use]
pub fn format_amount(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

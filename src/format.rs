//! Small text helpers shared by every renderer.

/// Groups digits in threes: `10000` → `"10,000"`.
pub fn thousands(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `"Free"` for a zero fee, otherwise the rupee amount with separators.
pub fn fee_label(fee: u32) -> String {
    if fee == 0 {
        "Free".to_string()
    } else {
        format!("₹{}", thousands(fee))
    }
}

/// Joins the non-empty parts with `", "`, or returns `fallback` when none remain.
pub fn join_or(parts: &[&str], fallback: &str) -> String {
    let kept: Vec<&str> = parts.iter().copied().filter(|p| !p.is_empty()).collect();
    if kept.is_empty() {
        fallback.to_string()
    } else {
        kept.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(499), "499");
        assert_eq!(thousands(2500), "2,500");
        assert_eq!(thousands(10000), "10,000");
        assert_eq!(thousands(1234567), "1,234,567");
    }

    #[test]
    fn zero_fee_is_free() {
        assert_eq!(fee_label(0), "Free");
        assert_eq!(fee_label(4999), "₹4,999");
    }

    #[test]
    fn join_skips_empty_parts() {
        assert_eq!(join_or(&["", "Fuel", "", "Movies"], "None"), "Fuel, Movies");
        assert_eq!(join_or(&["", ""], "None"), "None");
    }
}

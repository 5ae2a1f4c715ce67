/// Formats a price with "Trader Precision".
/// - Large (>1000): 2 decimals ($95,123.50)
/// - Medium (1-1000): 4 decimals ($12.4829)
/// - Small (<1): 5-8 decimals ($0.00000231)
pub fn format_price(price: f64) -> String {
    if price == 0.0 {
        return "$0.00".to_string();
    }

    let abs_price = price.abs();

    if abs_price >= 1000.0 {
        format!("${:.2}", price)
    } else if abs_price >= 1.0 {
        format!("${:.4}", price)
    } else if abs_price >= 0.01 {
        format!("${:.5}", price)
    } else {
        // Sub-cent goods need the extra digits to show movement
        format!("${:.8}", price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_precision_depends_on_magnitude() {
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(1234.567), "$1234.57");
        assert_eq!(format_price(12.5), "$12.5000");
        assert_eq!(format_price(0.25), "$0.25000");
        assert_eq!(format_price(0.000123), "$0.00012300");
    }
}

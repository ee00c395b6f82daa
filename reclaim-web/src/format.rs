//! Display formatting for compliance figures.

/// Shown in place of a figure while its report is still loading.
pub const PENDING_PLACEHOLDER: &str = "…";

/// Compliance percentage with one decimal, e.g. `83.456 -> "83.5%"`.
#[must_use]
pub fn format_compliance_pct(value: f64) -> String {
    format!("{value:.1}%")
}

/// Rand amount with two decimals, e.g. `1200.0 -> "R 1200.00"`.
#[must_use]
pub fn format_rand(value: f64) -> String {
    format!("R {value:.2}")
}

/// Stream weight for chart labels and legends.
#[must_use]
pub fn format_weight_kg(value: f64) -> String {
    format!("{value:.1} kg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compliance_pct_rounds_to_one_decimal() {
        assert_eq!(format_compliance_pct(83.456), "83.5%");
        assert_eq!(format_compliance_pct(0.0), "0.0%");
        assert_eq!(format_compliance_pct(100.0), "100.0%");
    }

    #[test]
    fn rand_amounts_carry_two_decimals() {
        assert_eq!(format_rand(1200.0), "R 1200.00");
        assert_eq!(format_rand(0.5), "R 0.50");
        assert_eq!(format_rand(101.249), "R 101.25");
    }

    #[test]
    fn weights_carry_unit() {
        assert_eq!(format_weight_kg(30.0), "30.0 kg");
    }
}

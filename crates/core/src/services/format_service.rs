/// Renders monetary and percentage values for display.
///
/// Output follows German number conventions — dot-grouped thousands, comma
/// decimals, currency symbol trailing — the format the brokerage statements
/// themselves use. Deterministic (no locale lookup at runtime), so golden
/// tests can assert exact strings.
pub struct FormatService;

impl FormatService {
    pub fn new() -> Self {
        Self
    }

    /// Format a monetary value with two decimals, e.g. `1.234,56 €`.
    ///
    /// Known currency codes render as their symbol; anything else keeps
    /// the code itself (`99,00 CHF`).
    pub fn format_currency(&self, value: f64, currency: &str) -> String {
        let rounded = format!("{:.2}", value.abs());
        let (integer, fraction) = rounded
            .split_once('.')
            .unwrap_or((rounded.as_str(), "00"));

        let sign = if value < 0.0 && rounded != "0.00" { "-" } else { "" };
        let symbol = match currency {
            "EUR" => "€",
            "USD" => "$",
            "GBP" => "£",
            other => other,
        };

        format!("{sign}{},{fraction} {symbol}", group_thousands(integer))
    }

    /// Format a percentage with an explicit sign and two decimals:
    /// `+0.00%`, `-5.75%`.
    pub fn format_percentage(&self, value: f64) -> String {
        // Normalize -0.0 so it renders with the positive sign.
        let value = if value == 0.0 { 0.0 } else { value };
        if value >= 0.0 {
            format!("+{value:.2}%")
        } else {
            format!("{value:.2}%")
        }
    }
}

impl Default for FormatService {
    fn default() -> Self {
        Self::new()
    }
}

/// Insert a dot between every group of three digits, right to left.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

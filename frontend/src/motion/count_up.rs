pub const DEFAULT_DURATION_MS: f64 = 1500.0;

/// A statistic like `"2.5x Increase"` split around its number.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUpValue {
    prefix: String,
    target: Option<f64>,
    suffix: String,
    decimal: bool,
    raw: String,
}

impl CountUpValue {
    pub fn parse(raw: &str) -> Self {
        let is_numeric = |c: char| c.is_ascii_digit() || c == '.';
        let prefix: String = raw.chars().take_while(|c| !is_numeric(*c)).collect();
        let suffix_rev: String = raw.chars().rev().take_while(|c| !is_numeric(*c)).collect();
        let suffix: String = suffix_rev.chars().rev().collect();

        let digits: String = raw.chars().filter(|c| is_numeric(*c)).collect();
        let target = digits.parse::<f64>().ok().filter(|n| n.is_finite());

        Self {
            prefix,
            target,
            suffix,
            decimal: raw.contains('.'),
            raw: raw.to_string(),
        }
    }

    /// Text to show `elapsed_ms` into an animation lasting `duration_ms`.
    pub fn frame(&self, elapsed_ms: f64, duration_ms: f64) -> String {
        let Some(target) = self.target else {
            return self.raw.clone();
        };
        let progress = progress(elapsed_ms, duration_ms);
        let current = progress * target;
        if self.decimal {
            format!("{}{:.1}{}", self.prefix, current, self.suffix)
        } else {
            format!("{}{}{}", self.prefix, current.floor() as i64, self.suffix)
        }
    }
}

fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_prefix_number_and_suffix() {
        let value = CountUpValue::parse("$12k+");
        assert_eq!(value.frame(0.0, DEFAULT_DURATION_MS), "$0k+");
        assert_eq!(value.frame(750.0, DEFAULT_DURATION_MS), "$6k+");
        assert_eq!(value.frame(DEFAULT_DURATION_MS, DEFAULT_DURATION_MS), "$12k+");
    }

    #[test]
    fn decimal_values_keep_one_place() {
        let value = CountUpValue::parse("2.5x Increase");
        assert_eq!(value.frame(0.0, 1500.0), "0.0x Increase");
        assert_eq!(value.frame(600.0, 1500.0), "1.0x Increase");
        assert_eq!(value.frame(5000.0, 1500.0), "2.5x Increase");
    }

    #[test]
    fn integers_are_floored() {
        let value = CountUpValue::parse("4 Weeks Ahead");
        assert_eq!(value.frame(0.0, 1500.0), "0 Weeks Ahead");
        assert_eq!(value.frame(1100.0, 1500.0), "2 Weeks Ahead");
        assert_eq!(value.frame(1500.0, 1500.0), "4 Weeks Ahead");
        assert_eq!(value.frame(1499.0, 1500.0), "3 Weeks Ahead");
    }

    #[test]
    fn percent_suffix() {
        let value = CountUpValue::parse("100% Control");
        assert_eq!(value.frame(750.0, 1500.0), "50% Control");
    }

    #[test]
    fn text_without_digits_is_left_alone() {
        let value = CountUpValue::parse("Always On");
        assert_eq!(value.frame(0.0, 1500.0), "Always On");
        assert_eq!(value.frame(10.0, 1500.0), "Always On");
    }

    #[test]
    fn zero_duration_jumps_to_the_end() {
        let value = CountUpValue::parse("3.4x");
        assert_eq!(value.frame(0.0, 0.0), "3.4x");
    }
}

/// Rounds a result for display, to at most eight decimal places.
///
/// The core evaluator returns full double precision; trimming the noise off
/// the tail is a display concern of the front end.
pub fn round_for_display(value: f64) -> f64 {
    (value * 1e8).round() / 1e8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_fractions_are_cut_to_eight_decimals() {
        assert_eq!(round_for_display(1.0 / 3.0), 0.33333333);
    }

    #[test]
    fn short_values_are_unchanged() {
        assert_eq!(round_for_display(512.0), 512.0);
        assert_eq!(round_for_display(-12.5), -12.5);
    }
}

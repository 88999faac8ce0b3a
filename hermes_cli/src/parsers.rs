/// Visit thresholds are non negative numbers, `"12"`, `"4.5"` and `"1e3"` are
/// all accepted.
pub fn parse_threshold(input: &str) -> Result<f64, String> {
    match input.trim().parse::<f64>() {
        Ok(threshold) if threshold.is_finite() && threshold >= 0.0 => Ok(threshold),
        Ok(_) => Err(String::from("Threshold must be a non negative number")),
        Err(_) => Err(String::from("Invalid threshold")),
    }
}

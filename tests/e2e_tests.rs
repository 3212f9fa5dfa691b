//! End-to-end integration tests
//!
//! These tests validate the complete pipeline using predefined CSV fixtures.
//! Each test:
//! 1. Reads input.csv from a fixture directory
//! 2. Routes every request through a freshly wired router
//! 3. Generates the ledger CSV
//! 4. Compares actual output with expected.csv and checks the aggregate total
//!
//! Each fixture is run under both notification policies. The ledger never
//! depends on the policy; the aggregate total does when requests go unmatched.

#[cfg(test)]
mod tests {
    use payment_router::{NotifyPolicy, PaymentMethod, PaymentPipeline, RouterConfig};
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use std::str::FromStr;
    use tempfile::NamedTempFile;

    /// Run a fixture and return the aggregate total
    ///
    /// # Panics
    ///
    /// Panics if fixture files cannot be read or the ledger output differs from
    /// expected.csv.
    fn run_test_fixture(fixture_name: &str, policy: NotifyPolicy) -> Decimal {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.csv", fixture_dir);
        let expected_path = format!("{}/expected.csv", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );

        let pipeline = PaymentPipeline::new(RouterConfig::new(PaymentMethod::defaults(), policy));
        let mut temp_output = NamedTempFile::new().expect("Failed to create temp file");

        let summary = pipeline
            .process(Path::new(&input_path), &mut temp_output)
            .unwrap_or_else(|e| panic!("Failed to process payments: {}", e));

        temp_output.flush().expect("Failed to flush temp file");

        let actual_output = fs::read_to_string(temp_output.path())
            .unwrap_or_else(|e| panic!("Failed to read temp output file: {}", e));
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {} (policy: {:?})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, policy, actual_output, expected_output
        );

        summary.aggregate_total
    }

    #[rstest]
    #[case("cafe_scenario", "17000", "17000")]
    #[case("unknown_method", "100", "0")]
    #[case("accumulation", "350", "350")]
    #[case("mixed_methods", "3940", "3600")]
    #[case("malformed_data", "120.25", "120.25")]
    #[case("precision", "3.3003", "3.3003")]
    #[case("empty_input", "0", "0")]
    fn test_fixtures(
        #[case] fixture: &str,
        #[case] total_always: &str,
        #[case] total_on_match_only: &str,
    ) {
        let always = run_test_fixture(fixture, NotifyPolicy::Always);
        let on_match_only = run_test_fixture(fixture, NotifyPolicy::OnMatchOnly);

        assert_eq!(always, Decimal::from_str(total_always).unwrap());
        assert_eq!(on_match_only, Decimal::from_str(total_on_match_only).unwrap());
    }
}

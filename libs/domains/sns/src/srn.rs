/// Formats a topic's externally stable resource name.
///
/// Exact format, no deviations: `srn:scp:sns:<region>:<account>:<name>`.
pub fn format(region: &str, account_id: &str, name: &str) -> String {
    format!("srn:scp:sns:{region}:{account_id}:{name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!(format("us-east-1", "123456789012", "orders"), "srn:scp:sns:us-east-1:123456789012:orders");
    }
}

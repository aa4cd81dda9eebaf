use serde::{Deserialize, Serialize};

/// Terminal (or pending) outcome of a publish, as persisted in the KV store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum AckResult {
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "ACK")]
    Ack { sequence: u64 },
    #[serde(rename = "FAILED")]
    Failed,
    #[serde(rename = "TIMEOUT")]
    Timeout,
}

impl AckResult {
    /// Renders the status string used by `publishCheck`: `"ACK <seq>"` for
    /// acked messages, the bare status name otherwise.
    pub fn status_string(&self) -> String {
        match self {
            AckResult::Pending => "PENDING".to_string(),
            AckResult::Ack { sequence } => format!("ACK {sequence}"),
            AckResult::Failed => "FAILED".to_string(),
            AckResult::Timeout => "TIMEOUT".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_string() {
        assert_eq!(AckResult::Pending.status_string(), "PENDING");
        assert_eq!(AckResult::Ack { sequence: 7 }.status_string(), "ACK 7");
        assert_eq!(AckResult::Failed.status_string(), "FAILED");
        assert_eq!(AckResult::Timeout.status_string(), "TIMEOUT");
    }

    #[test]
    fn test_roundtrip_json() {
        let result = AckResult::Ack { sequence: 42 };
        let json = serde_json::to_string(&result).unwrap();
        let parsed: AckResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, parsed);
    }
}

use std::fmt;

/// Outcome of a ledger operation. Errors are plain values; nothing here is
/// ever raised or retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    Success,
    InsufficientFunds,
    AccountNotFound,
    InvalidInput,
}

impl OperationStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, OperationStatus::Success)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationStatus::Success => "SUCCESS",
            OperationStatus::InsufficientFunds => "INSUFFICIENT_FUNDS",
            OperationStatus::AccountNotFound => "ACCOUNT_NOT_FOUND",
            OperationStatus::InvalidInput => "INVALID_INPUT",
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_screaming_snake_case() {
        assert_eq!(OperationStatus::Success.to_string(), "SUCCESS");
        assert_eq!(
            OperationStatus::InsufficientFunds.to_string(),
            "INSUFFICIENT_FUNDS"
        );
        assert_eq!(
            OperationStatus::AccountNotFound.to_string(),
            "ACCOUNT_NOT_FOUND"
        );
        assert_eq!(OperationStatus::InvalidInput.to_string(), "INVALID_INPUT");
    }

    #[test]
    fn only_success_is_success() {
        assert!(OperationStatus::Success.is_success());
        assert!(!OperationStatus::InsufficientFunds.is_success());
        assert!(!OperationStatus::AccountNotFound.is_success());
        assert!(!OperationStatus::InvalidInput.is_success());
    }
}

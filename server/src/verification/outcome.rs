use serde::{Deserialize, Serialize};

use super::evaluator::Verdict;

pub const TICKET_NOT_FOUND: &str = "Ticket was not found";
pub const TRANSPORT_NOT_FOUND: &str = "Transport was not found";
pub const STATION_NOT_FOUND: &str = "Station was not found";

/// Lookups that end a verification before anything is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupFailure {
    Ticket,
    Transport,
    Station,
}

impl LookupFailure {
    pub fn reason(&self) -> &'static str {
        match self {
            LookupFailure::Ticket => TICKET_NOT_FOUND,
            LookupFailure::Transport => TRANSPORT_NOT_FOUND,
            LookupFailure::Station => STATION_NOT_FOUND,
        }
    }
}

/// What the validator receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResult {
    pub is_valid: bool,
    pub error_message: Option<String>,
}

impl From<Verdict> for VerifyResult {
    fn from(verdict: Verdict) -> Self {
        Self {
            is_valid: verdict.is_valid(),
            error_message: verdict.reason().map(str::to_string),
        }
    }
}

impl From<LookupFailure> for VerifyResult {
    fn from(failure: LookupFailure) -> Self {
        Self {
            is_valid: false,
            error_message: Some(failure.reason().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(
            VerifyResult::from(Verdict::Valid),
            VerifyResult {
                is_valid: true,
                error_message: None
            }
        );
        assert_eq!(
            VerifyResult::from(LookupFailure::Transport).error_message.as_deref(),
            Some("Transport was not found")
        );
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(VerifyResult::from(Verdict::Expired)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "is_valid": false, "error_message": "Ticket expired" })
        );
    }
}

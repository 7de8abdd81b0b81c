use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use strum::EnumIter;

/// Lifecycle states of a reimbursement: PENDING at creation, then either
/// APPROVED or DENIED by a manager.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, EnumIter)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReimbursementStatus {
    Pending,
    Approved,
    Denied,
}

impl ReimbursementStatus {
    /// Return the UPPERCASE wire representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Denied => "DENIED",
        }
    }
}

impl fmt::Display for ReimbursementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReimbursementStatus {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            "DENIED" => Ok(Self::Denied),
            _ => Err("unknown reimbursement status"),
        }
    }
}

/// A manager's ruling on a pending reimbursement.
///
/// The status-update endpoint accepts only these two outcomes; keeping them a
/// separate type makes "re-pend" unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approved,
    Denied,
}

impl ReviewDecision {
    /// The status this decision moves the reimbursement into.
    #[must_use]
    pub fn status(self) -> ReimbursementStatus {
        match self {
            Self::Approved => ReimbursementStatus::Approved,
            Self::Denied => ReimbursementStatus::Denied,
        }
    }
}

/// Selection made in the collection view's status dropdown.
///
/// `All` is not a value the server understands; the API client falls back to
/// the unfiltered listing for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(ReimbursementStatus),
}

impl StatusFilter {
    /// The label shown in the dropdown.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Only(status) => status.as_str(),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == "ALL" {
            return Ok(Self::All);
        }
        value.parse().map(Self::Only)
    }
}

/// A reimbursement record as exchanged with the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reimbursement {
    /// Server-assigned identifier; absent until the server has created the
    /// record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reimb_id: Option<i32>,

    pub description: String,

    pub amount: f64,

    pub status: ReimbursementStatus,

    /// Owner of the reimbursement; the server fills this from the session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
}

/// Payload for `POST /reimbursements`; the server assigns the id and defaults
/// the status to PENDING.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateReimbursementRequest {
    pub description: String,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
}

/// Body for `PATCH /reimbursements/{id}` — the only post-creation mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusUpdateRequest {
    pub status: ReimbursementStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_status_roundtrip() {
        for (text, status) in [
            ("PENDING", ReimbursementStatus::Pending),
            ("APPROVED", ReimbursementStatus::Approved),
            ("DENIED", ReimbursementStatus::Denied),
        ] {
            assert_eq!(status.as_str(), text);
            assert_eq!(status.to_string(), text);
            assert_eq!(ReimbursementStatus::from_str(text).unwrap(), status);
        }
    }

    #[test]
    fn test_status_invalid() {
        assert!(ReimbursementStatus::from_str("pending").is_err());
        assert!(ReimbursementStatus::from_str("ALL").is_err());
        assert!(ReimbursementStatus::from_str("").is_err());
    }

    #[test]
    fn test_status_wire_format_uppercase() {
        let json = serde_json::to_string(&ReimbursementStatus::Pending).unwrap();
        assert_eq!(json, r#""PENDING""#);

        let status: ReimbursementStatus = serde_json::from_str(r#""DENIED""#).unwrap();
        assert_eq!(status, ReimbursementStatus::Denied);
    }

    #[test]
    fn test_status_iteration_covers_lifecycle() {
        let all: Vec<_> = ReimbursementStatus::iter().collect();
        assert_eq!(
            all,
            vec![
                ReimbursementStatus::Pending,
                ReimbursementStatus::Approved,
                ReimbursementStatus::Denied,
            ]
        );
    }

    #[test]
    fn test_review_decision_status() {
        assert_eq!(
            ReviewDecision::Approved.status(),
            ReimbursementStatus::Approved
        );
        assert_eq!(ReviewDecision::Denied.status(), ReimbursementStatus::Denied);
    }

    #[test]
    fn test_status_filter_parse() {
        assert_eq!(StatusFilter::from_str("ALL").unwrap(), StatusFilter::All);
        assert_eq!(
            StatusFilter::from_str("PENDING").unwrap(),
            StatusFilter::Only(ReimbursementStatus::Pending)
        );
        assert!(StatusFilter::from_str("all").is_err());
        assert!(StatusFilter::from_str("EVERYTHING").is_err());
    }

    #[test]
    fn test_reimbursement_deserialization() {
        let json = r#"{"reimbId":3,"description":"Taxi","amount":42.0,"status":"PENDING","userId":7}"#;
        let reimbursement: Reimbursement = serde_json::from_str(json).unwrap();

        assert_eq!(reimbursement.reimb_id, Some(3));
        assert_eq!(reimbursement.description, "Taxi");
        assert!((reimbursement.amount - 42.0).abs() < f64::EPSILON);
        assert_eq!(reimbursement.status, ReimbursementStatus::Pending);
        assert_eq!(reimbursement.user_id, Some(7));
    }

    #[test]
    fn test_reimbursement_without_server_fields() {
        let json = r#"{"description":"Lunch","amount":15,"status":"PENDING"}"#;
        let reimbursement: Reimbursement = serde_json::from_str(json).unwrap();

        assert_eq!(reimbursement.reimb_id, None);
        assert_eq!(reimbursement.user_id, None);
    }

    #[test]
    fn test_create_request_skips_absent_owner() {
        let request = CreateReimbursementRequest {
            description: "Taxi".to_string(),
            amount: 42.0,
            user_id: None,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"description":"Taxi","amount":42.0}"#);
    }

    #[test]
    fn test_status_update_request_body() {
        let request = StatusUpdateRequest {
            status: ReviewDecision::Approved.status(),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"status":"APPROVED"}"#);
    }

    #[test]
    fn test_create_request_camel_case_owner() {
        let request = CreateReimbursementRequest {
            description: "Taxi".to_string(),
            amount: 42.0,
            user_id: Some(7),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"userId\":7"));
    }
}

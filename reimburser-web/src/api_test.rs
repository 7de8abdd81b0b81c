//! Tests for the API client
//!
//! Validates endpoint URL construction, the client-side delete guard, and
//! the status-filter fallback that keeps "ALL" off the wire.

#[cfg(test)]
mod tests {
    use crate::api::{ReimbClient, created_from_body, require_id, status_path};
    use shared::models::{
        ApiError, CreateReimbursementRequest, ReimbursementStatus, StatusFilter,
    };

    fn lunch_request() -> CreateReimbursementRequest {
        CreateReimbursementRequest {
            description: "Team lunch".to_string(),
            amount: 42.5,
            user_id: Some(7),
        }
    }

    #[test]
    fn test_api_client_creation() {
        let client = ReimbClient::new("http://localhost:8080");
        assert_eq!(
            client.api_url("reimbursements"),
            "http://localhost:8080/reimbursements"
        );
    }

    /// Trailing and leading slashes collapse into well-formed URLs.
    #[test]
    fn test_api_url_normalization() {
        let client = ReimbClient::new("http://localhost:8080/");
        assert_eq!(client.api_url("/users"), "http://localhost:8080/users");
        assert_eq!(
            client.api_url("users/login"),
            "http://localhost:8080/users/login"
        );
    }

    #[test]
    fn test_api_endpoints() {
        let client = ReimbClient::new("http://localhost:8080");
        assert_eq!(
            client.api_url("reimbursements/3"),
            "http://localhost:8080/reimbursements/3"
        );
        assert_eq!(client.api_url("users/7"), "http://localhost:8080/users/7");
    }

    /// "ALL" is not a server-side filter value; it falls back to the
    /// unfiltered listing.
    #[test]
    fn test_status_path_all_falls_back() {
        assert_eq!(status_path(StatusFilter::All), None);
    }

    #[test]
    fn test_status_path_by_status() {
        assert_eq!(
            status_path(StatusFilter::Only(ReimbursementStatus::Pending)).as_deref(),
            Some("reimbursements/status/PENDING")
        );
        assert_eq!(
            status_path(StatusFilter::Only(ReimbursementStatus::Approved)).as_deref(),
            Some("reimbursements/status/APPROVED")
        );
        assert_eq!(
            status_path(StatusFilter::Only(ReimbursementStatus::Denied)).as_deref(),
            Some("reimbursements/status/DENIED")
        );
    }

    /// An absent id is rejected before any request is issued.
    #[test]
    fn test_require_id_guards_missing_ids() {
        let error = require_id(None, "reimbursement").unwrap_err();
        assert!(matches!(error, ApiError::InvalidArgument(_)));
        assert!(error.message().contains("reimbursement"));

        let error = require_id(None, "user").unwrap_err();
        assert!(matches!(error, ApiError::InvalidArgument(_)));
        assert!(error.message().contains("user"));
    }

    #[test]
    fn test_require_id_passes_present_ids() {
        assert_eq!(require_id(Some(3), "reimbursement").unwrap(), 3);
    }

    /// A JSON success body yields the server's record, id and all.
    #[test]
    fn test_created_from_json_body() {
        let body = r#"{"reimbId":12,"description":"Team lunch","amount":42.5,"status":"PENDING","userId":7}"#;
        let created = created_from_body(body, &lunch_request());
        assert_eq!(created.reimb_id, Some(12));
        assert_eq!(created.status, ReimbursementStatus::Pending);
    }

    /// The backend may answer a successful submission with a plain
    /// confirmation string instead of JSON; the PENDING record is then
    /// rebuilt from the request rather than surfacing a decode error.
    #[test]
    fn test_created_from_confirmation_string() {
        let created = created_from_body("Reimbursement amount: 42.5 submitted!", &lunch_request());
        assert_eq!(created.reimb_id, None);
        assert_eq!(created.description, "Team lunch");
        assert_eq!(created.amount, 42.5);
        assert_eq!(created.status, ReimbursementStatus::Pending);
        assert_eq!(created.user_id, Some(7));
    }

    #[test]
    fn test_created_from_empty_body() {
        let created = created_from_body("", &lunch_request());
        assert_eq!(created.status, ReimbursementStatus::Pending);
        assert_eq!(created.description, "Team lunch");
    }
}

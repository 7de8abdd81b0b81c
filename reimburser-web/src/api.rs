use crate::config::FrontendConfig;
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::models::{
    ApiError, CreateReimbursementRequest, LoginRequest, RegisterRequest, Reimbursement,
    ReimbursementStatus, ReviewDecision, StatusFilter, StatusUpdateRequest, User,
};

thread_local! {
    static SHARED_CLIENT: OnceCell<ReimbClient> = OnceCell::new();
}

/// Map a status filter onto the listing path it hits.
///
/// `All` is not a value the backend accepts, so it yields `None` and the
/// caller falls back to the unfiltered listing.
pub(crate) fn status_path(filter: StatusFilter) -> Option<String> {
    match filter {
        StatusFilter::All => None,
        StatusFilter::Only(status) => Some(format!("reimbursements/status/{status}")),
    }
}

/// Interpret a successful create-reimbursement body.
///
/// The backend answers 201 with either the created record as JSON or a plain
/// confirmation string ("Reimbursement amount: X submitted!"). On the string
/// form the PENDING record is rebuilt from the request, so the caller always
/// gets a record back.
pub(crate) fn created_from_body(
    body: &str,
    request: &CreateReimbursementRequest,
) -> Reimbursement {
    serde_json::from_str(body).unwrap_or_else(|_| Reimbursement {
        reimb_id: None,
        description: request.description.clone(),
        amount: request.amount,
        status: ReimbursementStatus::Pending,
        user_id: request.user_id,
    })
}

/// Reject an absent id before it can turn into a malformed request.
pub(crate) fn require_id(id: Option<i32>, what: &str) -> Result<i32, ApiError> {
    id.ok_or_else(|| {
        ApiError::InvalidArgument(format!("Missing {what} id; nothing was sent to the server"))
    })
}

/// API client for the reimbursement backend.
///
/// Authenticated requests ride on the browser-managed session cookie; the
/// client never reads or writes a token itself.
#[derive(Clone, Debug)]
pub struct ReimbClient {
    base_url: String,
    client: Client,
}

impl ReimbClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::default().api_base_url()))
                .clone()
        })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Authenticate and establish the session cookie.
    ///
    /// Any non-2xx response is a failed login, carrying the server's message
    /// when it sent one.
    pub async fn login(&self, payload: &LoginRequest) -> Result<User, ApiError> {
        let url = self.api_url("users/login");
        let response = send(with_credentials(self.client.post(url)).json(payload)).await?;
        if !response.status().is_success() {
            let message = body_or(response, "Please enter a valid username and password").await;
            return Err(ApiError::Authentication(message));
        }
        decode(response).await
    }

    /// Create an account. No credentials required; returns the server's
    /// confirmation message.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<String, ApiError> {
        let url = self.api_url("users");
        let response = send(self.client.post(url).json(payload)).await?;
        if !response.status().is_success() {
            let message = body_or(response, "Registration was rejected").await;
            return Err(ApiError::Validation(message));
        }
        Ok(body_or(response, "Account created").await)
    }

    /// List every reimbursement visible to the current session.
    pub async fn list_reimbursements(&self) -> Result<Vec<Reimbursement>, ApiError> {
        let url = self.api_url("reimbursements");
        let response = check(send(with_credentials(self.client.get(url))).await?).await?;
        decode(response).await
    }

    /// List reimbursements filtered by status, falling back to the
    /// unfiltered listing for [`StatusFilter::All`].
    pub async fn list_reimbursements_by_status(
        &self,
        filter: StatusFilter,
    ) -> Result<Vec<Reimbursement>, ApiError> {
        let Some(path) = status_path(filter) else {
            return self.list_reimbursements().await;
        };
        let url = self.api_url(&path);
        let response = check(send(with_credentials(self.client.get(url))).await?).await?;
        decode(response).await
    }

    /// Submit a new reimbursement; the server assigns the id and defaults the
    /// status to PENDING.
    ///
    /// The success body may be the created record or a confirmation string;
    /// [`created_from_body`] covers both.
    pub async fn create_reimbursement(
        &self,
        payload: &CreateReimbursementRequest,
    ) -> Result<Reimbursement, ApiError> {
        let url = self.api_url("reimbursements");
        let response =
            check(send(with_credentials(self.client.post(url)).json(payload)).await?).await?;
        let body = body_or(response, "").await;
        Ok(created_from_body(&body, payload))
    }

    /// Delete a reimbursement by id. An absent id is rejected locally and
    /// never reaches the network.
    pub async fn delete_reimbursement(&self, reimb_id: Option<i32>) -> Result<String, ApiError> {
        let id = require_id(reimb_id, "reimbursement")?;
        let url = self.api_url(&format!("reimbursements/{id}"));
        let response = check(send(with_credentials(self.client.delete(url))).await?).await?;
        Ok(body_or(response, "Reimbursement deleted").await)
    }

    /// Move a pending reimbursement to APPROVED or DENIED.
    pub async fn update_reimbursement_status(
        &self,
        reimb_id: i32,
        decision: ReviewDecision,
    ) -> Result<(), ApiError> {
        let url = self.api_url(&format!("reimbursements/{reimb_id}"));
        let payload = StatusUpdateRequest {
            status: decision.status(),
        };
        check(send(with_credentials(self.client.patch(url)).json(&payload)).await?).await?;
        Ok(())
    }

    /// List all users. Manager-only by convention; enforcement lives in the
    /// backend.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let url = self.api_url("users");
        let response = check(send(with_credentials(self.client.get(url))).await?).await?;
        decode(response).await
    }

    /// Delete a user by id, with the same local guard as
    /// [`Self::delete_reimbursement`].
    pub async fn delete_user(&self, user_id: Option<i32>) -> Result<String, ApiError> {
        let id = require_id(user_id, "user")?;
        let url = self.api_url(&format!("users/{id}"));
        let response = check(send(with_credentials(self.client.delete(url))).await?).await?;
        Ok(body_or(response, "User deleted").await)
    }
}

/// Attach the browser cookie jar to a request (`withCredentials` in fetch
/// terms). No-op off wasm, where unit tests never reach the network.
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    #[cfg(target_arch = "wasm32")]
    {
        request.fetch_credentials_include()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        request
    }
}

async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|err| ApiError::Network(format!("Unable to reach the server: {err}")))
}

/// Pass 2xx responses through; translate everything else into the error
/// taxonomy, preferring the server's own message.
async fn check(response: Response) -> Result<Response, ApiError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let message = body_or(response, &format!("Request failed with status {status}")).await;
    Err(ApiError::from_status(status, message))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json()
        .await
        .map_err(|err| ApiError::Server(format!("Malformed server response: {err}")))
}

/// The response body text, or `fallback` when the body is empty or unreadable.
async fn body_or(response: Response, fallback: &str) -> String {
    match response.text().await {
        Ok(body) if !body.trim().is_empty() => body,
        _ => fallback.to_string(),
    }
}

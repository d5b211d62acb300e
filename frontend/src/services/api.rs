use futures::future::{select, Either};
use gloo::net::http::Request;
use gloo::timers::future::TimeoutFuture;
use shared::{AddExpenseBody, Expense, GenericResponse};

/// How long one outbound request may take before it is given up on
pub const REQUEST_TIMEOUT_MS: u32 = 30_000;

/// Shown whenever the backend gives us nothing better
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again later.";

/// API client for communicating with the expense backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Create an expense. One attempt, no retry.
    ///
    /// Transport failures and the 30 s timeout both collapse into the
    /// generic message; an error response with a server-supplied message
    /// surfaces that message, otherwise `Server error (<status>)`.
    pub async fn add_expense(
        &self,
        body: &AddExpenseBody,
    ) -> Result<GenericResponse<Expense>, String> {
        let url = format!("{}/AddExpense", self.base_url);

        let request = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|_| GENERIC_ERROR_MESSAGE.to_string())?;

        let send = request.send();
        futures::pin_mut!(send);
        let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS);
        futures::pin_mut!(timeout);

        let response = match select(send, timeout).await {
            Either::Left((Ok(response), _)) => response,
            Either::Left((Err(_), _)) => return Err(GENERIC_ERROR_MESSAGE.to_string()),
            Either::Right(_) => return Err(GENERIC_ERROR_MESSAGE.to_string()),
        };

        if response.ok() {
            response
                .json::<GenericResponse<Expense>>()
                .await
                .map_err(|_| GENERIC_ERROR_MESSAGE.to_string())
        } else {
            let status = response.status();
            match response.json::<GenericResponse<Expense>>().await {
                Ok(envelope) if !envelope.message.is_empty() => Err(envelope.message),
                _ => Err(format!("Server error ({})", status)),
            }
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

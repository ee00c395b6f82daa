use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder};
use shared::models::{ConfigUserUpdate, EprReport, ErrorResponse, MeResponse, User};
use std::sync::{Arc, Mutex};

const CSRF_COOKIE_NAME: &str = "CSRF-TOKEN";
const DEFAULT_BASE_URL: &str = "/api";

thread_local! {
    static SHARED_CLIENT: OnceCell<ReclaimClient> = const { OnceCell::new() };
}

/// Error returned by [`ReclaimClient`] operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a usable response.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// The backend rejected the request with a human-readable message.
    #[error("{0}")]
    Rejected(String),
}

/// Lightweight API client for Reclaim web interactions.
#[derive(Clone, Debug)]
pub struct ReclaimClient {
    base_url: String,
    client: Client,
    csrf_token: Arc<Mutex<Option<String>>>,
}

impl ReclaimClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        let client = Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            csrf_token: Arc::new(Mutex::new(None)),
        };

        if let Some(token) = read_cookie(CSRF_COOKIE_NAME) {
            client.set_csrf_token(Some(token));
        }

        client
    }

    /// The per-tab shared client instance.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| cell.get_or_init(|| Self::new(DEFAULT_BASE_URL)).clone())
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Replace the CSRF token attached to mutating requests.
    pub fn set_csrf_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.csrf_token.lock() {
            *guard = token;
        }
    }

    fn current_csrf_token(&self) -> Option<String> {
        self.csrf_token
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().cloned())
    }

    fn apply_csrf(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.current_csrf_token() {
            request.header("X-CSRF-Token", token)
        } else {
            request
        }
    }

    /// Retrieve the authenticated user profile.
    pub async fn get_profile(&self) -> Result<MeResponse, ApiError> {
        let url = self.api_url("auth/me");
        let response = self.client.get(url).send().await?;
        Ok(response.error_for_status()?.json().await?)
    }

    /// Retrieve all user accounts, minus credential material.
    pub async fn get_config_users(&self) -> Result<Vec<User>, ApiError> {
        let url = self.api_url("config/users");
        let response = self.client.get(url).send().await?;
        Ok(response.error_for_status()?.json().await?)
    }

    /// Apply a batch of partial user updates.
    ///
    /// On rejection the backend's message is surfaced through
    /// [`ApiError::Rejected`] so it can be shown to the admin verbatim.
    pub async fn update_config_users(
        &self,
        updates: &[ConfigUserUpdate],
    ) -> Result<(), ApiError> {
        let url = self.api_url("config/users");
        let response = self
            .apply_csrf(self.client.post(url))
            .json(updates)
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status();
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.to_string(),
            Err(_) => format!("request failed with status {status}"),
        };
        Err(ApiError::Rejected(message))
    }

    /// Retrieve the current EPR compliance report.
    pub async fn get_epr_report(&self) -> Result<EprReport, ApiError> {
        let url = self.api_url("epr-report");
        let response = self.client.get(url).send().await?;
        Ok(response.error_for_status()?.json().await?)
    }

    /// Produce a downloadable PRO XML compliance export.
    ///
    /// Placeholder until the export endpoint ships; succeeding without side
    /// effects lets the UI keep its final shape.
    pub async fn export_report(&self) -> Result<(), ApiError> {
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
fn read_cookie(name: &str) -> Option<String> {
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlDocument, Window};

    let window: Window = web_sys::window()?;
    let document = window.document()?;
    let html_doc: HtmlDocument = document.dyn_into().ok()?;
    let cookie_string = html_doc.cookie().ok()?;

    for pair in cookie_string.split(';') {
        let mut parts = pair.trim().splitn(2, '=');
        let key = parts.next()?.trim();
        let value = parts.next()?.trim();
        if key == name {
            return Some(value.to_string());
        }
    }
    None
}

// Cookies only exist in the browser; native builds (unit tests) start with
// no CSRF token.
#[cfg(not(target_arch = "wasm32"))]
fn read_cookie(_name: &str) -> Option<String> {
    None
}

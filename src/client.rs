//! Artemis API client.

use log::{debug, info, warn};
use serde_json::{Value, json};

use crate::config::ArtemisConfig;
use crate::errors::Error;
use crate::transport::{HttpRequest, HttpResponse, RequestBody, Transport};
use crate::types::SuspendState;

#[cfg(feature = "transport-reqwest")]
use crate::transport::ReqwestTransport;

type Result<T> = std::result::Result<T, Error>;

/// Client for the HTTP API of a running Artemis instance.
///
/// The client holds only its [`ArtemisConfig`] and a [`Transport`]; every call
/// is an independent request/response exchange, so a shared `&Artemis` can be
/// used from concurrent tasks.
///
/// # Example
///
/// ```no_run
/// use artemis_rgb::{Artemis, ArtemisConfig};
///
/// async fn list() -> Result<(), artemis_rgb::Error> {
///     let artemis = Artemis::new(ArtemisConfig::default());
///     let profiles = artemis.get_profiles().await?;
///     println!("{profiles:#}");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Artemis<T> {
    config: ArtemisConfig,
    transport: T,
}

#[cfg(feature = "transport-reqwest")]
impl Artemis<ReqwestTransport> {
    pub fn new(config: ArtemisConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: Transport> Artemis<T> {
    const PROFILES: &'static str = "/profiles";
    const PROFILE_CATEGORIES: &'static str = "/profiles/categories";
    const SUSPEND_PROFILE: &'static str = "/profiles/suspend/";
    const BRING_TO_FOREGROUND: &'static str = "/remote/bring-to-foreground";
    const RESTART: &'static str = "/remote/restart";
    const SHUTDOWN: &'static str = "/remote/shutdown";

    pub fn with_transport(config: ArtemisConfig, transport: T) -> Self {
        Artemis { config, transport }
    }

    pub fn config(&self) -> &ArtemisConfig {
        &self.config
    }

    /// Returns all profiles known to Artemis as raw JSON.
    pub async fn get_profiles(&self) -> Result<Value> {
        info!("Getting Artemis RGB profiles");
        self.fetch(Self::PROFILES).await
    }

    /// Returns all profile categories as raw JSON.
    pub async fn get_profile_categories(&self) -> Result<Value> {
        info!("Getting Artemis RGB profile categories");
        self.fetch(Self::PROFILE_CATEGORIES).await
    }

    /// Brings the Artemis window to the front, optionally opening `route`.
    ///
    /// Pass `""` to keep the current page.
    pub async fn bring_to_foreground(&self, route: &str) -> Result<()> {
        info!("Bringing Artemis RGB to foreground (route {route:?})");
        self.post(Self::BRING_TO_FOREGROUND, RequestBody::Raw(route.to_string()))
            .await
    }

    /// Restarts Artemis with the given command line arguments.
    pub async fn restart(&self, args: &[&str]) -> Result<()> {
        info!("Restarting Artemis RGB with args {args:?}");
        self.post(Self::RESTART, RequestBody::Json(json!(args))).await
    }

    pub async fn shutdown(&self) -> Result<()> {
        info!("Shutting down Artemis RGB");
        self.post(Self::SHUTDOWN, RequestBody::Empty).await
    }

    /// Suspends or resumes a profile. Accepts a [`SuspendState`] or a `bool`.
    pub async fn suspend_profile(
        &self,
        profile_id: &str,
        state: impl Into<SuspendState>,
    ) -> Result<()> {
        let state = state.into();
        info!("Setting suspend={state} on Artemis RGB profile {profile_id}");
        let path = format!("{}{}", Self::SUSPEND_PROFILE, profile_id);
        self.post(&path, RequestBody::Json(json!({ "suspend": state })))
            .await
    }

    pub async fn resume_profile(&self, profile_id: &str) -> Result<()> {
        self.suspend_profile(profile_id, SuspendState::False).await
    }

    /// Returns whether the server answers a profile listing.
    pub async fn is_available(&self) -> bool {
        match self.get_profiles().await {
            Ok(_) => true,
            Err(e) => {
                debug!("Artemis RGB unavailable: {e}");
                false
            }
        }
    }

    async fn fetch(&self, path: &str) -> Result<Value> {
        let url = self.config.url(path);
        debug!("Fetching {url}");

        let response = self.send(HttpRequest::get(url.clone())).await?;

        if response.status != 200 {
            warn!("GET {url} returned status {}", response.status);
            return Err(Error::status(response.status, &response.body));
        }

        if !response.is_json() {
            warn!("GET {url} returned content type {:?}", response.content_type);
            return Err(Error::content_type(response.content_type.as_deref()));
        }

        serde_json::from_str(&response.body).map_err(|e| Error::decode(&url, e))
    }

    async fn post(&self, path: &str, body: RequestBody) -> Result<()> {
        let url = self.config.url(path);
        debug!("Posting to {url}: {body:?}");

        let response = self.send(HttpRequest::post(url.clone(), body)).await?;

        if response.status != 204 {
            warn!("POST {url} returned status {}", response.status);
            return Err(Error::status(response.status, &response.body));
        }
        Ok(())
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let method = request.method;
        let url = request.url.clone();

        match self.transport.execute(request).await {
            Ok(response) => {
                debug!("{method} {url} -> {}", response.status);
                Ok(response)
            }
            Err(e) => {
                warn!("{method} {url} failed: {e}");
                Err(Error::transport(&url, e))
            }
        }
    }
}

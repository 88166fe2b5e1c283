use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Datelike;
use parking_lot::Mutex;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::fallback::fallback_standings;
use crate::model::{chart_series, total_points, ChartPoint, Standing};
use crate::normalize::normalize_standings;

/// Surfaced when no API base URL is configured. A hint, not a hard error.
const CONFIG_HINT: &str = "Set CPFFL_API_BASE_URL to load live standings.";

/// Environment variable holding the gateway base URL.
pub const API_BASE_URL_ENV: &str = "CPFFL_API_BASE_URL";

#[derive(Debug, Clone, Default)]
pub struct ViewerConfig {
    /// Gateway base URL. None switches the viewer to fallback mode.
    pub api_base_url: Option<String>,
    /// Season year to fetch; defaults to the current UTC year.
    pub season: Option<i32>,
}

impl ViewerConfig {
    pub fn from_env() -> Self {
        Self {
            api_base_url: std::env::var(API_BASE_URL_ENV)
                .ok()
                .filter(|url| !url.trim().is_empty()),
            season: None,
        }
    }
}

/// Result of the most recent load cycle. `standings` is always populated
/// after the first refresh, live data or fallback.
#[derive(Debug, Clone, Default)]
pub struct ViewerState {
    pub standings: Vec<Standing>,
    pub loading: bool,
    pub message: Option<String>,
}

/// The retrieval side of the standings page: one load cycle at a time,
/// `idle → loading → {success, error}`, errors degrading to fallback data.
///
/// Each `refresh` cancels the prior in-flight load and bumps a generation
/// counter; a superseded load never commits state (cancellation is advisory,
/// the abandoned response is simply ignored if it still arrives).
pub struct StandingsViewer {
    config: ViewerConfig,
    http: reqwest::Client,
    state: Mutex<ViewerState>,
    inflight: Mutex<Option<CancellationToken>>,
    generation: AtomicU64,
}

impl StandingsViewer {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            state: Mutex::new(ViewerState::default()),
            inflight: Mutex::new(None),
            generation: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current viewer state.
    pub fn state(&self) -> ViewerState {
        self.state.lock().clone()
    }

    pub fn chart_series(&self) -> Vec<ChartPoint> {
        chart_series(&self.state.lock().standings)
    }

    pub fn total_points(&self) -> f64 {
        total_points(&self.state.lock().standings)
    }

    pub fn season(&self) -> i32 {
        self.config
            .season
            .unwrap_or_else(|| chrono::Utc::now().year())
    }

    /// Cancel any in-flight load. The superseded load leaves state untouched.
    pub fn cancel(&self) {
        if let Some(token) = self.inflight.lock().take() {
            token.cancel();
        }
    }

    /// Run one load cycle. Cancels any prior in-flight load first.
    pub async fn refresh(&self) {
        let token = CancellationToken::new();
        let generation = {
            let mut inflight = self.inflight.lock();
            if let Some(prev) = inflight.replace(token.clone()) {
                prev.cancel();
            }
            self.generation.fetch_add(1, Ordering::SeqCst) + 1
        };

        let Some(base) = self.config.api_base_url.clone() else {
            debug!("No API base URL configured, using fallback standings");
            self.commit(generation, |state| {
                state.standings = fallback_standings();
                state.message = Some(CONFIG_HINT.to_string());
            });
            return;
        };

        self.commit(generation, |state| {
            state.loading = true;
            state.message = None;
        });

        let endpoint = format!("/league/{}", self.season());
        let outcome = tokio::select! {
            // Aborted: neither success nor error. Only the loading flag is
            // cleared, and only if no newer load owns the state by now.
            _ = token.cancelled() => {
                self.commit(generation, |state| state.loading = false);
                return;
            }
            outcome = self.fetch(&base, &endpoint) => outcome,
        };

        self.commit(generation, |state| {
            state.loading = false;
            match outcome {
                Ok(rows) if !rows.is_empty() => {
                    state.standings = rows;
                }
                Ok(_) => {
                    // Located-but-empty still must not render a blank table.
                    state.standings = fallback_standings();
                }
                Err(message) => {
                    warn!("Failed to load standings: {}", message);
                    state.standings = fallback_standings();
                    state.message = Some(message);
                }
            }
        });
    }

    async fn fetch(&self, base: &str, endpoint: &str) -> Result<Vec<Standing>, String> {
        let url = format!("{}{}", base.trim_end_matches('/'), endpoint);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!(
                "API responded with {} for {}",
                status.as_u16(),
                endpoint
            ));
        }

        let payload: Value = response.json().await.map_err(|e| e.to_string())?;
        Ok(normalize_standings(&payload))
    }

    /// Apply a state mutation only if this load is still the current one.
    fn commit(&self, generation: u64, apply: impl FnOnce(&mut ViewerState)) -> bool {
        let mut state = self.state.lock();
        if self.generation.load(Ordering::SeqCst) != generation {
            return false;
        }
        apply(&mut state);
        true
    }
}

pub mod transport;

pub use transport::{HttpTransport, Transport};

use crate::error::PlayerError;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Address of the locally running bot server
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:7273";

/// Requests replayed by default, in order
pub const DEFAULT_STEPS: [&str; 3] = ["hello", "prepare", "start"];

/// Pause between two deliveries
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// One request: POSTed to `<base_url>/<name>` with the contents of `body_path`
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub name: String,
    pub body_path: PathBuf,
}

/// Ordered list of requests and the pause between them
#[derive(Debug, Clone, PartialEq)]
pub struct RequestPlan {
    pub base_url: String,
    pub steps: Vec<Step>,
    pub delay: Duration,
}

impl RequestPlan {
    /// Builds a plan whose bodies are `<requests_dir>/<name>.json`
    pub fn new<S: AsRef<str>>(
        base_url: impl Into<String>,
        requests_dir: &Path,
        names: &[S],
        delay: Duration,
    ) -> Self {
        let steps = names
            .iter()
            .map(|name| Step {
                name: name.as_ref().to_string(),
                body_path: requests_dir.join(format!("{}.json", name.as_ref())),
            })
            .collect();
        Self {
            base_url: base_url.into(),
            steps,
            delay,
        }
    }

    /// The fixed `hello`, `prepare`, `start` sequence
    pub fn default_plan(base_url: impl Into<String>, requests_dir: &Path, delay: Duration) -> Self {
        Self::new(base_url, requests_dir, &DEFAULT_STEPS[..], delay)
    }

    pub fn url_for(&self, step: &Step) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), step.name)
    }
}

/// Record of one delivered request
#[derive(Debug, Clone)]
pub struct Delivery {
    pub step: String,
    pub url: String,
    pub status: u16,
    pub sent_at: Instant,
}

/// Replays a [`RequestPlan`] one step at a time
pub struct Player<T: Transport> {
    transport: T,
}

impl<T: Transport> Player<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Runs every step in order; stops at the first failing step
    pub fn run(&self, plan: &RequestPlan) -> Result<Vec<Delivery>, PlayerError> {
        self.run_with_progress(plan, |_| {})
    }

    /// Like [`Player::run`], calling `on_delivery` after each step
    pub fn run_with_progress<F>(
        &self,
        plan: &RequestPlan,
        mut on_delivery: F,
    ) -> Result<Vec<Delivery>, PlayerError>
    where
        F: FnMut(&Delivery),
    {
        let mut deliveries = Vec::with_capacity(plan.steps.len());

        for (idx, step) in plan.steps.iter().enumerate() {
            if idx > 0 {
                std::thread::sleep(plan.delay);
            }

            // Read right before sending so only one file is open at a time
            let body =
                std::fs::read_to_string(&step.body_path).map_err(|source| PlayerError::ReadBody {
                    step: step.name.clone(),
                    path: step.body_path.clone(),
                    source,
                })?;

            let url = plan.url_for(step);
            debug!(step = %step.name, url = %url, bytes = body.len(), "Sending request");
            let sent_at = Instant::now();
            let status =
                self.transport
                    .post(&url, body)
                    .map_err(|source| PlayerError::Transport {
                        step: step.name.clone(),
                        url: url.clone(),
                        source,
                    })?;
            info!(step = %step.name, status, "Request delivered");

            let delivery = Delivery {
                step: step.name.clone(),
                url,
                status,
                sent_at,
            };
            on_delivery(&delivery);
            deliveries.push(delivery);
        }

        Ok(deliveries)
    }
}

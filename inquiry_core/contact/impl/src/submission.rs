use std::time::Duration;

use inquiry_core_contact_contracts::submission::ContactSubmissionService;
use inquiry_models::contact::{ContactInquiry, ContactSubmissionNotice};
use tracing::info;

/// Stand-in for the network call that will eventually deliver the inquiry.
///
/// Waits for the configured delay, logs the inquiry and always succeeds.
#[derive(Debug, Clone)]
pub struct ContactSubmissionServiceImpl {
    config: ContactSubmissionServiceConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactSubmissionServiceConfig {
    pub delay: Duration,
}

impl Default for ContactSubmissionServiceConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(2000),
        }
    }
}

impl ContactSubmissionServiceImpl {
    pub fn new(config: ContactSubmissionServiceConfig) -> Self {
        Self { config }
    }
}

impl ContactSubmissionService for ContactSubmissionServiceImpl {
    #[tracing::instrument(skip_all, fields(delay = ?self.config.delay))]
    async fn submit(&self, inquiry: ContactInquiry) -> ContactSubmissionNotice {
        tokio::time::sleep(self.config.delay).await;
        info!(?inquiry, "Form submitted");
        ContactSubmissionNotice::SUBMITTED
    }
}

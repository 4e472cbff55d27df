//! Wiring of the concrete service implementations.

use inquiry_api_rest::RestServerConfig;
use inquiry_config::Config;
use inquiry_core_contact_impl::{
    submission::{ContactSubmissionServiceConfig, ContactSubmissionServiceImpl},
    ContactFeatureServiceImpl,
};

pub type ContactFeature = ContactFeatureServiceImpl<ContactSubmissionServiceImpl>;
pub type RestServer = inquiry_api_rest::RestServer<ContactFeature>;

#[derive(Debug, Clone)]
pub struct Environment {
    rest_server_config: RestServerConfig,
    contact_submission_config: ContactSubmissionServiceConfig,
}

impl Environment {
    pub fn new(config: &Config) -> Self {
        Self {
            rest_server_config: RestServerConfig {
                host: config.http.host,
                port: config.http.port,
            },
            contact_submission_config: ContactSubmissionServiceConfig {
                delay: config.contact.submission_delay.into(),
            },
        }
    }

    /// Returns a new contact form instance with its own busy state.
    pub fn contact_feature(&self) -> ContactFeature {
        ContactFeatureServiceImpl::new(ContactSubmissionServiceImpl::new(
            self.contact_submission_config,
        ))
    }

    pub fn rest_server(&self) -> RestServer {
        RestServer::new(self.rest_server_config, self.contact_feature())
    }
}

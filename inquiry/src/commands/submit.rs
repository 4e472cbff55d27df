use anyhow::bail;
use clap::Args;
use inquiry_config::Config;
use inquiry_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use inquiry_models::contact::{ContactInquiryForm, ContactSubmissionNotice};

use crate::environment::Environment;

#[derive(Debug, Clone, Default, Args)]
pub struct SubmitCommand {
    /// Email address (business email preferable)
    #[arg(long, default_value = "")]
    email: String,
    /// Full name
    #[arg(long, default_value = "")]
    name: String,
    /// Telegram username
    #[arg(long, default_value = "")]
    telegram: String,
    /// Company name
    #[arg(long, default_value = "")]
    company: String,
    /// Company website
    #[arg(long, default_value = "")]
    website: String,
    /// What data you need and how you plan to use it
    #[arg(long, default_value = "")]
    business_use_case: String,
    /// How you heard about us (see the `options` command)
    #[arg(long, default_value = "")]
    hear_about_us: String,
}

impl SubmitCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let contact = Environment::new(&config).contact_feature();
        let notice = submit(&contact, self.into()).await?;
        println!("{}\n{}", notice.title, notice.description);
        Ok(())
    }
}

async fn submit(
    contact: &impl ContactFeatureService,
    form: ContactInquiryForm,
) -> anyhow::Result<ContactSubmissionNotice> {
    match contact.submit(form).await {
        Ok(notice) => Ok(notice),
        Err(ContactSubmitError::Invalid(errors)) => {
            for (field, message) in errors.iter() {
                eprintln!("{field}: {message}");
            }
            bail!("Contact inquiry rejected");
        }
        Err(err @ ContactSubmitError::Busy) => Err(err.into()),
    }
}

impl From<SubmitCommand> for ContactInquiryForm {
    fn from(value: SubmitCommand) -> Self {
        Self {
            email: value.email,
            name: value.name,
            telegram: value.telegram,
            company: value.company,
            website: value.website,
            business_use_case: value.business_use_case,
            hear_about_us: value.hear_about_us,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use inquiry_core_contact_impl::{
        submission::{ContactSubmissionServiceConfig, ContactSubmissionServiceImpl},
        ContactFeatureServiceImpl,
    };

    use super::*;

    fn contact() -> impl ContactFeatureService {
        ContactFeatureServiceImpl::new(ContactSubmissionServiceImpl::new(
            ContactSubmissionServiceConfig {
                delay: Duration::from_millis(10),
            },
        ))
    }

    #[tokio::test(start_paused = true)]
    async fn valid() {
        let command = SubmitCommand {
            email: "max@example.com".into(),
            name: "Max".into(),
            company: "Example".into(),
            business_use_case: "Token balances per wallet.".into(),
            hear_about_us: "Other".into(),
            ..Default::default()
        };

        let notice = submit(&contact(), command.into()).await.unwrap();

        assert_eq!(notice, ContactSubmissionNotice::SUBMITTED);
    }

    #[tokio::test(start_paused = true)]
    async fn invalid() {
        let err = submit(&contact(), SubmitCommand::default().into())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Contact inquiry rejected");
    }
}

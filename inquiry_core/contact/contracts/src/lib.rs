use std::future::Future;

use inquiry_models::contact::{
    ContactHearAboutUs, ContactInquiry, ContactInquiryErrors, ContactInquiryForm,
    ContactSubmissionNotice,
};
use thiserror::Error;

pub mod submission;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validates the form without submitting it.
    fn validate(&self, form: ContactInquiryForm) -> Result<ContactInquiry, ContactInquiryErrors>;

    /// Validates and submits the form.
    ///
    /// Only one submission can be pending at a time. Further submissions
    /// fail with [`ContactSubmitError::Busy`] until it has completed.
    fn submit(
        &self,
        form: ContactInquiryForm,
    ) -> impl Future<Output = Result<ContactSubmissionNotice, ContactSubmitError>> + Send;

    /// Returns whether a submission is currently pending.
    fn is_submitting(&self) -> bool;

    /// Returns the options for "How did you hear about us?".
    fn hear_about_us_options(&self) -> &'static [ContactHearAboutUs];
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("A submission is already in progress.")]
    Busy,
    #[error(transparent)]
    Invalid(#[from] ContactInquiryErrors),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        form: ContactInquiryForm,
        result: Result<ContactSubmissionNotice, ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(form))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_is_submitting(mut self, submitting: bool) -> Self {
        self.expect_is_submitting()
            .once()
            .return_const(submitting);
        self
    }

    pub fn with_hear_about_us_options(mut self) -> Self {
        let options: &'static [ContactHearAboutUs] = &ContactHearAboutUs::ALL;
        self.expect_hear_about_us_options()
            .once()
            .return_const(options);
        self
    }
}

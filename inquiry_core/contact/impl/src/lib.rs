use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use inquiry_core_contact_contracts::{
    submission::ContactSubmissionService, ContactFeatureService, ContactSubmitError,
};
use inquiry_models::contact::{
    ContactHearAboutUs, ContactInquiry, ContactInquiryErrors, ContactInquiryForm,
    ContactSubmissionNotice,
};
use tracing::debug;

pub mod submission;

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<Submission> {
    submission: Submission,
    state: Arc<State>,
}

#[derive(Debug, Default)]
struct State {
    busy: AtomicBool,
}

impl<Submission> ContactFeatureServiceImpl<Submission> {
    pub fn new(submission: Submission) -> Self {
        Self {
            submission,
            state: Default::default(),
        }
    }
}

impl<Submission> ContactFeatureService for ContactFeatureServiceImpl<Submission>
where
    Submission: ContactSubmissionService,
{
    fn validate(&self, form: ContactInquiryForm) -> Result<ContactInquiry, ContactInquiryErrors> {
        form.try_into()
    }

    #[tracing::instrument(skip_all)]
    async fn submit(
        &self,
        form: ContactInquiryForm,
    ) -> Result<ContactSubmissionNotice, ContactSubmitError> {
        if self.is_submitting() {
            debug!("ignoring submission while another one is pending");
            return Err(ContactSubmitError::Busy);
        }

        let inquiry = self.validate(form).inspect_err(|errors| {
            debug!(invalid = ?errors.fields().collect::<Vec<_>>(), "rejected contact inquiry")
        })?;

        let Some(_guard) = BusyGuard::acquire(&self.state.busy) else {
            debug!("ignoring submission while another one is pending");
            return Err(ContactSubmitError::Busy);
        };

        Ok(self.submission.submit(inquiry).await)
    }

    fn is_submitting(&self) -> bool {
        self.state.busy.load(Ordering::Acquire)
    }

    fn hear_about_us_options(&self) -> &'static [ContactHearAboutUs] {
        &ContactHearAboutUs::ALL
    }
}

/// Holds the busy flag until dropped, including when the submission future
/// is dropped before completion.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

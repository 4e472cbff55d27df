use std::future::Future;

use inquiry_models::contact::{ContactInquiry, ContactSubmissionNotice};

/// Hands a validated inquiry over to whoever processes it.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactSubmissionService: Send + Sync + 'static {
    /// Submits the inquiry. This operation cannot fail.
    fn submit(
        &self,
        inquiry: ContactInquiry,
    ) -> impl Future<Output = ContactSubmissionNotice> + Send;
}

#[cfg(feature = "mock")]
impl MockContactSubmissionService {
    pub fn with_submit(mut self, inquiry: ContactInquiry) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(inquiry))
            .return_once(|_| Box::pin(std::future::ready(ContactSubmissionNotice::SUBMITTED)));
        self
    }
}

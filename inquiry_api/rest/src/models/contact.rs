use inquiry_models::contact::{ContactInquiryErrors, ContactInquiryForm, ContactSubmissionNotice};
use serde::{Deserialize, Serialize, Serializer};

use crate::errors::INVALID_CONTACT_INQUIRY_DETAIL;

/// Missing fields are treated like fields that were left blank.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiContactInquiryForm {
    /// Email address, preferably a business one
    pub email: String,
    /// Full name of the user
    pub name: String,
    /// Telegram username (optional)
    pub telegram: String,
    /// Company name
    pub company: String,
    /// Company website (optional)
    pub website: String,
    /// What data is needed and how it will be used
    pub business_use_case: String,
    /// One of the labels returned by `GET /contact/options`
    pub hear_about_us: String,
}

impl From<ApiContactInquiryForm> for ContactInquiryForm {
    fn from(value: ApiContactInquiryForm) -> Self {
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

#[derive(Debug, Clone, Serialize)]
pub struct ApiContactSubmissionNotice {
    pub title: &'static str,
    pub description: &'static str,
}

impl From<ContactSubmissionNotice> for ApiContactSubmissionNotice {
    fn from(value: ContactSubmissionNotice) -> Self {
        Self {
            title: value.title,
            description: value.description,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiContactInquiryErrors {
    pub detail: &'static str,
    /// Error message by field name, in form order
    #[serde(serialize_with = "serialize_field_errors")]
    pub errors: ContactInquiryErrors,
}

impl From<ContactInquiryErrors> for ApiContactInquiryErrors {
    fn from(errors: ContactInquiryErrors) -> Self {
        Self {
            detail: INVALID_CONTACT_INQUIRY_DETAIL,
            errors,
        }
    }
}

fn serialize_field_errors<S: Serializer>(
    errors: &ContactInquiryErrors,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(errors.iter().map(|(field, message)| (field.name(), message)))
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ApiContactStatus {
    pub submitting: bool,
}

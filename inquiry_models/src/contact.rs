use std::{collections::BTreeMap, fmt, str::FromStr, sync::LazyLock};

use inquiry_utils::NonEmpty;
use nutype::nutype;
use regex::Regex;
use thiserror::Error;

use crate::macros::nutype_string;

/// Domain part and the last character of the local part. Leading dots and
/// consecutive dots are rejected separately, see [`is_email_address`].
pub static EMAIL_ADDRESS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .unwrap()
});

fn is_email_address(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_ADDRESS_REGEX.is_match(email)
}

/// Length as measured by the browser form, in UTF-16 code units.
fn has_min_length(value: &str, min: usize) -> bool {
    value.encode_utf16().count() >= min
}

fn is_absolute_url(website: &str) -> bool {
    url::Url::parse(website).is_ok()
}

/// The raw contents of the contact form, exactly as entered.
///
/// Optional fields that were left blank are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInquiryForm {
    pub email: String,
    pub name: String,
    pub telegram: String,
    pub company: String,
    pub website: String,
    pub business_use_case: String,
    pub hear_about_us: String,
}

/// A contact form submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInquiry {
    pub email: ContactInquiryEmail,
    pub name: ContactInquiryName,
    pub telegram: Option<ContactInquiryTelegram>,
    pub company: ContactInquiryCompany,
    pub website: Option<ContactInquiryWebsite>,
    pub business_use_case: ContactInquiryUseCase,
    pub hear_about_us: ContactHearAboutUs,
}

nutype_string!(ContactInquiryEmail(validate(predicate = |email| is_email_address(email))));
nutype_string!(ContactInquiryName(validate(predicate = |name| has_min_length(name, 2))));
nutype_string!(ContactInquiryCompany(validate(predicate = |company| has_min_length(company, 2))));
nutype_string!(ContactInquiryWebsite(validate(predicate = |website| is_absolute_url(website))));
nutype_string!(ContactInquiryUseCase(validate(predicate = |use_case| has_min_length(use_case, 10))));

#[nutype(derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Deref,
    AsRef,
    From,
    Into
))]
pub struct ContactInquiryTelegram(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactHearAboutUs {
    SearchEngine,
    SocialMedia,
    Referral,
    Advertisement,
    BlogArticle,
    ConferenceEvent,
    Partner,
    Other,
}

impl ContactHearAboutUs {
    /// All options in the order they are presented to the user.
    pub const ALL: [Self; 8] = [
        Self::SearchEngine,
        Self::SocialMedia,
        Self::Referral,
        Self::Advertisement,
        Self::BlogArticle,
        Self::ConferenceEvent,
        Self::Partner,
        Self::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::SearchEngine => "Search Engine",
            Self::SocialMedia => "Social Media",
            Self::Referral => "Referral",
            Self::Advertisement => "Advertisement",
            Self::BlogArticle => "Blog/Article",
            Self::ConferenceEvent => "Conference/Event",
            Self::Partner => "Partner",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ContactHearAboutUs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown option: {0:?}")]
pub struct UnknownHearAboutUsOption(pub String);

impl FromStr for ContactHearAboutUs {
    type Err = UnknownHearAboutUsOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.label() == s)
            .ok_or_else(|| UnknownHearAboutUsOption(s.into()))
    }
}

/// The fields of the contact form, in the order they are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactInquiryField {
    Email,
    Name,
    Telegram,
    Company,
    Website,
    BusinessUseCase,
    HearAboutUs,
}

impl ContactInquiryField {
    /// Name of the field as used by the form (camelCase).
    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Name => "name",
            Self::Telegram => "telegram",
            Self::Company => "company",
            Self::Website => "website",
            Self::BusinessUseCase => "businessUseCase",
            Self::HearAboutUs => "hearAboutUs",
        }
    }

    /// The message shown when the field is invalid. `None` for fields that
    /// accept any input.
    pub fn error_message(self) -> Option<&'static str> {
        match self {
            Self::Email => Some("Please enter a valid email address"),
            Self::Name => Some("Name must be at least 2 characters"),
            Self::Telegram => None,
            Self::Company => Some("Company name must be at least 2 characters"),
            Self::Website => Some("Please enter a valid website URL"),
            Self::BusinessUseCase => {
                Some("Please provide at least 10 characters describing your use case")
            }
            Self::HearAboutUs => Some("Please select how you heard about us"),
        }
    }
}

impl fmt::Display for ContactInquiryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error messages of all invalid fields of a rejected form, ordered by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("Contact inquiry has {} invalid field(s)", .0.len())]
pub struct ContactInquiryErrors(BTreeMap<ContactInquiryField, &'static str>);

impl ContactInquiryErrors {
    pub fn get(&self, field: ContactInquiryField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: ContactInquiryField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = ContactInquiryField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactInquiryField, &'static str)> + '_ {
        self.0.iter().map(|(&field, &message)| (field, message))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Records the error of `field` if `result` is an error.
    fn check<T, E>(&mut self, field: ContactInquiryField, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(_) => {
                if let Some(message) = field.error_message() {
                    self.0.insert(field, message);
                }
                None
            }
        }
    }
}

impl TryFrom<ContactInquiryForm> for ContactInquiry {
    type Error = ContactInquiryErrors;

    /// Validates every field of the form. All invalid fields are reported,
    /// not only the first one.
    fn try_from(form: ContactInquiryForm) -> Result<Self, Self::Error> {
        use ContactInquiryField as F;

        let mut errors = ContactInquiryErrors::default();

        let email = errors.check(F::Email, ContactInquiryEmail::try_new(form.email));
        let name = errors.check(F::Name, ContactInquiryName::try_new(form.name));
        let telegram = form.telegram.non_empty().map(ContactInquiryTelegram::new);
        let company = errors.check(F::Company, ContactInquiryCompany::try_new(form.company));
        let website = errors.check(
            F::Website,
            form.website
                .non_empty()
                .map(ContactInquiryWebsite::try_new)
                .transpose(),
        );
        let business_use_case = errors.check(
            F::BusinessUseCase,
            ContactInquiryUseCase::try_new(form.business_use_case),
        );
        let hear_about_us = errors.check(
            F::HearAboutUs,
            form.hear_about_us.parse::<ContactHearAboutUs>(),
        );

        let (
            Some(email),
            Some(name),
            Some(company),
            Some(website),
            Some(business_use_case),
            Some(hear_about_us),
        ) = (email, name, company, website, business_use_case, hear_about_us)
        else {
            return Err(errors);
        };

        Ok(Self {
            email,
            name,
            telegram,
            company,
            website,
            business_use_case,
            hear_about_us,
        })
    }
}

impl From<ContactInquiry> for ContactInquiryForm {
    fn from(value: ContactInquiry) -> Self {
        Self {
            email: value.email.into_inner(),
            name: value.name.into_inner(),
            telegram: value
                .telegram
                .map(ContactInquiryTelegram::into_inner)
                .unwrap_or_default(),
            company: value.company.into_inner(),
            website: value
                .website
                .map(ContactInquiryWebsite::into_inner)
                .unwrap_or_default(),
            business_use_case: value.business_use_case.into_inner(),
            hear_about_us: value.hear_about_us.label().into(),
        }
    }
}

/// Notification shown to the user after a submission went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactSubmissionNotice {
    pub title: &'static str,
    pub description: &'static str,
}

impl ContactSubmissionNotice {
    pub const SUBMITTED: Self = Self {
        title: "Form submitted successfully!",
        description: "We will respond to your inquiry within 24 hours.",
    };
}

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use inquiry_core_contact_contracts::{ContactFeatureService, ContactSubmitError};

use crate::{
    errors::{error, SUBMISSION_IN_PROGRESS_DETAIL},
    models::contact::{
        ApiContactInquiryErrors, ApiContactInquiryForm, ApiContactStatus,
        ApiContactSubmissionNotice,
    },
};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/contact", routing::post(submit))
        .route("/contact/options", routing::get(options))
        .route("/contact/status", routing::get(status))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    Json(form): Json<ApiContactInquiryForm>,
) -> Response {
    match service.submit(form.into()).await {
        Ok(notice) => Json(ApiContactSubmissionNotice::from(notice)).into_response(),
        Err(ContactSubmitError::Busy) => {
            error(StatusCode::CONFLICT, SUBMISSION_IN_PROGRESS_DETAIL)
        }
        Err(ContactSubmitError::Invalid(errors)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiContactInquiryErrors::from(errors)),
        )
            .into_response(),
    }
}

async fn options(service: State<Arc<impl ContactFeatureService>>) -> Response {
    let labels = service
        .hear_about_us_options()
        .iter()
        .map(|option| option.label())
        .collect::<Vec<_>>();
    Json(labels).into_response()
}

async fn status(service: State<Arc<impl ContactFeatureService>>) -> Response {
    Json(ApiContactStatus {
        submitting: service.is_submitting(),
    })
    .into_response()
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use inquiry_core_contact_contracts::MockContactFeatureService;
    use inquiry_models::contact::{
        ContactInquiry, ContactInquiryErrors, ContactInquiryForm, ContactSubmissionNotice,
    };
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    fn form() -> ContactInquiryForm {
        ContactInquiryForm {
            email: "max.mustermann@example.com".into(),
            name: "Max Mustermann".into(),
            telegram: "@max".into(),
            company: "Example GmbH".into(),
            website: "https://example.com".into(),
            business_use_case: "Historical DEX trades for backtesting.".into(),
            hear_about_us: "Social Media".into(),
        }
    }

    fn form_json() -> Value {
        json!({
            "email": "max.mustermann@example.com",
            "name": "Max Mustermann",
            "telegram": "@max",
            "company": "Example GmbH",
            "website": "https://example.com",
            "businessUseCase": "Historical DEX trades for backtesting.",
            "hearAboutUs": "Social Media",
        })
    }

    fn invalid_form_errors() -> ContactInquiryErrors {
        ContactInquiry::try_from(ContactInquiryForm {
            email: "max".into(),
            website: "not-a-url".into(),
            ..form()
        })
        .unwrap_err()
    }

    async fn post(service: MockContactFeatureService, body: Value) -> (StatusCode, Value) {
        let request = Request::post("/contact")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(service, request).await
    }

    async fn get(service: MockContactFeatureService, uri: &str) -> (StatusCode, Value) {
        let request = Request::get(uri).body(Body::empty()).unwrap();
        send(service, request).await
    }

    async fn send(service: MockContactFeatureService, request: Request<Body>) -> (StatusCode, Value) {
        let response = router(service.into()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn submit_ok() {
        let service =
            MockContactFeatureService::new().with_submit(form(), Ok(ContactSubmissionNotice::SUBMITTED));

        let (status, body) = post(service, form_json()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "title": "Form submitted successfully!",
                "description": "We will respond to your inquiry within 24 hours.",
            })
        );
    }

    #[tokio::test]
    async fn submit_missing_fields_are_blank() {
        let service = MockContactFeatureService::new().with_submit(
            ContactInquiryForm {
                email: "max.mustermann@example.com".into(),
                ..Default::default()
            },
            Err(ContactSubmitError::Busy),
        );

        let (status, _) = post(service, json!({"email": "max.mustermann@example.com"})).await;

        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn submit_invalid() {
        let service = MockContactFeatureService::new()
            .with_submit(form(), Err(invalid_form_errors().into()));

        let (status, body) = post(service, form_json()).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            json!({
                "detail": "Invalid contact inquiry",
                "errors": {
                    "email": "Please enter a valid email address",
                    "website": "Please enter a valid website URL",
                },
            })
        );
    }

    #[tokio::test]
    async fn submit_busy() {
        let service =
            MockContactFeatureService::new().with_submit(form(), Err(ContactSubmitError::Busy));

        let (status, body) = post(service, form_json()).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body, json!({"detail": "Submission already in progress"}));
    }

    #[tokio::test]
    async fn hear_about_us_options() {
        let service = MockContactFeatureService::new().with_hear_about_us_options();

        let (status, body) = get(service, "/contact/options").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                "Search Engine",
                "Social Media",
                "Referral",
                "Advertisement",
                "Blog/Article",
                "Conference/Event",
                "Partner",
                "Other",
            ])
        );
    }

    #[tokio::test]
    async fn submission_status() {
        let service = MockContactFeatureService::new().with_is_submitting(true);

        let (status, body) = get(service, "/contact/status").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"submitting": true}));
    }
}

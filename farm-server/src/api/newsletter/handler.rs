//! Newsletter signup handler
//!
//! Signups are deduplicated per process instance; list delivery is an
//! external concern. A filled honeypot field reports success without
//! subscribing, so bots get no signal.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::common::{AppError, AppResponse, AppResult};
use crate::core::ServerState;
use crate::utils::validation::{MAX_NAME_LEN, MIN_NAME_LEN, collapse_whitespace, is_valid_email};

#[derive(Debug, Deserialize)]
pub struct NewsletterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    // Hidden form fields a human never fills
    #[serde(default)]
    pub honeypot: Option<String>,
    #[serde(default)]
    pub hp: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl NewsletterRequest {
    fn honeypot_tripped(&self) -> bool {
        [&self.honeypot, &self.hp, &self.website]
            .into_iter()
            .flatten()
            .any(|v| !v.trim().is_empty())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub already_subscribed: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub ignored: bool,
}

/// POST /api/newsletter - subscribe an email address
pub async fn signup(
    State(state): State<ServerState>,
    Json(payload): Json<NewsletterRequest>,
) -> AppResult<Json<AppResponse<NewsletterData>>> {
    let email = collapse_whitespace(&payload.email).to_lowercase();
    let name = payload
        .name
        .as_deref()
        .map(collapse_whitespace)
        .filter(|n| !n.is_empty());

    if payload.honeypot_tripped() {
        tracing::warn!("Newsletter honeypot tripped, ignoring signup");
        return Ok(AppResponse::ok(NewsletterData {
            email: (!email.is_empty()).then_some(email),
            name,
            already_subscribed: false,
            ignored: true,
        }));
    }

    if email.is_empty() {
        return Err(AppError::Validation("Email is required".to_string()));
    }
    if !is_valid_email(&email) {
        return Err(AppError::Validation(
            "Please provide a valid email address".to_string(),
        ));
    }
    if let Some(n) = &name
        && (n.len() < MIN_NAME_LEN || n.len() > MAX_NAME_LEN)
    {
        return Err(AppError::Validation(format!(
            "Name must be between {} and {} characters",
            MIN_NAME_LEN, MAX_NAME_LEN
        )));
    }

    let already_subscribed = state.newsletter.subscribe(&email);
    tracing::info!(%email, already_subscribed, "Newsletter signup");

    let message = if already_subscribed {
        "You are already on the list. Thanks!"
    } else {
        "Thanks for signing up! We will be in touch soon."
    };

    Ok(AppResponse::ok_with_message(
        NewsletterData {
            email: Some(email),
            name,
            already_subscribed,
            ignored: false,
        },
        message,
    ))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::json;
    use tower::util::ServiceExt;

    use crate::core::{Config, Server, ServerState};

    async fn post_signup(
        app: axum::Router,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::post("/api/newsletter")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn signup_then_duplicate() {
        let state = ServerState::initialize(&Config::default());

        let (status, body) = post_signup(
            Server::build_router(state.clone()),
            json!({ "email": "Rosa@Farm.Example" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["email"], "rosa@farm.example");
        assert_eq!(body["data"].get("alreadySubscribed"), None);

        let (status, body) = post_signup(
            Server::build_router(state),
            json!({ "email": "rosa@farm.example" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["alreadySubscribed"], true);
        assert!(body["message"].as_str().unwrap().contains("already on the list"));
    }

    #[tokio::test]
    async fn honeypot_reports_success_without_subscribing() {
        let state = ServerState::initialize(&Config::default());
        let (status, body) = post_signup(
            Server::build_router(state.clone()),
            json!({ "email": "bot@spam.example", "website": "https://spam.example" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["ignored"], true);
        assert!(!state.newsletter.is_subscribed("bot@spam.example"));
    }

    #[tokio::test]
    async fn invalid_email_is_rejected() {
        let state = ServerState::initialize(&Config::default());
        let (status, body) =
            post_signup(Server::build_router(state), json!({ "email": "nope" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("valid email"));
    }
}

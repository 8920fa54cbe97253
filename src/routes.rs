use crate::{
    api::{activity, quota, timesheet},
    auth::{handlers, middleware::require_login},
    config::Config,
    error::AppError,
    pages,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::from_fn, web};
use anyhow::{Result, anyhow};

type LimiterConfig = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-peer-IP budgets, built once at startup and shared by every worker.
#[derive(Clone)]
pub struct RateLimits {
    pub login: LimiterConfig,
    pub protected: LimiterConfig,
}

impl RateLimits {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            login: build_limiter(config.rate_login_per_min)?,
            protected: build_limiter(config.rate_protected_per_min)?,
        })
    }
}

fn build_limiter(requests_per_min: u32) -> Result<LimiterConfig> {
    let per_ms = if requests_per_min == 0 {
        1
    } else {
        (60_000 / requests_per_min as u64).max(1)
    };
    GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min.max(1))
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .ok_or_else(|| anyhow!("invalid rate limit: {requests_per_min} requests/min"))
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config, limits: &RateLimits) {
    // Undecodable form or query values become a 400 JSON body
    cfg.app_data(web::FormConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("Invalid form submission: {err}")).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("Invalid query string: {err}")).into()
    }));

    // Portal pages
    cfg.service(web::resource("/").route(web::get().to(pages::index)))
        .service(
            web::resource("/login")
                .wrap(Governor::new(&limits.login))
                .route(web::post().to(handlers::login)),
        )
        .service(web::resource("/logout").route(web::post().to(handlers::logout)))
        .service(web::resource("/navigate").route(web::post().to(pages::navigate)))
        .service(web::resource("/leave").route(web::post().to(pages::submit_leave)))
        .service(
            web::resource("/timesheet/export").route(web::post().to(pages::export_timesheet)),
        );

    // Read-only API, signed-in sessions only
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(from_fn(require_login))
            .wrap(Governor::new(&limits.protected))
            .service(web::resource("/quota").route(web::get().to(quota::list_quotas)))
            .service(web::resource("/quota/{leave_type}").route(web::get().to(quota::get_quota)))
            .service(web::resource("/activity").route(web::get().to(activity::recent_activity)))
            .service(web::resource("/timesheet").route(web::get().to(timesheet::timesheet))),
    );
}

// BROWSER
//  └─ portal_session cookie (HttpOnly, in-memory session)
//
// GET /            login view, or nav + current page
// POST /login      non-blank username & password signs the session in
// POST /navigate   switch page, 303 → /
// POST /logout     sign out, 303 → /
//
// GET /api/v1/*    JSON, 401 unless the cookie's session is signed in

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::SESSION_COOKIE;
    use crate::model::session::PageId;
    use crate::state::AppState;
    use crate::utils::html::escape;
    use actix_web::{
        App,
        body::MessageBody,
        cookie::Cookie,
        dev::ServiceResponse,
        http::{StatusCode, header},
        test::{self, TestRequest},
    };
    use std::net::SocketAddr;

    macro_rules! portal {
        () => {{
            portal!(web::Data::new(AppState::with_mock_ledger(&Config::default())))
        }};
        ($state:expr) => {{
            let config = Config::default();
            let limits = RateLimits::from_config(&config).unwrap();
            test::init_service(
                App::new()
                    .app_data($state)
                    .configure(|cfg| configure(cfg, &config, &limits)),
            )
            .await
        }};
    }

    /// Signs a new session in and returns the cookie the portal handed out.
    macro_rules! signed_in {
        ($app:expr) => {{
            let resp = test::call_service(
                &$app,
                TestRequest::post()
                    .uri("/login")
                    .peer_addr(peer())
                    .set_form(&[("username", "alice"), ("password", "pw")])
                    .to_request(),
            )
            .await;
            assert_eq!(resp.status(), StatusCode::OK);
            session_cookie(&resp)
        }};
    }

    /// A cookie naming no stored session.
    fn anonymous() -> Cookie<'static> {
        Cookie::new(SESSION_COOKIE, "not-signed-in")
    }

    fn peer() -> SocketAddr {
        "127.0.0.1:40000".parse().unwrap()
    }

    fn session_cookie<B>(resp: &ServiceResponse<B>) -> Cookie<'static> {
        resp.response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .map(|c| c.into_owned())
            .expect("session cookie set")
    }

    fn get(uri: &str, cookie: &Cookie<'static>) -> TestRequest {
        TestRequest::get()
            .uri(uri)
            .peer_addr(peer())
            .cookie(cookie.clone())
    }

    fn post<F: serde::Serialize>(uri: &str, cookie: &Cookie<'static>, form: &F) -> TestRequest {
        TestRequest::post()
            .uri(uri)
            .peer_addr(peer())
            .cookie(cookie.clone())
            .set_form(form)
    }

    fn post_empty(uri: &str, cookie: &Cookie<'static>) -> TestRequest {
        TestRequest::post()
            .uri(uri)
            .peer_addr(peer())
            .cookie(cookie.clone())
    }

    async fn body_text<B: MessageBody>(resp: ServiceResponse<B>) -> String {
        let bytes = test::read_body(resp).await;
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn leave_form<'a>(
        leave_type: &'a str,
        from: &'a str,
        to: &'a str,
        reason: &'a str,
    ) -> Vec<(&'static str, &'a str)> {
        vec![
            ("leave_type", leave_type),
            ("date_from", from),
            ("date_to", to),
            ("half_session", "am"),
            ("reason", reason),
            ("attachment", ""),
        ]
    }

    #[actix_web::test]
    async fn first_visit_shows_login_without_a_cookie() {
        let app = portal!();
        let resp = test::call_service(&app, TestRequest::get().uri("/").peer_addr(peer()).to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().get(header::SET_COOKIE).is_none());
        let body = body_text(resp).await;
        assert!(body.contains("Sign in with your corporate account"));
    }

    #[actix_web::test]
    async fn anonymous_visits_store_no_sessions() {
        let state = web::Data::new(AppState::with_mock_ledger(&Config::default()));
        let app = portal!(state.clone());

        for _ in 0..20 {
            test::call_service(&app, TestRequest::get().uri("/").peer_addr(peer()).to_request()).await;
        }
        let resp = test::call_service(
            &app,
            post("/navigate", &anonymous(), &[("page", "timesheet")]).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(state.sessions.stored().await, 0);

        let cookie = signed_in!(app);
        assert_eq!(state.sessions.stored().await, 1);
        assert!(state.sessions.get(cookie.value()).await.is_some_and(|s| s.logged_in));
    }

    #[actix_web::test]
    async fn failed_login_issues_no_cookie() {
        let app = portal!();
        let resp = test::call_service(
            &app,
            post("/login", &anonymous(), &[("username", ""), ("password", "pw")]).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(resp.headers().get(header::SET_COOKIE).is_none());
    }

    #[actix_web::test]
    async fn blank_credentials_keep_the_login_view() {
        let app = portal!();
        let cookie = anonymous();

        let resp = test::call_service(
            &app,
            post("/login", &cookie, &[("username", "alice"), ("password", "   ")]).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_text(resp).await;
        assert!(body.contains("Please enter both username and password."));
        assert!(body.contains(r#"value="alice""#));

        // still signed out on the next cycle
        let resp = test::call_service(&app, get("/", &cookie).to_request()).await;
        assert!(body_text(resp).await.contains(r#"action="/login""#));
    }

    #[actix_web::test]
    async fn missing_fields_count_as_blank() {
        let app = portal!();
        let cookie = anonymous();

        let resp = test::call_service(
            &app,
            post("/login", &cookie, &[("username", "alice")]).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn login_lands_on_dashboard() {
        let app = portal!();
        let cookie = anonymous();

        let resp = test::call_service(
            &app,
            post("/login", &cookie, &[("username", " bob "), ("password", "x")]).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_ne!(session_cookie(&resp).value(), cookie.value());
        let body = body_text(resp).await;
        assert!(body.contains(&escape(handlers::SIGNED_IN)));
        assert!(body.contains("Recent leave activity"));
    }

    #[actix_web::test]
    async fn navigation_switches_pages_and_is_idempotent() {
        let app = portal!();
        let cookie = signed_in!(app);

        for _ in 0..2 {
            let resp = test::call_service(
                &app,
                post("/navigate", &cookie, &[("page", PageId::Timesheet.as_ref())]).to_request(),
            )
            .await;
            assert_eq!(resp.status(), StatusCode::SEE_OTHER);
            assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");

            let resp = test::call_service(&app, get("/", &cookie).to_request()).await;
            assert!(body_text(resp).await.contains("Timesheet overview (preview)"));
        }
    }

    #[actix_web::test]
    async fn dashboard_shortcut_opens_request_form() {
        let app = portal!();
        let cookie = signed_in!(app);

        test::call_service(
            &app,
            post("/navigate", &cookie, &[("page", "request-leave")]).to_request(),
        )
        .await;
        let resp = test::call_service(&app, get("/", &cookie).to_request()).await;
        let body = body_text(resp).await;
        assert!(body.contains("Request new leave</h2>"));
        assert!(body.contains("You have enough quota for normal requests."));
    }

    #[actix_web::test]
    async fn unknown_page_is_rejected() {
        let app = portal!();
        let cookie = signed_in!(app);

        let resp = test::call_service(
            &app,
            post("/navigate", &cookie, &[("page", "payroll")]).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn navigation_is_ignored_while_signed_out() {
        let app = portal!();
        let cookie = anonymous();

        let resp = test::call_service(
            &app,
            post("/navigate", &cookie, &[("page", "timesheet")]).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);

        let resp = test::call_service(
            &app,
            post("/login", &cookie, &[("username", "a"), ("password", "b")]).to_request(),
        )
        .await;
        assert!(body_text(resp).await.contains("Recent leave activity"));
    }

    #[actix_web::test]
    async fn logout_returns_to_login_from_any_page() {
        let app = portal!();
        let cookie = signed_in!(app);

        test::call_service(
            &app,
            post("/navigate", &cookie, &[("page", "request-leave")]).to_request(),
        )
        .await;
        let resp = test::call_service(&app, post_empty("/logout", &cookie).to_request()).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);

        let resp = test::call_service(&app, get("/", &cookie).to_request()).await;
        let body = body_text(resp).await;
        assert!(body.contains(r#"action="/login""#));
        assert!(!body.contains("Request new leave</h2>"));
    }

    #[actix_web::test]
    async fn leave_request_end_before_start_is_rejected() {
        let app = portal!();
        let cookie = signed_in!(app);

        let resp = test::call_service(
            &app,
            post("/leave", &cookie, &leave_form("annual", "2025-11-10", "2025-11-08", "trip")).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_text(resp).await;
        assert!(body.contains("End date cannot be earlier than start date."));
    }

    #[actix_web::test]
    async fn leave_request_without_reason_is_rejected_first() {
        let app = portal!();
        let cookie = signed_in!(app);

        let resp = test::call_service(
            &app,
            post("/leave", &cookie, &leave_form("annual", "2025-11-10", "2025-11-08", "")).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_text(resp).await;
        assert!(body.contains("Please fill in the reason before submitting."));
        assert!(!body.contains("End date cannot be earlier than start date."));
    }

    #[actix_web::test]
    async fn valid_leave_request_is_accepted() {
        let app = portal!();
        let cookie = signed_in!(app);

        let resp = test::call_service(
            &app,
            post("/leave", &cookie, &leave_form("annual", "2025-11-10", "2025-11-12", "family matters"))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_text(resp).await;
        assert!(body.contains(pages::LEAVE_SUBMITTED));
        assert!(body.contains("family matters</textarea>"));
    }

    #[actix_web::test]
    async fn business_leave_is_accepted_despite_low_quota_advisory() {
        let app = portal!();
        let cookie = signed_in!(app);

        let resp = test::call_service(
            &app,
            post("/leave", &cookie, &leave_form("business", "2025-11-10", "2025-11-11", "client visit"))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_text(resp).await;
        assert!(body.contains(pages::LEAVE_SUBMITTED));
        assert!(body.contains("should block submission"));
    }

    #[actix_web::test]
    async fn rejected_leave_request_leaves_the_session_alone() {
        let app = portal!();
        let cookie = signed_in!(app);

        let resp = test::call_service(
            &app,
            post("/leave", &cookie, &leave_form("annual", "2025-11-10", "2025-11-12", " ")).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_text(resp).await;
        assert!(body.contains("Please fill in the reason before submitting."));
        assert!(body.contains("Request new leave</h2>"));

        // still on the dashboard
        let resp = test::call_service(&app, get("/", &cookie).to_request()).await;
        let body = body_text(resp).await;
        assert!(body.contains("Recent leave activity"));
        assert!(!body.contains("Request new leave</h2>"));

        // an accepted request moves the session to the form page
        test::call_service(
            &app,
            post("/leave", &cookie, &leave_form("sick", "2025-11-10", "2025-11-10", "flu")).to_request(),
        )
        .await;
        let resp = test::call_service(&app, get("/", &cookie).to_request()).await;
        assert!(body_text(resp).await.contains("Request new leave</h2>"));
    }

    #[actix_web::test]
    async fn leave_request_while_signed_out_goes_back_to_login() {
        let app = portal!();
        let cookie = anonymous();

        let resp = test::call_service(
            &app,
            post("/leave", &cookie, &leave_form("annual", "2025-11-10", "2025-11-12", "x")).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    }

    #[actix_web::test]
    async fn quota_panel_follows_query_type() {
        let app = portal!();
        let cookie = signed_in!(app);
        test::call_service(
            &app,
            post("/navigate", &cookie, &[("page", "request-leave")]).to_request(),
        )
        .await;

        let resp = test::call_service(&app, get("/?type=sick", &cookie).to_request()).await;
        let body = body_text(resp).await;
        assert!(body.contains("Sick leave may require a medical certificate for HR approval."));
    }

    #[actix_web::test]
    async fn export_only_shows_a_message() {
        let app = portal!();
        let cookie = signed_in!(app);

        let resp = test::call_service(&app, post_empty("/timesheet/export", &cookie).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
        let body = body_text(resp).await;
        assert!(body.contains(pages::timesheet::EXPORT_MESSAGE));
    }

    #[actix_web::test]
    async fn api_requires_a_signed_in_session() {
        let app = portal!();
        let resp = test::call_service(
            &app,
            TestRequest::get().uri("/api/v1/quota").peer_addr(peer()).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let cookie = anonymous();
        let resp = test::call_service(&app, get("/api/v1/activity", &cookie).to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn api_serves_quota_with_advisory() {
        let app = portal!();
        let cookie = signed_in!(app);

        let resp = test::call_service(&app, get("/api/v1/quota/business", &cookie).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["leave_type"], "business");
        assert_eq!(json["remaining"], 1);
        assert_eq!(json["total"], 5);
        assert_eq!(json["advisory"], "low_business_quota");

        let resp = test::call_service(&app, get("/api/v1/quota/unpaid", &cookie).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = test::call_service(&app, get("/api/v1/quota", &cookie).to_request()).await;
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json.as_array().map(Vec::len), Some(3));
    }

    #[actix_web::test]
    async fn api_serves_activity_and_timesheet() {
        let app = portal!();
        let cookie = signed_in!(app);

        let resp = test::call_service(&app, get("/api/v1/activity", &cookie).to_request()).await;
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json[0]["status"], "pending");
        assert_eq!(json[0]["awaiting"], "dm");
        assert!(json[1].get("awaiting").is_none());

        let resp = test::call_service(&app, get("/api/v1/timesheet", &cookie).to_request()).await;
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["entries"].as_array().map(Vec::len), Some(3));
        assert_eq!(json["summary"]["total_hours"]["value"], "168 h");
    }
}

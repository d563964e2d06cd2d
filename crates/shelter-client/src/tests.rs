use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mockito::{Matcher, Server};
use reqwest::StatusCode;
use serde_json::json;
use shelter_core::{
    AnimalFilters, AuthUser, LoginRequest, Role, Status, VaccinationTypeRequest,
    DEFAULT_DOG_FACT_LIMIT,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::api::{animals, applications, auth, dog_facts, vaccinations};
use crate::{
    ApiRequest, AuthenticatedClient, ClientError, ExpiredReason, HttpRefresher, LoginRedirect,
    MemorySessionStore, RefreshError, RefreshedSession, Refresher, SessionStore,
};

#[derive(Default)]
struct CountingRedirect {
    calls: AtomicUsize,
}

impl CountingRedirect {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LoginRedirect for CountingRedirect {
    fn redirect_to_login(&self, _error: &RefreshError) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

/// Refresher held open until the test releases it.
struct GatedRefresher {
    calls: AtomicUsize,
    gate: Notify,
    outcome: Result<String, RefreshError>,
}

impl GatedRefresher {
    fn issuing(token: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            gate: Notify::new(),
            outcome: Ok(token.to_string()),
        })
    }

    fn failing(error: RefreshError) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            gate: Notify::new(),
            outcome: Err(error),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Refresher for GatedRefresher {
    async fn refresh(&self) -> Result<RefreshedSession, RefreshError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        self.outcome.clone().map(|access_token| RefreshedSession {
            access_token,
            expires_in: 900,
        })
    }
}

fn staff_user() -> AuthUser {
    AuthUser {
        id: 4,
        email: "staff@example.com".to_string(),
        first_name: "Sam".to_string(),
        last_name: "Berg".to_string(),
        phone: None,
        is_active: Some(true),
        role: Role::Staff,
    }
}

fn me_body() -> String {
    json!({
        "id": 4,
        "email": "staff@example.com",
        "firstName": "Sam",
        "lastName": "Berg",
        "isActive": true,
        "role": "STAFF"
    })
    .to_string()
}

fn refresh_body(token: &str) -> String {
    json!({
        "accessToken": token,
        "tokenType": "Bearer",
        "expiresInSeconds": 900
    })
    .to_string()
}

async fn wait_for_queue(client: &AuthenticatedClient, expected: usize) {
    for _ in 0..1000 {
        if client.coordinator().queued() == expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(2)).await;
    }
    panic!("expected {expected} queued requests");
}

#[tokio::test]
async fn success_path_leaves_refresh_untouched() {
    let mut server = Server::new_async().await;
    let body = me_body();
    let me = server
        .mock("GET", "/api/me")
        .match_header("authorization", "Bearer valid")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.clone())
        .expect(1)
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/api/auth/refresh")
        .expect(0)
        .create_async()
        .await;

    let client = AuthenticatedClient::builder(server.url())
        .session_store(Arc::new(MemorySessionStore::with_access_token("valid")))
        .build()
        .expect("client");

    let response = client.send(ApiRequest::get("/api/me")).await.expect("send");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.expect("body"), body);
    assert_eq!(client.coordinator().epoch(), 0);
    assert!(!client.coordinator().in_progress());

    me.assert_async().await;
    refresh.assert_async().await;
}

#[tokio::test]
async fn queued_requests_share_one_refresh() {
    let mut server = Server::new_async().await;
    let mut mocks = Vec::new();
    for id in 1..=3 {
        let path = format!("/api/animal/{id}");
        mocks.push(
            server
                .mock("GET", path.as_str())
                .match_header("authorization", "Bearer expired")
                .with_status(401)
                .expect(1)
                .create_async()
                .await,
        );
        mocks.push(
            server
                .mock("GET", path.as_str())
                .match_header("authorization", "Bearer fresh")
                .with_status(200)
                .with_body(json!({ "id": id, "name": format!("animal-{id}") }).to_string())
                .expect(1)
                .create_async()
                .await,
        );
    }

    let refresher = GatedRefresher::issuing("fresh");
    let client = AuthenticatedClient::builder(server.url())
        .session_store(Arc::new(MemorySessionStore::with_access_token("expired")))
        .refresher(refresher.clone())
        .build()
        .expect("client");

    let handles = (1..=3)
        .map(|id| {
            let client = client.clone();
            tokio::spawn(async move { animals::get(&client, id).await })
        })
        .collect::<Vec<_>>();

    wait_for_queue(&client, 2).await;
    assert_eq!(refresher.calls(), 1);
    refresher.gate.notify_one();

    for (id, handle) in (1..=3).zip(handles) {
        let animal = handle.await.expect("join").expect("animal");
        assert_eq!(animal.id, id);
        assert_eq!(animal.name, format!("animal-{id}"));
    }
    assert_eq!(refresher.calls(), 1);
    assert_eq!(client.session().access_token().as_deref(), Some("fresh"));
    for mock in mocks {
        mock.assert_async().await;
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_unauthorized_requests_refresh_once_over_http() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/me")
        .match_header("authorization", "Bearer expired")
        .with_status(401)
        .create_async()
        .await;
    server
        .mock("GET", "/api/me")
        .match_header("authorization", "Bearer fresh")
        .with_status(200)
        .with_body(me_body())
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/api/auth/refresh")
        .with_status(200)
        .with_body(refresh_body("fresh"))
        .expect(1)
        .create_async()
        .await;

    let client = AuthenticatedClient::builder(server.url())
        .session_store(Arc::new(MemorySessionStore::with_access_token("expired")))
        .build()
        .expect("client");

    let handles = (0..6)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { auth::me(&client).await })
        })
        .collect::<Vec<_>>();
    for handle in handles {
        let user = handle.await.expect("join").expect("me");
        assert_eq!(user, staff_user());
    }

    assert_eq!(client.coordinator().epoch(), 1);
    refresh.assert_async().await;
}

#[tokio::test]
async fn failed_refresh_expires_session_and_redirects_once() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/me")
        .with_status(401)
        .expect(1)
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/api/auth/refresh")
        .with_status(401)
        .with_body("refresh token expired")
        .expect(1)
        .create_async()
        .await;

    let session = Arc::new(MemorySessionStore::with_access_token("expired"));
    session.set_user(staff_user());
    let redirect = Arc::new(CountingRedirect::default());
    let client = AuthenticatedClient::builder(server.url())
        .session_store(session.clone())
        .login_redirect(redirect.clone())
        .build()
        .expect("client");

    let err = auth::me(&client).await.expect_err("expired");
    match err {
        ClientError::AuthorizationExpired(ExpiredReason::RefreshFailed(refresh_err)) => {
            assert_eq!(refresh_err.status, Some(StatusCode::UNAUTHORIZED));
            assert!(refresh_err.message.contains("refresh token expired"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(redirect.calls(), 1);
    assert!(session.access_token().is_none());
    assert!(session.user().is_none());
    assert!(!client.coordinator().in_progress());
    refresh.assert_async().await;
}

#[tokio::test]
async fn failed_refresh_rejects_every_queued_request() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", Matcher::Regex(r"^/api/animal/\d+$".to_string()))
        .with_status(401)
        .expect(3)
        .create_async()
        .await;

    let error = RefreshError::rejected(StatusCode::UNAUTHORIZED, "revoked");
    let refresher = GatedRefresher::failing(error.clone());
    let redirect = Arc::new(CountingRedirect::default());
    let session = Arc::new(MemorySessionStore::with_access_token("expired"));
    let client = AuthenticatedClient::builder(server.url())
        .session_store(session.clone())
        .refresher(refresher.clone())
        .login_redirect(redirect.clone())
        .build()
        .expect("client");

    let handles = (1..=3)
        .map(|id| {
            let client = client.clone();
            tokio::spawn(async move { animals::get(&client, id).await })
        })
        .collect::<Vec<_>>();

    wait_for_queue(&client, 2).await;
    refresher.gate.notify_one();

    for handle in handles {
        let err = handle.await.expect("join").expect_err("rejected");
        assert!(matches!(
            err,
            ClientError::AuthorizationExpired(ExpiredReason::RefreshFailed(ref failed))
                if *failed == error
        ));
    }
    assert_eq!(refresher.calls(), 1);
    assert_eq!(redirect.calls(), 1);
    assert!(session.access_token().is_none());
}

#[tokio::test]
async fn retry_rejected_again_is_not_refreshed_twice() {
    let mut server = Server::new_async().await;
    let me = server
        .mock("GET", "/api/me")
        .with_status(401)
        .expect(2)
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/api/auth/refresh")
        .with_status(200)
        .with_body(refresh_body("fresh"))
        .expect(1)
        .create_async()
        .await;

    let redirect = Arc::new(CountingRedirect::default());
    let client = AuthenticatedClient::builder(server.url())
        .session_store(Arc::new(MemorySessionStore::with_access_token("expired")))
        .login_redirect(redirect.clone())
        .build()
        .expect("client");

    let err = auth::me(&client).await.expect_err("retry rejected");
    assert!(matches!(
        err,
        ClientError::AuthorizationExpired(ExpiredReason::RetryRejected)
    ));
    assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    assert_eq!(redirect.calls(), 0);
    assert_eq!(client.session().access_token().as_deref(), Some("fresh"));

    me.assert_async().await;
    refresh.assert_async().await;
}

#[tokio::test]
async fn retried_request_is_not_retried_again() {
    let mut server = Server::new_async().await;
    let me = server
        .mock("GET", "/api/me")
        .with_status(401)
        .expect(1)
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/api/auth/refresh")
        .expect(0)
        .create_async()
        .await;

    let client = AuthenticatedClient::builder(server.url())
        .session_store(Arc::new(MemorySessionStore::with_access_token("expired")))
        .build()
        .expect("client");

    let mut request = ApiRequest::get("/api/me");
    request.retried = true;
    let err = client.send(request).await.expect_err("already retried");
    assert!(matches!(
        err,
        ClientError::AuthorizationExpired(ExpiredReason::RetryRejected)
    ));

    me.assert_async().await;
    refresh.assert_async().await;
}

#[tokio::test]
async fn server_errors_pass_through_without_refresh() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/animal/1")
        .with_status(500)
        .with_body("boom")
        .expect(2)
        .create_async()
        .await;
    server
        .mock("DELETE", "/api/animal/delete/2")
        .with_status(403)
        .with_body("forbidden")
        .expect(1)
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/api/auth/refresh")
        .expect(0)
        .create_async()
        .await;

    let client = AuthenticatedClient::builder(server.url())
        .session_store(Arc::new(MemorySessionStore::with_access_token("valid")))
        .build()
        .expect("client");

    let response = client
        .send(ApiRequest::get("/api/animal/1"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text().await.expect("body"), "boom");

    match animals::get(&client, 1).await {
        Err(ClientError::Server { status, body }) => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, "boom");
        }
        other => panic!("unexpected result: {other:?}"),
    }

    let err = animals::delete(&client, 2).await.expect_err("forbidden");
    assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
    assert!(!err.is_authorization_expired());

    refresh.assert_async().await;
}

#[tokio::test]
async fn network_errors_pass_through_without_refresh() {
    let refresher = GatedRefresher::issuing("unused");
    let client = AuthenticatedClient::builder("http://127.0.0.1:9")
        .refresher(refresher.clone())
        .build()
        .expect("client");

    let err = client
        .send(ApiRequest::get("/api/me"))
        .await
        .expect_err("connection refused");
    assert!(matches!(err, ClientError::Network(_)));
    assert_eq!(refresher.calls(), 0);
}

#[tokio::test]
async fn login_stores_token_used_by_later_calls() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/auth/login")
        .match_body(Matcher::Json(json!({
            "email": "staff@example.com",
            "password": "hunter22"
        })))
        .with_status(200)
        .with_header(
            "set-cookie",
            "refresh_token=opaque; Path=/api/auth; HttpOnly",
        )
        .with_body(refresh_body("access-1"))
        .create_async()
        .await;
    let me = server
        .mock("GET", "/api/me")
        .match_header("authorization", "Bearer access-1")
        .with_status(200)
        .with_body(me_body())
        .expect(1)
        .create_async()
        .await;

    let session = Arc::new(MemorySessionStore::default());
    let client = AuthenticatedClient::builder(server.url())
        .session_store(session.clone())
        .build()
        .expect("client");

    let auth = auth::login(
        &client,
        &LoginRequest {
            email: "staff@example.com".to_string(),
            password: "hunter22".to_string(),
        },
    )
    .await
    .expect("login");
    assert_eq!(auth.expires_in_seconds, 900);
    assert_eq!(session.access_token().as_deref(), Some("access-1"));
    assert!(session.expires_at().is_some());

    let user = auth::me(&client).await.expect("me");
    assert_eq!(user.display_name(), "Sam Berg");
    me.assert_async().await;
}

#[tokio::test]
async fn login_failure_is_not_refreshed() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/auth/login")
        .with_status(401)
        .with_body("bad credentials")
        .create_async()
        .await;
    let refresh = server
        .mock("POST", "/api/auth/refresh")
        .expect(0)
        .create_async()
        .await;

    let client = AuthenticatedClient::builder(server.url())
        .build()
        .expect("client");
    let err = auth::login(
        &client,
        &LoginRequest {
            email: "staff@example.com".to_string(),
            password: "wrong".to_string(),
        },
    )
    .await
    .expect_err("rejected");
    assert!(matches!(
        err,
        ClientError::Server { status, .. } if status == StatusCode::UNAUTHORIZED
    ));
    refresh.assert_async().await;
}

#[tokio::test]
async fn logout_clears_session_even_when_server_fails() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/auth/logout")
        .with_status(500)
        .create_async()
        .await;

    let session = Arc::new(MemorySessionStore::with_access_token("valid"));
    session.set_user(staff_user());
    let client = AuthenticatedClient::builder(server.url())
        .session_store(session.clone())
        .build()
        .expect("client");

    let err = auth::logout(&client).await.expect_err("server error");
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert!(session.access_token().is_none());
    assert!(session.user().is_none());
}

#[tokio::test]
async fn animal_listing_sends_paging_and_filters() {
    let mut server = Server::new_async().await;
    let list = server
        .mock("GET", "/api/animal")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("size".into(), "8".into()),
            Matcher::UrlEncoded("sortBy".into(), "name".into()),
            Matcher::UrlEncoded("sortDirection".into(), "asc".into()),
            Matcher::UrlEncoded("status".into(), "AVAILABLE".into()),
            Matcher::UrlEncoded("search".into(), "golden retriever".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "content": [{ "id": 9, "name": "Rex", "status": "AVAILABLE", "price": 150 }],
                "totalElements": 9,
                "totalPages": 2,
                "number": 1,
                "size": 8
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = AuthenticatedClient::builder(server.url())
        .build()
        .expect("client");
    let filters = AnimalFilters {
        status: Some(Status::Available),
        sex: Some("all".to_string()),
        search: Some("golden retriever".to_string()),
        ..AnimalFilters::default()
    };
    let page = animals::list(&client, &animals::default_query().page(1), &filters)
        .await
        .expect("page");
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.content[0].name, "Rex");
    assert_eq!(page.content[0].price, 150);
    list.assert_async().await;
}

#[tokio::test]
async fn reject_application_names_reviewer() {
    let mut server = Server::new_async().await;
    let reject = server
        .mock("PATCH", "/api/adoption-application/reject/12")
        .match_query(Matcher::UrlEncoded("reviewedByUserId".into(), "4".into()))
        .with_status(200)
        .with_body(
            json!({
                "id": 12,
                "user": { "id": 2, "email": "a@example.com", "firstName": "Ada", "lastName": "Moss" },
                "animal": { "id": 9, "name": "Rex" },
                "status": "REJECTED",
                "reviewedByUser": { "id": 4, "email": "staff@example.com", "firstName": "Sam", "lastName": "Berg" }
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = AuthenticatedClient::builder(server.url())
        .build()
        .expect("client");
    let application = applications::reject(&client, 12, 4).await.expect("reject");
    assert_eq!(application.status, Status::Rejected);
    assert_eq!(
        application.reviewed_by_user.map(|user| user.full_name()),
        Some("Sam Berg".to_string())
    );
    reject.assert_async().await;
}

#[tokio::test]
async fn queued_request_rejected_after_refresh_is_not_refreshed_again() {
    let mut server = Server::new_async().await;
    let leader_expired = server
        .mock("GET", "/api/animal/1")
        .match_header("authorization", "Bearer expired")
        .with_status(401)
        .expect(1)
        .create_async()
        .await;
    let leader_fresh = server
        .mock("GET", "/api/animal/1")
        .match_header("authorization", "Bearer fresh")
        .with_status(200)
        .with_body(json!({ "id": 1, "name": "Rex" }).to_string())
        .expect(1)
        .create_async()
        .await;
    let forbidden = server
        .mock("GET", "/api/animal/2")
        .with_status(401)
        .expect(2)
        .create_async()
        .await;

    let refresher = GatedRefresher::issuing("fresh");
    let redirect = Arc::new(CountingRedirect::default());
    let client = AuthenticatedClient::builder(server.url())
        .session_store(Arc::new(MemorySessionStore::with_access_token("expired")))
        .refresher(refresher.clone())
        .login_redirect(redirect.clone())
        .build()
        .expect("client");

    let leader = {
        let client = client.clone();
        tokio::spawn(async move { animals::get(&client, 1).await })
    };
    for _ in 0..1000 {
        if refresher.calls() == 1 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(2)).await;
    }
    assert_eq!(refresher.calls(), 1);

    let queued = {
        let client = client.clone();
        tokio::spawn(async move { animals::get(&client, 2).await })
    };
    wait_for_queue(&client, 1).await;
    refresher.gate.notify_one();

    let animal = leader.await.expect("join").expect("leader retried");
    assert_eq!(animal.name, "Rex");
    let err = queued.await.expect("join").expect_err("queued retry rejected");
    assert!(matches!(
        err,
        ClientError::AuthorizationExpired(ExpiredReason::RetryRejected)
    ));
    assert_eq!(refresher.calls(), 1);
    assert_eq!(redirect.calls(), 0);

    leader_expired.assert_async().await;
    leader_fresh.assert_async().await;
    forbidden.assert_async().await;
}

#[tokio::test]
async fn unreadable_refresh_rejection_keeps_status() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|window| window == b"\r\n\r\n") {
            let read = socket.read(&mut buf).await.expect("read request");
            if read == 0 {
                break;
            }
            request.extend_from_slice(&buf[..read]);
        }
        socket
            .write_all(b"HTTP/1.1 401 Unauthorized\r\ncontent-length: 64\r\n\r\ncut")
            .await
            .expect("write response");
        socket.shutdown().await.expect("shutdown");
    });

    let refresher = HttpRefresher::new(reqwest::Client::new(), &format!("http://{addr}"));
    let err = refresher.refresh().await.expect_err("truncated body");
    assert_eq!(err.status, Some(StatusCode::UNAUTHORIZED));
    assert!(!err.message.is_empty());
    server.await.expect("server");
}

#[tokio::test]
async fn vaccination_types_search_and_update() {
    let mut server = Server::new_async().await;
    let list = server
        .mock("GET", "/api/vaccination-type")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("sortBy".into(), "vaccineName".into()),
            Matcher::UrlEncoded("sortDirection".into(), "asc".into()),
            Matcher::UrlEncoded("requiredForAdoption".into(), "true".into()),
            Matcher::UrlEncoded("search".into(), "rabies".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "content": [{ "id": 3, "vaccineName": "Rabies", "durationMonths": 12, "requiredForAdoption": true }],
                "totalElements": 1,
                "totalPages": 1,
                "number": 0,
                "size": 10
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;
    let update = server
        .mock("PUT", "/api/vaccination-type/update/3")
        .match_body(Matcher::Json(json!({
            "vaccineName": "Rabies booster",
            "durationMonths": 36,
            "requiredForAdoption": 1
        })))
        .with_status(200)
        .with_body(
            json!({ "id": 3, "vaccineName": "Rabies booster", "durationMonths": 36, "requiredForAdoption": true })
                .to_string(),
        )
        .expect(1)
        .create_async()
        .await;
    let get = server
        .mock("GET", "/api/vaccination-type/3")
        .with_status(200)
        .with_body(
            json!({ "id": 3, "vaccineName": "Rabies booster", "durationMonths": 36, "requiredForAdoption": true })
                .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let client = AuthenticatedClient::builder(server.url())
        .build()
        .expect("client");
    let page = vaccinations::list_types(
        &client,
        &vaccinations::default_type_query(),
        Some(true),
        Some("rabies"),
    )
    .await
    .expect("types");
    assert_eq!(page.content[0].vaccine_name, "Rabies");

    let request = VaccinationTypeRequest {
        vaccine_name: "Rabies booster".to_string(),
        description: None,
        duration_months: 36,
        required_for_adoption: 1,
    };
    let updated = vaccinations::update_type(&client, 3, &request)
        .await
        .expect("update");
    assert_eq!(updated.duration_months, 36);
    let fetched = vaccinations::get_type(&client, 3).await.expect("get");
    assert_eq!(fetched, updated);

    list.assert_async().await;
    update.assert_async().await;
    get.assert_async().await;
}

#[tokio::test]
async fn dog_facts_are_requested_with_limit() {
    let mut server = Server::new_async().await;
    let facts = server
        .mock("GET", "/api/dog-facts")
        .match_query(Matcher::UrlEncoded("limit".into(), "2".into()))
        .match_header("authorization", "Bearer valid")
        .with_status(200)
        .with_body(json!(["Dogs sweat through their paws.", "A dog's nose print is unique."]).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = AuthenticatedClient::builder(server.url())
        .session_store(Arc::new(MemorySessionStore::with_access_token("valid")))
        .build()
        .expect("client");
    let list = dog_facts::list(&client, DEFAULT_DOG_FACT_LIMIT)
        .await
        .expect("facts");
    assert_eq!(list.len(), 2);
    assert_eq!(list[0], "Dogs sweat through their paws.");
    facts.assert_async().await;
}

use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;

use event_portal::config::{init_db, run_migrations, AccessPolicy, DbPool, HttpSettings};
use event_portal::modules::auth::{interface::UserRepository, model::Role};
use event_portal::services::{jwt::JwtService, metrics::MetricsRegistry};
use event_portal::store::{MemoryStore, Store};

#[allow(dead_code)]
pub const TEST_SECRET: &str = "test-secret-key-for-testing-only";

// Allow dead_code for utilities used by other test files
#[allow(dead_code)]
pub struct TestContext {
    pub server: TestServer,
    pub store: Store,
    /// Set when the app runs on the in-process store.
    pub memory: Option<Arc<MemoryStore>>,
    /// Set when the app runs on MySQL.
    pub db: Option<DbPool>,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        Self::with_settings(HttpSettings {
            auth_rate_limit_burst: 1000,
            ..HttpSettings::default()
        })
    }

    /// Management routes on the public prefixes require an admin token.
    pub fn strict() -> Self {
        Self::with_settings(HttpSettings {
            access_policy: AccessPolicy::Strict,
            auth_rate_limit_burst: 1000,
            ..HttpSettings::default()
        })
    }

    pub fn with_settings(settings: HttpSettings) -> Self {
        let memory = Arc::new(MemoryStore::new());
        Self::build(Store::in_memory(memory.clone()), Some(memory), None, settings)
    }

    /// App backed by the MySQL repositories. Needs `TEST_DATABASE_URL` or
    /// `DATABASE_URL`; migrations run on connect.
    pub async fn mysql() -> Self {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("TEST_DATABASE_URL")
            .unwrap_or_else(|_| std::env::var("DATABASE_URL").expect("DATABASE_URL must be set"));

        let db = init_db(&database_url, 5)
            .await
            .expect("Failed to connect to test database");
        run_migrations(&db).await.expect("Failed to run migrations");

        Self::build(
            Store::mysql(db.clone()),
            None,
            Some(db),
            HttpSettings {
                auth_rate_limit_burst: 1000,
                ..HttpSettings::default()
            },
        )
    }

    fn build(
        store: Store,
        memory: Option<Arc<MemoryStore>>,
        db: Option<DbPool>,
        settings: HttpSettings,
    ) -> Self {
        let metrics = MetricsRegistry::new().expect("Failed to build metrics registry");

        let app = event_portal::create_app(
            store.clone(),
            JwtService::new(TEST_SECRET),
            metrics,
            settings,
        );
        let server = TestServer::new(app).expect("Failed to create test server");

        Self {
            server,
            store,
            memory,
            db,
        }
    }

    pub fn memory(&self) -> &MemoryStore {
        self.memory.as_deref().expect("context is not backed by MemoryStore")
    }

    pub fn db(&self) -> &DbPool {
        self.db.as_ref().expect("context is not backed by MySQL")
    }

    pub async fn signup(&self, name: &str, email: &str) {
        self.server
            .post("/api/auth/signup")
            .json(&json!({
                "name": name,
                "email": email,
                "password": test_password()
            }))
            .await
            .assert_status(axum::http::StatusCode::CREATED);
    }

    /// Logs in and returns the full response body.
    pub async fn login(&self, email: &str) -> Value {
        let response = self
            .server
            .post("/api/auth/login")
            .json(&json!({ "email": email, "password": test_password() }))
            .await;
        response.assert_status_ok();
        response.json()
    }

    /// Fresh user account; returns `(user id, token)`.
    pub async fn user(&self) -> (i64, String) {
        let email = test_email();
        self.signup("Test User", &email).await;
        let body = self.login(&email).await;
        (
            body["user"]["id"].as_i64().unwrap(),
            body["token"].as_str().unwrap().to_string(),
        )
    }

    /// Fresh account promoted out of band before it logs in.
    pub async fn admin(&self) -> String {
        let email = test_email();
        self.signup("Test Admin", &email).await;
        assert!(self.store.users.set_role(&email, Role::Admin).await.unwrap());
        self.login(&email).await["token"].as_str().unwrap().to_string()
    }

    /// Creates an event through the API and returns its id.
    pub async fn create_event(&self, token: Option<&str>, title: &str, date: &str) -> i64 {
        let mut request = self.server.post("/api/events").json(&json!({
            "title": title,
            "category": "Workshop",
            "date": date,
            "description": "Hands-on session",
            "image": "https://example.com/cover.png"
        }));
        if let Some(token) = token {
            request = request.authorization_bearer(token);
        }

        request.await.assert_status(axum::http::StatusCode::CREATED);

        let events: Vec<Value> = self.server.get("/api/events").await.json();
        events
            .iter()
            .find(|e| e["title"] == title)
            .and_then(|e| e["id"].as_i64())
            .expect("created event missing from listing")
    }

    /// Registers the token's owner for `event_id` and returns the registration id.
    pub async fn register(&self, token: &str, event_id: i64) -> i64 {
        let response = self
            .server
            .post("/api/registrations")
            .authorization_bearer(token)
            .json(&json!({
                "event_id": event_id,
                "name": "Grace Hopper",
                "email": "grace@example.com",
                "phone": "555-0100",
                "preferred_date": "2025-06-01",
                "notes": "Front row please"
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        response.json::<Value>()["id"].as_i64().unwrap()
    }
}

// Helper to generate a title no other test run shares
#[allow(dead_code)]
pub fn unique_title(prefix: &str) -> String {
    format!("{prefix} {}", uuid::Uuid::new_v4())
}

// Helper to generate unique test email
#[allow(dead_code)]
pub fn test_email() -> String {
    format!("test_{}@example.com", uuid::Uuid::new_v4())
}

// Helper to generate test password
#[allow(dead_code)]
pub fn test_password() -> &'static str {
    "TestPassword123!"
}

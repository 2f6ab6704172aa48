pub mod auth;
pub mod client;
pub mod dashboard;
pub mod health;
pub mod operators;
pub mod stations;

pub use client::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::models::{CreateOperatorRequest, Role, UpdateOperatorRequest};
    use crate::session::SessionStore;
    use axum::extract::Path;
    use axum::http::{header, HeaderMap, StatusCode};
    use axum::response::IntoResponse;
    use axum::routing::{get, post, put};
    use axum::{Json, Router};
    use std::sync::{Arc, Mutex};

    /// Stand-in for the remote backend: canned login reply, bearer-guarded
    /// dashboard, and a stateful operators collection.
    fn stand_in_backend() -> Router {
        let operators: Arc<Mutex<Vec<serde_json::Value>>> = Arc::new(Mutex::new(Vec::new()));
        let list_state = operators.clone();
        let create_state = operators;

        Router::new()
            .route(
                "/api/auth/login/",
                post(|Json(body): Json<serde_json::Value>| async move {
                    assert_eq!(body["username"], "admin@x.com");
                    assert_eq!(body["password"], "pw");
                    Json(serde_json::json!({
                        "id": "u-1",
                        "phone": "+251900000000",
                        "full_name": "Abebe Bikila",
                        "email": "admin@x.com",
                        "role": "admin",
                        "access_token": "acc-1",
                        "refresh_token": "ref-1",
                        "station": null
                    }))
                }),
            )
            .route(
                "/api/admin/dashboard/",
                get(|headers: HeaderMap| async move {
                    let bearer = headers
                        .get(header::AUTHORIZATION)
                        .and_then(|v| v.to_str().ok())
                        .is_some_and(|v| v.starts_with("Bearer "));
                    if !bearer {
                        return StatusCode::UNAUTHORIZED.into_response();
                    }
                    Json(serde_json::json!({
                        "total_stations": 3,
                        "active_stations": 2,
                        "total_operators": 4,
                        "active_operators": 4,
                        "total_citizens": 120,
                        "stations_by_type": { "police": 1, "medical": 1, "fire": 1 }
                    }))
                    .into_response()
                }),
            )
            .route(
                "/api/admin/operators/",
                get(move || {
                    let operators = list_state.clone();
                    async move {
                        let data = operators.lock().unwrap().clone();
                        Json(serde_json::json!({ "total": data.len(), "data": data }))
                    }
                }),
            )
            .route(
                "/api/admin/operators/create/",
                post(move |Json(req): Json<serde_json::Value>| {
                    let operators = create_state.clone();
                    async move {
                        let operator = serde_json::json!({
                            "id": format!("op-{}", operators.lock().unwrap().len() + 1),
                            "phone": req["phone"],
                            "full_name": req["full_name"],
                            "email": req["email"],
                            "role": "operator",
                            "station": null,
                            "is_active": true
                        });
                        operators.lock().unwrap().push(operator.clone());
                        let mut reply = operator;
                        reply["temporary_password"] = "Abc123".into();
                        Json(reply)
                    }
                }),
            )
            .route(
                "/api/admin/operators/{id}/",
                put(
                    |Path(id): Path<String>, Json(req): Json<serde_json::Value>| async move {
                        Json(serde_json::json!({
                            "id": id,
                            "phone": "+251911111111",
                            "full_name": "Sara Tesfaye",
                            "email": "sara@example.com",
                            "role": "operator",
                            "station": null,
                            "is_active": req["is_active"].as_bool().unwrap_or(true)
                        }))
                    },
                ),
            )
    }

    async fn spawn_backend() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, stand_in_backend()).await.unwrap();
        });
        format!("http://{}", addr)
    }

    // One test drives the whole global-client flow: the process-wide client
    // can only be initialized once per test binary.
    #[tokio::test]
    async fn login_dashboard_and_operator_lifecycle() {
        let base_url = spawn_backend().await;
        init_api_client(&base_url, SessionStore::in_memory());

        let response = auth::login("admin@x.com", "pw").await.unwrap();
        assert_eq!(response.role, Role::Admin);

        // Tokens and profile were persisted for subsequent requests
        let session = api_client().session();
        assert_eq!(session.access_token().as_deref(), Some("acc-1"));
        assert_eq!(session.user().unwrap().full_name, "Abebe Bikila");

        // The dashboard endpoint rejects anything without the stored bearer
        let dashboard = dashboard::admin().await.unwrap();
        assert_eq!(dashboard.total_stations, 3);
        assert_eq!(dashboard.stations_by_type.police, 1);

        // Create never inserts locally: the authoritative list is re-fetched
        // and must contain the new operator exactly once.
        let created = operators::create(CreateOperatorRequest {
            full_name: "Sara Tesfaye".to_string(),
            phone: "+251911111111".to_string(),
            email: "sara@example.com".to_string(),
            station_id: "st-1".to_string(),
        })
        .await
        .unwrap();
        assert_eq!(created.temporary_password, "Abc123");
        assert!(created.operator.is_active);

        let listed = operators::list().await.unwrap();
        assert_eq!(listed.total, 1);
        let occurrences = listed
            .data
            .iter()
            .filter(|op| op.email == "sara@example.com")
            .count();
        assert_eq!(occurrences, 1);

        // Partial update: only the changed field goes on the wire
        let updated = operators::update(
            &created.operator.id,
            UpdateOperatorRequest {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert!(!updated.is_active);
    }
}

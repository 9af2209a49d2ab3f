use super::*;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Clone, Default)]
struct Recorded {
    body: Arc<Mutex<Option<Value>>>,
    path: Arc<Mutex<Option<String>>>,
}

impl Recorded {
    fn take_body(&self) -> Value {
        self.body.lock().unwrap().take().expect("no body recorded")
    }

    fn take_path(&self) -> String {
        self.path.lock().unwrap().take().expect("no path recorded")
    }
}

async fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn list_users_parses_nested_and_null_orders() {
    let router = Router::new().route(
        "/api/users",
        get(|| async {
            Json(json!([
                {
                    "id": 1,
                    "name": "Ann",
                    "email": "ann@x.com",
                    "orders": [{"id": 10, "description": "TV", "price": 199.5}]
                },
                {"id": 2, "name": "Bob", "email": "bob@x.com", "orders": null}
            ]))
        }),
    );
    let client = DashboardClient::new(spawn_server(router).await);

    let users = client.list_users().await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "Ann");
    assert_eq!(users[0].orders.len(), 1);
    assert_eq!(users[0].orders[0].price, 199.5);
    assert!(users[1].orders.is_empty());
}

#[tokio::test]
async fn create_user_posts_full_payload() {
    let recorded = Recorded::default();
    let router = Router::new()
        .route(
            "/api/users",
            post(
                |State(recorded): State<Recorded>, Json(body): Json<Value>| async move {
                    *recorded.body.lock().unwrap() = Some(body);
                    StatusCode::CREATED
                },
            ),
        )
        .with_state(recorded.clone());
    let client = DashboardClient::new(spawn_server(router).await);

    let request = CreateUserRequest {
        name: "Ann".to_string(),
        email: "ann@x.com".to_string(),
    };
    client.create_user(&request).await.unwrap();
    assert_eq!(
        recorded.take_body(),
        json!({"name": "Ann", "email": "ann@x.com"})
    );
}

#[tokio::test]
async fn duplicate_email_maps_to_conflict() {
    let router = Router::new().route("/api/users", post(|| async { StatusCode::CONFLICT }));
    let client = DashboardClient::new(spawn_server(router).await);

    let request = CreateUserRequest {
        name: "Ann".to_string(),
        email: "taken@x.com".to_string(),
    };
    let err = client.create_user(&request).await.unwrap_err();
    assert!(matches!(err, ApiClientError::Conflict));
}

#[tokio::test]
async fn rejected_response_carries_server_message() {
    let router = Router::new().route(
        "/api/users",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody::new(400, "Name must be 2-50 length")),
            )
        }),
    );
    let client = DashboardClient::new(spawn_server(router).await);

    let request = CreateUserRequest {
        name: "A".to_string(),
        email: "a@x.com".to_string(),
    };
    match client.create_user(&request).await.unwrap_err() {
        ApiClientError::Rejected { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Name must be 2-50 length");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn rejected_response_without_body_falls_back_to_reason_phrase() {
    let router = Router::new().route(
        "/api/orders/:id",
        patch(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let client = DashboardClient::new(spawn_server(router).await);

    let update = UpdateOrderRequest {
        description: Some("TV".to_string()),
        price: None,
    };
    match client.update_order(OrderId(1), &update).await.unwrap_err() {
        ApiClientError::Rejected { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn update_user_patches_only_supplied_fields() {
    let recorded = Recorded::default();
    let router = Router::new()
        .route(
            "/api/users/:id",
            patch(
                |State(recorded): State<Recorded>,
                 Path(id): Path<i64>,
                 Json(body): Json<Value>| async move {
                    *recorded.path.lock().unwrap() = Some(format!("/api/users/{id}"));
                    *recorded.body.lock().unwrap() = Some(body);
                    StatusCode::OK
                },
            ),
        )
        .with_state(recorded.clone());
    let client = DashboardClient::new(spawn_server(router).await);

    let update = UpdateUserRequest {
        name: None,
        email: Some("ann@y.com".to_string()),
    };
    client.update_user(UserId(7), &update).await.unwrap();
    assert_eq!(recorded.take_path(), "/api/users/7");
    assert_eq!(recorded.take_body(), json!({"email": "ann@y.com"}));
}

#[tokio::test]
async fn create_order_posts_to_nested_user_resource() {
    let recorded = Recorded::default();
    let router = Router::new()
        .route(
            "/api/users/:id/order",
            post(
                |State(recorded): State<Recorded>,
                 Path(id): Path<i64>,
                 Json(body): Json<Value>| async move {
                    *recorded.path.lock().unwrap() = Some(format!("/api/users/{id}/order"));
                    *recorded.body.lock().unwrap() = Some(body);
                    StatusCode::CREATED
                },
            ),
        )
        .with_state(recorded.clone());
    let client = DashboardClient::new(spawn_server(router).await);

    let request = CreateOrderRequest {
        description: "TV".to_string(),
        price: 199.5,
    };
    client.create_order(UserId(3), &request).await.unwrap();
    assert_eq!(recorded.take_path(), "/api/users/3/order");
    assert_eq!(
        recorded.take_body(),
        json!({"description": "TV", "price": 199.5})
    );
}

#[tokio::test]
async fn deletes_hit_their_own_resources() {
    let recorded = Recorded::default();
    let router = Router::new()
        .route(
            "/api/users/:id",
            delete(
                |State(recorded): State<Recorded>, Path(id): Path<i64>| async move {
                    *recorded.path.lock().unwrap() = Some(format!("/api/users/{id}"));
                    StatusCode::NO_CONTENT
                },
            ),
        )
        .route(
            "/api/orders/:id",
            delete(
                |State(recorded): State<Recorded>, Path(id): Path<i64>| async move {
                    *recorded.path.lock().unwrap() = Some(format!("/api/orders/{id}"));
                    StatusCode::NO_CONTENT
                },
            ),
        )
        .with_state(recorded.clone());
    let client = DashboardClient::new(spawn_server(router).await);

    client.delete_user(UserId(5)).await.unwrap();
    assert_eq!(recorded.take_path(), "/api/users/5");
    client.delete_order(OrderId(9)).await.unwrap();
    assert_eq!(recorded.take_path(), "/api/orders/9");
}

#[tokio::test]
async fn email_existence_check_parses_boolean() {
    let router = Router::new().route(
        "/api/users/email/:email",
        get(|Path(email): Path<String>| async move { Json(email == "taken@x.com") }),
    );
    let base_url = spawn_server(router).await;
    let client = DashboardClient::new(base_url);

    assert!(client.email_exists("taken@x.com").await.unwrap());
    assert!(!client.email_exists("free@x.com").await.unwrap());
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Port 9 (discard) is a safe bet for a refused connection.
    let client = DashboardClient::new("http://127.0.0.1:9");
    let err = client.list_users().await.unwrap_err();
    assert!(matches!(err, ApiClientError::Transport(_)));
}

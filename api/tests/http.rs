mod common;

use hub_orders::{app, build_schema, AppState};
use poem::{http::StatusCode, test::TestClient};
use serde_json::{json, Value};

async fn client() -> TestClient<poem::Route> {
    let connection = common::sqlite().await;

    TestClient::new(app(AppState::new(build_schema(), connection)))
}

#[tokio::test]
async fn health_is_ok() {
    let cli = client().await;

    cli.get("/health").send().await.assert_status_is_ok();
}

#[tokio::test]
async fn get_graphql_serves_the_playground() {
    let cli = client().await;

    let resp = cli.get("/graphql").send().await;
    resp.assert_status_is_ok();

    let body = resp.0.into_body().into_string().await.unwrap();
    assert!(body.contains("GraphQL Playground"));
}

#[tokio::test]
async fn post_graphql_executes_against_the_store() {
    let cli = client().await;

    let resp = cli
        .post("/graphql")
        .body_json(&json!({
            "query": "mutation ($name: String!, $email: String!) { createCustomer(name: $name, email: $email) { id name } }",
            "variables": { "name": "Ada", "email": "ada@example.com" },
        }))
        .send()
        .await;
    resp.assert_status_is_ok();
    let created: Value = resp.0.into_body().into_json().await.unwrap();
    let id = created["data"]["createCustomer"]["id"].as_str().unwrap().to_owned();

    let resp = cli
        .post("/graphql")
        .body_json(&json!({ "query": "{ customers { id name } }" }))
        .send()
        .await;
    resp.assert_status_is_ok();
    let listed: Value = resp.0.into_body().into_json().await.unwrap();

    assert_eq!(listed["data"]["customers"], json!([{ "id": id, "name": "Ada" }]));
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let cli = client().await;

    cli.get("/graphiql")
        .send()
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

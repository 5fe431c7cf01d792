#![allow(dead_code)]

use async_graphql::Request;
use hub_orders::{
    build_schema,
    db::{Connection, DbArgs},
    AppContext,
};
use migration::{Migrator, MigratorTrait};
use serde_json::Value;

/// A migrated in-memory SQLite store. The pool holds a single connection so
/// every query sees the same database.
pub async fn sqlite() -> Connection {
    let connection = Connection::new(DbArgs {
        database_url: "sqlite::memory:".to_owned(),
        max_connections: 1,
        connect_timeout: 5,
    })
    .await
    .unwrap();

    Migrator::up(connection.get(), None).await.unwrap();

    connection
}

/// Run `query` against a fresh schema and return the serialized response.
pub async fn execute(connection: &Connection, query: &str) -> Value {
    let response = build_schema()
        .execute(Request::new(query).data(AppContext::new(connection.clone())))
        .await;

    serde_json::to_value(&response).unwrap()
}

pub async fn create_customer(connection: &Connection, name: &str, email: &str) -> String {
    let res = execute(
        connection,
        &format!(r#"mutation {{ createCustomer(name: "{name}", email: "{email}") {{ id }} }}"#),
    )
    .await;

    res["data"]["createCustomer"]["id"]
        .as_str()
        .unwrap()
        .to_owned()
}

pub async fn create_order(
    connection: &Connection,
    product: &str,
    quantity: i32,
    customer_id: &str,
) -> Value {
    execute(
        connection,
        &format!(
            r#"mutation {{
                createOrder(product: "{product}", quantity: {quantity}, customerId: "{customer_id}") {{
                    id product quantity customerId
                }}
            }}"#
        ),
    )
    .await
}

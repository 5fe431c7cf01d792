#![deny(clippy::disallowed_methods, clippy::suspicious, clippy::style)]
#![warn(clippy::pedantic, clippy::cargo)]
#![allow(clippy::module_name_repetitions)]

pub mod db;
pub mod entities;
pub mod handlers;
pub mod mutations;
pub mod objects;
pub mod queries;

use async_graphql::{extensions, Context, EmptySubscription, Result, Schema};
use db::Connection;
use handlers::{graphql_handler, health, playground};
use hub_core::clap;
use mutations::Mutation;
use poem::{get, middleware::AddData, EndpointExt, Route};
use queries::Query;

#[derive(Debug, clap::Args)]
#[command(version, author, about)]
pub struct Args {
    #[arg(short, long, env, default_value_t = 4000)]
    pub port: u16,

    #[command(flatten)]
    pub db: db::DbArgs,
}

pub type AppSchema = Schema<Query, Mutation, EmptySubscription>;

/// Builds the GraphQL Schema. The database handle is attached per request
/// through [`AppContext`].
#[must_use]
pub fn build_schema() -> AppSchema {
    Schema::build(Query::default(), Mutation::default(), EmptySubscription)
        .extension(extensions::Logger)
        .finish()
}

#[derive(Clone)]
pub struct AppState {
    pub schema: AppSchema,
    pub connection: Connection,
}

impl AppState {
    #[must_use]
    pub fn new(schema: AppSchema, connection: Connection) -> Self {
        Self { schema, connection }
    }
}

/// Data available to every resolver of a request
#[derive(Debug, Clone)]
pub struct AppContext {
    pub db: Connection,
}

impl AppContext {
    #[must_use]
    pub fn new(db: Connection) -> Self {
        Self { db }
    }
}

/// Settle a nullable field. An error is reported against the field being
/// resolved and the field becomes `null`; sibling fields keep their values.
pub fn null_on_error<T>(ctx: &Context<'_>, res: Result<Option<T>>) -> Option<T> {
    res.unwrap_or_else(|e| {
        ctx.add_error(ctx.set_error_path(e.into_server_error(ctx.item.pos)));
        None
    })
}

/// The service's route table: `/graphql` (POST executes, GET serves the
/// playground) and `/health`.
#[must_use]
pub fn app(state: AppState) -> Route {
    Route::new()
        .at(
            "/graphql",
            get(playground)
                .post(graphql_handler)
                .with(AddData::new(state)),
        )
        .at("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sdl_matches_the_published_contract() {
        let sdl = build_schema().sdl();

        for field in [
            "customers: [Customer]",
            "orders: [Order]",
            "name: String!",
            "email: String!",
            "product: String!",
            "quantity: Int!",
            "customerId: ID!",
            "customer: Customer",
            "id: ID!",
        ] {
            assert!(sdl.contains(field), "missing `{field}` in:\n{sdl}");
        }

        assert!(sdl.contains("createCustomer(name: String!, email: String!): Customer"));
        assert!(sdl.contains(
            "createOrder(product: String!, quantity: Int!, customerId: ID!): Order"
        ));
        assert!(!sdl.contains("type Subscription"));
    }
}

use async_graphql::{Context, Object, Result};
use sea_orm::prelude::*;

use crate::{entities::customers, null_on_error, objects::Customer, AppContext};

#[derive(Default)]
pub struct Mutation;

#[Object(name = "CustomerMutation")]
impl Mutation {
    /// Stores a new customer and returns it with its assigned id. Identical
    /// arguments always produce a new row. `null` with an error entry if the
    /// store rejects the insert.
    pub async fn create_customer(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
    ) -> Option<Customer> {
        null_on_error(ctx, create_customer(ctx, name, email).await)
    }
}

async fn create_customer(
    ctx: &Context<'_>,
    name: String,
    email: String,
) -> Result<Option<Customer>> {
    let AppContext { db } = ctx.data::<AppContext>()?;

    let customer = customers::Entity::create(name, email)
        .insert(db.get())
        .await?;

    Ok(Some(customer.into()))
}

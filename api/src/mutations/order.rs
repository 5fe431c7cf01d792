use async_graphql::{Context, Error, ErrorExtensions, Object, Result, ID};
use sea_orm::prelude::*;

use crate::{entities::orders, null_on_error, objects::Order, AppContext};

#[derive(Default)]
pub struct Mutation;

#[Object(name = "OrderMutation")]
impl Mutation {
    /// Stores a new order for an existing customer and returns it with its
    /// assigned id. `null` with an error entry if `customer_id` is not an
    /// integer or the store rejects the insert, e.g. because no such customer
    /// exists.
    pub async fn create_order(
        &self,
        ctx: &Context<'_>,
        product: String,
        quantity: i32,
        customer_id: ID,
    ) -> Option<Order> {
        null_on_error(ctx, create_order(ctx, product, quantity, &customer_id).await)
    }
}

async fn create_order(
    ctx: &Context<'_>,
    product: String,
    quantity: i32,
    customer_id: &ID,
) -> Result<Option<Order>> {
    let AppContext { db } = ctx.data::<AppContext>()?;

    let customer_id = parse_key(customer_id)?;

    let order = orders::Entity::create(product, quantity, customer_id)
        .insert(db.get())
        .await?;

    Ok(Some(order.into()))
}

/// Coerce a GraphQL `ID` into the store's integer key.
///
/// # Errors
/// Returns an `INVALID_ARGUMENT` error unless the whole ID is a base-10 `i32`
pub fn parse_key(id: &ID) -> Result<i32> {
    id.parse::<i32>().map_err(|e| {
        Error::new(format!("invalid customerId {:?}: {e}", id.as_str()))
            .extend_with(|_, ext| ext.set("code", "INVALID_ARGUMENT"))
    })
}

use async_graphql::{Context, Object, Result};
use sea_orm::prelude::*;

use crate::{entities::prelude::Orders, null_on_error, objects::Order, AppContext};

#[derive(Debug, Clone, Copy, Default)]
pub struct Query;

#[Object(name = "OrderQuery")]
impl Query {
    /// Every order, in whatever order the store returns them. `null` with an
    /// error entry if the store rejects the read.
    async fn orders(&self, ctx: &Context<'_>) -> Option<Vec<Option<Order>>> {
        null_on_error(ctx, orders(ctx).await)
    }
}

async fn orders(ctx: &Context<'_>) -> Result<Option<Vec<Option<Order>>>> {
    let AppContext { db } = ctx.data::<AppContext>()?;

    let orders = Orders::find().all(db.get()).await?;

    Ok(Some(orders.into_iter().map(|o| Some(o.into())).collect()))
}

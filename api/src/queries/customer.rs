use async_graphql::{Context, Object, Result};
use sea_orm::prelude::*;

use crate::{entities::prelude::Customers, null_on_error, objects::Customer, AppContext};

#[derive(Debug, Clone, Copy, Default)]
pub struct Query;

#[Object(name = "CustomerQuery")]
impl Query {
    /// Every customer, in whatever order the store returns them. `null` with
    /// an error entry if the store rejects the read.
    async fn customers(&self, ctx: &Context<'_>) -> Option<Vec<Option<Customer>>> {
        null_on_error(ctx, customers(ctx).await)
    }
}

async fn customers(ctx: &Context<'_>) -> Result<Option<Vec<Option<Customer>>>> {
    let AppContext { db } = ctx.data::<AppContext>()?;

    let customers = Customers::find().all(db.get()).await?;

    Ok(Some(customers.into_iter().map(|c| Some(c.into())).collect()))
}

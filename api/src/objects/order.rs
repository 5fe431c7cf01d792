use async_graphql::{ComplexObject, Context, Result, SimpleObject, ID};
use sea_orm::prelude::*;

use super::Customer;
use crate::{
    entities::orders::{self, Model},
    null_on_error, AppContext,
};

/// A quantity of one product ordered by a customer.
#[derive(Clone, Debug, PartialEq, Eq, SimpleObject)]
#[graphql(complex)]
pub struct Order {
    #[graphql(skip)]
    pub id: i32,
    pub product: String,
    pub quantity: i32,
    #[graphql(skip)]
    pub customer_id: i32,
}

#[ComplexObject]
impl Order {
    /// The store-assigned identifier of the order.
    async fn id(&self) -> ID {
        ID::from(self.id)
    }

    async fn customer_id(&self) -> ID {
        ID::from(self.customer_id)
    }

    /// The customer who placed the order, re-read through the order row.
    async fn customer(&self, ctx: &Context<'_>) -> Option<Customer> {
        null_on_error(ctx, self.load_customer(ctx).await)
    }
}

impl Order {
    async fn load_customer(&self, ctx: &Context<'_>) -> Result<Option<Customer>> {
        let AppContext { db } = ctx.data::<AppContext>()?;
        let conn = db.get();

        let Some(order) = orders::Entity::find_by_id(self.id).one(conn).await? else {
            return Ok(None);
        };

        let customer = order.customer().one(conn).await?;

        Ok(customer.map(Into::into))
    }
}

impl From<Model> for Order {
    fn from(
        Model {
            id,
            product,
            quantity,
            customer_id,
        }: Model,
    ) -> Self {
        Self {
            id,
            product,
            quantity,
            customer_id,
        }
    }
}

use async_graphql::{ComplexObject, Context, Result, SimpleObject, ID};
use sea_orm::prelude::*;

use super::Order;
use crate::{
    entities::customers::{self, Model},
    null_on_error, AppContext,
};

/// A customer who places orders.
#[derive(Clone, Debug, PartialEq, Eq, SimpleObject)]
#[graphql(complex)]
pub struct Customer {
    #[graphql(skip)]
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[ComplexObject]
impl Customer {
    /// The store-assigned identifier of the customer.
    async fn id(&self) -> ID {
        ID::from(self.id)
    }

    /// Orders placed by the customer. The customer row is re-read before its
    /// orders are looked up, so each customer in a list costs two queries.
    async fn orders(&self, ctx: &Context<'_>) -> Option<Vec<Option<Order>>> {
        null_on_error(ctx, self.load_orders(ctx).await)
    }
}

impl Customer {
    async fn load_orders(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Order>>>> {
        let AppContext { db } = ctx.data::<AppContext>()?;
        let conn = db.get();

        let Some(customer) = customers::Entity::find_by_id(self.id).one(conn).await? else {
            return Ok(None);
        };

        let orders = customer.orders().all(conn).await?;

        Ok(Some(orders.into_iter().map(|o| Some(o.into())).collect()))
    }
}

impl From<Model> for Customer {
    fn from(Model { id, name, email }: Model) -> Self {
        Self { id, name, email }
    }
}

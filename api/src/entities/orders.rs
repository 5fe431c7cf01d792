use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub product: String,
    pub quantity: i32,
    pub customer_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customers::Entity",
        from = "Column::CustomerId",
        to = "super::customers::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Customers,
}

impl Related<super::customers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    /// A new order row for `customer_id`. The key is not checked here; the
    /// store's foreign key rejects unknown customers.
    pub fn create(product: String, quantity: i32, customer_id: i32) -> ActiveModel {
        ActiveModel {
            product: Set(product),
            quantity: Set(quantity),
            customer_id: Set(customer_id),
            ..Default::default()
        }
    }
}

impl Model {
    /// The customer who placed this order.
    pub fn customer(&self) -> Select<super::customers::Entity> {
        self.find_related(super::customers::Entity)
    }
}

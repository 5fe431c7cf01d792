use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::orders::Entity")]
    Orders,
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    /// A new customer row; the id is left for the store to assign.
    pub fn create(name: String, email: String) -> ActiveModel {
        ActiveModel {
            name: Set(name),
            email: Set(email),
            ..Default::default()
        }
    }
}

impl Model {
    /// Orders placed by this customer, looked up by foreign key.
    pub fn orders(&self) -> Select<super::orders::Entity> {
        self.find_related(super::orders::Entity)
    }
}

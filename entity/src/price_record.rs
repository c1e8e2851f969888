use sea_orm::entity::prelude::*;

/// Price and stock data captured while inspecting one product at one store.
///
/// Shares the (store_id, product_name, check_date) key with `check_record` but
/// is written independently; either side may exist without the other.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "price_record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub store_id: i32,
    pub product_name: String,
    pub check_date: Date,
    pub regular_price: Option<f64>,
    pub promo_price: Option<f64>,
    pub has_promo: bool,
    pub stock_quantity: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::store::Entity",
        from = "Column::StoreId",
        to = "super::store::Column::Id"
    )]
    Store,
}

impl Related<super::store::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Store.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

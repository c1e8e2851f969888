use sea_orm::entity::prelude::*;

/// A single physical retail location.
///
/// `number` is the display label printed on signage and reports; it is not
/// guaranteed to be unique across networks.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "store")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub number: String,
    pub address: Option<String>,
    pub network_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::network::Entity",
        from = "Column::NetworkId",
        to = "super::network::Column::Id"
    )]
    Network,
    #[sea_orm(has_many = "super::nomenclature::Entity")]
    Nomenclature,
    #[sea_orm(has_many = "super::check_record::Entity")]
    CheckRecord,
    #[sea_orm(has_many = "super::price_record::Entity")]
    PriceRecord,
}

impl Related<super::network::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Network.def()
    }
}

impl Related<super::nomenclature::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Nomenclature.def()
    }
}

impl Related<super::check_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CheckRecord.def()
    }
}

impl Related<super::price_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PriceRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

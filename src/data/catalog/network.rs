use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct NetworkRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NetworkRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Networks belonging to a region, ordered by name.
    ///
    /// An unknown region yields an empty list, not an error.
    pub async fn list_by_region(
        &self,
        region_id: i32,
    ) -> Result<Vec<entity::network::Model>, DbErr> {
        entity::prelude::Network::find()
            .filter(entity::network::Column::RegionId.eq(region_id))
            .order_by_asc(entity::network::Column::Name)
            .all(self.db)
            .await
    }

    /// Create a network under the given region.
    pub async fn create(
        &self,
        name: &str,
        region_id: i32,
    ) -> Result<entity::network::Model, DbErr> {
        entity::prelude::Network::insert(entity::network::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            region_id: ActiveValue::Set(region_id),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }
}

use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

pub struct RegionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RegionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// All regions, ordered by name.
    pub async fn list(&self) -> Result<Vec<entity::region::Model>, DbErr> {
        entity::prelude::Region::find()
            .order_by_asc(entity::region::Column::Name)
            .all(self.db)
            .await
    }

    /// Create a region. Names are unique; a duplicate fails at the constraint.
    pub async fn create(&self, name: &str) -> Result<entity::region::Model, DbErr> {
        entity::prelude::Region::insert(entity::region::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }
}

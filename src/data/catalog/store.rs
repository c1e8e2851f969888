use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

/// Upper bound on search results, matching what the picker UI will render.
const SEARCH_LIMIT: u64 = 20;

pub struct StoreRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StoreRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores belonging to a network, ordered by store number.
    pub async fn list_by_network(
        &self,
        network_id: i32,
    ) -> Result<Vec<entity::store::Model>, DbErr> {
        entity::prelude::Store::find()
            .filter(entity::store::Column::NetworkId.eq(network_id))
            .order_by_asc(entity::store::Column::Number)
            .all(self.db)
            .await
    }

    /// Case-insensitive substring search over store number and address within
    /// one network, capped at [`SEARCH_LIMIT`] results ordered by number.
    ///
    /// An empty or whitespace-only query matches nothing rather than
    /// everything; the picker treats "no query" as "no suggestions".
    pub async fn search(
        &self,
        network_id: i32,
        query: &str,
    ) -> Result<Vec<entity::store::Model>, DbErr> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let pattern = format!("%{}%", query.to_lowercase());

        entity::prelude::Store::find()
            .filter(entity::store::Column::NetworkId.eq(network_id))
            .filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::store::Column::Number)))
                            .like(pattern.as_str()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::store::Column::Address)))
                            .like(pattern.as_str()),
                    ),
            )
            .order_by_asc(entity::store::Column::Number)
            .limit(SEARCH_LIMIT)
            .all(self.db)
            .await
    }

    /// Create a store under the given network.
    pub async fn create(
        &self,
        number: &str,
        address: Option<&str>,
        network_id: i32,
    ) -> Result<entity::store::Model, DbErr> {
        entity::prelude::Store::insert(entity::store::ActiveModel {
            number: ActiveValue::Set(number.to_string()),
            address: ActiveValue::Set(address.map(str::to_string)),
            network_id: ActiveValue::Set(network_id),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }
}

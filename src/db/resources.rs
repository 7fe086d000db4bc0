use sea_orm::sea_query::Condition;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, IntoActiveModel, Order, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::db::service::DbService;
use crate::resource::{ApiResource, WritableResource};
use crate::types::error::AppError;

/// Generic CRUD over any [`ApiResource`] entity. The visibility
/// condition (ownership plus any filters) is built by the caller.
impl DbService {
    pub async fn count_resources<E>(&self, condition: Condition) -> Result<u64, AppError>
    where
        E: ApiResource,
        E::Model: Sync,
    {
        Ok(E::find().filter(condition).count(&self.db).await?)
    }

    pub async fn retrieve_resources<E: ApiResource>(
        &self,
        condition: Condition,
        sort: Vec<(E::Column, Order)>,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<E::Model>, AppError> {
        let mut query = E::find().filter(condition);
        for (column, order) in sort {
            query = query.order_by(column, order);
        }
        // Stable ordering even without an explicit sort.
        query = query.order_by(E::id_column(), Order::Asc);
        Ok(query.offset(offset).limit(limit).all(&self.db).await?)
    }

    pub async fn get_resource<E: ApiResource>(
        &self,
        condition: Condition,
    ) -> Result<Option<E::Model>, AppError> {
        Ok(E::find().filter(condition).one(&self.db).await?)
    }

    pub async fn create_resources<E>(
        &self,
        models: Vec<E::ActiveModel>,
    ) -> Result<Vec<E::Model>, AppError>
    where
        E: WritableResource,
        E::Model: IntoActiveModel<E::ActiveModel>,
        E::ActiveModel: ActiveModelBehavior + Send,
    {
        let mut created = Vec::with_capacity(models.len());
        for model in models {
            created.push(model.insert(&self.db).await?);
        }
        Ok(created)
    }

    pub async fn update_resource<E>(&self, model: E::ActiveModel) -> Result<E::Model, AppError>
    where
        E: WritableResource,
        E::Model: IntoActiveModel<E::ActiveModel>,
        E::ActiveModel: ActiveModelBehavior + Send,
    {
        Ok(model.update(&self.db).await?)
    }

    /// Delete every row matching the condition; errors with `NotFound`
    /// when nothing matched.
    pub async fn delete_resources<E: ApiResource>(
        &self,
        condition: Condition,
    ) -> Result<Vec<i32>, AppError> {
        let rows = E::find().filter(condition.clone()).all(&self.db).await?;
        if rows.is_empty() {
            return Err(AppError::NotFound);
        }
        let ids: Vec<i32> = rows.iter().map(E::id_of).collect();
        E::delete_many().filter(condition).exec(&self.db).await?;
        Ok(ids)
    }
}

use sea_orm::{entity::prelude::*, ConnectionTrait, PaginatorTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

/// A classified ad row. Field order is the JSON field order.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ads")]
pub struct Model {
    /// SQLite rowid, 64-bit even though the column is declared `integer`.
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub created_at: String,
    #[sea_orm(column_type = "Text")]
    pub owner: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Column values for a row that has not been stored yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewAd {
    pub title: String,
    pub description: String,
    pub owner: String,
    pub created_at: String,
}

impl NewAd {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        for (name, value) in [
            ("title", &self.title),
            ("description", &self.description),
            ("owner", &self.owner),
            ("created_at", &self.created_at),
        ] {
            if value.is_empty() {
                return Err(errors::ModelError::Validation(format!("{name} required")));
            }
        }
        Ok(())
    }
}

/// Insert one row and return the store-assigned id.
pub async fn create<C: ConnectionTrait>(db: &C, new: NewAd) -> Result<i64, errors::ModelError> {
    new.validate()?;
    let am = ActiveModel {
        title: Set(new.title),
        description: Set(new.description),
        owner: Set(new.owner),
        created_at: Set(new.created_at),
        ..Default::default()
    };
    let res = Entity::insert(am).exec(db).await?;
    Ok(res.last_insert_id)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i64) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Delete by primary key; `true` when a row was removed.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i64) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

pub async fn count<C: ConnectionTrait>(db: &C) -> Result<u64, errors::ModelError> {
    Ok(Entity::find().count(db).await?)
}

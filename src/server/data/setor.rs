use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter};

pub struct SetorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SetorRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a sector with the given id exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Setor::find()
            .filter(entity::setor::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

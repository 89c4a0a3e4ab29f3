use sea_orm::entity::prelude::*;

/// A citizen-submitted service request.
///
/// `status` is stored as text and checked against the fixed status set by the
/// server's domain model. `id_setor` has no database foreign key; the service
/// verifies the sector exists before assigning it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "demandas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub titulo: String,
    #[sea_orm(column_type = "Text")]
    pub descricao: String,
    pub tipo: String,
    pub protocolo: String,
    pub status: String,
    pub id_usuario: Option<i32>,
    pub id_setor: Option<i32>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

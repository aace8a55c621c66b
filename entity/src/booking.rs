use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "booking")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub court_id: i32,
    pub owner_id: String,
    /// Club-local wall clock time at which the slot starts.
    pub start_at: DateTime,
    pub end_at: DateTime,
    /// "Confirmed" or "Cancelled"
    pub status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::court::Entity",
        from = "Column::CourtId",
        to = "super::court::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Court,
}

impl Related<super::court::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Court.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

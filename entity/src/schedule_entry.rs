use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "schedule_entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub court_id: i32,
    /// 0 = Sunday .. 6 = Saturday
    pub weekday: i32,
    /// "HH:MM"
    pub opening: String,
    /// "HH:MM"
    pub closing: String,
    pub slot_minutes: i32,
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

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "country")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_country: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::country_trip::Entity")]
    CountryTrip,
}

impl Related<super::country_trip::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CountryTrip.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

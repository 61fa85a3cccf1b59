use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "trip")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_trip: i32,
    pub name: String,
    pub description: String,
    pub date_from: DateTimeUtc,
    pub date_to: DateTimeUtc,
    pub max_people: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::client_trip::Entity")]
    ClientTrip,
    #[sea_orm(has_many = "super::country_trip::Entity")]
    CountryTrip,
}

impl Related<super::client_trip::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClientTrip.def()
    }
}

impl Related<super::country_trip::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CountryTrip.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

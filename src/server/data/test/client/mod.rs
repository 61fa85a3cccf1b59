use crate::server::{data::client::ClientRepository, model::client::CreateClientParams};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod exists_by_pesel;
mod find_by_id;

fn client_params(pesel: &str) -> CreateClientParams {
    CreateClientParams {
        first_name: "Jan".to_string(),
        last_name: "Kowalski".to_string(),
        email: "jan@example.com".to_string(),
        telephone: "+48 600 100 200".to_string(),
        pesel: pesel.to_string(),
    }
}

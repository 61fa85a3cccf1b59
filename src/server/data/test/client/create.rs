use super::*;

/// Tests creating a client.
///
/// Verifies that the store assigns the identifier and all columns are persisted.
///
/// Expected: Ok with stored client
#[tokio::test]
async fn creates_client_with_generated_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    let client = repo.create(client_params("85010112345")).await?;

    assert!(client.id_client > 0);
    assert_eq!(client.first_name, "Jan");
    assert_eq!(client.pesel, "85010112345");

    let stored = entity::prelude::Client::find_by_id(client.id_client)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.email, "jan@example.com");

    Ok(())
}

/// Tests the unique index on Pesel.
///
/// Verifies that the store itself refuses a second client with the same Pesel,
/// independently of any service-level check.
///
/// Expected: Err(UniqueConstraintViolation) on second insert, one row stored
#[tokio::test]
async fn rejects_duplicate_pesel_at_store_level() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    repo.create(client_params("85010112345")).await?;

    let result = repo.create(client_params("85010112345")).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));
    assert_eq!(entity::prelude::Client::find().count(db).await?, 1);

    Ok(())
}

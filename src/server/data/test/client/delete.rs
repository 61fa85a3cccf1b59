use super::*;

/// Tests deleting an existing client.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_existing_client() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;

    let repo = ClientRepository::new(db);
    let deleted = repo.delete(client.id_client).await?;

    assert!(deleted);
    assert!(repo.find_by_id(client.id_client).await?.is_none());

    Ok(())
}

/// Tests deleting a client that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_client() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);

    assert!(!repo.delete(404).await?);

    Ok(())
}

use super::*;

/// Tests finding a client by ID.
///
/// Expected: Some for stored client, None otherwise
#[tokio::test]
async fn finds_client_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::client::ClientFactory::new(db)
        .first_name("Anna")
        .last_name("Nowak")
        .build()
        .await?;

    let repo = ClientRepository::new(db);
    let found = repo.find_by_id(client.id_client).await?.unwrap();

    assert_eq!(found.first_name, "Anna");
    assert_eq!(found.last_name, "Nowak");
    assert!(repo.find_by_id(client.id_client + 1).await?.is_none());

    Ok(())
}

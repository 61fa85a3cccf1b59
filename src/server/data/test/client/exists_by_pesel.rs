use super::*;

/// Tests Pesel lookup against stored clients.
///
/// Expected: true only for the stored Pesel
#[tokio::test]
async fn detects_existing_pesel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::client::ClientFactory::new(db)
        .pesel("85010112345")
        .build()
        .await?;

    let repo = ClientRepository::new(db);

    assert!(repo.exists_by_pesel("85010112345").await?);
    assert!(!repo.exists_by_pesel("85010112346").await?);

    Ok(())
}

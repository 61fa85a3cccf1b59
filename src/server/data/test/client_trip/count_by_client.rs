use super::*;

/// Tests counting a client's registrations.
///
/// Expected: count of trips for that client only
#[tokio::test]
async fn counts_registrations_of_client() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let idle_client = factory::create_client(db).await?;
    for _ in 0..2 {
        let trip = factory::create_trip(db).await?;
        factory::create_client_trip(db, client.id_client, trip.id_trip).await?;
    }

    let repo = ClientTripRepository::new(db);

    assert_eq!(repo.count_by_client(client.id_client).await?, 2);
    assert_eq!(repo.count_by_client(idle_client.id_client).await?, 0);

    Ok(())
}

use super::*;

/// Tests registration lookup by (client, trip).
///
/// Expected: true only for the registered pair
#[tokio::test]
async fn detects_registration_for_pair_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (trip, client, _) = factory::helpers::create_trip_with_client(db).await?;
    let other_trip = factory::create_trip(db).await?;

    let repo = ClientTripRepository::new(db);

    assert!(repo.exists(client.id_client, trip.id_trip).await?);
    assert!(!repo.exists(client.id_client, other_trip.id_trip).await?);

    Ok(())
}

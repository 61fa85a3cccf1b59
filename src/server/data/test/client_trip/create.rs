use super::*;

/// Tests recording a registration.
///
/// Verifies that both timestamps are persisted as given.
///
/// Expected: Ok with stored registration
#[tokio::test]
async fn creates_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let trip = factory::create_trip(db).await?;
    let client = factory::create_client(db).await?;
    let registered_at = Utc.with_ymd_and_hms(2030, 5, 1, 12, 0, 0).unwrap();
    let payment_date = registered_at + Duration::days(2);

    let repo = ClientTripRepository::new(db);
    let registration = repo
        .create(CreateClientTripParams {
            id_client: client.id_client,
            id_trip: trip.id_trip,
            registered_at,
            payment_date: Some(payment_date),
        })
        .await?;

    assert_eq!(registration.id_client, client.id_client);
    assert_eq!(registration.id_trip, trip.id_trip);
    assert_eq!(registration.registered_at, registered_at);
    assert_eq!(registration.payment_date, Some(payment_date));

    Ok(())
}

/// Tests the composite key on (client, trip).
///
/// Expected: Err on a second registration of the same pair
#[tokio::test]
async fn rejects_second_registration_of_same_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (trip, client, _) = factory::helpers::create_trip_with_client(db).await?;

    let repo = ClientTripRepository::new(db);
    let result = repo
        .create(CreateClientTripParams {
            id_client: client.id_client,
            id_trip: trip.id_trip,
            registered_at: Utc::now(),
            payment_date: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

use super::*;

/// Tests finding a trip by ID.
///
/// Expected: Some for stored trip, None otherwise
#[tokio::test]
async fn finds_trip_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let trip = factory::trip::TripFactory::new(db)
        .name("Alps")
        .max_people(12)
        .build()
        .await?;

    let repo = TripRepository::new(db);
    let found = repo.find_by_id(trip.id_trip).await?.unwrap();

    assert_eq!(found.name, "Alps");
    assert_eq!(found.max_people, 12);
    assert!(repo.find_by_id(trip.id_trip + 100).await?.is_none());

    Ok(())
}

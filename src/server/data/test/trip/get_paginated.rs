use super::*;

/// Tests pagination on an empty store.
///
/// Expected: Ok with no trips and zero total
#[tokio::test]
async fn returns_empty_page_for_no_trips() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TripRepository::new(db);
    let (trips, total) = repo.get_paginated(0, 10).await?;

    assert!(trips.is_empty());
    assert_eq!(total, 0);

    Ok(())
}

/// Tests ordering by start date.
///
/// Verifies that trips come back most recent start date first regardless of insert
/// order.
///
/// Expected: Ok with trips sorted by date_from descending
#[tokio::test]
async fn sorts_trips_by_start_date_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    for (name, offset) in [("Middle", 10), ("Latest", 20), ("Earliest", -5)] {
        factory::trip::TripFactory::new(db)
            .name(name)
            .date_from(now + Duration::days(offset))
            .build()
            .await?;
    }

    let repo = TripRepository::new(db);
    let (trips, total) = repo.get_paginated(0, 10).await?;

    assert_eq!(total, 3);
    let names: Vec<_> = trips.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Latest", "Middle", "Earliest"]);

    Ok(())
}

/// Tests pagination with multiple pages.
///
/// Verifies that 25 trips split into pages of 10, 10 and 5 without overlap and that the
/// total always reports every trip.
///
/// Expected: Ok with correct slices and total of 25
#[tokio::test]
async fn paginates_trips_correctly() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    for i in 1..=25 {
        factory::trip::TripFactory::new(db)
            .name(format!("Rank {}", i))
            .date_from(now + Duration::days(100 - i))
            .build()
            .await?;
    }

    let repo = TripRepository::new(db);

    let (page1, total) = repo.get_paginated(0, 10).await?;
    assert_eq!(page1.len(), 10);
    assert_eq!(total, 25);
    assert_eq!(page1[0].name, "Rank 1");
    assert_eq!(page1[9].name, "Rank 10");

    let (page3, total) = repo.get_paginated(2, 10).await?;
    assert_eq!(page3.len(), 5);
    assert_eq!(total, 25);
    assert_eq!(page3[0].name, "Rank 21");
    assert_eq!(page3[4].name, "Rank 25");

    Ok(())
}

/// Tests tie-breaking on equal start dates.
///
/// Expected: trips sharing a start date are ordered by ID
#[tokio::test]
async fn breaks_start_date_ties_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let date_from = Utc::now() + Duration::days(3);
    let first = factory::trip::TripFactory::new(db)
        .date_from(date_from)
        .build()
        .await?;
    let second = factory::trip::TripFactory::new(db)
        .date_from(date_from)
        .build()
        .await?;

    let repo = TripRepository::new(db);
    let (trips, _) = repo.get_paginated(0, 10).await?;

    assert_eq!(trips[0].id_trip, first.id_trip);
    assert_eq!(trips[1].id_trip, second.id_trip);

    Ok(())
}

/// Tests the nested projections.
///
/// Verifies that each trip carries only its own countries and enrolled clients.
///
/// Expected: Ok with countries sorted by name and clients per trip
#[tokio::test]
async fn attaches_countries_and_clients_to_each_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let later = factory::trip::TripFactory::new(db)
        .date_from(now + Duration::days(20))
        .build()
        .await?;
    let sooner = factory::trip::TripFactory::new(db)
        .date_from(now + Duration::days(10))
        .build()
        .await?;

    let poland = factory::country::create_country_named(db, "Poland").await?;
    let austria = factory::country::create_country_named(db, "Austria").await?;
    let italy = factory::country::create_country_named(db, "Italy").await?;
    factory::create_country_trip(db, poland.id_country, later.id_trip).await?;
    factory::create_country_trip(db, austria.id_country, later.id_trip).await?;
    factory::create_country_trip(db, italy.id_country, sooner.id_trip).await?;

    let client = factory::client::ClientFactory::new(db)
        .first_name("Jan")
        .last_name("Kowalski")
        .build()
        .await?;
    factory::create_client_trip(db, client.id_client, later.id_trip).await?;

    let repo = TripRepository::new(db);
    let (trips, _) = repo.get_paginated(0, 10).await?;

    assert_eq!(trips.len(), 2);
    assert_eq!(trips[0].id_trip, later.id_trip);
    assert_eq!(trips[0].countries, vec!["Austria", "Poland"]);
    assert_eq!(trips[0].clients.len(), 1);
    assert_eq!(trips[0].clients[0].first_name, "Jan");
    assert_eq!(trips[0].clients[0].last_name, "Kowalski");

    assert_eq!(trips[1].countries, vec!["Italy"]);
    assert!(trips[1].clients.is_empty());

    Ok(())
}

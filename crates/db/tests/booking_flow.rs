//! Integration tests for booking, contact, and branding persistence.

use sqlx::PgPool;

use mashwar_db::models::booking::NewBooking;
use mashwar_db::models::branding::UpdateBranding;
use mashwar_db::repositories::{BookingRepo, BrandingRepo, ContactRepo};

fn new_booking(phone: &str) -> NewBooking {
    NewBooking {
        car_type: "sedan".into(),
        car_model: "toyota-camry".into(),
        car_type_label: "سيدان".into(),
        car_model_label: "Camry".into(),
        passengers: 2,
        bags: 1,
        pickup_address: "Cairo".into(),
        pickup_lat: None,
        pickup_lon: None,
        dropoff_address: "Alexandria".into(),
        dropoff_lat: Some(31.2),
        dropoff_lon: Some(29.9),
        first_name: "Ali".into(),
        phone_number: phone.into(),
    }
}

// ---------------------------------------------------------------------------
// Bookings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn booking_insert_preserves_labels_and_coordinates(pool: PgPool) {
    let stored = BookingRepo::create(&pool, &new_booking("+201234567890"))
        .await
        .unwrap();
    assert_eq!(stored.car_type_label, "سيدان");
    assert_eq!(stored.car_model_label, "Camry");
    assert_eq!(stored.passengers, 2);
    assert_eq!(stored.bags, 1);
    assert_eq!(stored.dropoff_lat, Some(31.2));
    assert!(stored.pickup_lat.is_none());

    let fetched = BookingRepo::find_by_id(&pool, stored.id).await.unwrap();
    assert_eq!(fetched.unwrap().phone_number, "+201234567890");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn booking_list_is_newest_first(pool: PgPool) {
    let first = BookingRepo::create(&pool, &new_booking("+201000000001"))
        .await
        .unwrap();
    let second = BookingRepo::create(&pool, &new_booking("+201000000002"))
        .await
        .unwrap();

    let page = BookingRepo::list(&pool, 10, 0).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].id, second.id);
    assert_eq!(page[1].id, first.id);
    assert_eq!(BookingRepo::count(&pool).await.unwrap(), 2);

    assert!(BookingRepo::delete(&pool, first.id).await.unwrap());
    assert_eq!(BookingRepo::count(&pool).await.unwrap(), 1);
}

// ---------------------------------------------------------------------------
// Contacts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn contact_dedup_by_phone(pool: PgPool) {
    assert!(!ContactRepo::exists_by_phone(&pool, "+201234567890")
        .await
        .unwrap());

    ContactRepo::create(&pool, "Ali", "+201234567890")
        .await
        .unwrap();
    assert!(ContactRepo::exists_by_phone(&pool, "+201234567890")
        .await
        .unwrap());

    // The unique constraint backs up the exists-check.
    let dup = ContactRepo::create(&pool, "Omar", "+201234567890").await;
    assert!(dup.is_err());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn contact_list_and_delete(pool: PgPool) {
    let a = ContactRepo::create(&pool, "Ali", "+201000000001")
        .await
        .unwrap();
    ContactRepo::create(&pool, "Sara", "+201000000002")
        .await
        .unwrap();

    let page = ContactRepo::list(&pool, 10, 0).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].first_name, "Sara");
    assert_eq!(ContactRepo::count(&pool).await.unwrap(), 2);

    assert!(ContactRepo::delete(&pool, a.id).await.unwrap());
    assert!(!ContactRepo::delete(&pool, a.id).await.unwrap());
    assert_eq!(ContactRepo::count(&pool).await.unwrap(), 1);
}

// ---------------------------------------------------------------------------
// Branding
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn branding_initializes_once_with_defaults(pool: PgPool) {
    let first = BrandingRepo::get_or_init(&pool).await.unwrap();
    assert_eq!(first.id, 1);
    assert!(!first.app_name.is_empty());
    assert!(first.logo_url.is_none());

    // Second read returns the same row, not a new one.
    let second = BrandingRepo::get_or_init(&pool).await.unwrap();
    assert_eq!(second.id, first.id);
    assert_eq!(second.app_name, first.app_name);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn branding_partial_update_and_logo(pool: PgPool) {
    let updated = BrandingRepo::update(
        &pool,
        &UpdateBranding {
            app_name: Some("مشوار+".into()),
            tagline: Some("احجز مشوارك".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.app_name, "مشوار+");
    assert_eq!(updated.tagline.as_deref(), Some("احجز مشوارك"));
    // Colors keep their defaults.
    assert!(updated.primary_color.starts_with('#'));

    let with_logo = BrandingRepo::set_logo_url(&pool, Some("https://cdn/logo.png"))
        .await
        .unwrap();
    assert_eq!(with_logo.logo_url.as_deref(), Some("https://cdn/logo.png"));

    let cleared = BrandingRepo::set_logo_url(&pool, None).await.unwrap();
    assert!(cleared.logo_url.is_none());
}

//! Integration tests for the catalog repositories.
//!
//! Exercises car type and car model CRUD against a real database:
//! display ordering, slug lookups, cascade delete, and unique constraints.

use sqlx::PgPool;

use mashwar_db::models::car_model::CreateCarModel;
use mashwar_db::models::car_type::{CreateCarType, UpdateCarType};
use mashwar_db::repositories::{CarModelRepo, CarTypeRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_car_type(slug: &str, label: &str, sort_order: i32) -> CreateCarType {
    CreateCarType {
        slug: slug.to_string(),
        label: label.to_string(),
        image_url: None,
        sort_order: Some(sort_order),
    }
}

fn new_car_model(car_type_id: i64, slug: &str, label: &str, sort_order: i32) -> CreateCarModel {
    CreateCarModel {
        car_type_id,
        slug: slug.to_string(),
        label: label.to_string(),
        image_url: None,
        sort_order: Some(sort_order),
    }
}

// ---------------------------------------------------------------------------
// Car types
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn car_type_create_and_lookup(pool: PgPool) {
    let created = CarTypeRepo::create(&pool, &new_car_type("sedan", "سيدان", 1))
        .await
        .unwrap();
    assert_eq!(created.slug, "sedan");
    assert_eq!(created.label, "سيدان");
    assert_eq!(created.sort_order, 1);
    assert!(created.image_url.is_none());

    let by_id = CarTypeRepo::find_by_id(&pool, created.id).await.unwrap();
    assert!(by_id.is_some());

    let by_slug = CarTypeRepo::find_by_slug(&pool, "sedan").await.unwrap();
    assert_eq!(by_slug.unwrap().id, created.id);

    assert!(CarTypeRepo::find_by_slug(&pool, "missing")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn car_type_slug_is_unique(pool: PgPool) {
    CarTypeRepo::create(&pool, &new_car_type("sedan", "سيدان", 0))
        .await
        .unwrap();
    let dup = CarTypeRepo::create(&pool, &new_car_type("sedan", "other", 0)).await;
    assert!(dup.is_err());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn car_type_options_follow_sort_order(pool: PgPool) {
    CarTypeRepo::create(&pool, &new_car_type("van", "فان", 3))
        .await
        .unwrap();
    CarTypeRepo::create(&pool, &new_car_type("sedan", "سيدان", 1))
        .await
        .unwrap();
    CarTypeRepo::create(&pool, &new_car_type("suv", "دفع رباعي", 2))
        .await
        .unwrap();

    let options = CarTypeRepo::list_options(&pool).await.unwrap();
    let slugs: Vec<_> = options.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(slugs, ["sedan", "suv", "van"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn car_type_update_and_image(pool: PgPool) {
    let created = CarTypeRepo::create(&pool, &new_car_type("sedan", "سيدان", 0))
        .await
        .unwrap();

    let updated = CarTypeRepo::update(
        &pool,
        created.id,
        &UpdateCarType {
            label: Some("Sedan".into()),
            sort_order: Some(5),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.label, "Sedan");
    assert_eq!(updated.sort_order, 5);
    // Slug is immutable through update.
    assert_eq!(updated.slug, "sedan");

    let with_image = CarTypeRepo::set_image_url(&pool, created.id, Some("https://cdn/x.png"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(with_image.image_url.as_deref(), Some("https://cdn/x.png"));

    let cleared = CarTypeRepo::set_image_url(&pool, created.id, None)
        .await
        .unwrap()
        .unwrap();
    assert!(cleared.image_url.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn car_type_update_missing_returns_none(pool: PgPool) {
    let result = CarTypeRepo::update(&pool, 9999, &UpdateCarType::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Car models
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn car_model_scoped_listing_and_slug_join(pool: PgPool) {
    let sedan = CarTypeRepo::create(&pool, &new_car_type("sedan", "سيدان", 1))
        .await
        .unwrap();
    let suv = CarTypeRepo::create(&pool, &new_car_type("suv", "دفع رباعي", 2))
        .await
        .unwrap();

    CarModelRepo::create(&pool, &new_car_model(sedan.id, "toyota-camry", "Camry", 2))
        .await
        .unwrap();
    CarModelRepo::create(&pool, &new_car_model(sedan.id, "hyundai-elantra", "Elantra", 1))
        .await
        .unwrap();
    CarModelRepo::create(&pool, &new_car_model(suv.id, "kia-sportage", "Sportage", 1))
        .await
        .unwrap();

    let sedan_models = CarModelRepo::list_by_type(&pool, sedan.id).await.unwrap();
    assert_eq!(sedan_models.len(), 2);
    assert_eq!(sedan_models[0].slug, "hyundai-elantra");

    let options = CarModelRepo::list_options_by_type_slug(&pool, "sedan")
        .await
        .unwrap();
    let ids: Vec<_> = options.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, ["hyundai-elantra", "toyota-camry"]);

    let none = CarModelRepo::list_options_by_type_slug(&pool, "missing")
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn car_model_requires_existing_type(pool: PgPool) {
    let orphan = CarModelRepo::create(&pool, &new_car_model(4242, "x", "X", 0)).await;
    assert!(orphan.is_err());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_car_type_cascades_to_models(pool: PgPool) {
    let sedan = CarTypeRepo::create(&pool, &new_car_type("sedan", "سيدان", 0))
        .await
        .unwrap();
    let model = CarModelRepo::create(&pool, &new_car_model(sedan.id, "toyota-camry", "Camry", 0))
        .await
        .unwrap();

    assert!(CarTypeRepo::delete(&pool, sedan.id).await.unwrap());
    assert!(CarModelRepo::find_by_id(&pool, model.id)
        .await
        .unwrap()
        .is_none());

    // Second delete is a no-op.
    assert!(!CarTypeRepo::delete(&pool, sedan.id).await.unwrap());
}

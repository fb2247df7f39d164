//! Car catalog queries and seed data.

use dealerhub_core::{CarListing, CarMake, CarModel, CarType};
use sqlx::SqlitePool;

/// Number of catalog makes.
pub async fn count_makes(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM car_makes")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Insert a make and return its id.
pub async fn insert_make(
    pool: &SqlitePool,
    name: &str,
    description: &str,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO car_makes (name, description) VALUES (?, ?)")
        .bind(name)
        .bind(description)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

/// Insert a model under an existing make and return its id.
pub async fn insert_model(
    pool: &SqlitePool,
    car_make_id: i64,
    name: &str,
    car_type: &str,
    year: i32,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO car_models (car_make_id, name, car_type, year) VALUES (?, ?, ?, ?)",
    )
    .bind(car_make_id)
    .bind(name)
    .bind(car_type)
    .bind(year)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}

/// All makes, ordered by id.
pub async fn list_makes(pool: &SqlitePool) -> Result<Vec<CarMake>, sqlx::Error> {
    let rows: Vec<(i64, String, String)> =
        sqlx::query_as("SELECT id, name, description FROM car_makes ORDER BY id")
            .fetch_all(pool)
            .await?;
    Ok(rows
        .into_iter()
        .map(|(id, name, description)| CarMake {
            id,
            name,
            description,
        })
        .collect())
}

/// All models, ordered by id.
pub async fn list_models(pool: &SqlitePool) -> Result<Vec<CarModel>, sqlx::Error> {
    let rows: Vec<(i64, i64, String, String, i32)> = sqlx::query_as(
        "SELECT id, car_make_id, name, car_type, year FROM car_models ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    rows.into_iter()
        .map(|(id, car_make_id, name, car_type, year)| {
            let car_type = car_type
                .parse::<CarType>()
                .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
            Ok(CarModel {
                id,
                car_make_id,
                name,
                car_type,
                year,
            })
        })
        .collect()
}

/// The `{model, make}` listing consumed by the catalog endpoint, joined
/// across both tables and ordered by model id.
pub async fn list_listings(pool: &SqlitePool) -> Result<Vec<CarListing>, sqlx::Error> {
    let rows: Vec<(String, String)> = sqlx::query_as(
        r#"
        SELECT m.name, k.name
        FROM car_models m
        JOIN car_makes k ON k.id = m.car_make_id
        ORDER BY m.id
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows
        .into_iter()
        .map(|(car_model, car_make)| CarListing {
            car_model,
            car_make,
        })
        .collect())
}

/// Populate the catalog with the stock makes and models if it is empty.
///
/// Returns `true` when seeding ran. Safe to call on every startup.
pub async fn seed_catalog(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    if count_makes(pool).await? > 0 {
        return Ok(false);
    }

    let seed: &[(&str, &str, &[(&str, &str, i32)])] = &[
        (
            "NISSAN",
            "Great cars. Japanese technology",
            &[
                ("Pathfinder", "SUV", 2023),
                ("Qashqai", "SUV", 2023),
                ("XTRAIL", "SUV", 2023),
            ],
        ),
        (
            "Mercedes",
            "Great cars. German technology",
            &[
                ("A-Class", "SUV", 2023),
                ("C-Class", "SUV", 2023),
                ("E-Class", "SUV", 2023),
            ],
        ),
        (
            "Audi",
            "Great cars. German technology",
            &[("A4", "SUV", 2023), ("A5", "SUV", 2023), ("A6", "SUV", 2023)],
        ),
        (
            "Kia",
            "Great cars. Korean technology",
            &[
                ("Sorrento", "SUV", 2023),
                ("Carnival", "SUV", 2023),
                ("Cerato", "SEDAN", 2023),
            ],
        ),
        (
            "Toyota",
            "Great cars. Japanese technology",
            &[
                ("Corolla", "SEDAN", 2023),
                ("Camry", "SEDAN", 2023),
                ("Kluger", "SUV", 2023),
            ],
        ),
    ];

    for (make, description, models) in seed {
        let make_id = insert_make(pool, make, description).await?;
        for (model, car_type, year) in *models {
            insert_model(pool, make_id, model, car_type, *year).await?;
        }
    }

    tracing::info!(makes = seed.len(), "seeded car catalog");
    Ok(true)
}

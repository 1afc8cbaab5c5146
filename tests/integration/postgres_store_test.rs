//! PostgreSQL store tests against a live database.
//!
//! Set `POKEDEX_TEST_DATABASE_URL` to run them; each test works in its own
//! throwaway schema. Without the variable every test returns early.

use std::str::FromStr;

use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use uuid::Uuid;

use pokedex_core::types::{PageWindow, PokemonId};
use pokedex_database::repositories::{PgPokemonStore, PokemonStore};
use pokedex_database::schema::ensure_schema;
use pokedex_database::StoreFault;
use pokedex_entity::pokemon::{CreatePokemon, UpdatePokemon};

const DATABASE_URL_VAR: &str = "POKEDEX_TEST_DATABASE_URL";

/// A store bound to a freshly created schema.
struct TestSchema {
    admin: PgPool,
    name: String,
    store: PgPokemonStore,
    pool: PgPool,
}

impl TestSchema {
    async fn create() -> Option<Self> {
        let Ok(url) = std::env::var(DATABASE_URL_VAR) else {
            eprintln!("{DATABASE_URL_VAR} not set; skipping");
            return None;
        };

        let admin = PgPoolOptions::new()
            .max_connections(1)
            .connect(&url)
            .await
            .expect("Failed to connect to test database");

        let name = format!("pokedex_test_{}", Uuid::new_v4().simple());
        sqlx::query(&format!("CREATE SCHEMA {name}"))
            .execute(&admin)
            .await
            .expect("Failed to create schema");

        let options = PgConnectOptions::from_str(&url)
            .expect("Invalid test database URL")
            .options([("search_path", name.as_str())]);
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect_with(options)
            .await
            .expect("Failed to connect to test schema");

        ensure_schema(&pool).await.expect("Failed to create table");

        Some(Self {
            admin,
            store: PgPokemonStore::new(pool.clone()),
            pool,
            name,
        })
    }

    async fn drop(self) {
        self.pool.close().await;
        sqlx::query(&format!("DROP SCHEMA {} CASCADE", self.name))
            .execute(&self.admin)
            .await
            .expect("Failed to drop schema");
    }
}

#[tokio::test]
async fn test_bulk_insert_returns_input_order() {
    let Some(db) = TestSchema::create().await else {
        return;
    };

    let created = db
        .store
        .insert_many(&[
            CreatePokemon::new("venusaur", 3),
            CreatePokemon::new("bulbasaur", 1),
            CreatePokemon::new("ivysaur", 2),
        ])
        .await
        .unwrap();

    let names: Vec<&str> = created.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["venusaur", "bulbasaur", "ivysaur"]);
    assert!(created.iter().all(|p| p.version == 0));

    db.drop().await;
}

#[tokio::test]
async fn test_bulk_insert_duplicate_writes_nothing() {
    let Some(db) = TestSchema::create().await else {
        return;
    };

    let err = db
        .store
        .insert_many(&[
            CreatePokemon::new("pidgey", 16),
            CreatePokemon::new("pidgeotto", 17),
            CreatePokemon::new("pidgey", 18),
        ])
        .await
        .unwrap_err();

    assert_eq!(
        db.store.classify(&err),
        StoreFault::DuplicateKey {
            key: "name".to_string(),
            value: "pidgey".to_string(),
        }
    );
    let window = PageWindow { limit: 10, offset: 0 };
    assert!(db.store.find(window).await.unwrap().is_empty());

    db.drop().await;
}

#[tokio::test]
async fn test_insert_one_duplicate_captures_pg_fields() {
    let Some(db) = TestSchema::create().await else {
        return;
    };

    db.store
        .insert_one(&CreatePokemon::new("pikachu", 25))
        .await
        .unwrap();
    let err = db
        .store
        .insert_one(&CreatePokemon::new("pikachu", 26))
        .await
        .unwrap_err();

    assert_eq!(err.code.as_deref(), Some("23505"));
    assert_eq!(err.constraint.as_deref(), Some("pokemon_name_key"));
    assert_eq!(
        db.store.classify(&err),
        StoreFault::DuplicateKey {
            key: "name".to_string(),
            value: "pikachu".to_string(),
        }
    );

    let err = db
        .store
        .insert_one(&CreatePokemon::new("raichu", 25))
        .await
        .unwrap_err();
    assert_eq!(
        db.store.classify(&err),
        StoreFault::DuplicateKey {
            key: "number".to_string(),
            value: "25".to_string(),
        }
    );

    db.drop().await;
}

#[tokio::test]
async fn test_find_orders_by_number_and_windows() {
    let Some(db) = TestSchema::create().await else {
        return;
    };

    db.store
        .insert_many(&[
            CreatePokemon::new("charmander", 4),
            CreatePokemon::new("ivysaur", 2),
            CreatePokemon::new("bulbasaur", 1),
            CreatePokemon::new("venusaur", 3),
        ])
        .await
        .unwrap();

    let page = db
        .store
        .find(PageWindow { limit: 2, offset: 1 })
        .await
        .unwrap();
    let numbers: Vec<i32> = page.iter().map(|p| p.number).collect();
    assert_eq!(numbers, vec![2, 3]);

    let past_end = db
        .store
        .find(PageWindow { limit: 5, offset: 10 })
        .await
        .unwrap();
    assert!(past_end.is_empty());

    db.drop().await;
}

#[tokio::test]
async fn test_partial_update_keeps_unset_fields() {
    let Some(db) = TestSchema::create().await else {
        return;
    };

    let pikachu = db
        .store
        .insert_one(&CreatePokemon::new("pikachu", 25))
        .await
        .unwrap();

    let patch = UpdatePokemon {
        name: None,
        number: Some(26),
    };
    assert_eq!(db.store.update_one(pikachu.id, &patch).await.unwrap(), 1);

    let stored = db.store.find_by_id(pikachu.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "pikachu");
    assert_eq!(stored.number, 26);
    assert_eq!(stored.version, 1);
    assert!(db.store.find_by_number(25).await.unwrap().is_none());
    assert_eq!(db.store.find_by_name("pikachu").await.unwrap().unwrap().id, pikachu.id);

    assert_eq!(db.store.update_one(PokemonId::new(), &patch).await.unwrap(), 0);

    db.drop().await;
}

#[tokio::test]
async fn test_delete_counts_rows() {
    let Some(db) = TestSchema::create().await else {
        return;
    };

    let created = db
        .store
        .insert_many(&[
            CreatePokemon::new("bulbasaur", 1),
            CreatePokemon::new("ivysaur", 2),
            CreatePokemon::new("venusaur", 3),
        ])
        .await
        .unwrap();

    assert_eq!(db.store.delete_one(created[0].id).await.unwrap(), 1);
    assert_eq!(db.store.delete_one(created[0].id).await.unwrap(), 0);
    assert_eq!(db.store.delete_many().await.unwrap(), 2);
    assert_eq!(db.store.delete_many().await.unwrap(), 0);

    db.drop().await;
}

//! Integration tests for the lore repositories against the seeded data set.
//!
//! Verifies that:
//! - Inactive rows never appear in lists, lookups or relations
//! - Cast lists are ordered by role rank, then name
//! - Text search is case-insensitive over every searchable column
//! - Relation lookups for unknown IDs yield `None` rather than an error

use archivist_db::models::appearance::CastMember;
use archivist_db::models::character::Character;
use archivist_db::repositories::{AppearanceRepo, CharacterRepo, EpisodeRepo};
use archivist_db::{seed_if_empty, Schema};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed(pool: &SqlitePool) {
    let applied = seed_if_empty(pool, Schema::Lore).await.unwrap();
    assert!(applied, "fresh schema should accept the seed");
}

fn character_names(rows: &[Character]) -> Vec<&str> {
    rows.iter().map(|c| c.name.as_str()).collect()
}

fn cast_names(rows: &[CastMember]) -> Vec<&str> {
    rows.iter().map(|m| m.character.name.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Test: seeding is applied once
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations/lore")]
async fn test_seed_is_idempotent(pool: SqlitePool) {
    seed(&pool).await;

    let again = seed_if_empty(&pool, Schema::Lore).await.unwrap();
    assert!(!again, "second seed should be skipped");
    assert_eq!(EpisodeRepo::count(&pool).await.unwrap(), 6);
}

// ---------------------------------------------------------------------------
// Test: episodes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations/lore")]
async fn test_episodes_listed_in_saga_order_without_inactive(pool: SqlitePool) {
    seed(&pool).await;

    let episodes = EpisodeRepo::list(&pool).await.unwrap();
    let numbers: Vec<i64> = episodes.iter().map(|e| e.episode_number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
}

#[sqlx::test(migrations = "../../db/migrations/lore")]
async fn test_inactive_episode_is_not_found(pool: SqlitePool) {
    seed(&pool).await;

    assert!(EpisodeRepo::find_by_id(&pool, 7).await.unwrap().is_none());
    assert!(EpisodeRepo::find_with_cast(&pool, 7).await.unwrap().is_none());
    assert!(EpisodeRepo::find_by_id(&pool, 999).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations/lore")]
async fn test_cast_is_ordered_by_role_then_name(pool: SqlitePool) {
    seed(&pool).await;

    let episode = EpisodeRepo::find_with_cast(&pool, 4).await.unwrap().unwrap();
    assert_eq!(episode.episode.title, "A New Hope");
    assert_eq!(
        cast_names(&episode.characters),
        vec![
            "Han Solo",
            "Leia Organa",
            "Luke Skywalker",
            "Chewbacca",
            "Darth Vader",
            "Obi-Wan Kenobi",
            "R2-D2",
        ]
    );
    assert!(episode.characters[..3].iter().all(|m| m.role == "main"));
    assert!(episode.characters[3..].iter().all(|m| m.role == "supporting"));
}

#[sqlx::test(migrations = "../../db/migrations/lore")]
async fn test_cast_excludes_inactive_characters(pool: SqlitePool) {
    seed(&pool).await;

    let cast = AppearanceRepo::list_cast_for_episode(&pool, 1).await.unwrap();
    assert_eq!(
        cast_names(&cast),
        vec![
            "Anakin Skywalker",
            "Obi-Wan Kenobi",
            "Padmé Amidala",
            "Emperor Palpatine",
            "R2-D2",
            "Yoda",
        ]
    );
}

// ---------------------------------------------------------------------------
// Test: characters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations/lore")]
async fn test_characters_listed_by_name(pool: SqlitePool) {
    seed(&pool).await;

    let characters = CharacterRepo::list(&pool).await.unwrap();
    assert_eq!(characters.len(), 12);
    assert_eq!(characters[0].name, "Anakin Skywalker");
    assert!(!characters.iter().any(|c| c.name == "Jar Jar Binks"));
}

#[sqlx::test(migrations = "../../db/migrations/lore")]
async fn test_character_appearances_skip_inactive_episodes(pool: SqlitePool) {
    seed(&pool).await;

    let luke = CharacterRepo::find_with_appearances(&pool, 1)
        .await
        .unwrap()
        .unwrap();
    let numbers: Vec<i64> = luke
        .appearances
        .iter()
        .map(|a| a.episode.episode_number)
        .collect();
    assert_eq!(numbers, vec![4, 5, 6]);

    let boba = CharacterRepo::find_with_appearances(&pool, 12)
        .await
        .unwrap()
        .unwrap();
    let ids: Vec<i64> = boba.appearances.iter().map(|a| a.episode.id).collect();
    assert_eq!(ids, vec![2, 5, 6]);
}

#[sqlx::test(migrations = "../../db/migrations/lore")]
async fn test_missing_character_has_no_appearances_payload(pool: SqlitePool) {
    seed(&pool).await;

    assert!(CharacterRepo::find_with_appearances(&pool, 13)
        .await
        .unwrap()
        .is_none());
    assert!(CharacterRepo::find_with_appearances(&pool, 4242)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations/lore")]
async fn test_search_matches_any_text_column(pool: SqlitePool) {
    seed(&pool).await;

    let by_name = CharacterRepo::search(&pool, "SKY").await.unwrap();
    assert_eq!(
        character_names(&by_name),
        vec!["Anakin Skywalker", "Luke Skywalker"]
    );

    let by_homeworld = CharacterRepo::search(&pool, "naboo").await.unwrap();
    assert_eq!(
        character_names(&by_homeworld),
        vec!["Emperor Palpatine", "Padmé Amidala", "R2-D2"]
    );

    let by_species = CharacterRepo::search(&pool, "wook").await.unwrap();
    assert_eq!(character_names(&by_species), vec!["Chewbacca"]);
}

#[sqlx::test(migrations = "../../db/migrations/lore")]
async fn test_search_treats_like_wildcards_literally(pool: SqlitePool) {
    seed(&pool).await;

    let results = CharacterRepo::search(&pool, "%%").await.unwrap();
    assert!(results.is_empty(), "'%' must not act as a wildcard");

    let results = CharacterRepo::search(&pool, "r2-").await.unwrap();
    assert_eq!(character_names(&results), vec!["R2-D2"]);
}

#[sqlx::test(migrations = "../../db/migrations/lore")]
async fn test_search_folds_case_the_same_on_both_sides(pool: SqlitePool) {
    seed(&pool).await;
    sqlx::query(
        "INSERT INTO characters (name, species, homeworld, affiliation) \
         VALUES ('Éowyn', 'Human', 'Rohan', 'Riders of Rohan')",
    )
    .execute(&pool)
    .await
    .unwrap();

    for term in ["Éowyn", "ÉOWYN", "Éow"] {
        let results = CharacterRepo::search(&pool, term).await.unwrap();
        assert_eq!(character_names(&results), vec!["Éowyn"], "{term}");
    }
}

#[sqlx::test(migrations = "../../db/migrations/lore")]
async fn test_affiliation_is_substring_match(pool: SqlitePool) {
    seed(&pool).await;

    let rebels = CharacterRepo::list_by_affiliation(&pool, "rebel").await.unwrap();
    assert_eq!(
        character_names(&rebels),
        vec![
            "Chewbacca",
            "Han Solo",
            "Leia Organa",
            "Luke Skywalker",
            "R2-D2",
        ]
    );

    let nobody = CharacterRepo::list_by_affiliation(&pool, "Sith Armada").await.unwrap();
    assert!(nobody.is_empty());
}

// ---------------------------------------------------------------------------
// Test: aggregates serialize flat
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations/lore")]
async fn test_episode_with_cast_serializes_flat(pool: SqlitePool) {
    seed(&pool).await;

    let episode = EpisodeRepo::find_with_cast(&pool, 6).await.unwrap().unwrap();
    let json = serde_json::to_value(&episode).unwrap();

    assert_eq!(json["title"], "Return of the Jedi");
    assert_eq!(json["episode_number"], 6);
    let first = &json["characters"][0];
    assert!(first["name"].is_string());
    assert!(first["role"].is_string());
    assert!(first.get("character").is_none(), "cast entries must be flat");
}

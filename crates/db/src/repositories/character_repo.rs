//! Repository for the `characters` table.

use archivist_core::filter::{FilterBuilder, OrderBy, SortDirection};
use archivist_core::types::DbId;

use crate::models::appearance::CharacterWithAppearances;
use crate::models::character::Character;
use crate::query::fetch_filtered;
use crate::repositories::AppearanceRepo;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, species, homeworld, affiliation, description, created_at";

/// Text columns matched by free-text search.
const SEARCH_COLUMNS: &[&str] = &["name", "species", "homeworld", "affiliation"];

/// Provides read and search operations for characters.
pub struct CharacterRepo;

impl CharacterRepo {
    /// List active characters ordered by name.
    pub async fn list(pool: &DbPool) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM characters
             WHERE is_active = 1
             ORDER BY name ASC"
        );
        sqlx::query_as::<_, Character>(&query).fetch_all(pool).await
    }

    /// Find an active character by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = ? AND is_active = 1");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a character together with the episodes it appears in.
    pub async fn find_with_appearances(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<CharacterWithAppearances>, sqlx::Error> {
        let (character, appearances) = tokio::try_join!(
            Self::find_by_id(pool, id),
            AppearanceRepo::list_for_character(pool, id),
        )?;

        Ok(character.map(|character| CharacterWithAppearances {
            character,
            appearances,
        }))
    }

    /// Case-insensitive substring search over name, species, homeworld and
    /// affiliation. The caller is responsible for validating `term`.
    pub async fn search(pool: &DbPool, term: &str) -> Result<Vec<Character>, sqlx::Error> {
        let mut filter = FilterBuilder::new();
        filter
            .predicate("is_active = 1")
            .contains_any(SEARCH_COLUMNS, Some(term));

        fetch_filtered(pool, COLUMNS, "FROM characters", &filter, &by_name()).await
    }

    /// Active characters whose affiliation contains `affiliation`
    /// (case-insensitive).
    pub async fn list_by_affiliation(
        pool: &DbPool,
        affiliation: &str,
    ) -> Result<Vec<Character>, sqlx::Error> {
        let mut filter = FilterBuilder::new();
        filter
            .predicate("is_active = 1")
            .contains_any(&["affiliation"], Some(affiliation));

        fetch_filtered(pool, COLUMNS, "FROM characters", &filter, &by_name()).await
    }
}

fn by_name() -> OrderBy {
    OrderBy::new("name", SortDirection::Asc).then("id")
}

//! Movie entity model and DTO.

use movie_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `movies` table.
///
/// Field declaration order is the JSON output order: the five business
/// fields first, then `id`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub release_year: i32,
    pub description: Option<String>,
    pub director: Option<String>,
    pub id: DbId,
}

impl Movie {
    /// Overwrite all five business fields from `input`. The id is kept.
    pub fn apply(&mut self, input: NewMovie) {
        self.title = input.title;
        self.genre = input.genre;
        self.release_year = input.release_year;
        self.description = input.description;
        self.director = input.director;
    }

    /// The client-visible fields of this movie, without its id.
    pub fn business_fields(&self) -> NewMovie {
        NewMovie {
            title: self.title.clone(),
            genre: self.genre.clone(),
            release_year: self.release_year,
            description: self.description.clone(),
            director: self.director.clone(),
        }
    }
}

/// A movie that has not been stored yet.
///
/// This is the request body for both create and update. Missing fields
/// deserialize to `None` (or `0` for the year) and an `id` in the body is
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewMovie {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub release_year: i32,
    pub description: Option<String>,
    pub director: Option<String>,
}

impl NewMovie {
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        release_year: i32,
        description: impl Into<String>,
        director: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            genre: Some(genre.into()),
            release_year,
            description: Some(description.into()),
            director: Some(director.into()),
        }
    }

    /// Attach a store-assigned id, producing the persisted form.
    pub fn with_id(self, id: DbId) -> Movie {
        Movie {
            title: self.title,
            genre: self.genre,
            release_year: self.release_year,
            description: self.description,
            director: self.director,
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> NewMovie {
        NewMovie::new("Dune", "SciFi", 2021, "Desert planet", "Villeneuve")
    }

    #[test]
    fn serializes_fields_in_declared_order() {
        let json = serde_json::to_string(&dune().with_id(7)).unwrap();
        assert_eq!(
            json,
            r#"{"title":"Dune","genre":"SciFi","releaseYear":2021,"description":"Desert planet","director":"Villeneuve","id":7}"#
        );
    }

    #[test]
    fn request_body_ignores_client_id() {
        let input: NewMovie = serde_json::from_str(
            r#"{"id":99,"title":"Dune","genre":"SciFi","releaseYear":2021,"description":"Desert planet","director":"Villeneuve"}"#,
        )
        .unwrap();
        assert_eq!(input, dune());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let input: NewMovie = serde_json::from_str(r#"{"title":"Untitled"}"#).unwrap();
        assert_eq!(input.title.as_deref(), Some("Untitled"));
        assert_eq!(input.release_year, 0);
        assert!(input.genre.is_none());
        assert!(input.director.is_none());
    }

    #[test]
    fn apply_overwrites_everything_but_id() {
        let mut movie = dune().with_id(3);
        let sequel = NewMovie::new("Dune Part Two", "SciFi", 2024, "War", "Villeneuve");
        movie.apply(sequel.clone());

        assert_eq!(movie.id, 3);
        assert_eq!(movie.business_fields(), sequel);
    }

    #[test]
    fn apply_clears_fields_absent_from_input() {
        let mut movie = dune().with_id(3);
        movie.apply(NewMovie {
            title: Some("Only a title".into()),
            ..NewMovie::default()
        });

        assert_eq!(movie.title.as_deref(), Some("Only a title"));
        assert!(movie.genre.is_none());
        assert_eq!(movie.release_year, 0);
    }
}

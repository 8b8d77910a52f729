use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A movie as stored in the `movies` collection.
///
/// Only the id is interpreted; every other field is carried through as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Movie {
    pub fn new(details: Map<String, Value>) -> Self {
        Self { id: None, details }
    }

    /// Returns the movie with its id replaced by `id`.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// True when the id is missing or blank and the store must assign one.
    pub fn needs_id(&self) -> bool {
        self.id.as_deref().map_or(true, |id| id.trim().is_empty())
    }
}

/// Wire representation: the id travels as `Id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieDto {
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl From<MovieDto> for Movie {
    fn from(dto: MovieDto) -> Self {
        let mut details = dto.fields;
        // `_id` is the storage key; it must never come from the payload
        details.remove("_id");
        Self {
            id: dto.id,
            details,
        }
    }
}

impl From<Movie> for MovieDto {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            fields: movie.details,
        }
    }
}

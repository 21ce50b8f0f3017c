use crate::types::DbId;

/// Domain errors shared by the data access and HTTP layers.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "Movie",
            id: 7,
        };
        assert_eq!(err.to_string(), "Entity not found: Movie with id 7");
    }
}

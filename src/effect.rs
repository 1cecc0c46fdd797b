//! Effects - side effects declared by the reducer

use crate::action::Action;
use crate::api::FetchError;
use crate::state::PokemonRecord;

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Fetch the record for `id`; the result is tagged with `generation`
    FetchRecord { id: u32, generation: u64 },
}

/// Turn a finished fetch into the result action for its generation.
pub fn record_result_action(
    generation: u64,
    result: Result<PokemonRecord, FetchError>,
) -> Action {
    match result {
        Ok(record) => Action::RecordDidLoad { generation, record },
        Err(error) => Action::RecordDidError {
            generation,
            error: error.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_loaded_record_keeps_generation() {
        let record = PokemonRecord {
            id: 132,
            name: "ditto".into(),
            ..Default::default()
        };

        assert_eq!(
            record_result_action(7, Ok(record.clone())),
            Action::RecordDidLoad {
                generation: 7,
                record
            }
        );
    }

    #[test]
    fn test_failure_carries_display_message() {
        let action = record_result_action(3, Err(FetchError::NotFound { id: 100000 }));

        assert_eq!(
            action,
            Action::RecordDidError {
                generation: 3,
                error: "No Pokémon found for id=100000".into(),
            }
        );
    }

    #[test]
    fn test_decode_failure_becomes_error_action() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        let action = record_result_action(1, Err(FetchError::Decode(err)));

        assert!(matches!(
            action,
            Action::RecordDidError { generation: 1, ref error } if error.starts_with("response parse error")
        ));
    }
}

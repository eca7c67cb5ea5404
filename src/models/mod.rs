//! Row types for every table.
//!
//! Each table has an `XEntity` read model, and writable tables also have a
//! `CreateXEntity` insert model and an `UpdateXEntity` partial changeset.
//! On update models, nullable columns use `Option<Option<T>>`: an absent
//! field is left untouched and an explicit `null` clears the column.

use serde::{Deserialize, Deserializer};

use crate::core::app_error::AppError;

pub mod accounts;
pub mod analytics;
pub mod catalog;
pub mod commerce;
pub mod content;
pub mod cooperatives;
pub mod delivery;
pub mod farms;
pub mod finance;
pub mod geography;
pub mod inputs;
pub mod insurance;
pub mod market;
pub mod mobile;
pub mod quality;
pub mod schemes;
pub mod storage;
pub mod subscriptions;
pub mod support;
pub mod training;

pub use accounts::*;
pub use analytics::*;
pub use catalog::*;
pub use commerce::*;
pub use content::*;
pub use cooperatives::*;
pub use delivery::*;
pub use farms::*;
pub use finance::*;
pub use geography::*;
pub use inputs::*;
pub use insurance::*;
pub use market::*;
pub use mobile::*;
pub use quality::*;
pub use schemes::*;
pub use storage::*;
pub use subscriptions::*;
pub use support::*;
pub use training::*;

/// Normalises and validates an admin payload before it is written.
pub trait Prepare {
    fn prepare(&mut self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Keeps `Some(None)` for an explicit JSON `null`; pair with `#[serde(default)]`.
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn update_models_distinguish_null_from_absent() {
        let absent: UpdateUserEntity = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.date_of_birth, None);

        let cleared: UpdateUserEntity =
            serde_json::from_str(r#"{"date_of_birth": null}"#).unwrap();
        assert_eq!(cleared.date_of_birth, Some(None));

        let set: UpdateUserEntity =
            serde_json::from_str(r#"{"date_of_birth": "1990-04-01"}"#).unwrap();
        assert_eq!(
            set.date_of_birth,
            Some(NaiveDate::from_ymd_opt(1990, 4, 1))
        );
    }
}

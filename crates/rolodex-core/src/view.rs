//! Projection of fetch state into renderable list data.
//!
//! The view model holds the full record sequence even when a renderer only
//! draws a viewport's worth of rows, so verification can inspect the handed
//! data rather than the rendered subset.

use crate::controller::FetchState;
use crate::record::User;
use chrono::NaiveDate;

/// Banner shown for every failed fetch. Intentionally generic: the view
/// model never learns which error occurred.
pub const ERROR_BANNER: &str = "Something went wrong while loading users.";

/// One rendered list entry, keyed by record id.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub key: String,
    pub title: String,
    pub subtitle: String,
    pub birth_date: NaiveDate,
    pub image_url: String,
}

impl Row {
    fn from_user(user: &User) -> Self {
        Self {
            key: user.id.clone(),
            title: user.full_name(),
            subtitle: user.email.clone(),
            birth_date: user.birth_date,
            image_url: user.image_url.clone(),
        }
    }
}

/// Snapshot of everything the list renderer needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListViewModel {
    pub loader_visible: bool,
    pub error_visible: bool,
    records: Vec<User>,
}

impl ListViewModel {
    pub fn from_state(state: &FetchState) -> Self {
        match state {
            FetchState::Idle => Self::default(),
            FetchState::Loading => Self {
                loader_visible: true,
                ..Self::default()
            },
            FetchState::Loaded { records } => Self {
                records: records.clone(),
                ..Self::default()
            },
            FetchState::Failed => Self {
                error_visible: true,
                ..Self::default()
            },
        }
    }

    /// Full ordered sequence handed to the view.
    pub fn records(&self) -> &[User] {
        &self.records
    }

    pub fn error_banner(&self) -> Option<&'static str> {
        self.error_visible.then_some(ERROR_BANNER)
    }

    /// All rows, in record order.
    pub fn rows(&self) -> Vec<Row> {
        self.records.iter().map(Row::from_user).collect()
    }

    /// The first `height` rows, as a virtualized renderer would draw them.
    pub fn viewport(&self, height: usize) -> Vec<Row> {
        self.records.iter().take(height).map(Row::from_user).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture;

    fn loaded_state() -> FetchState {
        FetchState::Loaded {
            records: fixture::builtin().all().to_vec(),
        }
    }

    #[test]
    fn test_loader_and_error_are_never_both_visible() {
        let states = [
            FetchState::Idle,
            FetchState::Loading,
            loaded_state(),
            FetchState::Failed,
        ];
        for state in &states {
            let view = ListViewModel::from_state(state);
            assert!(
                !(view.loader_visible && view.error_visible),
                "loader and error both visible for {state:?}"
            );
        }
    }

    #[test]
    fn test_loading_shows_loader_only() {
        let view = ListViewModel::from_state(&FetchState::Loading);
        assert!(view.loader_visible);
        assert!(!view.error_visible);
        assert!(view.records().is_empty());
        assert!(view.error_banner().is_none());
    }

    #[test]
    fn test_failed_shows_banner_and_no_records() {
        let view = ListViewModel::from_state(&FetchState::Failed);
        assert!(!view.loader_visible);
        assert_eq!(view.error_banner(), Some(ERROR_BANNER));
        assert!(view.records().is_empty());
        assert!(view.rows().is_empty());
    }

    #[test]
    fn test_loaded_hands_over_the_full_sequence() {
        let view = ListViewModel::from_state(&loaded_state());
        assert!(!view.loader_visible);
        assert!(!view.error_visible);
        assert_eq!(view.records().len(), 30);
        assert_eq!(view.rows().len(), 30);
        assert_eq!(view.rows()[0].title, "Umair Medhurst");
        assert_eq!(view.rows()[0].subtitle, "atuny0@sohu.com");
        assert_eq!(
            view.rows()[0].birth_date,
            chrono::NaiveDate::from_ymd_opt(2000, 12, 25).unwrap()
        );
    }

    #[test]
    fn test_viewport_renders_a_subset_of_held_records() {
        let view = ListViewModel::from_state(&loaded_state());
        let viewport = view.viewport(10);
        assert_eq!(viewport.len(), 10);
        assert_eq!(viewport[9].key, "10");
        // The full sequence stays available behind the viewport.
        assert_eq!(view.records().len(), 30);
    }

    #[test]
    fn test_viewport_larger_than_dataset() {
        let view = ListViewModel::from_state(&loaded_state());
        assert_eq!(view.viewport(100).len(), 30);
    }
}

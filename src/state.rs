// src/state.rs

use std::rc::Rc;

use crate::models::ClubData;

/// Root-owned data state: the five slots behind one loading flag.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub loading: bool,
    pub data: Rc<ClubData>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            loading: true,
            data: Rc::new(ClubData::default()),
        }
    }
}

impl AppState {
    /// The load has settled, successfully or not. A second settle is ignored
    /// so the flag only ever flips once.
    pub fn settle(&self, data: ClubData) -> Self {
        if !self.loading {
            return self.clone();
        }
        Self {
            loading: false,
            data: Rc::new(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::load_club_data;
    use crate::config::Config;
    use crate::fixtures::Scripted;
    use futures::executor::block_on;

    #[test]
    fn loading_until_settled() {
        let state = AppState::default();
        assert!(state.loading);
        assert_eq!(*state.data, ClubData::default());
    }

    #[test]
    fn settles_false_even_when_everything_failed() {
        let report = block_on(load_club_data(&Scripted::offline(), &Config::new("")));
        let state = AppState::default().settle(report.data);
        assert!(!state.loading);
        assert_eq!(*state.data, ClubData::default());
    }

    #[test]
    fn flag_flips_only_once() {
        let report = block_on(load_club_data(&Scripted::all_ok(), &Config::new("")));
        let settled = AppState::default().settle(report.data);
        assert!(!settled.data.teams.is_empty());

        let again = settled.settle(ClubData::default());
        assert!(!again.loading);
        assert_eq!(again, settled);
    }
}

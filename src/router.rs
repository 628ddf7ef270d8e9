// src/router.rs
// In-memory page switching. No URL or history sync: a reload always lands on Home.

use yew::Html;

use crate::views::{self, PageCtx};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Teams,
    Calendar,
    News,
    Events,
    About,
    Contact,
}

/// Nav order. The footer splits it after the fourth entry.
pub const NAVIGATION: [Page; 7] = [
    Page::Home,
    Page::Teams,
    Page::Calendar,
    Page::News,
    Page::Events,
    Page::About,
    Page::Contact,
];

pub const QUICK_LINKS: usize = 4;

impl Page {
    /// Unknown identifiers fall back to Home.
    pub fn from_id(id: &str) -> Page {
        NAVIGATION
            .iter()
            .copied()
            .find(|p| p.id() == id)
            .unwrap_or(Page::Home)
    }

    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Teams => "teams",
            Page::Calendar => "calendar",
            Page::News => "news",
            Page::Events => "events",
            Page::About => "about",
            Page::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Teams => "Teams",
            Page::Calendar => "Calendar",
            Page::News => "News",
            Page::Events => "Events",
            Page::About => "About",
            Page::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub page: Page,
    pub menu_open: bool,
}

impl NavState {
    /// Picking any entry also closes the mobile menu.
    pub fn select(self, page: Page) -> Self {
        Self {
            page,
            menu_open: false,
        }
    }

    pub fn select_id(self, id: &str) -> Self {
        self.select(Page::from_id(id))
    }

    pub fn toggle_menu(self) -> Self {
        Self {
            menu_open: !self.menu_open,
            ..self
        }
    }
}

pub type PageView = fn(&PageCtx) -> Html;

const ROUTES: [(Page, PageView); 7] = [
    (Page::Home, views::home::view),
    (Page::Teams, views::teams::view),
    (Page::Calendar, views::calendar::view),
    (Page::News, views::news::view),
    (Page::Events, views::events::view),
    (Page::About, views::about::view),
    (Page::Contact, views::contact::view),
];

pub fn route(page: Page) -> PageView {
    ROUTES
        .iter()
        .find(|(p, _)| *p == page)
        .map(|(_, view)| *view)
        .unwrap_or(views::home::view)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_id() {
        for page in NAVIGATION {
            assert_eq!(Page::from_id(page.id()), page);
        }
    }

    #[test]
    fn unknown_id_falls_back_to_home() {
        assert_eq!(Page::from_id("scores"), Page::Home);
        assert_eq!(Page::from_id(""), Page::Home);
        assert_eq!(Page::from_id("Teams"), Page::Home);
        assert_eq!(NavState::default().select(Page::News).select_id("shop").page, Page::Home);
    }

    #[test]
    fn every_nav_entry_has_a_route() {
        for page in NAVIGATION {
            assert!(ROUTES.iter().any(|(p, _)| *p == page), "{page:?} has no view");
        }
    }

    #[test]
    fn starts_on_home_with_menu_closed() {
        let nav = NavState::default();
        assert_eq!(nav.page, Page::Home);
        assert!(!nav.menu_open);
    }

    #[test]
    fn selecting_closes_open_menu() {
        let nav = NavState::default().toggle_menu();
        assert!(nav.menu_open);

        for page in NAVIGATION {
            let after = nav.select(page);
            assert_eq!(after.page, page);
            assert!(!after.menu_open);
        }
    }

    #[test]
    fn toggle_keeps_page() {
        let nav = NavState::default().select(Page::Events).toggle_menu();
        assert_eq!(nav.page, Page::Events);
        assert!(nav.menu_open);
        assert!(!nav.toggle_menu().menu_open);
    }

    #[test]
    fn footer_split() {
        let (quick, more) = NAVIGATION.split_at(QUICK_LINKS);
        assert_eq!(quick.last(), Some(&Page::News));
        assert_eq!(more, &[Page::Events, Page::About, Page::Contact]);
    }
}

// src/views/mod.rs
// One module per page plus the shared layout. Views only read `PageCtx`.

use std::rc::Rc;

use yew::prelude::*;

use crate::format::EmptyState;
use crate::models::ClubData;
use crate::router::Page;

pub mod about;
pub mod calendar;
pub mod contact;
pub mod events;
pub mod home;
pub mod layout;
pub mod news;
pub mod teams;

#[derive(Clone, PartialEq)]
pub struct PageCtx {
    pub data: Rc<ClubData>,
    pub navigate: Callback<Page>,
}

impl PageCtx {
    /// Click handler that switches to `page`.
    pub fn go(&self, page: Page) -> Callback<MouseEvent> {
        self.navigate.reform(move |_: MouseEvent| page)
    }
}

pub fn empty_state(state: &EmptyState, icon: &str) -> Html {
    html! {
        <div class="empty">
            if !icon.is_empty() {
                <div class="empty-icon">{ icon.to_string() }</div>
            }
            if !state.title.is_empty() {
                <h3>{ state.title }</h3>
            }
            <p>{ state.message }</p>
        </div>
    }
}

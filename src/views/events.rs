// src/views/events.rs

use yew::prelude::*;

use super::{empty_state, PageCtx};
use crate::format::{fmt_long_date, fmt_time, participants_label, section, EmptyState, Section};
use crate::models::ClubEvent;

pub const EMPTY: EmptyState = EmptyState {
    title: "No Events Scheduled",
    message: "Check back later for upcoming events and activities.",
};

fn join_label(is_public: bool) -> &'static str {
    if is_public {
        "Join Event"
    } else {
        "Request Invitation"
    }
}

pub fn view(ctx: &PageCtx) -> Html {
    html! {
        <div class="page container">
            <h1 class="page-title">{ "Upcoming Events" }</h1>
            {
                match section(&ctx.data.events, &EMPTY) {
                    Section::Items(events) => html! {
                        <div class="grid cols-2">{ for events.iter().map(event_card) }</div>
                    },
                    Section::Empty(e) => empty_state(e, "📅"),
                }
            }
        </div>
    }
}

fn event_card(e: &ClubEvent) -> Html {
    html! {
        <div class="card" key={e.id.clone()}>
            <div class="row spread">
                <h3 class="card-title">{ e.title.clone() }</h3>
                <span class="badge outline capitalize">{ e.event_type.clone() }</span>
            </div>
            <p class="card-desc">{ e.description.clone() }</p>
            <div class="facts">
                <div class="strong">{ format!("📅 {}", fmt_long_date(&e.event_date)) }</div>
                <div>{ format!("🕒 {}", fmt_time(&e.event_date)) }</div>
                <div>{ format!("📍 {}", e.location) }</div>
                if let Some(org) = &e.organizer {
                    <div>{ format!("👤 Organized by {org}") }</div>
                }
                if let Some(p) = participants_label(e.current_participants, e.max_participants) {
                    <div>{ format!("👥 {p}") }</div>
                }
            </div>
            // Not wired to anything yet, same as the contact form.
            <button class="btn outline full">{ join_label(e.is_public) }</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn private_events_ask_for_an_invitation() {
        assert_eq!(join_label(true), "Join Event");
        assert_eq!(join_label(false), "Request Invitation");
    }
}

// src/views/calendar.rs
// Matches and events side by side behind two local tabs. The tab choice is
// view-local state and resets whenever the page is left.

use std::rc::Rc;

use yew::prelude::*;

use super::{empty_state, PageCtx};
use crate::format::{
    fmt_date, fmt_time, participants_label, score_label, section, EmptyState, Section,
};
use crate::models::{ClubData, ClubEvent, Match, MatchStatus};

pub const MATCHES_EMPTY: EmptyState = EmptyState {
    title: "No Matches Scheduled",
    message: "Match schedule will appear here once games are scheduled.",
};

pub const EVENTS_EMPTY: EmptyState = EmptyState {
    title: "No Events Scheduled",
    message: "Upcoming events will be displayed here.",
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Matches,
    Events,
}

fn tab_label(t: Tab) -> &'static str {
    match t {
        Tab::Matches => "Matches",
        Tab::Events => "Events",
    }
}

fn status_badge(status: MatchStatus) -> &'static str {
    match status {
        MatchStatus::Completed => "badge default",
        MatchStatus::Live => "badge destructive",
        _ => "badge secondary",
    }
}

pub fn view(ctx: &PageCtx) -> Html {
    html! { <CalendarPage data={ctx.data.clone()} /> }
}

#[derive(Properties, PartialEq)]
struct CalendarProps {
    data: Rc<ClubData>,
}

#[function_component(CalendarPage)]
fn calendar_page(props: &CalendarProps) -> Html {
    let tab = use_state(|| Tab::Matches);

    let tab_button = |t: Tab| {
        let tab = tab.clone();
        let active = *tab == t;
        let onclick = Callback::from(move |_: MouseEvent| tab.set(t));
        html! {
            <button class={classes!("tab", active.then_some("active"))} {onclick}>
                { tab_label(t) }
            </button>
        }
    };

    let body = match *tab {
        Tab::Matches => match section(&props.data.matches, &MATCHES_EMPTY) {
            Section::Items(matches) => html! {
                <div class="stack">{ for matches.iter().map(match_card) }</div>
            },
            Section::Empty(e) => empty_state(e, "📅"),
        },
        Tab::Events => match section(&props.data.events, &EVENTS_EMPTY) {
            Section::Items(events) => html! {
                <div class="stack">{ for events.iter().map(event_card) }</div>
            },
            Section::Empty(e) => empty_state(e, "📅"),
        },
    };

    html! {
        <div class="page container">
            <h1 class="page-title">{ "Calendar & Results" }</h1>
            <div class="tabs">
                { tab_button(Tab::Matches) }
                { tab_button(Tab::Events) }
            </div>
            { body }
        </div>
    }
}

fn match_card(m: &Match) -> Html {
    html! {
        <div class="card" key={m.id.clone()}>
            <div class="row spread wrap">
                <div class="row scoreline">
                    <div class="side">
                        <div class="team-name big">{ m.home_team_name.clone() }</div>
                        <div class="score big">{ score_label(m.home_score) }</div>
                    </div>
                    <div class="vs">{ "VS" }</div>
                    <div class="side">
                        <div class="team-name big">{ m.away_team_name.clone() }</div>
                        <div class="score big">{ score_label(m.away_score) }</div>
                    </div>
                </div>
                <div class="right">
                    <span class={status_badge(m.status)}>{ m.status.as_str().to_uppercase() }</span>
                    <div class="meta">{ format!("📅 {}", fmt_date(&m.match_date)) }</div>
                    <div class="meta">{ format!("🕒 {}", fmt_time(&m.match_date)) }</div>
                    <div class="meta">{ format!("📍 {}", m.venue) }</div>
                </div>
            </div>
            if let Some(comp) = m.competition.clone() {
                <div class="card-foot">
                    <span class="badge outline">{ comp }</span>
                </div>
            }
        </div>
    }
}

fn event_card(e: &ClubEvent) -> Html {
    html! {
        <div class="card" key={e.id.clone()}>
            <div class="row spread">
                <div>
                    <h3 class="card-title">{ e.title.clone() }</h3>
                    <p class="card-desc">{ e.description.clone() }</p>
                </div>
                <span class="badge outline capitalize">{ e.event_type.clone() }</span>
            </div>
            <div class="grid cols-2 meta">
                <div class="facts">
                    <div>{ format!("📅 {}", fmt_date(&e.event_date)) }</div>
                    <div>{ format!("🕒 {}", fmt_time(&e.event_date)) }</div>
                    <div>{ format!("📍 {}", e.location) }</div>
                </div>
                <div class="facts">
                    if let Some(org) = &e.organizer {
                        <div>{ format!("👤 Organized by {org}") }</div>
                    }
                    if let Some(p) = participants_label(e.current_participants, e.max_participants) {
                        <div>{ format!("👥 {p}") }</div>
                    }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_matches_get_the_alert_badge() {
        assert_eq!(status_badge(MatchStatus::Live), "badge destructive");
        assert_eq!(status_badge(MatchStatus::Completed), "badge default");
        assert_eq!(status_badge(MatchStatus::Scheduled), "badge secondary");
        assert_eq!(status_badge(MatchStatus::Unknown), "badge secondary");
    }
}

// src/views/teams.rs

use yew::prelude::*;

use super::{empty_state, PageCtx};
use crate::format::{section, top_achievements, EmptyState, Section};
use crate::models::Team;

pub const EMPTY: EmptyState = EmptyState {
    title: "No Teams Yet",
    message: "Teams will be displayed here once they are added to the system.",
};

pub fn view(ctx: &PageCtx) -> Html {
    html! {
        <div class="page container">
            <h1 class="page-title">{ "Our Teams" }</h1>
            {
                match section(&ctx.data.teams, &EMPTY) {
                    Section::Items(teams) => html! {
                        <div class="grid cols-3">
                            { for teams.iter().map(team_card) }
                        </div>
                    },
                    Section::Empty(e) => empty_state(e, "🏆"),
                }
            }
        </div>
    }
}

fn team_card(team: &Team) -> Html {
    let achievements = top_achievements(&team.achievements);

    html! {
        <div class="card flush" key={team.id.clone()}>
            <div class="banner">
                if let Some(src) = team.image.clone() {
                    <img src={src} alt={team.name.clone()} />
                }
                <div class="banner-text">
                    <h3>{ team.name.clone() }</h3>
                    <p class="capitalize">{ format!("{} • {}", team.sport, team.category) }</p>
                </div>
            </div>
            <div class="card-body">
                <p class="card-desc">{ team.description.clone() }</p>
                <div class="facts">
                    if let Some(coach) = &team.coach {
                        <div>{ format!("👤 Coach: {coach}") }</div>
                    }
                    if let Some(venue) = &team.home_venue {
                        <div>{ format!("📍 {venue}") }</div>
                    }
                    if let Some(year) = team.founded_year {
                        <div>{ format!("📅 Founded {year}") }</div>
                    }
                </div>
                if !achievements.is_empty() {
                    <div class="achievements">
                        <h4>{ "Recent Achievements" }</h4>
                        <div class="badges">
                            { for achievements.iter().map(|a| html! {
                                <span class="badge secondary small">{ a.clone() }</span>
                            })}
                        </div>
                    </div>
                }
            </div>
        </div>
    }
}

// src/views/home.rs

use yew::prelude::*;

use super::{empty_state, PageCtx};
use crate::format::{counter, fmt_date, score_label, section, EmptyState, Section};
use crate::models::{Match, MatchStatus, NewsArticle};
use crate::router::Page;

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1709403552725-97e0ba206cb8?crop=entropy&cs=srgb&fm=jpg&q=85";

pub const NEWS_EMPTY: EmptyState = EmptyState {
    title: "",
    message: "No news articles available yet.",
};

pub const MATCHES_EMPTY: EmptyState = EmptyState {
    title: "",
    message: "No matches scheduled yet.",
};

pub fn view(ctx: &PageCtx) -> Html {
    let stats = &ctx.data.stats;

    html! {
        <div class="page home">
            <section class="hero">
                <img class="hero-bg" src={HERO_IMAGE} alt="Sports Action" />
                <div class="hero-shade"></div>
                <div class="hero-body">
                    <h1>{ "Champions " }<span class="accent">{ "Club" }</span></h1>
                    <p>{ "Where excellence meets passion. Join our community of champions and unleash your potential." }</p>
                    <div class="btnRow center">
                        <button class="btn light" onclick={ctx.go(Page::Teams)}>{ "Explore Teams ›" }</button>
                        <button class="btn outline" onclick={ctx.go(Page::Contact)}>{ "Join Us Today" }</button>
                    </div>
                </div>
            </section>

            <section class="band muted">
                <div class="stats">
                    { stat("🏆", counter(stats.total_teams), "Active Teams") }
                    { stat("👥", counter(stats.total_players), "Athletes") }
                    { stat("📅", counter(stats.upcoming_matches), "Upcoming Matches") }
                    { stat("⭐", "15+".to_string(), "Years Excellence") }
                </div>
            </section>

            <section class="band">
                <h2 class="section-title">{ "Latest News" }</h2>
                {
                    match section(&ctx.data.news, &NEWS_EMPTY) {
                        Section::Items(articles) => html! {
                            <div class="grid cols-3">
                                { for articles.iter().map(news_teaser) }
                            </div>
                        },
                        Section::Empty(e) => empty_state(e, ""),
                    }
                }
            </section>

            <section class="band muted">
                <h2 class="section-title">{ "Recent Matches" }</h2>
                {
                    match section(&ctx.data.matches, &MATCHES_EMPTY) {
                        Section::Items(matches) => html! {
                            <div class="stack">
                                { for matches.iter().map(match_row) }
                            </div>
                        },
                        Section::Empty(e) => empty_state(e, ""),
                    }
                }
            </section>
        </div>
    }
}

fn stat(icon: &str, value: String, label: &str) -> Html {
    html! {
        <div class="stat">
            <div class="stat-icon">{ icon.to_string() }</div>
            <div class="stat-value">{ value }</div>
            <div class="stat-label">{ label.to_string() }</div>
        </div>
    }
}

fn news_teaser(article: &NewsArticle) -> Html {
    html! {
        <div class="card" key={article.id.clone()}>
            <span class="badge secondary">{ article.category.clone() }</span>
            <h3 class="card-title">{ article.title.clone() }</h3>
            <p class="card-desc">{ article.summary.clone() }</p>
            <div class="meta">
                { format!("👤 {} • 🕒 {}", article.author, fmt_date(&article.created_at)) }
            </div>
        </div>
    }
}

fn match_row(m: &Match) -> Html {
    let badge = if m.status == MatchStatus::Completed { "badge default" } else { "badge secondary" };

    html! {
        <div class="card row spread" key={m.id.clone()}>
            <div class="row scoreline">
                <div class="side">
                    <div class="team-name">{ m.home_team_name.clone() }</div>
                    <div class="score">{ score_label(m.home_score) }</div>
                </div>
                <div class="vs">{ "VS" }</div>
                <div class="side">
                    <div class="team-name">{ m.away_team_name.clone() }</div>
                    <div class="score">{ score_label(m.away_score) }</div>
                </div>
            </div>
            <div class="right">
                <span class={badge}>{ m.status.as_str() }</span>
                <div class="meta">{ format!("📅 {}", fmt_date(&m.match_date)) }</div>
                <div class="meta">{ format!("📍 {}", m.venue) }</div>
            </div>
        </div>
    }
}

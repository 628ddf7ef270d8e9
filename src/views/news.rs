// src/views/news.rs

use yew::prelude::*;

use super::{empty_state, PageCtx};
use crate::format::{fmt_date, section, EmptyState, Section};
use crate::models::NewsArticle;

pub const EMPTY: EmptyState = EmptyState {
    title: "No News Available",
    message: "Latest news and updates will appear here.",
};

pub fn view(ctx: &PageCtx) -> Html {
    html! {
        <div class="page container">
            <h1 class="page-title">{ "News & Updates" }</h1>
            {
                match section(&ctx.data.news, &EMPTY) {
                    Section::Items(articles) => html! {
                        <div class="stack wide">{ for articles.iter().map(article) }</div>
                    },
                    Section::Empty(e) => empty_state(e, "📰"),
                }
            }
        </div>
    }
}

fn article(a: &NewsArticle) -> Html {
    html! {
        <article class="card" key={a.id.clone()}>
            <div class="row">
                <span class="badge secondary">{ a.category.clone() }</span>
                <span class="meta">{ fmt_date(&a.created_at) }</span>
            </div>
            <h2 class="card-title large">{ a.title.clone() }</h2>
            <p class="card-desc lead">{ a.summary.clone() }</p>
            <p class="prose">{ a.content.clone() }</p>
            <div class="card-foot row spread">
                <span class="meta">{ format!("👤 By {}", a.author) }</span>
                if !a.tags.is_empty() {
                    <div class="badges">
                        { for a.tags.iter().map(|tag| html! {
                            <span class="badge outline small">{ format!("#{tag}") }</span>
                        })}
                    </div>
                }
            </div>
        </article>
    }
}

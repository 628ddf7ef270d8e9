// src/views/layout.rs
// Chrome around the routed page: header with desktop and mobile nav, footer,
// and the full-screen loading state shown until the first load settles.

use yew::prelude::*;

use super::contact::{ADDRESS, EMAIL, PHONE};
use crate::router::{NavState, Page, NAVIGATION, QUICK_LINKS};

pub fn loading_screen() -> Html {
    html! {
        <div class="loading">
            <div class="spinner"></div>
            <p>{ "Loading Champions Club..." }</p>
        </div>
    }
}

fn nav_button(page: Page, nav: NavState, navigate: &Callback<Page>, mobile: bool) -> Html {
    let active = nav.page == page;
    let onclick = navigate.reform(move |_: MouseEvent| page);
    html! {
        <button
            key={page.id()}
            class={classes!("nav-link", mobile.then_some("mobile"), active.then_some("active"))}
            {onclick}
        >
            { page.label() }
        </button>
    }
}

pub fn header(nav: NavState, navigate: &Callback<Page>, on_toggle_menu: Callback<MouseEvent>) -> Html {
    html! {
        <header class="header">
            <div class="header-bar">
                <div class="brand">
                    <div class="logo">{ "🏆" }</div>
                    <div>
                        <div class="brand-name">{ "Champions Club" }</div>
                        <div class="brand-tag">{ "Excellence in Sports" }</div>
                    </div>
                </div>

                <nav class="nav desktop">
                    { for NAVIGATION.iter().map(|p| nav_button(*p, nav, navigate, false)) }
                </nav>

                <button class="menu-toggle" onclick={on_toggle_menu} aria-label="Toggle menu">
                    { if nav.menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            if nav.menu_open {
                <nav class="nav mobile">
                    { for NAVIGATION.iter().map(|p| nav_button(*p, nav, navigate, true)) }
                </nav>
            }
        </header>
    }
}

fn footer_links(pages: &[Page], navigate: &Callback<Page>) -> Html {
    html! {
        <ul class="links">
            { for pages.iter().map(|p| {
                let page = *p;
                let onclick = navigate.reform(move |_: MouseEvent| page);
                html! {
                    <li key={page.id()}>
                        <button class="link" {onclick}>{ page.label() }</button>
                    </li>
                }
            })}
        </ul>
    }
}

pub fn footer(navigate: &Callback<Page>) -> Html {
    let (quick, more) = NAVIGATION.split_at(QUICK_LINKS);

    html! {
        <footer class="footer">
            <div class="grid cols-4">
                <div>
                    <div class="brand">
                        <div class="logo small">{ "🏆" }</div>
                        <span class="brand-name">{ "Champions Club" }</span>
                    </div>
                    <p class="muted-text">{ "Excellence in sports, building champions for life." }</p>
                </div>
                <div>
                    <h3>{ "Quick Links" }</h3>
                    { footer_links(quick, navigate) }
                </div>
                <div>
                    <h3>{ "More" }</h3>
                    { footer_links(more, navigate) }
                </div>
                <div>
                    <h3>{ "Contact Info" }</h3>
                    <div class="facts muted-text">
                        <div>{ format!("📍 {}", ADDRESS[0]) }</div>
                        <div>{ format!("📞 {PHONE}") }</div>
                        <div>{ format!("✉️ {EMAIL}") }</div>
                    </div>
                </div>
            </div>
            <div class="copyright">{ "© 2025 Champions Club. All rights reserved." }</div>
        </footer>
    }
}

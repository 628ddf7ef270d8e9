// src/app.rs
// Root component: owns the data slots and the nav state, loads once on mount.

use gloo::console;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{load_club_data, HttpTransport, Level, LoadReport};
use crate::config::Config;
use crate::router::{route, NavState, Page};
use crate::state::AppState;
use crate::views::{layout, PageCtx};

fn emit_diagnostics(report: &LoadReport) {
    for (level, msg) in report.console_records() {
        match level {
            Level::Log => console::log!(msg),
            Level::Warn => console::warn!(msg),
            Level::Error => console::error!(msg),
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(AppState::default);
    let nav = use_state(NavState::default);

    // Fetch everything once on mount
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let config = Config::from_build_env();
                let report = load_club_data(&HttpTransport, &config).await;
                emit_diagnostics(&report);
                state.set(state.settle(report.data));
            });
            || ()
        });
    }

    let navigate = {
        let nav = nav.clone();
        Callback::from(move |page: Page| nav.set(nav.select(page)))
    };

    let on_toggle_menu = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.set(nav.toggle_menu()))
    };

    if state.loading {
        return layout::loading_screen();
    }

    let ctx = PageCtx {
        data: state.data.clone(),
        navigate: navigate.clone(),
    };
    let page_view = route(nav.page);

    html! {
        <div class="app">
            { layout::header(*nav, &navigate, on_toggle_menu) }
            <main>
                { page_view(&ctx) }
            </main>
            { layout::footer(&navigate) }
        </div>
    }
}

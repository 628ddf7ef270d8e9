// src/main.rs
// Champions Club: single-page club site (Rust + Yew + WASM).
// Build with `trunk build --release`; set CLUB_API_URL to point at the API.

use champions_club::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}

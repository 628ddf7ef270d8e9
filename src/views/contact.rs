// src/views/contact.rs
// Static contact details plus the message form. The form has no submit
// handling; the button is type="button" so it cannot reload the page.

use yew::prelude::*;

use super::PageCtx;

pub const ADDRESS: [&str; 2] = ["123 Sports Complex Drive", "Champions City, CC 12345"];
pub const PHONE: &str = "+1 (555) 123-4567";
pub const EMAIL: &str = "info@championsclub.com";
const OFFICE_HOURS: [&str; 3] = [
    "Monday - Friday: 9:00 AM - 6:00 PM",
    "Saturday: 9:00 AM - 4:00 PM",
    "Sunday: Closed",
];

fn lines(items: &[&'static str]) -> Html {
    html! {
        <p class="muted-text">
            { for items.iter().map(|l| html! { <>{ *l }<br /></> }) }
        </p>
    }
}

fn detail(icon: &str, title: &str, body: Html) -> Html {
    html! {
        <div class="row top">
            <span class="icon">{ icon.to_string() }</span>
            <div>
                <h3>{ title.to_string() }</h3>
                { body }
            </div>
        </div>
    }
}

fn field(label: &str, kind: &str, placeholder: &str) -> Html {
    html! {
        <div class="field">
            <label>{ label.to_string() }</label>
            <input type={kind.to_string()} placeholder={placeholder.to_string()} />
        </div>
    }
}

pub fn view(_ctx: &PageCtx) -> Html {
    html! {
        <div class="page container">
            <div class="intro">
                <h1 class="page-title">{ "Contact Us" }</h1>
                <p class="lead">
                    { "Ready to join Champions Club? Get in touch with us and start your journey to sporting excellence." }
                </p>
            </div>

            <div class="grid cols-2">
                <div>
                    <h2>{ "Get In Touch" }</h2>
                    <div class="stack">
                        { detail("📍", "Address", lines(&ADDRESS)) }
                        { detail("📞", "Phone", lines(&[PHONE])) }
                        { detail("✉️", "Email", lines(&[EMAIL])) }
                        { detail("🕒", "Office Hours", lines(&OFFICE_HOURS)) }
                    </div>
                </div>

                <div class="card">
                    <h3 class="card-title">{ "Send us a Message" }</h3>
                    <p class="card-desc">
                        { "Fill out the form below and we'll get back to you as soon as possible." }
                    </p>
                    <form class="form">
                        <div class="grid cols-2">
                            { field("First Name", "text", "John") }
                            { field("Last Name", "text", "Doe") }
                        </div>
                        { field("Email", "email", "john@example.com") }
                        { field("Subject", "text", "I'm interested in joining...") }
                        <div class="field">
                            <label>{ "Message" }</label>
                            <textarea rows="4" placeholder="Tell us about your interest in our programs..." />
                        </div>
                        <button type="button" class="btn primary full">{ "Send Message" }</button>
                    </form>
                </div>
            </div>
        </div>
    }
}

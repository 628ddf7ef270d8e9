// src/views/about.rs

use yew::prelude::*;

use super::PageCtx;

const TEAM_IMAGE: &str = "https://images.unsplash.com/photo-1496427473315-1408fac9d594?crop=entropy&cs=srgb&fm=jpg&q=85";

const PILLARS: &[(&str, &str, &str)] = &[
    ("🏆", "Excellence in Competition", "Competing at regional and national levels across multiple sports."),
    ("👥", "Community Building", "Creating lasting bonds through shared passion for sports."),
    ("⭐", "Personal Development", "Fostering growth both on and off the field through mentorship."),
];

const VALUES: &[(&str, &str, &str)] = &[
    ("🏆", "Excellence", "Striving for the highest standards in everything we do."),
    ("👥", "Teamwork", "Achieving success through collaboration and mutual support."),
    ("⭐", "Integrity", "Maintaining fairness, respect, and honesty in all competitions."),
];

pub fn view(_ctx: &PageCtx) -> Html {
    html! {
        <div class="page container">
            <div class="intro">
                <h1 class="page-title">{ "About Champions Club" }</h1>
                <p class="lead">
                    { "Founded with a vision to nurture sporting excellence, Champions Club has been at the forefront of competitive sports for over 15 years." }
                </p>
            </div>

            <div class="grid cols-2 center-items">
                <img class="photo" src={TEAM_IMAGE} alt="Team Sports" />
                <div>
                    <h2>{ "Our Mission" }</h2>
                    <p class="muted-text">
                        { "To provide a platform where athletes of all levels can develop their skills, compete at the highest standards, and build lifelong friendships through sport. We believe in the power of teamwork, dedication, and continuous improvement." }
                    </p>
                    <div class="stack">
                        { for PILLARS.iter().map(|(icon, title, text)| html! {
                            <div class="row top">
                                <span class="icon">{ *icon }</span>
                                <div>
                                    <h3>{ *title }</h3>
                                    <p class="muted-text">{ *text }</p>
                                </div>
                            </div>
                        })}
                    </div>
                </div>
            </div>

            <div class="panel muted">
                <h2 class="section-title">{ "Our Values" }</h2>
                <div class="grid cols-3">
                    { for VALUES.iter().map(|(icon, title, text)| html! {
                        <div class="value">
                            <div class="value-icon">{ *icon }</div>
                            <h3>{ *title }</h3>
                            <p class="muted-text">{ *text }</p>
                        </div>
                    })}
                </div>
            </div>
        </div>
    }
}

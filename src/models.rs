// src/models.rs
// Records mirrored from the club API. Nothing here is validated or derived:
// the client renders whatever the provider sends.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub sport: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub coach: Option<String>,
    #[serde(default)]
    pub home_venue: Option<String>,
    #[serde(default)]
    pub founded_year: Option<i32>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Live,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl MatchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::Live => "live",
            MatchStatus::Completed => "completed",
            MatchStatus::Cancelled => "cancelled",
            MatchStatus::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Match {
    pub id: String,
    pub home_team_name: String,
    pub away_team_name: String,
    #[serde(default)]
    pub home_score: Option<i32>,
    #[serde(default)]
    pub away_score: Option<i32>,
    #[serde(default)]
    pub status: MatchStatus,
    pub match_date: String, // ISO-8601
    pub venue: String,
    #[serde(default)]
    pub competition: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub created_at: String, // ISO-8601
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_true() -> bool {
    true
}

/// A club event (training, tournament, social...). Named to stay clear of
/// `yew::Event` in view code.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClubEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub event_type: String,
    pub event_date: String, // ISO-8601
    pub location: String,
    #[serde(default)]
    pub organizer: Option<String>,
    #[serde(default)]
    pub max_participants: Option<u32>,
    #[serde(default)]
    pub current_participants: u32,
    #[serde(default = "default_true")]
    pub is_public: bool,
}

/// Aggregate counters from `/api/stats`. Every counter is optional so the
/// empty object `{}` is a valid value.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Stats {
    #[serde(default)]
    pub total_teams: Option<u64>,
    #[serde(default)]
    pub total_players: Option<u64>,
    #[serde(default)]
    pub upcoming_matches: Option<u64>,
    #[serde(default)]
    pub recent_news: Option<u64>,
}

/// The five data slots. `Default` is the pre-load (and post-failure) state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClubData {
    pub teams: Vec<Team>,
    pub matches: Vec<Match>,
    pub news: Vec<NewsArticle>,
    pub events: Vec<ClubEvent>,
    pub stats: Stats,
}

// src/api.rs
// Initial data load: five GETs issued together, each one wrapped on its own so
// a failing endpoint only empties its own slot.

use std::fmt;
use std::future::Future;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::FetchError;
use crate::models::{ClubData, ClubEvent, Match, NewsArticle, Stats, Team};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Teams,
    Matches,
    News,
    Events,
    Stats,
}

impl Endpoint {
    pub const ALL: [Endpoint; 5] = [
        Endpoint::Teams,
        Endpoint::Matches,
        Endpoint::News,
        Endpoint::Events,
        Endpoint::Stats,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Teams => "/api/teams",
            Endpoint::Matches => "/api/matches?limit=5",
            Endpoint::News => "/api/news?limit=3",
            Endpoint::Events => "/api/events?limit=5",
            Endpoint::Stats => "/api/stats",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Endpoint::Teams => "teams",
            Endpoint::Matches => "matches",
            Endpoint::News => "news",
            Endpoint::Events => "events",
            Endpoint::Stats => "stats",
        }
    }
}

/// Status line and body of a response. The body is left empty for
/// non-success statuses since it is never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Anything that can answer a GET. The browser implementation is
/// `HttpTransport`; tests script their own.
pub trait Transport {
    fn get(&self, url: &str) -> impl Future<Output = Result<Reply, FetchError>>;
}

/// Browser `fetch` through gloo-net.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransport;

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Reply, FetchError> {
        let resp = Request::get(url).send().await?;
        let status = resp.status();
        if !resp.ok() {
            return Ok(Reply {
                status,
                body: String::new(),
            });
        }
        let body = resp.text().await?;
        Ok(Reply { status, body })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotStatus {
    Loaded,
    /// The provider answered with a non-success status.
    Rejected(u16),
    /// No response at all.
    Unreachable(String),
    /// Success status, but the body did not decode.
    Malformed(String),
}

impl SlotStatus {
    pub fn is_loaded(&self) -> bool {
        matches!(self, SlotStatus::Loaded)
    }
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotStatus::Loaded => f.write_str("loaded"),
            SlotStatus::Rejected(code) => write!(f, "HTTP {code}, keeping empty slot"),
            SlotStatus::Unreachable(reason) => write!(f, "unreachable ({reason})"),
            SlotStatus::Malformed(reason) => f.write_str(reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Every request failed before a response arrived.
    DispatchFailed(String),
    Slot {
        endpoint: Endpoint,
        status: SlotStatus,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DispatchFailed(reason) => write!(f, "Error fetching data: {reason}"),
            // Decode errors already name their endpoint.
            Diagnostic::Slot {
                status: status @ SlotStatus::Malformed(_),
                ..
            } => write!(f, "{status}"),
            Diagnostic::Slot { endpoint, status } => write!(f, "{}: {status}", endpoint.name()),
        }
    }
}

/// Console level a record is written at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Log,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub data: ClubData,
    pub statuses: [(Endpoint, SlotStatus); 5],
}

impl LoadReport {
    pub fn status(&self, endpoint: Endpoint) -> &SlotStatus {
        let idx = Endpoint::ALL
            .iter()
            .position(|e| *e == endpoint)
            .unwrap_or_default();
        &self.statuses[idx].1
    }

    pub fn loaded_count(&self) -> usize {
        self.statuses.iter().filter(|(_, s)| s.is_loaded()).count()
    }

    /// Records for the diagnostic channel. A dispatch where nothing came back
    /// is one record, not five.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let all_unreachable = self
            .statuses
            .iter()
            .all(|(_, s)| matches!(s, SlotStatus::Unreachable(_)));

        if all_unreachable {
            let reason = match &self.statuses[0].1 {
                SlotStatus::Unreachable(r) => r.clone(),
                _ => String::new(),
            };
            return vec![Diagnostic::DispatchFailed(reason)];
        }

        self.statuses
            .iter()
            .filter(|(_, s)| !s.is_loaded())
            .map(|(endpoint, status)| Diagnostic::Slot {
                endpoint: *endpoint,
                status: status.clone(),
            })
            .collect()
    }

    pub fn summary(&self) -> String {
        format!(
            "Champions Club data: {}/{} slots loaded",
            self.loaded_count(),
            self.statuses.len()
        )
    }

    /// Everything the console gets for this load, in order. A failed dispatch
    /// is its single error record with no summary after it.
    pub fn console_records(&self) -> Vec<(Level, String)> {
        let diagnostics = self.diagnostics();
        if let [d @ Diagnostic::DispatchFailed(_)] = diagnostics.as_slice() {
            return vec![(Level::Error, d.to_string())];
        }

        let mut records: Vec<(Level, String)> = diagnostics
            .iter()
            .map(|d| (Level::Warn, d.to_string()))
            .collect();
        records.push((Level::Log, self.summary()));
        records
    }
}

fn decode<V: DeserializeOwned>(endpoint: Endpoint, body: &str) -> Result<V, FetchError> {
    serde_json::from_str(body).map_err(|source| FetchError::Decode {
        endpoint: endpoint.name(),
        source,
    })
}

async fn fetch_slot<T, V>(transport: &T, config: &Config, endpoint: Endpoint) -> (V, SlotStatus)
where
    T: Transport,
    V: DeserializeOwned + Default,
{
    match transport.get(&config.url(endpoint.path())).await {
        Err(e) => (V::default(), SlotStatus::Unreachable(e.to_string())),
        Ok(reply) if !reply.ok() => (V::default(), SlotStatus::Rejected(reply.status)),
        Ok(reply) => match decode::<V>(endpoint, &reply.body) {
            Ok(v) => (v, SlotStatus::Loaded),
            Err(e) => (V::default(), SlotStatus::Malformed(e.to_string())),
        },
    }
}

/// Fetches all five slots concurrently. Never fails: whatever did not load
/// is left at its default and described in `statuses`.
pub async fn load_club_data<T: Transport>(transport: &T, config: &Config) -> LoadReport {
    let (teams, matches, news, events, stats) = futures::join!(
        fetch_slot::<_, Vec<Team>>(transport, config, Endpoint::Teams),
        fetch_slot::<_, Vec<Match>>(transport, config, Endpoint::Matches),
        fetch_slot::<_, Vec<NewsArticle>>(transport, config, Endpoint::News),
        fetch_slot::<_, Vec<ClubEvent>>(transport, config, Endpoint::Events),
        fetch_slot::<_, Stats>(transport, config, Endpoint::Stats),
    );

    LoadReport {
        data: ClubData {
            teams: teams.0,
            matches: matches.0,
            news: news.0,
            events: events.0,
            stats: stats.0,
        },
        statuses: [
            (Endpoint::Teams, teams.1),
            (Endpoint::Matches, matches.1),
            (Endpoint::News, news.1),
            (Endpoint::Events, events.1),
            (Endpoint::Stats, stats.1),
        ],
    }
}

// src/fixtures.rs
// Sample provider payloads and a scripted transport for unit tests.

use crate::api::{Endpoint, Reply, Transport};
use crate::error::FetchError;
use crate::models::ClubData;

pub const TEAMS_JSON: &str = r#"[
  {"id":"t1","name":"Champions FC","sport":"football","category":"Senior",
   "description":"Our flagship football squad.","coach":"Alex Morgan",
   "home_venue":"Champions Stadium","founded_year":2010,"image":null,
   "achievements":["League Winners 2024","Cup Finalists 2023","Fair Play Award","Regional Shield"]},
  {"id":"t2","name":"Champions Hoops","sport":"basketball","category":"Junior",
   "description":"Under-16 basketball.","achievements":[]}
]"#;

pub const MATCHES_JSON: &str = r#"[
  {"id":"m1","home_team_id":"t1","away_team_id":"x1","home_team_name":"Champions FC",
   "away_team_name":"City Rovers","home_score":2,"away_score":0,"status":"completed",
   "match_date":"2025-07-28T19:30:00","venue":"Champions Stadium","sport":"football",
   "competition":"Premier Regional League"},
  {"id":"m2","home_team_id":"t2","away_team_id":"x2","home_team_name":"Champions Hoops",
   "away_team_name":"Harbor Sharks","home_score":null,"away_score":null,"status":"scheduled",
   "match_date":"2025-08-05T18:00:00","venue":"Sports Hall B","sport":"basketball"}
]"#;

pub const NEWS_JSON: &str = r#"[
  {"id":"n1","title":"Champions FC lift the league trophy","summary":"A perfect end to the season.",
   "content":"The senior squad sealed the title with a 2-0 win.\nCelebrations continue.",
   "author":"Club Media","category":"Match Report","created_at":"2025-07-29T08:15:00.123456",
   "tags":["football","trophy"],"published":true}
]"#;

pub const EVENTS_JSON: &str = r#"[
  {"id":"e1","title":"Summer Training Camp","description":"Five days of skills work.",
   "event_type":"training","event_date":"2025-08-11T09:00:00","location":"Training Ground",
   "organizer":"Coaching Staff","max_participants":40,"current_participants":12,"is_public":true},
  {"id":"e2","title":"Sponsors Dinner","description":"Annual partners evening.",
   "event_type":"social","event_date":"2025-09-20T19:00:00","location":"Clubhouse",
   "is_public":false}
]"#;

pub const STATS_JSON: &str =
    r#"{"total_teams":2,"total_players":48,"upcoming_matches":1,"recent_news":1}"#;

pub fn body_for(endpoint: Endpoint) -> &'static str {
    match endpoint {
        Endpoint::Teams => TEAMS_JSON,
        Endpoint::Matches => MATCHES_JSON,
        Endpoint::News => NEWS_JSON,
        Endpoint::Events => EVENTS_JSON,
        Endpoint::Stats => STATS_JSON,
    }
}

pub fn full_data() -> ClubData {
    ClubData {
        teams: serde_json::from_str(TEAMS_JSON).unwrap(),
        matches: serde_json::from_str(MATCHES_JSON).unwrap(),
        news: serde_json::from_str(NEWS_JSON).unwrap(),
        events: serde_json::from_str(EVENTS_JSON).unwrap(),
        stats: serde_json::from_str(STATS_JSON).unwrap(),
    }
}

/// Answers each endpoint with a canned reply; unknown URLs get a 404.
pub struct Scripted {
    prefix: String,
    replies: Vec<(Endpoint, Result<Reply, String>)>,
}

impl Scripted {
    pub fn all_ok() -> Self {
        Self {
            prefix: String::new(),
            replies: Endpoint::ALL
                .iter()
                .map(|e| {
                    (
                        *e,
                        Ok(Reply {
                            status: 200,
                            body: body_for(*e).to_string(),
                        }),
                    )
                })
                .collect(),
        }
    }

    pub fn offline() -> Self {
        let mut s = Self::all_ok();
        for endpoint in Endpoint::ALL {
            s = s.unreachable(endpoint);
        }
        s
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    fn set(mut self, endpoint: Endpoint, reply: Result<Reply, String>) -> Self {
        if let Some(slot) = self.replies.iter_mut().find(|(e, _)| *e == endpoint) {
            slot.1 = reply;
        }
        self
    }

    pub fn status(self, endpoint: Endpoint, status: u16) -> Self {
        self.set(
            endpoint,
            Ok(Reply {
                status,
                body: String::new(),
            }),
        )
    }

    pub fn body(self, endpoint: Endpoint, body: &str) -> Self {
        self.set(
            endpoint,
            Ok(Reply {
                status: 200,
                body: body.to_string(),
            }),
        )
    }

    pub fn unreachable(self, endpoint: Endpoint) -> Self {
        self.set(endpoint, Err("TypeError: Failed to fetch".to_string()))
    }
}

impl Transport for Scripted {
    async fn get(&self, url: &str) -> Result<Reply, FetchError> {
        let hit = self
            .replies
            .iter()
            .find(|(e, _)| format!("{}{}", self.prefix, e.path()) == url);

        match hit {
            Some((_, Ok(reply))) => Ok(reply.clone()),
            Some((_, Err(reason))) => Err(FetchError::Network(reason.clone())),
            None => Ok(Reply {
                status: 404,
                body: String::new(),
            }),
        }
    }
}

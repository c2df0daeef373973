use serde::{Deserialize, Serialize};

pub type EntrantId = i64;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Player {
    pub id: EntrantId,
    pub name: String,
    #[serde(default, alias = "handicapIndex")]
    pub handicap_index: Option<f64>,
    /// Legacy handicap field, used only when `handicap_index` is absent.
    #[serde(default)]
    pub handicap: Option<f64>,
}

impl Player {
    /// Handicap index to play off. Falls back to the legacy handicap, then to scratch.
    #[must_use]
    pub fn effective_handicap_index(&self) -> f64 {
        self.handicap_index.or(self.handicap).unwrap_or(0.0)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GroupStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Group {
    pub id: EntrantId,
    pub name: String,
    #[serde(default, alias = "currentHole")]
    pub current_hole: i32,
    #[serde(default)]
    pub status: GroupStatus,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entrant {
    Player(Player),
    Group(Group),
}

impl Entrant {
    #[must_use]
    pub fn id(&self) -> EntrantId {
        match self {
            Entrant::Player(p) => p.id,
            Entrant::Group(g) => g.id,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Entrant::Player(p) => &p.name,
            Entrant::Group(g) => &g.name,
        }
    }

    #[must_use]
    pub fn is_player(&self) -> bool {
        matches!(self, Entrant::Player(_))
    }
}

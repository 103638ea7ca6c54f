// src/nav.rs
//
// View routing as an explicit state machine.
//
// A `Transition` is checked against the current `View` with `apply`, which
// returns the target view or `None` if the move is not allowed from here.
// The app commits the target only after its data loaded; a failed load
// leaves the current view (and its data) untouched.

use std::fmt;

use crate::specs::teams::Team;

/// A player picked from a roster: display name plus resolved profile URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerRef {
    pub name: String,
    pub profile: String,
}

impl PlayerRef {
    pub fn new(name: impl Into<String>, profile: impl Into<String>) -> Self {
        Self { name: name.into(), profile: profile.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    TeamSelection,
    TeamRoster { team: Team },
    PlayerGameLog { team: Team, player: PlayerRef, season: u16 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Sidebar pick; allowed from every view
    ViewTeam(Team),
    ViewGameLog { player: PlayerRef, season: u16 },
    ChangeSeason(u16),
    BackToRoster,
    Home,
}

impl View {
    pub fn apply(&self, t: &Transition) -> Option<View> {
        use Transition::*;
        use View::*;

        match (self, t) {
            (_, ViewTeam(team)) => Some(TeamRoster { team: team.clone() }),
            (_, Home) => Some(TeamSelection),

            (TeamRoster { team }, ViewGameLog { player, season }) => Some(PlayerGameLog {
                team: team.clone(),
                player: player.clone(),
                season: *season,
            }),

            (PlayerGameLog { team, player, .. }, ChangeSeason(season)) => Some(PlayerGameLog {
                team: team.clone(),
                player: player.clone(),
                season: *season,
            }),
            (PlayerGameLog { team, .. }, BackToRoster) => Some(TeamRoster { team: team.clone() }),

            _ => None,
        }
    }

    pub fn team(&self) -> Option<&Team> {
        match self {
            View::TeamSelection => None,
            View::TeamRoster { team } | View::PlayerGameLog { team, .. } => Some(team),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::TeamSelection => f.write_str("Teams"),
            View::TeamRoster { team } => write!(f, "{} roster", team.name),
            View::PlayerGameLog { player, season, .. } => write!(f, "{} game log {season}", player.name),
        }
    }
}

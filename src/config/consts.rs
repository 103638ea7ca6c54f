// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.basketball-reference.com";
pub const BROWSER_UA: &str = "Mozilla/5.0";
pub const TIMEOUT_SECS: u64 = 15;

// Seasons
pub const CURRENT_SEASON: u16 = 2025;
pub const SEASON_SPAN: u16 = 10; // current season and the nine before it

// Headshots live under a versioned asset path
pub const HEADSHOT_PATH: &str = "/req/202106291/images/headshots/";

// Table extraction
pub const PLACEHOLDER_COLUMN: &str = "Unnamed:";
pub const PLAYER_COLUMN: &str = "Player";
pub const PROFILE_COLUMN: &str = "Profile URL";
pub const UNRESOLVED: &str = "N/A";

/// Header cells a table must carry to be taken as the per-game log.
pub const GAMELOG_SIGNATURE: &[&str] = &["Opp", "PTS"];

// Normalization
pub const GAMELOG_EXCLUDED: &[&str] = &["GmSc", "+/-", "Date", "Tm", "Team", "Age"];
pub const GAMELOG_TEXT_COLUMNS: &[&str] = &["MP", "Opp"];
pub const ROSTER_NUMERIC_COLUMNS: &[&str] = &["No.", "Wt"];
pub const OPPONENT_COLUMN: &str = "Opp";

// Analysis
pub const DEFAULT_THRESHOLD: f64 = 20.5;
pub const THRESHOLD_STEP: f64 = 0.5;
pub const CARD_STATS: &[&str] = &["PTS", "AST", "TRB"];

// Fallback display names
pub const DEFAULT_TEAM_NAME: &str = "NBA Team";
pub const DEFAULT_PLAYER_NAME: &str = "Player";

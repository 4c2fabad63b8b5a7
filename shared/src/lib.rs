use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use chrono::{Datelike, NaiveDate};

/// A single refereed match as supplied by the server for one calendar date
///
/// Text fields are kept exactly as the server wrote them; a `null` becomes an
/// empty string rather than rejecting the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Server-side match identifier, when provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Kick-off time as the server formats it (`HH:MM`, or `HH:MM:SS` when seconds are set)
    #[serde(rename = "hora", alias = "startTime", default, deserialize_with = "null_as_default")]
    pub start_time: String,
    #[serde(rename = "equipoLocal", alias = "homeTeam", default, deserialize_with = "null_as_default")]
    pub home_team: String,
    #[serde(rename = "equipoVisitante", alias = "awayTeam", default, deserialize_with = "null_as_default")]
    pub away_team: String,
    /// Status name as persisted by the server, shown verbatim
    #[serde(rename = "estado", alias = "status", default, deserialize_with = "null_as_default")]
    pub status: String,
    /// True when the match is scheduled after the moment the page was rendered
    #[serde(rename = "esFuturo", alias = "isUpcoming", default, deserialize_with = "null_as_default")]
    pub is_upcoming: bool,
}

impl Match {
    /// "Home vs Away"
    pub fn matchup(&self) -> String {
        format!("{} vs {}", self.home_team, self.away_team)
    }

    /// Lifecycle state parsed from the raw status name
    pub fn status_kind(&self) -> MatchStatus {
        MatchStatus::from(self.status.as_str())
    }
}

/// Lifecycle state of a match
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MatchStatus {
    Scheduled,
    InProgress,
    Finished,
    Cancelled,
    Suspended,
    /// Any status the client does not know about, kept verbatim
    Unknown(String),
}

impl From<&str> for MatchStatus {
    fn from(raw: &str) -> Self {
        // The server persists the Spanish enum names
        match raw.trim() {
            "SCHEDULED" | "PROGRAMADO" => MatchStatus::Scheduled,
            "IN_PROGRESS" | "EN_CURSO" => MatchStatus::InProgress,
            "FINISHED" | "FINALIZADO" => MatchStatus::Finished,
            "CANCELLED" | "CANCELADO" => MatchStatus::Cancelled,
            "SUSPENDED" | "SUSPENDIDO" => MatchStatus::Suspended,
            _ => MatchStatus::Unknown(raw.to_string()),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Matches grouped by ISO date (`YYYY-MM-DD`), as injected by the server
///
/// Records that are not valid matches are dropped one by one and counted in
/// `rejected_matches`; the rest of the month is kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawCalendarData")]
pub struct CalendarData {
    #[serde(rename = "partidos")]
    pub matches_by_date: BTreeMap<String, Vec<Match>>,
    /// Total the server counted for the month
    #[serde(rename = "totalPartidos")]
    pub total_matches: u32,
    #[serde(skip)]
    pub rejected_matches: usize,
}

#[derive(Deserialize)]
struct RawCalendarData {
    #[serde(rename = "partidos", alias = "matches", default, deserialize_with = "null_as_default")]
    matches_by_date: BTreeMap<String, Vec<MatchRecord>>,
    #[serde(rename = "totalPartidos", alias = "totalMatches", default, deserialize_with = "null_as_default")]
    total_matches: u32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MatchRecord {
    Valid(Match),
    Rejected(IgnoredAny),
}

impl From<RawCalendarData> for CalendarData {
    fn from(raw: RawCalendarData) -> Self {
        let mut rejected_matches = 0;
        let matches_by_date = raw
            .matches_by_date
            .into_iter()
            .map(|(key, records)| {
                let matches = records
                    .into_iter()
                    .filter_map(|record| match record {
                        MatchRecord::Valid(fixture) => Some(fixture),
                        MatchRecord::Rejected(_) => {
                            rejected_matches += 1;
                            None
                        }
                    })
                    .collect();
                (key, matches)
            })
            .collect();

        Self {
            matches_by_date,
            total_matches: raw.total_matches,
            rejected_matches,
        }
    }
}

impl CalendarData {
    /// Matches for a date key, empty when the server sent none
    pub fn matches_for(&self, date_key: &str) -> &[Match] {
        self.matches_by_date
            .get(date_key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Zero-padded `YYYY-MM-DD` key used to index [`CalendarData`]
pub fn date_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Referee-wide counters computed by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalStats {
    #[serde(rename = "partidosFuturos", alias = "upcomingMatches", default, deserialize_with = "null_as_default")]
    pub upcoming_matches: u32,
    #[serde(rename = "totalPartidos", alias = "totalMatches", default, deserialize_with = "null_as_default")]
    pub total_matches: u32,
}

/// Year or month exactly as the host page supplied it
///
/// Anything that is not an integral JSON number is kept as `Invalid` so the
/// renderer can reject it instead of the whole configuration failing to load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PeriodValue {
    Number(i64),
    /// Description of the offending value, e.g. `"2024"` for a string
    Invalid(String),
    #[default]
    Missing,
}

impl From<i64> for PeriodValue {
    fn from(value: i64) -> Self {
        PeriodValue::Number(value)
    }
}

impl fmt::Display for PeriodValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodValue::Number(n) => write!(f, "{}", n),
            PeriodValue::Invalid(raw) => f.write_str(raw),
            PeriodValue::Missing => f.write_str("missing"),
        }
    }
}

impl<'de> Deserialize<'de> for PeriodValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Integer(i64),
            Float(f64),
            Text(String),
            Flag(bool),
            Null(()),
            Other(IgnoredAny),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Integer(n) => PeriodValue::Number(n),
            Raw::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                PeriodValue::Number(f as i64)
            }
            Raw::Float(f) => PeriodValue::Invalid(f.to_string()),
            Raw::Text(text) => PeriodValue::Invalid(format!("{:?}", text)),
            Raw::Flag(flag) => PeriodValue::Invalid(flag.to_string()),
            Raw::Null(()) => PeriodValue::Invalid("null".to_string()),
            Raw::Other(_) => PeriodValue::Invalid("a list or object".to_string()),
        })
    }
}

impl Serialize for PeriodValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PeriodValue::Number(n) => serializer.serialize_i64(*n),
            PeriodValue::Invalid(raw) => serializer.serialize_str(raw),
            PeriodValue::Missing => serializer.serialize_none(),
        }
    }
}

/// Page configuration the host template injects once per page load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(rename = "calendarioData", alias = "calendarData", default, deserialize_with = "null_as_default")]
    pub calendar_data: CalendarData,
    #[serde(rename = "currentYear", default)]
    pub current_year: PeriodValue,
    #[serde(rename = "currentMonth", default)]
    pub current_month: PeriodValue,
    #[serde(rename = "arbitroId", alias = "refereeId", default, deserialize_with = "null_as_default")]
    pub referee_id: i64,
    #[serde(rename = "arbitroNombre", alias = "refereeName", default, deserialize_with = "null_as_default")]
    pub referee_name: String,
    #[serde(rename = "estadisticasGlobales", alias = "globalStats", default, deserialize_with = "null_as_default")]
    pub global_stats: GlobalStats,
}

impl CalendarConfig {
    /// Configuration used when the host page never provides one
    pub fn fallback(today: NaiveDate) -> Self {
        Self {
            calendar_data: CalendarData::default(),
            current_year: PeriodValue::Number(today.year() as i64),
            current_month: PeriodValue::Number(today.month() as i64),
            referee_id: 1,
            referee_name: "Árbitro".to_string(),
            global_stats: GlobalStats::default(),
        }
    }
}

/// Type of calendar day for explicit rendering logic
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalendarDayType {
    /// Trailing day of the previous month shown for grid alignment
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
    /// Leading day of the next month that completes the last week
    PaddingAfter,
}

/// Represents a single day in the calendar grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayCell {
    pub day: u32,
    pub day_type: CalendarDayType,
    pub is_today: bool,
    pub matches: Vec<Match>,
    /// `YYYY-MM-DD` for month days, empty for padding days
    pub date_key: String,
}

impl DayCell {
    pub fn is_outside_month(&self) -> bool {
        self.day_type != CalendarDayType::MonthDay
    }
}

/// Counters accumulated over the days of the displayed month
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthStats {
    pub total_matches: u32,
    pub upcoming_matches: u32,
}

/// A full month laid out as complete weeks starting on Sunday
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarGrid {
    pub year: i32,
    pub month: u32,
    pub first_day_of_week: u32, // 0 = Sunday, 1 = Monday, etc.
    pub days: Vec<DayCell>,
    pub stats: MonthStats,
}

impl CalendarGrid {
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.days.chunks(7)
    }

    pub fn month_days(&self) -> impl Iterator<Item = &DayCell> {
        self.days.iter().filter(|d| !d.is_outside_month())
    }
}

/// How a day with matches is highlighted
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CellState {
    /// Both upcoming and already played matches
    Mixed,
    UpcomingOnly,
    PastOnly,
}

impl CellState {
    /// CSS class the stylesheet keys the underline colour on
    pub fn css_class(&self) -> &'static str {
        match self {
            CellState::Mixed => "dia-con-partidos-mixtos",
            CellState::UpcomingOnly => "dia-con-partidos",
            CellState::PastOnly => "dia-con-partidos-pasados",
        }
    }
}

/// Hover summary for a day that has matches
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CellSummary {
    pub state: CellState,
    pub tooltip: String,
}

/// Data carried by a match's click handler
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchSelection {
    pub date_key: String,
    pub fixture: Match,
}

/// One clickable match chip inside a day cell
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchEntry {
    pub label: String,
    pub css_class: String,
    pub selection: MatchSelection,
}

/// Visual tag of a status badge
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StatusTag {
    Primary,
    Warning,
    Success,
    Danger,
    Secondary,
}

impl StatusTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTag::Primary => "primary",
            StatusTag::Warning => "warning",
            StatusTag::Success => "success",
            StatusTag::Danger => "danger",
            StatusTag::Secondary => "secondary",
        }
    }

    /// Bootstrap background class, e.g. `bg-danger`
    pub fn badge_class(&self) -> String {
        format!("bg-{}", self.as_str())
    }
}

/// Everything the match detail modal shows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchDetail {
    pub title: String,
    pub formatted_date: String,
    pub time: String,
    pub status_label: String,
    pub status_tag: StatusTag,
    pub home_team: String,
    pub away_team: String,
    pub is_upcoming: bool,
    pub banner: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_status_parsing() {
        assert_eq!(MatchStatus::from("FINISHED"), MatchStatus::Finished);
        assert_eq!(MatchStatus::from("FINALIZADO"), MatchStatus::Finished);
        assert_eq!(MatchStatus::from("EN_CURSO"), MatchStatus::InProgress);
        assert_eq!(MatchStatus::from("CANCELADO"), MatchStatus::Cancelled);
        assert_eq!(
            MatchStatus::from("UNKNOWN_X"),
            MatchStatus::Unknown("UNKNOWN_X".to_string())
        );
    }

    #[test]
    fn test_deserialize_server_match() {
        let json = r#"{
            "id": 7,
            "equipoLocal": "Leones",
            "equipoVisitante": "Tigres",
            "hora": "18:30",
            "estado": "PROGRAMADO",
            "esFuturo": true
        }"#;

        let fixture: Match = serde_json::from_str(json).unwrap();
        assert_eq!(fixture.id, Some(7));
        assert_eq!(fixture.home_team, "Leones");
        assert_eq!(fixture.away_team, "Tigres");
        assert_eq!(fixture.start_time, "18:30");
        assert_eq!(fixture.status, "PROGRAMADO");
        assert_eq!(fixture.status_kind(), MatchStatus::Scheduled);
        assert!(fixture.is_upcoming);
    }

    #[test]
    fn test_match_time_and_status_pass_through() {
        let json = r#"{"hora": "18:00:30", "equipoLocal": "A", "equipoVisitante": "B", "estado": "EN_CURSO"}"#;

        let fixture: Match = serde_json::from_str(json).unwrap();
        assert_eq!(fixture.start_time, "18:00:30");
        assert_eq!(fixture.status, "EN_CURSO");
        assert!(!fixture.is_upcoming);
    }

    #[test]
    fn test_deserialize_english_aliases() {
        let json = r#"{
            "startTime": "09:05",
            "homeTeam": "A",
            "awayTeam": "B",
            "status": "SUSPENDED",
            "isUpcoming": false
        }"#;

        let fixture: Match = serde_json::from_str(json).unwrap();
        assert_eq!(fixture.id, None);
        assert_eq!(fixture.start_time, "09:05");
        assert_eq!(fixture.status_kind(), MatchStatus::Suspended);
        assert_eq!(fixture.matchup(), "A vs B");
    }

    #[test]
    fn test_null_team_keeps_the_match() {
        let json = r#"{"hora": "18:00", "equipoLocal": null, "equipoVisitante": "B", "estado": null, "esFuturo": null}"#;

        let fixture: Match = serde_json::from_str(json).unwrap();
        assert_eq!(fixture.home_team, "");
        assert_eq!(fixture.away_team, "B");
        assert_eq!(fixture.status_kind(), MatchStatus::Unknown(String::new()));
        assert!(!fixture.is_upcoming);
    }

    #[test]
    fn test_deserialize_host_config() {
        let json = r#"{
            "calendarioData": {
                "partidos": {
                    "2024-02-10": [
                        {"hora": "18:00", "equipoLocal": "A", "equipoVisitante": "B", "estado": "FINALIZADO", "esFuturo": false}
                    ]
                },
                "totalPartidos": 1
            },
            "currentYear": 2024,
            "currentMonth": 2,
            "arbitroId": 3,
            "arbitroNombre": "Ana",
            "estadisticasGlobales": {"partidosFuturos": 4, "totalPartidos": 9}
        }"#;

        let config: CalendarConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.current_year, PeriodValue::Number(2024));
        assert_eq!(config.current_month, PeriodValue::Number(2));
        assert_eq!(config.referee_id, 3);
        assert_eq!(config.referee_name, "Ana");
        assert_eq!(config.global_stats.upcoming_matches, 4);
        assert_eq!(config.global_stats.total_matches, 9);
        assert_eq!(config.calendar_data.total_matches, 1);
        assert_eq!(config.calendar_data.rejected_matches, 0);
        assert_eq!(config.calendar_data.matches_for("2024-02-10").len(), 1);
        assert!(config.calendar_data.matches_for("2024-02-11").is_empty());
    }

    #[test]
    fn test_config_missing_optional_sections() {
        let json = r#"{"currentYear": 2025, "currentMonth": 6, "calendarioData": null}"#;
        let config: CalendarConfig = serde_json::from_str(json).unwrap();
        assert!(config.calendar_data.matches_by_date.is_empty());
        assert_eq!(config.global_stats, GlobalStats::default());
    }

    #[test]
    fn test_non_numeric_period_is_kept_not_rejected() {
        let json = r#"{"currentYear": "2024", "currentMonth": null}"#;
        let config: CalendarConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.current_year, PeriodValue::Invalid("\"2024\"".to_string()));
        assert_eq!(config.current_month, PeriodValue::Invalid("null".to_string()));

        let config: CalendarConfig = serde_json::from_str(r#"{"currentYear": 2024.5}"#).unwrap();
        assert_eq!(config.current_year, PeriodValue::Invalid("2024.5".to_string()));
        assert_eq!(config.current_month, PeriodValue::Missing);
    }

    #[test]
    fn test_one_bad_record_does_not_drop_the_month() {
        let json = r#"{
            "partidos": {
                "2024-02-10": [
                    {"hora": 1800, "equipoLocal": "A", "equipoVisitante": "B", "estado": "FINALIZADO"},
                    {"hora": "20:00", "equipoLocal": null, "equipoVisitante": "D", "estado": "FINALIZADO"}
                ],
                "2024-02-12": [
                    {"hora": "18:00", "equipoLocal": "E", "equipoVisitante": "F", "estado": "PROGRAMADO", "esFuturo": true}
                ]
            },
            "totalPartidos": 3
        }"#;

        let data: CalendarData = serde_json::from_str(json).unwrap();
        assert_eq!(data.rejected_matches, 1);
        assert_eq!(data.matches_for("2024-02-10").len(), 1);
        assert_eq!(data.matches_for("2024-02-10")[0].away_team, "D");
        assert_eq!(data.matches_for("2024-02-12").len(), 1);
        assert_eq!(data.total_matches, 3);
    }

    #[test]
    fn test_fallback_config() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 13).unwrap();
        let config = CalendarConfig::fallback(today);
        assert_eq!(config.current_year, PeriodValue::Number(2025));
        assert_eq!(config.current_month, PeriodValue::Number(6));
        assert_eq!(config.referee_id, 1);
        assert_eq!(config.referee_name, "Árbitro");
        assert_eq!(config.calendar_data.total_matches, 0);
    }

    #[test]
    fn test_date_key_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 9).unwrap();
        assert_eq!(date_key(date), "2024-02-09");
    }

    #[test]
    fn test_status_tag_badge_class() {
        assert_eq!(StatusTag::Danger.badge_class(), "bg-danger");
        assert_eq!(CellState::Mixed.css_class(), "dia-con-partidos-mixtos");
    }
}

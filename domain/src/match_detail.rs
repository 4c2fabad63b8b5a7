//! Projection of a clicked match into the detail modal.

use chrono::{Datelike, NaiveDate};
use shared::{MatchDetail, MatchSelection, MatchStatus, StatusTag};

use crate::error::DetailError;

const WEEKDAY_NAMES: [&str; 7] = [
    "domingo", "lunes", "martes", "miércoles", "jueves", "viernes", "sábado",
];

const MONTH_NAMES: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio",
    "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
];

pub const UPCOMING_BANNER: &str = "Partido próximo a arbitrar";
pub const PAST_BANNER: &str = "Partido ya arbitrado";

/// Badge tag for a match status; unmapped statuses fall back to secondary
pub fn status_tag(status: &MatchStatus) -> StatusTag {
    match status {
        MatchStatus::Scheduled => StatusTag::Primary,
        MatchStatus::InProgress => StatusTag::Warning,
        MatchStatus::Finished => StatusTag::Success,
        MatchStatus::Cancelled => StatusTag::Danger,
        MatchStatus::Suspended => StatusTag::Secondary,
        MatchStatus::Unknown(_) => StatusTag::Secondary,
    }
}

/// Spanish long date, e.g. "sábado, 10 de febrero de 2024"
pub fn format_long_date(date: NaiveDate) -> String {
    let weekday = WEEKDAY_NAMES[date.weekday().num_days_from_sunday() as usize];
    let month = MONTH_NAMES[date.month0() as usize];
    format!("{}, {} de {} de {}", weekday, date.day(), month, date.year())
}

/// Build the detail view for a match chip that was clicked
pub fn project(selection: &MatchSelection) -> Result<MatchDetail, DetailError> {
    let date = NaiveDate::parse_from_str(&selection.date_key, "%Y-%m-%d")
        .map_err(|_| DetailError::InvalidDate(selection.date_key.clone()))?;
    let fixture = &selection.fixture;

    Ok(MatchDetail {
        title: fixture.matchup(),
        formatted_date: format_long_date(date),
        time: fixture.start_time.clone(),
        status_label: fixture.status.clone(),
        status_tag: status_tag(&fixture.status_kind()),
        home_team: fixture.home_team.clone(),
        away_team: fixture.away_team.clone(),
        is_upcoming: fixture.is_upcoming,
        banner: if fixture.is_upcoming {
            UPCOMING_BANNER.to_string()
        } else {
            PAST_BANNER.to_string()
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Match;

    fn selection(date_key: &str, status: &str, upcoming: bool) -> MatchSelection {
        MatchSelection {
            date_key: date_key.to_string(),
            fixture: Match {
                id: Some(1),
                start_time: "18:00".to_string(),
                home_team: "Leones".to_string(),
                away_team: "Tigres".to_string(),
                status: status.to_string(),
                is_upcoming: upcoming,
            },
        }
    }

    #[test]
    fn test_status_tag_mapping() {
        assert_eq!(status_tag(&MatchStatus::Scheduled), StatusTag::Primary);
        assert_eq!(status_tag(&MatchStatus::InProgress), StatusTag::Warning);
        assert_eq!(status_tag(&MatchStatus::Finished), StatusTag::Success);
        assert_eq!(status_tag(&MatchStatus::from("CANCELLED")), StatusTag::Danger);
        assert_eq!(status_tag(&MatchStatus::Suspended), StatusTag::Secondary);
        assert_eq!(status_tag(&MatchStatus::from("UNKNOWN_X")), StatusTag::Secondary);
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(
            format_long_date(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()),
            "sábado, 10 de febrero de 2024"
        );
        assert_eq!(
            format_long_date(NaiveDate::from_ymd_opt(2025, 9, 3).unwrap()),
            "miércoles, 3 de septiembre de 2025"
        );
    }

    #[test]
    fn test_project_past_match() {
        let detail = project(&selection("2024-02-10", "FINALIZADO", false)).unwrap();

        assert_eq!(detail.title, "Leones vs Tigres");
        assert_eq!(detail.formatted_date, "sábado, 10 de febrero de 2024");
        assert_eq!(detail.time, "18:00");
        assert_eq!(detail.status_label, "FINALIZADO");
        assert_eq!(detail.status_tag, StatusTag::Success);
        assert_eq!(detail.home_team, "Leones");
        assert_eq!(detail.away_team, "Tigres");
        assert!(!detail.is_upcoming);
        assert_eq!(detail.banner, PAST_BANNER);
    }

    #[test]
    fn test_project_upcoming_match() {
        let detail = project(&selection("2024-02-12", "PROGRAMADO", true)).unwrap();

        assert_eq!(detail.status_label, "PROGRAMADO");
        assert_eq!(detail.status_tag, StatusTag::Primary);
        assert!(detail.is_upcoming);
        assert_eq!(detail.banner, UPCOMING_BANNER);
    }

    #[test]
    fn test_project_keeps_unknown_status_verbatim() {
        let detail = project(&selection("2024-02-12", "APLAZADO", true)).unwrap();

        assert_eq!(detail.status_label, "APLAZADO");
        assert_eq!(detail.status_tag, StatusTag::Secondary);
    }

    #[test]
    fn test_project_rejects_bad_date_key() {
        let result = project(&selection("", "PROGRAMADO", true));
        assert_eq!(result, Err(DetailError::InvalidDate(String::new())));
    }
}

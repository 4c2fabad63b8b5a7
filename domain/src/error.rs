#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid {field}: {value} is not a whole number in range")]
    InvalidValue { field: &'static str, value: String },
    #[error("Invalid year {0}: must be 2000 or later")]
    InvalidYear(i32),
    #[error("Invalid month {0}: must be between 1 and 12")]
    InvalidMonth(i32),
    #[error("Date {year}-{month:02} cannot be represented")]
    UnrepresentableDate { year: i32, month: u32 },
    #[error("Calendar grid container not found")]
    ContainerMissing,
    #[error("Failed to render calendar: {0}")]
    Render(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DetailError {
    #[error("Invalid match date '{0}'")]
    InvalidDate(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Malformed calendar configuration: {0}")]
    Malformed(String),
}

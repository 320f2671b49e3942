use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    errors::{AppError, FieldErrors},
    models::matches::MatchResult,
};

pub const REQUIRED: &str = "This field is required.";
pub const NOT_NULL: &str = "This field may not be null.";
pub const NOT_BLANK: &str = "This field may not be blank.";
pub const INVALID_INTEGER: &str = "A valid integer is required.";
pub const NEGATIVE_INTEGER: &str = "Ensure this value is greater than or equal to 0.";
pub const TOO_LARGE_INTEGER: &str = "Ensure this value is less than or equal to 2147483647.";
pub const INVALID_DATE: &str =
    "Date has wrong format. Use one of these formats instead: YYYY-MM-DD, DD/MM/YYYY.";
pub const NEW_SEASON_BOUNDS: &str = "This field is required when creating a new season.";
pub const SEASON_BOUNDS_ORDER: &str = "Season end date must not be before its start date.";
pub const NOT_AN_OBJECT: &str = "Invalid data. Expected a dictionary.";
pub const DUPLICATE_MATCH: &str = "The fields date, home_team, away_team must make a unique set.";

/// A second match with the same date and fixture is rejected like any other bad field.
pub fn duplicate_match_error() -> AppError {
    let mut errors = FieldErrors::new();
    errors.insert("non_field_errors".into(), vec![DUPLICATE_MATCH.into()]);
    AppError::Validation(errors)
}

/// A syntactically valid `POST /add-match` body. Whether the season already exists is
/// checked against the repository later.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchEntry {
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    pub referee: String,
    pub season: String,
    pub season_start_date: Option<NaiveDate>,
    pub season_end_date: Option<NaiveDate>,
    pub full_time_result: MatchResult,
    pub half_time_result: Option<MatchResult>,
    pub home_goals: u32,
    pub away_goals: u32,
    pub home_yellow_cards: u32,
    pub away_yellow_cards: u32,
    pub home_red_cards: u32,
    pub away_red_cards: u32,
}

/// Body of a successful `POST /add-match`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatedMatch {
    pub id: i32,
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    pub referee: Option<String>,
    pub full_time_result: MatchResult,
    pub half_time_result: Option<MatchResult>,
    pub home_goals: u32,
    pub away_goals: u32,
    pub home_yellow_cards: u32,
    pub away_yellow_cards: u32,
    pub home_red_cards: u32,
    pub away_red_cards: u32,
    pub season: String,
    pub season_start_date: NaiveDate,
    pub season_end_date: NaiveDate,
}

impl MatchEntry {
    /// Validates a raw JSON body, collecting every field error rather than stopping at the first.
    pub fn from_json(body: &Value) -> Result<Self, FieldErrors> {
        let Some(obj) = body.as_object() else {
            let mut errors = FieldErrors::new();
            errors.insert("non_field_errors".into(), vec![NOT_AN_OBJECT.into()]);
            return Err(errors);
        };

        let mut reader = FieldReader::new(obj);

        let date = reader.required_date("date");
        let home_team = reader.required_str("home_team");
        let away_team = reader.required_str("away_team");
        let referee = reader.required_str("referee");
        let full_time_result = reader.required_result("full_time_result");
        let half_time_result = reader.optional_result("half_time_result");
        let home_goals = reader.required_count("home_goals");
        let away_goals = reader.required_count("away_goals");
        let home_yellow_cards = reader.optional_count("home_yellow_cards");
        let away_yellow_cards = reader.optional_count("away_yellow_cards");
        let home_red_cards = reader.optional_count("home_red_cards");
        let away_red_cards = reader.optional_count("away_red_cards");
        let season = reader.required_str("season");
        let season_start_date = reader.optional_date("season_start_date");
        let season_end_date = reader.optional_date("season_end_date");

        if let (Some(start), Some(end)) = (season_start_date, season_end_date) {
            if end < start {
                reader.push("season_end_date", SEASON_BOUNDS_ORDER);
            }
        }

        let errors = reader.errors;
        match (
            date,
            home_team,
            away_team,
            referee,
            full_time_result,
            home_goals,
            away_goals,
            season,
        ) {
            (
                Some(date),
                Some(home_team),
                Some(away_team),
                Some(referee),
                Some(full_time_result),
                Some(home_goals),
                Some(away_goals),
                Some(season),
            ) if errors.is_empty() => Ok(MatchEntry {
                date,
                home_team,
                away_team,
                referee,
                season,
                season_start_date,
                season_end_date,
                full_time_result,
                half_time_result,
                home_goals,
                away_goals,
                home_yellow_cards,
                away_yellow_cards,
                home_red_cards,
                away_red_cards,
            }),
            _ => Err(errors),
        }
    }
}

/// Accepts ISO dates and the day-first format used by the standings query.
pub fn parse_flexible_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
        .ok()
}

struct FieldReader<'a> {
    obj: &'a Map<String, Value>,
    errors: FieldErrors,
}

impl<'a> FieldReader<'a> {
    fn new(obj: &'a Map<String, Value>) -> Self {
        Self {
            obj,
            errors: FieldErrors::new(),
        }
    }

    fn push(&mut self, field: &str, msg: &str) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(msg.to_string());
    }

    fn present(&mut self, field: &str) -> Option<&'a Value> {
        match self.obj.get(field) {
            None => {
                self.push(field, REQUIRED);
                None
            }
            Some(Value::Null) => {
                self.push(field, NOT_NULL);
                None
            }
            Some(value) => Some(value),
        }
    }

    fn required_str(&mut self, field: &str) -> Option<String> {
        let value = self.present(field)?;
        let text = match value {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            _ => {
                self.push(field, "Not a valid string.");
                return None;
            }
        };
        if text.is_empty() {
            self.push(field, NOT_BLANK);
            return None;
        }
        Some(text)
    }

    fn required_date(&mut self, field: &str) -> Option<NaiveDate> {
        let value = self.present(field)?;
        self.date_value(field, value)
    }

    fn optional_date(&mut self, field: &str) -> Option<NaiveDate> {
        match self.obj.get(field) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.trim().is_empty() => None,
            Some(value) => self.date_value(field, value),
        }
    }

    fn date_value(&mut self, field: &str, value: &Value) -> Option<NaiveDate> {
        let parsed = value.as_str().and_then(parse_flexible_date);
        if parsed.is_none() {
            self.push(field, INVALID_DATE);
        }
        parsed
    }

    fn required_result(&mut self, field: &str) -> Option<MatchResult> {
        let value = self.present(field)?;
        self.result_value(field, value)
    }

    fn optional_result(&mut self, field: &str) -> Option<MatchResult> {
        match self.obj.get(field) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.trim().is_empty() => None,
            Some(value) => self.result_value(field, value),
        }
    }

    fn result_value(&mut self, field: &str, value: &Value) -> Option<MatchResult> {
        let raw = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        match raw.parse::<MatchResult>() {
            Ok(result) => Some(result),
            Err(msg) => {
                self.push(field, &msg);
                None
            }
        }
    }

    fn required_count(&mut self, field: &str) -> Option<u32> {
        let value = self.present(field)?;
        self.count_value(field, value)
    }

    fn optional_count(&mut self, field: &str) -> u32 {
        match self.obj.get(field) {
            None | Some(Value::Null) => 0,
            Some(value) => self.count_value(field, value).unwrap_or(0),
        }
    }

    fn count_value(&mut self, field: &str, value: &Value) -> Option<u32> {
        let number = match value {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        match number {
            None => {
                self.push(field, INVALID_INTEGER);
                None
            }
            Some(n) if n < 0 => {
                self.push(field, NEGATIVE_INTEGER);
                None
            }
            Some(n) if n > i64::from(i32::MAX) => {
                self.push(field, TOO_LARGE_INTEGER);
                None
            }
            Some(n) => Some(n as u32),
        }
    }
}

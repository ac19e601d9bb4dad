//! Tests for configuration loading and schedule validation

use crate::{AutomationError, Config};

fn config_json(base: (&str, &str), breaks: &[(&str, &str)]) -> String {
    let breaks = breaks
        .iter()
        .map(|(s, e)| format!(r#"{{ "start": "{s}", "end": "{e}" }}"#))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        r#"{{
            "profile": {{ "email": "user@example.com", "password": "hunter2" }},
            "schedule": {{
                "base": {{ "start": "{}", "end": "{}" }},
                "breaks": [{breaks}]
            }}
        }}"#,
        base.0, base.1
    )
}

fn parse_and_validate(json: &str) -> Result<Config, AutomationError> {
    let config: Config = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

#[test]
fn base_alone_is_valid() {
    let config = parse_and_validate(&config_json(("08:00", "21:47"), &[])).unwrap();
    assert!(config.schedule.breaks.is_empty());
}

#[test]
fn touching_chain_is_valid() {
    // 08:00-12:00 then 12:00-12:30: consecutive ends meet the next start.
    let config =
        parse_and_validate(&config_json(("08:00", "12:00"), &[("12:00", "12:30")])).unwrap();
    assert_eq!(config.schedule.breaks.len(), 1);
}

#[test]
fn break_nested_in_base_is_rejected() {
    // Sorting by start gives [08:00-17:00, 12:00-12:30]; 17:00 <= 12:00 fails.
    // The chain check runs over the globally sorted list, so a break nested
    // inside the base interval does not validate.
    let result = parse_and_validate(&config_json(("08:00", "17:00"), &[("12:00", "12:30")]));
    assert!(matches!(result, Err(AutomationError::InvalidSchedule(_))));
}

#[test]
fn overlapping_breaks_are_rejected() {
    let result = parse_and_validate(&config_json(
        ("08:00", "12:00"),
        &[("12:00", "13:00"), ("12:30", "14:00")],
    ));
    assert!(matches!(result, Err(AutomationError::InvalidSchedule(_))));
}

#[test]
fn missing_profile_is_a_parse_error() {
    let json = r#"{ "schedule": { "base": { "start": "08:00", "end": "17:00" }, "breaks": [] } }"#;
    let result = parse_and_validate(json);
    assert!(matches!(result, Err(AutomationError::Json(_))));
}

#[test]
fn accepts_seconds_precision() {
    let config = parse_and_validate(&config_json(("08:00:30", "17:15:00"), &[])).unwrap();
    use chrono::Timelike;
    assert_eq!(config.schedule.base.start.second(), 30);
}

#[test]
fn rejects_from_to_field_names() {
    let json = r#"{
        "profile": { "email": "user@example.com", "password": "hunter2" },
        "schedule": { "base": { "from": "08:00", "to": "17:00" }, "breaks": [] }
    }"#;
    let result = parse_and_validate(json);
    assert!(matches!(result, Err(AutomationError::Json(_))));
}

#[test]
fn rejects_garbage_time_strings() {
    let result = parse_and_validate(&config_json(("8 o'clock", "17:00"), &[]));
    assert!(matches!(result, Err(AutomationError::Json(_))));
}

#[test]
fn breaks_default_to_empty() {
    let json = r#"{
        "profile": { "email": "user@example.com", "password": "hunter2" },
        "schedule": { "base": { "start": "08:00", "end": "17:00" } }
    }"#;
    let config = parse_and_validate(json).unwrap();
    assert!(config.schedule.breaks.is_empty());
}

#[test]
fn load_reads_and_validates_a_file() {
    let path = std::env::temp_dir().join(format!("autopunch-config-{}.json", std::process::id()));
    std::fs::write(&path, config_json(("09:00", "13:00"), &[("13:00", "13:45")])).unwrap();
    let config = Config::load(&path).unwrap();
    assert_eq!(config.profile.email, "user@example.com");
    std::fs::remove_file(&path).ok();
}

#[test]
fn load_fails_on_missing_file() {
    let result = Config::load("/nonexistent/autopunch.json");
    assert!(matches!(result, Err(AutomationError::Io(_))));
}

#[test]
fn remaining_targets_cover_break_boundaries_and_work_end() {
    let config =
        parse_and_validate(&config_json(("08:00", "12:00"), &[("12:00", "12:30")])).unwrap();
    let targets = config.schedule.remaining_targets();
    let fmt: Vec<String> = targets.iter().map(|t| t.format("%H:%M").to_string()).collect();
    assert_eq!(fmt, vec!["12:00", "12:30", "12:00"]);
}

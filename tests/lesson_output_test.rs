use anyhow::Result;
use fundamentals::{ErrorSeverity, LessonKind, TourConfig, TourEngine, TourError};

fn run_lesson(kind: LessonKind, config: &TourConfig) -> Result<Vec<String>> {
    let engine = TourEngine::new(kind.build(config));
    Ok(engine.run(None)?.lines)
}

#[test]
fn test_equality_lesson() -> Result<()> {
    let lines = run_lesson(LessonKind::Equality, &TourConfig::default())?;
    assert_eq!(lines, vec!["false", "false", "false", "true"]);
    Ok(())
}

#[test]
fn test_nullable_lesson_with_and_without_value() -> Result<()> {
    let mut config = TourConfig::default();
    assert_eq!(
        run_lesson(LessonKind::Nullable, &config)?,
        vec!["THIS IS NOT NULL"]
    );

    config.nullable.value = None;
    assert_eq!(
        run_lesson(LessonKind::Nullable, &config)?,
        vec!["Null reference: str was absent"]
    );
    Ok(())
}

#[test]
fn test_inheritance_lesson_uses_override() -> Result<()> {
    let lines = run_lesson(LessonKind::Inheritance, &TourConfig::default())?;
    assert_eq!(lines, vec!["Laser printer model is Canon 1234"]);
    Ok(())
}

#[test]
fn test_functions_lesson_line_counts() -> Result<()> {
    let lines = run_lesson(LessonKind::Functions, &TourConfig::default())?;

    // 1 default + 10 overridden + 5 named
    assert_eq!(lines.len(), 16);
    assert_eq!(lines[0], "Default Value 1");
    assert_eq!(lines[10], "Default Value Overridden 10");
    assert_eq!(lines[11], "Parameters Named 1");
    assert_eq!(lines[15], "Parameters Named 5");
    Ok(())
}

#[test]
fn test_question_lesson_invalid_numeric_answer() -> Result<()> {
    let config = TourConfig::from_toml_str("[question]\nnumeric_answer = \"forty-two\"\n")?;
    let lines = run_lesson(LessonKind::Question, &config)?;

    assert_eq!(lines.last().map(String::as_str), Some("Your answer must be an Integer"));
    assert!(lines.contains(&"You answered: 42, which is correct".to_string()));
    Ok(())
}

#[test]
fn test_extensions_lesson() -> Result<()> {
    let lines = run_lesson(LessonKind::Extensions, &TourConfig::default())?;
    assert_eq!(
        lines,
        vec!["With Multiple Whitespace", "With Multiple Whitespace", "H1H2"]
    );
    Ok(())
}

#[test]
fn test_events_lesson() -> Result<()> {
    let lines = run_lesson(LessonKind::Events, &TourConfig::default())?;
    assert_eq!(lines, vec!["Awake", "Pancakes", "Sleeping"]);
    Ok(())
}

#[test]
fn test_recursion_lesson_reports_both_scenarios() -> Result<()> {
    let lines = run_lesson(LessonKind::Recursion, &TourConfig::default())?;

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].len(), 2090);
    assert!(lines[1].starts_with("Stack exhausted at depth 1000"));
    Ok(())
}

#[test]
fn test_recursion_lesson_within_budget() -> Result<()> {
    let config = TourConfig::from_toml_str("[recursion]\nn = 90\nframe_budget = 100\n")?;
    let lines = run_lesson(LessonKind::Recursion, &config)?;

    assert_eq!(lines, vec!["2880067194370816120", "2880067194370816120"]);
    Ok(())
}

#[test]
fn test_every_lesson_runs_with_defaults() -> Result<()> {
    let config = TourConfig::default();
    for kind in LessonKind::ALL {
        let report = TourEngine::new(kind.build(&config)).run(None)?;
        assert!(!report.lesson.is_empty());
    }
    Ok(())
}

#[test]
fn test_unknown_lesson_name_is_reported() {
    let err = "generics".parse::<LessonKind>().unwrap_err();
    assert!(matches!(err, TourError::UnknownLesson { ref name } if name == "generics"));
    assert_eq!(err.severity(), ErrorSeverity::High);
    assert!(err.recovery_suggestion().contains("fundamentals list"));
}

#[test]
fn test_lesson_names_round_trip_through_parsing() -> Result<()> {
    let config = TourConfig::default();
    for kind in LessonKind::ALL {
        let name = kind.build(&config).name();
        assert_eq!(name.parse::<LessonKind>()?, kind);
    }
    Ok(())
}

#[test]
fn test_oversized_recursion_config_never_reaches_the_lesson() -> Result<()> {
    use fundamentals::utils::validation::Validate;

    let config = TourConfig::from_toml_str("[recursion]\nn = 200000\nframe_budget = 1000000\n")?;
    assert!(matches!(
        config.validate(),
        Err(TourError::InvalidConfigValueError { .. })
    ));

    // Built without validation, the lesson still stops at the clamped budget.
    let config = TourConfig::from_toml_str("[recursion]\nn = 5000\nframe_budget = 1000000\n")?;
    let lines = run_lesson(LessonKind::Recursion, &config)?;
    assert!(lines[1].starts_with("Stack exhausted at depth 2000"));
    Ok(())
}

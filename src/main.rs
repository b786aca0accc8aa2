use clap::Parser;
use fundamentals::config::Command;
use fundamentals::utils::{logger, validation::Validate};
use fundamentals::{CliConfig, ErrorSeverity, LessonKind, LessonReport, TourEngine, TourError};
use std::io::Write;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.wants_json() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Lesson failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(config: &CliConfig) -> Result<(), TourError> {
    let tour_config = config.load_tour_config()?;

    // 驗證配置
    tour_config.validate()?;
    if let Some(path) = &config.config {
        tracing::info!("✅ Lesson inputs loaded from {}", path);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let lessons: Vec<LessonKind> = match &config.command {
        Command::List => {
            for kind in LessonKind::ALL {
                let lesson = kind.build(&tour_config);
                writeln!(out, "{:<14} {}", lesson.name(), lesson.summary())?;
            }
            return Ok(());
        }
        Command::Run { lesson, .. } => vec![lesson.parse::<LessonKind>()?],
        Command::All { .. } => LessonKind::ALL.to_vec(),
    };

    let json = config.wants_json();
    let mut reports: Vec<LessonReport> = Vec::with_capacity(lessons.len());
    for kind in lessons {
        let engine = TourEngine::new(kind.build(&tour_config));
        let echo: Option<&mut dyn Write> = if json { None } else { Some(&mut out) };
        reports.push(engine.run(echo)?);
    }

    if json {
        serde_json::to_writer_pretty(&mut out, &reports)?;
        writeln!(out)?;
    }

    tracing::info!("✅ {} lesson(s) completed", reports.len());
    Ok(())
}

use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use title_match::utils::error::{ErrorSeverity, MatchError};
use title_match::utils::{logger, validation::Validate};
use title_match::{dedupe_csv, write_report_json, CliConfig, Command, MatcherConfig, TitleMatcher};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            let exit_code = match e.downcast_ref::<MatchError>() {
                Some(err) => {
                    tracing::error!("❌ {:#} (Severity: {:?})", e, err.severity());
                    tracing::error!("💡 Suggestion: {}", err.recovery_suggestion());
                    eprintln!("❌ {}", err.user_friendly_message());
                    eprintln!("💡 {}", err.recovery_suggestion());
                    exit_code_for(err.severity())
                }
                None => {
                    eprintln!("❌ {:#}", e);
                    exit_code_for(ErrorSeverity::High)
                }
            };
            std::process::exit(exit_code);
        }
    }
}

// 1 is reserved for "titles differ"
fn exit_code_for(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 3,
        ErrorSeverity::Critical => 4,
    }
}

fn run(cli: CliConfig) -> anyhow::Result<i32> {
    let config = load_config(cli.config.as_deref())?;
    let matcher = config.matcher();

    match cli.command {
        Command::Compare { a, b, explain } => {
            let reason = matcher.explain(&a, &b);
            if explain {
                println!("{}", serde_json::to_string(&reason)?);
            } else if reason.is_match() {
                println!("similar");
            } else {
                println!("different");
            }
            Ok(if reason.is_match() { 0 } else { 1 })
        }
        Command::Dedupe {
            input,
            column,
            output,
            report,
        } => {
            let column = column.unwrap_or_else(|| config.dedupe.column.clone());
            let report_path = report.or_else(|| config.dedupe.report_path.clone());
            run_dedupe(matcher, &input, &column, output.as_deref(), report_path.as_deref())?;
            Ok(0)
        }
    }
}

fn load_config(path: Option<&str>) -> anyhow::Result<MatcherConfig> {
    let config = match path {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            MatcherConfig::from_file(path)
                .with_context(|| format!("Failed to load config file '{}'", path))?
        }
        None => MatcherConfig::default(),
    };

    // 驗證配置
    config.validate().context("Configuration validation failed")?;
    Ok(config)
}

fn run_dedupe(
    matcher: TitleMatcher,
    input: &str,
    column: &str,
    output: Option<&str>,
    report_path: Option<&str>,
) -> anyhow::Result<()> {
    let reader = BufReader::new(
        File::open(input)
            .map_err(MatchError::from)
            .with_context(|| format!("Failed to open input '{}'", input))?,
    );

    let report = match output {
        Some(path) => {
            let writer = BufWriter::new(
                File::create(path)
                    .map_err(MatchError::from)
                    .with_context(|| format!("Failed to create output '{}'", path))?,
            );
            dedupe_csv(reader, writer, column, matcher)?
        }
        None => dedupe_csv(reader, io::stdout().lock(), column, matcher)?,
    };

    if let Some(path) = report_path {
        let writer = BufWriter::new(
            File::create(path)
                .map_err(MatchError::from)
                .with_context(|| format!("Failed to create report '{}'", path))?,
        );
        write_report_json(&report, writer)?;
        tracing::info!("📝 Report saved to: {}", path);
    }

    eprintln!(
        "✅ Kept {} of {} rows ({} duplicates dropped)",
        report.kept.len(),
        report.total(),
        report.dropped.len()
    );
    Ok(())
}

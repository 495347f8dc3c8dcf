//! 贷款定价命令行
//!
//! 读取州名与信用分，加载规则文件并对产品执行定价规则，输出最终利率与资格状态。

use anyhow::{Context, Result};
use clap::Parser;
use pricing_engine::{Product, RuleCompiler, RuleError, RuleExecutor, RuleStore};
use pricing_shared::config::AppConfig;
use pricing_shared::observability;
use serde_json::json;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

/// 输入无效时的退出码
const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "pricing-engine",
    version,
    about = "Apply loan pricing rules to a product"
)]
struct Cli {
    /// Path to the pricing rules JSON file (overrides config).
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Configuration directory.
    #[arg(long, env = "CONFIG_DIR", default_value = "config")]
    config: PathBuf,

    /// Product name.
    #[arg(long, default_value = "7-1 ARM")]
    name: String,

    /// Base interest rate.
    #[arg(long, default_value_t = 5.0)]
    rate: f64,

    /// Borrower state; prompted when absent.
    #[arg(long)]
    state: Option<String>,

    /// Borrower credit score; prompted when absent.
    #[arg(long, allow_hyphen_values = true)]
    credit_score: Option<String>,

    /// Reject rules with unknown condition or action tags at load time.
    #[arg(long)]
    strict: bool,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,

    /// Include a per-rule evaluation trace in the output.
    #[arg(long)]
    trace: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = AppConfig::load_from(&cli.config).context("failed to load configuration")?;
    observability::init(&config.observability)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    let state = match cli.state.clone() {
        Some(state) => state,
        None => prompt(&mut input, &mut stdout, "Enter the state: ")?,
    };
    let raw_score = match cli.credit_score.clone() {
        Some(score) => score,
        None => prompt(&mut input, &mut stdout, "Enter the credit score: ")?,
    };

    let credit_score = match parse_credit_score(&raw_score) {
        Ok(score) => score,
        Err(e) => {
            debug!(error = %e, "Rejected credit score input");
            writeln!(stdout, "Invalid credit score. Please enter a valid number.")?;
            return Ok(ExitCode::from(EXIT_INVALID_INPUT));
        }
    };

    let mut product = Product::new(cli.name.clone(), cli.rate, state, credit_score);

    let rules_path = cli.rules.clone().unwrap_or_else(|| config.rules.path.clone());
    let compiler = RuleCompiler::new().strict(cli.strict || config.rules.strict_tags);
    let rule_set = RuleStore::with_compiler(compiler).load_or_report(&rules_path);

    let executor = if cli.trace {
        RuleExecutor::new().with_trace()
    } else {
        RuleExecutor::new()
    };
    let report = executor.apply(rule_set.as_ref(), &mut product);

    for diagnostic in &report.diagnostics {
        eprintln!("{}", diagnostic);
    }

    if cli.json {
        let output = json!({
            "product": product,
            "diagnostics": report.diagnostics,
            "matched_rules": report.matched_rules,
            "evaluation_trace": report.evaluation_trace,
            "evaluation_time_us": report.evaluation_time_us,
        });
        writeln!(stdout, "{}", serde_json::to_string_pretty(&output)?)?;
    } else {
        for line in &report.evaluation_trace {
            writeln!(stdout, "{}", line)?;
        }
        writeln!(
            stdout,
            "Final interest rate for {}: {}",
            product.name, product.interest_rate
        )?;
        writeln!(
            stdout,
            "Product disqualified: {}",
            display_bool(product.disqualified)
        )?;
    }

    info!(
        product = %product.name,
        interest_rate = product.interest_rate,
        disqualified = product.disqualified,
        "Evaluation complete"
    );
    Ok(ExitCode::SUCCESS)
}

/// 输出提示并读取一行输入（去掉行尾换行）
///
/// 非 UTF-8 字节按替换字符处理，交由后续校验决定是否有效。
fn prompt(input: &mut impl BufRead, output: &mut impl Write, message: &str) -> Result<String> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = Vec::new();
    input.read_until(b'\n', &mut line)?;
    let line = String::from_utf8_lossy(&line);
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// 布尔值的结果输出格式（首字母大写）
fn display_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// 解析信用分，允许首尾空白
fn parse_credit_score(raw: &str) -> pricing_engine::Result<i32> {
    raw.trim()
        .parse()
        .map_err(|_| RuleError::InvalidInput(format!("credit score '{}' is not a number", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_credit_score() {
        assert_eq!(parse_credit_score("750").unwrap(), 750);
        assert_eq!(parse_credit_score(" 720 ").unwrap(), 720);
        assert!(matches!(
            parse_credit_score("abc"),
            Err(RuleError::InvalidInput(_))
        ));
        assert!(parse_credit_score("").is_err());
    }

    #[test]
    fn test_prompt_reads_line() {
        let mut input = io::Cursor::new("Florida\r\n750\n");
        let mut output = Vec::new();

        let state = prompt(&mut input, &mut output, "Enter the state: ").unwrap();
        assert_eq!(state, "Florida");
        assert_eq!(String::from_utf8(output).unwrap(), "Enter the state: ");
    }

    #[test]
    fn test_prompt_tolerates_invalid_utf8() {
        let mut input = io::Cursor::new(b"\xff\xfe\n750\n".to_vec());
        let mut output = Vec::new();

        let state = prompt(&mut input, &mut output, "Enter the state: ").unwrap();
        assert_eq!(state, "\u{FFFD}\u{FFFD}");

        let score = prompt(&mut input, &mut output, "Enter the credit score: ").unwrap();
        assert_eq!(parse_credit_score(&score).unwrap(), 750);
    }

    #[test]
    fn test_display_bool() {
        assert_eq!(display_bool(true), "True");
        assert_eq!(display_bool(false), "False");
    }

    #[test]
    fn test_negative_credit_score_argument() {
        let cli = Cli::parse_from(["pricing-engine", "--credit-score", "-5"]);
        assert_eq!(cli.credit_score.as_deref(), Some("-5"));
        assert_eq!(parse_credit_score("-5").unwrap(), -5);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["pricing-engine"]);
        assert_eq!(cli.name, "7-1 ARM");
        assert_eq!(cli.rate, 5.0);
        assert!(cli.state.is_none());
        assert!(!cli.strict);
    }
}

//! Rules command - shows which rules the config enables

use crate::cli::RulesArgs;
use crate::config::load_rule_config;
use canon_core::RuleSettings;
use canon_core::config::CONFIG_FILE_NAME;
use canon_csharp::{RuleCode, config_from_canon_config};
use canon_csharp::codes::RESERVED_CODES;
use camino::Utf8PathBuf;

pub fn run_rules(args: RulesArgs) -> anyhow::Result<()> {
    let config = load_rule_config(args.config.as_ref())?;
    config_from_canon_config(&config)?;

    let default_path = Utf8PathBuf::from(CONFIG_FILE_NAME);
    let config_display = args.config.as_ref().unwrap_or(&default_path);

    println!("Canon Rules");
    println!("───────────");
    println!();

    if config_display.exists() {
        println!("Config: {config_display} (found)");
    } else {
        println!("Config: {config_display} (not found - using defaults)");
    }
    println!();

    println!("Rules: {}", RuleCode::ALL.len());
    for code in RuleCode::ALL {
        let definition = code.definition();
        let enabled =
            config.is_enabled(definition.code, definition.name, definition.enabled_by_default);
        let status = if enabled { "✓" } else { "○" };
        println!("  {status} {} {}", definition.code, definition.name);

        if args.details {
            println!(
                "      category={}  severity={}",
                definition.category.as_str(),
                definition.default_severity.as_str()
            );
            print_settings(config.settings_for(definition.code, definition.name));
        }
    }
    println!();
    println!("Reserved codes: {}", RESERVED_CODES.join(", "));

    Ok(())
}

fn print_settings(settings: Option<&RuleSettings>) {
    let Some(settings) = settings else {
        println!("      (no overrides)");
        return;
    };

    let mut fields = Vec::new();

    macro_rules! push_opt {
        ($label:expr, $opt:expr) => {
            if let Some(val) = $opt {
                fields.push(format!("{}={}", $label, val));
            }
        };
    }

    push_opt!("enabled", settings.enabled);
    push_opt!("severity", settings.severity.as_deref());
    push_opt!("max", settings.max);
    push_opt!("max_comment_lines", settings.max_comment_lines);
    push_opt!("warning_max", settings.warning_max);
    push_opt!("error_max", settings.error_max);

    if fields.is_empty() {
        println!("      (no overrides)");
    } else {
        println!("      {}", fields.join("  "));
    }
}

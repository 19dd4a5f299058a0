// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod logging;
mod runtime;

use anyhow::{Context, Result};
use config::Config;
use inspire_app::QuoteSession;
use logging::LogTarget;
use runtime::LlmGenerator;
use std::env;
use std::io;
use std::path::PathBuf;
use tracing::info;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    if options.list_categories {
        return runtime::write_categories(&mut io::stdout().lock());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `inspire --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;

    let interactive = !options.check_only && options.category.is_none();
    let log_path = if interactive {
        Some(config.log_path()?)
    } else {
        None
    };
    let target = match &log_path {
        Some(path) => LogTarget::File(path),
        None => LogTarget::Stderr,
    };
    logging::init(&config.log_level(), target)?;

    let client = inspire_llm::Client::new(
        config.llm_base_url(),
        config.llm_model(),
        &config.llm_api_key()?,
        config.llm_timeout()?,
    )
    .with_context(|| {
        format!(
            "invalid [llm] config in {}; fix base_url/model/api_key/timeout values",
            options.config_path.display()
        )
    })?;
    info!(model = client.model(), base_url = client.base_url(), "generation client ready");

    if options.check_only {
        client.ping()?;
        println!("ok: model {} is reachable", client.model());
        return Ok(());
    }

    let mut session = QuoteSession::new(LlmGenerator::new(client));
    if let Some(name) = &options.category {
        let category = runtime::resolve_category(name)?;
        let quotes = runtime::fetch_quotes(&mut session, category)?;
        return runtime::write_quotes(&mut io::stdout().lock(), &quotes);
    }

    inspire_tui::run_app(&mut session)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    print_config_path: bool,
    print_example: bool,
    list_categories: bool,
    category: Option<String>,
    check_only: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        print_config_path: false,
        print_example: false,
        list_categories: false,
        category: None,
        check_only: false,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--category" => {
                let value = iter.next().ok_or_else(|| {
                    anyhow::anyhow!(
                        "--category requires a category name; run --list-categories to see them"
                    )
                })?;
                options.category = Some(value.as_ref().to_owned());
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--list-categories" => {
                options.list_categories = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow::anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn print_help() {
    println!("inspire: AI-generated inspirational quotes");
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a config template");
    println!("  --list-categories        Print the category catalog");
    println!("  --category <name>        Print quotes for one category and exit");
    println!("  --check                  Validate config and reach the configured model");
    println!("  --help                   Show this help");
}

// Copyright © 2024 SiteFooter. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-line interface for SiteFooter
//!
//! This module provides the command-line interface for rendering footer
//! fragments and building documentation URLs from a site configuration.
//!
//! # Examples
//!
//! ```
//! use sitefooter::cli;
//!
//! let matches = cli::build().get_matches_from(vec![
//!     "sitefooter",
//!     "url",
//!     "intro",
//!     "--language",
//!     "fr",
//! ]);
//!
//! let url_cmd = matches.subcommand_matches("url").unwrap();
//! assert_eq!(url_cmd.get_one::<String>("doc").unwrap(), "intro");
//! assert_eq!(url_cmd.get_one::<String>("language").unwrap(), "fr");
//! ```

use crate::core::config::{ConfigBuilder, SiteConfig};
use crate::output::{minify_fragment, HtmlOutputGenerator};
use crate::{OutputGenerator, Result, SiteFooter, SiteFooterError};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::{debug, info};
use std::io::{self, Write};
use std::path::PathBuf;

/// The current version of SiteFooter, as defined in `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default site configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "siteConfig.toml";

/// Prefix of environment variables overriding configuration keys.
pub const ENV_PREFIX: &str = "SITEFOOTER_";

fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .help("Site configuration file (TOML, or JSON with a .json extension)")
        .value_parser(value_parser!(PathBuf))
        .default_value(DEFAULT_CONFIG_FILE)
}

fn language_arg() -> Arg {
    Arg::new("language")
        .short('l')
        .long("language")
        .help("Display language inserted as a path segment")
        .value_parser(value_parser!(String))
}

/// Builds and configures the SiteFooter command-line interface.
pub fn build() -> Command {
    debug!("Building CLI command structure");

    Command::new("sitefooter")
        .author("SiteFooter Contributors")
        .about("Renders a documentation site's footer fragment.")
        .version(VERSION)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase logging verbosity (-v, -vv)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("render")
                .about("Render the footer fragment")
                .arg(config_arg())
                .arg(language_arg())
                .arg(
                    Arg::new("template")
                        .short('t')
                        .long("template")
                        .help("Custom Handlebars footer template")
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Write the fragment to this file instead of stdout")
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("minify")
                        .short('m')
                        .long("minify")
                        .help("Minify output")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("url")
                .about("Print the URL of a documentation page")
                .arg(
                    Arg::new("doc")
                        .help("Page identifier, e.g. getting-started")
                        .required(true)
                        .value_parser(value_parser!(String)),
                )
                .arg(config_arg())
                .arg(language_arg())
                .arg(
                    Arg::new("page")
                        .long("page")
                        .help("Build a generic page URL (no docs sub-path)")
                        .action(ArgAction::SetTrue),
                ),
        )
        .after_help(
            "\x1b[1;4mEnvironment:\x1b[0m\n\n  SITEFOOTER_BASE_URL, SITEFOOTER_DOCS_URL, SITEFOOTER_COPYRIGHT and \
             SITEFOOTER_TITLE override the configuration file.\n\n\
             \x1b[1;4mLicense:\x1b[0m\n  The project is licensed under the terms of \
             both the MIT license and the Apache License (Version 2.0)."
        )
}

/// Runs the subcommand selected in `matches`.
pub fn run(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("render", sub_matches)) => {
            let config = load_config(sub_matches)?;
            render_footer(
                &config,
                sub_matches.get_one::<String>("language").map(String::as_str),
                sub_matches.get_one::<PathBuf>("template"),
                sub_matches.get_one::<PathBuf>("output"),
                sub_matches.get_flag("minify"),
            )
        }
        Some(("url", sub_matches)) => {
            let config = load_config(sub_matches)?;
            let doc = sub_matches
                .get_one::<String>("doc")
                .ok_or_else(|| SiteFooterError::internal_error("Missing page identifier"))?;
            let language =
                sub_matches.get_one::<String>("language").map(String::as_str);
            let footer = SiteFooter::new(&config)?;
            let url = if sub_matches.get_flag("page") {
                footer.page_url(doc, language)
            } else {
                footer.doc_url(doc, language)
            };
            writeln!(io::stdout(), "{}", url)?;
            Ok(())
        }
        _ => Err(SiteFooterError::internal_error("Unknown command")),
    }
}

fn load_config(matches: &ArgMatches) -> Result<SiteConfig> {
    let path = matches
        .get_one::<PathBuf>("config")
        .ok_or_else(|| SiteFooterError::internal_error("Missing config path"))?;
    info!("Loading site configuration from '{}'", path.display());

    ConfigBuilder::new()
        .with_file(path)
        .with_env_prefix(ENV_PREFIX)
        .build()
}

/// Renders the footer and writes it to `output` or stdout.
fn render_footer(
    config: &SiteConfig,
    language: Option<&str>,
    template: Option<&PathBuf>,
    output: Option<&PathBuf>,
    minify: bool,
) -> Result<()> {
    let mut footer = SiteFooter::new(config)?;
    if let Some(template) = template {
        info!("Using footer template '{}'", template.display());
        footer = footer.with_template_file(template)?;
    }

    let html = footer.render(language)?;

    match output {
        Some(path) => HtmlOutputGenerator::new().generate(
            &html,
            path,
            Some(&serde_json::json!({ "minify": minify })),
        ),
        None => {
            let html = if minify { minify_fragment(&html)? } else { html };
            io::stdout().write_all(html.as_bytes())?;
            Ok(())
        }
    }
}

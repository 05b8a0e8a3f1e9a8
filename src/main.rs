// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dryad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dryad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Dryad CLI entrypoint.
//!
//! Reads a JSON document from a file (or stdin) and prints it as a tree diagram.

use std::error::Error;
use std::io::Read;

use dryad::{BoxStyle, JsonNode, Layout, PrintConfig, TreePrinter};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<file.json>] [--layout <td|bu|lr|rl|index|index-plain>] [--max-depth <n>] [--config <file>] [--frame]\n  {program} --config-schema\n\nWithout a file the document is read from stdin.\n--config loads layout, spacing and frame settings from a JSON file; flags given on the command line win.\n--frame draws an ASCII border around the diagram."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    input: Option<String>,
    layout: Option<Layout>,
    max_depth: Option<usize>,
    config: Option<String>,
    config_schema: bool,
    frame: bool,
}

fn parse_layout(raw: &str) -> Option<Layout> {
    match raw {
        "td" | "top-down" => Some(Layout::TopDown),
        "bu" | "bottom-up" => Some(Layout::BottomUp),
        "lr" | "left-to-right" => Some(Layout::LeftToRight),
        "rl" | "right-to-left" => Some(Layout::RightToLeft),
        "index" => Some(Layout::Index { connectors: true }),
        "index-plain" => Some(Layout::Index { connectors: false }),
        _ => None,
    }
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--layout" => {
                if options.layout.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.layout = Some(parse_layout(&raw).ok_or(())?);
            }
            "--max-depth" => {
                if options.max_depth.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.max_depth = Some(raw.parse().map_err(|_| ())?);
            }
            "--config" => {
                if options.config.is_some() {
                    return Err(());
                }
                options.config = Some(args.next().ok_or(())?);
            }
            "--config-schema" => {
                if options.config_schema {
                    return Err(());
                }
                options.config_schema = true;
            }
            "--frame" => {
                if options.frame {
                    return Err(());
                }
                options.frame = true;
            }
            "-" => {
                if options.input.is_some() {
                    return Err(());
                }
                options.input = Some(arg);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.input.is_some() {
                    return Err(());
                }
                options.input = Some(arg);
            }
        }
    }

    if options.config_schema && options != (CliOptions { config_schema: true, ..CliOptions::default() })
    {
        return Err(());
    }

    Ok(options)
}

fn print_config(options: &CliOptions) -> Result<PrintConfig, Box<dyn Error>> {
    let mut config = match &options.config {
        Some(path) => PrintConfig::load(path)?,
        None => PrintConfig::default(),
    };
    if let Some(layout) = options.layout {
        config.layout = layout;
    }
    if options.max_depth.is_some() {
        config.max_depth = options.max_depth;
    }
    if options.frame {
        config.frame.border = BoxStyle::Ascii;
    }
    Ok(config)
}

fn read_input(input: Option<&str>) -> Result<String, Box<dyn Error>> {
    match input {
        Some(path) if path != "-" => std::fs::read_to_string(path)
            .map_err(|err| format!("failed to read {path}: {err}").into()),
        _ => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "dryad".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        if options.config_schema {
            println!("{}", PrintConfig::json_schema());
            return Ok(());
        }

        let config = print_config(&options)?;
        let raw = read_input(options.input.as_deref())?;
        let document: serde_json::Value =
            serde_json::from_str(&raw).map_err(|err| format!("invalid JSON input: {err}"))?;

        let printer = TreePrinter::from_config(&config);
        let text = printer.print(JsonNode::new(&document), config.max_depth)?;
        println!("{text}");
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("dryad: {err}");
        std::process::exit(1);
    }
}

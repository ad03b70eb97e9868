// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # cpu-tuner
//!
//! Command-line front end for the `cpufreq` crate.
//!
//! ## Usage
//! ```bash
//! # List every core's frequencies and governors
//! cpu-tuner -l
//!
//! # Pin every core to the performance governor (needs root)
//! sudo cpu-tuner -p
//!
//! # Both, in order: set first, then list the result
//! sudo cpu-tuner -pl
//!
//! # Run against a copied or synthetic tree
//! cpu-tuner -l --root /tmp/fake-sysfs
//! ```

mod commands;

use clap::{CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cpu-tuner",
    about = "List per-core cpufreq state or set every core to the performance governor",
    version,
    author
)]
struct Cli {
    /// List cores with their frequencies and governors (repeatable).
    #[arg(short = 'l', long, action = clap::ArgAction::Count)]
    list: u8,

    /// Set the scaling governor of every core to "performance" (repeatable).
    #[arg(short = 'p', long, action = clap::ArgAction::Count)]
    performance: u8,

    /// Path to a TOML layout file overriding the cpuinfo and sysfs paths.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Prefix prepended to every absolute path (e.g. a fake sysfs tree).
    #[arg(long)]
    root: Option<PathBuf>,

    /// Enable verbose logging on stderr (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Something the invocation asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    List,
    SetPerformance,
}

impl Action {
    /// Maps a clap argument id to the action it triggers, if any.
    fn for_arg(id: &str) -> Option<Self> {
        match id {
            "list" => Some(Action::List),
            "performance" => Some(Action::SetPerformance),
            _ => None,
        }
    }
}

/// Parsed command line plus the requested actions in command-line order.
#[derive(Debug)]
struct Invocation {
    cli: Cli,
    actions: Vec<Action>,
}

impl Invocation {
    /// Parses `args` (program name first).
    ///
    /// Every occurrence of `-l` or `-p` becomes one action, in command-line
    /// order: `-pl` sets the governor and then lists, `-ll` lists twice.
    fn parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let mut command = Cli::command();
        let matches = command.try_get_matches_from_mut(args.iter().cloned())?;
        let cli = Cli::from_arg_matches(&matches)?;
        let actions = ordered_actions(&command, &args);

        Ok(Self { cli, actions })
    }
}

/// Walks already-validated arguments and returns one action per
/// occurrence of an action flag.
///
/// `command` must be built, so option arities are known: the value of
/// `-c FILE`, `-cFILE` or `--root DIR` is skipped rather than scanned.
fn ordered_actions(command: &clap::Command, args: &[OsString]) -> Vec<Action> {
    let mut actions = Vec::new();
    let mut tokens = args.iter().skip(1).map(|a| a.to_string_lossy());

    while let Some(token) = tokens.next() {
        if token == "--" {
            break;
        }
        if let Some(long) = token.strip_prefix("--") {
            let (name, inline_value) = match long.split_once('=') {
                Some((name, _)) => (name, true),
                None => (long, false),
            };
            let Some(arg) = command.get_arguments().find(|a| a.get_long() == Some(name)) else {
                continue;
            };
            actions.extend(Action::for_arg(arg.get_id().as_str()));
            if arg.get_action().takes_values() && !inline_value {
                tokens.next();
            }
        } else if let Some(shorts) = token.strip_prefix('-') {
            for (pos, c) in shorts.char_indices() {
                let Some(arg) = command.get_arguments().find(|a| a.get_short() == Some(c)) else {
                    continue;
                };
                actions.extend(Action::for_arg(arg.get_id().as_str()));
                if arg.get_action().takes_values() {
                    // The rest of the cluster is the value, or the next token is.
                    if pos + c.len_utf8() == shorts.len() {
                        tokens.next();
                    }
                    break;
                }
            }
        }
    }
    actions
}

fn main() -> anyhow::Result<()> {
    // Unknown flags print usage to stderr and exit with status 2.
    let invocation = Invocation::parse_from(std::env::args_os()).unwrap_or_else(|e| e.exit());

    commands::init_tracing(invocation.cli.verbose);

    let stdout = std::io::stdout();
    commands::run(&invocation, &mut stdout.lock())
}

//! word-gather CLI
//!
//! A headless front end over the session: the interactive tool drives the
//! same engine through the WASM bindings.

use anyhow::{bail, Context};
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use word_gather::{CharOffset, Config, Session};

#[derive(Parser, Debug)]
#[command(name = "word-gather")]
#[command(version, about = "Gather substantive words and phrases from English articles")]
struct Args {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count occurrences of a phrase
    Count {
        /// Article to read
        file: PathBuf,
        /// Word or phrase to count
        phrase: String,
    },
    /// List the most frequent substantive words
    Top {
        /// Article to read
        file: PathBuf,
        /// How many words to list
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },
    /// Gather phrases and save them, one per line
    Gather {
        /// Article to read
        file: PathBuf,
        /// Phrase to gather (repeatable)
        #[arg(short, long = "phrase")]
        phrases: Vec<String>,
        /// Character range START:END to gather (repeatable)
        #[arg(short, long = "range", value_parser = parse_range)]
        ranges: Vec<(usize, usize)>,
        /// Output file (defaults to <stem>_selected.txt next to the article)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn parse_range(raw: &str) -> Result<(usize, usize), String> {
    let (start, end) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected START:END, got `{raw}`"))?;
    let start = start.trim().parse().map_err(|e| format!("bad start: {e}"))?;
    let end = end.trim().parse().map_err(|e| format!("bad end: {e}"))?;
    Ok((start, end))
}

fn main() -> anyhow::Result<()> {
    // Raw matches are kept to recover where each repeated value appeared
    let matches = Args::command().get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|err| err.exit());

    // Results go to stdout, logs to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let mut session = Session::new(config);

    match args.command {
        Command::Count { file, phrase } => {
            session.open(&file)?;
            println!("{}", session.count_occurrences(&phrase));
        }
        Command::Top { file, limit } => {
            session.open(&file)?;
            for (word, count) in session.document().top_words(limit) {
                println!("{count}\t{word}");
            }
        }
        Command::Gather {
            file,
            phrases,
            ranges,
            output,
        } => {
            session.open(&file)?;

            let Some(gather_matches) = matches.subcommand_matches("gather") else {
                bail!("gather arguments missing");
            };
            let picks = ordered_picks(gather_matches, &phrases, &ranges);
            if gather(&mut session, picks) == 0 {
                bail!("nothing gathered from {}", file.display());
            }

            let output = output.unwrap_or_else(|| session.default_export_path());
            let saved = session
                .save(&output)
                .with_context(|| format!("saving {}", output.display()))?;
            println!("saved {saved} phrases to {}", output.display());
        }
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pick<'a> {
    Phrase(&'a str),
    Range(usize, usize),
}

/// Phrases and ranges merged back into command-line order
fn ordered_picks<'a>(
    matches: &ArgMatches,
    phrases: &'a [String],
    ranges: &[(usize, usize)],
) -> Vec<Pick<'a>> {
    let phrase_picks = matches
        .indices_of("phrases")
        .into_iter()
        .flatten()
        .zip(phrases.iter().map(|phrase| Pick::Phrase(phrase.as_str())));
    let range_picks = matches
        .indices_of("ranges")
        .into_iter()
        .flatten()
        .zip(ranges.iter().map(|&(a, b)| Pick::Range(a, b)));

    let mut picks: Vec<_> = phrase_picks.chain(range_picks).collect();
    picks.sort_by_key(|&(index, _)| index);
    picks.into_iter().map(|(_, pick)| pick).collect()
}

/// Gather every pick in order, returning how many were accepted
fn gather<'a>(session: &mut Session, picks: impl IntoIterator<Item = Pick<'a>>) -> usize {
    picks
        .into_iter()
        .filter(|&pick| session_pick(session, pick))
        .count()
}

/// Gather one pick, logging why it was skipped
fn session_pick(session: &mut Session, pick: Pick<'_>) -> bool {
    let result = match pick {
        Pick::Phrase(phrase) => session.accept_phrase(phrase),
        Pick::Range(a, b) => session.select_range(CharOffset(a), CharOffset(b)),
    };
    match result {
        Ok(accepted) => {
            tracing::info!(
                phrase = %accepted.phrase,
                occurrences = accepted.occurrences,
                "gathered"
            );
            true
        }
        Err(err) => {
            tracing::warn!("skipped: {err}");
            false
        }
    }
}

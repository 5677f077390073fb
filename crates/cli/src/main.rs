use anyhow::{bail, Context};
use cardplay_core::{
    Card, Cards, Event, EventBus, GameConfig, RngState, RunError, RunState, SortMode,
};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
struct CliOptions {
    seed: Option<u64>,
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Hand,
    Select(Vec<usize>),
    Play,
    Discard,
    Sort(SortMode),
    Status,
    Help,
    Quit,
}

const HELP: &str = "\
commands:
  hand                 show the hand (selected cards marked with *)
  select <n> [<n>...]  toggle hand cards by position (1-based)
  play                 score the selected cards
  discard              throw the selected cards away
  sort rank|suit       change hand order
  status               score, plays, discards and deck size
  help                 this text
  quit                 leave";

fn parse_cli_options(args: &[String]) -> anyhow::Result<CliOptions> {
    let mut options = CliOptions::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--seed" => {
                let value = args.get(idx + 1).context("--seed needs a value")?;
                options.seed = Some(
                    value
                        .parse::<u64>()
                        .with_context(|| format!("invalid seed {value}"))?,
                );
                idx += 1;
            }
            "--config" => {
                let value = args.get(idx + 1).context("--config needs a path")?;
                options.config = Some(PathBuf::from(value));
                idx += 1;
            }
            other => bail!("unknown argument {other}"),
        }
        idx += 1;
    }
    Ok(options)
}

fn load_config(path: Option<&Path>) -> anyhow::Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let config =
        serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(config)
}

fn parse_command(line: &str) -> anyhow::Result<Option<Command>> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Ok(None);
    };
    let command = match head {
        "h" | "hand" => Command::Hand,
        "s" | "select" => {
            let picks = parts
                .map(|it| {
                    it.parse::<usize>()
                        .with_context(|| format!("invalid position {it}"))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            if picks.is_empty() {
                bail!("select needs at least one position");
            }
            Command::Select(picks)
        }
        "p" | "play" => Command::Play,
        "d" | "discard" => Command::Discard,
        "sort" => match parts.next() {
            Some("rank") => Command::Sort(SortMode::Rank),
            Some("suit") => Command::Sort(SortMode::Suit),
            _ => bail!("sort takes rank or suit"),
        },
        "status" => Command::Status,
        "?" | "help" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        other => bail!("unknown command {other}"),
    };
    Ok(Some(command))
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::label)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_hand(state: &RunState) -> String {
    state
        .hand()
        .iter()
        .enumerate()
        .map(|(idx, card)| {
            let mark = if state.is_selected(*card) { "*" } else { " " };
            format!("{:>2}{mark}{}", idx + 1, card.label())
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn format_event(event: &Event) -> String {
    match event {
        Event::HandDealt { count, deck_left } => {
            format!("dealt {count} cards ({deck_left} left in deck)")
        }
        Event::CardSelected { card, selected } => {
            let verb = if *selected { "selected" } else { "unselected" };
            format!("{verb} {}", card.label())
        }
        Event::HandScored {
            hand,
            scored,
            score,
            total,
        } => format!(
            "{} [{}] +{score} => {total}",
            hand.id(),
            format_cards(scored)
        ),
        Event::CardsDiscarded { count } => format!("discarded {count} cards"),
        Event::RoundOver { score } => format!("round over, final score {score}"),
    }
}

fn print_status(state: &RunState) {
    let table = state.table();
    println!(
        "score {} | plays {} | discards {} | deck {} | table {} ({}) | sort {:?} | seed {}",
        state.score(),
        state.plays_left(),
        state.discards_left(),
        state.deck().len(),
        table.kind().id(),
        table.score(),
        state.sort_mode(),
        state.seed()
    );
}

fn select_positions(
    state: &RunState,
    picks: &[usize],
    events: &mut EventBus,
) -> anyhow::Result<RunState> {
    let hand: &Cards = state.hand();
    let cards = picks
        .iter()
        .map(|pos| {
            pos.checked_sub(1)
                .and_then(|idx| hand.get(idx))
                .with_context(|| format!("no card at position {pos}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let mut next = state.clone();
    for card in cards {
        next = next.select(card, events)?;
    }
    Ok(next)
}

fn apply(state: &RunState, command: &Command, events: &mut EventBus) -> anyhow::Result<RunState> {
    let next = match command {
        Command::Select(picks) => select_positions(state, picks, events)?,
        Command::Play => state.play(events)?,
        Command::Discard => state.discard(events)?,
        Command::Sort(mode) => state.with_sort_mode(*mode),
        Command::Hand | Command::Status | Command::Help | Command::Quit => state.clone(),
    };
    Ok(next)
}

fn run(options: CliOptions) -> anyhow::Result<()> {
    let config = load_config(options.config.as_deref())?;
    let mut rng = match options.seed {
        Some(seed) => RngState::from_seed(seed),
        None => RngState::from_entropy(),
    };
    let mut events = EventBus::default();
    let mut state = RunState::new(config, &mut rng, &mut events)?;
    events.drain().for_each(|event| log::debug!("{event:?}"));

    println!("{HELP}");
    print_status(&state);
    println!("{}", format_hand(&state));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        match command {
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            Command::Status => print_status(&state),
            Command::Hand => println!("{}", format_hand(&state)),
            _ => match apply(&state, &command, &mut events) {
                Ok(next) => {
                    state = next;
                    for event in events.drain() {
                        println!("{}", format_event(&event));
                    }
                    println!("{}", format_hand(&state));
                    if state.is_over() {
                        print_status(&state);
                        break;
                    }
                }
                Err(err) => {
                    // transitions are atomic; drop anything queued by the failed one
                    events.drain().for_each(drop);
                    match err.downcast_ref::<RunError>() {
                        Some(run_err) => println!("cannot do that: {run_err}"),
                        None => println!("{err}"),
                    }
                }
            },
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = parse_cli_options(&args).and_then(run);
    if let Err(err) = result {
        eprintln!("cardplay error: {err:#}");
        std::process::exit(1);
    }
}

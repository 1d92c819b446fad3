use clap::Parser;
use regvis::{automata::fsm::Alphabet, export, ExportConfig, Session};
use std::path::PathBuf;

/// Words tested when none are given on the command line.
const DEMO_WORDS: [&str; 6] = ["", "k", "kh", "kkh", "kg", "kkghh"];

#[derive(Parser)]
#[command(name = "regvis")]
#[command(about = "Builds the NFA, DFA and minimal DFA of a regular expression and tests words")]
struct Args {
    /// Pattern over alphanumeric symbols with `+`, `*` and parentheses
    pattern: String,

    /// Words to test; a fixed demo list is used when empty
    words: Vec<String>,

    /// Alphanumeric symbols to determinize over instead of the ones in the pattern
    #[arg(long)]
    alphabet: Option<Alphabet>,

    /// Directory to write nfa.dot, dfa.dot and mindfa.dot into
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Also trace every word through the minimal DFA
    #[arg(long)]
    trace: bool,

    /// Print verdicts (and traces) as a single JSON object
    #[arg(long)]
    json: bool,

    /// Log pipeline details
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let session = match args.alphabet {
        Some(alphabet) => Session::with_alphabet(&args.pattern, alphabet),
        None => Session::new(&args.pattern),
    }?;

    let words: Vec<String> = if args.words.is_empty() {
        DEMO_WORDS.iter().map(|w| w.to_string()).collect()
    } else {
        args.words
    };

    if !args.json {
        println!("Pattern: {}", session.pattern());
        println!("After concatenation: {}", session.concatenated());
        println!("Postfix: {}", session.postfix());
        println!("Alphabet: {}", session.alphabet());
        println!();
        print!("{}", session.graphs().nfa);
        println!();
    }

    if let Some(out_dir) = args.out_dir {
        for path in export(&session, &ExportConfig::new(out_dir))? {
            log::info!("exported {}", path.display());
        }
    }

    let report = session.report(&words, args.trace);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for verdict in report.verdicts.iter() {
        println!(
            "{:>8}  NFA: {:<5}  DFA: {:<5}  MinDFA: {:<5}",
            format!("{:?}", verdict.word),
            verdict.nfa,
            verdict.dfa,
            verdict.mindfa
        );
    }

    if let Some(traces) = report.traces {
        println!();
        println!("{}", serde_json::to_string_pretty(&traces)?);
    }

    Ok(())
}

use crossterm::style::Stylize;
use pratyahara_core::core::registry::Registry;
use pratyahara_core::export::{export_registry, load_alphabet};
use pratyahara_core::{classify, construct_with, find_groups_containing, get_named_group, is_member};
use pratyahara_core::Construction;
use std::io::{self, stdin, stdout, BufRead, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

const PROMPT: &str = "pratyahara> ";

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let alphabet = match alphabet_arg() {
        Some(path) => match load_alphabet(Path::new(&path)) {
            Ok(a) => Some(a),
            Err(e) => {
                eprintln!("{} could not load alphabet '{}': {}", "[ERROR]".red(), path, e);
                std::process::exit(2);
            }
        },
        None => None,
    };

    println!("{}", "Pratyāhāra shell. Type 'help' for commands, 'exit' to quit.".bold());
    if let Some(a) = &alphabet {
        println!("Using custom alphabet of {} phonemes for 'construct'.", a.len());
    }

    let mut out = stdout();
    print!("{}", PROMPT);
    out.flush()?;

    for line in stdin().lock().lines() {
        let input = line?;
        let parts: Vec<&str> = input.split_whitespace().collect();
        let command = parts.first().copied().unwrap_or("");

        match command {
            "" => {}
            "exit" | "quit" => break,
            "help" => print_help(),
            "list" => {
                for entry in Registry::global().entries() {
                    println!(
                        "  {:<5} {}…{}  {:<24} [{}]",
                        entry.name.cyan(),
                        entry.start,
                        entry.marker,
                        entry.gloss,
                        entry.phonemes.join(" ")
                    );
                }
            }
            "group" if parts.len() == 2 => {
                let group = get_named_group(parts[1]);
                if group.valid {
                    println!("{} [{}]", "ok".green(), group.phonemes.join(" "));
                } else {
                    println!("{} {}", "no".red(), group.error.as_deref().unwrap_or("invalid"));
                }
            }
            "member" if parts.len() == 3 => {
                let answer = is_member(parts[1], parts[2]);
                println!("{}", if answer { "true".green() } else { "false".red() });
            }
            "contains" if parts.len() == 2 => {
                println!("[{}]", find_groups_containing(parts[1]).join(", "));
            }
            "construct" if parts.len() == 3 => {
                let report = Construction::from(construct_with(parts[1], parts[2], alphabet.as_deref()));
                print_construction(&report);
            }
            "classify" if parts.len() > 1 => {
                println!("{}", classify(&parts[1..]).as_str().cyan());
            }
            "export" if parts.len() == 2 => match export_registry(Registry::global(), Path::new(parts[1])) {
                Ok(()) => println!("{} registry written to '{}'", "ok".green(), parts[1]),
                Err(e) => eprintln!("{} {}", "[ERROR]".red(), e),
            },
            other => println!("{} unrecognised command '{}' (try 'help')", "?".yellow(), other),
        }

        print!("{}", PROMPT);
        out.flush()?;
    }
    println!();
    Ok(())
}

fn alphabet_arg() -> Option<String> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--alphabet" {
            return args.next();
        }
    }
    None
}

fn print_construction(report: &Construction) {
    if report.valid {
        let tag = if report.traditional { " (traditional)" } else { "" };
        println!("{} [{}]{}", "ok".green(), report.phonemes.join(" "), tag);
    } else {
        println!("{} {}", "no".red(), report.error.as_deref().unwrap_or("invalid"));
    }
}

fn print_help() {
    println!("  group <name>                named pratyāhāra (ac, hal, ik, aṇ, yañ, jhal, śal)");
    println!("  member <phoneme> <group>    group may be a name or a two-letter shorthand");
    println!("  contains <phoneme>          named groups containing the phoneme");
    println!("  construct <start> <marker>  build the span start…marker");
    println!("  classify <phoneme>...       vowels / consonants / semivowels / nasals / mixed");
    println!("  list                        show every named group");
    println!("  export <path>               write the named groups as JSON");
    println!("  exit");
}

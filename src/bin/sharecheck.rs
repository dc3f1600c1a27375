//! Command-line front end for share reconstruction.
//!
//! Reads a JSON share container, recovers the secret by majority vote across
//! every k-subset of shares, and reports which shares disagree with it.

use share_consensus::{
    decode_shares,
    io::{next_report_index, report_lines, write_text_series},
    radix::{decode_radix, parse_radix},
    reconstruct_shares, RecoveryConfig, ShareContainer,
};
use std::{
    env, fs,
    io::{self, Read},
    path::PathBuf,
};

fn fatal(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn print_help() {
    println!("Usage: sharecheck <recover|decode> ...");
    println!("  recover <shares.json|-> [--json] [--parallel] [--max-combinations <N>]");
    println!("          [--log-dir <dir>]");
    println!("  decode <base> <digits>");
    println!();
    println!("Environment:");
    println!(
        "  {}=1            evaluate combinations in parallel",
        share_consensus::ENV_PARALLEL
    );
    println!(
        "  {}=<N>  refuse inputs with more than N combinations",
        share_consensus::ENV_MAX_COMBINATIONS
    );
}

fn main() {
    let mut args = env::args().skip(1);
    let command = args.next();
    match command.as_deref() {
        Some("recover") => cmd_recover(args.collect()),
        Some("decode") => cmd_decode(args.collect()),
        Some("-h") | Some("--help") => print_help(),
        _ => {
            eprintln!("Usage: sharecheck <recover|decode> ...");
            std::process::exit(1);
        }
    }
}

struct RecoverOptions {
    input: String,
    json: bool,
    log_dir: Option<PathBuf>,
    config: RecoveryConfig,
}

fn parse_recover_args(args: Vec<String>) -> RecoverOptions {
    let mut input: Option<String> = None;
    let mut json = false;
    let mut log_dir = None;
    let mut config = RecoveryConfig::from_env();
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--parallel" => config.parallel = true,
            "--max-combinations" => {
                let value = iter
                    .next()
                    .unwrap_or_else(|| fatal("--max-combinations expects a value"));
                config.max_combinations = Some(
                    value
                        .parse()
                        .unwrap_or_else(|_| fatal("invalid --max-combinations value")),
                );
            }
            "--log-dir" => {
                let value = iter
                    .next()
                    .unwrap_or_else(|| fatal("--log-dir expects a value"));
                log_dir = Some(PathBuf::from(value));
            }
            other if other.starts_with("--") => fatal(&format!("unknown argument: {other}")),
            other => {
                if input.replace(other.to_string()).is_some() {
                    fatal("recover expects a single input file");
                }
            }
        }
    }
    RecoverOptions {
        input: input.unwrap_or_else(|| fatal("Usage: sharecheck recover <shares.json|-> [flags]")),
        json,
        log_dir,
        config,
    }
}

fn read_input(input: &str) -> String {
    if input == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .unwrap_or_else(|err| fatal(&format!("failed to read stdin: {err}")));
        buf
    } else {
        fs::read_to_string(input)
            .unwrap_or_else(|err| fatal(&format!("failed to read {input}: {err}")))
    }
}

fn cmd_recover(args: Vec<String>) {
    let opts = parse_recover_args(args);
    let text = read_input(&opts.input);
    let container = ShareContainer::from_json(&text)
        .unwrap_or_else(|err| fatal(&format!("invalid share container: {err}")));
    let shares = decode_shares(&container).unwrap_or_else(|err| fatal(&err.to_string()));
    let result = reconstruct_shares(&shares, container.keys.k, &opts.config)
        .unwrap_or_else(|err| fatal(&err.to_string()));

    if result.contested {
        eprintln!(
            "warning: another candidate also reached {} votes; the earliest subset decided the secret",
            result.votes
        );
    }

    if opts.json {
        match serde_json::to_string_pretty(&result) {
            Ok(out) => println!("{out}"),
            Err(err) => fatal(&format!("failed to encode result: {err}")),
        }
    } else {
        println!("Secret: {}", result.secret);
        println!("Wrong points: {:?}", result.wrong_shares);
        println!(
            "Votes: {}/{} ({} abstained), witness {:?}",
            result.votes, result.evaluated, result.abstained, result.witness
        );
    }

    if let Some(dir) = opts.log_dir {
        let index = next_report_index(&dir, "recover");
        match write_text_series(&dir, "recover", index, &report_lines(&result, &shares)) {
            Ok(path) => eprintln!("report written to {}", path.display()),
            Err(err) => eprintln!("failed to write report: {err}"),
        }
    }
}

fn cmd_decode(args: Vec<String>) {
    if args.len() != 2 {
        fatal("Usage: sharecheck decode <base> <digits>");
    }
    let radix = parse_radix(&args[0]).unwrap_or_else(|err| fatal(&err.to_string()));
    let value = decode_radix(&args[1], radix).unwrap_or_else(|err| fatal(&err.to_string()));
    println!("{value}");
}

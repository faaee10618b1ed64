use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Clone, Copy, PartialEq, ValueEnum)]
enum OutputFormat {
    Plain,
    Json,
}

#[derive(Parser)]
#[command(
    name = "mdstruct",
    about = "Print a markdown document's structural skeleton as a line-annotated tree"
)]
struct Cli {
    /// Markdown file to inspect
    file: PathBuf,

    /// Print aggregate counts instead of the tree
    #[arg(long)]
    stat: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    output: OutputFormat,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn main() {
    let cli = Cli::parse();

    if !cli.file.is_file() {
        die(&format!("file not found: {}", cli.file.display()));
    }
    let text = fs::read_to_string(&cli.file)
        .unwrap_or_else(|e| die(&format!("cannot read {}: {}", cli.file.display(), e)));

    let tree = mdstruct::extract(&text);

    if cli.stat {
        let stats = mdstruct::stats::collect(&tree);
        match cli.output {
            OutputFormat::Plain => {
                for line in stats.lines() {
                    println!("{}", line);
                }
            }
            OutputFormat::Json => print_json(&stats),
        }
    } else {
        match cli.output {
            OutputFormat::Plain => {
                for line in mdstruct::render::render(&tree) {
                    println!("{}", line);
                }
            }
            OutputFormat::Json => print_json(&tree),
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    let json = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| die(&format!("cannot serialize: {}", e)));
    println!("{}", json);
}

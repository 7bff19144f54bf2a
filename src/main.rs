use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use tag_transplant::{transplant_tags, translate_file};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("tag-transplant")
        .version("0.1.0")
        .about("Translate JSON documents while carrying inline markup tags over to the translations")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log every string lookup")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("translate")
                .about("Translate every string in a JSON document using a translation table")
                .arg(
                    Arg::new("document")
                        .help("JSON document with English strings")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .index(1),
                )
                .arg(
                    Arg::new("table")
                        .help("Translation table: spreadsheet (.xlsx, .ods, ...) or .json")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .index(2),
                )
                .arg(
                    Arg::new("output")
                        .help("Where to write the translated JSON document")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .index(3),
                ),
        )
        .subcommand(
            Command::new("transplant")
                .about("Carry the tags of a source string over to its translation")
                .arg(
                    Arg::new("source")
                        .help("Source text with tags, e.g. \"Go <b>Now</b>\"")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("target")
                        .help("Plain translation of the source text")
                        .required(true)
                        .index(2),
                ),
        )
}

fn required<'a, T: Clone + Send + Sync + 'static>(
    matches: &'a ArgMatches,
    name: &str,
) -> Result<&'a T, String> {
    matches
        .get_one::<T>(name)
        .ok_or_else(|| format!("Missing argument: {}", name))
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("translate", sub)) => {
            let document = required::<PathBuf>(sub, "document")?;
            let table = required::<PathBuf>(sub, "table")?;
            let output = required::<PathBuf>(sub, "output")?;

            info!(
                document = %document.display(),
                table = %table.display(),
                "translating document"
            );
            let report = translate_file(document, table, output)?;
            println!("{}", report.render());
        }
        Some(("transplant", sub)) => {
            let source = required::<String>(sub, "source")?;
            let target = required::<String>(sub, "target")?;
            println!("{}", transplant_tags(source, target));
        }
        _ => unreachable!("clap requires a subcommand"),
    }

    Ok(())
}

fn main() {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    if let Err(e) = run(&matches) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

use artfolio::configuration::CONFIG_FILE_NAME;
use artfolio::startup::{self, Overrides};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("\x1b[1m\x1b[31mError: {:#}\x1b[0m", e);
        std::process::exit(1);
    }
}

fn cli() -> Command {
    Command::new("artfolio")
        .about("🎨 Artist portfolio update tool for static art sites 🎨")
        .version(env!("CARGO_PKG_VERSION"))
        .allow_external_subcommands(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Settings file (default: ./portfolio.yaml)"),
        )
        .arg(
            Arg::new("document")
                .long("document")
                .value_name("PATH")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Portfolio document, relative to the site root"),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .value_name("DIR")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Site root holding the artist folders"),
        )
        .subcommand(
            Command::new("list-artists").about("📋 List every artist in the portfolio document"),
        )
        .subcommand(
            Command::new("list-folders").about("📁 List candidate artist folders with image counts"),
        )
        .subcommand(
            Command::new("update")
                .about("🖼️  Rebuild an artist's artworks from the images in a folder")
                .arg(Arg::new("folder").required(true).help("Artist image folder"))
                .arg(Arg::new("artist-id").required(true).help("Artist id in the document"))
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .action(ArgAction::SetTrue)
                        .help("Show the result without writing the document"),
                ),
        )
        .subcommand(
            Command::new("parse")
                .about("🔍 Show what would be parsed from image file names")
                .arg(Arg::new("filename").required(true).num_args(1..)),
        )
        .subcommand(Command::new("config").about("🛠️ Create a settings file template"))
}

fn run() -> anyhow::Result<()> {
    let args = cli().get_matches();

    println!("{}", "=".repeat(60));
    println!("\x1b[1m   Artist Portfolio Update Tool\x1b[0m");
    println!("{}", "=".repeat(60));

    let cfg_file = args
        .get_one::<PathBuf>("config")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

    match args.subcommand() {
        Some(("list-artists", _)) => {
            let settings = startup::load_settings(&cfg_file, overrides(&args))?;
            startup::list_artists(&settings)?;
        }
        Some(("list-folders", _)) => {
            let settings = startup::load_settings(&cfg_file, overrides(&args))?;
            startup::list_folders(&settings)?;
        }
        Some(("update", sub)) => {
            let settings = startup::load_settings(&cfg_file, overrides(&args))?;
            let folder = required(sub, "folder")?;
            let artist_id = required(sub, "artist-id")?;
            startup::update(&settings, folder, artist_id, sub.get_flag("dry-run"))?;
        }
        Some(("parse", sub)) => {
            let filenames: Vec<String> = sub
                .get_many::<String>("filename")
                .into_iter()
                .flatten()
                .cloned()
                .collect();
            startup::parse(&filenames);
        }
        Some(("config", _)) => startup::create_config(&cfg_file)?,
        Some((other, _)) => print_usage(Some(other)),
        None => print_usage(None),
    }

    Ok(())
}

fn overrides(args: &ArgMatches) -> Overrides {
    Overrides {
        document_path: args.get_one::<PathBuf>("document").cloned(),
        site_root: args.get_one::<PathBuf>("root").cloned(),
    }
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> anyhow::Result<&'a str> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| anyhow::anyhow!("missing argument <{}>", name))
}

fn print_usage(unknown: Option<&str>) {
    match unknown {
        Some(command) => {
            println!("\x1b[1m\x1b[31mInvalid command: {}\x1b[0m\n", command);
            println!("📖 Usage:");
        }
        None => {
            println!("\n🚀 Quick Start:");
            println!("{}", "-".repeat(60));
        }
    }
    println!("  \x1b[1m\x1b[32martfolio list-artists\x1b[0m              - 📋 List all artists");
    println!("  \x1b[1m\x1b[32martfolio list-folders\x1b[0m              - 📁 List all folders");
    println!("  \x1b[1m\x1b[32martfolio update <folder> <id>\x1b[0m      - 🖼️  Update a portfolio");
    println!("  \x1b[1m\x1b[32martfolio parse <filename>...\x1b[0m       - 🔍 Preview file name parsing");
    println!("  \x1b[1m\x1b[32martfolio config\x1b[0m                    - 🛠️  Create portfolio.yaml");
    println!("\n💡 Example:");
    println!("  artfolio update 'Susan G. Scott' susan-g-scott\n");
}

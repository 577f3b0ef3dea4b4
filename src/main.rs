use clap::Parser;
use dragon_mind::application::{
    parse_limit, AddEntryService, ContributorsService, ListTopicsService, RecentService,
    SearchService,
};
use dragon_mind::cli::{self, Cli, Commands, USAGE};
use dragon_mind::error::KnowledgeError;
use dragon_mind::infrastructure::{resolve_store_path, KnowledgeStore};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn open_store() -> Result<KnowledgeStore, KnowledgeError> {
    Ok(KnowledgeStore::new(resolve_store_path()?))
}

fn run(cli: Cli) -> Result<(), KnowledgeError> {
    match cli.command {
        Some(Commands::Add {
            topic,
            content,
            source,
            contributor,
        }) => {
            let service = AddEntryService::new(open_store()?);
            let entry = service.execute(
                topic.as_deref().unwrap_or_default(),
                content.as_deref().unwrap_or_default(),
                source.as_deref(),
                contributor.as_deref(),
            )?;
            print!("Added: {}", cli::format_entry(&entry));
            Ok(())
        }
        Some(Commands::Query { term }) => {
            let entries = SearchService::new(open_store()?).execute(&term)?;
            println!("{}", cli::format_entry_list(&entries).trim_end());
            Ok(())
        }
        Some(Commands::Recent { limit }) => {
            let limit = parse_limit(limit.as_deref());
            let entries = RecentService::new(open_store()?).execute(limit)?;
            println!("{}", cli::format_entry_list(&entries).trim_end());
            Ok(())
        }
        Some(Commands::Topics) => {
            let topics = ListTopicsService::new(open_store()?).execute()?;
            println!("{}", cli::format_topic_list(&topics).trim_end());
            Ok(())
        }
        Some(Commands::Contributors) => {
            let contributors = ContributorsService::new(open_store()?).execute()?;
            println!("{}", cli::format_contributor_list(&contributors).trim_end());
            Ok(())
        }
        Some(Commands::Unknown(_)) | None => {
            println!("{}", USAGE);
            Ok(())
        }
    }
}

use clap::Parser;
use quoth::application::{
    init, AddQuoteService, ConfigService, ListQuotesService, ShowQuoteService, SyncService,
    TransferService,
};
use quoth::cli::{format_category_list, format_quote, format_quote_list, Cli, Commands};
use quoth::error::QuothError;
use quoth::infrastructure::{FileSystemRepository, HttpRemoteSource, VaultRepository};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = run(cli).await;

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> Result<(), QuothError> {
    match cli.command {
        Some(Commands::Init { path }) => init::init(&path),
        Some(Commands::Add {
            text,
            category,
            push,
        }) => {
            let repo = FileSystemRepository::discover()?;
            let service = AddQuoteService::new(repo.clone());

            let quote = service.execute(&text, &category)?;
            println!("Added quote to category '{}'", quote.category);

            if push {
                let config = repo.load_config()?;
                let remote = HttpRemoteSource::new(config.server_url, config.fetch_limit)?;
                if service.push(&remote, &quote).await {
                    println!("Sent to server");
                } else {
                    println!("Could not send to server; quote kept locally");
                }
            }
            Ok(())
        }
        Some(Commands::Show { category }) => show_random(category.as_deref()),
        Some(Commands::List { category, limit }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ListQuotesService::new(repo);

            let quotes = service.execute(category.as_deref(), limit)?;
            print!("{}", ensure_trailing_newline(format_quote_list(&quotes)));
            Ok(())
        }
        Some(Commands::Categories) => {
            let repo = FileSystemRepository::discover()?;
            let service = ListQuotesService::new(repo);

            let categories = service.categories()?;
            print!(
                "{}",
                ensure_trailing_newline(format_category_list(&categories))
            );
            Ok(())
        }
        Some(Commands::Sync { watch }) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let remote = HttpRemoteSource::new(config.server_url.clone(), config.fetch_limit)?;
            let service = SyncService::new(repo, remote);

            if watch {
                println!(
                    "Syncing every {} seconds (Ctrl-C to stop)",
                    config.sync_interval_secs
                );
                service.watch().await
            } else if let Some(report) = service.sync_once().await? {
                println!("Sync complete: {} new, {} total", report.added, report.total);
                Ok(())
            } else {
                Ok(())
            }
        }
        Some(Commands::Export { file }) => {
            let repo = FileSystemRepository::discover()?;
            let service = TransferService::new(repo);

            let count = service.export(&file)?;
            println!("Exported {} quotes to {}", count, file.display());
            Ok(())
        }
        Some(Commands::Import { file }) => {
            let repo = FileSystemRepository::discover()?;
            let service = TransferService::new(repo);

            let count = service.import(&file)?;
            println!("Imported {} quotes from {}", count, file.display());
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("server_url = {}", config.server_url);
                println!("sync_interval_secs = {}", config.sync_interval_secs);
                println!("fetch_limit = {}", config.fetch_limit);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: quoth config [--list | <key> [<value>]]");
                println!("Valid keys: server_url, sync_interval_secs, fetch_limit, created");
                Ok(())
            }
        }
        None => show_random(None),
    }
}

fn show_random(category: Option<&str>) -> Result<(), QuothError> {
    let repo = FileSystemRepository::discover()?;
    let service = ShowQuoteService::new(repo);

    match service.execute(category)? {
        Some(quote) => println!("{}", format_quote(&quote)),
        None => println!("No quotes found. Add one or sync with the server!"),
    }
    Ok(())
}

fn ensure_trailing_newline(mut s: String) -> String {
    if !s.ends_with('\n') {
        s.push('\n');
    }
    s
}

use clap::Parser;
use quill::application::{
    init, list_posts, list_tags, overview, show_post, BuildCatalogService, ConfigService,
    ExportService,
};
use quill::cli::{format_overview, format_post_list, format_post_view, format_tag_list};
use quill::cli::{Cli, Commands};
use quill::domain::PostCatalog;
use quill::error::QuillError;
use quill::infrastructure::{BlogRepository, FileSystemRepository};

fn main() {
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

/// Discover the blog root and ingest the post collection.
fn load_catalog() -> Result<PostCatalog, QuillError> {
    let repo = FileSystemRepository::discover()?;
    BuildCatalogService::new(repo).execute()
}

fn run(cli: Cli) -> Result<(), QuillError> {
    match cli.command {
        Some(Commands::Init { path, title }) => init::init(&path, &title),

        Some(Commands::List { tag, limit }) => {
            let catalog = load_catalog()?;
            let posts = list_posts(&catalog, tag.as_deref(), limit);

            if posts.is_empty() {
                // An unknown tag is an empty state, not an error
                match tag {
                    Some(tag) => println!("No posts tagged #{}", tag),
                    None => println!("No posts found"),
                }
            } else {
                print!("{}", format_post_list(&posts));
            }
            Ok(())
        }

        Some(Commands::Show { slug }) => {
            let catalog = load_catalog()?;
            let view = show_post(&catalog, &slug)?;
            print!("{}", format_post_view(&view));
            Ok(())
        }

        Some(Commands::Tags { top }) => {
            let catalog = load_catalog()?;
            let counts = list_tags(&catalog, top);
            print!("{}", format_tag_list(&counts));
            Ok(())
        }

        Some(Commands::Overview) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let catalog = BuildCatalogService::new(repo).execute()?;
            let view = overview(&catalog, &config);
            print!("{}", format_overview(&view, &config.title));
            Ok(())
        }

        Some(Commands::Export { output }) => {
            let repo = FileSystemRepository::discover()?;
            let catalog = BuildCatalogService::new(repo.clone()).execute()?;
            let path = ExportService::new(repo).execute(&catalog, output)?;
            println!("Exported post index to {}", path.display());
            Ok(())
        }

        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("title = {}", config.title);
                println!("description = {}", config.description);
                println!("content_dir = {}", config.content_dir);
                println!("recent_posts = {}", config.recent_posts);
                println!("popular_tags = {}", config.popular_tags);
                println!("created = {}", config.created.to_rfc3339());
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
                println!("Usage: quill config [--list | <key> [<value>]]");
                println!(
                    "Valid keys: title, description, content_dir, recent_posts, popular_tags, created"
                );
                Ok(())
            }
        }

        None => {
            println!("quill - Terminal content engine for a markdown blog");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

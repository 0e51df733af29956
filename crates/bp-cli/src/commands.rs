use anyhow::Context;
use colored::Colorize;

use bp_canvas::render;
use bp_service::{Backend, ServiceConfig};
use bp_store::BlueprintStore;
use bp_types::{parse_points, Blueprint};

use crate::ascii::AsciiSurface;
use crate::cli::*;

const CANVAS_WIDTH: f64 = 520.0;
const CANVAS_HEIGHT: f64 = 360.0;
const TERM_COLS: usize = 78;
const TERM_ROWS: usize = 26;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(&cli)?;
    let service = config.build()?;
    let store = BlueprintStore::new(service);

    match cli.command {
        Command::Authors => cmd_authors(&store).await,
        Command::List(args) => cmd_list(&store, args).await,
        Command::Show(args) => cmd_show(&store, args).await,
        Command::Top => cmd_top(&store).await,
        Command::Create(args) => cmd_create(&store, args).await,
        Command::Update(args) => cmd_update(&store, args).await,
        Command::Delete(args) => cmd_delete(&store, args).await,
    }
}

fn resolve_config(cli: &Cli) -> anyhow::Result<ServiceConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config file {path}"))?;
            ServiceConfig::from_toml(&text)?
        }
        None => ServiceConfig::from_env(),
    };
    if cli.remote {
        config.backend = Backend::Remote;
    }
    if let Some(url) = &cli.api_url {
        config.base_url = url.clone();
    }
    Ok(config)
}

async fn cmd_authors(store: &BlueprintStore) -> anyhow::Result<()> {
    let authors = store.list_authors().await?;
    if authors.is_empty() {
        println!("No authors.");
        return Ok(());
    }
    for author in authors {
        println!("{}", author.yellow());
    }
    Ok(())
}

async fn cmd_list(store: &BlueprintStore, args: ListArgs) -> anyhow::Result<()> {
    let items = store.list_by_author(&args.author).await?;
    if items.is_empty() {
        println!("No blueprints for {}.", args.author.yellow());
        return Ok(());
    }
    println!("{}'s blueprints:", args.author.yellow().bold());
    for bp in &items {
        println!("  {:<24} {:>6} points", bp.name, bp.point_count());
    }
    let total: usize = items.iter().map(Blueprint::point_count).sum();
    println!("Total points: {}", total.to_string().bold());
    Ok(())
}

async fn cmd_show(store: &BlueprintStore, args: ShowArgs) -> anyhow::Result<()> {
    let blueprint = store.get_one(&args.author, &args.name).await?;
    println!(
        "{} ({} points)",
        blueprint.to_string().cyan().bold(),
        blueprint.point_count()
    );
    let mut surface = AsciiSurface::new(CANVAS_WIDTH, CANVAS_HEIGHT, TERM_COLS, TERM_ROWS);
    render(&blueprint.points, &mut surface, CANVAS_WIDTH, CANVAS_HEIGHT);
    println!("{}", surface.to_text());
    Ok(())
}

async fn cmd_top(store: &BlueprintStore) -> anyhow::Result<()> {
    // The top view is derived from loaded lists, so load them all first.
    let authors = store.list_authors().await?;
    for author in &authors {
        store.list_by_author(author).await?;
    }
    let top = store.top_by_points();
    if top.is_empty() {
        println!("No blueprints.");
        return Ok(());
    }
    for (rank, bp) in top.iter().enumerate() {
        println!(
            "{}. {:<32} {:>6} points",
            rank + 1,
            bp.to_string().cyan(),
            bp.point_count()
        );
    }
    Ok(())
}

async fn cmd_create(store: &BlueprintStore, args: CreateArgs) -> anyhow::Result<()> {
    let points = parse_points(&args.points)?;
    let created = store
        .create(Blueprint::new(args.author, args.name, points))
        .await?;
    println!(
        "{} Created {} ({} points)",
        "✓".green().bold(),
        created.to_string().cyan(),
        created.point_count()
    );
    Ok(())
}

async fn cmd_update(store: &BlueprintStore, args: UpdateArgs) -> anyhow::Result<()> {
    let existing = store.get_one(&args.author, &args.name).await?;
    let points = match &args.points {
        Some(text) => parse_points(text)?,
        None => existing.points,
    };
    let payload = Blueprint::new(
        args.author.clone(),
        args.rename.clone().unwrap_or_else(|| args.name.clone()),
        points,
    );
    let updated = store.update(&args.author, &args.name, payload).await?;
    println!(
        "{} Updated {} ({} points)",
        "✓".green().bold(),
        updated.to_string().cyan(),
        updated.point_count()
    );
    Ok(())
}

async fn cmd_delete(store: &BlueprintStore, args: DeleteArgs) -> anyhow::Result<()> {
    let outcome = store.delete(&args.author, &args.name).await?;
    println!(
        "{} Deleted {}",
        "✓".green().bold(),
        outcome.deleted.to_string().cyan()
    );
    Ok(())
}

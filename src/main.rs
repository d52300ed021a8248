use anyhow::{anyhow, Result};
use bible_bowl_texts::{seed, SeasonStore};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bbowl", version, about = "Bible Bowl season text lookups")]
struct Cli {
    /// Base data directory holding season files (defaults to the committed
    /// dataset)
    #[arg(long, value_name = "DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the built-in season dataset into the data directory
    Seed,
    /// List seasons in a program directory
    List(ProgramArgs),
    /// Print one season as JSON
    Show(SeasonArgs),
    /// Print one block of a season as JSON
    Block(BlockArgs),
    /// Print a season's memory verses as JSON
    Verses(VersesArgs),
}

#[derive(Parser, Debug)]
struct ProgramArgs {
    /// Program namespace (unknown labels behave as the default program)
    #[arg(long)]
    program: Option<String>,
}

#[derive(Parser, Debug)]
struct SeasonArgs {
    /// Season id, e.g. 16
    id: String,

    #[command(flatten)]
    scope: ProgramArgs,
}

#[derive(Parser, Debug)]
struct BlockArgs {
    /// Season id, e.g. 16
    id: String,

    /// Block number, e.g. 1
    number: u32,

    #[command(flatten)]
    scope: ProgramArgs,
}

#[derive(Parser, Debug)]
struct VersesArgs {
    /// Season id, e.g. 16
    id: String,

    /// Emit the flattened {book, chapter, verse} list instead of the tree
    #[arg(long)]
    flat: bool,

    #[command(flatten)]
    scope: ProgramArgs,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let store = match cli.data_dir {
        Some(dir) => SeasonStore::new(dir),
        None => SeasonStore::default(),
    };

    match cli.command {
        Commands::Seed => cmd_seed(&store),
        Commands::List(args) => cmd_list(&store, &args),
        Commands::Show(args) => cmd_show(&store, &args),
        Commands::Block(args) => cmd_block(&store, &args),
        Commands::Verses(args) => cmd_verses(&store, &args),
    }
}

fn cmd_seed(store: &SeasonStore) -> Result<()> {
    let written = seed::write_default_dataset(store.data_dir())?;
    for path in written {
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_list(store: &SeasonStore, args: &ProgramArgs) -> Result<()> {
    for season in store.all_seasons(args.program.as_deref()) {
        println!("{}\t{}", season.id, season.name);
    }
    Ok(())
}

fn cmd_show(store: &SeasonStore, args: &SeasonArgs) -> Result<()> {
    let season = store
        .season_by_id(&args.id, args.scope.program.as_deref())
        .ok_or_else(|| anyhow!("season {} not found", args.id))?;
    println!("{}", serde_json::to_string_pretty(&season)?);
    Ok(())
}

fn cmd_block(store: &SeasonStore, args: &BlockArgs) -> Result<()> {
    let block = store
        .block(&args.id, args.number, args.scope.program.as_deref())
        .ok_or_else(|| anyhow!("block {} of season {} not found", args.number, args.id))?;
    println!("{}", serde_json::to_string_pretty(&block)?);
    Ok(())
}

fn cmd_verses(store: &SeasonStore, args: &VersesArgs) -> Result<()> {
    let program = args.scope.program.as_deref();
    if args.flat {
        let flat = store
            .memory_verses_flattened(&args.id, program)
            .ok_or_else(|| anyhow!("season {} not found", args.id))?;
        println!("{}", serde_json::to_string_pretty(&flat)?);
    } else {
        let tree = store
            .memory_verses(&args.id, program)
            .ok_or_else(|| anyhow!("season {} not found", args.id))?;
        println!("{}", serde_json::to_string_pretty(&tree)?);
    }
    Ok(())
}

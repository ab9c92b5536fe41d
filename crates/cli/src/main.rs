use anyhow::{Context, Result};
use assistant::{RecipeAssistant, Session, failure_message};
use clap::{Parser, Subcommand};
use colored::Colorize;
use completion::{ChatCompletionClient, CompletionConfig};
use recipe_store::{JsonFileLoader, RecipeCollection, load_or_empty};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Pantry Chef - conversational recipe assistant
#[derive(Parser)]
#[command(name = "pantry-chef")]
#[command(about = "Find recipes for the ingredients you have, then ask how to cook them", long_about = None)]
struct Cli {
    /// Path to a JSON recipe file
    #[arg(short, long, default_value = "recipes.json")]
    recipes: PathBuf,

    /// Override the completion model (PANTRY_CHEF_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Override the completion endpoint (PANTRY_CHEF_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Log every turn transition
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat (/reset clears the conversation, /quit exits)
    Chat,

    /// Send a single message and print the reply
    Ask {
        /// The message to send
        message: String,
    },

    /// List the recipes in the recipe file
    Recipes,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let recipes = Arc::new(load_recipes(&cli.recipes));

    match cli.command {
        Commands::Chat => {
            let assistant = build_assistant(recipes, cli.model, cli.base_url)?;
            handle_chat(assistant).await?
        }
        Commands::Ask { message } => {
            let assistant = build_assistant(recipes, cli.model, cli.base_url)?;
            handle_ask(assistant, &message).await
        }
        Commands::Recipes => handle_recipes(&recipes),
    }

    Ok(())
}

/// Load the recipe file; failures leave an empty collection and a diagnostic.
fn load_recipes(path: &Path) -> RecipeCollection {
    let start = Instant::now();
    let report = load_or_empty(&JsonFileLoader, path);

    match &report.diagnostic {
        Some(diagnostic) => println!("{} {}", "✗".red(), diagnostic),
        None => println!(
            "{} Successfully parsed {} recipes in {:?}",
            "✓".green(),
            report.recipes.len(),
            start.elapsed()
        ),
    }

    report.recipes
}

fn build_assistant(
    recipes: Arc<RecipeCollection>,
    model: Option<String>,
    base_url: Option<String>,
) -> Result<RecipeAssistant> {
    let mut config =
        CompletionConfig::from_env().context("Failed to configure the completion service")?;
    if let Some(model) = model {
        config.model = model;
    }
    if let Some(base_url) = base_url {
        config.base_url = base_url;
    }

    let client = ChatCompletionClient::new(config);
    Ok(RecipeAssistant::new(recipes, Arc::new(client)))
}

/// Handle the 'chat' command
async fn handle_chat(assistant: RecipeAssistant) -> Result<()> {
    println!(
        "{}",
        "Pantry Chef: tell me what's in your kitchen.".bold().blue()
    );
    println!("{}", "Type /reset to start over or /quit to leave.".dimmed());

    let mut session = Session::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"\n> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };
        let message = line.trim();

        match message {
            "" => continue,
            "/quit" | "/exit" => break,
            "/reset" => {
                session = Session::new();
                println!("{}", "Conversation cleared.".yellow());
                continue;
            }
            _ => {}
        }

        match assistant.handle_turn(&session, message).await {
            Ok(outcome) => {
                println!("{}", outcome.reply);
                session = outcome.session;
            }
            Err(e) => {
                tracing::warn!("Turn failed: {}", e);
                println!("{}", failure_message(&e).red());
            }
        }
    }

    println!("{}", "Happy cooking!".green());
    Ok(())
}

/// Handle the 'ask' command
async fn handle_ask(assistant: RecipeAssistant, message: &str) {
    match assistant.handle_turn(&Session::new(), message).await {
        Ok(outcome) => println!("{}", outcome.reply),
        Err(e) => println!("{}", failure_message(&e).red()),
    }
}

/// Handle the 'recipes' command
fn handle_recipes(recipes: &RecipeCollection) {
    if recipes.is_empty() {
        println!("No recipes loaded.");
        return;
    }

    print!("{}", "Recipes:\n".bold().blue());
    for (i, recipe) in recipes.recipes().iter().enumerate() {
        let dietary = if recipe.dietary.is_empty() {
            String::new()
        } else {
            format!(
                " [{}]",
                recipe.dietary.iter().cloned().collect::<Vec<_>>().join(", ")
            )
        };
        println!(
            "{}. {} ({}, {}){}",
            (i + 1).to_string().green(),
            recipe.name.bold(),
            recipe.cooking_time_label(),
            recipe.cuisine,
            dietary
        );
        println!("   {}", recipe.ingredients.join(", ").dimmed());
    }
}

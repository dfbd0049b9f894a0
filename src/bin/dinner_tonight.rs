// ABOUTME: Dinner Tonight CLI - reference consumer for the client library
// ABOUTME: Drives the stores and client against a running Dinner Tonight service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dinner Tonight contributors

//! # Dinner Tonight CLI
//!
//! Command-line consumer for the client library. Inventory reads and writes
//! go through [`InventoryStore`] and suggestions through
//! [`RecipeSuggestionStore`], so the CLI exercises the same state machinery a
//! UI would; catalog lookups call the [`ApiClient`] directly.
//!
//! Usage:
//! ```bash
//! # Show the current inventory
//! dinner-tonight inventory list
//!
//! # Add ingredient 42 with an amount
//! dinner-tonight inventory add 42 --quantity 2 --unit cups
//!
//! # What can we cook tonight?
//! dinner-tonight suggest --max-missing 1
//!
//! # Find an ingredient's catalog ID
//! dinner-tonight ingredients search "green beans"
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use dinner_tonight_client::api_client::ApiClient;
use dinner_tonight_client::config::ApiConfig;
use dinner_tonight_client::constants::{
    DEFAULT_INGREDIENT_PAGE_SIZE, DEFAULT_INGREDIENT_SEARCH_LIMIT, DEFAULT_RECIPE_PAGE_SIZE,
};
use dinner_tonight_client::models::Ingredient;
use dinner_tonight_client::stores::{InventoryStore, RecipeSuggestionStore};

#[derive(Parser)]
#[command(
    name = "dinner-tonight",
    about = "Dinner Tonight command-line client",
    long_about = "Command-line consumer for the Dinner Tonight service: manage the kitchen inventory and ask what you can cook with what you have."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// API base URL override
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Inventory management commands
    Inventory {
        #[command(subcommand)]
        action: InventoryCommand,
    },

    /// Suggest recipes cookable with the current inventory
    Suggest {
        /// Upper bound on missing ingredients (default 2)
        #[arg(long)]
        max_missing: Option<u32>,
    },

    /// Recipe catalog commands
    Recipes {
        #[command(subcommand)]
        action: RecipeCommand,
    },

    /// Ingredient catalog commands
    Ingredients {
        #[command(subcommand)]
        action: IngredientCommand,
    },
}

#[derive(Subcommand)]
enum InventoryCommand {
    /// List everything currently in the inventory
    List,

    /// Add an ingredient by catalog ID
    Add {
        /// Ingredient catalog ID
        ingredient_id: i64,

        /// Amount on hand
        #[arg(long)]
        quantity: Option<f64>,

        /// Unit for the amount (e.g. "g", "cups")
        #[arg(long)]
        unit: Option<String>,
    },

    /// Remove an ingredient by catalog ID
    Remove {
        /// Ingredient catalog ID
        ingredient_id: i64,
    },

    /// Update quantity and unit of an inventory item
    Update {
        /// Ingredient catalog ID
        ingredient_id: i64,

        /// New amount
        #[arg(long)]
        quantity: f64,

        /// New unit
        #[arg(long)]
        unit: String,
    },
}

#[derive(Subcommand)]
enum RecipeCommand {
    /// List recipes
    List {
        /// Number of recipes to skip
        #[arg(long, default_value = "0")]
        skip: u32,

        /// Maximum number of recipes to return
        #[arg(long, default_value_t = DEFAULT_RECIPE_PAGE_SIZE)]
        limit: u32,
    },

    /// Show one recipe in full
    Show {
        /// Recipe ID
        id: i64,
    },
}

#[derive(Subcommand)]
enum IngredientCommand {
    /// Search the catalog by name fragment
    Search {
        /// Name fragment to search for
        query: String,

        /// Maximum number of results
        #[arg(long, default_value_t = DEFAULT_INGREDIENT_SEARCH_LIMIT)]
        limit: u32,
    },

    /// List the catalog
    List {
        /// Number of ingredients to skip
        #[arg(long, default_value = "0")]
        skip: u32,

        /// Maximum number of ingredients to return
        #[arg(long, default_value_t = DEFAULT_INGREDIENT_PAGE_SIZE)]
        limit: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    // Load configuration
    let mut config = ApiConfig::from_env()?;
    if let Some(api_url) = cli.api_url {
        config.base_url = api_url;
        config.validate()?;
    }

    let client = ApiClient::new(&config);

    match cli.command {
        Command::Inventory { action } => run_inventory(client, action).await,
        Command::Suggest { max_missing } => run_suggest(client, max_missing).await,
        Command::Recipes { action } => run_recipes(client, action).await,
        Command::Ingredients { action } => run_ingredients(client, action).await,
    }
}

async fn run_inventory(client: ApiClient, action: InventoryCommand) -> Result<()> {
    let store = InventoryStore::new(client.clone());

    match action {
        InventoryCommand::List => {
            store.fetch().await;
            let state = store.state();
            if let Some(error) = state.error {
                anyhow::bail!("could not fetch inventory: {error}");
            }
            if state.items.is_empty() {
                println!("Inventory is empty.");
            }
            for item in state.items {
                match (item.quantity, item.unit.as_deref()) {
                    (Some(quantity), Some(unit)) => println!(
                        "{:>5}  {} ({quantity} {unit})",
                        item.ingredient_id, item.ingredient
                    ),
                    (Some(quantity), None) => {
                        println!("{:>5}  {} ({quantity})", item.ingredient_id, item.ingredient);
                    }
                    _ => println!("{:>5}  {}", item.ingredient_id, item.ingredient),
                }
            }
        }
        InventoryCommand::Add {
            ingredient_id,
            quantity,
            unit,
        } => {
            if store
                .add_ingredient(ingredient_id, quantity, unit.as_deref())
                .await
            {
                println!("Added ingredient {ingredient_id} to inventory.");
            } else {
                let error = store
                    .state()
                    .error
                    .unwrap_or_else(|| "Failed to add ingredient".to_owned());
                anyhow::bail!("{error}");
            }
        }
        InventoryCommand::Remove { ingredient_id } => {
            if store.remove_ingredient(ingredient_id).await {
                println!("Removed ingredient {ingredient_id} from inventory.");
            } else {
                let error = store
                    .state()
                    .error
                    .unwrap_or_else(|| "Failed to remove ingredient".to_owned());
                anyhow::bail!("{error}");
            }
        }
        InventoryCommand::Update {
            ingredient_id,
            quantity,
            unit,
        } => {
            let response = client
                .update_inventory_item(ingredient_id, quantity, &unit)
                .await?;
            println!("{}", response.message);
        }
    }

    Ok(())
}

async fn run_suggest(client: ApiClient, max_missing: Option<u32>) -> Result<()> {
    let store = RecipeSuggestionStore::new(client);
    if let Some(max_missing) = max_missing {
        store.set_max_missing(max_missing);
    }

    store.fetch_suggestions().await;
    let state = store.state();
    if let Some(error) = state.error {
        anyhow::bail!("could not fetch suggestions: {error}");
    }

    if state.suggestions.is_empty() {
        println!(
            "No recipes within {} missing ingredients.",
            state.max_missing
        );
    }
    for suggestion in state.suggestions {
        println!(
            "{:>5}  {}  {}/{} ingredients ({:.0}%)",
            suggestion.id,
            suggestion.name,
            suggestion.matched_ingredients,
            suggestion.total_ingredients,
            suggestion.match_percent
        );
        if !suggestion.missing_ingredients.is_empty() {
            println!("       missing: {}", suggestion.missing_ingredients.join(", "));
        }
    }

    Ok(())
}

async fn run_recipes(client: ApiClient, action: RecipeCommand) -> Result<()> {
    match action {
        RecipeCommand::List { skip, limit } => {
            for recipe in client.list_recipes(skip, limit).await? {
                match recipe.cooking_time {
                    Some(minutes) => println!("{:>5}  {} ({minutes} min)", recipe.id, recipe.name),
                    None => println!("{:>5}  {}", recipe.id, recipe.name),
                }
            }
        }
        RecipeCommand::Show { id } => {
            let recipe = client.get_recipe(id).await?;
            println!("{}", recipe.name);
            if let Some(description) = recipe.description {
                println!("{description}");
            }
            if let Some(minutes) = recipe.cooking_time {
                println!("Cooking time: {minutes} min");
            }
            if let Some(servings) = recipe.servings {
                println!("Serves: {servings}");
            }
            if let Some(instructions) = recipe.instructions {
                println!();
                println!("{instructions}");
            }
        }
    }

    Ok(())
}

async fn run_ingredients(client: ApiClient, action: IngredientCommand) -> Result<()> {
    let ingredients = match action {
        IngredientCommand::Search { query, limit } => {
            client.search_ingredients(&query, limit).await?
        }
        IngredientCommand::List { skip, limit } => client.list_ingredients(skip, limit).await?,
    };

    if ingredients.is_empty() {
        println!("No ingredients found.");
    }
    print_ingredients(&ingredients);

    Ok(())
}

fn print_ingredients(ingredients: &[Ingredient]) {
    for ingredient in ingredients {
        match ingredient.category.as_deref() {
            Some(category) => println!("{:>5}  {} [{category}]", ingredient.id, ingredient.name),
            None => println!("{:>5}  {}", ingredient.id, ingredient.name),
        }
    }
}

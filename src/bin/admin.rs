//! CLI administration tool for fresh-catalog.
//!
//! Provides commands for seeding demo catalog data, minting session cookies
//! for local testing, viewing statistics, and performing database operations
//! without going through the storefront.
//!
//! # Usage
//!
//! ```bash
//! # Seed demo catalog data
//! cargo run --bin admin -- seed
//!
//! # Mint a signed session cookie for user 42
//! cargo run --bin admin -- cookie 42
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required for database commands): PostgreSQL connection string
//! - `SESSION_SIGNING_SECRET` (required for `cookie`): session cookie HMAC key
//!
//! # Features
//!
//! - **Demo Data**: Populate categories, products, and banners for local work
//! - **Session Cookies**: Sign a cookie for any user id without a login flow
//! - **Statistics**: View catalog and merchandising counts
//! - **Database Tools**: Connection checks and info queries
//! - **Interactive Prompts**: User-friendly CLI with confirmation dialogs
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use fresh_catalog::domain::UserId;
use fresh_catalog::web::middleware::session::session_cookie_value;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;

/// CLI tool for managing fresh-catalog.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Seed demo catalog data
    Seed {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Print a signed session cookie for a user id
    Cookie {
        /// User id to embed in the cookie
        user_id: UserId,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Seed { yes } => handle_seed(&connect().await?, yes).await?,
        Commands::Cookie { user_id } => handle_cookie(user_id)?,
        Commands::Stats => handle_stats(&connect().await?).await?,
        Commands::Db { action } => handle_db_action(action, &connect().await?).await?,
    }

    Ok(())
}

/// Connects to the database from `DATABASE_URL`.
async fn connect() -> Result<PgPool> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

/// Seeds demo catalog data with a confirmation prompt.
///
/// # Flow
///
/// 1. Confirm the insert (unless `--yes` flag)
/// 2. Apply pending migrations
/// 3. Insert categories, product groups, and SKUs
/// 4. Insert homepage banners referencing the new SKUs
/// 5. Insert a handful of order lines so review feeds have content
///
/// The data is additive; running it twice produces duplicate rows.
async fn handle_seed(pool: &PgPool, skip_confirm: bool) -> Result<()> {
    println!("{}", "🌱 Seed Demo Catalog".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Insert demo rows into the connected database?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to apply migrations")?;

    let summary = seed_demo(pool).await?;

    println!();
    println!("{}", "✅ Demo data created!".green().bold());
    println!();
    println!(
        "  Categories: {}",
        summary.categories.to_string().bright_green().bold()
    );
    println!(
        "  Products:   {}",
        summary.skus.to_string().bright_green().bold()
    );
    println!(
        "  Banners:    {}",
        summary.banners.to_string().bright_green().bold()
    );
    println!(
        "  Reviews:    {}",
        summary.reviews.to_string().bright_green().bold()
    );
    println!();
    println!(
        "  Browse it at: {}",
        "http://localhost:3000/".bright_cyan()
    );
    println!();

    Ok(())
}

/// Row counts produced by [`seed_demo`].
struct SeedSummary {
    categories: usize,
    skus: usize,
    banners: usize,
    reviews: usize,
}

/// Inserts the demo catalog.
///
/// Six categories in the usual fresh-groceries arrangement, two or three
/// SKUs each, four carousel slots, two promotion banners, and per-category
/// shelf rows (three text links and one image tile).
async fn seed_demo(pool: &PgPool) -> Result<SeedSummary> {
    let fruit = insert_category(pool, "Fresh Fruit", "fruit").await?;
    let seafood = insert_category(pool, "Seafood", "seafood").await?;
    let meat = insert_category(pool, "Meat & Poultry", "meat").await?;
    let eggs = insert_category(pool, "Eggs & Dairy", "eggs").await?;
    let vegetables = insert_category(pool, "Fresh Vegetables", "vegetables").await?;
    let frozen = insert_category(pool, "Frozen Food", "frozen").await?;

    let berries = insert_group(pool, "Berries").await?;
    let citrus = insert_group(pool, "Citrus").await?;
    let fish = insert_group(pool, "Fish").await?;
    let shellfish = insert_group(pool, "Shellfish").await?;
    let beef = insert_group(pool, "Beef").await?;
    let poultry = insert_group(pool, "Poultry").await?;
    let dairy = insert_group(pool, "Dairy").await?;
    let greens = insert_group(pool, "Leafy Greens").await?;
    let dumplings = insert_group(pool, "Dumplings").await?;

    let skus = [
        insert_sku(pool, fruit, berries, "Strawberries 500g", "Sweet and fragrant", "500g", 1290, 86, 412).await?,
        insert_sku(pool, fruit, berries, "Blueberries 125g", "Small-batch, very ripe", "125g", 990, 54, 233).await?,
        insert_sku(pool, fruit, citrus, "Navel Oranges 2kg", "Thin skin, easy to peel", "2kg", 1590, 120, 367).await?,
        insert_sku(pool, seafood, fish, "Salmon Fillet 300g", "Chilled, never frozen", "300g", 3290, 40, 198).await?,
        insert_sku(pool, seafood, shellfish, "Tiger Prawns 400g", "Wild-caught", "400g", 4590, 25, 151).await?,
        insert_sku(pool, meat, beef, "Beef Short Ribs 500g", "Well marbled", "500g", 3890, 30, 176).await?,
        insert_sku(pool, meat, poultry, "Whole Chicken 1.2kg", "Free range", "1.2kg", 2190, 45, 289).await?,
        insert_sku(pool, eggs, poultry, "Free-Range Eggs x12", "Collected daily", "12 pack", 890, 200, 540).await?,
        insert_sku(pool, eggs, dairy, "Whole Milk 1L", "Pasteurized, non-homogenized", "1L", 450, 150, 623).await?,
        insert_sku(pool, vegetables, greens, "Baby Spinach 250g", "Washed and ready", "250g", 590, 90, 334).await?,
        insert_sku(pool, vegetables, greens, "Romaine Hearts x2", "Crisp and sweet", "2 pack", 690, 75, 241).await?,
        insert_sku(pool, frozen, dumplings, "Pork Dumplings 720g", "36 pieces", "720g", 1890, 60, 455).await?,
        insert_sku(pool, frozen, dumplings, "Veggie Dumplings 720g", "36 pieces", "720g", 1690, 48, 302).await?,
    ];

    // Carousel takes the four best sellers, promotions link to listings.
    let mut banners = 0;
    for (i, sku_id) in [skus[8], skus[7], skus[11], skus[2]].iter().enumerate() {
        insert_carousel_banner(pool, *sku_id, i as i32).await?;
        banners += 1;
    }

    insert_promotion_banner(pool, "Weekend Deals", "/list/1/1", 0).await?;
    insert_promotion_banner(pool, "Fresh This Morning", "/list/5/1?sort=hot", 1).await?;
    banners += 2;

    // Each homepage shelf shows its category's SKUs: the first as an
    // image tile, the rest as text links.
    for (category_id, category_skus) in [
        (fruit, &skus[0..3]),
        (seafood, &skus[3..5]),
        (meat, &skus[5..7]),
        (eggs, &skus[7..9]),
        (vegetables, &skus[9..11]),
        (frozen, &skus[11..13]),
    ] {
        insert_shelf_banner(pool, category_id, category_skus[0], 1, 0).await?;
        banners += 1;

        for (i, sku_id) in category_skus.iter().enumerate() {
            insert_shelf_banner(pool, category_id, *sku_id, 0, i as i32).await?;
            banners += 1;
        }
    }

    // A few finished order lines so detail pages show reviews.
    let reviews = [
        (1001, skus[0], 2, 1290, "Arrived cold and very fresh, kids loved them."),
        (1001, skus[8], 1, 450, "Tastes like milk used to taste."),
        (1002, skus[3], 1, 3290, "Great color, no smell, seared perfectly."),
        (1003, skus[11], 3, 1890, "Weeknight savior. Will order again."),
        (1004, skus[0], 1, 1290, ""),
    ];
    for (order_id, sku_id, count, price_cents, comment) in reviews {
        insert_order_item(pool, order_id, sku_id, count, price_cents, comment).await?;
    }

    Ok(SeedSummary {
        categories: 6,
        skus: skus.len(),
        banners,
        reviews: reviews.len(),
    })
}

async fn insert_category(pool: &PgPool, name: &str, slug: &str) -> Result<i64> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO categories (name, logo, image) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(slug)
    .bind(format!("/static/img/category-{slug}.png"))
    .fetch_one(pool)
    .await?;

    Ok(id)
}

async fn insert_group(pool: &PgPool, name: &str) -> Result<i64> {
    let id =
        sqlx::query_scalar::<_, i64>("INSERT INTO product_groups (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(pool)
            .await?;

    Ok(id)
}

#[allow(clippy::too_many_arguments)]
async fn insert_sku(
    pool: &PgPool,
    category_id: i64,
    group_id: i64,
    name: &str,
    brief: &str,
    unit: &str,
    price_cents: i64,
    stock: i32,
    sales: i64,
) -> Result<i64> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO product_skus \
         (category_id, group_id, name, brief, unit, price_cents, image, stock, sales) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING id",
    )
    .bind(category_id)
    .bind(group_id)
    .bind(name)
    .bind(brief)
    .bind(unit)
    .bind(price_cents)
    .bind(format!(
        "/static/img/sku-{}.jpg",
        name.to_lowercase().replace([' ', '.'], "-")
    ))
    .bind(stock)
    .bind(sales)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

async fn insert_carousel_banner(pool: &PgPool, sku_id: i64, display_index: i32) -> Result<()> {
    sqlx::query(
        "INSERT INTO carousel_banners (sku_id, image, display_index) VALUES ($1, $2, $3)",
    )
    .bind(sku_id)
    .bind(format!("/static/img/carousel-{display_index}.jpg"))
    .bind(display_index)
    .execute(pool)
    .await?;

    Ok(())
}

async fn insert_promotion_banner(
    pool: &PgPool,
    name: &str,
    url: &str,
    display_index: i32,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO promotion_banners (name, url, image, display_index) VALUES ($1, $2, $3, $4)",
    )
    .bind(name)
    .bind(url)
    .bind(format!("/static/img/promotion-{display_index}.jpg"))
    .bind(display_index)
    .execute(pool)
    .await?;

    Ok(())
}

async fn insert_shelf_banner(
    pool: &PgPool,
    category_id: i64,
    sku_id: i64,
    display_kind: i16,
    display_index: i32,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO category_shelf_banners (category_id, sku_id, display_kind, display_index) \
         VALUES ($1, $2, $3, $4)",
    )
    .bind(category_id)
    .bind(sku_id)
    .bind(display_kind)
    .bind(display_index)
    .execute(pool)
    .await?;

    Ok(())
}

async fn insert_order_item(
    pool: &PgPool,
    order_id: i64,
    sku_id: i64,
    count: i32,
    price_cents: i64,
    comment: &str,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO order_items (order_id, sku_id, count, price_cents, comment) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(order_id)
    .bind(sku_id)
    .bind(count)
    .bind(price_cents)
    .bind(comment)
    .execute(pool)
    .await?;

    Ok(())
}

/// Prints a signed session cookie for the given user id.
///
/// The storefront has no login flow of its own; sessions are established
/// by the account service. This command signs a cookie with the same
/// `SESSION_SIGNING_SECRET` so a local instance can be exercised as a
/// logged-in user.
fn handle_cookie(user_id: UserId) -> Result<()> {
    let secret =
        std::env::var("SESSION_SIGNING_SECRET").context("SESSION_SIGNING_SECRET must be set")?;

    let value = session_cookie_value(user_id, &secret);

    println!("{}", "🍪 Session Cookie".bright_blue().bold());
    println!();
    println!("  User id: {}", user_id.to_string().cyan());
    println!("  Cookie:  {}", format!("session={value}").bright_yellow());
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -H \"Cookie: session={}\" http://localhost:3000/",
        value.bright_yellow()
    );
    println!();

    Ok(())
}

/// Displays catalog statistics.
///
/// Shows:
/// - Category and product counts
/// - Homepage banner counts
/// - Number of order lines carrying review text
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let categories: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(pool)
        .await?;

    let products: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM product_skus")
        .fetch_one(pool)
        .await?;

    let on_sale: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM product_skus WHERE on_sale")
        .fetch_one(pool)
        .await?;

    let carousel: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM carousel_banners")
        .fetch_one(pool)
        .await?;

    let promotions: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM promotion_banners")
        .fetch_one(pool)
        .await?;

    let reviews: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM order_items WHERE comment <> ''")
        .fetch_one(pool)
        .await?;

    println!(
        "  Categories:     {}",
        categories.to_string().bright_green().bold()
    );
    println!(
        "  Products:       {} ({} on sale)",
        products.to_string().bright_green().bold(),
        on_sale.to_string().green()
    );
    println!(
        "  Carousel slots: {}",
        carousel.to_string().bright_green().bold()
    );
    println!(
        "  Promotions:     {}",
        promotions.to_string().bright_green().bold()
    );
    println!(
        "  Reviews:        {}",
        reviews.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}

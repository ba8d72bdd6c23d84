use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use broadsheet::app::App;
use broadsheet::config::Config;
use broadsheet::storage::{Database, DatabaseError};
use broadsheet::theme::ThemeVariant;
use broadsheet::ui;

/// Get the config directory path (~/.config/broadsheet/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    let config_dir = PathBuf::from(home).join(".config").join("broadsheet");
    Ok(config_dir)
}

#[derive(Parser, Debug)]
#[command(name = "broadsheet", about = "Terminal news reader")]
struct Args {
    /// Reset database (delete and recreate)
    #[arg(long)]
    reset_db: bool,

    /// Theme to start with ("dark" or "light"), overriding the saved preference
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Set up config directory
    let config_dir = get_config_dir()?;
    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
        println!("Created config directory: {}", config_dir.display());
    }

    // Directory permissions on Unix (user-only access)
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        match std::fs::metadata(&config_dir) {
            Ok(metadata) => {
                let mut perms = metadata.permissions();
                perms.set_mode(0o700);
                if let Err(e) = std::fs::set_permissions(&config_dir, perms) {
                    tracing::warn!(
                        path = %config_dir.display(),
                        error = %e,
                        "Failed to set config directory permissions to 0700"
                    );
                }
            }
            Err(e) => {
                tracing::warn!(
                    path = %config_dir.display(),
                    error = %e,
                    "Failed to read config directory metadata"
                );
            }
        }
    }

    let config_path = config_dir.join("config.toml");
    let db_path = config_dir.join("news.db");

    let config = Config::load(&config_path).context("Failed to load configuration")?;

    // Handle --reset-db flag
    if args.reset_db && db_path.exists() {
        std::fs::remove_file(&db_path).context("Failed to delete database")?;
        println!("Database reset.");
    }

    // Open database
    let db_path_str = db_path
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Invalid UTF-8 in database path"))?;
    let db = match Database::open(db_path_str).await {
        Ok(db) => db,
        Err(DatabaseError::InstanceLocked) => {
            eprintln!(
                "Error: Another instance of broadsheet appears to be running. Please close it and try again."
            );
            std::process::exit(1);
        }
        Err(e) => {
            return Err(anyhow::anyhow!("Failed to open database: {}", e));
        }
    };

    // Theme resolution: CLI flag beats the saved preference, which beats the
    // config file default.
    let theme_variant = resolve_theme(&args, &config, &db).await;

    let mut app = App::new(db, config, theme_variant);

    ui::run(&mut app).await?;

    println!("Goodbye!");
    Ok(())
}

async fn resolve_theme(args: &Args, config: &Config, db: &Database) -> ThemeVariant {
    if let Some(name) = &args.theme {
        match ThemeVariant::from_str_name(name) {
            Some(variant) => return variant,
            None => eprintln!("Warning: unknown theme '{}', ignoring", name),
        }
    }

    match db.get_preference("theme.variant").await {
        Ok(Some(stored)) => {
            if let Some(variant) = ThemeVariant::from_str_name(&stored) {
                return variant;
            }
            tracing::warn!(value = %stored, "Unrecognized stored theme, falling back");
        }
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "Failed to read theme preference"),
    }

    ThemeVariant::from_str_name(&config.theme).unwrap_or(ThemeVariant::Dark)
}

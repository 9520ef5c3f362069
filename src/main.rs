//! Command-line builder for link-in-bio pages.
//!
//! Each invocation resumes the saved draft, applies one change and saves the
//! draft again if anything changed.
//!
//! # Usage
//!
//! ```bash
//! # Add and arrange links
//! linkbio link add "Blog" example.com
//! linkbio link move 2 0
//! linkbio link toggle <ID>
//!
//! # Profile and social links
//! linkbio profile name "Ada Lovelace"
//! linkbio social set github github.com/ada
//!
//! # Themes and preview
//! linkbio theme apply dark
//! linkbio preview --mode mobile
//! linkbio --json preview
//! ```
//!
//! # Environment Variables
//!
//! See [`linkbio::config`] for `LINKBIO_DATA_DIR`, `LINKBIO_DEFAULT_THEME`,
//! `LINKBIO_PREVIEW_MODE`, `RUST_LOG` and `LOG_FORMAT`.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use linkbio::config::{Config, load_from_env};
use linkbio::prelude::*;
use linkbio::utils::sanitize_url;

/// Build a link-in-bio page from the terminal.
#[derive(Parser)]
#[command(name = "linkbio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage custom links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Edit the profile header
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Manage social links
    Social {
        #[command(subcommand)]
        action: SocialAction,
    },

    /// List and apply themes
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },

    /// Show the page preview
    Preview {
        /// Viewport to preview (desktop or mobile)
        #[arg(short, long)]
        mode: Option<PreviewMode>,
    },

    /// Show a summary of the saved draft
    Status,

    /// Discard the saved draft
    Reset {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Add a link; URLs without a scheme get https://
    Add { title: String, url: String },

    /// List all links
    List,

    /// Change a link's title or URL
    Update {
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        url: Option<String>,
    },

    /// Remove a link
    Remove { id: String },

    /// Move the link at FROM so it ends up at TO
    Move { from: usize, to: usize },

    /// Show or hide a link on the page
    Toggle { id: String },
}

/// Profile subcommands.
#[derive(Subcommand)]
enum ProfileAction {
    /// Set the display name
    Name { name: String },

    /// Set the bio text
    Bio { bio: String },

    /// Set the profile image reference; omit to clear it
    Image { reference: Option<String> },
}

/// Social link subcommands.
#[derive(Subcommand)]
enum SocialAction {
    /// Set the URL for a platform
    Set { platform: SocialPlatform, url: String },

    /// Remove a platform
    Remove { platform: SocialPlatform },
}

/// Theme subcommands.
#[derive(Subcommand)]
enum ThemeAction {
    /// List available themes
    List,

    /// Select a theme
    Apply { id: String },

    /// Show the active theme
    Show,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = load_from_env().context("Invalid configuration")?;
    init_tracing(&config);
    config.print_summary();

    let preferences = Arc::new(FilePreferenceStore::new(config.preferences_path()));
    let registry = ThemeRegistry::new(preferences).with_default_theme(&config.default_theme)?;
    let drafts = JsonDraftStore::new(config.draft_path());

    let output = Output { json: cli.json };

    if let Commands::Reset { yes } = cli.command {
        return reset(&drafts, yes, &output);
    }

    let mut session = open_session(registry, &drafts)?.with_preview_mode(config.preview_mode);

    if let Err(e) = dispatch(cli.command, &mut session, &output) {
        if let Some(builder_error) = e.downcast_ref::<BuilderError>() {
            output.error(builder_error);
            std::process::exit(1);
        }
        return Err(e);
    }

    if session.is_dirty() {
        session
            .save_to(&drafts)
            .with_context(|| format!("Failed to save draft to {}", drafts.path().display()))?;
    }

    Ok(())
}

/// Initializes the tracing subscriber. Logs go to stderr so JSON output on
/// stdout stays parseable.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Resumes the saved draft or starts an empty session.
fn open_session(registry: ThemeRegistry, drafts: &JsonDraftStore) -> Result<BuilderSession> {
    BuilderSession::open(registry, drafts, Box::new(RandomIdGenerator)).with_context(|| {
        format!(
            "Failed to resume draft {}; run `linkbio reset` to start over",
            drafts.path().display()
        )
    })
}

/// Dispatches a command against the session.
fn dispatch(command: Commands, session: &mut BuilderSession, output: &Output) -> Result<()> {
    match command {
        Commands::Link { action } => handle_link_action(action, session, output),
        Commands::Profile { action } => handle_profile_action(action, session, output),
        Commands::Social { action } => handle_social_action(action, session, output),
        Commands::Theme { action } => handle_theme_action(action, session, output),
        Commands::Preview { mode } => {
            if let Some(mode) = mode
                && session.preview_state().mode != mode
            {
                session.toggle_preview_mode();
            }
            show_preview(session, output)
        }
        Commands::Status => show_status(session, output),
        Commands::Reset { .. } => anyhow::bail!("reset must run before a session is opened"),
    }
}

fn handle_link_action(action: LinkAction, session: &mut BuilderSession, output: &Output) -> Result<()> {
    match action {
        LinkAction::Add { title, url } => {
            let link = session.add_link(&title, &sanitize_url(&url))?;
            output.done(&link, || format!("Added {} ({})", link.title.cyan(), link.id.bright_black()));
        }
        LinkAction::List => list_links(session, output),
        LinkAction::Update { id, title, url } => {
            let patch = LinkPatch {
                title,
                url: url.as_deref().map(sanitize_url),
                is_active: None,
            };
            if patch.is_empty() {
                anyhow::bail!("Nothing to update: pass --title and/or --url");
            }
            let changed = session.update_link(&id, patch)?;
            match session.link_collection().get(&id) {
                Some(link) if changed => output.done(link, || format!("Updated {}", id.cyan())),
                Some(link) => output.done(link, || format!("{} is unchanged", id.cyan())),
                None => output.warn(&format!("No link with id {id}")),
            }
        }
        LinkAction::Remove { id } => {
            if session.remove_link(&id) {
                output.done(&session.links(), || format!("Removed {}", id.cyan()));
            } else {
                output.warn(&format!("No link with id {id}"));
            }
        }
        LinkAction::Move { from, to } => {
            session.reorder_links(from, to)?;
            output.done(&session.links(), || format!("Moved link {from} to position {to}"));
        }
        LinkAction::Toggle { id } => match session.toggle_link(&id) {
            Some(is_active) => {
                let state = if is_active { "visible".green() } else { "hidden".yellow() };
                output.done(&session.link_collection().get(&id), || {
                    format!("Link {} is now {}", id.cyan(), state)
                });
            }
            None => output.warn(&format!("No link with id {id}")),
        },
    }

    Ok(())
}

fn handle_profile_action(
    action: ProfileAction,
    session: &mut BuilderSession,
    output: &Output,
) -> Result<()> {
    match action {
        ProfileAction::Name { name } => session.set_display_name(&name),
        ProfileAction::Bio { bio } => session.set_bio(&bio),
        ProfileAction::Image { reference } => session.set_profile_image(reference.as_deref()),
    }

    output.done(session.profile(), || "Profile updated".to_string());
    Ok(())
}

fn handle_social_action(
    action: SocialAction,
    session: &mut BuilderSession,
    output: &Output,
) -> Result<()> {
    match action {
        SocialAction::Set { platform, url } => {
            session.set_social_link(platform, &url)?;
            output.done(session.social_links(), || format!("Set {}", platform.to_string().cyan()));
        }
        SocialAction::Remove { platform } => {
            if session.remove_social_link(platform) {
                output.done(session.social_links(), || {
                    format!("Removed {}", platform.to_string().cyan())
                });
            } else {
                output.warn(&format!("No {platform} link set"));
            }
        }
    }

    Ok(())
}

fn handle_theme_action(
    action: ThemeAction,
    session: &mut BuilderSession,
    output: &Output,
) -> Result<()> {
    match action {
        ThemeAction::List => {
            let themes = session.registry().available_themes();
            let active = session.active_theme().id;

            if output.json {
                output.print_json(&themes);
                return Ok(());
            }

            println!("{}", "🎨 Themes".bright_blue().bold());
            println!();
            for theme in themes {
                let marker = if theme.id == active { "●".green() } else { "○".bright_black() };
                println!(
                    "  {} {:<10} {:<10} {}",
                    marker,
                    theme.id.cyan(),
                    theme.name,
                    theme.colors.primary.bright_black()
                );
            }
            println!();
        }
        ThemeAction::Apply { id } => {
            let theme = session.apply_theme(&id)?;
            output.done(theme, || format!("Theme set to {}", theme.name.cyan()));
        }
        ThemeAction::Show => {
            let theme = session.active_theme();
            output.done(theme, || {
                format!(
                    "{} ({}) primary {} background {} text {}",
                    theme.name.cyan(),
                    theme.id,
                    theme.colors.primary,
                    theme.colors.background,
                    theme.colors.text
                )
            });
        }
    }

    Ok(())
}

fn list_links(session: &BuilderSession, output: &Output) {
    let links = session.links();

    if output.json {
        output.print_json(&links);
        return;
    }

    println!("{}", "🔗 Links".bright_blue().bold());
    println!();

    if links.is_empty() {
        println!("{}", "  No links yet".yellow());
        println!();
        println!("  Add one with: {}", "linkbio link add <TITLE> <URL>".bright_cyan());
        return;
    }

    println!(
        "  {:<3} {:<14} {:<24} {:<8} {}",
        "#".bright_white().bold(),
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Status".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in links {
        let status = if link.is_active { "ACTIVE".green() } else { "HIDDEN".yellow() };
        println!(
            "  {:<3} {:<14} {:<24} {:<8} {}",
            link.order.to_string().bright_black(),
            link.id.bright_black(),
            link.title.cyan(),
            status,
            link.url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();
}

fn show_preview(session: &BuilderSession, output: &Output) -> Result<()> {
    let payload = PreviewComposer::new().compose(session);

    if output.json {
        output.print_json(&payload);
        return Ok(());
    }

    let profile = session.profile();
    println!(
        "{} {}",
        "👀 Preview".bright_blue().bold(),
        format!("[{} · {}]", payload.mode, payload.theme.name).bright_black()
    );
    println!();

    let name = if profile.display_name.is_empty() {
        "(no display name)"
    } else {
        profile.display_name.as_str()
    };
    println!("  {}", name.bright_white().bold());
    if !profile.bio.is_empty() {
        println!("  {}", profile.bio);
    }
    if !session.social_links().is_empty() {
        let platforms: Vec<_> = session.social_links().keys().map(|p| p.as_str()).collect();
        println!("  {}", platforms.join(" · ").bright_black());
    }
    println!();

    if payload.links.is_empty() {
        println!("{}", "  No active links".yellow());
    }
    for link in &payload.links {
        println!(
            "  [{:<9}] {:<24} {}",
            link.icon.as_str(),
            link.title.cyan(),
            link.display_url.bright_black()
        );
    }
    println!();

    Ok(())
}

fn show_status(session: &BuilderSession, output: &Output) -> Result<()> {
    #[derive(Serialize)]
    struct Status<'a> {
        display_name: &'a str,
        links: usize,
        active_links: usize,
        social_links: usize,
        theme: &'a str,
    }

    let status = Status {
        display_name: &session.profile().display_name,
        links: session.link_collection().len(),
        active_links: session.link_collection().active_links().count(),
        social_links: session.social_links().len(),
        theme: session.active_theme().id,
    };

    if output.json {
        output.print_json(&status);
        return Ok(());
    }

    println!("{}", "📋 Draft".bright_blue().bold());
    println!();
    println!("  Name:    {}", status.display_name.cyan());
    println!(
        "  Links:   {} ({} active)",
        status.links.to_string().bright_white().bold(),
        status.active_links
    );
    println!("  Social:  {}", status.social_links);
    println!("  Theme:   {}", status.theme.cyan());
    println!();

    Ok(())
}

/// Deletes the saved draft after confirmation.
fn reset(drafts: &JsonDraftStore, skip_confirm: bool, output: &Output) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Discard the saved draft?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    drafts
        .clear()
        .with_context(|| format!("Failed to remove {}", drafts.path().display()))?;
    output.done(&serde_json::json!({ "reset": true }), || "Draft discarded".to_string());
    Ok(())
}

/// Renders command results as colored text or JSON.
struct Output {
    json: bool,
}

impl Output {
    fn done<T: Serialize + ?Sized>(&self, value: &T, message: impl FnOnce() -> String) {
        if self.json {
            self.print_json(value);
        } else {
            println!("{} {}", "✅".green(), message());
        }
    }

    fn warn(&self, message: &str) {
        if self.json {
            self.print_json(&serde_json::json!({ "warning": message }));
        } else {
            println!("{} {}", "⚠️ ".yellow(), message.yellow());
        }
    }

    fn error(&self, error: &BuilderError) {
        if self.json {
            self.print_json(&error.to_body());
        } else {
            eprintln!("{} {}", "❌".red(), error.to_string().red());
        }
    }

    fn print_json<T: Serialize + ?Sized>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(text) => println!("{text}"),
            Err(e) => tracing::error!(error = %e, "Failed to serialize output"),
        }
    }
}

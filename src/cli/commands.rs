use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, Result, bail};
use clap::{Parser, Subcommand};
use scraper::Html;
use uuid::Uuid;

use crate::bridge::{Bridge, DocumentSource};
use crate::clipboard::copy_formatted_context;
use crate::error::BridgeError;
use crate::extract::Injection;
use crate::models::{Context, Platform};
use crate::parsers::{conversation_stats, format_for_injection};

/// Env override for the data directory; mostly for tests
const DATA_DIR_ENV: &str = "AI_CONTEXT_BRIDGE_DIR";

#[derive(Parser)]
#[command(name = "ai-context-bridge")]
#[command(version = "0.1.0")]
#[command(about = "Carry AI chat conversations between platforms", long_about = None)]
pub struct Cli {
    /// Directory holding contexts.json and the pending handoff slot
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract the conversation from a saved page and store it
    Capture {
        /// Platform the page belongs to (chatgpt, claude, gemini, perplexity)
        #[arg(value_parser = parse_platform)]
        platform: Platform,
        /// Path to the page HTML
        file: PathBuf,
        /// URL the page was saved from
        #[arg(long)]
        url: Option<String>,
        /// Title to store instead of the extracted one
        #[arg(long)]
        title: Option<String>,
    },
    /// List stored contexts, most recent first
    List,
    /// Show one stored context in full
    Show { id: Uuid },
    /// Show the most recently stored context
    Latest,
    /// Plan an injection of the latest context into a page's composer
    Paste {
        #[arg(value_parser = parse_platform)]
        platform: Platform,
        /// Path to the destination page HTML
        file: PathBuf,
        /// Also copy the formatted context to the system clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Capture a page and publish the context for another platform
    Send {
        /// Platform the page belongs to
        #[arg(value_parser = parse_platform)]
        source: Platform,
        /// Path to the page HTML
        file: PathBuf,
        /// Platform the context is addressed to
        #[arg(value_parser = parse_platform)]
        target: Platform,
        /// URL the page was saved from
        #[arg(long)]
        url: Option<String>,
    },
    /// Consume a pending handoff and plan its injection
    Pending {
        /// Platform acting as the destination
        #[arg(value_parser = parse_platform)]
        platform: Platform,
        /// Path to the destination page HTML; re-read while waiting for the
        /// composer. Without it the pending context is printed instead.
        file: Option<PathBuf>,
        /// How long to wait for the composer to appear
        #[arg(long, default_value_t = 3000)]
        timeout_ms: u64,
    },
    /// Delete one stored context
    Delete { id: Uuid },
    /// Delete every stored context
    Clear,
    /// Write a versioned backup snapshot of the store
    Export {
        /// Output path; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Import a backup snapshot
    Import { file: PathBuf },
    /// Show statistics about the stored contexts
    Stats,
}

fn parse_platform(s: &str) -> std::result::Result<Platform, String> {
    s.parse()
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir)?;

    match cli.command {
        Some(Commands::Capture { platform, file, url, title }) => {
            capture(&data_dir, platform, &file, url, title)
        }
        Some(Commands::List) => list(&data_dir),
        Some(Commands::Show { id }) => show(&data_dir, id),
        Some(Commands::Latest) => latest(&data_dir),
        Some(Commands::Paste { platform, file, copy }) => paste(&data_dir, platform, &file, copy),
        Some(Commands::Send { source, file, target, url }) => {
            send(&data_dir, source, &file, target, url)
        }
        Some(Commands::Pending { platform, file, timeout_ms }) => {
            pending(&data_dir, platform, file, timeout_ms)
        }
        Some(Commands::Delete { id }) => delete(&data_dir, id),
        Some(Commands::Clear) => clear(&data_dir),
        Some(Commands::Export { output }) => export(&data_dir, output),
        Some(Commands::Import { file }) => import(&data_dir, &file),
        Some(Commands::Stats) => stats(&data_dir),
        None => {
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

/// Flag beats env beats the platform data directory.
fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let base = dirs::data_dir().context("Could not determine the platform data directory")?;
    Ok(base.join("ai-context-bridge"))
}

fn read_document(path: &Path) -> Result<Html> {
    let html = fs::read_to_string(path)
        .with_context(|| format!("Failed to read page file: {}", path.display()))?;
    Ok(Html::parse_document(&html))
}

fn open_bridge(data_dir: &Path) -> Result<Bridge> {
    Bridge::open(data_dir).context("Failed to open the context store")
}

fn capture(
    data_dir: &Path,
    platform: Platform,
    file: &Path,
    url: Option<String>,
    title: Option<String>,
) -> Result<()> {
    let mut bridge = open_bridge(data_dir)?;
    let doc = read_document(file)?;
    let url = url.unwrap_or_default();

    match bridge.capture(platform, &doc, &url) {
        Ok(mut context) => {
            if let Some(title) = title {
                let mut draft = crate::models::ContextDraft::from(context);
                draft.title = Some(title);
                context = bridge.store_mut().save(draft)?;
            }
            println!("Captured \"{}\" from {}", context.title, platform.display_name());
            println!("  {} messages, id {}", context.messages.len(), context.id);
            Ok(())
        }
        // Not a conversation page; nothing was saved, nothing is broken
        Err(e) if e.is_soft() => {
            eprintln!("Warning: {e}");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn list(data_dir: &Path) -> Result<()> {
    let bridge = open_bridge(data_dir)?;
    let contexts = bridge.store().get_all();

    if contexts.is_empty() {
        println!("No saved contexts");
        return Ok(());
    }

    for context in contexts {
        println!(
            "{}  {}  [{}] {} ({} messages)",
            context.id,
            context.created_at.format("%Y-%m-%d %H:%M"),
            context.source.id(),
            context.title,
            context.messages.len()
        );
    }
    Ok(())
}

fn show(data_dir: &Path, id: Uuid) -> Result<()> {
    let bridge = open_bridge(data_dir)?;
    let context = bridge
        .store()
        .get_by_id(id)
        .with_context(|| format!("No context with id {id}"))?;
    print_context(context);
    Ok(())
}

fn latest(data_dir: &Path) -> Result<()> {
    let bridge = open_bridge(data_dir)?;
    match bridge.store().get_latest() {
        Some(context) => print_context(context),
        None => println!("No saved contexts"),
    }
    Ok(())
}

fn print_context(context: &Context) {
    println!("{} ({})", context.title, context.source.display_name());
    println!("  id: {}", context.id);
    if !context.url.is_empty() {
        println!("  url: {}", context.url);
    }
    println!("  captured: {}", context.created_at.format("%Y-%m-%d %H:%M:%S"));
    println!();
    for message in &context.messages {
        println!("{}: {}", message.role.label(), message.content);
    }
}

fn paste(data_dir: &Path, platform: Platform, file: &Path, copy: bool) -> Result<()> {
    let bridge = open_bridge(data_dir)?;
    let doc = read_document(file)?;

    let Some(injection) = bridge.paste_latest(platform, &doc)? else {
        println!("No saved context to paste");
        return Ok(());
    };

    print_injection(&injection)?;
    if copy {
        copy_formatted_context(&injection.text)?;
        println!("Copied formatted context to the clipboard");
    }
    Ok(())
}

fn print_injection(injection: &Injection) -> Result<()> {
    let json = serde_json::to_string_pretty(injection)?;
    println!("{json}");
    Ok(())
}

fn send(
    data_dir: &Path,
    source: Platform,
    file: &Path,
    target: Platform,
    url: Option<String>,
) -> Result<()> {
    if source == target {
        bail!("Source and target platform are the same");
    }

    let mut bridge = open_bridge(data_dir)?;
    let doc = read_document(file)?;
    let url = url.unwrap_or_default();

    let published = bridge.send_to_platform(source, &doc, &url, target)?;
    println!(
        "Published \"{}\" for {}",
        published.context.title,
        target.display_name()
    );
    println!("  open {}", published.open_url);
    Ok(())
}

/// Re-reads the destination page while waiting for its composer to mount.
struct FileSource {
    path: PathBuf,
}

impl DocumentSource for FileSource {
    fn fetch(&mut self) -> Option<Html> {
        fs::read_to_string(&self.path).ok().map(|html| Html::parse_document(&html))
    }
}

fn pending(
    data_dir: &Path,
    platform: Platform,
    file: Option<PathBuf>,
    timeout_ms: u64,
) -> Result<()> {
    let bridge = open_bridge(data_dir)?;

    let Some(path) = file else {
        // No page to inject into: just drain the slot and print the context
        match bridge.consume_pending(platform)? {
            Some(context) => {
                println!("{}", format_for_injection(&context));
            }
            None => println!("No pending context for {}", platform.display_name()),
        }
        return Ok(());
    };

    let mut source = FileSource { path };
    let timeout = Duration::from_millis(timeout_ms);
    let interval = Duration::from_millis(250);

    match bridge.deliver_pending(platform, &mut source, timeout, interval) {
        Ok(Some(injection)) => print_injection(&injection),
        Ok(None) => {
            println!("No pending context for {}", platform.display_name());
            Ok(())
        }
        Err(BridgeError::InputNotFound) => {
            eprintln!("Warning: composer never appeared; the context is still saved");
            Err(BridgeError::InputNotFound.into())
        }
        Err(e) => Err(e.into()),
    }
}

fn delete(data_dir: &Path, id: Uuid) -> Result<()> {
    let mut bridge = open_bridge(data_dir)?;
    if bridge.store_mut().delete(id)? {
        println!("Deleted {id}");
    } else {
        println!("No context with id {id}");
    }
    Ok(())
}

fn clear(data_dir: &Path) -> Result<()> {
    let mut bridge = open_bridge(data_dir)?;
    let count = bridge.store().get_all().len();
    bridge.store_mut().clear()?;
    println!("Removed {count} contexts");
    Ok(())
}

fn export(data_dir: &Path, output: Option<PathBuf>) -> Result<()> {
    let bridge = open_bridge(data_dir)?;
    let snapshot = bridge.store().export_all();
    let json = serde_json::to_string_pretty(&snapshot)?;

    match output {
        Some(path) => {
            fs::write(&path, json)
                .with_context(|| format!("Failed to write export to {}", path.display()))?;
            println!("Exported {} contexts to {}", snapshot.contexts.len(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn import(data_dir: &Path, file: &Path) -> Result<()> {
    let mut bridge = open_bridge(data_dir)?;
    let raw = fs::read_to_string(file)
        .with_context(|| format!("Failed to read import file: {}", file.display()))?;
    let data: serde_json::Value = serde_json::from_str(&raw)?;

    let count = bridge.store_mut().import_data(&data)?;
    println!("Imported {count} contexts");
    Ok(())
}

fn stats(data_dir: &Path) -> Result<()> {
    let bridge = open_bridge(data_dir)?;
    let contexts = bridge.store().get_all();

    println!("AI Context Bridge Statistics");
    println!("================================");
    println!("Stored contexts: {}", contexts.len());

    for platform in Platform::ALL {
        let count = contexts.iter().filter(|c| c.source == platform).count();
        if count > 0 {
            println!("  {}: {}", platform.display_name(), count);
        }
    }

    let total_messages: usize = contexts.iter().map(|c| c.messages.len()).sum();
    println!("Total messages: {total_messages}");

    if let Some(newest) = contexts.first() {
        println!("Newest capture: {}", newest.created_at.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(oldest) = contexts.last() {
        println!("Oldest capture: {}", oldest.created_at.format("%Y-%m-%d %H:%M:%S"));
    }

    if let Some(latest) = contexts.first() {
        let s = conversation_stats(&latest.messages);
        println!();
        println!("Latest conversation: \"{}\"", latest.title);
        println!("  {} user / {} assistant turns", s.user_messages, s.assistant_messages);
        println!("  {} characters", s.total_characters);
    }

    Ok(())
}

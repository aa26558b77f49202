//! studytrack CLI - reading progress dashboard for the textbook.

use anyhow::Result;
use clap::{Parser, Subcommand};
use studytrack_core::Curriculum;
use studytrack_progress::{format_time_spent, unit_id_from_page_id, ProgressStore};
use studytrack_qa::{Language, QueryRequest, QuestionApi, RagClient, DEFAULT_BASE_URL};
use studytrack_storage::JsonFileStorage;
use tracing::Level;

#[derive(Parser)]
#[command(name = "studytrack")]
#[command(about = "Reading progress tracker for the textbook", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the progress dashboard
    Dashboard,
    /// Record a page view
    Track {
        /// Page id as reported by the site (e.g. "chapter-3-ros2/index")
        page_id: String,
        /// Display title override
        #[arg(long)]
        title: Option<String>,
    },
    /// Mark a unit complete
    Complete {
        /// Unit id
        unit_id: String,
    },
    /// Mark a unit incomplete
    Incomplete {
        /// Unit id
        unit_id: String,
    },
    /// Manage bookmarks
    Bookmark {
        #[command(subcommand)]
        action: BookmarkAction,
    },
    /// Manage notes
    Note {
        #[command(subcommand)]
        action: NoteAction,
    },
    /// Show ranked reading suggestions
    Recommend {
        /// How many suggestions to show
        #[arg(long, default_value = "3")]
        top: usize,
    },
    /// Dump the progress record as JSON to stdout
    Export,
    /// Replace the progress record from a JSON file
    Import {
        /// File to read
        file: std::path::PathBuf,
    },
    /// Discard all progress and start over
    Reset,
    /// Ask the textbook assistant a question
    Ask {
        /// The question
        question: String,
        /// Selected passage to ground the answer in
        #[arg(long)]
        context: Option<String>,
        /// Answer language (en or ur)
        #[arg(long, default_value = "en")]
        language: Language,
        /// Assistant base URL
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        url: String,
    },
    /// Check assistant service health
    Health {
        /// Assistant base URL
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        url: String,
    },
}

#[derive(Subcommand)]
enum BookmarkAction {
    /// Add a bookmark
    Add {
        /// Unit id
        unit_id: String,
        /// Display title
        title: String,
        /// Target URL
        url: String,
        /// Section anchor within the unit
        #[arg(long)]
        section: Option<String>,
    },
    /// Remove a bookmark by id
    Remove {
        /// Bookmark id
        id: String,
    },
    /// List bookmarks
    List,
}

#[derive(Subcommand)]
enum NoteAction {
    /// Add a note
    Add {
        /// Unit id
        unit_id: String,
        /// Note body
        content: String,
        /// Quoted passage the note refers to
        #[arg(long)]
        quote: Option<String>,
        /// Section anchor within the unit
        #[arg(long)]
        section: Option<String>,
    },
    /// Replace a note's content
    Edit {
        /// Note id
        id: String,
        /// New body
        content: String,
    },
    /// Remove a note by id
    Remove {
        /// Note id
        id: String,
    },
    /// List notes, optionally for one unit
    List {
        /// Only notes for this unit
        #[arg(long)]
        unit: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .init();

    let cli = Cli::parse();

    let storage = JsonFileStorage::new(".studytrack/progress.json");
    let mut store = ProgressStore::new(Curriculum::builtin(), Box::new(storage));

    match cli.command {
        Commands::Dashboard => {
            print_dashboard(&store);
        }
        Commands::Track { page_id, title } => {
            let unit_id = unit_id_from_page_id(&page_id).to_string();
            store.track_unit_view(&unit_id, title.as_deref());
            println!("Tracked view of {}", unit_id);
        }
        Commands::Complete { unit_id } => {
            if !store.has_viewed(&unit_id) {
                println!("Unit {} has not been viewed yet; nothing to complete", unit_id);
                return Ok(());
            }
            store.mark_unit_completed(&unit_id);
            println!("Marked {} complete", unit_id);
        }
        Commands::Incomplete { unit_id } => {
            store.mark_unit_incomplete(&unit_id);
            println!("Marked {} incomplete", unit_id);
        }
        Commands::Bookmark { action } => match action {
            BookmarkAction::Add {
                unit_id,
                title,
                url,
                section,
            } => {
                let id = store.add_bookmark(&unit_id, &title, &url, section.as_deref());
                println!("Added bookmark {}", id);
            }
            BookmarkAction::Remove { id } => {
                store.remove_bookmark(&id.as_str().into());
                println!("Removed bookmark {}", id);
            }
            BookmarkAction::List => {
                let bookmarks = store.bookmarks();
                println!("Bookmarks ({})", bookmarks.len());
                for bookmark in bookmarks {
                    println!("  {} | {} | {} -> {}", bookmark.id, bookmark.unit_id, bookmark.title, bookmark.url);
                }
            }
        },
        Commands::Note { action } => match action {
            NoteAction::Add {
                unit_id,
                content,
                quote,
                section,
            } => {
                let id = store.add_note(&unit_id, &content, quote.as_deref(), section.as_deref());
                println!("Added note {}", id);
            }
            NoteAction::Edit { id, content } => {
                store.update_note(&id.as_str().into(), &content);
                println!("Updated note {}", id);
            }
            NoteAction::Remove { id } => {
                store.remove_note(&id.as_str().into());
                println!("Removed note {}", id);
            }
            NoteAction::List { unit } => {
                let notes: Vec<_> = match &unit {
                    Some(unit_id) => store.notes_for_unit(unit_id),
                    None => store.all_notes().iter().collect(),
                };
                println!("Notes ({})", notes.len());
                for note in notes {
                    println!("  {} | {} | {}", note.id, note.unit_id, note.content);
                    if let Some(quote) = &note.selected_text {
                        println!("      \"{}\"", quote);
                    }
                }
            }
        },
        Commands::Recommend { top } => {
            let recommendations = store.recommendations();
            for rec in recommendations.iter().take(top) {
                println!("[{}] {} - {}", rec.priority.as_str(), rec.title, rec.reason);
            }
        }
        Commands::Export => {
            println!("{}", store.export_progress());
        }
        Commands::Import { file } => {
            let data = std::fs::read_to_string(&file)?;
            if store.import_progress(&data) {
                println!("Imported progress from {}", file.display());
            } else {
                anyhow::bail!("import rejected: not a valid progress record");
            }
        }
        Commands::Reset => {
            store.reset_progress();
            println!("Progress reset");
        }
        Commands::Ask {
            question,
            context,
            language,
            url,
        } => {
            let client = RagClient::new(url);
            let request = QueryRequest {
                question,
                selected_context: context,
                language,
            };
            let response = client.ask(&request).await?;

            println!("{}", response.answer);
            if !response.has_answer {
                println!("(the assistant did not find this in the textbook)");
            }
            if !response.citations.is_empty() {
                println!();
                println!("Sources:");
                for citation in &response.citations {
                    println!(
                        "  {} > {} ({})",
                        citation.chapter_title, citation.section_title, citation.url
                    );
                }
            }
        }
        Commands::Health { url } => {
            let client = RagClient::new(url);
            match client.check_health().await {
                Ok(health) => {
                    println!("status: {:?}", health.status);
                    println!("  qdrant connected: {}", health.qdrant_connected);
                    println!("  generator available: {}", health.gemini_available);
                    println!("  version: {}", health.version);
                }
                Err(e) => {
                    println!("assistant unreachable: {}", e);
                }
            }
        }
    }

    Ok(())
}

fn print_dashboard(store: &ProgressStore) {
    let percentage = store.completion_percentage();
    let viewed = store.viewed_unit_count();
    let total = store.curriculum().len();
    let time = format_time_spent(store.total_time_spent());

    println!("Your Progress");
    println!("  {}% complete | {}/{} units viewed | {} reading", percentage, viewed, total, time);
    println!();

    println!("Curriculum");
    for unit in store.curriculum().units() {
        let marker = if store.is_completed(&unit.id) {
            "[x]"
        } else if store.has_viewed(&unit.id) {
            "[~]"
        } else {
            "[ ]"
        };
        println!("  {} {}", marker, unit.title);
    }

    let recommendations = store.recommendations();
    if !recommendations.is_empty() {
        println!();
        println!("What's next");
        for rec in recommendations.iter().take(3) {
            println!("  [{}] {} - {}", rec.priority.as_str(), rec.title, rec.reason);
        }
    }
}

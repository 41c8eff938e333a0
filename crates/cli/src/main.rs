//! EKOS CLI
//!
//! A command-line front end for the enterprise knowledge backend.

mod render;

use anyhow::{Context, Result};
use base64::Engine;
use clap::{Parser, Subcommand};
use ekos_client::{ApiClient, ApiConfig};
use ekos_core::{
    DocumentStatus, IngestUrlRequest, JiraTicketRequest, NodeType, QueryRequest,
    ScreenshotMatchRequest, UploadFile,
};
use ekos_views::{
    ActionPanel, DocumentFilter, DocumentUploader, GraphView, Layout, MeetingList, Route,
    SearchHistory, TimelineView,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// EKOS - search and browse your organization's knowledge
#[derive(Parser)]
#[command(name = "ekos")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend base URL (overrides EKOS_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Answer from canned data without contacting the backend
    #[arg(long, global = true)]
    mock: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print raw JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a question
    Search {
        /// Query text
        #[arg(required = true)]
        query: Vec<String>,

        /// Tenant to search (defaults to EKOS_TENANT_ID)
        #[arg(long)]
        tenant: Option<String>,

        /// Number of chunks to retrieve
        #[arg(short = 'k', long)]
        top_k: Option<u32>,

        /// Filters as key=value (repeatable)
        #[arg(short, long)]
        filter: Vec<String>,

        /// Do not ask for citations
        #[arg(long)]
        no_citations: bool,
    },

    /// Queue a web page for ingestion
    IngestUrl {
        url: String,

        #[arg(short, long, default_value = "web")]
        source: String,
    },

    /// Upload local files
    Upload {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Find documents matching a screenshot
    Screenshot {
        /// Image to match
        #[arg(short, long)]
        image: Option<PathBuf>,
    },

    /// List documents
    Documents {
        /// Case-insensitive title search
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only documents with this status (processing, ready, failed)
        #[arg(long)]
        status: Option<String>,
    },

    /// Show a document by ID
    Document { id: String },

    /// List meetings, newest first
    Meetings,

    /// Show a meeting by ID
    Meeting { id: String },

    /// Create a Jira ticket
    Jira {
        #[arg(short, long, default_value = "EKOS")]
        project: String,

        #[arg(short, long)]
        summary: String,

        #[arg(short, long, default_value = "")]
        description: String,

        #[arg(long)]
        issue_type: Option<String>,
    },

    /// Show the knowledge graph
    Graph {
        /// Only edges touching this node type
        #[arg(short = 't', long = "type")]
        node_type: Option<String>,

        /// Select a node and list its neighbors
        #[arg(long)]
        select: Option<String>,

        /// Zoom in this many steps
        #[arg(long, default_value = "0")]
        zoom_in: u32,

        /// Zoom out this many steps
        #[arg(long, default_value = "0")]
        zoom_out: u32,

        /// Layout RNG seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show a month of the timeline
    Timeline {
        /// Month as YYYY-MM (defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,

        /// Only events from this source
        #[arg(short, long)]
        source: Option<String>,

        /// Step back one month
        #[arg(long, conflicts_with = "next")]
        prev: bool,

        /// Step forward one month
        #[arg(long)]
        next: bool,
    },

    /// List integrations
    Connectors,

    /// Render the page for a URL path (e.g. /graph, /document/doc_1)
    Open { path: String },

    /// Check backend health
    Health,

    /// Interactive mode
    Interactive,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env if present.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = ApiConfig::from_env();
    if let Some(url) = &cli.api_url {
        config = config.with_base_url(url.as_str());
    }
    if cli.mock {
        config = config.with_mock_mode(true);
    }
    if config.mock_mode {
        info!("Mock mode: no requests will reach the backend");
    } else {
        debug!("Using backend at: {}", config.base_url);
    }

    let client = ApiClient::new(config).context("Failed to build HTTP client")?;
    let json = cli.json;

    match cli.command {
        Commands::Search {
            query,
            tenant,
            top_k,
            filter,
            no_citations,
        } => {
            let mut request = QueryRequest::new(query.join(" ")).with_citations(!no_citations);
            if let Some(tenant) = tenant {
                request = request.with_tenant(tenant);
            }
            if let Some(top_k) = top_k {
                request = request.with_top_k(top_k);
            }
            for raw in filter {
                let (key, value) = parse_filter(&raw)?;
                request = request.with_filter(key, value);
            }
            cmd_search(&client, request, json).await?;
        }
        Commands::IngestUrl { url, source } => {
            let response = client
                .ingest_url(IngestUrlRequest::new(url, source))
                .await?;
            emit(json, &response, render::ingest)?;
        }
        Commands::Upload { paths } => {
            cmd_upload(client, paths, json).await?;
        }
        Commands::Screenshot { image } => {
            cmd_screenshot(&client, image, json).await?;
        }
        Commands::Documents { search, status } => {
            cmd_documents(&client, search, status, json).await?;
        }
        Commands::Document { id } => {
            let document = client.get_document(&id).await?;
            emit(json, &document, render::document)?;
        }
        Commands::Meetings => {
            let list = MeetingList::new(client.list_meetings().await?);
            emit(json, list.meetings(), render::meetings)?;
        }
        Commands::Meeting { id } => {
            let meeting = client.get_meeting(&id).await?;
            emit(json, &meeting, render::meeting)?;
        }
        Commands::Jira {
            project,
            summary,
            description,
            issue_type,
        } => {
            let ticket = client
                .create_jira_ticket(JiraTicketRequest {
                    project,
                    summary,
                    description,
                    issue_type,
                })
                .await?;
            emit(json, &ticket, render::jira)?;
        }
        Commands::Graph {
            node_type,
            select,
            zoom_in,
            zoom_out,
            seed,
        } => {
            let mut view = graph_view(seed);
            if let Some(node_type) = node_type {
                view.set_type_filter(Some(node_type.parse::<NodeType>()?));
            }
            if let Some(id) = select {
                view.select(&id)?;
            }
            for _ in 0..zoom_in {
                view.zoom_in();
            }
            for _ in 0..zoom_out {
                view.zoom_out();
            }
            show_graph(&view, json)?;
        }
        Commands::Timeline {
            month,
            source,
            prev,
            next,
        } => {
            let mut view = match month {
                Some(month) => {
                    TimelineView::starting_at(ekos_mock::mock_timeline_events(), month.parse()?)
                }
                None => TimelineView::new(ekos_mock::mock_timeline_events()),
            };
            if prev {
                view.prev_month();
            }
            if next {
                view.next_month();
            }
            view.set_source_filter(source);
            show_timeline(&view, json)?;
        }
        Commands::Connectors => {
            emit(json, &ekos_mock::connectors(), |c| render::connectors(c))?;
        }
        Commands::Open { path } => {
            cmd_open(&client, &path, json).await?;
        }
        Commands::Health => {
            cmd_health(&client).await?;
        }
        Commands::Interactive => {
            cmd_interactive(&client).await?;
        }
    }

    Ok(())
}

/// Print `value` as pretty JSON, or through `render`
fn emit<T: Serialize + ?Sized>(json: bool, value: &T, render: impl FnOnce(&T)) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        render(value);
    }
    Ok(())
}

/// `key=value`; the value is taken as JSON when it parses, else as a string
fn parse_filter(raw: &str) -> Result<(String, serde_json::Value)> {
    let (key, value) = raw
        .split_once('=')
        .with_context(|| format!("Filter must be key=value, got {:?}", raw))?;
    let value = serde_json::from_str(value)
        .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
    Ok((key.trim().to_string(), value))
}

fn graph_view(seed: Option<u64>) -> GraphView {
    let nodes = ekos_mock::mock_graph_nodes();
    let edges = ekos_mock::mock_graph_edges();
    match seed {
        Some(seed) => GraphView::with_layout(
            nodes,
            edges,
            Layout::default(),
            &mut StdRng::seed_from_u64(seed),
        ),
        None => GraphView::new(nodes, edges),
    }
}

fn show_graph(view: &GraphView, json: bool) -> Result<()> {
    if json {
        let (nodes, edges) = view.visible();
        let value = serde_json::json!({
            "nodes": nodes,
            "edges": edges,
            "zoom": view.zoom(),
            "selected": view.selected(),
            "neighbors": view.selected().map(|id| view.neighbors(id)),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        render::graph(view);
    }
    Ok(())
}

fn show_timeline(view: &TimelineView, json: bool) -> Result<()> {
    let events = view.visible();
    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
    } else {
        render::timeline(view.current_month(), &view.sources(), &events);
    }
    Ok(())
}

async fn cmd_search(client: &ApiClient, request: QueryRequest, json: bool) -> Result<()> {
    let outcome = client.search_with_source(request).await?;

    if json {
        let value = serde_json::json!({
            "from_mock": outcome.from_mock,
            "response": outcome.response,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        render::query_response(&outcome.response, outcome.from_mock);
    }

    Ok(())
}

async fn cmd_upload(client: ApiClient, paths: Vec<PathBuf>, json: bool) -> Result<()> {
    let files = paths
        .iter()
        .map(|path| {
            UploadFile::from_path(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut uploader = DocumentUploader::new(client);
    uploader.add_files(files).await;
    let summary = uploader.summary();

    if json {
        let entries: Vec<serde_json::Value> = uploader
            .entries()
            .iter()
            .map(|e| {
                serde_json::json!({
                    "id": e.id,
                    "name": e.name,
                    "size": e.size,
                    "progress": e.progress,
                    "status": format!("{:?}", e.status).to_lowercase(),
                    "message": e.message,
                    "doc_id": e.doc_id,
                    "error": e.error,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        render::uploads(uploader.entries());
        println!(
            "\n{} uploaded, {} failed",
            summary.succeeded, summary.failed
        );
    }

    if summary.failed > 0 {
        anyhow::bail!("{} of {} uploads failed", summary.failed, paths.len());
    }
    Ok(())
}

async fn cmd_screenshot(client: &ApiClient, image: Option<PathBuf>, json: bool) -> Result<()> {
    let image_base64 = match image {
        Some(path) => {
            let bytes = std::fs::read(&path)
                .with_context(|| format!("Failed to read image: {}", path.display()))?;
            Some(base64::engine::general_purpose::STANDARD.encode(bytes))
        }
        None => None,
    };

    let response = client
        .match_screenshot(ScreenshotMatchRequest { image_base64 })
        .await?;
    emit(json, &response, render::screenshot_matches)
}

async fn cmd_documents(
    client: &ApiClient,
    search: String,
    status: Option<String>,
    json: bool,
) -> Result<()> {
    let status = status.map(|s| s.parse::<DocumentStatus>()).transpose()?;
    let documents = client.list_documents().await?;
    let filter = DocumentFilter::new(search, status);
    let shown = filter.apply(&documents);
    emit(json, &shown, |docs| render::documents(docs))
}

async fn cmd_health(client: &ApiClient) -> Result<()> {
    if client.is_mock_mode() {
        println!("✓ Mock mode, backend not contacted");
        return Ok(());
    }

    let healthy = client.health().await.unwrap_or(false);
    if !healthy {
        eprintln!("Error: backend is not reachable.");
        eprintln!("  API: {}", client.base_url());
        anyhow::bail!("Backend unavailable");
    }
    println!("✓ Backend healthy at {}", client.base_url());
    Ok(())
}

async fn cmd_open(client: &ApiClient, path: &str, json: bool) -> Result<()> {
    let route = Route::resolve(path)?;

    if route.in_shell() && !json {
        render::shell_header(&route);
        println!("{}\n", route.title());
    }

    match route {
        Route::Home => {
            let documents = client.list_documents().await?;
            let meetings = client.list_meetings().await?;
            let summary = serde_json::json!({
                "documents": documents.len(),
                "meetings": meetings.len(),
            });
            emit(json, &summary, |_| {
                println!("{} documents, {} meetings", documents.len(), meetings.len());
                println!("Try: ekos search \"what was Q3 revenue?\"");
            })?;
        }
        Route::Search => {
            let usage = serde_json::json!({ "usage": "ekos search <query>" });
            emit(json, &usage, |_| println!("Usage: ekos search <query>"))?;
        }
        Route::ScreenshotSearch => {
            cmd_screenshot(client, None, json).await?;
        }
        Route::Timeline => {
            show_timeline(&TimelineView::new(ekos_mock::mock_timeline_events()), json)?;
        }
        Route::KnowledgeGraph => {
            show_graph(&graph_view(None), json)?;
        }
        Route::DocumentViewer(id) => {
            let document = client.get_document(&id).await?;
            emit(json, &document, render::document)?;
        }
        Route::Meetings => {
            let list = MeetingList::new(client.list_meetings().await?);
            emit(json, list.meetings(), render::meetings)?;
        }
        Route::Admin => {
            emit(json, &ekos_mock::connectors(), |c| render::connectors(c))?;
        }
        Route::Login => {
            println!("EKOS\n\nSign in to continue.");
        }
        Route::NotFound(path) => {
            anyhow::bail!("No page at {}", path);
        }
    }

    Ok(())
}

async fn cmd_interactive(client: &ApiClient) -> Result<()> {
    let mut history = SearchHistory::new();
    let mut actions = ActionPanel::default();

    println!("EKOS - Interactive Mode");
    println!("Commands: search, done, open, history, help, quit");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("ekos> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let parts: Vec<&str> = line.trim().splitn(2, ' ').collect();
        let cmd = parts.first().copied().unwrap_or("");
        let arg = parts.get(1).copied().unwrap_or("").trim();

        match cmd {
            "" => continue,

            "search" | "s" => {
                if arg.is_empty() {
                    println!("Usage: search <query>");
                    continue;
                }
                history.push(arg);
                match client.search_with_source(QueryRequest::new(arg)).await {
                    Ok(outcome) => {
                        actions = ActionPanel::new(outcome.response.actions.clone());
                        render::query_response(&outcome.response, outcome.from_mock);
                    }
                    Err(e) => println!("Error: {}", e),
                }
            }

            "done" | "d" => match arg.parse::<usize>() {
                Ok(n) if (1..=actions.actions().len()).contains(&n) => {
                    actions.toggle(n - 1);
                    render::action_panel(&actions);
                }
                _ => println!("Usage: done <action number>"),
            },

            "open" | "o" => {
                if let Err(e) = cmd_open(client, arg, false).await {
                    println!("Error: {}", e);
                }
            }

            "history" | "h" => {
                if history.is_empty() {
                    println!("No recent searches.");
                }
                for query in history.entries() {
                    println!("• {}", query);
                }
            }

            "help" | "?" => {
                println!("Commands:");
                println!("  search <query>  - Ask a question");
                println!("  done <n>        - Toggle suggested action n");
                println!("  open <path>     - Show a page (e.g. /graph, /meetings)");
                println!("  history         - Recent searches");
                println!("  quit            - Exit");
            }

            "quit" | "q" | "exit" => break,

            _ => println!("Unknown command: {}. Type 'help' for commands.", cmd),
        }
    }

    println!("Goodbye!");
    Ok(())
}

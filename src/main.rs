use std::io::{self, BufRead, Write};
use std::net::SocketAddr;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use yansi::Paint;

use opsdesk::config::{self, DEFAULT_HOST, DEFAULT_PORT};
use opsdesk::models::{AppState, ConflictAction, InstanceForm};
use opsdesk::render::{pagination_line, terminal_table};
use opsdesk::services::{self, DeleteOutcome, InstanceListing, MemoListing};
use opsdesk::utils::parse_confirmation;

#[derive(Parser)]
#[command(
    name = "opsdesk",
    author,
    version,
    about = "opsdesk command-line tool",
    long_about = r#"opsdesk: keep the database instance registry and the team memo board in order.

Every command talks to the backend configured by API_BASE_URL (read from the environment or a .env file). The same tables are available as a small web console via `opsdesk serve`.

Examples:
  1) Run the web console:
      opsdesk serve --host 127.0.0.1 --port 8080
  2) Manage instances:
      opsdesk instances list
      opsdesk instances delete orders-replica-1
  3) Page through memos:
      opsdesk memos list --page 2
"#,
    after_help = "Use `opsdesk <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response echo
    #[arg(long, global = true)]
    silent: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web console
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Validate configuration and backend connectivity
    #[command(about = "Validate configuration and ensure the backend answers.", long_about = "Check that API_BASE_URL is usable and that the instance list endpoint returns a well-formed payload.")]
    CheckConfig,
    /// Manage database instance profiles
    #[command(about = "List, add and delete database instance profiles", long_about = "These commands perform the same actions as the web console's instance page. Deleting asks for confirmation unless --yes is given.")]
    Instances {
        #[command(subcommand)]
        sub: InstanceCommands,
    },
    /// Manage memos
    #[command(about = "List, show, add and delete memos", long_about = "Memos are listed one page at a time; every page is fetched from the backend. Deleting asks for confirmation unless --yes is given.")]
    Memos {
        #[command(subcommand)]
        sub: MemoCommands,
    },
}

#[derive(Subcommand)]
enum InstanceCommands {
    #[command(about = "List instances", long_about = "List every registered instance profile (passwords are never returned by the backend).")]
    List,
    #[command(about = "Register an instance", long_about = "Register a database instance. --instance-name, --host, --user and --password are required; blank optional values fall back to the backend's defaults.")]
    Add {
        #[arg(long, default_value = "")]
        instance_name: String,
        #[arg(long, default_value = "")]
        host: String,
        #[arg(long, default_value = "")]
        user: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, default_value = "")]
        environment: String,
        #[arg(long, default_value = "")]
        db_type: String,
        #[arg(long, default_value = "")]
        region: String,
        #[arg(long, default_value = "")]
        cluster_name: String,
        #[arg(long, default_value = "")]
        port: String,
        #[arg(long, default_value = "")]
        db: String,
        /// What to do if the name or host already exists
        #[arg(long, value_enum)]
        on_conflict: Option<ConflictAction>,
    },
    #[command(about = "Delete an instance", long_about = "Delete an instance profile by name. Asks for confirmation unless --yes is given.")]
    Delete {
        instance_name: String,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum MemoCommands {
    #[command(about = "List one page of memos")]
    List {
        /// Page number to display (1-indexed)
        #[arg(long, short = 'p', default_value_t = 1)]
        page: usize,
        /// Memos per page (defaults to MEMO_PAGE_SIZE or 5)
        #[arg(long)]
        page_size: Option<usize>,
    },
    #[command(about = "Show a single memo")]
    Show { memo_id: String },
    #[command(about = "Add a memo", long_about = "Add a memo and print the page you are on afterwards.")]
    Add {
        content: String,
        #[arg(long, short = 'p', default_value_t = 1)]
        page: usize,
        #[arg(long)]
        page_size: Option<usize>,
    },
    #[command(about = "Delete a memo", long_about = "Delete a memo by id and print the page you are on afterwards. Asks for confirmation unless --yes is given.")]
    Delete {
        memo_id: String,
        #[arg(long, short = 'p', default_value_t = 1)]
        page: usize,
        #[arg(long)]
        page_size: Option<usize>,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

fn fail(context: &str, err: impl std::fmt::Display) -> ! {
    tracing::error!(%err, context);
    eprintln!("{}: {}", Paint::new(context).red(), err);
    process::exit(1);
}

/// `[y/N]` prompt. EOF or a read error counts as "no".
fn ask<R: BufRead, W: Write>(question: &str, mut input: R, mut output: W) -> bool {
    if write!(output, "{} {} ", Paint::new(question).yellow(), Paint::new("[y/N]").dim()).is_err()
        || output.flush().is_err()
    {
        return false;
    }
    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(0) | Err(_) => false,
        Ok(_) => parse_confirmation(&answer),
    }
}

/// Blocking stdin read; needs the multi-threaded runtime.
fn prompt_confirmation(question: &str) -> bool {
    tokio::task::block_in_place(|| ask(question, io::stdin().lock(), io::stdout()))
}

fn confirm_with(yes: bool) -> impl FnOnce(&str) -> bool {
    move |question: &str| yes || prompt_confirmation(question)
}

fn print_instances(listing: &InstanceListing) {
    if listing.table.is_empty() {
        println!("\n{}\n", Paint::new("(no instances registered)").dim());
        return;
    }
    println!("\n{}", terminal_table(&listing.table, None));
    println!("{}\n", Paint::new(format!("{} instance(s)", listing.table.len())).dim());
}

fn print_memos(listing: &MemoListing) {
    if listing.table.is_empty() {
        println!("\n{}", Paint::new("(no memos on this page)").dim());
    } else {
        println!("\n{}", terminal_table(&listing.table, Some("ID")));
    }
    let window = &listing.window;
    println!(
        "\n{}  {}",
        Paint::new(format!("Page {} of {}", window.current_page, window.total_pages)).cyan(),
        pagination_line(window)
    );
    let page_size = listing.page.page_size;
    if window.has_prev() {
        println!(
            "{} {}",
            Paint::new("←").bold(),
            Paint::new(format!("Previous page: opsdesk memos list --page {} --page-size {}", window.current_page - 1, page_size)).dim()
        );
    }
    if window.has_next() {
        println!(
            "{} {}",
            Paint::new("→").bold(),
            Paint::new(format!("Next page: opsdesk memos list --page {} --page-size {}", window.current_page + 1, page_size)).dim()
        );
    }
    println!();
}

async fn start_server(mut state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Some(path) = stylesheet {
        match std::fs::read_to_string(&path) {
            Ok(css) => {
                state.custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => fail(&format!("Failed to read custom stylesheet at {}", path), e),
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => fail("Invalid host/port format", e),
    };
    let app = opsdesk::build_router(state.clone());
    tracing::info!(%addr, backend = %state.api_base_url, "Starting opsdesk web console");
    println!("{} {}", Paint::new("Web console running on").green(), Paint::new(format!("http://{}", addr)).cyan());
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                fail("Server error", e);
            }
        }
        Err(e) => {
            eprintln!("{}", Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow());
            fail(&format!("Failed to bind to {}", addr), e);
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        opsdesk::api::set_silent(true);
    }

    let state = match opsdesk::build_state_from_env(cli.env_file.as_deref()) {
        Ok(s) => s,
        Err(e) => fail("Failed to initialise", e),
    };

    // No command: serve the web console by default
    let Some(command) = cli.command else {
        start_server(state, DEFAULT_HOST, DEFAULT_PORT, None).await;
        return;
    };

    match command {
        Commands::Serve { host, port, stylesheet } => {
            start_server(state, &host, port, stylesheet).await;
        }
        Commands::CheckConfig => {
            println!("API_BASE_URL = {}", Paint::new(&state.api_base_url).cyan());
            if std::env::var("API_BASE_URL").map(|v| v.trim().is_empty()).unwrap_or(true) {
                println!("{}", Paint::new(format!("API_BASE_URL is not set; using {}", config::FALLBACK_API_BASE_URL)).yellow());
            }
            match services::list_instances(&state).await {
                Ok(listing) => {
                    println!(
                        "{}",
                        Paint::new(format!("Configuration looks valid ({} instances returned)", listing.instances.len())).green()
                    );
                }
                Err(e) => fail("Configuration appears invalid", e),
            }
        }
        Commands::Instances { sub } => match sub {
            InstanceCommands::List => match services::list_instances(&state).await {
                Ok(listing) => print_instances(&listing),
                Err(e) => fail("Error loading instance list", e),
            },
            InstanceCommands::Add {
                instance_name,
                host,
                user,
                password,
                environment,
                db_type,
                region,
                cluster_name,
                port,
                db,
                on_conflict,
            } => {
                let form = InstanceForm {
                    environment,
                    db_type,
                    region,
                    cluster_name,
                    instance_name,
                    host,
                    port,
                    user,
                    password,
                    db,
                };
                match services::add_instance(&state, &form, on_conflict).await {
                    Ok(done) => {
                        println!("{}", Paint::new(&done.message).green());
                        print_instances(&done.listing);
                    }
                    Err(e) if e.is_validation() => fail("Not submitted", e),
                    Err(e) => fail("Failed to add instance", e),
                }
            }
            InstanceCommands::Delete { instance_name, yes } => {
                match services::delete_instance(&state, &instance_name, confirm_with(yes)).await {
                    Ok(DeleteOutcome::Deleted(done)) => {
                        println!("{}", Paint::new(&done.message).green());
                        print_instances(&done.listing);
                    }
                    Ok(DeleteOutcome::Declined) => println!("{}", Paint::new("Nothing was deleted.").dim()),
                    Err(e) => fail("Failed to delete instance", e),
                }
            }
        },
        Commands::Memos { sub } => match sub {
            MemoCommands::List { page, page_size } => {
                let page_size = page_size.unwrap_or(state.memo_page_size);
                match services::fetch_memo_page(&state, page, page_size).await {
                    Ok(listing) => print_memos(&listing),
                    Err(e) => fail("Error loading memo list", e),
                }
            }
            MemoCommands::Show { memo_id } => match services::show_memo(&state, &memo_id).await {
                Ok(memo) => {
                    println!("{} {}", Paint::new("Memo").bold(), Paint::new(&memo.id).cyan());
                    if let Some(created) = memo.created_at.as_deref() {
                        println!("{} {}", Paint::new("Created:").dim(), opsdesk::models::memo_record::format_timestamp(created));
                    }
                    if let Some(updated) = memo.updated_at.as_deref() {
                        println!("{} {}", Paint::new("Updated:").dim(), opsdesk::models::memo_record::format_timestamp(updated));
                    }
                    println!("\n{}\n", memo.content);
                }
                Err(e) => fail("Error loading memo", e),
            },
            MemoCommands::Add { content, page, page_size } => {
                let page_size = page_size.unwrap_or(state.memo_page_size);
                match services::add_memo(&state, &content, page, page_size).await {
                    Ok(done) => {
                        println!("{}", Paint::new(&done.message).green());
                        print_memos(&done.listing);
                    }
                    Err(e) if e.is_validation() => fail("Not submitted", e),
                    Err(e) => fail("Failed to add memo", e),
                }
            }
            MemoCommands::Delete { memo_id, page, page_size, yes } => {
                let page_size = page_size.unwrap_or(state.memo_page_size);
                match services::delete_memo(&state, &memo_id, page, page_size, confirm_with(yes)).await {
                    Ok(DeleteOutcome::Deleted(done)) => {
                        println!("{}", Paint::new(&done.message).green());
                        print_memos(&done.listing);
                    }
                    Ok(DeleteOutcome::Declined) => println!("{}", Paint::new("Nothing was deleted.").dim()),
                    Err(e) => fail("Failed to delete memo", e),
                }
            }
        },
    }
}

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use barista_agent::api::ApiServer;
use barista_agent::config::Overrides;
use barista_agent::menu::{Category, MENU};
use barista_agent::{BaristaAgent, Config, StoreBackend, ToolContext};

/// Java Gen barista - order-taking tools for a voice agent
#[derive(Parser)]
#[command(name = "barista", version, about)]
struct Cli {
    /// Persona file (JSON or TOML); the built-in Java Gen barista if omitted
    #[arg(short, long, global = true)]
    persona: Option<PathBuf>,

    /// Order store backend: json, sqlite or memory
    #[arg(long, global = true)]
    store: Option<StoreBackend>,

    /// Path of the JSON order file
    #[arg(long, global = true)]
    order_path: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the menu announcement
    Menu {
        /// Print every category instead of the announcement
        #[arg(long)]
        full: bool,
    },
    /// Print the system prompt (instructions plus menu)
    Instructions,
    /// Print the tool definitions as JSON
    Tools,
    /// Print the session manifest as JSON
    Manifest,
    /// Submit an order and print the spoken reply
    Submit {
        /// Drink type, e.g. "Latte"
        #[arg(long)]
        drink: String,
        /// Size, e.g. "Tall"
        #[arg(long)]
        size: String,
        /// Milk choice
        #[arg(long, default_value = "No milk / Black")]
        milk: String,
        /// Extra modification (repeatable)
        #[arg(long = "extra")]
        extras: Vec<String>,
        /// Customer name
        #[arg(long)]
        name: String,
    },
    /// Invoke a tool with a JSON arguments object
    Call {
        /// Tool name
        tool: String,
        /// Arguments as a JSON object
        #[arg(default_value = "{}")]
        arguments: String,
    },
    /// Show the last saved order
    Show,
    /// Run the HTTP tool server (default)
    Serve {
        /// Port to listen on
        #[arg(long, env = "BARISTA_PORT")]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity; RUST_LOG wins when set
    let filter = match cli.verbose {
        0 => "info,barista_agent=info",
        1 => "info,barista_agent=debug",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let command = cli.command.unwrap_or(Command::Serve { port: None });

    if let Command::Menu { full } = command {
        print_menu(full);
        return Ok(());
    }

    let port = match &command {
        Command::Serve { port } => *port,
        _ => None,
    };
    let overrides = Overrides {
        persona_path: cli.persona,
        store: cli.store,
        order_path: cli.order_path,
        port,
    };

    let config = Config::load_with_options(&overrides)?;
    tracing::debug!(?config, "loaded configuration");

    let port = config.api_server.port;
    let agent = BaristaAgent::new(config)?;
    let ctx = ToolContext::session("cli");

    match command {
        Command::Menu { full } => print_menu(full),
        Command::Instructions => println!("{}", agent.system_prompt()),
        Command::Tools => {
            println!(
                "{}",
                serde_json::to_string_pretty(&agent.executor().list_tools())?
            );
        }
        Command::Manifest => println!("{}", serde_json::to_string_pretty(&agent.manifest())?),
        Command::Submit {
            drink,
            size,
            milk,
            extras,
            name,
        } => {
            let arguments = serde_json::json!({
                "drink_type": drink,
                "size": size,
                "milk": milk,
                "extras": extras,
                "name": name,
            });
            let reply = agent
                .executor()
                .execute("submit_order", &arguments.to_string(), &ctx)
                .await?;
            println!("{reply}");
        }
        Command::Call { tool, arguments } => {
            let reply = agent.executor().execute(&tool, &arguments, &ctx).await?;
            println!("{reply}");
        }
        Command::Show => match agent.store().load().await? {
            Some(order) => println!("{}", serde_json::to_string_pretty(&order)?),
            None => println!("No order saved yet ({})", agent.store().describe()),
        },
        Command::Serve { .. } => {
            tracing::info!(
                persona = %agent.config().persona.id(),
                validation = %agent.config().validation,
                "starting barista tool server"
            );
            ApiServer::new(agent, port).run().await?;
        }
    }

    Ok(())
}

fn print_menu(full: bool) {
    if !full {
        println!("{}", MENU.format_menu_text());
        return;
    }

    for category in Category::ALL {
        println!("{}:", category.key());
        for option in MENU.options(category) {
            println!("  - {option}");
        }
    }
}

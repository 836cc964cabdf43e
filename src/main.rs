use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use spendlog::core::analytics::Period;
use spendlog::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Record a new expense
    Add {
        /// Category id, e.g. "groceries"
        #[arg(long)]
        category: String,
        /// Amount in the expense currency
        #[arg(long)]
        amount: f64,
        /// ISO currency code of the amount
        #[arg(long, default_value = "USD")]
        currency: String,
        /// Transaction date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Encoded receipt data URI, stored as-is
        #[arg(long)]
        receipt: Option<String>,
    },
    /// List recorded expenses
    List {
        /// Time window: today, this-week, this-month, this-year or all
        #[arg(long, default_value = "all")]
        period: Period,
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long, default_value_t = 10)]
        per_page: usize,
    },
    /// Display balance, income and expense totals
    Dashboard {
        /// Time window: today, this-week, this-month, this-year or all
        #[arg(long, default_value = "this-month")]
        period: Period,
    },
    /// Remove a recorded expense by id
    Remove {
        id: String,
    },
    /// Manage expense categories
    #[command(subcommand)]
    Category(CategoryCommands),
}

#[derive(Subcommand)]
enum CategoryCommands {
    /// List available categories
    List,
    /// Add a user-defined category
    Add {
        /// Display name; the id is derived from it ("Coffee Shop" -> "coffee-shop")
        name: String,
        /// Icon shape token shown next to the category
        #[arg(long, default_value = "M16 11V7a4 4 0 00-8 0v4M5 9h14l1 12H4L5 9z")]
        icon: String,
        #[arg(long, default_value = "bg-red-100")]
        bg_color: String,
        #[arg(long, default_value = "text-red-600")]
        text_color: String,
    },
}

impl From<Commands> for spendlog::AppCommand {
    fn from(cmd: Commands) -> spendlog::AppCommand {
        match cmd {
            Commands::Add {
                category,
                amount,
                currency,
                date,
                receipt,
            } => spendlog::AppCommand::Add {
                category,
                amount,
                currency,
                date,
                receipt,
            },
            Commands::List {
                period,
                page,
                per_page,
            } => spendlog::AppCommand::List {
                period,
                page,
                per_page,
            },
            Commands::Dashboard { period } => spendlog::AppCommand::Dashboard { period },
            Commands::Remove { id } => spendlog::AppCommand::Remove { id },
            Commands::Category(CategoryCommands::List) => spendlog::AppCommand::CategoryList,
            Commands::Category(CategoryCommands::Add {
                name,
                icon,
                bg_color,
                text_color,
            }) => spendlog::AppCommand::CategoryAdd {
                name,
                icon,
                bg_color,
                text_color,
            },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => spendlog::cli::setup::setup(),
        Some(cmd) => spendlog::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

use anyhow::Result;
use clap::{Parser, Subcommand};

use payplan::cli::{
    handle_budget_command, handle_config_command, handle_item_command, handle_plan_command,
    handle_summary_command, BudgetCommands, ConfigCommands, ItemCommands, PlanArgs, SummaryArgs,
};
use payplan::config::{PlannerPaths, Settings};
use payplan::storage::Storage;

#[derive(Parser)]
#[command(
    name = "payplan",
    version,
    about = "Plan monthly payments toward savings goals and debts",
    long_about = "payplan tracks savings goals and debts together with your monthly \
                  income and expenses, and proposes how to split the money you have \
                  left using the avalanche, snowball or equal-split strategy."
)]
struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and default settings
    Init,

    /// Manage savings goals and debts
    #[command(subcommand)]
    Item(ItemCommands),

    /// Manage income, expenses and the custom monthly amount
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show how this month's money would be allocated
    Plan(PlanArgs),

    /// Show totals and the months-to-completion estimate
    Summary(SummaryArgs),

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    payplan::logging::init_tracing(cli.verbose);

    let paths = PlannerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths)?;
    storage.load_all()?;
    let paths = storage.paths();

    match cli.command {
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!("payplan is already initialized at: {}", paths.base_dir().display());
            } else {
                settings.save(paths)?;
                storage.save_all()?;
                println!("Initialized payplan at: {}", paths.base_dir().display());
                println!();
                println!("Next steps:");
                println!("  payplan budget income 3000");
                println!("  payplan budget expenses 1800");
                println!("  payplan item add \"Emergency fund\" 5000");
                println!("  payplan plan");
            }
        }
        Some(Commands::Item(cmd)) => handle_item_command(&storage, &settings, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &settings, cmd)?,
        Some(Commands::Plan(args)) => handle_plan_command(&storage, &settings, args)?,
        Some(Commands::Summary(args)) => handle_summary_command(&storage, &settings, args)?,
        Some(Commands::Config { command }) => handle_config_command(
            paths,
            &mut settings,
            command.unwrap_or(ConfigCommands::Show),
        )?,
        None => {
            println!("payplan - savings and debt payoff planner");
            println!();
            println!("Run 'payplan --help' for usage information.");
            println!("Run 'payplan init' to get started.");
        }
    }

    Ok(())
}

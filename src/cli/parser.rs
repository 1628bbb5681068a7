use crate::export::ExportFormat;
use crate::models::menu_item::Portion;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rStaffClock
#[derive(Parser)]
#[command(
    name = "rstaffclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "Front-of-house staff clock: punch in/out, live status and daily attendance on SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Manage staff members
    Staff {
        #[command(subcommand)]
        action: StaffAction,
    },

    /// Record a punch for a staff member (toggles in/out when no type is given)
    Punch {
        /// Staff id
        staff: String,

        #[arg(long = "in", conflicts_with = "punch_out", help = "Force a punch in")]
        punch_in: bool,

        #[arg(long = "out", help = "Force a punch out")]
        punch_out: bool,

        #[arg(long, short, help = "Reason (required when punching out)")]
        reason: Option<String>,

        #[arg(long, help = "Reference of the captured photo")]
        photo: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD HH:MM", help = "Punch time (default: now)")]
        at: Option<String>,
    },

    /// Show who is currently in or out
    Status {
        #[arg(long, value_name = "YYYY-MM-DD", help = "Day to inspect (default: today)")]
        date: Option<String>,
    },

    /// Daily attendance summary per staff member
    Summary {
        #[arg(long, short, help = "Filter by year/month/day or a custom range (default: current month)")]
        period: Option<String>,

        #[arg(long, help = "Only this staff id")]
        staff: Option<String>,
    },

    /// List raw punch events
    Events {
        #[arg(long, short, help = "Filter by year/month/day or a custom range (default: today)")]
        period: Option<String>,

        #[arg(long, help = "Only this staff id")]
        staff: Option<String>,
    },

    /// Manage floor-plan tables
    Tables {
        #[command(subcommand)]
        action: TableAction,
    },

    /// Manage the menu catalog
    Menu {
        #[command(subcommand)]
        action: MenuAction,
    },

    /// Take orders at a table
    Order {
        #[command(subcommand)]
        action: OrderAction,
    },

    /// Export daily summaries or punch events
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'e', help = "Export raw punch events instead of summaries")]
        events: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum StaffAction {
    /// Register a staff member
    Add {
        id: String,
        name: String,
        #[arg(long)]
        role: Option<String>,
    },
    /// List staff members
    List {
        #[arg(long, help = "Include deactivated staff")]
        all: bool,
    },
    /// Deactivate a staff member (punches are kept)
    Del { id: String },
}

#[derive(Subcommand)]
pub enum TableAction {
    /// Create tables from a range such as "1-10" or "1-4,8,12-13"
    Generate {
        range: String,
        #[arg(long, help = "Name prefix (default from config)")]
        prefix: Option<String>,
        #[arg(long, help = "Seats per table (default from config)")]
        seats: Option<u32>,
    },
    /// List tables in natural order
    List,
    /// Delete a table by name
    Del { name: String },
}

#[derive(Subcommand)]
pub enum MenuAction {
    /// Add a dish (prices like "12.50")
    Add {
        name: String,
        #[arg(long, value_name = "PRICE", help = "Full-portion price")]
        full: String,
        #[arg(long, value_name = "PRICE", help = "Half-portion price (omit if not offered)")]
        half: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// List dishes
    List {
        #[arg(long, help = "Include hidden dishes")]
        all: bool,
    },
    /// Change a dish
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, value_name = "PRICE")]
        full: Option<String>,
        #[arg(long, value_name = "PRICE", conflicts_with = "no_half")]
        half: Option<String>,
        #[arg(long = "no-half", help = "Stop offering a half portion")]
        no_half: bool,
        #[arg(long, conflicts_with = "show", help = "Hide the dish from ordering")]
        hide: bool,
        #[arg(long, help = "Make the dish orderable again")]
        show: bool,
    },
    /// Delete a dish
    Del { id: i64 },
    /// Import dishes from a JSON file
    Import { file: String },
}

#[derive(Subcommand)]
pub enum OrderAction {
    /// Open an order for a table
    Open {
        table: String,
        #[arg(long, help = "Staff id taking the order")]
        staff: Option<String>,
    },
    /// Add a dish to an open order
    Add {
        order: i64,
        item: i64,
        #[arg(long, value_enum, default_value = "full")]
        portion: Portion,
        #[arg(long, short, default_value_t = 1)]
        qty: u32,
    },
    /// Remove a line from an open order
    Remove { order: i64, line: i64 },
    /// Close an order
    Close { order: i64 },
    /// Show an order with its total
    Show { order: i64 },
    /// List orders (open only by default)
    List {
        #[arg(long, help = "Include closed orders")]
        all: bool,
    },
}

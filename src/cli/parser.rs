use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for foodreserve
#[derive(Parser)]
#[command(
    name = "foodreserve",
    version = env!("CARGO_PKG_VERSION"),
    about = "HomeFood Reserve: browse the menu, build a cart and reserve pickup or delivery",
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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the menu
    Menu,

    /// Show the dates that can be booked
    Dates,

    /// Build a cart and reserve it
    Reserve {
        #[arg(long, help = "Customer name")]
        name: String,

        #[arg(long, help = "Phone number (10 digits)")]
        phone: String,

        #[arg(long, help = "pickup or delivery (default from config)")]
        mode: Option<String>,

        #[arg(long, help = "Date (YYYY-MM-DD), one of the bookable dates")]
        date: Option<String>,

        #[arg(long, help = "Time (HH:MM)")]
        time: Option<String>,

        #[arg(long, default_value = "", help = "Notes (e.g. no onion)")]
        notes: String,

        #[arg(
            long = "item",
            short = 'i',
            value_name = "ID[:QTY]",
            help = "Menu item to add; repeat for more items"
        )]
        items: Vec<String>,

        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// List reservations, newest first
    List {
        #[arg(long, help = "Only show reserved or cancelled reservations")]
        status: Option<String>,
    },

    /// Show one reservation with its items
    Show { id: String },

    /// Cancel a reservation
    Cancel {
        id: String,

        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Interactive session: browse, fill the cart and reserve step by step
    Shell,

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Export the reservation history
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter by reservation date: YYYY, YYYY-MM, YYYY-MM-DD, start:end or all"
        )]
        range: Option<String>,

        #[arg(long, help = "Only export reserved or cancelled reservations")]
        status: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

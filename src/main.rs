//! `order-desk` command-line front end.
//!
//! Every invocation starts the desk on the data directory, runs one command and shuts
//! the actors down again, so all writes are flushed before the process exits.

use anyhow::{bail, Context};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use order_desk::browse::{display_number, format_date, SortDirection, SortField};
use order_desk::clients::{ActorClient, DirectoryClient};
use order_desk::directory_actor::DirectoryError;
use order_desk::document::{LabelPreset, PdfCanvas, RecordingCanvas};
use order_desk::lifecycle::{
    setup_tracing, DeskConfig, OrderDesk, DEFAULT_BUFFER_SIZE, DEFAULT_DATA_DIR,
};
use order_desk::model::{DirectoryEntry, OrderDraft, OrderId};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "order-desk")]
#[command(version)]
#[command(
    about = "Purchase orders with gap-free numbering and printable exports",
    long_about = None
)]
struct Cli {
    /// Directory holding the stored collections
    #[arg(long, env = "ORDER_DESK_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Document wording: en or pt
    #[arg(long, env = "ORDER_DESK_LABELS", default_value = "en")]
    labels: LabelPreset,

    /// Mailbox capacity of each actor
    #[arg(long, default_value_t = DEFAULT_BUFFER_SIZE)]
    buffer_size: usize,

    /// Log level used when RUST_LOG is not set
    #[arg(
        short = 'l',
        long,
        default_value = "warn",
        value_parser = ["trace", "debug", "info", "warn", "error"]
    )]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List orders, newest first unless sorted
    List {
        /// Case-insensitive text or number fragment
        #[arg(long, default_value = "")]
        search: String,
        /// date, number, supplier, material, customer or commercial
        #[arg(long)]
        sort: Option<SortField>,
        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,
    },
    /// Print the number the next order will receive
    Next,
    /// Create an order
    Add {
        /// Defaults to the first supplier alphabetically
        #[arg(long)]
        supplier: Option<String>,
        #[arg(long)]
        material: String,
        #[arg(long)]
        service: Option<String>,
        #[arg(long)]
        customer: String,
        /// Defaults to the first commercial alphabetically
        #[arg(long)]
        commercial: Option<String>,
        /// YYYY-MM-DD, defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Delete an order by id; survivors are renumbered
    Delete { id: String },
    /// Write the printable page for an order
    Export {
        id: String,
        /// Output directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
        /// Print the draw operations instead of writing a file
        #[arg(long)]
        dry_run: bool,
    },
    /// Manage the supplier list
    Suppliers {
        #[command(subcommand)]
        action: DirectoryCommand,
    },
    /// Manage the commercial list
    Commercials {
        #[command(subcommand)]
        action: DirectoryCommand,
    },
}

#[derive(Subcommand, Debug)]
enum DirectoryCommand {
    /// List entries alphabetically
    List,
    /// Add an entry
    Add { name: String },
    /// Remove an entry by id
    Remove { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_tracing(&cli.log_level);

    let config = DeskConfig {
        data_dir: cli.data_dir,
        buffer_size: cli.buffer_size,
        labels: cli.labels,
    };
    info!(?config, "Starting order desk");

    let store = config
        .open_store()
        .with_context(|| format!("opening data directory {}", config.data_dir.display()))?;
    let desk = OrderDesk::start(store, &config);

    let outcome = run(&desk, cli.command).await;
    desk.shutdown().await?;
    outcome
}

async fn run(desk: &OrderDesk, command: Command) -> anyhow::Result<()> {
    match command {
        Command::List { search, sort, desc } => {
            let orders = match sort {
                Some(field) => {
                    let direction = if desc {
                        SortDirection::Desc
                    } else {
                        SortDirection::Asc
                    };
                    desk.orders.browse(&search, field, direction).await?
                }
                None => desk.orders.search(&search).await?,
            };
            for order in &orders {
                println!(
                    "{}  {}  {}  {}  {}  {}  {}",
                    display_number(order.order_number),
                    format_date(order.date),
                    order.supplier,
                    order.material,
                    order.customer,
                    order.commercial,
                    order.id
                );
            }
        }
        Command::Next => {
            println!("{}", desk.orders.next_order_number().await?);
        }
        Command::Add {
            supplier,
            material,
            service,
            customer,
            commercial,
            date,
        } => {
            let today = Local::now().date_naive();
            let defaults = desk.new_draft(today).await?;
            let draft = OrderDraft {
                date: date.unwrap_or(defaults.date),
                supplier: supplier.unwrap_or(defaults.supplier),
                material,
                service_description: service,
                customer,
                commercial: commercial.unwrap_or(defaults.commercial),
            };
            let order = desk.orders.create_order(draft).await?;
            println!("{} {}", display_number(order.order_number), order.id);
        }
        Command::Delete { id } => {
            if !desk.orders.delete(OrderId(id.clone())).await? {
                bail!("no order with id {id}");
            }
            println!("deleted {id}");
        }
        Command::Export { id, out, dry_run } => {
            if dry_run {
                let mut canvas = RecordingCanvas::new();
                let document = desk.export(OrderId(id), &mut canvas).await?;
                for op in canvas.ops() {
                    println!("{op}");
                }
                println!("would save {}", document.filename);
            } else {
                let mut canvas = PdfCanvas::new(&out);
                let document = desk.export(OrderId(id), &mut canvas).await?;
                println!("{}", out.join(document.filename).display());
            }
        }
        Command::Suppliers { action } => run_directory(&desk.suppliers, action).await?,
        Command::Commercials { action } => run_directory(&desk.commercials, action).await?,
    }
    Ok(())
}

async fn run_directory<E>(
    client: &DirectoryClient<E>,
    action: DirectoryCommand,
) -> anyhow::Result<()>
where
    E: DirectoryEntry<Error = DirectoryError>,
{
    match action {
        DirectoryCommand::List => {
            for entry in client.sorted().await? {
                println!("{}  {}", entry.id(), entry.name());
            }
        }
        DirectoryCommand::Add { name } => {
            let entry = client.add(&name).await?;
            println!("{}  {}", entry.id(), entry.name());
        }
        DirectoryCommand::Remove { id } => {
            if !client.remove(E::make_id(id.clone())).await? {
                bail!("no {} with id {id}", E::KIND);
            }
            println!("removed {id}");
        }
    }
    Ok(())
}

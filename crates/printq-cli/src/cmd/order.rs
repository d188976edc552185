use crate::cmd::auth::require_session;
use crate::output::{print_json, print_orders};
use anyhow::Context;
use clap::Subcommand;
use printq_core::auth::{AuthConfig, Authenticator};
use printq_core::order::OrderDraft;
use printq_core::queue::{self, SortMode};
use printq_core::repo::OrderRepository;
use printq_core::store::JsonFileStore;
use printq_core::types::{Area, Part, Status};
use std::path::Path;

#[derive(Subcommand)]
pub enum OrderSubcommand {
    /// Submit a new print request
    Add {
        /// Requester name and registration number
        #[arg(long)]
        name: String,
        /// Plant area (Envase, Processos, Utilidades)
        #[arg(long)]
        area: String,
        /// Contact e-mail
        #[arg(long)]
        email: String,
        /// Part from the catalog, or "Outra"
        #[arg(long)]
        part: String,
        /// Description, required when part is "Outra"
        #[arg(long)]
        other_description: Option<String>,
        /// Manufacturer code
        #[arg(long)]
        manufacturer_code: String,
        /// Equipment the part belongs to
        #[arg(long)]
        equipment: String,
    },
    /// List the orders visible to the current session
    List {
        /// Sort mode: recency or status
        #[arg(long, default_value = "recency")]
        sort: String,
    },
    /// Change an order's status (administrator only)
    SetStatus {
        id: String,
        /// Target status: Pendente, "Em Andamento", Concluído (or concluido),
        /// Falha (short for "Falha / Cancelado")
        status: String,
    },
}

pub fn run(root: &Path, subcmd: OrderSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        OrderSubcommand::Add {
            name,
            area,
            email,
            part,
            other_description,
            manufacturer_code,
            equipment,
        } => add(
            root,
            OrderDraft {
                name_and_registration: name,
                area: area.parse::<Area>()?,
                email,
                part: part.parse::<Part>()?,
                other_part_description: other_description,
                manufacturer_code,
                equipment,
            },
            json,
        ),
        OrderSubcommand::List { sort } => list(root, sort.parse::<SortMode>()?, json),
        OrderSubcommand::SetStatus { id, status } => {
            set_status(root, &id, status.parse::<Status>()?, json)
        }
    }
}

fn add(root: &Path, draft: OrderDraft, json: bool) -> anyhow::Result<()> {
    let identity = require_session(root)?;
    let repo = OrderRepository::new(JsonFileStore::new(root));
    let order = repo.create(&identity, draft)?;

    if json {
        print_json(&order)?;
    } else {
        println!("Added order [{}]: {} for {}", order.id, order.part, order.equipment);
    }
    Ok(())
}

fn list(root: &Path, sort: SortMode, json: bool) -> anyhow::Result<()> {
    let identity = require_session(root)?;
    let config = AuthConfig::load(root).context("failed to load identity registry")?;
    let is_admin = Authenticator::new(config).is_administrator(&identity);

    let repo = OrderRepository::new(JsonFileStore::new(root));
    let visible = repo.list_visible(&identity, is_admin);
    let sorted = queue::sort(&visible, sort);

    if json {
        print_json(&sorted)?;
    } else if sorted.is_empty() {
        println!("No orders in the queue.");
    } else {
        print_orders(&sorted);
    }
    Ok(())
}

fn set_status(root: &Path, id: &str, status: Status, json: bool) -> anyhow::Result<()> {
    let identity = require_session(root)?;
    let config = AuthConfig::load(root).context("failed to load identity registry")?;
    let is_admin = Authenticator::new(config).is_administrator(&identity);

    let repo = OrderRepository::new(JsonFileStore::new(root));
    let order = repo.update_status(is_admin, id, status)?;

    if json {
        print_json(&order)?;
    } else {
        println!("Order [{}] is now: {}", order.id, order.status);
    }
    Ok(())
}

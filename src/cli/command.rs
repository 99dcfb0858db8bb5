use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "customer-store", version, about = "JSON-backed customer records")]
pub struct Cli {
    /// Path of the backing customers.json file [env: CUSTOMER_DATA_PATH] [default: ./Data/customers.json]
    #[arg(long)]
    pub data_path: Option<PathBuf>,

    /// Read-only URL tried when the backing file does not exist [env: CUSTOMER_FALLBACK_URL]
    #[arg(long)]
    pub fallback_url: Option<String>,

    /// Seed a placeholder customer when every read path fails [env: CUSTOMER_SENTINEL_ON_FAILURE]
    #[arg(long)]
    pub sentinel: bool,

    /// Read customers from this URL instead of the file (list and show only)
    #[arg(long, env = "CUSTOMER_REMOTE_URL")]
    pub remote_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List customers in stored order
    List,

    /// Show one customer
    Show {
        #[arg(long)]
        id: u32,
    },

    /// Add a new customer. The id is assigned by the store
    Add(CustomerFields),

    /// Replace every field of an existing customer
    Edit {
        /// Id of the customer to edit
        #[arg(long)]
        id: u32,

        #[command(flatten)]
        fields: CustomerFields,
    },

    /// Delete a customer by id
    Delete {
        #[arg(long)]
        id: u32,
    },
}

#[derive(Args, Debug)]
pub struct CustomerFields {
    /// Customer name
    #[arg(long)]
    pub name: String,

    /// Customer location
    #[arg(long)]
    pub location: String,

    /// Contact email address
    #[arg(long)]
    pub email: Option<String>,

    /// Contact phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// Postal address
    #[arg(long)]
    pub address: Option<String>,
}

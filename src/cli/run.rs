use crate::{
    config::StoreConfig,
    prelude::{
        AppError, Customer, CustomerReader, CustomerWriter, LocalFileStore, NewCustomer,
        RemoteReadOnlyStore, ReadFailurePolicy,
        command::{Cli, Commands, CustomerFields},
    },
};
use clap::Parser;
use tracing::debug;

pub fn run_app() -> Result<(), AppError> {
    // Loads .env first, so the `env =` fallback of --remote-url sees it too
    let config = StoreConfig::from_env();
    let cli = Cli::parse();

    if let Some(url) = &cli.remote_url {
        let store = RemoteReadOnlyStore::from_url(url)?;
        return run_read_only(store, cli.command);
    }

    let config = apply_overrides(config, &cli);
    debug!(?config, "opening customer store");

    let store = LocalFileStore::from_config(&config)?;
    run_command(store, cli.command)
}

/// Command-line flags take precedence over the environment.
fn apply_overrides(mut config: StoreConfig, cli: &Cli) -> StoreConfig {
    if let Some(path) = &cli.data_path {
        config.data_path = path.clone();
    }
    if let Some(url) = &cli.fallback_url {
        config.fallback_url = Some(url.clone());
    }
    if cli.sentinel {
        config.read_failure = ReadFailurePolicy::Sentinel;
    }
    config
}

fn run_command<S: CustomerWriter>(mut store: S, command: Commands) -> Result<(), AppError> {
    match command {
        Commands::List => list(&mut store),
        Commands::Show { id } => show(&mut store, id),

        Commands::Add(fields) => {
            let customer = store.add(new_customer(fields))?;
            println!("Customer added with id {}", customer.customer_id);
            Ok(())
        }

        Commands::Edit { id, fields } => {
            let customer = new_customer(fields).into_customer(id);
            if store.update(customer)? {
                println!("Customer updated successfully");
            } else {
                eprintln!("{}", AppError::NotFound(format!("Customer {id}")));
            }
            Ok(())
        }

        Commands::Delete { id } => {
            if store.delete(id)? {
                println!("Customer deleted successfully");
            } else {
                eprintln!("{}", AppError::NotFound(format!("Customer {id}")));
            }
            Ok(())
        }
    }
}

fn run_read_only(mut store: RemoteReadOnlyStore, command: Commands) -> Result<(), AppError> {
    match command {
        Commands::List => list(&mut store),
        Commands::Show { id } => show(&mut store, id),
        _ => Err(AppError::ReadOnly("Remote customer store".to_string())),
    }
}

fn show<S: CustomerReader>(store: &mut S, id: u32) -> Result<(), AppError> {
    match store.get_by_id(id) {
        Some(customer) => println!("{}", display_customer(customer)),
        None => eprintln!("{}", AppError::NotFound(format!("Customer {id}"))),
    }
    Ok(())
}

fn list<S: CustomerReader>(store: &mut S) -> Result<(), AppError> {
    let customers = store.load_all();
    if customers.is_empty() {
        println!("No customer yet");
        return Ok(());
    }

    for c in customers {
        println!("{}", listing_row(c));
    }
    Ok(())
}

fn new_customer(fields: CustomerFields) -> NewCustomer {
    NewCustomer {
        customer_name: fields.name,
        customer_location: fields.location,
        email: fields.email,
        phone: fields.phone,
        address: fields.address,
    }
}

pub fn listing_row(c: &Customer) -> String {
    format!(
        "{:>3}. {:<20} {:15} {:^30} {:<15}",
        c.customer_id,
        c.customer_name,
        c.customer_location,
        c.email.as_deref().unwrap_or_default(),
        c.phone.as_deref().unwrap_or_default()
    )
}

pub fn display_customer(c: &Customer) -> String {
    format!(
        "Id: {}\nName: {}\nLocation: {}\nEmail: {}\nPhone: {}\nAddress: {}",
        c.customer_id,
        c.customer_name,
        c.customer_location,
        c.email.as_deref().unwrap_or("-"),
        c.phone.as_deref().unwrap_or("-"),
        c.address.as_deref().unwrap_or("-")
    )
}

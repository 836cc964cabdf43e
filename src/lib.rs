pub mod cli;
pub mod core;
pub mod providers;
pub mod store;

use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

use crate::core::analytics::Period;
use crate::core::category::CategoryRegistry;
use crate::core::config::AppConfig;
use crate::core::currency::CurrencyConverter;
use crate::providers::exchange_rate_api::ExchangeRateApiProvider;
use crate::store::ByteStore;
use crate::store::disk::FjallStore;
use crate::store::expenses::ExpenseStore;

pub enum AppCommand {
    Add {
        category: String,
        amount: f64,
        currency: String,
        date: Option<String>,
        receipt: Option<String>,
    },
    List {
        period: Period,
        page: usize,
        per_page: usize,
    },
    Dashboard {
        period: Period,
    },
    Remove {
        id: String,
    },
    CategoryList,
    CategoryAdd {
        name: String,
        icon: String,
        bg_color: String,
        text_color: String,
    },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Expense tracker starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let backend: Arc<dyn ByteStore> = Arc::new(FjallStore::open(&config.data_path()?)?);
    let provider = Arc::new(ExchangeRateApiProvider::new(
        &config.rates_provider.base_url,
        &config.currency,
    ));
    let converter = CurrencyConverter::new(provider, &config.currency);

    let registry = CategoryRegistry::new(Arc::clone(&backend));
    let expenses = ExpenseStore::new(backend, converter);

    match command {
        AppCommand::Add {
            category,
            amount,
            currency,
            date,
            receipt,
        } => {
            cli::add::run(
                &expenses,
                &registry,
                &category,
                amount,
                &currency,
                date.as_deref(),
                receipt,
            )
            .await
        }
        AppCommand::List {
            period,
            page,
            per_page,
        } => cli::list::run(&expenses, &registry, period, page, per_page),
        AppCommand::Dashboard { period } => cli::dashboard::run(&expenses, &config, period),
        AppCommand::Remove { id } => cli::remove::run(&expenses, &id).await,
        AppCommand::CategoryList => cli::category::list(&registry),
        AppCommand::CategoryAdd {
            name,
            icon,
            bg_color,
            text_color,
        } => cli::category::add(&registry, &name, &icon, &bg_color, &text_color),
    }
}

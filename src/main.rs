use clap::Parser;
use moto_customizer::core::export;
use moto_customizer::domain::model::PartCategory;
use moto_customizer::domain::ports::PartsCatalog;
use moto_customizer::utils::error::ErrorSeverity;
use moto_customizer::utils::logger;
use moto_customizer::{
    Catalog, CategoryFilter, CliConfig, Command, CustomizerError, EditingSession, PartsFilter,
};

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting moto-customizer");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

fn run(config: &CliConfig) -> moto_customizer::Result<()> {
    let catalog = config.load_catalog()?;
    tracing::info!("✅ Catalog loaded with {} parts", catalog.parts().len());

    match &config.command {
        Command::Catalog => print_catalog(&catalog),
        Command::Parts {
            model,
            category,
            search,
        } => {
            let category: CategoryFilter =
                category
                    .parse()
                    .map_err(|e| CustomizerError::InvalidConfigValueError {
                        field: "category".to_string(),
                        value: category.clone(),
                        reason: format!("{}", e),
                    })?;
            print_parts(&catalog, model.as_deref(), category, search);
        }
        Command::Build {
            brand,
            model,
            engine,
            attach,
            remove,
            select,
            format,
        } => {
            let mut session = EditingSession::new(&catalog);
            session.select_brand(brand)?;
            session.select_model(model)?;
            if let Some(engine) = engine {
                session.select_engine(engine)?;
            }

            for id in attach {
                session.attach_from_catalog(*id)?;
            }
            for id in remove {
                session.remove(*id);
            }
            if let Some(id) = select {
                session.store_mut().select(Some(*id));
            }

            let output = export::render(&session.report(), *format)?;
            print!("{}", output);
        }
    }

    Ok(())
}

fn print_catalog(catalog: &Catalog) {
    println!("📋 Catalog:");
    for brand in catalog.brands() {
        println!("  {}", brand);
        for model in catalog.models(&brand) {
            println!("    {} [{}]", model, catalog.engines(&model).join(", "));
        }
    }
}

// Standalone listing: there is no session here, so rows carry no attached or
// selected status. `EditingSession::part_listings` provides those.
fn print_parts(catalog: &Catalog, model: Option<&str>, category: CategoryFilter, search: &str) {
    let filter = PartsFilter {
        model: model.map(str::to_string),
        category,
        search: search.to_string(),
    };
    let parts = filter.apply(catalog.parts());

    println!("Compatible Parts ({})", parts.len());
    if category == CategoryFilter::Only(PartCategory::Engine) && !parts.is_empty() {
        println!("Showing all compatible parts except Engine components");
    }
    for part in parts {
        println!(
            "  #{:<3} {:<32} {:<18} {:>10.0}  {:.1} kg",
            part.id, part.name, part.category, part.price, part.weight
        );
    }
}

use crate::infra::{InMemoryConfirmationPublisher, InMemoryOrderRepository};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

use doorstep::catalog::{CatalogImporter, ServiceCatalog, ServiceCategory};
use doorstep::error::AppError;
use doorstep::ordering::cart::Cart;
use doorstep::ordering::checkout::{CheckoutForm, CheckoutService, FormValidator};
use doorstep::ordering::request::{RequestForm, RequestWizard, PRESET_TIME_SLOTS};
use doorstep::ordering::tracking::{Rating, StepState, TrackingStage};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional partner CSV export to hydrate the catalog
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Skip the request wizard portion of the demo
    #[arg(long)]
    pub(crate) skip_wizard: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogListArgs {
    /// Optional partner CSV export to hydrate the catalog
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Restrict the listing to one category (key or label)
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Case-insensitive company name filter
    #[arg(long)]
    pub(crate) query: Option<String>,
}

fn load_catalog(csv: Option<PathBuf>) -> Result<ServiceCatalog, AppError> {
    match csv {
        Some(path) => Ok(CatalogImporter::from_path(path)?),
        None => Ok(ServiceCatalog::standard()),
    }
}

pub(crate) fn run_catalog_list(args: CatalogListArgs) -> Result<(), AppError> {
    let CatalogListArgs {
        csv,
        category,
        query,
    } = args;

    let catalog = load_catalog(csv)?;

    let category = match category.as_deref() {
        None => None,
        Some(raw) => match ServiceCategory::parse(raw) {
            Some(category) => Some(category),
            None => {
                let keys: Vec<&str> = ServiceCategory::ordered()
                    .into_iter()
                    .map(ServiceCategory::key)
                    .collect();
                println!("Unknown category '{}'; valid keys: {}", raw, keys.join(", "));
                return Ok(());
            }
        },
    };

    let query = query.unwrap_or_default();
    let companies = catalog.search_companies(&query, category, 1, usize::MAX);

    if companies.is_empty() {
        println!("No companies matched.");
        return Ok(());
    }

    for company in companies {
        println!(
            "{} [{}] ({})",
            company.name,
            company.category.label(),
            company.id.0
        );
        for offering in catalog.offerings_for(&company.id) {
            println!("  - {} | ${:.2}", offering.name, offering.price);
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { csv, skip_wizard } = args;

    println!("Doorstep ordering demo");
    let catalog = load_catalog(csv)?;
    println!(
        "- Catalog: {} companies, {} offerings",
        catalog.companies().len(),
        catalog.offerings().len()
    );

    let offerings = catalog.offerings();
    if offerings.is_empty() {
        println!("Catalog has no offerings; nothing to demo.");
        return Ok(());
    }

    println!("\nCart");
    let mut cart = Cart::new();
    cart.add_item(offerings[0].snapshot());
    cart.add_item(offerings[0].snapshot());
    if let Some(second) = offerings.get(1) {
        cart.add_item(second.snapshot());
    }
    cart.update_quantity(&offerings[0].id, 3);
    cart.update_special_requests(&offerings[0].id, "Call on arrival");
    for item in cart.line_items() {
        println!(
            "- {} x{} @ ${:.2} = ${:.2}",
            item.name,
            item.quantity,
            item.price,
            item.line_total()
        );
    }
    let totals = cart.totals();
    println!("Totals: {} items | ${:.2}", totals.items, totals.price);

    if !skip_wizard {
        println!("\nRequest wizard");
        let mut wizard = RequestWizard::new();
        if let Some(company) = catalog.companies().first() {
            // Demonstrate the precondition guard before the proper walk.
            if let Err(err) = wizard.select_company(company.clone()) {
                println!("- Refused early company pick: {}", err);
            }

            if let Err(err) = wizard.select_category(company.category) {
                println!("- Category selection failed: {}", err);
            }
            if let Err(err) = wizard.select_company(company.clone()) {
                println!("- Company selection failed: {}", err);
            }
            println!(
                "- At step {} ({})",
                wizard.step().index(),
                wizard.step().label()
            );

            let mut form = RequestForm {
                title: "Broken AC".to_string(),
                address: "123 Main St".to_string(),
                time_slot: PRESET_TIME_SLOTS[1].to_string(),
                description: "Unit drips and barely cools.".to_string(),
                tags: Vec::new(),
            };
            form.add_tag("High Rated");

            match wizard.submit(&form) {
                Ok(submission) => println!(
                    "- Request accepted for {} ({} at {})",
                    submission.company.name, submission.title, submission.time_slot
                ),
                Err(err) => println!("- Request rejected: {}", err),
            }
        }
    }

    println!("\nCheckout");
    let repository = Arc::new(InMemoryOrderRepository::default());
    let confirmations = Arc::new(InMemoryConfirmationPublisher::default());
    let service = CheckoutService::new(repository, confirmations.clone());

    let empty_report = FormValidator.validate(&CheckoutForm::default());
    println!(
        "- Blank address form flags: {}",
        empty_report.field_keys().join(", ")
    );

    let form = CheckoutForm {
        building_name: "Marina Heights".to_string(),
        house_number: "1204".to_string(),
        floor: "12".to_string(),
        street: "Al Marsa Street".to_string(),
        phone: "+971501234567".to_string(),
        name: "Dana K".to_string(),
        ..CheckoutForm::default()
    };

    let record = match service.place_order(&mut cart, &form) {
        Ok(record) => record,
        Err(err) => {
            println!("- Checkout failed: {}", err);
            return Ok(());
        }
    };
    println!(
        "- Placed {} at {} | cart now has {} items | {} confirmation(s) sent",
        record.order_id,
        record
            .placed_at
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M"),
        cart.totals().items,
        confirmations.events().len()
    );

    println!("\nTracking");
    for _ in 0..TrackingStage::ordered().len() {
        if let Err(err) = service.advance(&record.order_id) {
            println!("- Advance failed: {}", err);
            break;
        }
    }
    let tracked = match service.track(&record.order_id) {
        Ok(tracked) => tracked,
        Err(err) => {
            println!("- Tracking unavailable: {}", err);
            return Ok(());
        }
    };
    println!("- Status: {}", tracked.status.label());
    for step in tracked.timeline() {
        let marker = match step.state {
            StepState::Completed => "[x]",
            StepState::Active => "[>]",
            StepState::Upcoming => "[ ]",
        };
        println!("  {} {}", marker, step.label);
    }

    match Rating::new(5, "Great service") {
        Ok(rating) => match service.rate(&record.order_id, rating) {
            Ok(rated) => println!(
                "- Rated {} star(s)",
                rated.rating.map(|r| r.stars()).unwrap_or_default()
            ),
            Err(err) => println!("- Rating rejected: {}", err),
        },
        Err(err) => println!("- Rating invalid: {}", err),
    }

    Ok(())
}

use crate::infra::InMemorySessionStore;
use chrono::{Local, NaiveDate};
use clap::Args;
use renthub::application::{
    DocumentKind, EmploymentInfo, PersonalInfo, RentalHistory, SessionAdvance,
    WizardSessionService,
};
use renthub::auth::SimulatedAuthenticator;
use renthub::config::WizardConfig;
use renthub::error::AppError;
use renthub::listings::{
    ListingProvider, ListingQuery, PropertyId, PropertyRecord, StaticListingCatalog,
};
use renthub::tenancy::TenantDashboard;
use std::sync::Arc;
use std::time::Duration;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Simulated sign-in delay in milliseconds.
    #[arg(long, default_value_t = 250)]
    pub(crate) login_delay_ms: u64,
    /// Listing id to apply for (defaults to the first catalogue entry).
    #[arg(long)]
    pub(crate) property: Option<String>,
    /// Application fee charged at the final step, in whole dollars.
    #[arg(long, default_value_t = 50)]
    pub(crate) fee: u32,
    /// Override the submission date (YYYY-MM-DD, defaults to today).
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Skip the tenant dashboard portion of the demo output.
    #[arg(long)]
    pub(crate) skip_dashboard: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ListingSearchArgs {
    /// Free-text search over location, zip, and address.
    #[arg(long, default_value = "")]
    pub(crate) query: String,
    /// Minimum monthly price in whole dollars.
    #[arg(long, default_value_t = 0)]
    pub(crate) min_price: u32,
    /// Maximum monthly price in whole dollars.
    #[arg(long, default_value_t = 5000)]
    pub(crate) max_price: u32,
    /// Minimum bedroom count (0 matches any).
    #[arg(long, default_value_t = 0)]
    pub(crate) bedrooms: u8,
    /// Minimum bathroom count (0 matches any).
    #[arg(long, default_value_t = 0)]
    pub(crate) bathrooms: u8,
    /// Only show smart-home listings.
    #[arg(long)]
    pub(crate) smart_home: bool,
}

pub(crate) fn run_listing_search(args: ListingSearchArgs) -> Result<(), AppError> {
    let records = StaticListingCatalog::default().list_properties();
    let results = filter_catalog(&args, &records);

    println!(
        "Listing search: {} of {} listings match",
        results.len(),
        records.len()
    );
    for record in &results {
        render_listing(record);
    }

    Ok(())
}

/// One conjunctive pass over the catalogue; a blank `--query` leaves the
/// text criterion inactive without disturbing the other flags.
fn filter_catalog(args: &ListingSearchArgs, records: &[PropertyRecord]) -> Vec<PropertyRecord> {
    let query = ListingQuery {
        price_min: args.min_price,
        price_max: args.max_price,
        min_bedrooms: args.bedrooms,
        min_bathrooms: args.bathrooms,
        smart_home_only: args.smart_home,
        text: args.query.clone(),
    };
    query.apply(records)
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        login_delay_ms,
        property,
        fee,
        today,
        skip_dashboard,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());

    println!("RentHub end-to-end demo");

    let authenticator =
        SimulatedAuthenticator::with_delay(Duration::from_millis(login_delay_ms));
    println!("\nSigning in (simulated, {login_delay_ms}ms)...");
    match authenticator.sign_in().resolve().await {
        Some(outcome) => println!(
            "  authenticated={} navigate_to={:?}",
            outcome.authenticated, outcome.navigate_to
        ),
        None => println!("  sign-in cancelled before it resolved"),
    }

    let catalog = StaticListingCatalog::default();
    let record = property
        .map(PropertyId)
        .and_then(|id| catalog.property(&id))
        .or_else(|| catalog.list_properties().into_iter().next())
        .expect("catalogue is never empty");
    println!("\nApplying for listing {}:", record.id.as_str());
    render_listing(&record);

    let store = Arc::new(InMemorySessionStore::default());
    let sessions = Arc::new(WizardSessionService::new(
        store,
        WizardConfig {
            application_fee: fee,
        },
    ));

    let view = sessions.open(Some(record.snapshot()))?;
    let id = view.session_id;
    println!("\nSession {} opened on step '{}'", id.0, view.current_step);

    sessions.update_personal(&id, demo_personal())?;
    sessions.update_employment(&id, demo_employment())?;
    sessions.update_rental_history(&id, demo_rental_history())?;
    for kind in DocumentKind::ALL {
        sessions.upload_document(&id, kind)?;
        println!("  uploaded {}", kind.label());
    }
    sessions.agree_to_terms(&id, true)?;

    loop {
        match sessions.advance(&id)? {
            SessionAdvance::Moved(state) => {
                println!(
                    "  -> {} ({}/{})",
                    state.current_step,
                    state.step_index + 1,
                    state.total_steps
                );
            }
            SessionAdvance::Blocked { reason, .. } => {
                println!("  blocked: {reason}");
                sessions.pay_fee(&id)?;
                println!("  paid ${fee} application fee");
            }
            SessionAdvance::Submitted(application) => {
                println!(
                    "\nApplication submitted on {} for {} (fee ${})",
                    today, application.property.address, application.fee_paid
                );
                break;
            }
        }
    }

    if !skip_dashboard {
        render_dashboard(&TenantDashboard::sample());
    }

    Ok(())
}

fn render_listing(record: &PropertyRecord) {
    println!(
        "  [{}] {} | ${}/mo | {}bd/{}ba | {} sqft{}",
        record.id.as_str(),
        record.address,
        record.price,
        record.bedrooms,
        record.bathrooms,
        record.sqft,
        if record.is_smart_home {
            " | smart home"
        } else {
            ""
        }
    );
}

fn render_dashboard(dashboard: &TenantDashboard) {
    println!("\nTenant dashboard snapshot");
    println!(
        "  Lease: {} at ${}/mo, next due {}, ends {}",
        dashboard.lease.address,
        dashboard.lease.rent,
        dashboard.lease.due_date,
        dashboard.lease.lease_end
    );
    println!("  Payment history ({} records):", dashboard.payment_history.len());
    for record in &dashboard.payment_history {
        println!("    {} ${} {:?}", record.date, record.amount, record.status);
    }
    println!(
        "  Maintenance ({} open):",
        dashboard.open_maintenance_count()
    );
    for request in &dashboard.maintenance_requests {
        println!(
            "    {} - {} [{}]",
            request.date,
            request.title,
            request.status.label()
        );
    }
}

fn demo_personal() -> PersonalInfo {
    PersonalInfo {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: "johndoe@example.com".to_string(),
        phone: "(555) 123-4567".to_string(),
        dob: "01/15/1990".to_string(),
        ssn: "123-45-6789".to_string(),
    }
}

fn demo_employment() -> EmploymentInfo {
    EmploymentInfo {
        employer: "Acme Corp".to_string(),
        position: "Software Engineer".to_string(),
        income: "5000".to_string(),
        employment_length: "2 years".to_string(),
        supervisor_name: "Jane Smith".to_string(),
        supervisor_phone: "(555) 987-6543".to_string(),
    }
}

fn demo_rental_history() -> RentalHistory {
    RentalHistory {
        current_address: "456 Oak Avenue, Oakland, CA 94601".to_string(),
        current_landlord: "Pat Rivers".to_string(),
        current_landlord_phone: "(555) 222-3344".to_string(),
        length_of_stay: "3 years".to_string(),
        reason_for_leaving: "Relocating for work".to_string(),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

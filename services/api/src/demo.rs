use crate::infra::{
    default_trust_config, parse_date, InMemoryCatalogRepository, InMemoryPointsLedger,
};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use studworks::catalog::{
    compute_trust_score, BuyerId, CatalogWorkView, MarketplaceError, MarketplaceService, Subject,
    TrustScore, WorkSubmission, POINTS_PACKAGES,
};
use studworks::error::AppError;
use studworks::import::{insert_statement, ListingImporter};

const DEMO_LISTING: &str = "Name,Public URL\n\
Автоматизация процесса сварки (дипломная работа),https://disk.example/d/welding\n\
Расчёт балки (курсовая работа),https://disk.example/d/beam\n\
Электроснабжение цеха ООО «Прогресс» (дипломная работа),https://disk.example/d/workshop\n\
Отчёт по производственной практике (отчёт по практике),\n";

#[derive(Args, Debug)]
pub(crate) struct TrustScoreArgs {
    /// Buyer rating on the 0-5 scale
    #[arg(long)]
    pub(crate) rating: f64,
    /// Completed purchase count
    #[arg(long, default_value_t = 0)]
    pub(crate) purchases: u32,
    /// Score the work as a marketplace hit
    #[arg(long)]
    pub(crate) hit: bool,
    /// Score the work as recently published
    #[arg(long = "new")]
    pub(crate) is_new: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Listing CSV to import (defaults to a built-in sample)
    #[arg(long)]
    pub(crate) listing: Option<PathBuf>,
    /// Publication date for imported works (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Skip the purchase portion of the demo
    #[arg(long)]
    pub(crate) skip_purchase: bool,
}

pub(crate) fn run_trust_score(args: TrustScoreArgs) -> Result<(), AppError> {
    let TrustScoreArgs {
        rating,
        purchases,
        hit,
        is_new,
    } = args;

    let score = compute_trust_score(rating, purchases, hit, is_new);
    render_trust_score(&score);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        listing,
        today,
        skip_purchase,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());

    println!("Student works marketplace demo");

    let works = match &listing {
        Some(path) => {
            println!("Listing source: {}", path.display());
            ListingImporter::from_path(path)?
        }
        None => {
            println!("Listing source: built-in sample (pass --listing for a real export)");
            ListingImporter::from_reader(std::io::Cursor::new(DEMO_LISTING))?
        }
    };

    println!("\nClassified folders");
    for work in &works {
        println!(
            "- {} | {} | {} | {} points | {}",
            work.title,
            work.work_type,
            work.subject.label(),
            work.price_points,
            work.composition
        );
        if let Some(university) = &work.university {
            println!("  customer: {university}");
        }
    }

    if let Some(first) = works.first() {
        println!("\nSQL preview (first row)");
        println!("{}", insert_statement("public", first));
    }

    let repository = Arc::new(InMemoryCatalogRepository::default());
    let ledger = Arc::new(InMemoryPointsLedger::default());
    let service = Arc::new(MarketplaceService::new(
        repository,
        ledger,
        default_trust_config(),
    ));

    let mut published = Vec::new();
    for work in works {
        match service.publish(work.into_submission(today)) {
            Ok(work) => published.push(work),
            Err(err) => println!("  publication rejected: {err}"),
        }
    }
    // A seasoned bestseller alongside the fresh imports, so every trust tier
    // shows up in the catalog listing.
    let bestseller = service.publish(bestseller_submission(today))?;

    println!("\nCatalog by trust score");
    for view in service.list()? {
        render_catalog_line(&view);
    }

    if skip_purchase {
        return Ok(());
    }

    println!("\nPoints storefront");
    for package in POINTS_PACKAGES {
        println!(
            "- package {}: {} points for {} rub (+{} bonus)",
            package.id, package.points, package.price_rubles, package.bonus
        );
    }

    let buyer = BuyerId("demo-buyer".to_string());
    let top_up = service.top_up(&buyer, "3000")?;
    println!(
        "\nTopped up {} with package {}: +{} points (balance {})",
        top_up.buyer_id.0, top_up.package_id, top_up.credited_points, top_up.balance_after
    );

    if let Some(cheapest) = published.iter().min_by_key(|work| work.effective_price()) {
        match service.purchase(&buyer, &cheapest.id, today) {
            Ok(receipt) => println!(
                "Bought {} for {} points (balance {})",
                cheapest.title, receipt.points_spent, receipt.balance_after
            ),
            Err(err) => println!("Purchase failed: {err}"),
        }
    }

    // The bestseller costs more than the remaining balance, demonstrating the
    // typed insufficient-points failure.
    match service.purchase(&buyer, &bestseller.id, today) {
        Ok(receipt) => println!(
            "Bought {} for {} points (balance {})",
            bestseller.title, receipt.points_spent, receipt.balance_after
        ),
        Err(MarketplaceError::Ledger(err)) => {
            println!("Second purchase declined as expected: {err}")
        }
        Err(err) => println!("Second purchase failed: {err}"),
    }

    let balance = service.balance(&buyer)?;
    println!("Final balance for {}: {} points", buyer.0, balance);

    Ok(())
}

fn bestseller_submission(published_on: NaiveDate) -> WorkSubmission {
    WorkSubmission {
        title: "Модернизация системы электроснабжения завода".to_string(),
        work_type: "дипломная работа".to_string(),
        subject: Subject::ElectricalPower,
        description:
            "Дипломная работа по теме «Модернизация системы электроснабжения завода». Направление: электроэнергетика."
                .to_string(),
        composition: "Пояснительная записка, графика, чертежи".to_string(),
        university: None,
        price_points: 6000,
        rating: 4.9,
        purchase_count: 150,
        is_hit: true,
        is_new: false,
        discount_percent: Some(10),
        storage_link: None,
        published_on,
    }
}

fn render_catalog_line(view: &CatalogWorkView) {
    println!(
        "- [{:>4.1}] {} | {} | {} | {} points",
        view.trust.score,
        view.badge.label,
        view.work.title,
        view.work.subject.label(),
        view.effective_price
    );
}

fn render_trust_score(score: &TrustScore) {
    let badge = score.badge();
    println!("Trust score: {:.1} ({})", score.score, badge.label);
    println!("{}", badge.description);
    println!("Components:");
    for component in &score.components {
        println!(
            "  - {:?}: {:+.2} ({})",
            component.factor, component.delta, component.notes
        );
    }
}


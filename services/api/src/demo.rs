use crate::infra::{InMemoryAssessmentStore, InMemoryCrmPublisher, InMemoryProposalStore};
use clap::Args;
use quoteflow::error::AppError;
use quoteflow::flows::assessment::{
    AnswerRequest, AssessmentRequest, AssessmentService, QuestionBank, ScoreBand,
};
use quoteflow::flows::category::ServiceCategory;
use quoteflow::flows::leads::ContactInfo;
use quoteflow::flows::proposal::{
    BillingMode, CustomItemRequest, Discount, ProposalRequest, ProposalService, ServiceCatalog,
    ServiceSelectionRequest, Totals,
};
use quoteflow::i18n::Locale;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Locale for the rendered copy (en, es, or fr). Defaults to English.
    #[arg(long)]
    pub(crate) locale: Option<String>,
    /// Skip the assessment portion of the demo.
    #[arg(long)]
    pub(crate) skip_assessment: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let locale = args
        .locale
        .as_deref()
        .map(Locale::from_tag)
        .unwrap_or_default();

    let crm = Arc::new(InMemoryCrmPublisher::default());
    let catalog = Arc::new(ServiceCatalog::standard());
    let proposals = Arc::new(ProposalService::new(
        catalog.clone(),
        Arc::new(InMemoryProposalStore::new(
            "http://localhost:3000/proposals",
        )),
        crm.clone(),
    ));

    println!("Quote builder demo");

    let services = vec![
        select("website-build"),
        select("seo-monthly"),
        select("social-media-management"),
    ];
    let custom_items = vec![CustomItemRequest {
        name: "Launch photography".to_string(),
        price: 350.0,
        billing: BillingMode::OneTime,
    }];
    let discount = Some(Discount::Percentage(10.0));

    println!("Selected services:");
    for request in &services {
        if let Some(item) = catalog.service(&request.service_id) {
            println!(
                "- {} | {} | {:.2}",
                item.name.resolve(locale),
                item.billing.label(),
                item.price
            );
        }
    }
    for item in &custom_items {
        println!("- {} | {} | {:.2} (custom)", item.name, item.billing.label(), item.price);
    }

    match proposals.quote(&services, &custom_items, discount.as_ref()) {
        Ok(totals) => {
            println!("\nQuote preview (10% discount applied)");
            render_totals(&totals);
        }
        Err(err) => {
            println!("  Quote unavailable: {err}");
            return Ok(());
        }
    }

    let record = match proposals.submit(ProposalRequest {
        contact: demo_contact(),
        services,
        custom_items,
        discount,
        source_assessment: None,
    }) {
        Ok(record) => record,
        Err(err) => {
            println!("  Submission rejected: {err}");
            return Ok(());
        }
    };
    println!(
        "\nStored proposal {} -> {}",
        record.id.0, record.view_url
    );

    if !args.skip_assessment {
        run_assessment_demo(locale, &catalog, crm.clone());
    }

    let leads = crm.leads();
    println!("\nCaptured CRM leads");
    for lead in leads {
        println!(
            "- {:?}: {} <{}> ref {}",
            lead.source, lead.name, lead.email, lead.reference
        );
    }

    Ok(())
}

fn run_assessment_demo(locale: Locale, catalog: &ServiceCatalog, crm: Arc<InMemoryCrmPublisher>) {
    println!("\nMarketing assessment demo");
    let assessments = AssessmentService::new(
        Arc::new(QuestionBank::standard()),
        Arc::new(InMemoryAssessmentStore::new(
            "http://localhost:3000/assessments",
        )),
        crm,
    );

    // Strong answers everywhere except SEO, paid ads, and automation, so the
    // weak categories produce recommendations.
    let answers: Vec<AnswerRequest> = assessments
        .bank()
        .questions()
        .iter()
        .map(|question| {
            let option_index = match question.category {
                ServiceCategory::Seo | ServiceCategory::Ads | ServiceCategory::AiAutomation => {
                    question.options.len() - 1
                }
                _ => 0,
            };
            AnswerRequest {
                question_id: question.id.to_string(),
                option_index,
            }
        })
        .collect();

    let record = match assessments.submit(AssessmentRequest {
        contact: demo_contact(),
        answers,
    }) {
        Ok(record) => record,
        Err(err) => {
            println!("  Submission rejected: {err}");
            return;
        }
    };

    println!("Category scores:");
    for score in &record.snapshot.category_scores {
        let band = ScoreBand::for_score(score.percentage);
        println!(
            "- {}: {}/{} ({}%) {}",
            score.category.label(),
            score.score,
            score.max_score,
            score.percentage,
            band.label(locale)
        );
    }

    let overall = record.snapshot.overall_score;
    println!(
        "Overall: {}% ({})",
        overall,
        ScoreBand::for_score(overall).label(locale)
    );

    if record.snapshot.recommended_service_ids.is_empty() {
        println!("Recommendations: none");
    } else {
        println!("Recommended services:");
        for id in &record.snapshot.recommended_service_ids {
            if let Some(item) = catalog.service(id) {
                println!(
                    "- {} | {} | {:.2}",
                    item.name.resolve(locale),
                    item.billing.label(),
                    item.price
                );
            }
        }
    }

    println!(
        "Stored assessment {} -> {}",
        record.id.0, record.view_url
    );
}

fn render_totals(totals: &Totals) {
    println!("- One-time total: {:.2}", totals.one_time_total);
    println!("- Monthly total: {:.2}", totals.monthly_total);
    println!("- Hosting fee: {:.2}", totals.hosting_fee);
    println!("- Subtotal: {:.2}", totals.subtotal);
    println!("- Discount: -{:.2}", totals.discount_amount);
    println!("- Grand total: {:.2}", totals.grand_total);
}

fn select(service_id: &str) -> ServiceSelectionRequest {
    ServiceSelectionRequest {
        service_id: service_id.to_string(),
        quantity: 1,
    }
}

fn demo_contact() -> ContactInfo {
    ContactInfo {
        name: "Ava Chen".to_string(),
        email: "ava@harborlane.test".to_string(),
        company: Some("Harbor Lane Goods".to_string()),
        phone: None,
    }
}

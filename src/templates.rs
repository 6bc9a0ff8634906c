//! Fixed phrase catalogs and outreach composition.
//!
//! Every pool is an ordered `&'static` slice behind a total match on the
//! role/industry/product enums. Ordering defines the index space the
//! deterministic selector picks from: reordering or inserting entries
//! changes generated output for every previously-seen key and must be
//! treated as a breaking change.

use crate::classify::{classify_role, IndustryCategory, ProductLabel, RoleCategory};
use crate::normalize::title_case;
use crate::selector::pick_index;

/// Subject phrase pool for a role/industry pairing. Only the maintenance
/// role carries industry-specific pools; everything else uses its default.
fn subject_pool(role: RoleCategory, industry: IndustryCategory) -> &'static [&'static str] {
    match role {
        RoleCategory::Maintenance => match industry {
            IndustryCategory::Discrete => &[
                "Cut unplanned downtime on the line with {product}",
                "Stabilize asset uptime in discrete manufacturing with {product}",
                "Fewer surprises on critical equipment — {product}",
            ],
            IndustryCategory::Aerospace => &[
                "Improve fleet & ground asset uptime — {product}",
                "Maintenance leaders in A&D: reduce reactive work with {product}",
                "A&D uptime without extra headcount — {product}",
            ],
            _ => &[
                "Improve asset reliability with {product}",
                "Cut unplanned downtime — {product}",
                "Predictable performance from critical assets — {product}",
            ],
        },
        RoleCategory::Quality => &[
            "Faster quality cycles & cleaner audits — {product}",
            "Reduce compliance friction with {product}",
            "Make quality predictable with {product}",
        ],
        RoleCategory::Projects => &[
            "Project controls that hold the line — {product}",
            "Stop late surprises in cost & schedule — {product}",
            "Forecast accuracy that sticks — {product}",
        ],
        RoleCategory::Operations => &[
            "Make operations predictable with {product}",
            "Control variability across shifts — {product}",
            "Fewer bottlenecks, clearer flow — {product}",
        ],
        RoleCategory::Engineering => &[
            "Deliver designs faster with {product}",
            "Reduce rework & surprises — {product}",
            "Cleaner models, cleaner handoffs — {product}",
        ],
        RoleCategory::Safety => &[
            "Lower incident risk without slowing the line — {product}",
            "Simplify compliance and improve safety — {product}",
            "Fewer near-misses with better visibility — {product}",
        ],
        RoleCategory::It => &[
            "Less tool sprawl, clearer outcomes — {product}",
            "Integrations without the drag — {product}",
            "Operate with a simpler stack — {product}",
        ],
        RoleCategory::Vp => &[
            "Improve predictability without adding complexity — {product}",
            "Visibility you can act on — {product}",
            "Hold the line on margin with {product}",
        ],
        RoleCategory::Exec => &[
            "Improve margin predictability with {product}",
            "Operational confidence across sites — {product}",
            "Clarity on reliability, quality & cost — {product}",
        ],
        RoleCategory::Director => &[
            "Boost cross-team visibility — {product}",
            "Make execution repeatable with {product}",
            "Fewer fires, more follow-through — {product}",
        ],
        RoleCategory::Manager => &[
            "Hit targets with less churn — {product}",
            "Keep teams moving in the same direction — {product}",
            "Less busywork, more progress — {product}",
        ],
        RoleCategory::Ic => &[
            "Remove busywork and move faster — {product}",
            "Make work easier with {product}",
            "Clarity to execute — {product}",
        ],
    }
}

/// Opening "pain" sentence per role, used in paragraph one.
fn role_pain_pool(role: RoleCategory) -> &'static [&'static str] {
    match role {
        RoleCategory::Maintenance => &[
            "You’re asked to keep uptime high with constrained headcount.",
            "Manual PMs miss early failure signals.",
        ],
        RoleCategory::Quality => &[
            "Audits and deviations slow teams down.",
            "Teams chase documents across silos.",
        ],
        RoleCategory::Projects => &[
            "Forecast accuracy slips as change orders stack up.",
            "Cost control is fragile without a clear source of truth.",
        ],
        RoleCategory::Operations => &[
            "Throughput swings with schedule volatility.",
            "Firefighting replaces flow when visibility is late.",
        ],
        RoleCategory::Engineering => &[
            "Late clashes force expensive changes.",
            "Design cycles stretch when models aren’t aligned.",
        ],
        RoleCategory::Safety => &[
            "Incidents rise when reporting is fragmented.",
            "Compliance pulls time from proactive safety work.",
        ],
        RoleCategory::It => &[
            "Integrations inflate cost while ops still lack clear signal.",
            "Maintaining brittle connections slows initiatives.",
        ],
        RoleCategory::Vp => &[
            "Hard to improve predictability without adding complexity.",
            "Targets compete without clear visibility.",
        ],
        RoleCategory::Exec => &[
            "Board-level targets require repeatable execution.",
            "Confidence erodes when risk is invisible until late.",
        ],
        RoleCategory::Director => &[
            "Cross-team consistency is hard without bureaucracy.",
            "Leaders end up firefighting instead of driving change.",
        ],
        RoleCategory::Manager => &[
            "Coordinating under pressure leads to churn and misses.",
            "Getting consistent execution is hard.",
        ],
        RoleCategory::Ic => &[
            "Disconnected tools slow delivery.",
            "Workarounds pile up when process isn’t clear.",
        ],
    }
}

/// "Consequence" sentence per role, used in paragraph two.
fn role_consequence_pool(role: RoleCategory) -> &'static [&'static str] {
    match role {
        RoleCategory::Maintenance => &[
            "Left unresolved, it drives firefighting and lost production.",
            "The cost shows up as overtime and missed targets.",
        ],
        RoleCategory::Quality => &[
            "Unresolved, it prolongs investigations and risks customer trust.",
            "It becomes margin drag through scrap and rework.",
        ],
        RoleCategory::Projects => &[
            "Unresolved, it erodes margin and forces late cuts.",
            "It leads to unpredictable forecasts.",
        ],
        RoleCategory::Operations => &[
            "Unresolved, it causes schedule misses and unstable output.",
            "It keeps teams reactive.",
        ],
        RoleCategory::Engineering => &[
            "Unresolved, it creates rework and missed launch milestones.",
            "It adds expensive late fixes.",
        ],
        RoleCategory::Safety => &[
            "Unresolved, it elevates risk and drags productivity.",
            "It exposes the business to incidents.",
        ],
        RoleCategory::It => &[
            "Unresolved, it inflates TCO and stalls initiatives.",
            "Unresolved, it creates shadow IT.",
        ],
        RoleCategory::Vp => &[
            "Unresolved, it clouds forecasting and compresses margins.",
            "It makes planning fragile.",
        ],
        RoleCategory::Exec => &[
            "Unresolved, it undermines predictability and confidence.",
            "It leaves strategy vulnerable.",
        ],
        RoleCategory::Director => &[
            "Unresolved, it blocks visibility and creates fires.",
            "It derails roadmaps.",
        ],
        RoleCategory::Manager => &[
            "Unresolved, it causes churn and KPI misses.",
            "It makes it hard to coach.",
        ],
        RoleCategory::Ic => &[
            "Unresolved, it adds busywork and slows delivery.",
            "It keeps the signal buried in noise.",
        ],
    }
}

/// Product value statement opening paragraph three.
fn product_value_pool(product: ProductLabel) -> &'static [&'static str] {
    match product {
        ProductLabel::EamApm => &[
            "Move to predictable uptime: connected asset data, prioritized work.",
            "Earlier signals, planned interventions, extended asset life.",
        ],
        ProductLabel::Apm => &[
            "Spot risks earlier and act before failures.",
            "Reliability gains from early detection.",
        ],
        ProductLabel::Etq => &[
            "Faster closings, automated evidence, and cleaner audits.",
            "Quality that flows without delays.",
        ],
        ProductLabel::Ecosys => &[
            "Project controls that hold the line.",
            "See slippage sooner and act with confidence.",
        ],
        ProductLabel::Scanner => &[
            "Quicker inspections and faster issue detection.",
            "Close the loop faster between measurement and correction.",
        ],
        ProductLabel::CadWorx => &[
            "Fewer clashes and faster design cycles.",
            "Intelligent models reduce rework.",
        ],
        ProductLabel::CaesarII => &[
            "Trusted stress analysis for safer designs.",
            "Decisions backed by industry-standard analysis.",
        ],
        ProductLabel::J5Akms => &[
            "Standardize shift handover and logs.",
            "Create operational clarity across teams.",
        ],
        ProductLabel::Akms => &[
            "Codify best practices and reduce error.",
            "Make procedures easy to follow and auditable.",
        ],
        ProductLabel::NotApplicable => &[
            "Clearer execution and measurable outcomes.",
            "Predictability without adding complexity.",
        ],
    }
}

/// Product verb phrase closing paragraph three.
fn product_verb_pool(product: ProductLabel) -> &'static [&'static str] {
    match product {
        ProductLabel::EamApm => &["move from reactive to reliable", "plan work before it breaks"],
        ProductLabel::Apm => &["act before failures", "prioritize by risk"],
        ProductLabel::Etq => &["cut audit drag", "shorten quality cycles"],
        ProductLabel::Ecosys => &["hold the line on cost", "forecast with confidence"],
        ProductLabel::Scanner => &["speed up inspection", "catch issues earlier"],
        ProductLabel::CadWorx => &["deliver designs faster", "reduce rework"],
        ProductLabel::CaesarII => &["de-risk piping decisions", "accelerate approvals"],
        ProductLabel::J5Akms => &["standardize operations", "create transparency across shifts"],
        ProductLabel::Akms => &["codify procedures", "reduce human-factor errors"],
        ProductLabel::NotApplicable => &["improve execution", "create clarity"],
    }
}

const CALL_TO_ACTION: &[&str] = &[
    "Would a 20-minute discussion next week be useful to compare how others in {industry} approach this?",
    "Open to a brief session next week to benchmark {industry} peers and quantify impact?",
    "Would a quick 20-min chat help explore where {product} could remove friction in {industry}?",
];

const SIGNATURE: &str = "—\nBest regards,\n<Your Name>\n<Company>\n<Phone> | <Email>";

/// Subject line for one merged row. The variant is picked deterministically
/// from account + title + product, so identical rows always get the
/// identical subject.
pub fn subject_line(
    product: ProductLabel,
    title: &str,
    industry: IndustryCategory,
    account: &str,
) -> String {
    let account = account.trim();
    let title = title.trim();
    let label = product.label();
    let pool = subject_pool(classify_role(title), industry);
    let idx = pick_index(&format!("{account}{title}{label}"), pool.len());
    pool[idx].replace("{product}", label)
}

/// Four-paragraph outreach draft plus the fixed signature block.
///
/// Paragraph variants are keyed off the account name alone (suffixes p1, p2,
/// p3, v, cta) so every contact at an account reads a coherent, repeatable
/// message.
pub fn build_email_body(
    first: &str,
    title: &str,
    account: &str,
    product: ProductLabel,
    details: &str,
    industry: IndustryCategory,
) -> String {
    let first = title_case(first.trim());
    let title = title.trim();
    let account = account.trim();
    let details = details.trim();
    let interest = if details.is_empty() {
        "the page you explored"
    } else {
        details
    };
    let industry_label = industry.label();

    let role = classify_role(title);
    let pains = role_pain_pool(role);
    let consequences = role_consequence_pool(role);
    let values = product_value_pool(product);
    let verbs = product_verb_pool(product);

    let pain = pains[pick_index(&format!("{account}p1"), pains.len())];
    let consequence = consequences[pick_index(&format!("{account}p2"), consequences.len())];
    let value = values[pick_index(&format!("{account}p3"), values.len())];
    let verb = verbs[pick_index(&format!("{account}v"), verbs.len())];
    let cta = CALL_TO_ACTION[pick_index(&format!("{account}cta"), CALL_TO_ACTION.len())];

    let greeting = if first.is_empty() {
        "Hello,".to_string()
    } else {
        format!("Hi {first},")
    };
    let role_noun = if title.is_empty() { "professional" } else { title };

    let para1 = format!(
        "{greeting} as a {role_noun} at {account}, teams often face the same challenge: {pain}"
    );
    let para2 = format!(
        "{consequence} Leaders we work with in {industry_label} want fewer surprises and clearer signal."
    );
    let para3 = format!("{value} In short, {verb} without adding complexity.");
    let para4 = format!(
        "{} I can tailor it to your context and the interest we saw around \"{interest}\".",
        cta.replace("{industry}", industry_label)
            .replace("{product}", product.label())
    );

    [para1, para2, para3, para4, SIGNATURE.to_string()].join("\n\n")
}

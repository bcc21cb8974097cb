//! Side-by-side comparison: the structured analysis report and the
//! comparison table served with `GET /api/compare`.
//!
//! Income, credit-score and rating figures are rough fee-based estimates.

use serde::Serialize;

use crate::format::fee_label;
use crate::models::{CreditCard, Feature};

/// Minimum annual income suggested in the analysis report.
pub fn minimum_income(annual_fee: u32) -> &'static str {
    match annual_fee {
        f if f >= 10000 => "₹10,00,000",
        f if f >= 5000 => "₹6,00,000",
        f if f >= 2000 => "₹4,00,000",
        _ => "₹2,00,000",
    }
}

/// Table variant of `minimum_income` with an extra entry-level band.
pub fn table_minimum_income(annual_fee: u32) -> &'static str {
    match annual_fee {
        f if f >= 500 && f < 2000 => "₹2,00,000",
        f if f < 500 => "₹1,80,000",
        f => minimum_income(f),
    }
}

pub fn credit_score_band(annual_fee: u32) -> &'static str {
    match annual_fee {
        f if f >= 5000 => "750+",
        f if f >= 1000 => "700+",
        _ => "650+",
    }
}

/// Heuristic 0–5 score with one decimal, e.g. `"4.2"`.
pub fn rating(card: &CreditCard) -> String {
    // tenths, to keep the sum exact
    let mut score: u32 = 30;
    if card.features.lounge_access {
        score += 3;
    }
    if card.features.fuel_surcharge_waiver {
        score += 2;
    }
    if card.features.insurance_cover {
        score += 2;
    }
    if card.annual_fee == 0 {
        score += 3;
    }
    if card.reward_rate >= 5.0 {
        score += 3;
    }
    if card.benefits.len() >= 4 {
        score += 2;
    }
    let score = score.min(50);
    format!("{}.{}", score / 10, score % 10)
}

fn fuel_rate_for_report(card: &CreditCard) -> String {
    card.benefit_mentioning(&["fuel"])
        .and_then(|b| b.value.as_ref())
        .map(|v| v.to_string())
        .unwrap_or_else(|| waiver_default(card))
}

fn waiver_default(card: &CreditCard) -> String {
    if card.features.fuel_surcharge_waiver { "1%" } else { "0%" }.to_string()
}

fn cashback_value(card: &CreditCard) -> Option<String> {
    card.benefit_of_kind("Cashback")
        .and_then(|b| b.value.as_ref())
        .map(|v| v.to_string())
}

fn recommendations(cards: &[CreditCard]) -> Vec<String> {
    let mut lines = Vec::new();

    let best_lounge = cards
        .iter()
        .filter(|c| c.features.lounge_access)
        .reduce(|best, c| if c.annual_fee < best.annual_fee { c } else { best });
    if let Some(card) = best_lounge {
        lines.push(format!(
            "• For premium benefits: {} provides exclusive privileges and lounge access",
            card.display_name()
        ));
    }

    let best_rewards = cards
        .iter()
        .reduce(|best, c| if c.reward_rate > best.reward_rate { c } else { best });
    if let Some(card) = best_rewards {
        lines.push(format!(
            "• For maximum rewards: {} offers the highest reward rates",
            card.display_name()
        ));
    }

    let best_free = cards
        .iter()
        .filter(|c| c.annual_fee == 0)
        .reduce(|best, c| if c.reward_rate > best.reward_rate { c } else { best });
    if let Some(card) = best_free {
        lines.push(format!(
            "• For cost-conscious users: {} offers great value with no annual fee",
            card.display_name()
        ));
    }

    let cheapest = cards
        .iter()
        .reduce(|best, c| if c.annual_fee < best.annual_fee { c } else { best });
    if let Some(card) = cheapest.filter(|c| c.annual_fee > 0) {
        lines.push(format!(
            "• For lowest cost: {} has the most affordable annual fee",
            card.display_name()
        ));
    }

    lines
}

fn section<F>(heading: &str, cards: &[CreditCard], line: F) -> String
where
    F: Fn(&CreditCard) -> String,
{
    let body: Vec<String> = cards
        .iter()
        .map(|card| format!("• {}: {}", card.display_name(), line(card)))
        .collect();
    format!("{heading}\n{}\n", body.join("\n"))
}

/// Deterministic comparison report used when no language model is available.
pub fn fallback_report(cards: &[CreditCard]) -> String {
    if cards.is_empty() {
        return "**CREDIT CARD COMPARISON ANALYSIS**\n\n\
                Please select at least two cards to compare. Once you pick them, I'll break down \
                their costs, rewards, key benefits, eligibility and which one suits you best."
            .to_string();
    }

    let cost = section("💰 **COST COMPARISON:**", cards, |card| {
        format!(
            "Annual Fee {}, Joining Fee {}",
            card.annual_fee_label(),
            card.joining_fee_label()
        )
    });

    let rewards = section("🎁 **REWARDS & CASHBACK:**", cards, |card| {
        let dining = cashback_value(card).unwrap_or_else(|| format!("{}%", card.reward_rate));
        format!(
            "Up to {}% cashback (Fuel: {}, Dining: {})",
            card.reward_rate,
            fuel_rate_for_report(card),
            dining
        )
    });

    let benefits = section("✈️ **KEY BENEFITS:**", cards, |card| {
        let mut marks = vec![
            if card.features.lounge_access {
                "✓ Lounge Access"
            } else {
                "✗ No Lounge Access"
            },
            if card.features.fuel_surcharge_waiver {
                "✓ Fuel Benefits"
            } else {
                "✗ No Fuel Benefits"
            },
        ];
        if card.features.movie_tickets {
            marks.push("✓ Movie Offers");
        }
        if card.features.insurance_cover {
            marks.push("✓ Insurance Cover");
        }
        marks.join(", ")
    });

    let eligibility = section("👥 **ELIGIBILITY:**", cards, |card| {
        format!(
            "Min Income {}, Credit Score {}",
            minimum_income(card.annual_fee),
            credit_score_band(card.annual_fee)
        )
    });

    format!(
        "**CREDIT CARD COMPARISON ANALYSIS**\n\n{cost}\n{rewards}\n{benefits}\n{eligibility}\n🎯 **RECOMMENDATIONS:**\n{}\n",
        recommendations(cards).join("\n")
    )
}

/// One table cell: a check mark row or a text value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TableCell {
    Flag(bool),
    Text(String),
}

impl From<bool> for TableCell {
    fn from(flag: bool) -> Self {
        TableCell::Flag(flag)
    }
}

impl From<String> for TableCell {
    fn from(text: String) -> Self {
        TableCell::Text(text)
    }
}

impl From<&str> for TableCell {
    fn from(text: &str) -> Self {
        TableCell::Text(text.to_string())
    }
}

/// A labelled row with one cell per compared card, in card order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub label: String,
    pub values: Vec<TableCell>,
}

/// Feature rows shown in the comparison table, in display order.
const TABLE_FEATURES: [Feature; 6] = [
    Feature::LoungeAccess,
    Feature::FuelSurchargeWaiver,
    Feature::MovieTickets,
    Feature::InsuranceCover,
    Feature::Contactless,
    Feature::EmiOptions,
];

fn fuel_rate_for_table(card: &CreditCard) -> String {
    card.benefits
        .iter()
        .find(|b| b.kind == "Fuel Surcharge Waiver" || b.description.to_lowercase().contains("fuel"))
        .and_then(|b| b.value.as_ref())
        .map(|v| v.to_string())
        .unwrap_or_else(|| waiver_default(card))
}

fn dining_rate(card: &CreditCard) -> String {
    card.benefit_mentioning(&["dining", "restaurant"])
        .and_then(|b| b.value.as_ref())
        .map(|v| v.to_string())
        .or_else(|| cashback_value(card))
        .unwrap_or_else(|| "0%".to_string())
}

pub fn comparison_table(cards: &[CreditCard]) -> Vec<TableRow> {
    let row = |label: &str, cell: &dyn Fn(&CreditCard) -> TableCell| TableRow {
        label: label.to_string(),
        values: cards.iter().map(cell).collect(),
    };

    let mut rows = vec![
        row("Annual Fee", &|c| fee_label(c.annual_fee).into()),
        row("Joining Fee", &|c| fee_label(c.joining_fee).into()),
        row("Reward Rate", &|c| format!("{}x", c.reward_rate).into()),
        row("Interest Rate", &|c| c.interest_rate.as_str().into()),
        row("Credit Limit", &|c| c.credit_limit.as_str().into()),
    ];
    for feature in TABLE_FEATURES {
        rows.push(row(feature.label(), &|c| c.features.has(feature).into()));
    }
    rows.push(row("Fuel Cashback", &|c| fuel_rate_for_table(c).into()));
    rows.push(row("Dining Cashback", &|c| dining_rate(c).into()));
    rows.push(row("Min Income", &|c| table_minimum_income(c.annual_fee).into()));
    rows.push(row("Rating", &|c| format!("{}/5", rating(c)).into()));
    rows
}

/// Body of `GET /api/compare`.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub cards: Vec<CreditCard>,
    pub table: Vec<TableRow>,
}

impl Comparison {
    pub fn new(cards: Vec<CreditCard>) -> Self {
        let table = comparison_table(&cards);
        Self { cards, table }
    }
}

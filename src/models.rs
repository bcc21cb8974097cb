use enumset::{EnumSet, EnumSetType};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::format::fee_label;

/// Value attached to a benefit. The catalog mixes plain numbers
/// (`10000` bonus points) with descriptive strings (`"Unlimited"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BenefitValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for BenefitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenefitValue::Number(n) => write!(f, "{n}"),
            BenefitValue::Text(s) => f.write_str(s),
        }
    }
}

/// A single card benefit. `kind` is an open category tag ("Cashback",
/// "Lounge Access", ...) and is intentionally not validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardBenefit {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<BenefitValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardOffer {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,
}

/// Closed set of feature flags every card carries.
#[derive(Debug, EnumSetType)]
pub enum Feature {
    LoungeAccess,
    FuelSurchargeWaiver,
    MovieTickets,
    InternationalAcceptance,
    Contactless,
    MobileWalletCompatible,
    EmiOptions,
    InsuranceCover,
}

impl Feature {
    pub fn label(self) -> &'static str {
        match self {
            Feature::LoungeAccess => "Lounge Access",
            Feature::FuelSurchargeWaiver => "Fuel Surcharge Waiver",
            Feature::MovieTickets => "Movie Offers",
            Feature::InternationalAcceptance => "International Acceptance",
            Feature::Contactless => "Contactless Payment",
            Feature::MobileWalletCompatible => "Mobile Wallet Compatible",
            Feature::EmiOptions => "EMI Options",
            Feature::InsuranceCover => "Insurance Cover",
        }
    }

    /// Flags surfaced in the assistant's "Key Features" line.
    pub fn highlighted() -> EnumSet<Feature> {
        Feature::LoungeAccess
            | Feature::FuelSurchargeWaiver
            | Feature::MovieTickets
            | Feature::InsuranceCover
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardFeatures {
    pub lounge_access: bool,
    pub fuel_surcharge_waiver: bool,
    pub movie_tickets: bool,
    pub international_acceptance: bool,
    pub contactless: bool,
    pub mobile_wallet_compatible: bool,
    pub emi_options: bool,
    pub insurance_cover: bool,
}

impl CardFeatures {
    pub fn has(&self, feature: Feature) -> bool {
        match feature {
            Feature::LoungeAccess => self.lounge_access,
            Feature::FuelSurchargeWaiver => self.fuel_surcharge_waiver,
            Feature::MovieTickets => self.movie_tickets,
            Feature::InternationalAcceptance => self.international_acceptance,
            Feature::Contactless => self.contactless,
            Feature::MobileWalletCompatible => self.mobile_wallet_compatible,
            Feature::EmiOptions => self.emi_options,
            Feature::InsuranceCover => self.insurance_cover,
        }
    }

    pub fn enabled(&self) -> EnumSet<Feature> {
        EnumSet::all().iter().filter(|f| self.has(*f)).collect()
    }
}

/// A credit card record. Field names serialize in camelCase to match the
/// public JSON API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCard {
    pub id: String,
    pub name: String,
    pub bank: String,
    #[serde(default)]
    pub bank_logo: String,
    #[serde(default)]
    pub card_image: String,
    pub annual_fee: u32,
    pub joining_fee: u32,
    pub reward_rate: f64,
    pub credit_limit: String,
    pub interest_rate: String,
    #[serde(default)]
    pub benefits: Vec<CardBenefit>,
    #[serde(default)]
    pub offers: Vec<CardOffer>,
    #[serde(default)]
    pub target_audience: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub features: CardFeatures,
}

impl CreditCard {
    /// "HDFC Bank Regalia Credit Card"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.bank, self.name)
    }

    /// Name without the trailing "Credit Card": "Regalia", "Amazon Pay ICICI".
    pub fn short_name(&self) -> &str {
        self.name
            .strip_suffix(" Credit Card")
            .unwrap_or(&self.name)
            .trim()
    }

    pub fn has_audience(&self, tag: &str) -> bool {
        self.target_audience.iter().any(|t| t == tag)
    }

    pub fn name_contains_any(&self, needles: &[&str]) -> bool {
        let name = self.name.to_lowercase();
        needles.iter().any(|n| name.contains(n))
    }

    pub fn benefit_of_kind(&self, kind: &str) -> Option<&CardBenefit> {
        self.benefits.iter().find(|b| b.kind == kind)
    }

    /// First benefit whose lower-cased description contains any needle.
    pub fn benefit_mentioning(&self, needles: &[&str]) -> Option<&CardBenefit> {
        self.benefits.iter().find(|b| {
            let description = b.description.to_lowercase();
            needles.iter().any(|n| description.contains(n))
        })
    }

    /// Stored summary, or one composed from the card's fields.
    pub fn summary_text(&self) -> String {
        if let Some(summary) = &self.summary {
            return summary.clone();
        }
        let lounge = if self.features.lounge_access {
            "airport lounge access"
        } else {
            "no lounge access"
        };
        let fee = if self.annual_fee == 0 {
            "no annual fee".to_string()
        } else {
            format!("an annual fee of ₹{}", self.annual_fee)
        };
        format!(
            "The {} from {} is a {} credit card with {} and {}.",
            self.name,
            self.bank,
            self.target_audience.join(", ").to_lowercase(),
            lounge,
            fee
        )
    }

    /// Fills a missing `summary` with the composed text so API clients
    /// always receive one.
    pub fn with_summary(mut self) -> Self {
        if self.summary.is_none() {
            self.summary = Some(self.summary_text());
        }
        self
    }

    pub fn annual_fee_label(&self) -> String {
        fee_label(self.annual_fee)
    }

    pub fn joining_fee_label(&self) -> String {
        fee_label(self.joining_fee)
    }
}

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// Body of `POST /api/compare-analysis`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    pub cards: Vec<CreditCard>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReply {
    pub analysis: String,
}

// Chat-completions message format
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

// Chat-completions request format
#[derive(Debug, Serialize, Clone)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

// Chat-completions response format
#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChatMessage,
}

//! Keyword-driven intent classification.
//!
//! The rule table is evaluated top to bottom and the first rule with any
//! keyword contained in the lower-cased message wins. A message that mentions
//! both "hdfc" and "lounge" is therefore a bank question.

use crate::models::CreditCard;

/// Banks with a dedicated assistant answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankIntent {
    Hdfc,
    Axis,
    Sbi,
    Icici,
}

impl BankIntent {
    /// Lower-case fragment every matching `bank` field contains.
    pub fn needle(self) -> &'static str {
        match self {
            BankIntent::Hdfc => "hdfc",
            BankIntent::Axis => "axis",
            BankIntent::Sbi => "sbi",
            BankIntent::Icici => "icici",
        }
    }

    pub fn admits(self, card: &CreditCard) -> bool {
        card.bank.to_lowercase().contains(self.needle())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Bank(BankIntent),
    Lounge,
    Student,
    Fuel,
    NoAnnualFee,
    Cashback,
    OnlineShopping,
    Comparison,
    Travel,
    Premium,
    Welcome,
}

impl Intent {
    /// Catalog predicate for intents that list a filtered subset.
    ///
    /// Comparison and Welcome pick their cards differently and admit everything here.
    pub fn admits(self, card: &CreditCard) -> bool {
        match self {
            Intent::Bank(bank) => bank.admits(card),
            Intent::Lounge => card.features.lounge_access,
            Intent::Student => {
                card.has_audience("First-time Users")
                    || card.has_audience("Students")
                    || card.annual_fee <= 1000
            }
            Intent::Fuel => card.features.fuel_surcharge_waiver,
            Intent::NoAnnualFee => card.annual_fee == 0,
            Intent::Cashback => {
                card.benefit_of_kind("Cashback").is_some()
                    || card.name_contains_any(&["cashback", "amazon", "millennia"])
            }
            Intent::OnlineShopping => {
                card.name_contains_any(&["amazon", "flipkart", "click", "millennia"])
                    || card.has_audience("Online Shoppers")
            }
            Intent::Travel => {
                card.has_audience("Travel")
                    || card.features.lounge_access
                    || card.features.insurance_cover
            }
            Intent::Premium => {
                card.has_audience("Premium")
                    || card.has_audience("Super Premium")
                    || card.has_audience("Luxury")
                    || card.annual_fee >= 2500
            }
            Intent::Comparison | Intent::Welcome => true,
        }
    }

    pub fn select(self, cards: &[CreditCard]) -> Vec<&CreditCard> {
        cards.iter().filter(|card| self.admits(card)).collect()
    }
}

/// One row of the rule table: an intent and the keywords that trigger it.
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
}

impl IntentRule {
    /// `lowered` must already be lower-case.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Priority-ordered rule table. `Welcome` is the implicit final rule.
pub const RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Bank(BankIntent::Hdfc),
        keywords: &["hdfc", "hdfc bank"],
    },
    IntentRule {
        intent: Intent::Bank(BankIntent::Axis),
        keywords: &["axis", "axis bank"],
    },
    IntentRule {
        intent: Intent::Bank(BankIntent::Sbi),
        keywords: &["sbi", "sbi card", "state bank"],
    },
    IntentRule {
        intent: Intent::Bank(BankIntent::Icici),
        keywords: &["icici", "icici bank"],
    },
    IntentRule {
        intent: Intent::Lounge,
        keywords: &["lounge", "airport lounge", "lounge access", "priority pass"],
    },
    IntentRule {
        intent: Intent::Student,
        keywords: &[
            "student",
            "beginner",
            "first time",
            "new user",
            "college",
            "university",
            "young",
        ],
    },
    IntentRule {
        intent: Intent::Fuel,
        keywords: &[
            "fuel",
            "petrol",
            "gas",
            "fuel surcharge",
            "fuel waiver",
            "fuel cashback",
        ],
    },
    IntentRule {
        intent: Intent::NoAnnualFee,
        keywords: &[
            "free",
            "no annual fee",
            "no fee",
            "zero fee",
            "without fee",
            "lifetime free",
        ],
    },
    IntentRule {
        intent: Intent::Cashback,
        keywords: &["cashback", "cash back", "money back", "rewards", "earning", "points"],
    },
    IntentRule {
        intent: Intent::OnlineShopping,
        keywords: &[
            "online",
            "shopping",
            "e-commerce",
            "amazon",
            "flipkart",
            "internet shopping",
        ],
    },
    IntentRule {
        intent: Intent::Comparison,
        keywords: &["compare", "vs", "versus", "difference", "between", "comparison"],
    },
    IntentRule {
        intent: Intent::Travel,
        keywords: &["travel", "traveling", "trip", "vacation", "holiday", "flight", "hotel"],
    },
    IntentRule {
        intent: Intent::Premium,
        keywords: &["premium", "luxury", "high end", "elite", "exclusive", "super premium"],
    },
];

/// Classifies a message against `rules`, falling back to `Intent::Welcome`.
pub fn classify_with(rules: &[IntentRule], message: &str) -> Intent {
    let lowered = message.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.intent)
        .unwrap_or(Intent::Welcome)
}

pub fn classify(message: &str) -> Intent {
    classify_with(RULES, message)
}

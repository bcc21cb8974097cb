//! Catalog browsing: free-text search, bank selection, feature toggles and sorting.

use serde::Deserialize;
use std::cmp::Ordering;

use crate::models::CreditCard;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    /// Catalog declaration order.
    #[default]
    Featured,
    AnnualFee,
    RewardRate,
    Name,
}

/// Landing-page quick filters. `FirstTimeUsers` is looser here than the
/// toggle in `CardFilter`: it also admits any card with a fee of ₹1,000 or less.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuickFilter {
    LoungeAccess,
    FuelSurchargeWaiver,
    NoAnnualFee,
    FirstTimeUsers,
}

impl QuickFilter {
    pub fn admits(self, card: &CreditCard) -> bool {
        match self {
            QuickFilter::LoungeAccess => card.features.lounge_access,
            QuickFilter::FuelSurchargeWaiver => card.features.fuel_surcharge_waiver,
            QuickFilter::NoAnnualFee => card.annual_fee == 0,
            QuickFilter::FirstTimeUsers => {
                card.has_audience("First-time Users") || card.annual_fee <= 1000
            }
        }
    }
}

/// Query parameters accepted by the card listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardFilter {
    pub search: Option<String>,
    pub bank: Option<String>,
    pub lounge_access: bool,
    pub fuel_surcharge_waiver: bool,
    pub no_annual_fee: bool,
    pub first_time_users: bool,
    pub quick: Option<QuickFilter>,
    pub sort: SortOrder,
}

impl CardFilter {
    pub fn admits(&self, card: &CreditCard) -> bool {
        if let Some(term) = self.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            let term = term.to_lowercase();
            if !card.name.to_lowercase().contains(&term) && !card.bank.to_lowercase().contains(&term) {
                return false;
            }
        }
        if let Some(bank) = self.bank.as_deref().filter(|b| *b != "all" && !b.is_empty()) {
            if card.bank != bank {
                return false;
            }
        }
        if self.lounge_access && !card.features.lounge_access {
            return false;
        }
        if self.fuel_surcharge_waiver && !card.features.fuel_surcharge_waiver {
            return false;
        }
        if self.no_annual_fee && card.annual_fee > 0 {
            return false;
        }
        if self.first_time_users && !card.has_audience("First-time Users") {
            return false;
        }
        self.quick.is_none_or(|quick| quick.admits(card))
    }

    /// Filters then sorts, leaving ties in catalog order.
    pub fn apply(&self, cards: &[CreditCard]) -> Vec<CreditCard> {
        let mut selected: Vec<CreditCard> = cards.iter().filter(|c| self.admits(c)).cloned().collect();
        match self.sort {
            SortOrder::Featured => {}
            SortOrder::AnnualFee => selected.sort_by_key(|c| c.annual_fee),
            SortOrder::RewardRate => selected.sort_by(|a, b| {
                b.reward_rate
                    .partial_cmp(&a.reward_rate)
                    .unwrap_or(Ordering::Equal)
            }),
            SortOrder::Name => selected.sort_by_key(|c| c.name.to_lowercase()),
        }
        selected
    }
}

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::catalog::seed_cards;
use crate::models::CreditCard;
use crate::repository_traits::CardRepository;

/// Immutable card list with pure, synchronous lookups.
#[derive(Debug, Clone)]
pub struct Catalog {
    cards: Vec<CreditCard>,
}

impl Catalog {
    pub fn new(cards: Vec<CreditCard>) -> Self {
        Self { cards }
    }

    /// The built-in catalog.
    pub fn seeded() -> Self {
        Self::new(seed_cards())
    }

    pub fn all_cards(&self) -> &[CreditCard] {
        &self.cards
    }

    pub fn card_by_id(&self, id: &str) -> Option<&CreditCard> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn cards_by_bank(&self, bank: &str) -> Vec<&CreditCard> {
        self.cards.iter().filter(|card| card.bank == bank).collect()
    }

    /// Distinct bank names in first-occurrence order.
    pub fn banks(&self) -> Vec<&str> {
        let mut banks: Vec<&str> = Vec::new();
        for card in &self.cards {
            if !banks.contains(&card.bank.as_str()) {
                banks.push(&card.bank);
            }
        }
        banks
    }

    /// Cards whose id appears in `ids`, in catalog order.
    pub fn compare_cards<S: AsRef<str>>(&self, ids: &[S]) -> Vec<&CreditCard> {
        self.cards
            .iter()
            .filter(|card| ids.iter().any(|id| id.as_ref() == card.id))
            .collect()
    }
}

/// Artificial per-operation delays that mimic a remote catalog API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LatencyProfile {
    pub all_cards: Duration,
    pub card_by_id: Duration,
    pub cards_by_bank: Duration,
    pub banks: Duration,
    pub compare_cards: Duration,
}

impl LatencyProfile {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn simulated() -> Self {
        Self {
            all_cards: Duration::from_millis(500),
            card_by_id: Duration::from_millis(300),
            cards_by_bank: Duration::from_millis(300),
            banks: Duration::from_millis(200),
            compare_cards: Duration::from_millis(400),
        }
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

/// `CardRepository` over a shared in-memory `Catalog`.
#[derive(Debug, Clone)]
pub struct StaticCardRepository {
    catalog: Arc<Catalog>,
    latency: LatencyProfile,
}

impl StaticCardRepository {
    pub fn new(catalog: Arc<Catalog>, latency: LatencyProfile) -> Self {
        Self { catalog, latency }
    }

    pub fn seeded(latency: LatencyProfile) -> Self {
        Self::new(Arc::new(Catalog::seeded()), latency)
    }
}

#[async_trait]
impl CardRepository for StaticCardRepository {
    async fn all_cards(&self) -> Vec<CreditCard> {
        pause(self.latency.all_cards).await;
        self.catalog.all_cards().to_vec()
    }

    async fn card_by_id(&self, id: &str) -> Option<CreditCard> {
        pause(self.latency.card_by_id).await;
        self.catalog.card_by_id(id).cloned()
    }

    async fn cards_by_bank(&self, bank: &str) -> Vec<CreditCard> {
        pause(self.latency.cards_by_bank).await;
        self.catalog.cards_by_bank(bank).into_iter().cloned().collect()
    }

    async fn banks(&self) -> Vec<String> {
        pause(self.latency.banks).await;
        self.catalog.banks().into_iter().map(str::to_string).collect()
    }

    async fn compare_cards(&self, ids: &[String]) -> Vec<CreditCard> {
        pause(self.latency.compare_cards).await;
        self.catalog.compare_cards(ids).into_iter().cloned().collect()
    }
}

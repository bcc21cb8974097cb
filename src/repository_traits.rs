use crate::models::CreditCard;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Read-only access to the card catalog.
///
/// Lookups are total: a missing card is `None` and an unknown bank yields an
/// empty list. Results always follow catalog declaration order.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CardRepository: Send + Sync + 'static {
    async fn all_cards(&self) -> Vec<CreditCard>;
    async fn card_by_id(&self, id: &str) -> Option<CreditCard>;
    async fn cards_by_bank(&self, bank: &str) -> Vec<CreditCard>;
    async fn banks(&self) -> Vec<String>;
    async fn compare_cards(&self, ids: &[String]) -> Vec<CreditCard>;
}

//! # Storefront
//!
//! The customer-facing surface: browse the shelves, add to basket (which
//! reserves stock), top up the balance, and check out.
//!
//! ## Customer Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Customer Flow                                    │
//! │                                                                         │
//! │  open_session ──► shelves ──► add_to_basket ──► checkout               │
//! │                      ▲             │                │                   │
//! │                      │             │ (reserve       ├── Success         │
//! │                      └─────────────┘  decrements    │   (settled)       │
//! │                       keep shopping   stock NOW)    │                   │
//! │                                                     ├── Insufficient-   │
//! │                                                     │   Funds ──► top_up│
//! │                                                     │            & retry│
//! │                                                     └── EmptyBasket     │
//! │                                                                         │
//! │  end_session: abandon policy decides whether reservations are released │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info, warn};

use market_core::{Category, CheckoutEngine, CheckoutOutcome, LineItem, Money, StockRecord};
use market_core::validation::validate_deposit_cents;
use market_db::Database;

use crate::error::EngineResult;
use crate::session::{AbandonPolicy, Session};

// =============================================================================
// Shelf Listing
// =============================================================================

/// One store section and its products, in insertion order.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ShelfSection {
    pub category: Category,
    pub products: Vec<StockRecord>,
}

// =============================================================================
// Storefront
// =============================================================================

/// The customer-facing store surface.
///
/// Holds no per-customer state; each customer carries their own [`Session`].
#[derive(Debug, Clone)]
pub struct Storefront {
    db: Database,
    engine: CheckoutEngine,
    abandon_policy: AbandonPolicy,
}

impl Storefront {
    /// Creates a storefront over the given database with the standard tax
    /// rate and the default abandon policy.
    pub fn new(db: Database) -> Self {
        Storefront {
            db,
            engine: CheckoutEngine::standard(),
            abandon_policy: AbandonPolicy::default(),
        }
    }

    /// Sets the abandoned-session policy.
    pub fn abandon_policy(mut self, policy: AbandonPolicy) -> Self {
        self.abandon_policy = policy;
        self
    }

    /// Opens a fresh customer session.
    pub fn open_session(&self) -> Session {
        let session = Session::open();
        info!(session = %session.id, "session opened");
        session
    }

    /// Lists every store section and its products, in display order.
    ///
    /// Section order follows the ledger: the seeded sections come out as
    /// Dairy, Fruits, Meats, and any section an admin creates later appends
    /// after them.
    pub async fn shelves(&self) -> EngineResult<Vec<ShelfSection>> {
        let ledger = self.db.inventory();
        let mut sections = Vec::new();

        for category in ledger.list_sections().await? {
            let products = ledger.list_by_category(&category).await?;
            sections.push(ShelfSection { category, products });
        }

        Ok(sections)
    }

    /// Reserves `quantity` units of a product and records them in the
    /// session's basket at today's name and price.
    ///
    /// The ledger decrement happens first; the basket line is only appended
    /// once the reservation is committed. A failed reservation leaves both
    /// the ledger and the basket untouched.
    pub async fn add_to_basket(
        &self,
        session: &mut Session,
        code: i64,
        quantity: i64,
    ) -> EngineResult<LineItem> {
        debug!(session = %session.id, code, quantity, "adding to basket");

        let record = self.db.inventory().reserve(code, quantity).await?;
        let line = LineItem::reserved(&record, quantity);
        session.basket.push(line.clone());

        Ok(line)
    }

    /// Adds funds to the session balance. Returns the new balance.
    pub fn top_up(&self, session: &mut Session, cents: i64) -> EngineResult<Money> {
        validate_deposit_cents(cents)?;

        session.balance.deposit(Money::from_cents(cents));
        let new_balance = session.balance.amount();

        info!(session = %session.id, %new_balance, "balance topped up");
        Ok(new_balance)
    }

    /// Attempts to settle the session's basket against its balance.
    ///
    /// Every outcome is recoverable: on `InsufficientFunds` the caller can
    /// [`top_up`](Self::top_up) and call again, and the basket (with its
    /// reservations) survives untouched.
    pub fn checkout(&self, session: &mut Session) -> CheckoutOutcome {
        let outcome = self
            .engine
            .checkout(&mut session.basket, &mut session.balance);

        match &outcome {
            CheckoutOutcome::Success(receipt) => {
                info!(
                    session = %session.id,
                    total = %receipt.total,
                    new_balance = %receipt.new_balance,
                    "checkout settled"
                );
            }
            CheckoutOutcome::InsufficientFunds { shortfall } => {
                warn!(session = %session.id, %shortfall, "checkout declined");
            }
            CheckoutOutcome::EmptyBasket => {
                debug!(session = %session.id, "checkout on empty basket");
            }
        }

        outcome
    }

    /// Ends a session, applying the abandon policy to any un-settled basket
    /// lines.
    ///
    /// Under `ReleaseStock`, each remaining line's reservation is returned
    /// to the shelf. Under `KeepReservation` (the default) the ledger is
    /// left as-is.
    pub async fn end_session(&self, session: Session) -> EngineResult<()> {
        if !session.basket.is_empty() {
            match self.abandon_policy {
                AbandonPolicy::KeepReservation => {
                    warn!(
                        session = %session.id,
                        lines = session.basket.len(),
                        "session abandoned; reservations kept"
                    );
                }
                AbandonPolicy::ReleaseStock => {
                    let ledger = self.db.inventory();
                    for item in session.basket.items() {
                        ledger.restock(item.code, item.quantity).await?;
                    }
                    info!(
                        session = %session.id,
                        lines = session.basket.len(),
                        "session abandoned; reservations released"
                    );
                }
            }
        }

        info!(session = %session.id, "session closed");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use market_db::{DbConfig, DbError};

    async fn storefront() -> Storefront {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        Storefront::new(db)
    }

    #[tokio::test]
    async fn test_shelves_lists_all_sections_in_order() {
        let store = storefront().await;
        let sections = store.shelves().await.unwrap();

        let labels: Vec<&str> = sections.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(labels, vec!["Dairy", "Fruits", "Meats"]);

        for section in &sections {
            assert_eq!(section.products.len(), 5);
        }
    }

    #[tokio::test]
    async fn test_full_shopping_trip() {
        // 2x Milk + 1x Apple: subtotal $3.75, tax $0.19, total $3.94,
        // balance $300.00 → $296.06
        let store = storefront().await;
        let mut session = store.open_session();

        store.add_to_basket(&mut session, 1643, 2).await.unwrap();
        store.add_to_basket(&mut session, 1648, 1).await.unwrap();

        match store.checkout(&mut session) {
            CheckoutOutcome::Success(receipt) => {
                assert_eq!(receipt.subtotal.cents(), 375);
                assert_eq!(receipt.tax.cents(), 19);
                assert_eq!(receipt.total.cents(), 394);
                assert_eq!(receipt.new_balance.cents(), 29_606);
            }
            other => panic!("expected success, got {:?}", other),
        }

        assert!(session.basket.is_empty());

        // Stock stays decremented after settlement
        let milk = store.db.inventory().get(1643).await.unwrap();
        assert_eq!(milk.quantity, 98);

        store.end_session(session).await.unwrap();
    }

    #[tokio::test]
    async fn test_add_to_basket_freezes_price() {
        let store = storefront().await;
        let mut session = store.open_session();

        let line = store.add_to_basket(&mut session, 1643, 2).await.unwrap();
        assert_eq!(line.name, "Milk");
        assert_eq!(line.unit_price_cents, 150);
        assert_eq!(line.quantity, 2);
    }

    #[tokio::test]
    async fn test_failed_reservation_leaves_basket_empty() {
        let store = storefront().await;
        let mut session = store.open_session();

        // Lamb has 25 on the shelf
        let err = store.add_to_basket(&mut session, 1656, 26).await.unwrap_err();
        assert!(matches!(
            err,
            EngineError::Ledger(DbError::InsufficientStock {
                available: 25,
                requested: 26,
                ..
            })
        ));
        assert!(session.basket.is_empty());

        let lamb = store.db.inventory().get(1656).await.unwrap();
        assert_eq!(lamb.quantity, 25);
    }

    #[tokio::test]
    async fn test_unknown_code_is_rejected() {
        let store = storefront().await;
        let mut session = store.open_session();

        let err = store.add_to_basket(&mut session, 9999, 1).await.unwrap_err();
        assert!(matches!(
            err,
            EngineError::Ledger(DbError::NotFound { code: 9999 })
        ));
    }

    #[tokio::test]
    async fn test_insufficient_funds_then_top_up_and_retry() {
        let store = storefront().await;
        let mut session = store.open_session();

        // 60 Chicken at $5.00 = $300.00 subtotal; 5% tax pushes the total
        // to $315.00, $15.00 past the starting balance
        store.add_to_basket(&mut session, 1653, 60).await.unwrap();

        let shortfall = match store.checkout(&mut session) {
            CheckoutOutcome::InsufficientFunds { shortfall } => shortfall,
            other => panic!("expected insufficient funds, got {:?}", other),
        };
        assert_eq!(shortfall.cents(), 1_500);

        // Basket and balance untouched by the declined attempt
        assert_eq!(session.basket.len(), 1);
        assert_eq!(session.balance.amount().cents(), 30_000);

        // Top up by the shortfall and retry
        store.top_up(&mut session, shortfall.cents()).unwrap();
        match store.checkout(&mut session) {
            CheckoutOutcome::Success(receipt) => {
                assert!(receipt.new_balance.is_zero());
            }
            other => panic!("expected success after top-up, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_top_up_rejects_non_positive_amounts() {
        let store = storefront().await;
        let mut session = store.open_session();

        assert!(matches!(
            store.top_up(&mut session, 0),
            Err(EngineError::Validation(_))
        ));
        assert!(matches!(
            store.top_up(&mut session, -500),
            Err(EngineError::Validation(_))
        ));
        assert_eq!(session.balance.amount().cents(), 30_000);
    }

    #[tokio::test]
    async fn test_checkout_empty_basket() {
        let store = storefront().await;
        let mut session = store.open_session();

        assert!(matches!(
            store.checkout(&mut session),
            CheckoutOutcome::EmptyBasket
        ));
        assert_eq!(session.balance.amount().cents(), 30_000);
    }

    #[tokio::test]
    async fn test_abandon_keeps_reservations_by_default() {
        let store = storefront().await;
        let mut session = store.open_session();

        store.add_to_basket(&mut session, 1643, 5).await.unwrap();
        store.end_session(session).await.unwrap();

        let milk = store.db.inventory().get(1643).await.unwrap();
        assert_eq!(milk.quantity, 95);
    }

    #[tokio::test]
    async fn test_abandon_with_release_policy_restocks() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let store = Storefront::new(db).abandon_policy(AbandonPolicy::ReleaseStock);
        let mut session = store.open_session();

        store.add_to_basket(&mut session, 1643, 5).await.unwrap();
        store.add_to_basket(&mut session, 1648, 3).await.unwrap();
        store.end_session(session).await.unwrap();

        let milk = store.db.inventory().get(1643).await.unwrap();
        assert_eq!(milk.quantity, 100);
        let apple = store.db.inventory().get(1648).await.unwrap();
        assert_eq!(apple.quantity, 150);
    }

    #[tokio::test]
    async fn test_release_policy_only_touches_unsettled_lines() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let store = Storefront::new(db).abandon_policy(AbandonPolicy::ReleaseStock);
        let mut session = store.open_session();

        // Settle one basket, then end the session with an empty basket:
        // settled stock must stay sold.
        store.add_to_basket(&mut session, 1643, 5).await.unwrap();
        assert!(matches!(
            store.checkout(&mut session),
            CheckoutOutcome::Success(_)
        ));
        store.end_session(session).await.unwrap();

        let milk = store.db.inventory().get(1643).await.unwrap();
        assert_eq!(milk.quantity, 95);
    }
}

//! # Customer Session
//!
//! A single customer's visit to the store: a basket of reservations and a
//! session-scoped spending balance.
//!
//! Sessions are in-memory only. Nothing here persists; the durable state is
//! the stock ledger, which the session layer mutates through reservations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use market_core::{Balance, Basket};

// =============================================================================
// Abandon Policy
// =============================================================================

/// What happens to a session's reservations when it ends without checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbandonPolicy {
    /// Reservations stay committed: stock taken for the basket is gone even
    /// though nothing was paid for. This is the default because it matches
    /// the physical store model (items left in an abandoned cart are off the
    /// shelf until staff restock them).
    #[default]
    KeepReservation,

    /// Each basket line is restocked when the session ends, returning the
    /// reserved units to the shelf.
    ReleaseStock,
}

// =============================================================================
// Session
// =============================================================================

/// One customer's shopping session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Session identity, for logs and traces only.
    pub id: Uuid,

    /// The basket of reserved items.
    pub basket: Basket,

    /// The session's spending balance, opened at the fixed starting value.
    pub balance: Balance,

    /// When the session was opened.
    pub started_at: DateTime<Utc>,
}

impl Session {
    /// Opens a fresh session: empty basket, starting balance.
    pub fn open() -> Self {
        Session {
            id: Uuid::new_v4(),
            basket: Basket::new(),
            balance: Balance::starting(),
            started_at: Utc::now(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::open()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_opens_fresh() {
        let session = Session::open();
        assert!(session.basket.is_empty());
        assert_eq!(session.balance.amount().cents(), 30_000);
    }

    #[test]
    fn test_sessions_are_independent() {
        let a = Session::open();
        let b = Session::open();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_default_abandon_policy_keeps_reservations() {
        assert_eq!(AbandonPolicy::default(), AbandonPolicy::KeepReservation);
    }
}

//! Version history of catalog products.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::{current_timestamp, RevisionId};

/// A saved version of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Revision {
    pub id: RevisionId,
    /// Code of the product this revision belongs to.
    pub product_code: String,
    /// Product variant name at the time of saving.
    pub kind: String,
    /// Full field snapshot.
    pub snapshot: serde_json::Value,
    pub comment: String,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

/// Append-only list of product revisions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RevisionLog {
    revisions: Vec<Revision>,
}

impl RevisionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot a product and append it.
    pub fn record(
        &mut self,
        product: &dyn Product,
        comment: impl Into<String>,
    ) -> Result<&Revision, CommerceError> {
        let revision = Revision {
            id: RevisionId::generate(),
            product_code: product.product_code().to_string(),
            kind: product.kind().to_string(),
            snapshot: product.snapshot()?,
            comment: comment.into(),
            created_at: current_timestamp(),
        };
        tracing::debug!(
            product_code = %revision.product_code,
            revision = %revision.id,
            "recorded product revision"
        );
        let index = self.revisions.len();
        self.revisions.push(revision);
        Ok(&self.revisions[index])
    }

    /// Revisions of one product, oldest first.
    pub fn history<'a>(&'a self, product_code: &'a str) -> impl Iterator<Item = &'a Revision> + 'a {
        self.revisions
            .iter()
            .filter(move |r| r.product_code == product_code)
    }

    /// Most recent revision of one product.
    pub fn latest(&self, product_code: &str) -> Option<&Revision> {
        self.revisions
            .iter()
            .rev()
            .find(|r| r.product_code == product_code)
    }

    pub fn len(&self) -> usize {
        self.revisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revisions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CardType, SmartCard, Speed};
    use turbo_money::MoneyMaker;

    #[test]
    fn test_record_and_history() {
        let euros = MoneyMaker::default();
        let mut card = SmartCard::new(
            "Card",
            "C-1",
            euros.make("5").unwrap(),
            CardType::Sd,
            Speed::Mbps20,
            8,
        )
        .unwrap();

        let mut log = RevisionLog::new();
        log.record(&card, "Initial version.").unwrap();
        card.storage = 16;
        log.record(&card, "Bigger card.").unwrap();

        assert_eq!(log.len(), 2);
        let history: Vec<_> = log.history("C-1").collect();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].snapshot["storage"], 8);
        assert_eq!(log.latest("C-1").unwrap().comment, "Bigger card.");
        assert_eq!(log.latest("C-1").unwrap().kind, "smartcard");
        assert!(log.latest("C-2").is_none());
    }
}

use std::collections::HashMap;

use crate::model::entities::BidderReputation;

/// Lookup seam between the engine and whatever stores reputation snapshots.
/// The pipeline only ever resolves by bidder id; a bid whose bidder does not
/// resolve is dropped from the ranking, never an error.
pub trait BidderDirectory {
    fn resolve(&self, bidder_id: u64) -> Option<&BidderReputation>;
}

/// Directory over a materialized set of snapshots, used by the CLI and by
/// tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    bidders: HashMap<u64, BidderReputation>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, bidder: BidderReputation) {
        self.bidders.insert(bidder.id, bidder);
    }

    pub fn len(&self) -> usize {
        self.bidders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bidders.is_empty()
    }
}

impl FromIterator<BidderReputation> for InMemoryDirectory {
    fn from_iter<I: IntoIterator<Item = BidderReputation>>(iter: I) -> Self {
        let mut directory = InMemoryDirectory::new();
        for bidder in iter {
            directory.insert(bidder);
        }
        directory
    }
}

impl BidderDirectory for InMemoryDirectory {
    fn resolve(&self, bidder_id: u64) -> Option<&BidderReputation> {
        self.bidders.get(&bidder_id)
    }
}

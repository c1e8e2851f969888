mod data;

use crate::setup::TestSetup;

impl TestSetup {
    pub fn ledger(&self) -> LedgerFixtures<'_> {
        LedgerFixtures { setup: self }
    }
}

pub struct LedgerFixtures<'a> {
    pub setup: &'a TestSetup,
}

mod data;

use crate::setup::TestSetup;

impl TestSetup {
    pub fn catalog(&self) -> CatalogFixtures<'_> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    pub setup: &'a TestSetup,
}

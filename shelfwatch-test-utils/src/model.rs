//! Type aliases for database entity models used in tests.

/// Type alias for a region catalog record.
pub type RegionModel = entity::region::Model;

/// Type alias for a retail network catalog record.
pub type NetworkModel = entity::network::Model;

/// Type alias for a store catalog record.
pub type StoreModel = entity::store::Model;

/// Type alias for a store nomenclature entry.
pub type NomenclatureModel = entity::nomenclature::Model;

/// Type alias for a per-product, per-date check outcome.
pub type CheckRecordModel = entity::check_record::Model;

/// Type alias for a per-product, per-date price capture.
pub type PriceRecordModel = entity::price_record::Model;

pub use super::check_record::Entity as CheckRecord;
pub use super::network::Entity as Network;
pub use super::nomenclature::Entity as Nomenclature;
pub use super::price_record::Entity as PriceRecord;
pub use super::region::Entity as Region;
pub use super::store::Entity as Store;

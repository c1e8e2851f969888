pub mod prelude;

pub mod check_record;
pub mod network;
pub mod nomenclature;
pub mod price_record;
pub mod region;
pub mod store;

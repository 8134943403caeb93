pub mod currencies;
pub mod greeting;

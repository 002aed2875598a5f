pub mod dashboard;
pub mod errors;
pub mod events;
pub mod logging;
pub mod market_data;
pub mod scanning;
pub mod trading;

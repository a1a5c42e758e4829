pub mod checkout;
pub mod error;
pub mod id;
pub mod intent;
pub mod money;
pub mod order;
pub mod ports;
pub mod verification;

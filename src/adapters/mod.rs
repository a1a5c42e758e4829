pub mod console;
pub mod order_client;
pub mod sdk_loader;
pub mod verification_client;

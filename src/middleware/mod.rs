pub mod gate;
pub mod response;

pub use gate::access_gate;
pub use response::{found, no_store_headers};

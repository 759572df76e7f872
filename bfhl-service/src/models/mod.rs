pub mod envelope;
pub mod request;

pub use envelope::{Output, ResponseEnvelope};
pub use request::{BfhlRequest, Variant};

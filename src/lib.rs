pub mod batch;
pub mod date_string;
pub mod error;
pub mod instruction;

pub use batch::{PayoutBatch, PayoutStatus, PricingMethod};
pub use error::PayoutError;
pub use instruction::PayoutInstruction;

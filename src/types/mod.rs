mod errors;
mod monetary;
#[cfg(test)]
mod tests;
mod timestamp;

pub use errors::{AmountError, DateError};
pub use monetary::{Btc, Satoshis};
pub use timestamp::Timestamp;

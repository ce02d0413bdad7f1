//! Error types for card construction.
//!
//! Only raw-integer construction can fail. Searching a pool that holds no
//! set is a normal outcome and is reported as `None`, never as an error.

use crate::cards::Attribute;

/// Error raised when raw values do not describe a card.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    #[error("{attribute} value {value} is outside 1..={max}", max = crate::cards::DOMAIN_SIZE)]
    OutOfDomain { attribute: Attribute, value: u8 },

    #[error("hash {0} does not encode a card")]
    InvalidHash(u32),
}

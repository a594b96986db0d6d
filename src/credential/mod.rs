//! Self-describing password credentials.
//!
//! A credential is a single printable string carrying everything needed to
//! recompute its derived key: format tag, packed cost parameters, salt and
//! the key itself. It is written once and never modified; changing a
//! password produces a new credential with a new salt.
//!
//! Two formats share the same `$`-delimited layout:
//!
//! - `$s0$`: scrypt, memory-hard. The default choice.
//! - `$h0$`: iterated HMAC (PBKDF2), for callers that cannot afford the
//!   memory cost.
//!
//! Derived keys are compared in constant time.

mod encoding;
pub mod iterated;
pub mod password;
pub mod scrypt;

pub use encoding::SALT_LEN;
pub use iterated::{EncodedHmac, HmacHasher, check_hmac, create_hmac, verify_hmac};
pub use password::Password;
pub use scrypt::{EncodedScrypt, ScryptHasher, check, create, verify};

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Password bytes, wiped from memory on drop.
///
/// Text is always encoded as UTF-8. Callers holding text in another
/// encoding must convert it themselves and use [`Password::from_bytes`],
/// otherwise the same passphrase could derive different keys on different
/// systems.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Password(Vec<u8>);

impl Password {
    /// Wraps raw password bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Password {
    fn from(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }
}

impl From<String> for Password {
    fn from(text: String) -> Self {
        Self(text.into_bytes())
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_utf8_encoded() {
        let password = Password::from("pässwörd");
        assert_eq!(password.as_bytes(), "pässwörd".as_bytes());
        assert_eq!(password.len(), 10);
    }

    #[test]
    fn debug_output_is_redacted() {
        let password = Password::from("hunter2");
        assert_eq!(format!("{password:?}"), "Password(<redacted>)");
    }
}

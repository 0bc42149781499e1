use std::fmt;

use serde::Deserialize;

/// Test if the SecretString does not reveal the secret
///
/// ```compile_fail
/// use sessionguard::utils::secret_str::SecretString;
/// let x: SecretString = "".into();
/// println!("{}", x);
/// ```
///
/// ```
/// use sessionguard::utils::secret_str::SecretString;
/// let x: SecretString = "abc123".into();
/// assert_eq!(format!("{:?}", x), "SecretString(***)");
/// ```
#[derive(Clone, Default, PartialEq, Deserialize)]
#[serde(from = "String")]
pub struct SecretString(String);

impl SecretString {
    /// ```
    /// use sessionguard::utils::secret_str::SecretString;
    ///
    /// let x: SecretString = "abc123".into();
    /// assert_eq!(x.reveal_secret(), "abc123");
    /// ```
    pub fn reveal_secret(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("SecretString()")
        } else {
            f.write_str("SecretString(***)")
        }
    }
}

impl From<&str> for SecretString {
    fn from(secret: &str) -> Self {
        SecretString(secret.to_string())
    }
}

impl From<String> for SecretString {
    fn from(secret: String) -> Self {
        SecretString(secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_empty() {
        let x = SecretString::default();
        assert_eq!("SecretString()", format!("{:?}", x));
        assert!(x.is_empty());
    }

    #[test]
    fn test_deserialize() {
        let x: SecretString = serde_json::from_str("\"olia\"").unwrap();
        assert_eq!("olia", x.reveal_secret());
    }
}

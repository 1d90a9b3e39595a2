use serde::Serialize;

/// A device-level call handoff for one phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactIntent {
    pub phone: String,
    pub uri: String,
}

impl ContactIntent {
    /// Builds the `tel:` URI, percent-encoding only what a URI cannot carry.
    pub fn call(phone: &str) -> Self {
        let mut uri = String::with_capacity(phone.len() + 4);
        uri.push_str("tel:");
        for c in phone.chars() {
            if c.is_ascii_alphanumeric() || "+-.()*;=,".contains(c) {
                uri.push(c);
            } else {
                let mut buf = [0u8; 4];
                uri.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
            }
        }

        ContactIntent {
            phone: phone.to_string(),
            uri,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers_pass_through() {
        assert_eq!(ContactIntent::call("+919876543210").uri, "tel:+919876543210");
        assert_eq!(ContactIntent::call("(555) 010-2000").uri, "tel:(555)%20010-2000");
    }
}

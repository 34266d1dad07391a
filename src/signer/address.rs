use std::fmt;

use sha2::{Digest, Sha256};

pub const ED25519_ADDRESS_TYPE: u8 = 0x00;
pub const ADDRESS_LEN: usize = 33;

/// Key type byte followed by the SHA-256 digest of the public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    pub fn from_ed25519(public_key: &[u8; 32]) -> Self {
        let digest = Sha256::digest(public_key);
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes[0] = ED25519_ADDRESS_TYPE;
        bytes[1..].copy_from_slice(&digest);
        Self(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_is_type_byte_plus_digest() {
        let address = Address::from_ed25519(&[7u8; 32]);
        let rendered = address.to_string();
        assert!(rendered.starts_with("0x00"));
        assert_eq!(rendered.len(), 2 + ADDRESS_LEN * 2);

        let bytes = hex::decode(&rendered[2..]).expect("hex address");
        assert_eq!(bytes[0], ED25519_ADDRESS_TYPE);
        assert_eq!(&bytes[1..], Sha256::digest([7u8; 32]).as_slice());
    }

    #[test]
    fn distinct_keys_give_distinct_addresses() {
        assert_ne!(
            Address::from_ed25519(&[1u8; 32]),
            Address::from_ed25519(&[2u8; 32])
        );
    }
}

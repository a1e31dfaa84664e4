//! Staff bearer tokens.
//!
//! Format: `gl_v1_<staff uuid, simple>.<64 hex chars of secret>`. Only the SHA-256 digest of
//! the whole token is stored.

use std::{fmt, fmt::Write as _, str::FromStr};

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};
use thiserror::Error;
use uuid::Uuid;
use zeroize::Zeroize;

use crate::domain::staff::records::StaffUuid;

/// Staff token identifier prefix.
pub const STAFF_TOKEN_PREFIX: &str = "gl";

/// Number of random bytes in a token secret.
pub const STAFF_TOKEN_SECRET_BYTES: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffTokenVersion {
    V1,
}

impl StaffTokenVersion {
    #[must_use]
    pub const fn as_i16(self) -> i16 {
        match self {
            Self::V1 => 1,
        }
    }

    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::V1 => "v1",
        }
    }
}

impl TryFrom<i16> for StaffTokenVersion {
    type Error = StaffTokenError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::V1),
            _ => Err(StaffTokenError::UnsupportedVersion),
        }
    }
}

impl FromStr for StaffTokenVersion {
    type Err = StaffTokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "v1" => Ok(Self::V1),
            _ => Err(StaffTokenError::UnsupportedVersion),
        }
    }
}

#[derive(Clone)]
pub struct StaffTokenSecret {
    bytes: [u8; STAFF_TOKEN_SECRET_BYTES],
}

impl StaffTokenSecret {
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0_u8; STAFF_TOKEN_SECRET_BYTES];

        OsRng.fill_bytes(&mut bytes);

        Self { bytes }
    }

    #[must_use]
    pub const fn from_bytes(bytes: [u8; STAFF_TOKEN_SECRET_BYTES]) -> Self {
        Self { bytes }
    }

    fn to_hex(&self) -> String {
        let mut encoded = String::with_capacity(STAFF_TOKEN_SECRET_BYTES * 2);

        for byte in &self.bytes {
            let _ = write!(encoded, "{byte:02x}");
        }

        encoded
    }

    fn from_hex(encoded: &str) -> Option<Self> {
        if encoded.len() != STAFF_TOKEN_SECRET_BYTES * 2 || !encoded.is_ascii() {
            return None;
        }

        let mut bytes = [0_u8; STAFF_TOKEN_SECRET_BYTES];

        for (byte, pair) in bytes.iter_mut().zip(encoded.as_bytes().chunks_exact(2)) {
            let pair = std::str::from_utf8(pair).ok()?;

            *byte = u8::from_str_radix(pair, 16).ok()?;
        }

        Some(Self { bytes })
    }
}

impl fmt::Debug for StaffTokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StaffTokenSecret(**redacted**)")
    }
}

impl Drop for StaffTokenSecret {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StaffTokenError {
    #[error("staff token format is invalid")]
    InvalidFormat,

    #[error("staff token uses an unsupported version")]
    UnsupportedVersion,

    #[error("staff token secret encoding is invalid")]
    InvalidSecretEncoding,
}

/// A decoded bearer token.
#[derive(Debug, Clone)]
pub struct StaffToken {
    pub staff_uuid: StaffUuid,
    pub version: StaffTokenVersion,
    pub secret: StaffTokenSecret,
}

impl StaffToken {
    /// A fresh token for `staff_uuid`.
    #[must_use]
    pub fn generate(staff_uuid: StaffUuid) -> Self {
        Self {
            staff_uuid,
            version: StaffTokenVersion::V1,
            secret: StaffTokenSecret::generate(),
        }
    }

    /// Render the token as handed to the staff member.
    #[must_use]
    pub fn encode(&self) -> String {
        format!(
            "{STAFF_TOKEN_PREFIX}_{}_{}.{}",
            self.version.segment(),
            self.staff_uuid.into_uuid().simple(),
            self.secret.to_hex()
        )
    }

    /// Hex SHA-256 digest of the encoded token, as persisted.
    #[must_use]
    pub fn digest(&self) -> String {
        let mut encoded = self.encode();
        let digest = format!("{:x}", Sha256::digest(encoded.as_bytes()));

        encoded.zeroize();

        digest
    }
}

impl FromStr for StaffToken {
    type Err = StaffTokenError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (identity, secret) = token.split_once('.').ok_or(StaffTokenError::InvalidFormat)?;

        let mut segments = identity.splitn(3, '_');

        let (Some(prefix), Some(version), Some(uuid)) =
            (segments.next(), segments.next(), segments.next())
        else {
            return Err(StaffTokenError::InvalidFormat);
        };

        if prefix != STAFF_TOKEN_PREFIX {
            return Err(StaffTokenError::InvalidFormat);
        }

        let version = version.parse()?;

        let staff_uuid = Uuid::try_parse(uuid)
            .map(StaffUuid::from_uuid)
            .map_err(|_| StaffTokenError::InvalidFormat)?;

        let secret =
            StaffTokenSecret::from_hex(secret).ok_or(StaffTokenError::InvalidSecretEncoding)?;

        Ok(Self {
            staff_uuid,
            version,
            secret,
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn encoded_tokens_parse_back_to_the_same_digest() -> TestResult {
        let token = StaffToken {
            staff_uuid: StaffUuid::from_uuid(Uuid::nil()),
            version: StaffTokenVersion::V1,
            secret: StaffTokenSecret::from_bytes([0xab; STAFF_TOKEN_SECRET_BYTES]),
        };

        let encoded = token.encode();

        assert!(encoded.starts_with("gl_v1_00000000000000000000000000000000.abab"));

        let parsed: StaffToken = encoded.parse()?;

        assert_eq!(parsed.staff_uuid, token.staff_uuid);
        assert_eq!(parsed.digest(), token.digest());
        assert_eq!(token.digest().len(), 64);

        Ok(())
    }

    #[test]
    fn generated_tokens_differ() {
        let staff = StaffUuid::new();

        assert_ne!(
            StaffToken::generate(staff).digest(),
            StaffToken::generate(staff).digest()
        );
    }

    #[test]
    fn rejects_foreign_prefixes_and_bad_secrets() {
        let uuid = Uuid::nil().simple();

        assert_eq!(
            format!("lt_v1_{uuid}.{}", "00".repeat(32)).parse::<StaffToken>().err(),
            Some(StaffTokenError::InvalidFormat)
        );
        assert_eq!(
            format!("gl_v9_{uuid}.{}", "00".repeat(32)).parse::<StaffToken>().err(),
            Some(StaffTokenError::UnsupportedVersion)
        );
        assert_eq!(
            format!("gl_v1_{uuid}.zz").parse::<StaffToken>().err(),
            Some(StaffTokenError::InvalidSecretEncoding)
        );
        assert_eq!(
            "gl_v1_nodot".parse::<StaffToken>().err(),
            Some(StaffTokenError::InvalidFormat)
        );
    }

    #[test]
    fn secrets_are_redacted_in_debug_output() {
        let secret = StaffTokenSecret::from_bytes([1; STAFF_TOKEN_SECRET_BYTES]);

        assert_eq!(format!("{secret:?}"), "StaffTokenSecret(**redacted**)");
    }
}

//! Password mode: Argon2id key derivation and AES-256-GCM sealing of containers.
//!
//! The password only ever feeds the key derivation. The GCM tag is the one and only check
//! that the password was right and the data untouched.

pub mod authenticator;

//! Secure random source.
//!
//! Every draw that ends up in a credential goes through the operating
//! system CSPRNG (getrandom). There is no userspace fallback generator.

use rand::RngCore;
use rand::rngs::OsRng;

pub use rand::Error;

/// Handle to the OS CSPRNG. Zero-sized, stateless.
#[inline]
pub fn secure() -> OsRng {
    OsRng
}

/// Pull a few bytes to confirm the OS source is usable.
/// Callers treat failure as fatal at startup.
pub fn probe() -> Result<(), Error> {
    let mut buf = [0u8; 16];
    let result = OsRng.try_fill_bytes(&mut buf);
    buf.fill(0);
    result
}

pub fn entropy_source() -> &'static str {
    "OS CSPRNG (getrandom)"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_source_is_available() {
        assert!(probe().is_ok());
    }
}

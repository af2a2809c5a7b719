use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// The only signing method providers are allowed to declare.
pub const SIGNATURE_METHOD: &str = "sha256";

/// Verifies `<method>=<hex-digest>` webhook signatures against an
/// HMAC-SHA256 of the raw request body.
///
/// Every failure path resolves to `false`. An empty secret means the
/// verifier is unconfigured and nothing verifies.
#[derive(Clone)]
pub struct SignatureVerifier {
	secret: Option<Vec<u8>>,
}

impl SignatureVerifier {
	pub fn new(secret: impl AsRef<[u8]>) -> Self {
		let secret = secret.as_ref();
		Self {
			secret: (!secret.is_empty()).then(|| secret.to_vec()),
		}
	}

	pub fn is_configured(&self) -> bool {
		self.secret.is_some()
	}

	/// Header value a provider holding the same secret would send for `body`.
	pub fn sign(&self, body: &[u8]) -> Option<String> {
		let mut mac = self.mac()?;
		mac.update(body);
		Some(format!(
			"{SIGNATURE_METHOD}={}",
			hex::encode(mac.finalize().into_bytes())
		))
	}

	pub fn verify(&self, body: &[u8], header: Option<&str>) -> bool {
		let Some(header) = header.filter(|h| !h.is_empty()) else {
			return false;
		};
		// Everything after the first `=` is the digest; extra segments make it
		// invalid hex rather than being dropped.
		let Some((method, digest)) = header.split_once('=') else {
			return false;
		};
		if method != SIGNATURE_METHOD {
			return false;
		}
		let Ok(provided) = hex::decode(digest) else {
			return false;
		};
		let Some(mut mac) = self.mac() else {
			return false;
		};

		mac.update(body);
		// verify_slice is constant time and rejects a length mismatch the same
		// way it rejects a content mismatch.
		mac.verify_slice(&provided).is_ok()
	}

	fn mac(&self) -> Option<HmacSha256> {
		let secret = self.secret.as_deref()?;
		HmacSha256::new_from_slice(secret).ok()
	}
}

impl std::fmt::Debug for SignatureVerifier {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SignatureVerifier")
			.field("configured", &self.is_configured())
			.finish()
	}
}

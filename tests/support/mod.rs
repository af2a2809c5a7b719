pub mod notifiers;

use fast_payment_relay::domain::signature::SignatureVerifier;

pub const TEST_SECRET: &str = "whsec_test_secret";

pub fn sign(body: &[u8]) -> String {
	SignatureVerifier::new(TEST_SECRET)
		.sign(body)
		.expect("test secret is not empty")
}

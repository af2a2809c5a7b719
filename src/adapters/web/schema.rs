/// Signature headers in lookup order. Providers disagree on the name, so the
/// first one carrying a non-empty value is used.
pub const SIGNATURE_HEADERS: [&str; 2] = ["x-signature", "x-hub-signature"];

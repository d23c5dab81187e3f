//! AWS Signature Version 4 request signing for the Rekognition service.
//!
//! The signing chain follows the standard SigV4 derivation: the payload is
//! hashed, folded into a canonical request, hashed again into the string to
//! sign, and signed with a key derived from the secret key through the
//! date/region/service HMAC cascade.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";
const SERVICE: &str = "rekognition";
const SIGNED_HEADERS: &str = "content-type;host;x-amz-date;x-amz-target";

/// Everything needed to sign one Rekognition request.
///
/// All detection calls are `POST /` with an empty query string, so the
/// canonical request only varies in headers and payload.
pub(crate) struct SigningParams<'a> {
    pub access_key: &'a str,
    pub secret_key: &'a str,
    pub region: &'a str,
    pub host: &'a str,
    pub content_type: &'a str,
    pub amz_target: &'a str,
    /// Request timestamp in `YYYYMMDD'T'HHMMSS'Z'` form.
    pub amz_date: &'a str,
    pub payload: &'a [u8],
}

/// Returns the current UTC timestamp in the compact ISO form SigV4 expects.
pub(crate) fn amz_date_now() -> String {
    jiff::Timestamp::now()
        .strftime("%Y%m%dT%H%M%SZ")
        .to_string()
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

fn canonical_request(params: &SigningParams<'_>) -> String {
    format!(
        "POST\n/\n\ncontent-type:{}\nhost:{}\nx-amz-date:{}\nx-amz-target:{}\n\n{}\n{}",
        params.content_type,
        params.host,
        params.amz_date,
        params.amz_target,
        SIGNED_HEADERS,
        sha256_hex(params.payload),
    )
}

fn credential_scope(date: &str, region: &str) -> String {
    format!("{date}/{region}/{SERVICE}/aws4_request")
}

fn signing_key(secret_key: &str, date: &str, region: &str) -> Vec<u8> {
    let key = hmac_sha256(format!("AWS4{secret_key}").as_bytes(), date.as_bytes());
    let key = hmac_sha256(&key, region.as_bytes());
    let key = hmac_sha256(&key, SERVICE.as_bytes());
    hmac_sha256(&key, b"aws4_request")
}

/// Computes the `Authorization` header value for one request.
pub(crate) fn authorization_header(params: &SigningParams<'_>) -> String {
    // The scope date is the YYYYMMDD prefix of the request timestamp.
    let date = params.amz_date.get(..8).unwrap_or(params.amz_date);
    let scope = credential_scope(date, params.region);

    let string_to_sign = format!(
        "{ALGORITHM}\n{}\n{scope}\n{}",
        params.amz_date,
        sha256_hex(canonical_request(params).as_bytes()),
    );

    let key = signing_key(params.secret_key, date, params.region);
    let signature = hex::encode(hmac_sha256(&key, string_to_sign.as_bytes()));

    format!(
        "{ALGORITHM} Credential={}/{scope}, SignedHeaders={SIGNED_HEADERS}, Signature={signature}",
        params.access_key,
    )
}

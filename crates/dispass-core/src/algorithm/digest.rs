//! The hash-then-encode pipeline shared by every algorithm version.
//!
//! 1. Key material is `label ++ [seqno] ++ secret`, as text.
//! 2. SHA-512 of the key material, rendered as lowercase hex.
//! 3. The hex *text* is base64-encoded with `+`/`/` replaced by `4`/`9` and
//!    the padding removed.
//! 4. The result is cut to the requested length.
//!
//! Steps 2 and 3 are legacy behaviour: hashing into hex text and encoding that
//! text adds nothing cryptographically, but every passphrase ever handed out
//! depends on it, so it must stay bit-for-bit identical.

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;
use sha2::{Digest, Sha512};
use zeroize::Zeroizing;

use super::charset::Charset;

/// Build the key material. `seqno` is `None` for `dispass1`.
fn key_material(label: &str, seqno: Option<u32>, secret: &str) -> Zeroizing<String> {
    let mut material = Zeroizing::new(String::with_capacity(label.len() + secret.len() + 10));
    material.push_str(label);
    if let Some(seqno) = seqno {
        material.push_str(&seqno.to_string());
    }
    material.push_str(secret);
    material
}

/// Hash, hex, encode with the `49` alphabet and truncate.
fn encoded_digest(material: &str, length: usize) -> Zeroizing<String> {
    let hash = Zeroizing::new(Sha512::digest(material.as_bytes()).to_vec());
    let hex_text = Zeroizing::new(hex::encode(hash.as_slice()));

    let encoded = Zeroizing::new(STANDARD_NO_PAD.encode(hex_text.as_bytes()));
    let mut result = Zeroizing::new(String::with_capacity(length.min(encoded.len())));
    result.extend(encoded.chars().take(length).map(|c| match c {
        '+' => '4',
        '/' => '9',
        c => c,
    }));
    result
}

/// `dispass1`: SHA-512 over `label ++ secret`. Has no sequence number.
pub fn dispass1(label: &str, secret: &str, length: usize) -> String {
    let material = key_material(label, None, secret);
    encoded_digest(&material, length).as_str().to_owned()
}

/// `dispass2`: SHA-512 over `label ++ seqno ++ secret`.
pub fn dispass2(label: &str, secret: &str, length: usize, seqno: u32) -> String {
    let material = key_material(label, Some(seqno), secret);
    encoded_digest(&material, length).as_str().to_owned()
}

/// `dispass3`: `dispass2`, optionally folded onto a [`Charset`].
///
/// Without a charset the output is identical to `dispass2`.
pub fn dispass3(
    label: &str,
    secret: &str,
    length: usize,
    seqno: u32,
    charset: Option<Charset>,
) -> String {
    let material = key_material(label, Some(seqno), secret);
    let digest = encoded_digest(&material, length);

    match charset {
        Some(charset) => charset.remap(&digest),
        None => digest.as_str().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Full untruncated length of the encoded SHA-512 hex digest.
    const FULL_LENGTH: usize = 171;

    #[test]
    fn test_key_material_order() {
        assert_eq!(key_material("label", None, "secret").as_str(), "labelsecret");
        assert_eq!(
            key_material("label", Some(10), "secret").as_str(),
            "label10secret"
        );
    }

    #[test]
    fn test_encoded_digest_untruncated_length() {
        let digest = encoded_digest("testqqqqqqqq", usize::MAX);
        assert_eq!(digest.len(), FULL_LENGTH);
        assert!(!digest.contains('='));
        assert!(!digest.contains('+'));
        assert!(!digest.contains('/'));
    }

    #[test]
    fn test_dispass1_vectors() {
        assert_eq!(
            dispass1("test", "qqqqqqqq", 30),
            "Y2Y4Y2Y0Yzg5Nzc1Yzc2MmI4OTU0ND"
        );
        assert_eq!(
            dispass1("test2", "qqqqqqqq", 50),
            "NmQzNjUzZTlhNTc4NWFlNTU5ZTVkZGQ5ZTc2NzliZjgzZDQ1Zj"
        );
    }

    #[test]
    fn test_dispass2_vectors() {
        assert_eq!(
            dispass2("test", "qqqqqqqq", 30, 1),
            "ZTdiNGNkYmQ2ZjFmNzc3NGFjZWEwMz"
        );
        assert_eq!(
            dispass2("test2", "qqqqqqqq", 50, 10),
            "NGEwNjMxMzZiMzljODVmODk4OWQ1ZmE4YTRlY2E4ODZkZjZlZW"
        );
    }

    #[test]
    fn test_dispass3_vectors() {
        assert_eq!(
            dispass3("test3", "qqqqqqqq", 30, 1, Some(Charset::Light)),
            "765c1Z7Y1f9a8b_X2d3e8bcf8Z0W14"
        );
        assert_eq!(
            dispass3("test4", "qqqqqqqq", 50, 10, Some(Charset::Light)),
            "6XaX734g698Y510fb38W738Waefd6ech532e6e4Z6X6e6i_i6i"
        );
        assert_eq!(
            dispass3("test5", "qqqqqqqq", 50, 10, Some(Charset::Full)),
            "3Z#%@^0W2^4)987$2_5^9^#$3^Y)@6@*9^(*3Z2X9^1^9^*)36"
        );
    }

    #[test]
    fn test_dispass3_without_charset_matches_dispass2() {
        assert_eq!(
            dispass3("test", "qqqqqqqq", 30, 1, None),
            dispass2("test", "qqqqqqqq", 30, 1)
        );
    }

    #[test]
    fn test_zero_length_is_empty() {
        assert_eq!(dispass1("test", "qqqqqqqq", 0), "");
        assert_eq!(dispass2("test", "qqqqqqqq", 0, 1), "");
        assert_eq!(dispass3("test", "qqqqqqqq", 0, 1, Some(Charset::Full)), "");
    }

    #[test]
    fn test_length_beyond_digest_is_capped() {
        assert_eq!(dispass1("test", "qqqqqqqq", 1000).len(), FULL_LENGTH);
        assert_eq!(
            dispass3("test", "qqqqqqqq", 1000, 1, Some(Charset::Light)).len(),
            FULL_LENGTH
        );
    }
}

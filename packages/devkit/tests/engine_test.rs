//! Every tool driven through the engine and the flat surface

use devkit::prelude::*;
use devkit::{
    base64_decode, base64_encode, decode_token, digest_all, format_document, generate_secret,
    score_secret, url_decode, url_encode, validate_document, DecodeError, FormatError,
    GenerationError, LoggingTransformer, Strength, TokenError,
};

fn engine() -> Engine {
    LoggingTransformer::init_test();
    Engine::default()
}

#[test]
fn test_codecs_round_trip_through_engine() {
    let engine = engine();
    let encoded = engine.base64_encode("héllo wörld");
    assert_eq!(engine.base64_decode(&encoded).expect("round trip"), "héllo wörld");

    let encoded = engine.url_encode("a b&c=d/é");
    assert_eq!(encoded, "a%20b%26c%3Dd%2F%C3%A9");
    assert_eq!(engine.url_decode(&encoded).expect("round trip"), "a b&c=d/é");
}

#[test]
fn test_engine_errors_carry_kind_and_source() {
    let engine = engine();

    let err = engine.base64_decode("Zg").expect_err("bad length");
    assert_eq!(err.kind(), &ErrorKind::Decode);
    assert!(std::error::Error::source(&err).is_some());

    let err = engine.decode_token("only.two").expect_err("malformed");
    assert_eq!(err.kind(), &ErrorKind::Token);

    let err = engine.validate_document("<a><b></a>").expect_err("mismatched");
    assert_eq!(err.kind(), &ErrorKind::Validation);

    let err = engine
        .generate_secret_with(8, &[])
        .expect_err("no classes");
    assert_eq!(err.kind(), &ErrorKind::Generation);
}

#[test]
fn test_idle_input_across_tools() {
    let engine = engine();
    assert_eq!(engine.base64_encode(""), "");
    assert_eq!(engine.url_decode("").expect("idle"), "");
    assert_eq!(engine.url_decode("  ").expect("whitespace passes through"), "  ");
    assert_eq!(engine.base64_encode("  "), "ICA=");
    assert!(engine.decode_token("   ").expect("idle").is_none());
    assert!(engine.digest_all("\n").is_empty());
    assert!(engine.validate_document("").is_ok());
    assert_eq!(engine.format_document(" ").expect("idle"), "");
}

#[test]
fn test_configured_password_generation() {
    LoggingTransformer::init_test();
    let config = DevkitConfig::from_json_str(
        r#"{"password":{"length":32,"classes":["lowercase","numbers"],"exclude_ambiguous":true}}"#,
    )
    .expect("valid configuration");
    let engine = Engine::new(config).expect("valid engine");

    let secret = engine.generate_secret().expect("classes enabled");
    assert_eq!(secret.chars().count(), 32);
    assert!(secret.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    assert!(!secret.contains(['0', '1', 'l', 'o']));
    assert_eq!(engine.score_secret(&secret).points, 5);
}

#[test]
fn test_oversized_length_is_refused_without_allocating() {
    let engine = engine();
    let err = engine
        .generate_secret_with(usize::MAX, &CharClass::ALL)
        .expect_err("length above the maximum");
    assert_eq!(err.kind(), &ErrorKind::Generation);
}

#[test]
fn test_engine_rejects_invalid_config() {
    let mut config = DevkitConfig::default();
    config.password.classes.clear();
    let err = Engine::new(config).expect_err("empty classes");
    assert_eq!(err.kind(), &ErrorKind::Configuration);
}

#[tokio::test]
async fn test_async_digest_matches_sync() {
    let engine = engine();
    let text = "digest me ".repeat(2000);
    assert_eq!(engine.digest_all_async(&text).await, engine.digest_all(&text));
    assert_eq!(
        engine
            .digest_all("abc")
            .hex(DigestAlgorithm::Sha1)
            .as_deref(),
        Some("a9993e364706816aba3e25717850c26c9cd0d89d")
    );
}

#[test]
fn test_flat_surface_keeps_precise_errors() {
    assert_eq!(base64_encode("f"), "Zg==");
    assert!(matches!(base64_decode("Zg"), Err(DecodeError::InvalidFormat(_))));
    assert_eq!(url_encode("!*'()"), "!*'()");
    assert!(matches!(url_decode("%zz"), Err(DecodeError::InvalidFormat(_))));

    assert_eq!(
        decode_token("only.two"),
        Err(TokenError::MalformedStructure { segments: 2 })
    );
    let token = decode_token("eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxIiwiZXhwIjoxfQ.sig")
        .expect("valid")
        .expect("non-idle");
    assert!(token.is_expired());

    assert_eq!(digest_all("abc").len(), 4);
    assert!(validate_document("<a/>").is_ok());
    assert!(matches!(format_document("<a>"), Err(FormatError::Invalid(_))));

    assert_eq!(generate_secret(4, &[]), Err(GenerationError::NoClassesEnabled));
    let secret = generate_secret(16, &CharClass::ALL).expect("classes enabled");
    assert_eq!(score_secret(&secret).strength, Strength::VeryStrong);
}

#[test]
fn test_text_codec_trait_objects() {
    let codecs: Vec<Box<dyn TextCodec>> = vec![
        Box::new(devkit::Base64Codec::default()),
        Box::new(devkit::UrlCodec),
    ];
    for codec in &codecs {
        let encoded = codec.apply(Direction::Encode, "a/b c").expect("encode is total");
        let decoded = codec
            .apply(Direction::Encode.flipped(), &encoded)
            .expect("round trip");
        assert_eq!(decoded, "a/b c", "{}", codec.name());
    }
}

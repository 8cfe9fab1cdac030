use recase::{
    normalize_to_convention, CoercionPolicy, ConvertError, NamingConvention, RawInput,
};
use rstest::rstest;
use serde_json::json;

fn kebab(input: impl Into<RawInput>) -> String {
    normalize_to_convention(input, NamingConvention::Kebab, CoercionPolicy::Stringify).unwrap()
}

#[rstest]
#[case("Hello World", "hello-world")]
#[case("hello world", "hello-world")]
#[case("helloWorld", "hello-world")]
#[case("HelloWorld", "hello-world")]
#[case("hello_world", "hello-world")]
#[case("hello__world", "hello-world")]
#[case("hello-World_test", "hello-world-test")]
#[case("helloWorldTest", "hello-world-test")]
#[case("  MixedCASE_string Example ", "mixed-case-string-example")]
#[case("special@#Chars!", "special-chars")]
#[case("hello@world!", "hello-world")]
#[case("HTTPServer", "http-server")]
#[case("HELLO_WORLD", "hello-world")]
#[case("user_ID-number", "user-id-number")]
#[case("userID", "user-id")]
#[case("userIDNumber", "user-id-number")]
#[case("userID_number", "user-id-number")]
#[case("user id number", "user-id-number")]
#[case("___hello---world___", "hello-world")]
#[case("hello world123", "hello-world-123")]
#[case("123", "123")]
#[case("", "")]
#[case("   ", "")]
fn test_kebab_strings(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(kebab(input), expected);
}

#[rstest]
#[case("first name", "firstName")]
#[case("user_id", "userId")]
#[case("SCREEN_NAME", "screenName")]
#[case("screen_name", "screenName")]
#[case("mobile-number", "mobileNumber")]
fn test_camel_strings(#[case] input: &str, #[case] expected: &str) {
    let out = normalize_to_convention(input, NamingConvention::Camel, CoercionPolicy::Stringify);
    assert_eq!(out.unwrap(), expected);
}

#[rstest]
#[case(NamingConvention::Kebab, "parse-http-response-2")]
#[case(NamingConvention::Camel, "parseHttpResponse2")]
#[case(NamingConvention::Pascal, "ParseHttpResponse2")]
#[case(NamingConvention::Snake, "parse_http_response_2")]
#[case(NamingConvention::ScreamingSnake, "PARSE_HTTP_RESPONSE_2")]
#[case(NamingConvention::Space, "parse http response 2")]
fn test_every_convention(#[case] convention: NamingConvention, #[case] expected: &str) {
    let out = normalize_to_convention("parseHTTPResponse2", convention, CoercionPolicy::Strict);
    assert_eq!(out.unwrap(), expected);
}

#[test]
fn test_non_string_inputs() {
    assert_eq!(kebab(123i64), "123");
    assert_eq!(kebab(-12.75f64), "12-75");
    assert_eq!(kebab(RawInput::Absent), "");
    assert_eq!(kebab(json!(null)), "");
    assert_eq!(kebab(json!([])), "");
    assert_eq!(kebab(json!({})), "");
    assert_eq!(kebab(json!(["fooBar", 2])), "foo-bar-2");
    assert_eq!(kebab(json!(true)), "true");
}

#[rstest]
#[case(RawInput::Absent)]
#[case(RawInput::from(json!(null)))]
#[case(RawInput::from(""))]
#[case(RawInput::from("   "))]
#[case(RawInput::from(json!([])))]
fn test_empty_input_closure(#[case] input: RawInput) {
    for policy in [CoercionPolicy::Stringify, CoercionPolicy::EmptyOnMissing] {
        for convention in NamingConvention::ALL {
            let out = normalize_to_convention(input.clone(), convention, policy);
            assert_eq!(out.unwrap(), "", "{convention} / {policy}");
        }
    }
}

#[test]
fn test_strict_policy() {
    let strict = CoercionPolicy::Strict;
    let kebab = NamingConvention::Kebab;

    assert_eq!(
        normalize_to_convention(RawInput::Absent, kebab, strict),
        Err(ConvertError::InvalidInput)
    );
    assert_eq!(
        normalize_to_convention(json!({}), kebab, strict),
        Err(ConvertError::InvalidType { kind: "object" })
    );
    assert_eq!(
        normalize_to_convention(json!([]), kebab, strict),
        Err(ConvertError::InvalidType { kind: "array" })
    );
    assert_eq!(normalize_to_convention(12345i64, kebab, strict).unwrap(), "12345");
}

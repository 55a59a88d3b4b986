/// Source of the serialized `name=value; name2=value2` cookie string.
pub trait CookieJar {
    fn cookie_string(&self) -> String;

    fn read(&self, name: &str) -> Option<String> {
        read_cookie(&self.cookie_string(), name)
    }
}

/// Looks up `name` in a serialized cookie string.
///
/// Matching is exact on `"; name="` boundaries. A name that occurs more than
/// once yields `None`, as does an absent one.
pub fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    let haystack = format!("; {}", cookies);
    let needle = format!("; {}=", name);
    let mut parts = haystack.split(needle.as_str());
    let _before = parts.next()?;
    let value_part = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    value_part.split(';').next().map(str::to_string)
}

/// CSRF token to echo back in the request header, empty when the cookie is missing.
pub fn csrf_token(jar: &dyn CookieJar, cookie_name: &str) -> String {
    jar.read(cookie_name).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    struct FixedJar(&'static str);

    impl CookieJar for FixedJar {
        fn cookie_string(&self) -> String {
            self.0.to_string()
        }
    }

    #[rstest]
    #[case("csrftoken=abc", Some("abc"))]
    #[case("sessionid=1; csrftoken=abc", Some("abc"))]
    #[case("csrftoken=abc; sessionid=1", Some("abc"))]
    #[case("csrftoken=", Some(""))]
    #[case("xcsrftoken=abc", None)]
    #[case("csrftoken2=abc", None)]
    #[case("", None)]
    #[case("csrftoken=a; csrftoken=b", None)]
    fn test_read_cookie(#[case] cookies: &str, #[case] expected: Option<&str>) {
        assert_eq!(read_cookie(cookies, "csrftoken"), expected.map(str::to_string));
    }

    #[test]
    fn test_value_may_contain_equals() {
        assert_eq!(read_cookie("token=a=b==; x=1", "token"), Some("a=b==".to_string()));
    }

    #[test]
    fn test_csrf_token_defaults_to_empty() {
        assert_eq!(csrf_token(&FixedJar("sessionid=1"), "csrftoken"), "");
        assert_eq!(csrf_token(&FixedJar("csrftoken=tok"), "csrftoken"), "tok");
    }
}

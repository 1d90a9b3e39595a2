use url::form_urlencoded;

/// Escapes text for use in HTML content or a quoted attribute.
pub fn escape(text: &str) -> String {
    ammonia::clean_text(text)
}

/// `?a=1&b=2` from the non-empty pairs, or an empty string.
pub fn query_string(pairs: &[(&str, Option<&str>)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in pairs {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            serializer.append_pair(key, value);
            any = true;
        }
    }

    if any {
        format!("?{}", serializer.finish())
    } else {
        String::new()
    }
}

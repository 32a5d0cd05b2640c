/// Builds the final request URL. Base and path are concatenated verbatim,
/// no slash normalization. Query pairs are percent-encoded and appended in
/// slice order; duplicate keys are kept.
pub fn build(base_url: &str, uri: &str, query: &[(&str, &str)]) -> String {
    let mut url = format!("{base_url}{uri}");
    if query.is_empty() {
        return url;
    }
    url.push('?');
    for (i, (name, value)) in query.iter().enumerate() {
        if i > 0 {
            url.push('&');
        }
        url.push_str(&urlencoding::encode(name));
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }
    url
}

#[cfg(test)]
mod tests {
    use super::build;

    #[test]
    fn empty_query_is_plain_concatenation() {
        assert_eq!(
            build("http://localhost:8080", "/jobs", &[]),
            "http://localhost:8080/jobs"
        );
    }

    #[test]
    fn no_slash_normalization() {
        // caller responsibility, kept verbatim
        assert_eq!(build("http://host/", "/a", &[]), "http://host//a");
        assert_eq!(build("http://host", "a", &[]), "http://hosta");
    }

    #[test]
    fn query_pairs_joined_in_order() {
        assert_eq!(
            build("http://host", "/search", &[("q", "rust"), ("page", "2")]),
            "http://host/search?q=rust&page=2"
        );
    }

    #[test]
    fn duplicate_keys_are_kept_in_order() {
        assert_eq!(
            build("http://host", "/", &[("tag", "a"), ("tag", "b")]),
            "http://host/?tag=a&tag=b"
        );
    }

    #[test]
    fn pairs_are_percent_encoded() {
        assert_eq!(
            build("http://host", "/", &[("a key", "a/value&more")]),
            "http://host/?a%20key=a%2Fvalue%26more"
        );
    }

    #[test]
    fn encoding_round_trips() {
        let pairs = [("q", "hello world"), ("path", "/x?y=z"), ("sym", "100%")];
        let url = build("http://host", "/find", &pairs);
        let query = url.split_once('?').expect("query component").1;

        let decoded: Vec<(String, String)> = query
            .split('&')
            .map(|pair| {
                let (name, value) = pair.split_once('=').expect("pair");
                (
                    urlencoding::decode(name).expect("name decodes").into_owned(),
                    urlencoding::decode(value).expect("value decodes").into_owned(),
                )
            })
            .collect();

        let expected: Vec<(String, String)> = pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        assert_eq!(decoded, expected);
    }
}

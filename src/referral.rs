use log::warn;

const UTM_KEYS: [&str; 5] = ["source", "medium", "campaign", "term", "content"];

/// Referral code and UTM tags picked up from the landing URL, so they can be
/// carried over to the app's signup link.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReferralParams {
    pairs: Vec<(String, String)>,
}

impl ReferralParams {
    /// Parses a query string (`?ref=alice&utm_source=x`, leading `?` optional).
    pub fn from_query(query: &str) -> Self {
        let fields: Vec<(String, String)> = query
            .trim_start_matches('?')
            .split('&')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let (key, value) = part.split_once('=').unwrap_or((part, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();

        // first occurrence wins, like URLSearchParams::get
        let lookup = |key: &str| {
            fields
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
                .filter(|v| !v.is_empty())
        };

        let mut pairs = Vec::new();
        if let Some(code) = lookup("ref") {
            pairs.push(("ref".to_string(), code));
        }
        for key in UTM_KEYS {
            let name = format!("utm_{}", key);
            if let Some(value) = lookup(&name) {
                pairs.push((name, value));
            }
        }
        Self { pairs }
    }

    pub fn current() -> Self {
        let search = web_sys::window().map(|window| window.location().search());
        match search {
            Some(Ok(search)) => Self::from_query(&search),
            Some(Err(err)) => {
                warn!("Could not read location search: {:?}", err);
                Self::default()
            }
            None => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// e.g. `ref=alice&utm_source=alice`
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn append_to(&self, url: &str) -> String {
        if self.is_empty() {
            return url.to_string();
        }
        let separator = if url.contains('?') { '&' } else { '?' };
        format!("{}{}{}", url, separator, self.to_query_string())
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_ref_and_utm_tags() {
        let params = ReferralParams::from_query("?ref=alice&utm_source=alice");
        assert_eq!(params.to_query_string(), "ref=alice&utm_source=alice");
    }

    #[test]
    fn orders_ref_first_then_utm_keys() {
        let params = ReferralParams::from_query("utm_content=hero&utm_medium=social&ref=bob&utm_source=x");
        assert_eq!(
            params.to_query_string(),
            "ref=bob&utm_source=x&utm_medium=social&utm_content=hero"
        );
    }

    #[test]
    fn ignores_unrelated_and_empty_values() {
        let params = ReferralParams::from_query("?page=2&ref=&utm_term&utm_campaign=fall");
        assert_eq!(params.to_query_string(), "utm_campaign=fall");
    }

    #[test]
    fn first_occurrence_wins() {
        let params = ReferralParams::from_query("ref=first&ref=second");
        assert_eq!(params.to_query_string(), "ref=first");
    }

    #[test]
    fn decodes_and_reencodes_values() {
        let params = ReferralParams::from_query("?ref=dr+j%C3%B6rg&utm_source=a%26b");
        assert_eq!(params.to_query_string(), "ref=dr%20j%C3%B6rg&utm_source=a%26b");
    }

    #[test]
    fn empty_query_gives_empty_params() {
        assert!(ReferralParams::from_query("").is_empty());
        assert!(ReferralParams::from_query("?").is_empty());
    }

    #[test]
    fn append_to_picks_separator() {
        let params = ReferralParams::from_query("ref=alice");
        assert_eq!(params.append_to("https://app.example/signup"), "https://app.example/signup?ref=alice");
        assert_eq!(params.append_to("https://app.example/?plan=pro"), "https://app.example/?plan=pro&ref=alice");
        assert_eq!(ReferralParams::default().append_to("/signup"), "/signup");
    }
}

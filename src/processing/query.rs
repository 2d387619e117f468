//! `network` / `hosts` query-string parameters.
//!
//! The two form values persist as a shareable query string, e.g.
//! `network=15.0.0.0&hosts=50%2C+20%2C+10`.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

const KEY_NETWORK: &str = "network";
const KEY_HOSTS: &str = "hosts";

/// Raw, unvalidated form values.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub network: Option<String>,
    pub hosts: Option<String>,
}

impl QueryParams {
    pub fn new(network: Option<&str>, hosts: Option<&str>) -> Self {
        QueryParams {
            network: non_empty(network),
            hosts: non_empty(hosts),
        }
    }

    /// Form-urlencoded query string without the leading `?`.
    ///
    /// A key is written only when its trimmed value is non-empty.
    pub fn to_query_string(&self) -> String {
        [(KEY_NETWORK, &self.network), (KEY_HOSTS, &self.hosts)]
            .into_iter()
            .filter_map(|(key, value)| {
                non_empty(value.as_deref()).map(|v| format!("{key}={}", encode_component(&v)))
            })
            .join("&")
    }

    /// Parse a query string, with or without the leading `?`.
    ///
    /// Unknown keys are ignored and the first occurrence of a key wins.
    pub fn from_query_string(query: &str) -> Self {
        let query = query.trim().trim_start_matches('?');
        let mut params = QueryParams::default();
        let mut seen_network = false;
        let mut seen_hosts = false;

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(key);
            let (slot, seen) = match key.as_str() {
                KEY_NETWORK => (&mut params.network, &mut seen_network),
                KEY_HOSTS => (&mut params.hosts, &mut seen_hosts),
                _ => {
                    log::debug!("Ignoring query parameter {key:?}");
                    continue;
                }
            };
            // an empty first value still claims the key
            if !*seen {
                *seen = true;
                *slot = non_empty(Some(decode_component(value).as_str()));
            }
        }
        params
    }

    /// A plan is computed straight from a query string only when both values are present.
    pub fn should_calculate(&self) -> bool {
        self.network.is_some() && self.hosts.is_some()
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// application/x-www-form-urlencoded encoding of one key or value.
fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'*' | b'-' | b'.' | b'_' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Inverse of [`encode_component`]; malformed `%` escapes are kept literally.
fn decode_component(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let escaped = match bytes.get(i + 1..i + 3) {
            Some(&[hi, lo]) if bytes[i] == b'%' => hex_pair(hi, lo),
            _ => None,
        };
        match (bytes[i], escaped) {
            (b'%', Some(b)) => {
                out.push(b);
                i += 2;
            }
            (b'+', _) => out.push(b' '),
            (b, _) => out.push(b),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_pair(hi: u8, lo: u8) -> Option<u8> {
    let hi = (hi as char).to_digit(16)?;
    let lo = (lo as char).to_digit(16)?;
    Some((hi * 16 + lo) as u8)
}

//! Language tag negotiation against the registered tables.
//!
//! Tags are compared case-insensitively on hyphen boundaries. A wanted tag
//! is tried from its most specific subcode down to its primary language; the
//! first subcode that matches any available tag decides the result.

/// Subcode chain of a tag, most specific first.
///
/// `"en-gb-cockney"` yields `["en-gb-cockney", "en-gb", "en"]`. Empty
/// segments produced by stray hyphens are skipped.
pub fn subcodes(tag: &str) -> Vec<&str> {
    let mut chain = Vec::new();
    let mut current = tag.trim_end_matches('-');
    while !current.is_empty() {
        chain.push(current);
        current = match current.rfind('-') {
            Some(idx) => current[..idx].trim_end_matches('-'),
            None => "",
        };
    }
    chain
}

/// Trailing subcodes of a tag, longest first, excluding the tag itself.
///
/// `"en-us-fake-cockney"` yields `["us-fake-cockney", "fake-cockney", "cockney"]`.
fn trailing_subcodes(tag: &str) -> Vec<&str> {
    tag.match_indices('-')
        .map(|(idx, _)| &tag[idx + 1..])
        .filter(|rest| !rest.is_empty())
        .collect()
}

/// Whether `candidate` occurs in `wanted` as a whole run of segments.
fn contains_subcode(wanted: &str, candidate: &str) -> bool {
    if candidate.is_empty() {
        return false;
    }
    wanted == candidate
        || wanted.starts_with(&format!("{candidate}-"))
        || wanted.ends_with(&format!("-{candidate}"))
        || wanted.contains(&format!("-{candidate}-"))
}

/// Primary language segment of a tag.
fn primary(tag: &str) -> &str {
    tag.split('-').next().unwrap_or(tag)
}

/// Best score of one available tag against one wanted subcode.
///
/// The score is the length of the longest available subcode found inside
/// `wanted`; zero means no match. Trailing subcodes only count between tags
/// of the same primary language.
fn match_score(wanted: &str, available: &str) -> usize {
    let trailing = if primary(wanted) == primary(available) {
        trailing_subcodes(available)
    } else {
        Vec::new()
    };
    subcodes(available)
        .into_iter()
        .chain(trailing)
        .filter(|candidate| contains_subcode(wanted, candidate))
        .map(str::len)
        .max()
        .unwrap_or(0)
}

/// Pick the best available tag for a ranked list of wanted tags.
///
/// Wanted tags are evaluated strictly in the given order and the first one
/// with a nonzero match wins. Within one wanted tag the most specific
/// subcode that matches anything is used; across available tags the higher
/// score wins, then the shorter available tag, then the earlier one. When
/// nothing matches, `default` is returned.
pub fn negotiate<'a, W: AsRef<str>>(wanted: &[W], available: &[&'a str], default: &'a str) -> &'a str {
    let normalized: Vec<(String, &'a str)> = available
        .iter()
        .map(|tag| (tag.trim().to_lowercase(), *tag))
        .filter(|(norm, _)| !norm.is_empty())
        .collect();

    for tag in wanted {
        let tag = tag.as_ref().trim().to_lowercase();
        if tag.is_empty() {
            continue;
        }

        for subcode in subcodes(&tag) {
            // Score tuple: (negative score, available length, position)
            let best = normalized
                .iter()
                .enumerate()
                .filter_map(|(position, (norm, original))| {
                    let score = match_score(subcode, norm);
                    (score > 0).then_some(((std::cmp::Reverse(score), norm.len(), position), *original))
                })
                .min_by(|(a, _), (b, _)| a.cmp(b));

            if let Some(((score, _, _), original)) = best {
                log::debug!(
                    "[negotiate] wanted={} subcode={} -> {} (score {})",
                    tag,
                    subcode,
                    original,
                    score.0
                );
                return original;
            }
        }
    }

    log::debug!("[negotiate] no match, falling back to {}", default);
    default
}

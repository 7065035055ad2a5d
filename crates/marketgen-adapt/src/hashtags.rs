//! Hashtag and mention reconciliation.

use std::sync::LazyLock;

use regex::Regex;

/// A `#tag` at the start of the text or after whitespace or punctuation.
///
/// `regex` has no lookbehind, so the boundary is captured as `pre` and put
/// back when stripping. A `#` inside a URL (`/docs#install`) never matches.
static HASHTAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<pre>^|[\s(\[{,;:!?，。、；：！？（])#(?P<tag>\w+)").expect("valid regex")
});

static MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@([A-Za-z0-9._]+)").expect("valid regex"));

static DASHED_MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@([A-Za-z0-9._\-]+)").expect("valid regex"));

static SPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]{2,}").expect("valid regex"));

static TRAILING_SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+\n").expect("valid regex"));

/// Where hashtags end up after reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflowPolicy {
    /// Leave inline tags where the author put them.
    Preserve,
    /// Once more than `threshold` tags appear inline, strip them and append
    /// the capped list as one trailing block.
    Collect { threshold: usize },
}

/// Output of [`HashtagReconciler::reconcile`].
///
/// `body` and `block` are kept apart so a caller that must shorten the text
/// can cut the body without losing the collected tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    pub body: String,
    /// Trailing `#a #b` block, present only when tags were collected.
    pub block: Option<String>,
    pub tags: Vec<String>,
    /// How many merged tags the cap dropped.
    pub dropped: usize,
    pub reflowed: bool,
}

impl Reconciled {
    /// Body and block joined by a blank line.
    #[must_use]
    pub fn text(&self) -> String {
        join_block(&self.body, self.block.as_deref())
    }

    /// Ensure every kept tag is visible in the text: tags that are neither
    /// inline nor already in the block are appended as a block.
    #[must_use]
    pub fn with_all_tags_visible(mut self) -> Self {
        if self.block.is_some() {
            return self;
        }
        let inline = extract_hashtags(&self.body);
        let missing: Vec<&String> = self.tags.iter().filter(|t| !inline.contains(t)).collect();
        if !missing.is_empty() {
            self.block = Some(format_block(missing.into_iter()));
        }
        self
    }
}

/// Merges inline and explicit hashtags under a platform cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashtagReconciler {
    cap: usize,
    reflow: ReflowPolicy,
}

impl HashtagReconciler {
    #[must_use]
    pub fn new(cap: usize, reflow: ReflowPolicy) -> Self {
        Self { cap, reflow }
    }

    #[must_use]
    pub fn cap(&self) -> usize {
        self.cap
    }

    #[must_use]
    pub fn reflow(&self) -> ReflowPolicy {
        self.reflow
    }

    /// Merge inline `#tags` in `text` with `explicit` tags.
    ///
    /// Inline tags come first, in order of appearance, then explicit tags not
    /// yet seen. Values are compared case-sensitively. The merged list is cut
    /// from the tail down to the cap.
    #[must_use]
    pub fn reconcile(&self, text: &str, explicit: &[String]) -> Reconciled {
        let inline_count = HASHTAG_RE.find_iter(text).count();

        let mut tags: Vec<String> = Vec::new();
        let candidates = extract_hashtags(text).into_iter().chain(
            explicit
                .iter()
                .map(|t| t.trim().trim_start_matches('#').to_string()),
        );
        for tag in candidates {
            if !tag.is_empty() && !tags.contains(&tag) {
                tags.push(tag);
            }
        }

        let dropped = tags.len().saturating_sub(self.cap);
        if dropped > 0 {
            tracing::info!(
                merged = tags.len(),
                cap = self.cap,
                dropped,
                "hashtag count exceeds platform cap, keeping the first tags"
            );
            tags.truncate(self.cap);
        }

        let collect = match self.reflow {
            ReflowPolicy::Preserve => false,
            ReflowPolicy::Collect { threshold } => inline_count > threshold,
        };

        if !collect {
            return Reconciled {
                body: text.to_string(),
                block: None,
                tags,
                dropped,
                reflowed: false,
            };
        }

        let body = strip_hashtags(text);
        let block = if tags.is_empty() {
            None
        } else {
            Some(format_block(tags.iter()))
        };
        Reconciled {
            body,
            block,
            tags,
            dropped,
            reflowed: true,
        }
    }
}

/// Inline hashtag values (without `#`) in order of first appearance.
#[must_use]
pub fn extract_hashtags(text: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for cap in HASHTAG_RE.captures_iter(text) {
        let tag = &cap["tag"];
        if !out.iter().any(|t| t == tag) {
            out.push(tag.to_string());
        }
    }
    out
}

/// Inline `@handles` merged with `explicit` mentions, first-seen order.
///
/// `allow_dash` admits `-` inside handles, as LinkedIn profile names use it.
#[must_use]
pub fn merge_mentions(text: &str, explicit: &[String], allow_dash: bool) -> Vec<String> {
    let re = if allow_dash {
        &*DASHED_MENTION_RE
    } else {
        &*MENTION_RE
    };
    let mut out: Vec<String> = Vec::new();
    let inline = re.captures_iter(text).map(|c| c[1].to_string());
    let explicit = explicit
        .iter()
        .map(|m| m.trim().trim_start_matches('@').to_string());
    for mention in inline.chain(explicit) {
        if !mention.is_empty() && !out.contains(&mention) {
            out.push(mention);
        }
    }
    out
}

fn strip_hashtags(text: &str) -> String {
    let stripped = HASHTAG_RE.replace_all(text, "${pre}");
    let stripped = TRAILING_SPACE_RE.replace_all(&stripped, "\n");
    let stripped = SPACE_RUN_RE.replace_all(&stripped, " ");
    stripped.trim().to_string()
}

fn format_block<'a>(tags: impl Iterator<Item = &'a String>) -> String {
    tags.map(|t| format!("#{t}")).collect::<Vec<_>>().join(" ")
}

fn join_block(body: &str, block: Option<&str>) -> String {
    match block {
        Some(block) if body.is_empty() => block.to_string(),
        Some(block) => format!("{body}\n\n{block}"),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn extracts_inline_tags_in_order_without_duplicates() {
        assert_eq!(
            extract_hashtags("#eco life #green and #eco again"),
            strings(&["eco", "green"])
        );
    }

    #[test]
    fn url_fragments_are_not_tags() {
        assert_eq!(
            extract_hashtags("Docs at https://acme.com/docs#install (#setup), #a,#b"),
            strings(&["setup", "a", "b"])
        );
    }

    #[test]
    fn collect_keeps_url_fragment_and_cap_slots() {
        let r = HashtagReconciler::new(5, ReflowPolicy::Collect { threshold: 3 });
        let out = r.reconcile(
            "Setup guide at https://acme.com/docs#install today #a #b #c #d #e",
            &[],
        );
        assert_eq!(out.tags, strings(&["a", "b", "c", "d", "e"]));
        assert_eq!(out.dropped, 0);
        assert_eq!(
            out.text(),
            "Setup guide at https://acme.com/docs#install today\n\n#a #b #c #d #e"
        );
    }

    #[test]
    fn extracts_unicode_word_tags() {
        assert_eq!(extract_hashtags("新品 #品牌 上市"), strings(&["品牌"]));
    }

    #[test]
    fn merges_inline_first_then_explicit() {
        let r = HashtagReconciler::new(10, ReflowPolicy::Preserve);
        let out = r.reconcile("Hello #a world #b", &strings(&["#c", "a", " d "]));
        assert_eq!(out.tags, strings(&["a", "b", "c", "d"]));
        assert_eq!(out.text(), "Hello #a world #b");
        assert!(!out.reflowed);
    }

    #[test]
    fn dedupe_is_case_sensitive() {
        let r = HashtagReconciler::new(10, ReflowPolicy::Preserve);
        let out = r.reconcile("#Eco #eco", &[]);
        assert_eq!(out.tags, strings(&["Eco", "eco"]));
    }

    #[test]
    fn cap_drops_from_tail() {
        let r = HashtagReconciler::new(2, ReflowPolicy::Preserve);
        let out = r.reconcile("#a #b #c", &strings(&["d"]));
        assert_eq!(out.tags, strings(&["a", "b"]));
        assert_eq!(out.dropped, 2);
    }

    #[test]
    fn collect_strips_inline_and_appends_block() {
        let r = HashtagReconciler::new(30, ReflowPolicy::Collect { threshold: 3 });
        let out = r.reconcile("Love #a this #b new #c drop #d", &[]);
        assert!(out.reflowed);
        assert_eq!(out.text(), "Love this new drop\n\n#a #b #c #d");
    }

    #[test]
    fn collect_below_threshold_preserves_text() {
        let r = HashtagReconciler::new(30, ReflowPolicy::Collect { threshold: 3 });
        let out = r.reconcile("Love #a this #b", &strings(&["c"]));
        assert!(!out.reflowed);
        assert_eq!(out.text(), "Love #a this #b");
        assert_eq!(out.tags, strings(&["a", "b", "c"]));
    }

    #[test]
    fn collect_of_only_tags_yields_block_alone() {
        let r = HashtagReconciler::new(30, ReflowPolicy::Collect { threshold: 1 });
        let out = r.reconcile("#a #b", &[]);
        assert_eq!(out.text(), "#a #b");
    }

    #[test]
    fn collect_is_stable_on_its_own_output() {
        let r = HashtagReconciler::new(30, ReflowPolicy::Collect { threshold: 3 });
        let once = r.reconcile("Line one #a #b\nLine  two #c #d #e", &[]).text();
        let twice = r.reconcile(&once, &[]).text();
        assert_eq!(once, twice);
    }

    #[test]
    fn all_tags_visible_appends_missing_explicit_tags() {
        let r = HashtagReconciler::new(30, ReflowPolicy::Preserve);
        let out = r
            .reconcile("Summer is here #sun", &strings(&["beach", "sun"]))
            .with_all_tags_visible();
        assert_eq!(out.text(), "Summer is here #sun\n\n#beach");
    }

    #[test]
    fn empty_text_and_no_tags() {
        let r = HashtagReconciler::new(5, ReflowPolicy::Collect { threshold: 0 });
        let out = r.reconcile("", &[]);
        assert!(out.tags.is_empty());
        assert_eq!(out.text(), "");
    }

    #[test]
    fn mentions_merge_inline_and_explicit() {
        let m = merge_mentions(
            "Thanks @jane.doe and @acme_co!",
            &strings(&["@acme_co", "bob"]),
            false,
        );
        assert_eq!(m, strings(&["jane.doe", "acme_co", "bob"]));
    }

    #[test]
    fn dashed_mentions_only_when_allowed() {
        assert_eq!(merge_mentions("hi @mary-ann", &[], false), strings(&["mary"]));
        assert_eq!(merge_mentions("hi @mary-ann", &[], true), strings(&["mary-ann"]));
    }
}

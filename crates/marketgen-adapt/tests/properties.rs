use marketgen_adapt::{truncate, HashtagReconciler, ReflowPolicy, Truncator, DEFAULT_MARKER};
use proptest::prelude::*;

fn chars(s: &str) -> usize {
    s.chars().count()
}

proptest! {
    #[test]
    fn truncate_never_exceeds_limit_plus_marker(text in "\\PC{0,400}", max in 1usize..300) {
        let out = truncate(&text, max);
        prop_assert!(chars(&out) <= max + chars(DEFAULT_MARKER));
    }

    #[test]
    fn short_text_is_returned_unchanged(text in "[a-z ]{0,50}") {
        let out = truncate(&text, 50);
        prop_assert_eq!(out.as_ref(), text.as_str());
    }

    #[test]
    fn fit_stays_within_limit(text in "\\PC{0,400}", limit in 0usize..300) {
        let truncator = Truncator::new("...\n\n(continued)");
        prop_assert!(chars(&truncator.fit(&text, limit)) <= limit);
    }

    #[test]
    fn cut_lands_on_a_word_boundary(words in prop::collection::vec("[a-z]{1,5}", 2..60), max in 20usize..120) {
        let text = words.join(" ");
        let out = truncate(&text, max);
        if let Some(kept) = out.strip_suffix(DEFAULT_MARKER) {
            prop_assert!(text.starts_with(kept));
            let next = text[kept.len()..].chars().next();
            prop_assert!(next.is_none_or(char::is_whitespace));
        }
    }

    #[test]
    fn reconcile_respects_cap_without_duplicates(
        inline in prop::collection::vec("[a-c]{1,2}", 0..20),
        explicit in prop::collection::vec("#?[a-c]{1,2}", 0..20),
        cap in 0usize..12,
        threshold in prop::option::of(0usize..6),
    ) {
        let reflow = threshold.map_or(ReflowPolicy::Preserve, |threshold| ReflowPolicy::Collect { threshold });
        let text = inline.iter().map(|t| format!("#{t}")).collect::<Vec<_>>().join(" word ");
        let reconciled = HashtagReconciler::new(cap, reflow).reconcile(&text, &explicit);

        prop_assert!(reconciled.tags.len() <= cap);
        let mut seen = reconciled.tags.clone();
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), reconciled.tags.len());
    }
}

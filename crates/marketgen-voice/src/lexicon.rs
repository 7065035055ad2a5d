//! Marker word lists used by the style evaluators.
//!
//! Entries are lowercase; multi-word entries match consecutive words.

pub(crate) const FORMAL_MARKERS: &[&str] = &[
    "furthermore",
    "therefore",
    "consequently",
    "nevertheless",
    "regarding",
    "accordingly",
    "hereby",
    "thus",
    "hence",
    "wherein",
];

pub(crate) const INFORMAL_MARKERS: &[&str] = &[
    "anyway",
    "well",
    "you know",
    "kind of",
    "sort of",
    "like",
    "stuff",
    "thing",
    "okay",
    "ok",
    "guys",
    "pretty",
    "really",
    "gonna",
    "wanna",
];

/// Contraction suffixes, matched as substrings; both apostrophe forms.
pub(crate) const CONTRACTIONS: &[&str] = &[
    "n't", "'ll", "'re", "'ve", "'m", "'d", "n’t", "’ll", "’re", "’ve", "’m", "’d",
];

pub(crate) const PROFESSIONAL_MARKERS: &[&str] = &[
    "analysis",
    "research",
    "data",
    "methodology",
    "results",
    "implement",
    "strategy",
    "objective",
    "criteria",
    "evaluation",
];

pub(crate) const HUMOR_MARKERS: &[&str] = &[
    "laugh",
    "laughing",
    "funny",
    "joke",
    "jokes",
    "humor",
    "witty",
    "haha",
    "lol",
    "smile",
    "amusing",
    "hilarious",
    "ironic",
    "sarcastic",
    "playful",
    "teasing",
];

pub(crate) const EMOTION_WORDS: &[&str] = &[
    "love",
    "hate",
    "excited",
    "thrilled",
    "amazing",
    "terrible",
    "wonderful",
    "awful",
    "delighted",
    "disappointed",
    "happy",
    "sad",
    "angry",
    "joyful",
    "proud",
    "ashamed",
    "grateful",
    "hurt",
    "inspired",
    "devastated",
];

pub(crate) const FILLER_WORDS: &[&str] = &[
    "basically",
    "actually",
    "literally",
    "virtually",
    "definitely",
    "certainly",
    "probably",
    "essentially",
    "totally",
    "completely",
    "absolutely",
    "really",
    "very",
    "quite",
    "somewhat",
    "rather",
];

pub(crate) const INDIRECT_MARKERS: &[&str] = &[
    "perhaps",
    "maybe",
    "might",
    "could",
    "possibly",
    "potentially",
    "seemingly",
    "appears to",
    "it seems",
    "somewhat",
    "rather",
    "in a sense",
    "from a certain perspective",
    "one might say",
];

pub(crate) const DIRECT_MARKERS: &[&str] = &[
    "definitely",
    "absolutely",
    "certainly",
    "clearly",
    "obviously",
    "without doubt",
    "must",
    "always",
    "never",
    "undoubtedly",
];

/// Slang counted as casual tone alongside [`INFORMAL_MARKERS`].
pub(crate) const CASUAL_MARKERS: &[&str] = &["awesome", "cool", "yeah", "wow", "super", "amazing"];

pub(crate) const TECHNICAL_MARKERS: &[&str] = &[
    "algorithm",
    "interface",
    "system",
    "process",
    "module",
    "functionality",
    "api",
    "platform",
    "integration",
    "architecture",
    "configuration",
    "performance",
];

pub(crate) const STOPWORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "am", "an", "and", "any", "are", "as", "at", "be",
    "because", "been", "before", "being", "but", "by", "can", "could", "did", "do", "does",
    "doing", "for", "from", "had", "has", "have", "having", "he", "her", "here", "hers", "him",
    "his", "how", "i", "if", "in", "into", "is", "it", "its", "just", "me", "more", "most", "my",
    "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other", "our", "ours",
    "out", "over", "own", "same", "she", "should", "so", "some", "such", "than", "that", "the",
    "their", "theirs", "them", "then", "there", "these", "they", "this", "those", "through",
    "to", "too", "under", "until", "up", "us", "was", "we", "were", "what", "when", "where",
    "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours",
];

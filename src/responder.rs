//! # Bilingual canned-response lookup
//!
//! Maps user text to a fixed reply using two ordered trigger tables, Arabic
//! first, then English. Matching is substring based and first-match-wins in
//! declaration order; a trigger embedded inside an unrelated word (the "hi"
//! in "history") still fires. That quirk is observable behavior the web UI
//! and the Messenger channel both rely on, so it stays.
//!
//! The tables are process-wide constants. `respond` is pure and total: any
//! input, including garbage, yields a non-empty reply. Empty input never
//! reaches this module; the HTTP handlers reject it first.

use serde::Serialize;

/// Arabic trigger table, scanned before the English one.
///
/// Case folding is not meaningful for Arabic script, so triggers are compared
/// against the trimmed input as-is.
pub const ARABIC_RESPONSES: &[(&str, &str)] = &[
    ("مرحبا", "مرحباً بك! كيف يمكنني مساعدتك اليوم؟"),
    (
        "السلام عليكم",
        "وعليكم السلام ورحمة الله وبركاته! أهلاً وسهلاً بك",
    ),
    ("أهلا", "أهلاً وسهلاً! كيف حالك؟"),
    ("كيف حالك", "الحمد لله بخير! وأنت كيف حالك؟"),
    ("ما اسمك", "أنا مساعد الدردشة الذكي، مصمم خصيصاً لفيسبوك ماسنجر"),
    ("مساعدة", "أنا هنا لمساعدتك! يمكنك سؤالي عن أي شيء أو الدردشة معي"),
    ("شكرا", "عفواً! هل تحتاج أي مساعدة أخرى؟"),
    ("شكراً", "عفواً! هل تحتاج أي مساعدة أخرى؟"),
    ("وداعا", "وداعاً! أتمنى لك يوماً سعيداً"),
    ("مع السلامة", "مع السلامة! كان من دواعي سروري التحدث معك"),
    (
        "ماذا تستطيع أن تفعل",
        "يمكنني الدردشة معك، الإجابة على الأسئلة، ومساعدتك في مهام مختلفة. كما أنني متصل مع فيسبوك ماسنجر",
    ),
    (
        "كيف أربطك بفيسبوك",
        "يمكنك ربطي بصفحة فيسبوك من خلال إعدادات مطوري فيسبوك. انقر على \"دليل الإعداد\" في الشريط الجانبي للمزيد من التفاصيل",
    ),
    (
        "فيسبوك",
        "أنا جاهز للربط مع فيسبوك ماسنجر! تحتاج إلى إعداد webhook في لوحة تحكم مطوري فيسبوك",
    ),
];

/// English trigger table, compared against the lowercased input only.
pub const ENGLISH_RESPONSES: &[(&str, &str)] = &[
    ("hello", "Hello! How can I help you today?"),
    ("hi", "Hi there! What can I do for you?"),
    ("help", "I'm here to help! You can ask me questions or just chat."),
    ("bye", "Goodbye! Have a great day!"),
    (
        "thanks",
        "You're welcome! Is there anything else I can help you with?",
    ),
    ("how are you", "I'm doing great! Thanks for asking. How are you?"),
    (
        "what can you do",
        "I can chat with you, answer questions, and help with various tasks. I'm also ready for Facebook Messenger integration!",
    ),
    (
        "facebook",
        "I'm ready to connect with Facebook Messenger! You need to set up a webhook in the Facebook Developer dashboard",
    ),
    (
        "connect facebook",
        "To connect me to Facebook, click on \"Setup Guide\" in the sidebar for detailed instructions",
    ),
];

pub const ARABIC_FALLBACK: &str =
    "عذراً، لم أفهم ما تقصد. هل يمكنك إعادة صياغة سؤالك؟ اكتب 'مساعدة' إذا كنت تحتاج للمساعدة";

pub const ENGLISH_FALLBACK: &str =
    "I'm not sure I understand. Could you please rephrase that? Type 'help' if you need assistance.";

/// Reply produced for one incoming message, stamped at construction
#[derive(Debug, Serialize)]
pub struct BotReply {
    pub text: String,
    pub timestamp_millis: i64,
}

impl BotReply {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp_millis: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Picks the canned reply for `text`.
///
/// Scan order: Arabic table against the trimmed input, then English table
/// against its lowercase form. If nothing matches, the fallback is chosen by
/// script: any code point above 127 selects the Arabic fallback.
pub fn respond(text: &str) -> &'static str {
    let trimmed = text.trim();
    let lower = trimmed.to_lowercase();

    for &(trigger, reply) in ARABIC_RESPONSES {
        if trimmed.contains(trigger) {
            return reply;
        }
    }

    for &(trigger, reply) in ENGLISH_RESPONSES {
        if lower.contains(trigger) {
            return reply;
        }
    }

    if trimmed.is_ascii() {
        ENGLISH_FALLBACK
    } else {
        ARABIC_FALLBACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_greeting() {
        assert_eq!(respond("hello"), "Hello! How can I help you today?");
    }

    #[test]
    fn test_arabic_greeting() {
        assert_eq!(respond("مرحبا"), "مرحباً بك! كيف يمكنني مساعدتك اليوم؟");
    }

    #[test]
    fn test_capability_question() {
        assert_eq!(
            respond("what can you do"),
            "I can chat with you, answer questions, and help with various tasks. I'm also ready for Facebook Messenger integration!",
        );
    }

    #[test]
    fn test_latin_matching_is_case_insensitive() {
        assert_eq!(respond("HeLLo"), "Hello! How can I help you today?");
    }

    #[test]
    fn test_input_is_trimmed() {
        assert_eq!(respond("   hello   \n"), "Hello! How can I help you today?");
    }

    #[test]
    fn test_substring_trigger_inside_unrelated_word() {
        // "history" contains "hi"; substring matching fires on it
        assert_eq!(respond("history"), "Hi there! What can I do for you?");
    }

    #[test]
    fn test_declaration_order_wins_over_position_in_input() {
        // "hi" appears first in the input, but "hello" is declared first
        assert_eq!(respond("hi hello"), "Hello! How can I help you today?");
    }

    #[test]
    fn test_arabic_table_scanned_before_english() {
        assert_eq!(
            respond("hello مرحبا"),
            "مرحباً بك! كيف يمكنني مساعدتك اليوم؟"
        );
    }

    #[test]
    fn test_ascii_fallback() {
        assert_eq!(respond("xyzzy quux"), ENGLISH_FALLBACK);
    }

    #[test]
    fn test_non_ascii_fallback() {
        assert_eq!(respond("كلام غير معروف"), ARABIC_FALLBACK);
        // any code point above 127 selects the Arabic fallback, Arabic or not
        assert_eq!(respond("père noël"), ARABIC_FALLBACK);
    }

    #[test]
    fn test_deterministic() {
        for _ in 0..3 {
            assert_eq!(respond("thanks"), respond("thanks"));
        }
    }

    #[test]
    fn test_never_empty() {
        for input in ["", " ", "?", "١٢٣", "\u{200f}"] {
            assert!(!respond(input).is_empty());
        }
    }
}

//! Classifier - ローカルのルールベース分類（"AI suggest"）
//!
//! 入力テキストから category / priority / 補完済みテキストを決める純粋関数です。
//! 外部 API は呼ばず、固定のキーワード表と時刻テンプレートだけを使います。
//!
//! # 決定性
//! - 同じ `seed` と `hour` に対して常に同じ結果を返す
//! - 時刻は引数で受け取る（`TodoService::suggest` が `Clock` から渡す）

pub mod rules;

use serde::Serialize;

use crate::domain::{Category, Priority};

use self::rules::{
    KEYWORD_TABLE, MIN_DETAILED_CHARS, SHORT_SEED_SUFFIX, URGENCY_MARKERS, template_for_hour,
};

/// 分類結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub text: String,
    pub category: Category,
    pub priority: Priority,
}

/// `seed` を分類し、補完済みテキストとともに返す
///
/// - category: 正規化（trim + 小文字化）した seed に対してキーワード表を先頭から評価
/// - text: 空ならテンプレート、短ければ suffix 付き、それ以外は先頭 1 文字を大文字化
/// - priority: 補完後のテキストに緊急マーカーが含まれれば `Urgent`
pub fn classify(seed: &str, hour: u32) -> Suggestion {
    let trimmed = seed.trim();
    let category = categorize(&trimmed.to_lowercase());
    let text = expand(trimmed, hour);
    let priority = detect_priority(&text);

    Suggestion {
        text,
        category,
        priority,
    }
}

/// Category only. Never depends on the hour.
pub fn auto_categorize(text: &str) -> Category {
    categorize(&text.trim().to_lowercase())
}

pub fn detect_priority(text: &str) -> Priority {
    let lowered = text.to_lowercase();
    if URGENCY_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        Priority::Urgent
    } else {
        Priority::Normal
    }
}

fn categorize(normalized: &str) -> Category {
    KEYWORD_TABLE
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| normalized.contains(k)))
        .map(|rule| rule.category)
        .unwrap_or_default()
}

fn expand(trimmed: &str, hour: u32) -> String {
    if trimmed.is_empty() {
        return template_for_hour(hour).to_string();
    }
    if trimmed.chars().count() < MIN_DETAILED_CHARS {
        return format!("{trimmed}{SHORT_SEED_SUFFIX}");
    }
    capitalize_first(trimmed)
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn empty_seed_in_the_morning_plans_the_day() {
        let s = classify("", 9);
        assert_eq!(
            s,
            Suggestion {
                text: "Plan today: prioritize 3 tasks".to_string(),
                category: Category::Other,
                priority: Priority::Normal,
            }
        );
    }

    #[rstest]
    #[case::afternoon(14, "Finish current sprint task")]
    #[case::evening(20, "Prepare tomorrow's morning checklist")]
    fn empty_seed_uses_time_of_day_template(#[case] hour: u32, #[case] expected: &str) {
        let s = classify("   ", hour);
        assert_eq!(s.text, expected);
        assert_eq!(s.category, Category::Other);
        assert_eq!(s.priority, Priority::Normal);
    }

    #[test]
    fn invoice_is_urgent_category_and_now_is_urgent_priority() {
        let s = classify("pay the invoice now", 10);
        assert_eq!(s.text, "Pay the invoice now");
        assert_eq!(s.category, Category::Urgent);
        assert_eq!(s.priority, Priority::Urgent);
    }

    #[test]
    fn short_seed_asks_for_details() {
        let s = classify("hi", 10);
        assert_eq!(s.text, "hi — add details");
        assert_eq!(s.category, Category::Other);
        assert_eq!(s.priority, Priority::Normal);
    }

    #[rstest]
    #[case::email("Email Bob the draft", Category::Work)]
    #[case::meeting("prepare standup notes", Category::Work)]
    #[case::groceries("buy milk and eggs", Category::Personal)]
    #[case::bill("electricity bill", Category::Urgent)]
    #[case::exercise("go for a run", Category::Personal)]
    #[case::deploy("deploy the release", Category::Work)]
    #[case::nothing("read a novel", Category::Other)]
    fn categorizes_by_keyword(#[case] seed: &str, #[case] expected: Category) {
        assert_eq!(classify(seed, 10).category, expected);
    }

    #[test]
    fn first_matching_rule_wins() {
        // "send" (Work) is declared before "bill" (Urgent)
        assert_eq!(classify("send the bill", 10).category, Category::Work);
        // "shop" (Personal) is declared before "pay" (Urgent)
        assert_eq!(classify("pay at the shop", 10).category, Category::Personal);
    }

    #[test]
    fn keeps_caller_casing_and_capitalizes_first_char_only() {
        let s = classify("  review PR from Alice ", 10);
        assert_eq!(s.text, "Review PR from Alice");

        let s = classify("éclair shopping", 10);
        assert_eq!(s.text, "Éclair shopping");
    }

    #[rstest]
    #[case::asap("ASAP", Priority::Urgent)]
    #[case::immediately("reply immediately", Priority::Urgent)]
    #[case::due("report due friday", Priority::Urgent)]
    #[case::calm("water the plants", Priority::Normal)]
    fn detects_urgency_markers(#[case] seed: &str, #[case] expected: Priority) {
        assert_eq!(classify(seed, 10).priority, expected);
    }

    #[test]
    fn is_deterministic_for_fixed_input_and_hour() {
        let first = classify("fix login bug asap", 16);
        for _ in 0..10 {
            assert_eq!(classify("fix login bug asap", 16), first);
        }
        assert_eq!(first.category, Category::Work);
        assert_eq!(first.priority, Priority::Urgent);
    }

    #[test]
    fn auto_categorize_ignores_hour_and_expansion() {
        assert_eq!(auto_categorize("  GYM  "), Category::Personal);
        assert_eq!(auto_categorize(""), Category::Other);
    }
}

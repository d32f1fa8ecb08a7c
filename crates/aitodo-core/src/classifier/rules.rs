//! 分類ルールのテーブル（キーワード、テンプレート、緊急マーカー）

use crate::domain::Category;

/// KeywordRule は「どれか 1 つでも部分一致すればこのカテゴリ」というルール
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub keywords: &'static [&'static str],
    pub category: Category,
}

/// 上から順に評価し、最初に一致したルールが勝つ。順序を入れ替えないこと。
pub const KEYWORD_TABLE: &[KeywordRule] = &[
    KeywordRule {
        keywords: &["email", "send", "mail", "inbox"],
        category: Category::Work,
    },
    KeywordRule {
        keywords: &["meeting", "call", "sync", "standup", "demo"],
        category: Category::Work,
    },
    KeywordRule {
        keywords: &["buy", "grocer", "shop", "milk", "eggs", "shopping"],
        category: Category::Personal,
    },
    KeywordRule {
        keywords: &["pay", "bill", "invoice", "due"],
        category: Category::Urgent,
    },
    KeywordRule {
        keywords: &["fitness", "gym", "run", "exercise", "walk"],
        category: Category::Personal,
    },
    KeywordRule {
        keywords: &["fix", "bug", "error", "deploy", "release"],
        category: Category::Work,
    },
];

pub const URGENCY_MARKERS: &[&str] = &["urgent", "asap", "immediately", "now", "due"];

/// 入力がこれより短い（文字数）場合は詳細を促す suffix を付ける
pub const MIN_DETAILED_CHARS: usize = 6;

pub const SHORT_SEED_SUFFIX: &str = " — add details";

pub const MORNING_TEMPLATE: &str = "Plan today: prioritize 3 tasks";
pub const AFTERNOON_TEMPLATE: &str = "Finish current sprint task";
pub const EVENING_TEMPLATE: &str = "Prepare tomorrow's morning checklist";

/// 入力が空のときに使うテンプレートを時刻（0-23）から選ぶ
pub fn template_for_hour(hour: u32) -> &'static str {
    match hour {
        0..12 => MORNING_TEMPLATE,
        12..18 => AFTERNOON_TEMPLATE,
        _ => EVENING_TEMPLATE,
    }
}

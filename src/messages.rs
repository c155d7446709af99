//! User-facing strings. Japanese is the default locale; English is provided for
//! terminals and logs where that reads better.

use clap::ValueEnum;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ja" => Ok(Locale::Ja),
            "en" => Ok(Locale::En),
            other => Err(format!("unsupported locale '{}'", other)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Messages {
    pub locale: Locale,

    // Learner screen
    pub app_title: &'static str,
    pub select_heading: &'static str,
    pub select_prompt: &'static str,
    pub submit_idle: &'static str,
    pub submit_loading: &'static str,
    pub submit_validation: &'static str,
    pub submit_success: &'static str,
    pub submit_cheat_warning: &'static str,
    pub submit_failed: &'static str,
    pub submit_busy: &'static str,

    // Feedback panel
    pub feedback_heading: &'static str,
    pub advice_heading: &'static str,
    pub caution_heading: &'static str,
    pub cheat_badge: &'static str,
    pub stderr_heading: &'static str,
    pub stdout_heading: &'static str,
    pub outcome_label: &'static str,
    pub outcome_pass: &'static str,
    pub outcome_fail: &'static str,
    pub cost_label: &'static str,

    // Admin screen
    pub admin_title: &'static str,
    pub admin_add_heading: &'static str,
    pub admin_edit_heading: &'static str,
    pub admin_add_button: &'static str,
    pub admin_update_button: &'static str,
    pub admin_list_heading: &'static str,
    pub admin_empty: &'static str,
    pub admin_required: &'static str,
    pub admin_added: &'static str,
    pub admin_updated: &'static str,
    pub admin_deleted: &'static str,
    pub admin_unknown_id: &'static str,
    pub admin_test_cases: &'static str,
    pub admin_field_title: &'static str,
    pub admin_field_description: &'static str,
    pub admin_field_difficulty: &'static str,
    pub admin_field_category: &'static str,
    pub admin_field_common_mistakes: &'static str,
    pub admin_cancelled: &'static str,

    // Legacy screen
    pub legacy_title: &'static str,
    pub legacy_feedback_heading: &'static str,
}

impl Messages {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Ja => Self::ja(),
            Locale::En => Self::en(),
        }
    }

    fn ja() -> Self {
        Self {
            locale: Locale::Ja,
            app_title: "Python Code Advisor",
            select_heading: "課題を選択",
            select_prompt: "課題を選択してください",
            submit_idle: "コードを提出",
            submit_loading: "処理中...",
            submit_validation: "課題を選択し、コードを入力してください",
            submit_success: "フィードバックを生成しました！",
            submit_cheat_warning: "チート行為が検出されました",
            submit_failed: "エラーが発生しました。もう一度お試しください。",
            submit_busy: "処理中です。しばらくお待ちください",
            feedback_heading: "AIフィードバック",
            advice_heading: "💡 改善アドバイス",
            caution_heading: "⚠️ 注意",
            cheat_badge: "チート検出",
            stderr_heading: "⚠️ エラー",
            stdout_heading: "📤 出力",
            outcome_label: "実行結果",
            outcome_pass: "成功",
            outcome_fail: "失敗",
            cost_label: "コスト",
            admin_title: "管理者ダッシュボード",
            admin_add_heading: "新しい課題を追加",
            admin_edit_heading: "課題を編集",
            admin_add_button: "追加",
            admin_update_button: "更新",
            admin_list_heading: "課題一覧",
            admin_empty: "まだ課題が登録されていません",
            admin_required: "タイトルと説明を入力してください",
            admin_added: "新しい課題を追加しました",
            admin_updated: "課題を更新しました",
            admin_deleted: "課題を削除しました",
            admin_unknown_id: "指定された課題が見つかりません",
            admin_test_cases: "テストケース",
            admin_field_title: "タイトル *",
            admin_field_description: "説明 *",
            admin_field_difficulty: "難易度 (easy/medium/hard)",
            admin_field_category: "カテゴリ",
            admin_field_common_mistakes: "よくあるミス",
            admin_cancelled: "キャンセルしました",
            legacy_title: "Challenge Advisor",
            legacy_feedback_heading: "Feedback",
        }
    }

    fn en() -> Self {
        Self {
            locale: Locale::En,
            app_title: "Python Code Advisor",
            select_heading: "Choose a challenge",
            select_prompt: "Please choose a challenge",
            submit_idle: "Submit code",
            submit_loading: "Processing...",
            submit_validation: "Choose a challenge and enter your code",
            submit_success: "Feedback generated!",
            submit_cheat_warning: "Cheating was detected",
            submit_failed: "Something went wrong. Please try again.",
            submit_busy: "A submission is already in progress",
            feedback_heading: "AI feedback",
            advice_heading: "💡 Suggestions",
            caution_heading: "⚠️ Caution",
            cheat_badge: "cheat detected",
            stderr_heading: "⚠️ Error",
            stdout_heading: "📤 Output",
            outcome_label: "Result",
            outcome_pass: "passed",
            outcome_fail: "failed",
            cost_label: "Cost",
            admin_title: "Admin dashboard",
            admin_add_heading: "Add a new challenge",
            admin_edit_heading: "Edit challenge",
            admin_add_button: "Add",
            admin_update_button: "Update",
            admin_list_heading: "Challenges",
            admin_empty: "No challenges registered yet",
            admin_required: "Title and description are required",
            admin_added: "Challenge added",
            admin_updated: "Challenge updated",
            admin_deleted: "Challenge deleted",
            admin_unknown_id: "No challenge with that id",
            admin_test_cases: "Test cases",
            admin_field_title: "Title *",
            admin_field_description: "Description *",
            admin_field_difficulty: "Difficulty (easy/medium/hard)",
            admin_field_category: "Category",
            admin_field_common_mistakes: "Common mistakes",
            admin_cancelled: "Cancelled",
            legacy_title: "Challenge Advisor",
            legacy_feedback_heading: "Feedback",
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

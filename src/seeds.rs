//! Built-in sample challenges. There is no challenge store; these lists are the
//! whole catalogue unless the config file appends more.

use crate::domain::{Challenge, Difficulty};

/// Challenges offered on the learner screen.
pub fn learner_challenges() -> Vec<Challenge> {
  vec![
    Challenge {
      id: "challenge-1".into(),
      title: "フィボナッチ数列".into(),
      description: "与えられた数nまでのフィボナッチ数列を生成する関数を作成してください。".into(),
      difficulty: Difficulty::Easy,
      category: "アルゴリズム".into(),
      test_cases: None,
      common_mistakes: None,
    },
    Challenge {
      id: "challenge-2".into(),
      title: "文字列の逆順".into(),
      description: "与えられた文字列を逆順にする関数を作成してください。".into(),
      difficulty: Difficulty::Easy,
      category: "文字列操作".into(),
      test_cases: None,
      common_mistakes: None,
    },
    Challenge {
      id: "challenge-3".into(),
      title: "素数判定".into(),
      description: "与えられた数が素数かどうかを判定する関数を作成してください。".into(),
      difficulty: Difficulty::Medium,
      category: "数学".into(),
      test_cases: None,
      common_mistakes: None,
    },
  ]
}

/// Starting contents of the admin editor.
pub fn admin_challenges() -> Vec<Challenge> {
  vec![Challenge {
    id: "challenge-1".into(),
    title: "フィボナッチ数列".into(),
    description: "与えられた数nまでのフィボナッチ数列を生成する関数を作成してください。".into(),
    difficulty: Difficulty::Easy,
    category: "アルゴリズム".into(),
    test_cases: Some("fibonacci(5) → [0,1,1,2,3]".into()),
    common_mistakes: Some("インデックスの範囲指定ミス、再帰の終了条件の誤り".into()),
  }]
}

//! Admin screen: in-memory challenge editor.
//!
//! Add, edit and delete operate on the screen's own list only. Nothing is sent
//! anywhere and nothing survives the session.

use tracing::{debug, info, instrument};

use crate::domain::{Challenge, Difficulty};
use crate::messages::Messages;
use crate::toast::Toast;

/// Editable fields of the admin form. Optional text fields are kept as plain
/// strings here and stored as given, empty included.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChallengeForm {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub test_cases: String,
    pub common_mistakes: String,
}

impl ChallengeForm {
    fn from_challenge(c: &Challenge) -> Self {
        Self {
            title: c.title.clone(),
            description: c.description.clone(),
            difficulty: c.difficulty,
            category: c.category.clone(),
            test_cases: c.test_cases.clone().unwrap_or_default(),
            common_mistakes: c.common_mistakes.clone().unwrap_or_default(),
        }
    }

    fn into_challenge(self, id: String) -> Challenge {
        Challenge {
            id,
            title: self.title,
            description: self.description,
            difficulty: self.difficulty,
            category: self.category,
            test_cases: Some(self.test_cases),
            common_mistakes: Some(self.common_mistakes),
        }
    }
}

/// `challenge-<millis>`, moved forward a millisecond at a time until it clashes
/// with no existing id.
pub fn next_challenge_id(existing: &[Challenge], now_millis: i64) -> String {
    let mut stamp = now_millis;
    loop {
        let id = format!("challenge-{}", stamp);
        if !existing.iter().any(|c| c.id == id) {
            return id;
        }
        stamp += 1;
    }
}

pub struct AdminScreen {
    pub challenges: Vec<Challenge>,
    pub form: ChallengeForm,
    /// Id of the record being edited; `None` means the form adds.
    pub editing: Option<String>,
    pub toasts: Vec<Toast>,
    pub msgs: Messages,
}

impl AdminScreen {
    pub fn new(challenges: Vec<Challenge>, msgs: Messages) -> Self {
        Self { challenges, form: ChallengeForm::default(), editing: None, toasts: Vec::new(), msgs }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn form_title(&self) -> &'static str {
        if self.is_editing() { self.msgs.admin_edit_heading } else { self.msgs.admin_add_heading }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() { self.msgs.admin_update_button } else { self.msgs.admin_add_button }
    }

    /// Commit the form using the wall clock for new ids.
    pub fn submit_form(&mut self) -> Option<String> {
        self.submit_form_at(chrono::Utc::now().timestamp_millis())
    }

    /// Commit the form. Returns the id written, or `None` when validation failed
    /// (list and form untouched).
    #[instrument(level = "debug", skip(self), fields(editing = ?self.editing))]
    pub fn submit_form_at(&mut self, now_millis: i64) -> Option<String> {
        if self.form.title.trim().is_empty() || self.form.description.trim().is_empty() {
            self.toasts.push(Toast::error(self.msgs.admin_required));
            return None;
        }

        let form = std::mem::take(&mut self.form);
        let id = match self.editing.take() {
            Some(id) => {
                let updated = form.into_challenge(id.clone());
                for c in self.challenges.iter_mut().filter(|c| c.id == id) {
                    *c = updated.clone();
                }
                info!(target: "admin", %id, "Challenge updated");
                self.toasts.push(Toast::success(self.msgs.admin_updated));
                id
            }
            None => {
                let id = next_challenge_id(&self.challenges, now_millis);
                self.challenges.push(form.into_challenge(id.clone()));
                info!(target: "admin", %id, total = self.challenges.len(), "Challenge added");
                self.toasts.push(Toast::success(self.msgs.admin_added));
                id
            }
        };
        Some(id)
    }

    /// Load a record into the form and switch to edit mode.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        match self.challenges.iter().find(|c| c.id == id) {
            Some(c) => {
                self.form = ChallengeForm::from_challenge(c);
                self.editing = Some(id.to_string());
                debug!(target: "admin", %id, "Editing challenge");
                true
            }
            None => {
                self.toasts.push(Toast::error(self.msgs.admin_unknown_id));
                false
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.form = ChallengeForm::default();
    }

    /// Remove the record with `id`; the rest keep their order.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.challenges.len();
        self.challenges.retain(|c| c.id != id);
        let removed = self.challenges.len() != before;
        if removed {
            if self.editing.as_deref() == Some(id) {
                self.cancel_edit();
            }
            info!(target: "admin", %id, total = self.challenges.len(), "Challenge deleted");
            self.toasts.push(Toast::success(self.msgs.admin_deleted));
        } else {
            self.toasts.push(Toast::error(self.msgs.admin_unknown_id));
        }
        removed
    }

    pub fn render_list(&self) -> String {
        let mut out = vec![self.msgs.admin_list_heading.to_string(), "-".repeat(60)];
        if self.challenges.is_empty() {
            out.push(format!("  {}", self.msgs.admin_empty));
            return out.join("\n");
        }
        for c in &self.challenges {
            out.push(format!("{}  {}", c.id, c.title));
            out.push(format!("    {}", c.description));
            let mut badges = format!("    [{}]", c.difficulty.as_str());
            if !c.category.is_empty() {
                badges.push_str(&format!(" ({})", c.category));
            }
            out.push(badges);
            if let Some(tc) = c.test_cases.as_deref().filter(|s| !s.is_empty()) {
                out.push(format!("    {}: {}", self.msgs.admin_test_cases, tc));
            }
        }
        out.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::admin_challenges;
    use crate::toast::ToastLevel;

    fn screen() -> AdminScreen {
        AdminScreen::new(admin_challenges(), Messages::default())
    }

    fn fill(s: &mut AdminScreen, title: &str, description: &str) {
        s.form.title = title.into();
        s.form.description = description.into();
    }

    #[test]
    fn add_appends_one_entry_with_fresh_id() {
        let mut s = screen();
        let before: Vec<String> = s.challenges.iter().map(|c| c.id.clone()).collect();
        fill(&mut s, "T", "D");

        let id = s.submit_form_at(1_700_000_000_000).unwrap();
        assert_eq!(s.challenges.len(), before.len() + 1);
        assert!(!before.contains(&id));
        let added = s.challenges.last().unwrap();
        assert_eq!((added.title.as_str(), added.description.as_str()), ("T", "D"));
        assert_eq!(s.form, ChallengeForm::default());
        assert_eq!(s.toasts.last().unwrap(), &Toast::success(s.msgs.admin_added));
    }

    #[test]
    fn same_millisecond_adds_still_get_distinct_ids() {
        let mut s = screen();
        fill(&mut s, "A", "a");
        let first = s.submit_form_at(42).unwrap();
        fill(&mut s, "B", "b");
        let second = s.submit_form_at(42).unwrap();
        assert_eq!(first, "challenge-42");
        assert_eq!(second, "challenge-43");
    }

    #[test]
    fn missing_title_or_description_is_rejected() {
        let mut s = screen();
        fill(&mut s, "T", "  ");
        assert!(s.submit_form_at(1).is_none());
        assert_eq!(s.challenges.len(), 1);
        assert_eq!(s.form.title, "T");
        assert_eq!(s.toasts.last().unwrap().level, ToastLevel::Error);
    }

    #[test]
    fn edit_replaces_in_place() {
        let mut s = screen();
        fill(&mut s, "Second", "two");
        s.submit_form_at(10).unwrap();

        assert!(s.begin_edit("challenge-1"));
        assert_eq!(s.form_title(), s.msgs.admin_edit_heading);
        assert_eq!(s.submit_label(), s.msgs.admin_update_button);
        assert_eq!(s.form.test_cases, "fibonacci(5) → [0,1,1,2,3]");
        s.form.title = "Fib".into();
        s.form.difficulty = Difficulty::Hard;

        assert_eq!(s.submit_form_at(11).as_deref(), Some("challenge-1"));
        assert_eq!(s.challenges.len(), 2);
        assert_eq!(s.challenges[0].id, "challenge-1");
        assert_eq!(s.challenges[0].title, "Fib");
        assert_eq!(s.challenges[0].difficulty, Difficulty::Hard);
        assert_eq!(s.challenges[1].title, "Second");
        assert!(!s.is_editing());
    }

    #[test]
    fn cancel_leaves_list_untouched() {
        let mut s = screen();
        s.begin_edit("challenge-1");
        s.form.title = "changed".into();
        s.cancel_edit();
        assert!(!s.is_editing());
        assert_eq!(s.form, ChallengeForm::default());
        assert_eq!(s.challenges[0].title, "フィボナッチ数列");
    }

    #[test]
    fn delete_removes_exactly_one_and_keeps_order() {
        let mut s = screen();
        for (i, t) in ["a", "b", "c"].iter().enumerate() {
            fill(&mut s, t, t);
            s.submit_form_at(100 + i as i64);
        }
        assert!(s.delete("challenge-101"));
        let ids: Vec<&str> = s.challenges.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["challenge-1", "challenge-100", "challenge-102"]);

        assert!(!s.delete("challenge-101"));
        assert_eq!(s.challenges.len(), 3);
    }

    #[test]
    fn list_rendering() {
        let mut s = screen();
        let text = s.render_list();
        assert!(text.contains("[easy] (アルゴリズム)"));
        assert!(text.contains("テストケース: fibonacci(5)"));

        s.delete("challenge-1");
        assert!(s.render_list().contains(s.msgs.admin_empty));
    }
}

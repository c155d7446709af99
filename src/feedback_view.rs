//! Feedback display. Pure: builds a `FeedbackPanel` from the service response
//! and renders it as terminal text.

use crate::domain::Feedback;
use crate::messages::Messages;
use crate::util::indent;

#[derive(Clone, Debug, PartialEq)]
pub struct FeedbackPanel {
    pub title: String,
    pub cheat_badge: Option<String>,
    pub section_heading: String,
    pub text: String,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
    pub passed: bool,
    pub outcome_text: String,
    pub cost_text: String,
}

/// `$` followed by four decimals, or `$N/A` when the service sent no cost.
pub fn format_cost(cost: Option<f64>) -> String {
    match cost {
        Some(c) => format!("${}", fixed4(c)),
        None => "$N/A".to_string(),
    }
}

/// Four decimals with exact ties rounded away from zero (`{:.4}` picks the
/// even digit instead).
fn fixed4(c: f64) -> String {
    let scaled = c.abs() * 10_000.0;
    // Zero residual means the product is exact, so a .5 fraction is a real tie.
    let exact = c.abs().mul_add(10_000.0, -scaled) == 0.0;
    if !(exact && scaled.fract() == 0.5 && scaled < u64::MAX as f64) {
        return format!("{:.4}", c);
    }
    let n = scaled.floor() as u64 + 1;
    let sign = if c < 0.0 { "-" } else { "" };
    format!("{}{}.{:04}", sign, n / 10_000, n % 10_000)
}

impl FeedbackPanel {
    pub fn from_feedback(fb: &Feedback, msgs: &Messages) -> Self {
        let cheat = fb.is_cheat_detected();
        // Raw execution output is withheld once cheating is flagged.
        let visible = |s: &str| (!cheat && !s.is_empty()).then(|| s.to_string());
        let passed = fb.result.passed();

        Self {
            title: msgs.feedback_heading.to_string(),
            cheat_badge: cheat.then(|| msgs.cheat_badge.to_string()),
            section_heading: (if cheat { msgs.caution_heading } else { msgs.advice_heading }).to_string(),
            text: fb.feedback.clone(),
            stderr: visible(&fb.result.stderr),
            stdout: visible(&fb.result.stdout),
            passed,
            outcome_text: format!(
                "{}: {}",
                msgs.outcome_label,
                if passed { msgs.outcome_pass } else { msgs.outcome_fail }
            ),
            cost_text: format_cost(fb.cost),
        }
    }

    pub fn render(&self, msgs: &Messages) -> String {
        let rule = "=".repeat(60);
        let thin = "-".repeat(60);
        let mut out = Vec::new();

        out.push(rule.clone());
        match &self.cheat_badge {
            Some(badge) => out.push(format!("  {} [{}]", self.title, badge)),
            None => out.push(format!("  {}", self.title)),
        }
        out.push(rule.clone());
        out.push(self.section_heading.clone());
        out.push(indent(&self.text, "  "));

        if let Some(stderr) = &self.stderr {
            out.push(thin.clone());
            out.push(msgs.stderr_heading.to_string());
            out.push(indent(stderr, "  "));
        }
        if let Some(stdout) = &self.stdout {
            out.push(thin.clone());
            out.push(msgs.stdout_heading.to_string());
            out.push(indent(stdout, "  "));
        }

        out.push(thin);
        out.push(format!("{}    {}: {}", self.outcome_text, msgs.cost_label, self.cost_text));
        out.push(rule);
        out.join("\n")
    }
}

/// The legacy client's display: a heading and the feedback text, nothing else.
pub struct LegacyFeedbackView<'a> {
    pub feedback: &'a str,
}

impl LegacyFeedbackView<'_> {
    pub fn render(&self, msgs: &Messages) -> String {
        format!("{}\n{}\n{}", msgs.legacy_feedback_heading, "-".repeat(60), self.feedback)
    }
}

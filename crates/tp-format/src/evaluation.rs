//! Plain-text rendering of a [`SelfEvaluation`].

use tp_core::entities::SelfEvaluation;

const BAR_CELLS: usize = 10;

/// Render an evaluation as a terminal report headed `"{agent} Self-Evaluation"`.
///
/// Criteria keep their map order. Weakness and improvement sections are
/// omitted when empty.
#[must_use]
pub fn render_report(evaluation: &SelfEvaluation, agent: &str) -> String {
    let mut lines = vec![
        format!("{agent} Self-Evaluation"),
        format!(
            "Overall Score: {:.1}/10 ({}) {}",
            evaluation.overall_score,
            evaluation.band(),
            score_bar(evaluation.overall_score)
        ),
    ];

    if !evaluation.criteria.is_empty() {
        lines.push(String::new());
        lines.push("Criteria Breakdown".to_string());
        for (name, criterion) in &evaluation.criteria {
            lines.push(format!(
                "  {}: {:.1}/10 {}",
                humanize(name),
                criterion.score,
                score_bar(criterion.score)
            ));
            if !criterion.reasoning.is_empty() {
                lines.push(format!("    {}", criterion.reasoning));
            }
        }
    }

    push_section(&mut lines, "Identified Weaknesses", &evaluation.weaknesses);
    push_section(&mut lines, "Improvement Suggestions", &evaluation.improvements);

    lines.join("\n")
}

fn push_section(lines: &mut Vec<String>, title: &str, entries: &[String]) {
    if entries.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(title.to_string());
    lines.extend(entries.iter().map(|entry| format!("  - {entry}")));
}

/// `personalization_depth` → `personalization depth`.
fn humanize(key: &str) -> String {
    key.replace('_', " ")
}

/// Ten-cell bar, one filled cell per rounded point, clamped to `0..=10`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn score_bar(score: f64) -> String {
    let filled = if score.is_finite() {
        score.round().clamp(0.0, 10.0) as usize
    } else {
        0
    };
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_CELLS - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tp_core::entities::CriterionScore;

    fn criterion(score: f64, reasoning: &str) -> CriterionScore {
        CriterionScore {
            score,
            reasoning: reasoning.to_string(),
        }
    }

    #[test]
    fn full_report() {
        let evaluation = SelfEvaluation {
            overall_score: 7.3,
            criteria: [
                ("age_appropriateness".to_string(), criterion(9.0, "Fits grade 5")),
                ("pacing".to_string(), criterion(5.6, "")),
            ]
            .into_iter()
            .collect(),
            weaknesses: vec!["Week 3 is dense".to_string()],
            improvements: vec!["Split week 3".to_string()],
        };

        assert_eq!(
            render_report(&evaluation, "Strategy Planner"),
            "Strategy Planner Self-Evaluation\n\
             Overall Score: 7.3/10 (fair) [#######---]\n\
             \n\
             Criteria Breakdown\n  \
               age appropriateness: 9.0/10 [#########-]\n    \
                 Fits grade 5\n  \
               pacing: 5.6/10 [######----]\n\
             \n\
             Identified Weaknesses\n  \
               - Week 3 is dense\n\
             \n\
             Improvement Suggestions\n  \
               - Split week 3"
        );
    }

    #[test]
    fn empty_sections_are_omitted() {
        let evaluation = SelfEvaluation {
            overall_score: 9.0,
            ..SelfEvaluation::default()
        };
        assert_eq!(
            render_report(&evaluation, "Lesson Creator"),
            "Lesson Creator Self-Evaluation\nOverall Score: 9.0/10 (strong) [#########-]"
        );
    }

    #[test]
    fn bar_is_clamped() {
        assert_eq!(score_bar(-3.0), "[----------]");
        assert_eq!(score_bar(14.0), "[##########]");
        assert_eq!(score_bar(f64::NAN), "[----------]");
    }
}

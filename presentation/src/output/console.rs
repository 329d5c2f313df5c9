//! Console output formatter for ranking decisions

use colored::Colorize;
use neuroform_application::BatchOutcome;
use neuroform_domain::util::preview;
use neuroform_domain::{Decision, OutputFormat};

/// Longest option text shown on one line of the full report
const OPTION_PREVIEW_CHARS: usize = 60;

/// Formats ranking decisions for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one decision in the requested format
    pub fn format_decision(decision: &Decision, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format(decision),
            OutputFormat::Best => Self::format_best(decision),
            OutputFormat::Json => Self::format_json(decision),
        }
    }

    /// Format the complete decision: analysis, every option, verdict
    pub fn format(decision: &Decision) -> String {
        let ranking = &decision.ranking;
        let analysis = &ranking.analysis;
        let mut output = String::new();

        output.push_str(&Self::header("Answer Selection"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n\n",
            "Question:".cyan().bold(),
            ranking.question
        ));

        output.push_str(&Self::section_header("Analysis"));
        output.push_str(&format!("  Type:      {}\n", analysis.question_type));
        output.push_str(&format!("  Strategy:  {}\n", analysis.answer_strategy));
        output.push_str(&format!("  Expects:   {}\n", analysis.expected_answer_type));
        output.push_str(&format!("  Sentiment: {}\n", analysis.sentiment));
        let keywords = if analysis.keywords.is_empty() {
            "(none)".dimmed().to_string()
        } else {
            analysis.keywords.join(", ")
        };
        output.push_str(&format!("  Keywords:  {}\n", keywords));

        output.push_str(&Self::section_header("Options"));
        for option in &ranking.scores {
            let line = format!(
                "{:>2}. {:<width$} {:.2}",
                option.index,
                preview(&option.text, OPTION_PREVIEW_CHARS),
                option.score,
                width = OPTION_PREVIEW_CHARS
            );
            if option.index == ranking.best_index {
                output.push_str(&format!("{} {}\n", "->".green().bold(), line.green()));
            } else {
                output.push_str(&format!("   {}\n", line));
            }
            let b = &option.breakdown;
            output.push_str(&format!(
                "{}\n",
                Self::indent(
                    &format!(
                        "strategy {:+.2}  sentiment {:+.2} ({})  length {:+.2}",
                        b.strategy, b.sentiment, option.sentiment, b.length
                    ),
                    "       ",
                )
                .dimmed()
            ));
        }

        output.push('\n');
        output.push_str(&Self::verdict(decision));
        output.push('\n');
        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(decision: &Decision) -> String {
        serde_json::to_string_pretty(decision).unwrap_or_else(|_| "{}".to_string())
    }

    /// Selected option only (concise output)
    pub fn format_best(decision: &Decision) -> String {
        let best = decision.ranking.best();
        let mut output = format!(
            "{} {} ({:.2})",
            format!("[{}]", best.index).bold(),
            best.text,
            best.score
        );
        if !decision.autonomous {
            output.push_str(&format!(" {}", "needs review".yellow()));
        }
        output.push('\n');
        output
    }

    /// Format a batch: JSON array for `Json`, one block per item otherwise
    pub fn format_batch(outcomes: &[BatchOutcome], format: OutputFormat) -> String {
        if format == OutputFormat::Json {
            let items: Vec<serde_json::Value> = outcomes
                .iter()
                .map(|outcome| match &outcome.result {
                    Ok(decision) => serde_json::json!({ "id": outcome.id, "decision": decision }),
                    Err(e) => serde_json::json!({ "id": outcome.id, "error": e.to_string() }),
                })
                .collect();
            return serde_json::to_string_pretty(&items).unwrap_or_else(|_| "[]".to_string());
        }

        let mut output = String::new();
        for outcome in outcomes {
            let id = if outcome.id.is_empty() { "-" } else { &outcome.id };
            match &outcome.result {
                Ok(decision) => {
                    if format == OutputFormat::Best {
                        output.push_str(&format!("{} ", format!("{}:", id).cyan().bold()));
                        output.push_str(&Self::format_best(decision));
                    } else {
                        output.push_str(&format!("{}\n", format!("── {} ──", id).yellow().bold()));
                        output.push_str(&Self::format(decision));
                    }
                }
                Err(e) => {
                    output.push_str(&format!(
                        "{} {} {}\n",
                        format!("{}:", id).red().bold(),
                        "Error:".red(),
                        e
                    ));
                }
            }
        }
        output
    }

    fn verdict(decision: &Decision) -> String {
        let best = decision.ranking.best();
        if decision.autonomous {
            format!(
                "{} option {} ({:.2} >= {:.2})",
                "Selected:".green().bold(),
                best.index,
                decision.ranking.confidence,
                decision.threshold
            )
        } else {
            format!(
                "{} option {} suggested ({:.2} < {:.2})",
                "Needs review:".yellow().bold(),
                best.index,
                decision.ranking.confidence,
                decision.threshold
            )
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neuroform_application::{BatchItemError, EngineError};
    use neuroform_domain::{
        ConfidencePolicy, DomainError, ExpectedAnswerType, OptionScore, QuestionAnalysis,
        QuestionType, Ranking, ScoreBreakdown, Sentiment, StrategyTag,
    };

    fn decision(threshold: f64) -> Decision {
        let analysis = QuestionAnalysis {
            question_type: QuestionType::YesNo,
            sentiment: Sentiment::Neutral,
            keywords: vec!["agree".to_string()],
            answer_strategy: StrategyTag::PreferYes,
            expected_answer_type: ExpectedAnswerType::Boolean,
        };
        let scores = vec![
            OptionScore::new(
                0,
                "Yes",
                Sentiment::Neutral,
                ScoreBreakdown {
                    strategy: 0.3,
                    sentiment: 0.1,
                    length: 0.0,
                },
            ),
            OptionScore::new(
                1,
                "No",
                Sentiment::Neutral,
                ScoreBreakdown {
                    strategy: -0.2,
                    sentiment: 0.1,
                    length: 0.0,
                },
            ),
        ];
        let ranking = Ranking::new("Do you agree?", analysis, scores).unwrap();
        Decision::new(ranking, &ConfidencePolicy::new(threshold))
    }

    #[test]
    fn test_full_lists_every_option() {
        let output = ConsoleFormatter::format(&decision(0.6));
        assert!(output.contains("Do you agree?"));
        assert!(output.contains("prefer_yes"));
        assert!(output.contains("Yes"));
        assert!(output.contains("No"));
        assert!(output.contains("0.90"));
        assert!(output.contains("0.40"));
    }

    #[test]
    fn test_best_flags_low_confidence() {
        let confident = ConsoleFormatter::format_best(&decision(0.6));
        assert!(confident.contains("Yes"));
        assert!(!confident.contains("needs review"));

        let unsure = ConsoleFormatter::format_best(&decision(0.95));
        assert!(unsure.contains("needs review"));
    }

    #[test]
    fn test_json_round_trips_decision() {
        let original = decision(0.6);
        let json = ConsoleFormatter::format_json(&original);
        let parsed: Decision = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_batch_json_keeps_order_and_errors() {
        let outcomes = vec![
            BatchOutcome {
                id: "q1".to_string(),
                result: Ok(decision(0.6)),
            },
            BatchOutcome {
                id: "q2".to_string(),
                result: Err(BatchItemError::Rank(EngineError::InvalidInput(
                    DomainError::EmptyOptions,
                ))),
            },
        ];
        let json = ConsoleFormatter::format_batch(&outcomes, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["id"], "q1");
        assert_eq!(value[0]["decision"]["ranking"]["best_index"], 0);
        assert_eq!(value[1]["id"], "q2");
        assert!(value[1]["error"].as_str().unwrap().contains("No answer options"));
    }

    #[test]
    fn test_batch_text_reports_failures() {
        let outcomes = vec![BatchOutcome {
            id: String::new(),
            result: Err(BatchItemError::Worker("panicked".to_string())),
        }];
        let output = ConsoleFormatter::format_batch(&outcomes, OutputFormat::Best);
        assert!(output.contains("panicked"));
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "  "), "  a\n  b");
    }
}

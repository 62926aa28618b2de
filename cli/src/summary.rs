//! End-of-run console summary

use aer_application::EvaluationSummary;
use colored::Colorize;

/// Print the evaluation summary in a compact table
pub fn print_summary(summary: &EvaluationSummary, approach: &str) {
    let line = "=".repeat(60);

    println!("\n{}", line);
    println!("{} ({})", "EVALUATION SUMMARY".bold(), approach);
    println!("{}", line);

    println!(
        "\nOfficial score: {}",
        format!("{:.4}", summary.official_score).green().bold()
    );
    if summary.total > 0 {
        println!(
            "  (1.0 x {} + 0.5 x {} + 0.0 x {}) / {}",
            summary.full_match, summary.partial_match, summary.incorrect, summary.total
        );
    }

    println!("\nBreakdown:");
    println!("  full match (1.0):    {}", summary.full_match);
    println!("  partial match (0.5): {}", summary.partial_match);
    println!("  incorrect (0.0):     {}", summary.incorrect);
    println!("  strict accuracy:     {:.4}", summary.strict_accuracy);
    println!("  macro F1:            {:.4}", summary.macro_f1);

    if !summary.error_kinds.is_empty() {
        println!("\nError kinds:");
        for (kind, count) in &summary.error_kinds {
            println!("  {:?}: {}", kind, count);
        }
    }

    if !summary.option_matrix.is_empty() {
        println!("\nPer-option metrics:");
        println!("  {:<8} {:>10} {:>10} {:>10}", "option", "precision", "recall", "f1");
        for (label, metrics) in &summary.option_matrix {
            println!(
                "  {:<8} {:>10.4} {:>10.4} {:>10.4}",
                label.to_string(),
                metrics.precision,
                metrics.recall,
                metrics.f1
            );
        }
    }

    println!("{}", line);
}

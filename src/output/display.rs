//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{AnalysisResult, SimulationResult};
use colored::Colorize;

/// Print the partition analysis for a letter
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} '{}' ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        result.letter.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} candidates, current pattern {}",
        result.total_candidates,
        result.current_pattern.to_string().bright_white().bold()
    );
    println!("   {} groups:\n", result.partitions.len());

    let largest = result.winner().map_or(0, |w| w.size);

    for (i, group) in result.partitions.iter().enumerate() {
        let bar = create_progress_bar(group.size as f64, largest as f64, 20);
        let marker = if i == 0 { "▶".green().bold() } else { " ".normal() };
        let mut sample = group.sample.join(", ");
        if group.size > group.sample.len() {
            sample.push_str(", …");
        }

        println!(
            " {marker} {:<width$} [{}] {:>5}  {}",
            group.pattern.to_string(),
            bar.green(),
            group.size,
            sample.bright_black(),
            width = result.current_pattern.len() * 2,
        );
    }

    if let Some(winner) = result.winner() {
        let verdict = if winner.revealed == 0 {
            format!("'{}' would be a wrong guess", result.letter).red()
        } else {
            format!(
                "'{}' would reveal {} slot(s)",
                result.letter, winner.revealed
            )
            .green()
        };
        println!("\n   {verdict}");
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Setup:".bright_cyan().bold());
    println!("   Strategy:         {}", result.strategy);
    println!("   Guess budget:     {}", result.max_guesses);
    println!("   Games played:     {}", result.total_games());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "By word length:".bright_cyan().bold());
    for summary in &result.lengths {
        let pct = summary.win_rate() * 100.0;
        let bar = create_progress_bar(pct, 100.0, 30);
        println!(
            "   {:>2} letters ({:>4} words): {} {:5.1}% won | {:.1} letters | {:.1} wrong | {:.1} left",
            summary.word_length,
            summary.starting_candidates,
            bar.green(),
            pct,
            summary.average_letters,
            summary.average_wrong,
            summary.average_remaining,
        );

        if let Some((answer, count)) = summary.answers.iter().max_by_key(|(_, c)| **c) {
            println!(
                "      most common answer: {} ({count}x)",
                answer.to_uppercase().bright_yellow()
            );
        }
    }
}

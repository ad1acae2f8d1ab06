//! Console output formatter for statistics reports

use crate::output::formatter::{OutputFormatter, link_text, next_page_args, percent, ratio_percent};
use afdstats_application::StatsReport;
use afdstats_domain::{MatchKind, ResultCategory, VoteRecord, classify_match};
use colored::{ColoredString, Colorize};

/// Formats statistics reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete report
    pub fn format(report: &StatsReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!(
            "AfD Statistics for User:{}",
            report.participant.name()
        )));
        output.push('\n');
        output.push_str(&Self::summary(report));

        if report.stats.total_votes() == 0 {
            output.push_str(&format!("\n{}\n", "No votes found.".yellow().bold()));
            output.push_str(&Self::skipped(report));
            output.push_str(&Self::footer());
            return output;
        }

        output.push_str(&Self::vote_totals(report));
        output.push_str(&Self::matrix(report));
        output.push_str(&Self::match_stats(report));
        output.push_str(&Self::records(report));
        output.push_str(&Self::no_votes(report));
        output.push_str(&Self::skipped(report));

        if let Some(command) = Self::next_command(report) {
            output.push_str(&format!(
                "\n{} {}\n",
                format!("Next {} AfDs:", report.max_results).cyan().bold(),
                command
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    fn summary(report: &StatsReport) -> String {
        let mut output = format!(
            "\n{} {}{}: {}\n",
            "Unique AfD pages edited by".cyan().bold(),
            report.participant.name(),
            report
                .start_date
                .map(|d| format!(" (from {} and earlier)", d.display()))
                .unwrap_or_default(),
            report.total_candidates
        );
        if report.truncated() {
            output.push_str(&format!(
                "{}\n",
                format!("Only the last {} AfD pages were analyzed.", report.analyzed).dimmed()
            ));
        }
        output
    }

    fn vote_totals(report: &StatsReport) -> String {
        let mut output = Self::section_header("Vote totals");
        let total = report.stats.total_votes();
        for (vote, count) in report.stats.vote_totals() {
            output.push_str(&format!(
                "  {:<22} {:>4} ({})\n",
                format!("{} votes:", vote.label()),
                count,
                percent(count, total)
            ));
        }
        if !report.no_votes.is_empty() {
            output.push_str(&format!(
                "\nThe remaining {} pages had no discernible vote by this user.\n",
                report.no_votes.len()
            ));
        }
        output
    }

    fn matrix(report: &StatsReport) -> String {
        let mut output = Self::section_header("Voting matrix (votes down, results across)");

        output.push_str("      ");
        for column in ResultCategory::MATRIX_COLUMNS {
            let code = column.short_code().unwrap_or("?").to_uppercase();
            output.push_str(&format!("{:>5}", code.bold()));
        }
        output.push('\n');

        for (vote, cells) in report.stats.matrix_rows() {
            output.push_str(&format!("  {:<4}", vote.short_code().to_uppercase().bold()));
            for cell in cells {
                let text = format!("{:>5}", cell.count);
                let colored = Self::paint(&text, cell.kind);
                if cell.count == 0 {
                    output.push_str(&format!("{}", colored.dimmed()));
                } else {
                    output.push_str(&format!("{}", colored.bold()));
                }
            }
            output.push('\n');
        }

        output.push_str(&format!(
            "\n  {}\n",
            "K Keep, D Delete, SK Speedy Keep, SD Speedy Delete, M Merge, R Redirect, \
             T Transwiki, U Userfy/Draftify, NC No Consensus"
                .dimmed()
        ));
        output
    }

    fn match_stats(report: &StatsReport) -> String {
        let matches = &report.matches;
        let total = matches.total();
        if total == 0 {
            return String::new();
        }

        let mut output = Self::section_header("Match statistics");
        output.push_str(&format!(
            "  {} {} ({})\n",
            "Vote matched result:".green(),
            matches.matched,
            percent(matches.matched, total)
        ));
        output.push_str(&format!(
            "  {} {} ({})\n",
            "Vote didn't match result:".red(),
            matches.mismatched,
            percent(matches.mismatched, total)
        ));
        output.push_str(&format!(
            "  {} {} ({})\n",
            "Result was \"No Consensus\":".yellow(),
            matches.no_consensus,
            percent(matches.no_consensus, total)
        ));
        if let Some(rate) = matches.match_rate() {
            output.push_str(&format!(
                "\n  Without considering \"No Consensus\" results, {} and {} were not.\n",
                format!("{} of AfDs were matches", ratio_percent(rate)).bold(),
                ratio_percent(1.0 - rate)
            ));
        }
        output
    }

    fn records(report: &StatsReport) -> String {
        let mut output = Self::section_header("Individual AfDs");
        for record in &report.records {
            output.push_str(&format!(
                "  {:<64}  {:<18}  {:<20}  {}{}\n",
                link_text(&record.page),
                record.vote_date,
                Self::vote_text(record),
                Self::paint(
                    record.result.label(),
                    classify_match(record.vote, record.result)
                ),
                Self::review_marks(record)
            ));
        }
        output
    }

    fn no_votes(report: &StatsReport) -> String {
        if report.no_votes.is_empty() {
            return String::new();
        }
        let mut output = Self::section_header("Pages without detected votes");
        for entry in &report.no_votes {
            match &entry.closer {
                Some(closer) => output.push_str(&format!(
                    "  {} {}\n",
                    link_text(&entry.page),
                    format!("(closer: {})", closer).dimmed()
                )),
                None => output.push_str(&format!("  {}\n", link_text(&entry.page))),
            }
        }
        output
    }

    fn skipped(report: &StatsReport) -> String {
        if report.skipped.is_empty() {
            return String::new();
        }
        let mut output = Self::section_header("Skipped");
        for skipped in &report.skipped {
            output.push_str(&format!(
                "  {} {}\n",
                link_text(&skipped.page),
                format!("({})", skipped.reason).dimmed()
            ));
        }
        output
    }

    fn vote_text(record: &VoteRecord) -> String {
        if record.nominator_fallback {
            format!("{} (Nom)", record.vote.label())
        } else {
            record.vote.label().to_string()
        }
    }

    fn review_marks(record: &VoteRecord) -> String {
        record
            .review_references
            .iter()
            .map(|r| format!(" [DRV {}]", r.citation_index))
            .collect()
    }

    fn paint(text: &str, kind: MatchKind) -> ColoredString {
        match kind {
            MatchKind::Match => text.green(),
            MatchKind::Mismatch => text.red(),
            MatchKind::NoConsensus => text.yellow(),
            MatchKind::Excluded => text.normal(),
        }
    }

    /// Command line that continues with the next page of results
    pub fn next_command(report: &StatsReport) -> Option<String> {
        let args = next_page_args(report)?;
        let mut parts = vec!["afdstats".to_string()];
        for (key, value) in args {
            match (key.as_str(), value) {
                ("name", Some(name)) => parts.push(Self::quote(&name.replace('_', " "))),
                (_, Some(value)) => parts.push(format!("--{} {}", key, Self::quote(&value))),
                (_, None) => parts.push(format!("--{}", key)),
            }
        }
        Some(parts.join(" "))
    }

    fn quote(value: &str) -> String {
        if value.contains(' ') {
            format!("\"{}\"", value)
        } else {
            value.to_string()
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, report: &StatsReport) -> String {
        Self::format(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::fixtures::{empty_report, sample_report};

    fn plain(report: &StatsReport) -> String {
        colored::control::set_override(false);
        ConsoleFormatter::format(report)
    }

    #[test]
    fn test_format_contains_sections() {
        let output = plain(&sample_report());

        assert!(output.contains("AfD Statistics for User:Example user"));
        assert!(output.contains("(from May 10 2020 and earlier): 7"));
        assert!(output.contains("Only the last 6 AfD pages were analyzed."));
        assert!(output.contains("Vote totals"));
        assert!(output.contains("The remaining 1 pages had no discernible vote by this user."));
        assert!(output.contains("Voting matrix"));
        assert!(output.contains("Vote matched result: 2 (50.0%)"));
        assert!(output.contains("66.7% of AfDs were matches and 33.3% were not."));
        assert!(output.contains("Delete (Nom)"));
        assert!(output.contains("[DRV 1]"));
        assert!(output.contains("Quux (closer: Closer)"));
        assert!(output.contains("Broken (no page text)"));
    }

    #[test]
    fn test_vote_totals_percentages() {
        let output = plain(&sample_report());
        assert!(output.contains("Keep votes:"));
        assert!(output.contains("2 (50.0%)"));
        assert!(output.contains("1 (25.0%)"));
    }

    #[test]
    fn test_no_votes_found() {
        let output = plain(&empty_report());
        assert!(output.contains("No votes found."));
        assert!(!output.contains("Voting matrix"));
    }

    #[test]
    fn test_next_command() {
        let command = ConsoleFormatter::next_command(&sample_report()).unwrap();
        assert_eq!(command, "afdstats \"Example user\" --max 5 --startdate 20200501");

        assert_eq!(ConsoleFormatter::next_command(&empty_report()), None);
    }
}

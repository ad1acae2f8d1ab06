//! HTML report formatter
//!
//! Produces a standalone results page: vote totals, the shaded voting
//! matrix, match statistics and one table row per discussion.

use crate::output::formatter::{OutputFormatter, link_text, next_page_args, percent, ratio_percent};
use afdstats_application::StatsReport;
use afdstats_domain::core::string::percent_encode;
use afdstats_domain::{MatchKind, MatrixCell, ResultCategory, VoteRecord, classify_match};
use html_escape::{encode_double_quoted_attribute, encode_text};
use url::form_urlencoded;

/// Base URL for links to wiki pages
pub const WIKI_URL: &str = "https://en.wikipedia.org/";

/// Web front end that accepts the same query parameters as the CLI
pub const APP_URL: &str = "https://afdstats.toolforge.org/afdstats.py";

const STYLE: &str = "\
table { border-collapse: collapse; }
td, th { padding: 2px 6px; }
.y, .yy { background-color: #99ff99; }
.n, .nn { background-color: #ff9999; }
.m, .mm { background-color: #ffff99; }
.yyy { background-color: #e6ffe6; color: #999; }
.nnn { background-color: #ffe6e6; color: #999; }
.mmm { background-color: #ffffe6; color: #999; }";

const DISCLAIMER: &str = "<p>These statistics were compiled by an automated process, and may \
contain errors or omissions due to the wide variety of styles with which people cast \
votes at AfD. Any result fields which contain \"UNDETERMINED\" were not able to be parsed, \
and should be examined manually.</p>";

const MATRIX_INTRO: &str = "<p>This table compares the user's votes to the way the AfD \
eventually closed. The only AfDs included in this matrix are those that have already closed, \
where both the vote and result could be reliably determined. Results are across the top, and \
the user's votes down the side. Green cells indicate \"matches\", meaning that the user's vote \
matched (or closely resembled) the way the AfD eventually closed, whereas red cells indicate \
that the vote and the end result did not match.</p>";

const ABBREVIATION_KEY: &str = "<div style=\"float:left;padding:20px;\">
<small>Abbreviation key:
<br>K = Keep
<br>D = Delete
<br>SK = Speedy Keep
<br>SD = Speedy Delete
<br>M = Merge
<br>R = Redirect
<br>T = Transwiki
<br>U = Userfy/Draftify
<br>NC = No Consensus</small></div>
<div style=\"clear:both;\"></div>";

const FOOTER: &str = "<footer>Bugs, suggestions, questions? Contact the \
<a href=\"https://toolsadmin.wikimedia.org/tools/id/afdstats\">maintainers</a> at \
<a href=\"https://en.wikipedia.org/wiki/Wikipedia_talk:AfD_stats\">Wikipedia talk:AfD stats</a>.</footer>";

/// Formats statistics reports as an HTML page
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Format the complete report
    pub fn format(report: &StatsReport) -> String {
        let mut output = vec![Self::head()];
        let name = encode_text(report.participant.name());

        output.push(format!("<h1>AfD Statistics for User:{}</h1>", name));
        output.push(DISCLAIMER.to_string());
        output.push("<h2>Vote totals</h2>".to_string());
        output.push(format!(
            "Total number of unique AfD pages edited by {}{}: {}<br>",
            name,
            report
                .start_date
                .map(|d| format!(" (from {} and earlier)", d.display()))
                .unwrap_or_default(),
            report.total_candidates
        ));
        if report.truncated() {
            output.push(format!(
                "Only the last {} AfD pages were analyzed.<br>",
                report.analyzed
            ));
        }
        output.push(Self::no_vote_list(report));

        if report.stats.total_votes() > 0 {
            output.push(Self::vote_totals(report));
            output.push(Self::matrix(report));
            output.push(ABBREVIATION_KEY.to_string());
            output.push("<div style=\"width:875px;\">".to_string());

            let next = Self::next_link(report);
            output.push(Self::match_stats(report));
            output.push("<h2>Individual AfDs</h2>".to_string());
            output.push(next.clone());
            output.push("</div>".to_string());
            output.push(Self::records_table(report));
            output.push(format!("<div style=\"width:875px;\">{}<br>", next));
        } else {
            output.push("<br><br>No votes found.".to_string());
        }

        output.push(FOOTER.to_string());
        output.push("</div>\n</body>\n</html>".to_string());
        output.join("\n")
    }

    fn head() -> String {
        format!(
            "<!doctype html>
<html>
<head>
<meta http-equiv=\"Content-Type\" content=\"text/html; charset=UTF-8\"/>
<title>AfD Stats - Results</title>
<style>
{}
</style>
<script>
	function toggleNV(e) {{
		var wasHidden = document.getElementById('noVote').style.display === 'none';
		document.getElementById('noVote').style.display = wasHidden ? 'block' : 'none';
		e.textContent = (wasHidden ? 'Hide' : 'Show') + e.textContent.slice(4);
	}}
</script>
</head>
<body>
<div style=\"width:875px;\">",
            STYLE
        )
    }

    fn no_vote_list(report: &StatsReport) -> String {
        let mut output = vec![
            "<small><a href=\"javascript:void(0);\" onClick=\"toggleNV(this)\">\
Show pages without detected votes</a></small>"
                .to_string(),
            "<ul id=\"noVote\" style=\"display: none\">".to_string(),
        ];
        for entry in &report.no_votes {
            let closer = entry
                .closer
                .as_deref()
                .map(|c| format!(" (closer: {})", encode_text(c)))
                .unwrap_or_default();
            output.push(format!(
                "<li><a href=\"{}wiki/Wikipedia:{}\">{}</a>{}</li>",
                WIKI_URL,
                percent_encode(&entry.page),
                encode_text(&entry.page),
                closer
            ));
        }
        output.push("</ul>".to_string());
        output.join("\n")
    }

    fn vote_totals(report: &StatsReport) -> String {
        let total = report.stats.total_votes();
        let mut output = vec!["<ul>".to_string()];
        for (vote, count) in report.stats.vote_totals() {
            output.push(format!(
                "<li>{} votes: {} ({})</li>",
                vote.label(),
                count,
                percent(count, total)
            ));
        }
        output.push("</ul>".to_string());
        if !report.no_votes.is_empty() {
            output.push(format!(
                "The remaining {} pages had no discernible vote by this user.",
                report.no_votes.len()
            ));
        }
        output.join("\n")
    }

    fn matrix(report: &StatsReport) -> String {
        let mut output = vec![
            "<br>\n<h2>Voting matrix</h2>".to_string(),
            MATRIX_INTRO.to_string(),
            "</div>".to_string(),
            "<table border=1 style=\"float:left;\" class=\"matrix\">".to_string(),
            "<thead>\n<tr>\n<th colspan=2 rowspan=2></th>\n<th colspan=9>Results</th>\n</tr>\n<tr>"
                .to_string(),
        ];
        for column in ResultCategory::MATRIX_COLUMNS {
            output.push(format!(
                "<th>{}</th>",
                column.short_code().unwrap_or_default().to_uppercase()
            ));
        }
        output.push("</tr>\n</thead>\n<tbody>\n<tr><th rowspan=9>Votes</th></tr>".to_string());
        for (vote, cells) in report.stats.matrix_rows() {
            output.push(format!("<tr>\n<th>{}</th>", vote.short_code().to_uppercase()));
            for cell in cells {
                output.push(format!(
                    "<td class=\"{}\">{}</td>",
                    matrix_cell_class(&cell),
                    cell.count
                ));
            }
            output.push("</tr>".to_string());
        }
        output.push("</tbody>\n</table>".to_string());
        output.join("\n")
    }

    fn match_stats(report: &StatsReport) -> String {
        let matches = &report.matches;
        let total = matches.total();
        if total == 0 {
            return String::new();
        }

        let rows = [
            ("vote matched result (green cells)", matches.matched),
            ("vote didn't match result (red cells)", matches.mismatched),
            (
                "result was \"No Consensus\" (yellow cells)",
                matches.no_consensus,
            ),
        ];
        let mut output: Vec<String> = rows
            .iter()
            .map(|(label, count)| {
                format!(
                    "Number of AfDs where {}: {} ({})<br>",
                    label,
                    count,
                    percent(*count, total)
                )
            })
            .collect();
        if let Some(rate) = matches.match_rate() {
            output.push(format!(
                "Without considering \"No Consensus\" results, <b>{} of AfDs were matches</b> \
                 and {} were not.",
                ratio_percent(rate),
                ratio_percent(1.0 - rate)
            ));
        }
        output.join("\n")
    }

    fn records_table(report: &StatsReport) -> String {
        let mut output = vec![
            "<table>\n<thead>\n<tr>\n\t<th scope=\"col\">Page</th>\n\t<th scope=\"col\">Vote date</th>\n\t<th scope=\"col\">Vote</th>\n\t<th scope=\"col\">Result</th>\n</tr>\n</thead>\n<tbody>"
                .to_string(),
        ];
        output.extend(report.records.iter().map(Self::record_row));
        output.push("</tbody>\n</table>".to_string());
        output.join("\n")
    }

    /// One table row; the result cell is shaded by how the vote compared
    pub fn record_row(record: &VoteRecord) -> String {
        let class = row_class(classify_match(record.vote, record.result));
        format!(
            "<tr>\n\t<td>{}</td>\n\t<td>{}</td>\n\t<td>{}{}</td>\n\t<td class=\"{}\">{}{}</td>\n</tr>",
            page_link(&record.page),
            encode_text(&record.vote_date),
            record.vote.label(),
            if record.nominator_fallback { " (Nom)" } else { "" },
            class,
            record.result.label(),
            record.review_links_html()
        )
    }

    fn next_link(report: &StatsReport) -> String {
        let Some(args) = next_page_args(report) else {
            return String::new();
        };
        let mut query = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &args {
            query.append_pair(key, value.as_deref().unwrap_or("1"));
        }
        let href = format!("{}?{}", APP_URL, query.finish());
        format!(
            "<a href=\"{}\"><small>Next {} AfDs &rarr;</small></a><br>",
            encode_double_quoted_attribute(&href),
            report.max_results
        )
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format(&self, report: &StatsReport) -> String {
        Self::format(report)
    }
}

/// Link to a discussion page with shortened text
pub fn page_link(page: &str) -> String {
    format!(
        "<a href=\"{}wiki/Wikipedia:{}\">{}</a>",
        WIKI_URL,
        percent_encode(page),
        encode_text(&link_text(page))
    )
}

/// Matrix cell class: bright when the count is non-zero, pale when zero
pub fn matrix_cell_class(cell: &MatrixCell) -> &'static str {
    match (cell.kind, cell.count > 0) {
        (MatchKind::Match, true) => "yy",
        (MatchKind::Match, false) => "yyy",
        (MatchKind::NoConsensus, true) => "mm",
        (MatchKind::NoConsensus, false) => "mmm",
        (_, true) => "nn",
        (_, false) => "nnn",
    }
}

/// Result cell class for one discussion row
pub fn row_class(kind: MatchKind) -> &'static str {
    match kind {
        MatchKind::Match => "y",
        MatchKind::Mismatch => "n",
        MatchKind::NoConsensus | MatchKind::Excluded => "m",
    }
}

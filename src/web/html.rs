//! HTML rendering. Each primitive maps one view-model section onto markup and
//! never changes the values it is given.

use crate::core::details::{DetailView, MetricGroup, ProgramEntry, Stat};
use crate::core::listing::{HeaderCell, ListingView};
use crate::core::sorting::SortDirection;
use crate::domain::model::University;
use crate::utils::format::{format_count, format_score};
use std::fmt::Write;

pub const PLACEHOLDER_LOGO: &str = "/placeholder.svg";
pub const NO_RESULTS: &str = "No universities found matching your criteria.";

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;background:#fafafa;color:#111}\
.container{max-width:1100px;margin:0 auto;padding:2rem 1rem}\
.card{background:#fff;border:1px solid #e5e5e5;border-radius:.5rem;padding:1.5rem;margin-bottom:1.5rem}\
.muted{color:#666;font-size:.875rem}\
.grid{display:grid;grid-template-columns:1fr 1fr;gap:1rem}\
.stats{display:grid;grid-template-columns:1fr auto;gap:.5rem;font-size:.875rem}\
table{width:100%;border-collapse:collapse}th,td{padding:.5rem;border-bottom:1px solid #eee;text-align:left}\
th a{color:inherit;text-decoration:none}\
.badge{display:inline-block;background:#111;color:#fff;border-radius:9999px;padding:.1rem .6rem;font-size:.75rem}\
.bar{height:.375rem;width:4rem;border-radius:9999px;background:#eee}.bar div{height:.375rem;border-radius:9999px}\
.empty{height:6rem;text-align:center}\
hr{border:0;border-top:1px solid #eee;margin:1rem 0}";

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

pub fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n<div class=\"container\">\n{}</div>\n</body>\n</html>\n",
        escape(title),
        STYLE,
        body
    )
}

fn card(title: &str, description: Option<&str>, content: &str) -> String {
    let mut out = String::from("<section class=\"card\">\n");
    let _ = writeln!(out, "<h2>{}</h2>", escape(title));
    if let Some(description) = description {
        let _ = writeln!(out, "<p class=\"muted\">{}</p>", escape(description));
    }
    out.push_str(content);
    out.push_str("</section>\n");
    out
}

fn badge(text: &str) -> String {
    format!("<span class=\"badge\">{}</span>", escape(text))
}

fn separator() -> &'static str {
    "<hr>\n"
}

fn stat_grid(stats: &[Stat]) -> String {
    let mut out = String::from("<div class=\"stats\">\n");
    for stat in stats {
        let _ = writeln!(
            out,
            "<div>{}</div><div>{}</div>",
            escape(stat.label),
            escape(&stat.value)
        );
    }
    out.push_str("</div>\n");
    out
}

fn score_bar(score: f64, color: &str) -> String {
    format!(
        "<div class=\"bar\"><div style=\"width:{}%;background-color:{}\"></div></div>",
        score,
        escape(color)
    )
}

fn header_cell(cell: &HeaderCell) -> String {
    match &cell.sort {
        Some(link) => {
            let marker = match link.active {
                Some(SortDirection::Asc) => " ▲",
                Some(SortDirection::Desc) => " ▼",
                None => " ↕",
            };
            format!(
                "<th><a href=\"{}\">{}{}</a></th>",
                escape(&link.href),
                escape(cell.label),
                marker
            )
        }
        None => format!("<th>{}</th>", escape(cell.label)),
    }
}

fn listing_row(university: &University) -> String {
    let logo = university.logo.as_deref().unwrap_or(PLACEHOLDER_LOGO);
    format!(
        "<tr>\
         <td>{rank}</td>\
         <td><img src=\"{logo}\" alt=\"{name} logo\" width=\"40\" height=\"40\"></td>\
         <td><strong>{name}</strong></td>\
         <td>{country}</td>\
         <td>{score}</td>\
         <td>{students}</td>\
         <td>{faculty}</td>\
         <td>{founded}</td>\
         <td>{bar}</td>\
         <td><a href=\"/universities/{id}\">View Details</a></td>\
         </tr>\n",
        rank = badge(&university.rank.to_string()),
        logo = escape(logo),
        name = escape(&university.name),
        country = escape(&university.country),
        score = format_score(university.score),
        students = format_count(university.student_count),
        faculty = format_count(university.faculty_count),
        founded = university.founded_year,
        bar = score_bar(university.score, &university.color),
        id = university.id,
    )
}

pub fn listing_page(view: &ListingView<'_>) -> String {
    let mut table = String::from("<table>\n<thead>\n<tr>");
    for cell in &view.headers {
        table.push_str(&header_cell(cell));
    }
    table.push_str("</tr>\n</thead>\n<tbody>\n");

    if view.is_empty() {
        let _ = writeln!(
            table,
            "<tr><td colspan=\"{}\" class=\"empty\">{}</td></tr>",
            view.column_count(),
            NO_RESULTS
        );
    } else {
        for university in &view.rows {
            table.push_str(&listing_row(university));
        }
    }
    table.push_str("</tbody>\n</table>\n");

    let body = format!(
        "<h1>World University Rankings</h1>\n<p class=\"muted\"><a href=\"/universities.csv{}\">Download CSV</a></p>\n{}",
        escape(&view.spec.query_string()),
        card("Rankings", None, &table)
    );
    layout("University Rankings", &body)
}

fn program_block(program: &ProgramEntry<'_>) -> String {
    let mut out = String::from("<div class=\"program\">\n");
    let _ = write!(out, "<h3>{}", escape(program.name));
    if let Some(rank) = &program.rank_badge {
        let _ = write!(out, " {}", badge(rank));
    }
    out.push_str("</h3>\n");
    let _ = writeln!(out, "<p class=\"muted\">{}</p>", escape(program.description));
    out.push_str(&stat_grid(&program.details));
    out.push_str("<h4>Requirements:</h4>\n<ul class=\"muted\">\n");
    for requirement in program.requirements {
        let _ = writeln!(out, "<li>{}</li>", escape(requirement));
    }
    out.push_str("</ul>\n</div>\n");
    if program.separator_after {
        out.push_str(separator());
    }
    out
}

fn metric_group(group: &MetricGroup) -> String {
    format!("<div>\n<h3>{}</h3>\n{}</div>\n", escape(group.title), stat_grid(&group.stats))
}

pub fn detail_page(view: &DetailView<'_>) -> String {
    let mut body = String::from("<p><a href=\"/\">&larr; Back to rankings</a></p>\n");

    let mut summary = String::from("<div class=\"grid\">\n");
    if let Some(overview) = view.overview {
        let _ = writeln!(
            summary,
            "<div>\n<h3>Overview</h3>\n<p class=\"muted\">{}</p>\n</div>",
            escape(overview)
        );
    }
    let _ = writeln!(
        summary,
        "<div>\n<h3>Key Statistics</h3>\n{}</div>",
        stat_grid(&view.key_statistics)
    );
    summary.push_str("</div>\n");
    body.push_str(&card(view.header.name, Some(view.header.subtitle.as_str()), &summary));

    if let Some(programs) = &view.programs {
        let content: String = programs.iter().map(program_block).collect();
        body.push_str(&card(
            "Academic Programs",
            Some("Available majors and degrees"),
            &content,
        ));
    }

    let metrics: String = view.metrics.iter().map(metric_group).collect();
    body.push_str(&card(
        "Performance Metrics",
        Some("Key performance indicators"),
        &format!("<div class=\"grid\">\n{}</div>\n", metrics),
    ));

    layout(view.header.name, &body)
}

pub fn not_found_page() -> String {
    layout(
        "404: Not Found",
        "<h1>404</h1>\n<p>This page could not be found.</p>\n<p><a href=\"/\">Back to rankings</a></p>\n",
    )
}

pub fn error_page(status: u16, message: &str) -> String {
    layout(
        &format!("{} Error", status),
        &format!("<h1>{}</h1>\n<p>{}</p>\n", status, escape(message)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::builtin::builtin_universities;
    use crate::core::sorting::SortSpec;

    #[test]
    fn test_escape() {
        assert_eq!(escape("A&M <\"x\">'"), "A&amp;M &lt;&quot;x&quot;&gt;&#39;");
    }

    #[test]
    fn test_empty_listing_renders_no_results_row() {
        let view = ListingView::build(&[], SortSpec::default());
        let page = listing_page(&view);
        assert!(page.contains(NO_RESULTS));
        assert!(page.contains("colspan=\"10\""));
        assert!(!page.contains("View Details"));
    }

    #[test]
    fn test_listing_row_falls_back_to_placeholder_logo() {
        let records = builtin_universities();
        let eth = records.iter().find(|u| u.logo.is_none()).unwrap();
        let row = listing_row(eth);
        assert!(row.contains(PLACEHOLDER_LOGO));
        assert!(row.contains(&format!("/universities/{}", eth.id)));
    }

    #[test]
    fn test_detail_page_omits_programs_card_without_programs() {
        let records = builtin_universities();
        let stanford = records.iter().find(|u| u.majors.is_none()).unwrap();
        let page = detail_page(&DetailView::from_university(stanford));
        assert!(!page.contains("Academic Programs"));
        assert!(page.contains("Performance Metrics"));
        assert!(page.contains("Key Statistics"));
    }

    #[test]
    fn test_detail_page_separators_between_programs_only() {
        let records = builtin_universities();
        let mit = &records[0];
        let page = detail_page(&DetailView::from_university(mit));
        let programs = mit.majors.as_ref().unwrap().len();
        assert_eq!(page.matches("<hr>").count(), programs - 1);
        assert!(page.contains("Rank #1"));
    }
}

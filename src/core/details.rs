//! Groups one university into the independent sections of the detail page.
//!
//! Every section is optional at the type level only where the underlying data
//! can be missing, so a renderer never has to decide whether to draw an empty
//! card.

use crate::domain::model::{Program, University};
use crate::utils::format::format_count;

#[derive(Debug, Clone, PartialEq)]
pub struct DetailView<'a> {
    pub header: HeaderSection<'a>,
    pub overview: Option<&'a str>,
    pub key_statistics: Vec<Stat>,
    pub programs: Option<Vec<ProgramEntry<'a>>>,
    pub metrics: Vec<MetricGroup>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderSection<'a> {
    pub name: &'a str,
    /// `"City, Country • Founded 1861"`
    pub subtitle: String,
    pub color: &'a str,
    pub logo: Option<&'a str>,
}

/// A label/value pair, value already formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgramEntry<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub details: Vec<Stat>,
    pub requirements: &'a [String],
    pub rank_badge: Option<String>,
    pub separator_after: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricGroup {
    pub title: &'static str,
    pub stats: Vec<Stat>,
}

impl<'a> DetailView<'a> {
    pub fn from_university(university: &'a University) -> Self {
        Self {
            header: HeaderSection {
                name: &university.name,
                subtitle: format!(
                    "{}, {} • Founded {}",
                    university.city, university.country, university.founded_year
                ),
                color: &university.color,
                logo: university.logo.as_deref(),
            },
            overview: Some(university.description.as_str()).filter(|d| !d.trim().is_empty()),
            key_statistics: vec![
                stat("Students", format_count(university.student_count)),
                stat("Faculty", format_count(university.faculty_count)),
                stat("Score", university.score.to_string()),
            ],
            programs: program_entries(university),
            metrics: metric_groups(university),
        }
    }

    pub fn section_titles(&self) -> Vec<&'static str> {
        let mut titles = Vec::with_capacity(4);
        if self.overview.is_some() {
            titles.push("Overview");
        }
        titles.push("Key Statistics");
        if self.programs.is_some() {
            titles.push("Academic Programs");
        }
        titles.push("Performance Metrics");
        titles
    }
}

fn stat(label: &'static str, value: String) -> Stat {
    Stat { label, value }
}

fn program_entries(university: &University) -> Option<Vec<ProgramEntry<'_>>> {
    if !university.has_programs() {
        return None;
    }
    let majors = university.majors.as_deref()?;
    let last = majors.len() - 1;
    Some(
        majors
            .iter()
            .enumerate()
            .map(|(index, program)| program_entry(program, index < last))
            .collect(),
    )
}

fn program_entry(program: &Program, separator_after: bool) -> ProgramEntry<'_> {
    ProgramEntry {
        name: &program.name,
        description: &program.description,
        details: vec![
            stat("Degree", program.degree.clone()),
            stat("Duration", program.duration.clone()),
        ],
        requirements: &program.requirements,
        // ranking 0 means "unranked" in the source data
        rank_badge: program
            .ranking
            .filter(|rank| *rank > 0)
            .map(|rank| format!("Rank #{}", rank)),
        separator_after,
    }
}

fn metric_groups(university: &University) -> Vec<MetricGroup> {
    let m = &university.metrics;
    vec![
        MetricGroup {
            title: "Academic Metrics",
            stats: vec![
                stat("Academic Reputation", m.academic_reputation.to_string()),
                stat("Employer Reputation", m.employer_reputation.to_string()),
                stat("Faculty/Student Ratio", m.faculty_student_ratio.to_string()),
            ],
        },
        MetricGroup {
            title: "Research & International",
            stats: vec![
                stat("Citations", m.citations.to_string()),
                stat("International Faculty", m.international_faculty.to_string()),
                stat("International Students", m.international_students.to_string()),
                stat("Research Output", m.research_output.to_string()),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::builtin::builtin_universities;

    fn with_programs() -> University {
        builtin_universities()
            .into_iter()
            .find(|u| u.majors.as_ref().is_some_and(|m| m.len() > 1))
            .unwrap()
    }

    #[test]
    fn test_sections_for_record_with_programs() {
        let university = with_programs();
        let view = DetailView::from_university(&university);

        assert_eq!(
            view.section_titles(),
            vec!["Overview", "Key Statistics", "Academic Programs", "Performance Metrics"]
        );
        assert_eq!(view.header.name, university.name);
        assert!(view.header.subtitle.contains(&format!("Founded {}", university.founded_year)));

        let programs = view.programs.unwrap();
        assert_eq!(programs.len(), university.majors.as_ref().unwrap().len());
        assert!(programs[..programs.len() - 1].iter().all(|p| p.separator_after));
        assert!(!programs.last().unwrap().separator_after);
    }

    #[test]
    fn test_programs_section_absent_without_programs() {
        let mut university = with_programs();
        university.majors = None;
        let view = DetailView::from_university(&university);
        assert!(view.programs.is_none());
        assert!(!view.section_titles().contains(&"Academic Programs"));

        university.majors = Some(Vec::new());
        let view = DetailView::from_university(&university);
        assert!(view.programs.is_none());
    }

    #[test]
    fn test_rank_badge_only_when_ranked() {
        let mut university = with_programs();
        let majors = university.majors.as_mut().unwrap();
        majors[0].ranking = Some(3);
        majors[1].ranking = None;

        let view = DetailView::from_university(&university);
        let programs = view.programs.unwrap();
        assert_eq!(programs[0].rank_badge.as_deref(), Some("Rank #3"));
        assert_eq!(programs[1].rank_badge, None);
    }

    #[test]
    fn test_statistics_and_metrics_are_formatted() {
        let mut university = with_programs();
        university.student_count = 11_520;
        university.score = 100.0;
        university.metrics.citations = 99.5;

        let view = DetailView::from_university(&university);
        assert_eq!(view.key_statistics[0], stat("Students", "11,520".to_string()));
        assert_eq!(view.key_statistics[2], stat("Score", "100".to_string()));

        assert_eq!(view.metrics.len(), 2);
        assert_eq!(view.metrics[0].stats.len(), 3);
        assert_eq!(view.metrics[1].stats[0], stat("Citations", "99.5".to_string()));
    }

    #[test]
    fn test_blank_description_drops_overview() {
        let mut university = with_programs();
        university.description = "   ".to_string();
        let view = DetailView::from_university(&university);
        assert!(view.overview.is_none());
        assert_eq!(view.section_titles()[0], "Key Statistics");
    }
}

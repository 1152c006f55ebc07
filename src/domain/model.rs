use serde::{Deserialize, Serialize};

/// 大學記錄
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct University {
    pub id: u32,
    pub rank: u32,
    pub name: String,
    pub country: String,
    pub city: String,
    pub founded_year: i32,
    pub score: f64,
    pub student_count: u64,
    pub faculty_count: u64,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub majors: Option<Vec<Program>>,
    pub metrics: Metrics,
}

/// 學程 (major)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub name: String,
    pub description: String,
    pub degree: String,
    pub duration: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranking: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub academic_reputation: f64,
    pub employer_reputation: f64,
    pub faculty_student_ratio: f64,
    pub citations: f64,
    pub international_faculty: f64,
    pub international_students: f64,
    pub research_output: f64,
}

impl Metrics {
    /// Every indicator with its JSON name, in display order.
    pub fn indicators(&self) -> [(&'static str, f64); 7] {
        [
            ("academicReputation", self.academic_reputation),
            ("employerReputation", self.employer_reputation),
            ("facultyStudentRatio", self.faculty_student_ratio),
            ("citations", self.citations),
            ("internationalFaculty", self.international_faculty),
            ("internationalStudents", self.international_students),
            ("researchOutput", self.research_output),
        ]
    }
}

impl University {
    pub fn has_programs(&self) -> bool {
        self.majors.as_ref().is_some_and(|majors| !majors.is_empty())
    }
}

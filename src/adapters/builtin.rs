use crate::core::{Metrics, Program, Result, University, UniversitySource};
use async_trait::async_trait;

/// The dataset compiled into the binary; used when no data file is configured.
#[derive(Debug, Clone, Default)]
pub struct BuiltinSource;

#[async_trait]
impl UniversitySource for BuiltinSource {
    async fn load(&self) -> Result<Vec<University>> {
        Ok(builtin_universities())
    }

    fn describe(&self) -> String {
        "built-in dataset".to_string()
    }
}

#[allow(clippy::too_many_arguments)]
fn university(
    id: u32,
    name: &str,
    country: &str,
    city: &str,
    founded_year: i32,
    score: f64,
    student_count: u64,
    faculty_count: u64,
    color: &str,
    logo: Option<&str>,
    description: &str,
    metrics: [f64; 7],
) -> University {
    let [academic_reputation, employer_reputation, faculty_student_ratio, citations, international_faculty, international_students, research_output] =
        metrics;
    University {
        id,
        rank: id,
        name: name.to_string(),
        country: country.to_string(),
        city: city.to_string(),
        founded_year,
        score,
        student_count,
        faculty_count,
        color: color.to_string(),
        logo: logo.map(str::to_string),
        description: description.to_string(),
        majors: None,
        metrics: Metrics {
            academic_reputation,
            employer_reputation,
            faculty_student_ratio,
            citations,
            international_faculty,
            international_students,
            research_output,
        },
    }
}

fn program(
    name: &str,
    description: &str,
    degree: &str,
    duration: &str,
    requirements: &[&str],
    ranking: Option<u32>,
) -> Program {
    Program {
        name: name.to_string(),
        description: description.to_string(),
        degree: degree.to_string(),
        duration: duration.to_string(),
        requirements: requirements.iter().map(|r| r.to_string()).collect(),
        ranking,
    }
}

pub fn builtin_universities() -> Vec<University> {
    let mut mit = university(
        1,
        "Massachusetts Institute of Technology",
        "United States",
        "Cambridge",
        1861,
        100.0,
        11_520,
        3_069,
        "#A31F34",
        Some("/logos/mit.svg"),
        "A private research university known for its engineering, physical sciences and entrepreneurial culture.",
        [100.0, 100.0, 100.0, 100.0, 99.3, 86.8, 99.9],
    );
    mit.majors = Some(vec![
        program(
            "Computer Science and Engineering",
            "Foundations of computation, systems and artificial intelligence.",
            "Bachelor of Science",
            "4 years",
            &["Calculus I and II", "Physics I", "Introductory programming"],
            Some(1),
        ),
        program(
            "Mechanical Engineering",
            "Design, manufacturing and the mechanics of solids and fluids.",
            "Bachelor of Science",
            "4 years",
            &["Calculus I and II", "Physics I and II", "Chemistry"],
            Some(2),
        ),
        program(
            "Economics",
            "Microeconomic and macroeconomic theory with strong quantitative training.",
            "Bachelor of Science",
            "4 years",
            &["Calculus I", "Principles of microeconomics"],
            None,
        ),
    ]);

    let mut cambridge = university(
        2,
        "University of Cambridge",
        "United Kingdom",
        "Cambridge",
        1209,
        99.2,
        20_185,
        5_490,
        "#003B71",
        Some("/logos/cambridge.svg"),
        "A collegiate research university and one of the oldest universities in the English-speaking world.",
        [100.0, 100.0, 100.0, 84.6, 100.0, 95.8, 99.9],
    );
    cambridge.majors = Some(vec![
        program(
            "Natural Sciences",
            "A broad programme spanning the physical and biological sciences.",
            "Bachelor of Arts",
            "3 years",
            &["A*A*A at A-level", "Two science subjects", "Admissions assessment"],
            Some(1),
        ),
        program(
            "Mathematics",
            "Pure and applied mathematics through the Mathematical Tripos.",
            "Bachelor of Arts",
            "3 years",
            &["A*A*A at A-level", "Further Mathematics", "STEP papers"],
            Some(2),
        ),
    ]);

    let mut oxford = university(
        3,
        "University of Oxford",
        "United Kingdom",
        "Oxford",
        1096,
        98.9,
        26_945,
        6_750,
        "#002147",
        Some("/logos/oxford.svg"),
        "The oldest university in the English-speaking world, organised around its constituent colleges.",
        [100.0, 100.0, 100.0, 96.0, 99.5, 98.2, 100.0],
    );
    oxford.majors = Some(vec![program(
        "Philosophy, Politics and Economics",
        "An interdisciplinary degree combining three complementary disciplines.",
        "Bachelor of Arts",
        "3 years",
        &["AAA at A-level", "Thinking Skills Assessment"],
        Some(1),
    )]);

    let mut harvard = university(
        4,
        "Harvard University",
        "United States",
        "Cambridge",
        1636,
        98.3,
        23_731,
        4_646,
        "#A51C30",
        Some("/logos/harvard.svg"),
        "The oldest institution of higher learning in the United States, with a large research endowment.",
        [100.0, 100.0, 96.3, 100.0, 74.1, 69.0, 100.0],
    );
    harvard.majors = Some(vec![
        program(
            "Law",
            "Professional legal education with broad clinical opportunities.",
            "Juris Doctor",
            "3 years",
            &["Bachelor's degree", "LSAT or GRE score"],
            Some(1),
        ),
        program(
            "Medicine",
            "Doctor of Medicine pathway integrating research and clinical practice.",
            "Doctor of Medicine",
            "4 years",
            &["Bachelor's degree", "MCAT score", "Clinical experience"],
            Some(1),
        ),
    ]);

    let stanford = university(
        5,
        "Stanford University",
        "United States",
        "Stanford",
        1885,
        98.1,
        17_249,
        4_725,
        "#8C1515",
        Some("/logos/stanford.svg"),
        "A private research university in Silicon Valley with strong ties to the technology industry.",
        [100.0, 100.0, 100.0, 99.9, 67.2, 51.2, 100.0],
    );

    let imperial = university(
        6,
        "Imperial College London",
        "United Kingdom",
        "London",
        1907,
        97.5,
        22_000,
        3_930,
        "#003E74",
        Some("/logos/imperial.svg"),
        "A public research university focused on science, engineering, medicine and business.",
        [98.3, 99.5, 98.2, 93.9, 100.0, 99.6, 97.4],
    );

    let eth = university(
        7,
        "ETH Zürich",
        "Switzerland",
        "Zürich",
        1855,
        93.9,
        24_535,
        2_719,
        "#1F407A",
        None,
        "The Swiss Federal Institute of Technology, renowned for science and engineering research.",
        [98.7, 87.2, 67.9, 97.9, 100.0, 98.6, 95.0],
    );

    let nus = university(
        8,
        "National University of Singapore",
        "Singapore",
        "Singapore",
        1905,
        93.7,
        39_128,
        5_261,
        "#EF7C00",
        Some("/logos/nus.svg"),
        "Singapore's flagship university, with a global approach to education and research.",
        [99.5, 91.2, 68.7, 93.6, 100.0, 88.8, 99.8],
    );

    let ucl = university(
        9,
        "UCL",
        "United Kingdom",
        "London",
        1826,
        91.6,
        42_000,
        7_800,
        "#500778",
        None,
        "A multidisciplinary public research university in the heart of London.",
        [99.5, 98.3, 95.9, 73.7, 99.3, 100.0, 99.8],
    );

    let mut caltech = university(
        10,
        "California Institute of Technology",
        "United States",
        "Pasadena",
        1891,
        90.9,
        2_397,
        953,
        "#FF6C0C",
        Some("https://www.caltech.edu/img/caltech-logo.svg"),
        "A small private research institute with an outsized record in physics and engineering.",
        [96.5, 83.6, 100.0, 100.0, 100.0, 86.5, 86.1],
    );
    caltech.majors = Some(Vec::new());

    vec![
        mit, cambridge, oxford, harvard, stanford, imperial, eth, nus, ucl, caltech,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_builtin_source_loads_ten_records() {
        let records = BuiltinSource.load().await.unwrap();
        assert_eq!(records.len(), 10);
        assert_eq!(BuiltinSource.describe(), "built-in dataset");
    }

    #[test]
    fn test_ids_match_ranks() {
        for university in builtin_universities() {
            assert_eq!(university.id, university.rank);
        }
    }
}

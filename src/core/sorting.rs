use crate::domain::model::University;
use std::cmp::Ordering;
use std::fmt;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// 可排序欄位；`as_str` 與 query string 中的名稱一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortField {
    #[default]
    Rank,
    Name,
    Country,
    Score,
    StudentCount,
    FacultyCount,
    FoundedYear,
}

impl SortField {
    pub const ALL: [SortField; 7] = [
        SortField::Rank,
        SortField::Name,
        SortField::Country,
        SortField::Score,
        SortField::StudentCount,
        SortField::FacultyCount,
        SortField::FoundedYear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Rank => "rank",
            SortField::Name => "name",
            SortField::Country => "country",
            SortField::Score => "score",
            SortField::StudentCount => "studentCount",
            SortField::FacultyCount => "facultyCount",
            SortField::FoundedYear => "foundedYear",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == value)
    }

    /// Ascending comparison of two records on this field.
    pub fn compare(&self, a: &University, b: &University) -> Ordering {
        match self {
            SortField::Rank => a.rank.cmp(&b.rank),
            SortField::Name => collate(&a.name, &b.name),
            SortField::Country => collate(&a.country, &b.country),
            SortField::Score => a.score.total_cmp(&b.score),
            SortField::StudentCount => a.student_count.cmp(&b.student_count),
            SortField::FacultyCount => a.faculty_count.cmp(&b.faculty_count),
            SortField::FoundedYear => a.founded_year.cmp(&b.founded_year),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The requested `(field, direction)` pair. Always derived from request
/// parameters; never held between requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// 由 `sort` / `order` 參數建立；缺少或無法辨識的值回退為預設值
    pub fn from_params(sort: Option<&str>, order: Option<&str>) -> Self {
        let field = sort.and_then(SortField::parse).unwrap_or_default();
        let direction = order.and_then(SortDirection::parse).unwrap_or_default();
        Self { field, direction }
    }

    /// State produced by selecting `field` from the current state.
    pub fn toggle(&self, field: SortField) -> Self {
        if field == self.field {
            Self::new(field, self.direction.flipped())
        } else {
            Self::new(field, SortDirection::Asc)
        }
    }

    pub fn query_string(&self) -> String {
        format!("?sort={}&order={}", self.field, self.direction)
    }

    pub fn compare(&self, a: &University, b: &University) -> Ordering {
        self.direction.apply(self.field.compare(a, b))
    }
}

/// Returns a new ordering of `universities`; the input slice is left untouched.
pub fn sort_universities(universities: &[University], spec: SortSpec) -> Vec<&University> {
    let mut sorted: Vec<&University> = universities.iter().collect();
    sorted.sort_by(|a, b| spec.compare(a, b));
    sorted
}

/// Multi-level text comparison: base letters, then accents, then case
/// (lowercase first), then exact code points so the order stays total.
pub fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented_letters(a).cmp(accented_letters(b)))
        .then_with(|| case_flags(a).cmp(case_flags(b)))
        .then_with(|| a.cmp(b))
}

/// NFD decomposition with combining marks stripped, lower-cased.
fn base_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(expand_letter)
        .flat_map(char::to_lowercase)
}

fn accented_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd().flat_map(char::to_lowercase)
}

fn case_flags(text: &str) -> impl Iterator<Item = bool> + '_ {
    text.chars().map(char::is_uppercase)
}

// Letters with no canonical decomposition
fn expand_letter(c: char) -> impl Iterator<Item = char> {
    let (first, second) = match c {
        'Ł' | 'ł' => ('l', None),
        'Ø' | 'ø' => ('o', None),
        'Đ' | 'đ' => ('d', None),
        'Ħ' | 'ħ' => ('h', None),
        'ı' => ('i', None),
        'ß' => ('s', Some('s')),
        'Æ' | 'æ' => ('a', Some('e')),
        'Œ' | 'œ' => ('o', Some('e')),
        'Þ' | 'þ' => ('t', Some('h')),
        other => (other, None),
    };
    std::iter::once(first).chain(second)
}

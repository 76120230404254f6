// Canned chat content. Lookups keyed on the academic stream match
// case-insensitively on a substring, first entry wins ("Computer Science" is
// listed before "Science").

pub const DEFAULT_STREAM: &str = "General";
pub const DEFAULT_INTERESTS: &[&str] = &["Technology", "Innovation"];
pub const DEFAULT_SKILLS: &[&str] = &["Problem Solving", "Communication"];

const PRIORITY_SKILLS: &[(&str, &str)] = &[
    ("Computer Science", "Advanced Programming, System Design, Data Structures"),
    ("Engineering", "Technical Problem Solving, Project Management, Innovation"),
    ("Business", "Data Analysis, Strategic Thinking, Leadership"),
    ("Science", "Research Methodology, Data Analysis, Technical Writing"),
];

const CERTIFICATIONS: &[(&str, &str)] = &[
    (
        "Computer Science",
        "• AWS Cloud Practitioner\n• Google Cloud Associate\n• Microsoft Azure Fundamentals",
    ),
    (
        "Engineering",
        "• PMP Certification\n• Six Sigma\n• AWS Solutions Architect",
    ),
    (
        "Business",
        "• Google Analytics\n• HubSpot Marketing\n• Salesforce Admin",
    ),
];

const EXPECTED_SALARY: &[(&str, &str)] = &[
    ("Computer Science", "4-8 LPA"),
    ("Engineering", "3.5-7 LPA"),
    ("Business", "3-6 LPA"),
    ("Science", "3-5.5 LPA"),
];

const INTERVIEW_FOCUS: &[(&str, &str)] = &[
    ("Computer Science", "Coding problems, system design, technical concepts"),
    ("Engineering", "Problem-solving, project experience, technical aptitude"),
    ("Business", "Case studies, analytical thinking, communication skills"),
];

pub const CAREER_TIPS: &[&str] = &[
    "Networking is key - most jobs are never publicly advertised!",
    "Update your LinkedIn weekly to stay visible to recruiters",
    "Learn one new skill every quarter to stay relevant",
    "Build projects that solve real problems, not just tutorials",
    "Practice problem solving daily, even if you're not a developer",
];

pub const MARKET_INSIGHTS: &[&str] = &[
    "AI/ML hiring in India keeps growing faster than almost any other field",
    "Remote and hybrid roles have widened opportunities beyond metro cities",
    "Full-stack developers remain among the most in-demand tech professionals",
    "Data Science is still one of the best-paying fields for freshers",
    "Soft skills are becoming as important as technical skills",
];

pub const SUCCESS_TIPS: &[&str] = &[
    "Document your achievements with numbers (improved efficiency by X%)",
    "Seek feedback regularly and act on it to accelerate growth",
    "Choose your first job for learning, not just salary",
    "Build a personal brand through consistent content sharing",
    "Always have a 90-day learning goal to stay motivated",
];

fn lookup(table: &[(&str, &'static str)], stream: &str, fallback: &'static str) -> &'static str {
    let stream = stream.to_lowercase();
    table
        .iter()
        .find(|(key, _)| stream.contains(&key.to_lowercase()))
        .map(|(_, value)| *value)
        .unwrap_or(fallback)
}

pub fn priority_skills(stream: &str) -> &'static str {
    lookup(
        PRIORITY_SKILLS,
        stream,
        "Problem Solving, Communication, Technical Skills",
    )
}

pub fn certifications(stream: &str) -> &'static str {
    lookup(
        CERTIFICATIONS,
        stream,
        "• Google IT Support\n• Microsoft Office Specialist\n• Digital Marketing Certification",
    )
}

pub fn expected_salary(stream: &str) -> &'static str {
    lookup(EXPECTED_SALARY, stream, "3-6 LPA")
}

pub fn interview_focus(stream: &str) -> &'static str {
    lookup(
        INTERVIEW_FOCUS,
        stream,
        "Problem-solving, communication, relevant projects",
    )
}

/// First technology to focus on, picked from the user's interests.
pub fn recommended_tech(interests: &[String]) -> &'static str {
    let has = |needle: &str| {
        interests
            .iter()
            .any(|i| i.to_lowercase().contains(needle))
    };
    if has("technology") || has("programming") {
        "Python and JavaScript"
    } else if has("data") || has("analytics") {
        "Python and SQL"
    } else {
        "Python"
    }
}

//! Skill Taxonomy: the fixed dictionary of canonical skills and free-text patterns.
//!
//! Both tables are process-wide read-only data. Canonical names keep their display
//! case; every comparison against them is case-insensitive.

/// Category → canonical skill names, in declaration order.
pub static SKILL_TAXONOMY: &[(&str, &[&str])] = &[
    (
        "programming_languages",
        &[
            "Python", "Java", "JavaScript", "TypeScript", "C++", "C#", "Ruby", "PHP", "Swift",
            "Kotlin", "Golang", "Rust", "Scala", "Perl", "Dart",
        ],
    ),
    (
        "web_frontend",
        &[
            "HTML", "CSS", "React", "Angular", "Vue.js", "Next.js", "Redux", "jQuery", "Bootstrap",
            "Tailwind", "Sass", "Webpack",
        ],
    ),
    (
        "web_backend",
        &[
            "Node.js", "Express", "Flask", "Django", "FastAPI", "Spring Boot", "Laravel",
            "Ruby on Rails", "ASP.NET", "GraphQL", "REST API", "Microservices",
        ],
    ),
    (
        "databases",
        &[
            "SQL", "MySQL", "PostgreSQL", "MongoDB", "SQLite", "Redis", "Oracle", "Firebase",
            "DynamoDB", "Elasticsearch", "Cassandra",
        ],
    ),
    (
        "cloud_devops",
        &[
            "AWS", "Azure", "Google Cloud", "Docker", "Kubernetes", "Terraform", "Jenkins",
            "CI/CD", "Linux", "Nginx", "Heroku",
        ],
    ),
    (
        "data_science",
        &[
            "Machine Learning", "Deep Learning", "TensorFlow", "PyTorch", "Pandas", "NumPy",
            "Scikit-learn", "Data Analysis", "Tableau", "Power BI", "Excel",
        ],
    ),
    (
        "tools",
        &[
            "Git", "GitHub", "GitLab", "Jira", "Postman", "Figma", "VS Code", "Bitbucket",
        ],
    ),
    (
        "practices",
        &[
            "Agile", "Scrum", "Unit Testing", "Data Structures", "Algorithms",
            "Object-Oriented Programming", "Problem Solving", "Communication", "Teamwork",
            "Leadership",
        ],
    ),
];

/// Lowercase free-text patterns, matched like canonical skills and title-cased
/// before inclusion. Order is priority order for `required_skills`.
pub static SKILL_PATTERNS: &[&str] = &[
    "html",
    "css",
    "javascript",
    "react",
    "node.js",
    "python",
    "rest api",
    "mysql",
    "mongodb",
    "git",
    "github",
    "flask",
    "django",
    "typescript",
    "express",
    "sql",
    "full stack",
    "front end",
    "back end",
    "web development",
    "responsive design",
    "version control",
    "api integration",
    "database design",
    "cloud computing",
    "software development",
];

/// Every canonical skill across all categories, deduplicated case-insensitively.
/// The first declaration wins, so the result is stable across runs.
pub fn all_skills() -> Vec<&'static str> {
    let mut skills: Vec<&'static str> = Vec::new();
    for (_, category) in SKILL_TAXONOMY {
        for &skill in category.iter() {
            if !skills.iter().any(|s| s.eq_ignore_ascii_case(skill)) {
                skills.push(skill);
            }
        }
    }
    skills
}

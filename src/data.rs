//! The site's content: one static dataset the section components render
//! from, plus the few values derived from it.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

pub struct Personal {
    pub name: &'static str,
    pub initials: &'static str,
    pub title: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    /// Date of birth as (year, month, day).
    pub birth: (i32, u32, u32),
    pub profile_image: &'static str,
}

pub static PERSONAL: Personal = Personal {
    name: "Muhammad Hassan Khan",
    initials: "MHK",
    title: "Aspiring IT Expert | Web Developer | AI Enthusiast",
    email: "hassanrustam009@gmail.com",
    phone: "0315-8335369",
    location: "Pakistan",
    birth: (2009, 11, 4),
    profile_image: "https://images.pexels.com/photos/1043471/pexels-photo-1043471.jpeg?auto=compress&cs=tinysrgb&w=500&h=500&dpr=2",
};

/// Rotating hero headline roles, in display order.
pub static ROLES: [&str; 4] = [
    "Aspiring IT Expert",
    "Web Developer",
    "AI Enthusiast",
    "Problem Solver",
];

pub struct Education {
    pub institution: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
    pub status: &'static str,
}

pub static EDUCATION: [Education; 1] = [Education {
    institution: "The Citizens Foundation",
    degree: "Matriculation",
    period: "Expected 2025",
    status: "In Progress",
}];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Frontend,
    Programming,
    AiMl,
    Tools,
    Integration,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Frontend,
        SkillCategory::Programming,
        SkillCategory::AiMl,
        SkillCategory::Tools,
        SkillCategory::Integration,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Programming => "Programming",
            SkillCategory::AiMl => "AI/ML",
            SkillCategory::Tools => "Tools",
            SkillCategory::Integration => "Integration",
        }
    }
}

pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0 to 100.
    pub level: u32,
    pub category: SkillCategory,
}

pub static SKILLS: [Skill; 6] = [
    Skill {
        name: "Web Designing",
        level: 85,
        category: SkillCategory::Frontend,
    },
    Skill {
        name: "JavaScript",
        level: 80,
        category: SkillCategory::Programming,
    },
    Skill {
        name: "HTML/CSS",
        level: 90,
        category: SkillCategory::Frontend,
    },
    Skill {
        name: "Chatbot Design (Dialogflow)",
        level: 75,
        category: SkillCategory::AiMl,
    },
    Skill {
        name: "VS Code",
        level: 95,
        category: SkillCategory::Tools,
    },
    Skill {
        name: "Kommunicate Integration",
        level: 70,
        category: SkillCategory::Integration,
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub live_demo: &'static str,
    pub github: &'static str,
}

pub static PROJECTS: [Project; 3] = [
    Project {
        title: "Saylani Welfare Chatbot",
        description: "AI-powered chatbot built with Dialogflow to assist users with Saylani Welfare services and inquiries.",
        image: "https://images.pexels.com/photos/8386440/pexels-photo-8386440.jpeg?auto=compress&cs=tinysrgb&w=600",
        technologies: &["Dialogflow", "JavaScript", "Kommunicate"],
        live_demo: "#",
        github: "#",
    },
    Project {
        title: "Saylani Welfare Website",
        description: "Modern responsive website for Saylani Welfare with user-friendly interface and integrated chatbot support.",
        image: "https://images.pexels.com/photos/326503/pexels-photo-326503.jpeg?auto=compress&cs=tinysrgb&w=600",
        technologies: &["HTML", "CSS", "JavaScript", "Responsive Design"],
        live_demo: "#",
        github: "#",
    },
    Project {
        title: "Portfolio Website",
        description: "This AI-powered personal portfolio website with modern UI/UX, animations, and responsive design.",
        image: "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=600",
        technologies: &["Rust", "Leptos", "Tailwind CSS"],
        live_demo: "#",
        github: "#",
    },
];

pub static CURRENT_LEARNING: [&str; 4] = [
    "AI Chatbot Development",
    "Advanced Dialogflow",
    "Kommunicate Integration",
    "Machine Learning Basics",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageLevel {
    Native,
    Fluent,
    Basic,
}

impl LanguageLevel {
    pub fn label(self) -> &'static str {
        match self {
            LanguageLevel::Native => "Native",
            LanguageLevel::Fluent => "Fluent",
            LanguageLevel::Basic => "Basic",
        }
    }
}

pub struct Language {
    pub name: &'static str,
    pub level: LanguageLevel,
}

pub static LANGUAGES: [Language; 3] = [
    Language {
        name: "English",
        level: LanguageLevel::Fluent,
    },
    Language {
        name: "Urdu",
        level: LanguageLevel::Native,
    },
    Language {
        name: "German",
        level: LanguageLevel::Basic,
    },
];

pub static SOFT_SKILLS: [&str; 5] = [
    "Communication",
    "Teamwork",
    "Problem-solving",
    "Leadership",
    "Time Management",
];

pub struct Reference {
    pub name: &'static str,
    pub role: &'static str,
    pub relationship: &'static str,
}

pub static REFERENCES: [Reference; 1] = [Reference {
    name: "Sir Hammad",
    role: "Mentor",
    relationship: "Technical Mentor",
}];

pub static GOALS: [&str; 4] = [
    "Become #1 IT Expert",
    "Master AI & Machine Learning",
    "Travel the World",
    "Build Innovative Solutions",
];

pub fn birth_date() -> NaiveDate {
    let (year, month, day) = PERSONAL.birth;
    NaiveDate::from_ymd_opt(year, month, day).expect("hardcoded birth date should be valid")
}

/// Age in completed years on `today`. The birthday itself already counts
/// as completed.
pub fn age_on(today: NaiveDate) -> i32 {
    let born = birth_date();
    let mut age = today.year() - born.year();
    if (today.month(), today.day()) < (born.month(), born.day()) {
        age -= 1;
    }
    age
}

pub fn skills_in(category: SkillCategory) -> Vec<&'static Skill> {
    SKILLS.iter().filter(|s| s.category == category).collect()
}

/// Mean proficiency across all skills, rounded to the nearest point.
pub fn average_skill_level() -> u32 {
    let total: u32 = SKILLS.iter().map(|s| s.level).sum();
    (total as f64 / SKILLS.len() as f64).round() as u32
}

/// Number of distinct technologies across all projects.
pub fn technology_count() -> usize {
    PROJECTS
        .iter()
        .flat_map(|p| p.technologies.iter().copied())
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_counts_completed_years_only() {
        let day_before = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
        assert_eq!(age_on(day_before), 15);
        let birthday = NaiveDate::from_ymd_opt(2025, 11, 4).unwrap();
        assert_eq!(age_on(birthday), 16);
        let day_after = NaiveDate::from_ymd_opt(2025, 11, 5).unwrap();
        assert_eq!(age_on(day_after), 16);
    }

    #[test]
    fn test_age_handles_earlier_month_and_day() {
        let early_in_year = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        assert_eq!(age_on(early_in_year), 16);
        let late_in_year = NaiveDate::from_ymd_opt(2026, 12, 1).unwrap();
        assert_eq!(age_on(late_in_year), 17);
    }

    #[test]
    fn test_category_grouping_covers_every_skill_once() {
        let total: usize = SkillCategory::ALL
            .iter()
            .map(|c| skills_in(*c).len())
            .sum();
        assert_eq!(total, SKILLS.len());
    }

    #[test]
    fn test_frontend_category_groups_both_frontend_skills() {
        let frontend = skills_in(SkillCategory::Frontend);
        assert_eq!(frontend.len(), 2);
        assert!(frontend.iter().any(|s| s.name == "Web Designing"));
        assert!(frontend.iter().any(|s| s.name == "HTML/CSS"));
    }

    #[test]
    fn test_average_level_rounds_to_nearest() {
        // 85 + 80 + 90 + 75 + 95 + 70 = 495, over 6 skills = 82.5
        assert_eq!(average_skill_level(), 83);
    }

    #[test]
    fn test_skill_levels_stay_in_range() {
        for skill in &SKILLS {
            assert!(skill.level <= 100, "{} is out of range", skill.name);
        }
    }

    #[test]
    fn test_technology_count_ignores_duplicates() {
        // JavaScript appears in two projects but counts once
        assert_eq!(technology_count(), 9);
    }
}

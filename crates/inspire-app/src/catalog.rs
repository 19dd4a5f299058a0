// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CategoryGroup {
    Core,
    Specialized,
    Lifestyle,
    MoodBased,
}

impl CategoryGroup {
    pub const ALL: [Self; 4] = [Self::Core, Self::Specialized, Self::Lifestyle, Self::MoodBased];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Core => "Core",
            Self::Specialized => "Specialized",
            Self::Lifestyle => "Lifestyle",
            Self::MoodBased => "Mood-Based",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CategoryRecord {
    pub name: &'static str,
    pub description: &'static str,
    pub group: CategoryGroup,
}

impl CategoryRecord {
    const fn new(name: &'static str, description: &'static str, group: CategoryGroup) -> Self {
        Self {
            name,
            description,
            group,
        }
    }
}

/// A run of categories sharing one group label, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection {
    pub group: CategoryGroup,
    pub categories: Vec<CategoryRecord>,
}

pub const CATEGORIES: [CategoryRecord; 19] = [
    CategoryRecord::new(
        "Innovation & Creativity",
        "Breakthrough thinking and creative problem-solving",
        CategoryGroup::Core,
    ),
    CategoryRecord::new(
        "Learning & Growth",
        "Motivation for continuous learning and skill development",
        CategoryGroup::Core,
    ),
    CategoryRecord::new(
        "Technology & Future",
        "Inspirational thoughts about tech advancement and possibilities",
        CategoryGroup::Core,
    ),
    CategoryRecord::new(
        "Career & Success",
        "Professional motivation and achievement-focused quotes",
        CategoryGroup::Core,
    ),
    CategoryRecord::new(
        "Persistence & Resilience",
        "Overcoming challenges and bouncing back from failures",
        CategoryGroup::Core,
    ),
    CategoryRecord::new(
        "Leadership",
        "Leading teams and driving change",
        CategoryGroup::Core,
    ),
    CategoryRecord::new(
        "Entrepreneurship",
        "Startup motivation and business building inspiration",
        CategoryGroup::Specialized,
    ),
    CategoryRecord::new(
        "Data & Analytics",
        "Quotes about insights, patterns, and data-driven decisions",
        CategoryGroup::Specialized,
    ),
    CategoryRecord::new(
        "Coding & Development",
        "Programming and technical development motivation",
        CategoryGroup::Specialized,
    ),
    CategoryRecord::new(
        "AI & Machine Learning",
        "Specific to artificial intelligence and ML journey",
        CategoryGroup::Specialized,
    ),
    CategoryRecord::new(
        "Digital Transformation",
        "About adapting to and embracing technological change",
        CategoryGroup::Specialized,
    ),
    CategoryRecord::new(
        "Problem Solving",
        "Creative approaches to challenges and solutions",
        CategoryGroup::Specialized,
    ),
    CategoryRecord::new(
        "Daily Motivation",
        "General encouragement for everyday challenges",
        CategoryGroup::Lifestyle,
    ),
    CategoryRecord::new(
        "Focus & Productivity",
        "Getting things done and maintaining concentration",
        CategoryGroup::Lifestyle,
    ),
    CategoryRecord::new(
        "Teamwork & Collaboration",
        "Working effectively with others",
        CategoryGroup::Lifestyle,
    ),
    CategoryRecord::new(
        "Change & Adaptation",
        "Embracing transformation and new opportunities",
        CategoryGroup::Lifestyle,
    ),
    CategoryRecord::new(
        "Monday Motivation",
        "Week starter energy",
        CategoryGroup::MoodBased,
    ),
    CategoryRecord::new(
        "Breakthrough Moments",
        "For when you need a push",
        CategoryGroup::MoodBased,
    ),
    CategoryRecord::new(
        "Confidence Boost",
        "Self-belief and empowerment",
        CategoryGroup::MoodBased,
    ),
];

pub fn categories() -> &'static [CategoryRecord] {
    &CATEGORIES
}

pub fn grouped() -> Vec<CategorySection> {
    group_categories(categories())
}

/// Groups appear in first-occurrence order; members keep their input order.
pub fn group_categories(records: &[CategoryRecord]) -> Vec<CategorySection> {
    let mut sections: Vec<CategorySection> = Vec::new();
    for record in records {
        match sections
            .iter_mut()
            .find(|section| section.group == record.group)
        {
            Some(section) => section.categories.push(*record),
            None => sections.push(CategorySection {
                group: record.group,
                categories: vec![*record],
            }),
        }
    }
    sections
}

pub fn find_category(name: &str) -> Option<CategoryRecord> {
    if let Some(exact) = CATEGORIES.iter().find(|record| record.name == name) {
        return Some(*exact);
    }

    let wanted = name.trim();
    CATEGORIES
        .iter()
        .find(|record| record.name.eq_ignore_ascii_case(wanted))
        .copied()
}

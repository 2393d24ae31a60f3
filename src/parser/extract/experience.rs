use itertools::Itertools;

use crate::model::{EducationEntry, ExperienceEntry};
use crate::parser::blocks;

/// One ExperienceEntry per `###` block, in heading order. No block is
/// discarded however sparse its fields.
pub fn extract_experience(lines: &[String]) -> Vec<ExperienceEntry> {
    blocks::collect_entry_blocks(lines)
        .into_iter()
        .map(|block| {
            let fields = blocks::split_heading_fields(&block.heading);
            let (dates, highlights) = blocks::parse_entry_body(&block.body);
            ExperienceEntry {
                role: fields.primary,
                company: fields.secondary,
                dates,
                location: String::new(),
                summary: String::new(),
                highlights,
            }
        })
        .collect()
}

/// Education reuses the same block grammar; bullets are joined into a
/// single summary instead of kept as highlights.
pub fn extract_education(lines: &[String]) -> Vec<EducationEntry> {
    blocks::collect_entry_blocks(lines)
        .into_iter()
        .map(|block| {
            let fields = blocks::split_heading_fields(&block.heading);
            let (dates, bullets) = blocks::parse_entry_body(&block.body);
            EducationEntry {
                degree: fields.primary,
                school: fields.secondary,
                dates,
                location: String::new(),
                summary: bullets.iter().join(" • "),
            }
        })
        .collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(src: &[&str]) -> Vec<String> {
        src.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_experience_block() {
        let entries = extract_experience(&lines(&[
            "### Acme: Engineer",
            "2019 – Present",
            "- built the billing system",
            "- mentored two juniors",
        ]));
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.company, "Acme");
        assert_eq!(e.role, "Engineer");
        assert_eq!(e.dates.start, "2019");
        assert_eq!(e.dates.end, "Present");
        assert_eq!(e.highlights.len(), 2);
        assert_eq!(e.highlights[0], "built the billing system");
    }

    #[test]
    fn entries_preserve_heading_order() {
        let entries = extract_experience(&lines(&[
            "### Zeta: Later role",
            "### Alpha: Earlier role",
        ]));
        assert_eq!(entries[0].company, "Zeta");
        assert_eq!(entries[1].company, "Alpha");
    }

    #[test]
    fn sparse_entry_kept() {
        let entries = extract_experience(&lines(&["### Freelance"]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].role, "Freelance");
        assert_eq!(entries[0].company, "");
        assert!(entries[0].highlights.is_empty());
    }

    #[test]
    fn education_joins_bullets_into_summary() {
        let entries = extract_education(&lines(&[
            "### MIT: PhD in Computer Science",
            "2010 – 2015",
            "- Thesis on parsers",
            "- Graduated with honors",
        ]));
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.school, "MIT");
        assert_eq!(e.degree, "PhD in Computer Science");
        assert_eq!(e.summary, "Thesis on parsers • Graduated with honors");
    }

    #[test]
    fn education_at_pattern() {
        let entries = extract_education(&lines(&["### BSc Physics at Leiden University", "2004 to 2008"]));
        assert_eq!(entries[0].degree, "BSc Physics");
        assert_eq!(entries[0].school, "Leiden University");
        assert_eq!(entries[0].dates.end, "2008");
    }
}

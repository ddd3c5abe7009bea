use serde::Serialize;

use super::section::Section;
use crate::errors::{ContrastError, Result};

/// Navigation-only mirror of a [`Section`]
///
/// Index entries carry no rows and no colors. The Nth entry at any level
/// corresponds to the Nth section at the same level of the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexSection {
    title: String,
    subsections: Vec<IndexSection>,
}

impl IndexSection {
    /// # Errors
    /// * `EmptyTitle` - If `title` is blank
    pub fn new(title: impl Into<String>, subsections: Vec<IndexSection>) -> Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ContrastError::EmptyTitle {
                entity: "Index entry",
            });
        }
        Ok(Self { title, subsections })
    }

    /// Derive the index entry for `section`, keeping `depth` levels of children
    ///
    /// `depth == 0` yields a bare entry with the section's title. The result
    /// always corresponds to `section` by construction.
    pub fn project(section: &Section, depth: usize) -> Self {
        let subsections = if depth == 0 {
            Vec::new()
        } else {
            section
                .subsections()
                .iter()
                .map(|s| IndexSection::project(s, depth - 1))
                .collect()
        };
        Self {
            title: section.title().to_string(),
            subsections,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subsections(&self) -> &[IndexSection] {
        &self.subsections
    }

    /// Number of levels below this entry
    pub fn depth(&self) -> usize {
        self.subsections
            .iter()
            .map(|s| 1 + s.depth())
            .max()
            .unwrap_or(0)
    }
}

/// Check that `index` is positionally parallel to `sections`
///
/// At each level the titles must match pair-wise. The index may stop early
/// (an entry with no children while its section has some), but when it lists
/// children it must list all of them. The top level must match in length.
///
/// # Errors
/// * `IndexCountMismatch` - If a level lists a different number of entries
/// * `IndexTitleMismatch` - If titles at the same position differ
pub fn check_alignment(index: &[IndexSection], sections: &[Section]) -> Result<()> {
    check_level(index, sections, "sections")
}

fn check_level(index: &[IndexSection], sections: &[Section], path: &str) -> Result<()> {
    if index.len() != sections.len() {
        return Err(ContrastError::IndexCountMismatch {
            path: path.to_string(),
            index_len: index.len(),
            body_len: sections.len(),
        });
    }

    for (i, (entry, section)) in index.iter().zip(sections).enumerate() {
        let here = format!("{}[{}]", path, i);
        if entry.title() != section.title() {
            return Err(ContrastError::IndexTitleMismatch {
                path: here,
                index_title: entry.title().to_string(),
                section_title: section.title().to_string(),
            });
        }
        if !entry.subsections().is_empty() {
            check_level(entry.subsections(), section.subsections(), &here)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> Vec<Section> {
        let inner = Section::new("Bucket", vec![], vec![]).unwrap();
        let deeper = Section::new("Params", vec![], vec![]).unwrap();
        let object = Section::new("Object", vec![], vec![deeper]).unwrap();
        vec![
            Section::new("Types", vec![], vec![inner, object]).unwrap(),
            Section::new("Commands", vec![], vec![]).unwrap(),
        ]
    }

    #[test]
    fn test_projection_depth_zero_has_no_children() {
        let sections = body();
        let entry = IndexSection::project(&sections[0], 0);

        assert_eq!(entry.title(), "Types");
        assert!(entry.subsections().is_empty());
    }

    #[test]
    fn test_projection_truncates_at_depth() {
        let sections = body();
        let entry = IndexSection::project(&sections[0], 1);

        assert_eq!(entry.subsections().len(), 2);
        assert_eq!(entry.subsections()[1].title(), "Object");
        assert!(entry.subsections()[1].subsections().is_empty());
        assert_eq!(entry.depth(), 1);
    }

    #[test]
    fn test_projected_index_is_aligned() {
        let sections = body();
        let index: Vec<_> = sections
            .iter()
            .map(|s| IndexSection::project(s, 5))
            .collect();

        assert!(check_alignment(&index, &sections).is_ok());
    }

    #[test]
    fn test_title_mismatch_reports_path() {
        let sections = body();
        let index = vec![
            IndexSection::new(
                "Types",
                vec![
                    IndexSection::new("Bucket", vec![]).unwrap(),
                    IndexSection::new("Job", vec![]).unwrap(),
                ],
            )
            .unwrap(),
            IndexSection::new("Commands", vec![]).unwrap(),
        ];

        match check_alignment(&index, &sections) {
            Err(ContrastError::IndexTitleMismatch {
                path,
                index_title,
                section_title,
            }) => {
                assert_eq!(path, "sections[0][1]");
                assert_eq!(index_title, "Job");
                assert_eq!(section_title, "Object");
            }
            other => panic!("expected title mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_partial_children_rejected() {
        let sections = body();
        let index = vec![
            IndexSection::new("Types", vec![IndexSection::new("Bucket", vec![]).unwrap()])
                .unwrap(),
            IndexSection::new("Commands", vec![]).unwrap(),
        ];

        assert!(matches!(
            check_alignment(&index, &sections),
            Err(ContrastError::IndexCountMismatch {
                index_len: 1,
                body_len: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_top_level_count_must_match() {
        let sections = body();
        let index = vec![IndexSection::new("Types", vec![]).unwrap()];

        assert!(matches!(
            check_alignment(&index, &sections),
            Err(ContrastError::IndexCountMismatch { .. })
        ));
    }
}

//! Command-line query classification.
//!
//! The `open` command accepts the same argument shapes as `man`:
//!
//! - no arguments: the index page
//! - `/path/to/page.md`: a document inside the corpus
//! - `page`: the first section containing a page of that name
//! - `section page`: a page directly inside a section

use std::{
    fmt,
    path::{Component, Path, PathBuf},
};

use crate::{CorpusLayout, LocatorError, SectionNumber};

/// Maximum number of query arguments.
pub const MAX_QUERY_ARGS: usize = 2;

/// A classified command-line query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// No arguments: the well-known index page.
    Index,
    /// An absolute path to a document inside the corpus.
    Document(PathBuf),
    /// A bare page name, searched for in every section.
    Name(String),
    /// A page name inside a specific section.
    SectionPage {
        /// Section to look in.
        section: SectionNumber,
        /// Page name.
        name: String,
    },
}

impl Query {
    /// Classifies command-line arguments.
    ///
    /// More than two arguments is rejected before anything else is inspected. A single
    /// argument is treated as a document path only if it is absolute, lies under the corpus
    /// root and carries the document extension; anything else is a page name.
    pub fn parse<A: AsRef<str>>(args: &[A], layout: &CorpusLayout) -> Result<Self, LocatorError> {
        match args {
            [] => Ok(Self::Index),
            [single] => {
                let single = single.as_ref();
                let path = normalize(Path::new(single));
                if path.is_absolute() && layout.is_corpus_document(&path) {
                    Ok(Self::Document(path))
                } else {
                    Ok(Self::Name(single.to_string()))
                }
            }
            [section, name] => Ok(Self::SectionPage {
                section: SectionNumber::parse(section.as_ref())?,
                name: name.as_ref().to_string(),
            }),
            _ => Err(LocatorError::QueryTooLong { count: args.len() }),
        }
    }
}

/// Removes `.` components and folds `..` into its parent, without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index => write!(f, "index page"),
            Self::Document(path) => write!(f, "{}", path.display()),
            Self::Name(name) => write!(f, "{name}"),
            Self::SectionPage { section, name } => write!(f, "{section} {name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> CorpusLayout {
        CorpusLayout::new("/corpus", "md")
    }

    #[test]
    fn no_arguments_is_index() {
        let args: [&str; 0] = [];
        assert_eq!(Query::parse(&args, &layout()).unwrap(), Query::Index);
    }

    #[test]
    fn corpus_path_is_document() {
        let query = Query::parse(&["/corpus/man1/ls.md"], &layout()).unwrap();
        assert_eq!(query, Query::Document(PathBuf::from("/corpus/man1/ls.md")));
    }

    #[test]
    fn dotted_corpus_path_is_normalized() {
        let query = Query::parse(&["/corpus/man1/../man3/./printf.md"], &layout()).unwrap();
        assert_eq!(
            query,
            Query::Document(PathBuf::from("/corpus/man3/printf.md"))
        );
    }

    #[test]
    fn path_escaping_the_corpus_is_a_name() {
        let query = Query::parse(&["/corpus/../etc/ls.md"], &layout()).unwrap();
        assert_eq!(query, Query::Name("/corpus/../etc/ls.md".into()));
    }

    #[test]
    fn foreign_path_is_a_name() {
        let query = Query::parse(&["/etc/ls.md"], &layout()).unwrap();
        assert_eq!(query, Query::Name("/etc/ls.md".into()));

        let query = Query::parse(&["man1/ls.md"], &layout()).unwrap();
        assert_eq!(query, Query::Name("man1/ls.md".into()));
    }

    #[test]
    fn bare_name() {
        let query = Query::parse(&["printf"], &layout()).unwrap();
        assert_eq!(query, Query::Name("printf".into()));
    }

    #[test]
    fn section_and_name() {
        let query = Query::parse(&["3", "printf"], &layout()).unwrap();
        assert_eq!(
            query,
            Query::SectionPage {
                section: SectionNumber::new(3).unwrap(),
                name: "printf".into(),
            }
        );
    }

    #[test]
    fn section_must_be_valid() {
        assert!(matches!(
            Query::parse(&["9", "printf"], &layout()),
            Err(LocatorError::SectionOutOfRange { .. })
        ));
        assert!(matches!(
            Query::parse(&["x", "printf"], &layout()),
            Err(LocatorError::MalformedLocator { .. })
        ));
    }

    #[test]
    fn three_arguments_is_too_long() {
        assert_eq!(
            Query::parse(&["1", "2", "3"], &layout()),
            Err(LocatorError::QueryTooLong { count: 3 })
        );
    }

    #[test]
    fn display() {
        assert_eq!(Query::Index.to_string(), "index page");
        let query = Query::parse(&["3", "printf"], &layout()).unwrap();
        assert_eq!(query.to_string(), "3 printf");
    }
}

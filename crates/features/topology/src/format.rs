use crate::error::TopologyError;
use crate::path::FeaturePath;
use artifex_domain::constants::NAMESPACE_SEPARATOR;

const AREA: &str = "{Area}";
const MODULE: &str = "{Module}";
const FEATURE: &str = "{Feature}";
const SUB_FEATURE: &str = "*{SubFeature}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Area,
    Module,
    Feature,
    /// One or more trailing segments.
    SubFeatures,
    Literal(String),
}

/// A parsed structure format such as `[.]{Area}.{Module}.{Feature}.*{SubFeature}`.
///
/// The optional `[sep]` prefix declares the separator, `.` by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureFormat {
    source: String,
    separator: char,
    segments: Vec<Segment>,
}

impl StructureFormat {
    pub fn parse(format: &str) -> Result<Self, TopologyError> {
        let invalid = |reason: &'static str| TopologyError::InvalidStructureFormat {
            format: format.to_owned(),
            reason: reason.into(),
            context: None,
        };

        let (separator, body) = match format.strip_prefix('[') {
            Some(rest) => {
                let mut chars = rest.chars();
                match (chars.next(), chars.next()) {
                    (Some(sep), Some(']')) => (sep, chars.as_str()),
                    _ => return Err(invalid("separator must be a single character in brackets")),
                }
            },
            None => (NAMESPACE_SEPARATOR, format),
        };

        if body.is_empty() {
            return Err(invalid("format has no segments"));
        }

        let mut segments = Vec::new();
        for raw in body.split(separator) {
            let segment = match raw {
                "" => return Err(invalid("empty segment")),
                AREA => Segment::Area,
                MODULE => Segment::Module,
                FEATURE => Segment::Feature,
                SUB_FEATURE => Segment::SubFeatures,
                other if other.contains(['{', '}', '*']) => {
                    return Err(invalid("unknown placeholder"));
                },
                literal => Segment::Literal(literal.to_owned()),
            };
            if segments.last() == Some(&Segment::SubFeatures) {
                return Err(invalid("*{SubFeature} must be the last segment"));
            }
            let repeated = matches!(segment, Segment::Module | Segment::Feature)
                && segments.contains(&segment);
            if repeated {
                return Err(invalid("{Module} and {Feature} may appear only once"));
            }
            segments.push(segment);
        }

        Ok(Self { source: format.to_owned(), separator, segments })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub const fn separator(&self) -> char {
        self.separator
    }

    /// Maps namespace segments onto this format. `None` when the format does not fit.
    ///
    /// `{Module}` is only captured when modules are in use; otherwise it behaves like `{Area}`.
    #[must_use]
    pub fn capture(&self, segments: &[&str], use_modules: bool) -> Option<FeaturePath> {
        let joined = segments.join(&NAMESPACE_SEPARATOR.to_string());
        let parts: Vec<&str> = joined.split(self.separator).filter(|s| !s.is_empty()).collect();

        let mut path = FeaturePath::default();
        let mut rest = parts.as_slice();

        for segment in &self.segments {
            if *segment == Segment::SubFeatures {
                if rest.is_empty() {
                    return None;
                }
                path.features.extend(rest.iter().map(|s| (*s).to_owned()));
                rest = &[];
                continue;
            }

            let (head, tail) = rest.split_first()?;
            match segment {
                Segment::Area | Segment::SubFeatures => {},
                Segment::Module if use_modules => path.module = Some((*head).to_owned()),
                Segment::Module => {},
                Segment::Feature => path.features.push((*head).to_owned()),
                Segment::Literal(literal) if literal.as_str() == *head => {},
                Segment::Literal(_) => return None,
            }
            rest = tail;
        }

        rest.is_empty().then_some(path)
    }
}

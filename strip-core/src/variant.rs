/// One candidate compiled variant: the set of keywords active when it was
/// (or would be) compiled.
///
/// Keyword order carries no meaning; matching treats the names as a set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderVariant {
    keywords: Vec<String>,
}

impl ShaderVariant {
    /// Creates a variant from its active keyword names.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// The variant compiled with zero active keywords.
    pub fn no_keywords() -> Self {
        Self::default()
    }

    /// The active keyword names.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Whether no keywords are active.
    pub fn is_keywordless(&self) -> bool {
        self.keywords.is_empty()
    }
}

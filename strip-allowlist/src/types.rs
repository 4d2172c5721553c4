use std::collections::HashMap;
use std::fmt;

/// Sentinel keyword recorded when a variant compiles with no keywords active.
///
/// It cannot meaningfully coexist with real keyword names inside one
/// combination; a combination carrying it accepts the keyword-less variant.
pub const NO_KEYWORDS: &str = "<no keywords>";

/// Sentinel pass name meaning a shader's passes are unnamed/unknown.
///
/// Its presence on any pass rule disables stripping for that shader, since
/// the allow-list cannot tell its passes apart reliably.
pub const UNNAMED_PASS: &str = "<unnamed>";

/// Opaque, comparable identity of a shader program.
///
/// Used only as a lookup key into the allow-list; the wrapped name is never
/// inspected by the matching logic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShaderId(pub String);

impl ShaderId {
    /// Creates a shader identity from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The underlying shader name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShaderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One accepted set of simultaneously-active keywords for a pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordCombination {
    keywords: Vec<String>,
}

impl KeywordCombination {
    /// Creates a combination from keyword names.
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    /// The combination accepting only the keyword-less variant.
    pub fn no_keywords() -> Self {
        Self {
            keywords: vec![NO_KEYWORDS.to_string()],
        }
    }

    /// The keyword names in this combination.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Whether `keyword` appears in this combination.
    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    /// Whether this combination accepts a variant with zero active keywords.
    pub fn allows_empty(&self) -> bool {
        self.contains(NO_KEYWORDS)
    }
}

/// Ordered sequence of accepted keyword combinations for one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    combinations: Vec<KeywordCombination>,
}

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a combination. Duplicates accumulate; repeated identical
    /// combinations are harmless for matching.
    pub fn push(&mut self, combination: KeywordCombination) {
        self.combinations.push(combination);
    }

    /// Appends a combination unless an identical one is already present.
    pub fn push_dedup(&mut self, combination: KeywordCombination) {
        if !self.combinations.contains(&combination) {
            self.combinations.push(combination);
        }
    }

    /// The accepted combinations, in insertion order.
    pub fn combinations(&self) -> &[KeywordCombination] {
        &self.combinations
    }

    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }
}

/// One render-pass name for a shader, plus the keyword combinations accepted
/// for that pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassRule {
    /// The pass name, or [`UNNAMED_PASS`].
    pub name: String,
    /// The accepted keyword combinations.
    pub keyword_set: KeywordSet,
}

impl PassRule {
    /// Creates an empty rule for `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keyword_set: KeywordSet::new(),
        }
    }
}

/// Per-shader allow-list entry: an ordered list of pass rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowListEntry {
    passes: Vec<PassRule>,
}

impl AllowListEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// First rule whose name equals `pass_name`.
    ///
    /// Pass names are unique when the entry is built through
    /// [`AllowListEntry::pass_rule_mut`] or the format loaders; if duplicates
    /// are created programmatically, the earlier rule wins.
    pub fn pass_rule(&self, pass_name: &str) -> Option<&PassRule> {
        self.passes.iter().find(|rule| rule.name == pass_name)
    }

    /// Mutable access to the rule for `pass_name`, creating it on first use.
    /// Rules keep the order of their first appearance.
    pub fn pass_rule_mut(&mut self, pass_name: &str) -> &mut PassRule {
        let index = match self.passes.iter().position(|rule| rule.name == pass_name) {
            Some(index) => index,
            None => {
                self.passes.push(PassRule::new(pass_name));
                self.passes.len() - 1
            }
        };
        &mut self.passes[index]
    }

    /// Appends a rule without checking for duplicates. Used by format
    /// loaders, which validate uniqueness themselves.
    pub fn push_pass(&mut self, rule: PassRule) {
        self.passes.push(rule);
    }

    /// Whether any rule carries the [`UNNAMED_PASS`] sentinel.
    pub fn has_unnamed_pass(&self) -> bool {
        self.passes.iter().any(|rule| rule.name == UNNAMED_PASS)
    }

    /// All pass rules, in insertion order.
    pub fn passes(&self) -> &[PassRule] {
        &self.passes
    }
}

/// The allow-list model: an explicit mapping from shader identity to entry.
///
/// Built once (from a compile log or a persisted file) and treated as
/// immutable while filtering; `clear` and re-population are administrative
/// operations, never interleaved with filter calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    entries: HashMap<ShaderId, AllowListEntry>,
}

impl AllowList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The entry for an exact shader identity match, if registered.
    pub fn lookup(&self, shader: &ShaderId) -> Option<&AllowListEntry> {
        self.entries.get(shader)
    }

    /// Mutable access to the entry for `shader`, creating it on first use.
    pub fn entry_mut(&mut self, shader: ShaderId) -> &mut AllowListEntry {
        self.entries.entry(shader).or_default()
    }

    /// Registers `entry`, replacing (and returning) any previous entry for
    /// the same shader.
    pub fn insert(&mut self, shader: ShaderId, entry: AllowListEntry) -> Option<AllowListEntry> {
        self.entries.insert(shader, entry)
    }

    /// Removes all entries. Used for re-import.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all registered (shader, entry) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&ShaderId, &AllowListEntry)> {
        self.entries.iter()
    }
}

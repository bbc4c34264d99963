/// A single condition over lowercased question text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// At least one of the substrings is present
    AnyOf(Vec<String>),
    /// None of the substrings is present
    NoneOf(Vec<String>),
}

impl Clause {
    pub fn any_of<I, S>(needles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Clause::AnyOf(lowered(needles))
    }

    pub fn none_of<I, S>(needles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Clause::NoneOf(lowered(needles))
    }

    /// `text` must already be lowercase
    pub fn holds(&self, text: &str) -> bool {
        match self {
            Clause::AnyOf(needles) => needles.iter().any(|n| text.contains(n.as_str())),
            Clause::NoneOf(needles) => !needles.iter().any(|n| text.contains(n.as_str())),
        }
    }
}

fn lowered<I, S>(needles: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    needles.into_iter().map(|n| n.into().to_lowercase()).collect()
}

/// A canned answer and the clauses that select it.
///
/// A rule with no clauses never matches; the fallback is not a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseRule {
    pub name: String,
    pub clauses: Vec<Clause>,
    pub response: String,
}

impl ResponseRule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            clauses: Vec::new(),
            response: String::new(),
        }
    }

    pub fn when_any<I, S>(mut self, needles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.clauses.push(Clause::any_of(needles));
        self
    }

    pub fn unless_any<I, S>(mut self, needles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.clauses.push(Clause::none_of(needles));
        self
    }

    pub fn respond_with(mut self, response: impl Into<String>) -> Self {
        self.response = response.into();
        self
    }

    /// `text` must already be lowercase
    pub fn matches(&self, text: &str) -> bool {
        !self.clauses.is_empty() && self.clauses.iter().all(|c| c.holds(text))
    }
}

/// Rules kept in declaration order; earlier rules take priority
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<ResponseRule>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule at the lowest priority
    pub fn register(&mut self, rule: ResponseRule) {
        self.rules.push(rule);
    }

    pub fn with(mut self, rule: ResponseRule) -> Self {
        self.register(rule);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ResponseRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// First rule, in declaration order, whose clauses all hold
    pub fn first_match(&self, text: &str) -> Option<&ResponseRule> {
        self.rules.iter().find(|r| r.matches(text))
    }

    pub fn all(&self) -> impl Iterator<Item = &ResponseRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clause_any_and_none() {
        let any = Clause::any_of(["Craft", "recipe"]);
        assert!(any.holds("how to craft"));
        assert!(!any.holds("how to build"));

        let none = Clause::none_of(["mod"]);
        assert!(none.holds("wheat farm"));
        assert!(!none.holds("farm mod"));
    }

    #[test]
    fn test_rule_requires_every_clause() {
        let rule = ResponseRule::new("farm")
            .when_any(["farm"])
            .unless_any(["mod"])
            .respond_with("farms");
        assert!(rule.matches("a wheat farm"));
        assert!(!rule.matches("a farm mod"));
        assert!(!rule.matches("wheat"));
    }

    #[test]
    fn test_rule_without_clauses_never_matches() {
        assert!(!ResponseRule::new("empty").respond_with("x").matches("anything"));
    }

    #[test]
    fn test_first_match_follows_declaration_order() {
        let table = RuleTable::new()
            .with(ResponseRule::new("first").when_any(["a"]).respond_with("1"))
            .with(ResponseRule::new("second").when_any(["a", "b"]).respond_with("2"));

        assert_eq!(table.first_match("a b").map(|r| r.name.as_str()), Some("first"));
        assert_eq!(table.first_match("b").map(|r| r.name.as_str()), Some("second"));
        assert!(table.first_match("c").is_none());
        assert_eq!(table.len(), 2);
        assert!(table.get("second").is_some());
    }
}

//! Synonym dictionary for keyword expansion

use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Student handbook synonyms: canonical key → related phrases
pub const HANDBOOK_SYNONYMS: &[(&str, &[&str])] = &[
    // General information
    ("vision", &["goal", "aim", "objective", "aspiration", "outlook"]),
    ("mission", &["purpose", "objective", "commitment", "mandate", "direction"]),
    ("values", &["principles", "ethics", "beliefs", "standards", "virtues"]),
    ("history", &["background", "origin", "past", "foundation", "establishment"]),
    // Admission & enrollment
    ("admission", &["entry", "acceptance", "entrance", "application"]),
    (
        "enrollment",
        &["registration", "admission", "application", "enrol", "enlist", "sign-up"],
    ),
    (
        "requirements",
        &["documents", "papers", "credentials", "needs", "prerequisites"],
    ),
    ("transferee", &["transfer student", "shifter", "cross-registrant"]),
    (
        "exam",
        &["test", "assessment", "evaluation", "examination", "entrance exam"],
    ),
    // Academic policies
    (
        "grades",
        &["marks", "scores", "results", "evaluation", "rating", "grading"],
    ),
    ("grading", &["evaluation", "assessment", "marking"]),
    ("subjects", &["courses", "classes", "units", "lectures"]),
    ("load", &["units", "subjects", "enlistment", "course load"]),
    (
        "probation",
        &["warning", "deficiency", "academic standing", "scholastic status"],
    ),
    ("disqualification", &["dismissal", "expulsion", "termination"]),
    // Fees & scholarships
    ("tuition", &["fee", "payment", "cost", "expense", "price"]),
    ("fees", &["payment", "charges", "cost", "expenses"]),
    (
        "scholarship",
        &["grant", "aid", "assistance", "financial aid", "support", "sponsorship"],
    ),
    ("refund", &["reimbursement", "repayment", "return"]),
    // Conduct & discipline
    (
        "rules",
        &["regulations", "policies", "guidelines", "protocol", "standards"],
    ),
    ("discipline", &["sanctions", "punishment", "penalty", "conduct"]),
    ("offenses", &["violations", "misconduct", "infractions"]),
    ("attendance", &["presence", "absences", "participation"]),
    (
        "dress_code",
        &[
            "uniform",
            "attire",
            "clothing",
            "clothing policy",
            "dress",
            "outfit",
            "wear",
            "dress code",
            "appearance",
        ],
    ),
    // Services & facilities
    ("student", &["learner", "undergraduate", "enrollee", "pupil"]),
    ("teacher", &["professor", "instructor", "faculty", "educator"]),
    (
        "library",
        &["learning resource", "study area", "resources", "books"],
    ),
    ("counseling", &["guidance", "advice", "support services"]),
    ("health", &["medical", "clinic", "infirmary", "wellness"]),
    // Activities
    (
        "organizations",
        &["clubs", "associations", "societies", "student groups"],
    ),
    (
        "activities",
        &["events", "competitions", "seminars", "programs", "trainings"],
    ),
    ("sports", &["athletics", "games", "tournaments", "intramurals"]),
    // Graduation & completion
    (
        "graduation",
        &["commencement", "completion", "conferment", "finishing"],
    ),
    ("honors", &["awards", "recognition", "distinction"]),
    ("diploma", &["certificate", "degree paper"]),
    // Miscellaneous
    ("leave", &["absence", "break", "time-off", "LOA"]),
    ("dismissal", &["expulsion", "exclusion", "termination"]),
    ("withdrawal", &["dropping", "cancellation", "exit"]),
    (
        "campus",
        &["school", "university", "institution", "college", "grounds"],
    ),
];

/// Read-only mapping from canonical key to its synonym set.
///
/// Keys and synonyms are stored lower-cased since matching runs on
/// lower-cased text. A reverse map (synonym → keys) makes lookups O(1)
/// per token instead of a scan over every group.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    groups: BTreeMap<String, BTreeSet<String>>,
    reverse: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    /// Build a table from `(key, synonyms)` pairs. Pairs sharing a key are merged.
    pub fn from_pairs<'a, I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, S)>,
        S: IntoIterator<Item = &'a str>,
    {
        let mut groups: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (key, synonyms) in pairs {
            groups
                .entry(key.to_lowercase())
                .or_default()
                .extend(synonyms.into_iter().map(str::to_lowercase));
        }

        let mut reverse: HashMap<String, Vec<String>> = HashMap::new();
        for (key, synonyms) in &groups {
            for synonym in synonyms {
                reverse
                    .entry(synonym.clone())
                    .or_default()
                    .push(key.clone());
            }
        }

        Self { groups, reverse }
    }

    /// The built-in student handbook table
    pub fn handbook() -> Self {
        Self::from_pairs(
            HANDBOOK_SYNONYMS
                .iter()
                .map(|(key, synonyms)| (*key, synonyms.iter().copied())),
        )
    }

    /// Synonyms of a canonical key
    pub fn synonyms_of(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.groups.get(key)
    }

    /// Keys whose synonym set contains `word`
    pub fn keys_containing(&self, word: &str) -> &[String] {
        self.reverse.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Add every group hit by `word` (its synonyms plus its key) to `out`
    pub fn expand_into(&self, word: &str, out: &mut BTreeSet<String>) {
        for key in self.keys_containing(word) {
            if let Some(synonyms) = self.groups.get(key) {
                out.extend(synonyms.iter().cloned());
            }
            out.insert(key.clone());
        }
    }

    /// Number of canonical keys
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handbook_table_loaded() {
        let table = SynonymTable::handbook();
        assert_eq!(table.len(), HANDBOOK_SYNONYMS.len());
        assert!(table.synonyms_of("tuition").unwrap().contains("fee"));
    }

    #[test]
    fn test_keys_containing_shared_synonym() {
        let table = SynonymTable::handbook();
        // "cost" belongs to both the tuition and fees groups
        assert_eq!(table.keys_containing("cost"), &["fees", "tuition"]);
        assert!(table.keys_containing("tuition").is_empty());
    }

    #[test]
    fn test_expand_into_adds_group_and_key() {
        let table = SynonymTable::handbook();
        let mut out = BTreeSet::new();
        table.expand_into("fee", &mut out);

        for word in ["tuition", "fee", "payment", "cost", "expense", "price"] {
            assert!(out.contains(word), "missing {word}");
        }
        assert_eq!(out.len(), 6);
    }

    #[test]
    fn test_entries_lowercased() {
        let table = SynonymTable::handbook();
        assert_eq!(table.keys_containing("loa"), &["leave"]);
        assert!(table.keys_containing("LOA").is_empty());
    }

    #[test]
    fn test_from_pairs_merges_keys() {
        let table = SynonymTable::from_pairs(vec![
            ("fee", vec!["cost"]),
            ("Fee", vec!["price", "cost"]),
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.synonyms_of("fee").unwrap().len(), 2);
    }
}

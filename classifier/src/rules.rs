//! Ordered rule chain
//!
//! Rules are evaluated top to bottom and the first one that produces a label
//! wins. A rule whose guard matches can still decline to answer (a branch
//! without an `otherwise` label), in which case evaluation continues with the
//! next rule. Reordering rules changes results.

use std::sync::LazyLock;

use serde::Serialize;

use crate::errors::Result;
use crate::label::PatternLabel;
use crate::matcher::KeywordSet;

/// What a rule yields once its guard has matched
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Always this label
    Label(PatternLabel),
    /// First matching arm wins; with no match, `otherwise` or fall through
    Branch {
        arms: Vec<(KeywordSet, PatternLabel)>,
        otherwise: Option<PatternLabel>,
    },
}

/// Named (guard, outcome) record
#[derive(Debug, Clone)]
pub struct Rule {
    name: &'static str,
    // Every set must match
    guard: Vec<KeywordSet>,
    outcome: Outcome,
}

impl Rule {
    pub fn new(name: &'static str, guard: KeywordSet, outcome: Outcome) -> Self {
        Self {
            name,
            guard: vec![guard],
            outcome,
        }
    }

    /// Adds another keyword set that must match as well
    pub fn and(mut self, guard: KeywordSet) -> Self {
        self.guard.push(guard);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Applies the rule to already-lowercased text
    fn evaluate(&self, text: &str) -> Option<(PatternLabel, Vec<String>)> {
        let mut signals = Vec::with_capacity(self.guard.len() + 1);
        for set in &self.guard {
            signals.push(set.find(text)?.to_string());
        }

        match &self.outcome {
            Outcome::Label(label) => Some((*label, signals)),
            Outcome::Branch { arms, otherwise } => {
                for (set, label) in arms {
                    if let Some(keyword) = set.find(text) {
                        signals.push(keyword.to_string());
                        return Some((*label, signals));
                    }
                }
                otherwise.map(|label| (label, signals))
            }
        }
    }
}

/// Result of running the chain, with the rule that decided it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub label: PatternLabel,
    /// Name of the deciding rule, or [`RuleChain::FALLBACK_RULE`]
    pub rule: &'static str,
    /// Keywords that matched on the way, guard first
    pub matched_signals: Vec<String>,
}

/// Rules plus the label used when none of them answers
#[derive(Debug, Clone)]
pub struct RuleChain {
    rules: Vec<Rule>,
    fallback: PatternLabel,
}

static STANDARD: LazyLock<RuleChain> = LazyLock::new(build_standard);

// The table only holds literal keywords; `test_standard_chain_builds` covers it.
#[allow(clippy::expect_used)]
fn build_standard() -> RuleChain {
    standard_chain().expect("standard keyword table compiles")
}

impl RuleChain {
    pub const FALLBACK_RULE: &'static str = "fallback";

    pub fn new(rules: Vec<Rule>, fallback: PatternLabel) -> Self {
        Self { rules, fallback }
    }

    /// The shared standard chain, compiled on first use
    pub fn standard() -> &'static RuleChain {
        &STANDARD
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn fallback(&self) -> PatternLabel {
        self.fallback
    }

    pub fn classify(&self, description: &str) -> PatternLabel {
        self.explain(description).label
    }

    pub fn explain(&self, description: &str) -> Classification {
        let text = description.to_lowercase();

        self.rules
            .iter()
            .find_map(|rule| {
                rule.evaluate(&text)
                    .map(|(label, matched_signals)| Classification {
                        label,
                        rule: rule.name,
                        matched_signals,
                    })
            })
            .unwrap_or_else(|| Classification {
                label: self.fallback,
                rule: Self::FALLBACK_RULE,
                matched_signals: Vec::new(),
            })
    }
}

fn standard_chain() -> Result<RuleChain> {
    use PatternLabel::*;

    let rules = vec![
        Rule::new(
            "tree-or-graph",
            KeywordSet::words(["tree", "graph"])?,
            Outcome::Branch {
                arms: vec![(
                    KeywordSet::substrings([
                        "connect",
                        "connected components",
                        "cycle",
                        "cycle detection",
                    ]),
                    UnionFindOrTraversal,
                )],
                otherwise: Some(Traversal),
            },
        ),
        Rule::new(
            "linked-list-merge-k",
            KeywordSet::substrings(["linked list"]),
            Outcome::Label(Heap),
        )
        .and(KeywordSet::substrings(["merge k"])),
        Rule::new(
            "linked-list",
            KeywordSet::substrings(["linked list"]),
            Outcome::Label(FastSlowPointers),
        ),
        Rule::new(
            "array-or-string",
            KeywordSet::words(["array", "string"])?,
            Outcome::Branch {
                arms: vec![
                    (
                        KeywordSet::words(["sorted", "two sum", "pair sum", "sum = k"])?,
                        TwoPointers,
                    ),
                    (
                        KeywordSet::substrings([
                            "longest",
                            "shortest",
                            "substring",
                            "subarray",
                            "min window",
                            "max window",
                        ]),
                        SlidingWindow,
                    ),
                    (
                        KeywordSet::words(["kth largest", "merge k", "stream", "top k"])?,
                        Heap,
                    ),
                    (
                        KeywordSet::words(["count", "frequency", "duplicate", "contains", "seen"])?,
                        HashLookup,
                    ),
                ],
                otherwise: None,
            },
        ),
        Rule::new(
            "optimization",
            KeywordSet::substrings([
                "count ways",
                "number of ways",
                "optimal",
                "maximize",
                "minimize",
            ]),
            Outcome::Branch {
                arms: vec![(greedy_signals(), Greedy)],
                otherwise: Some(DynamicProgramming),
            },
        ),
        Rule::new(
            "combinatorial-generation",
            KeywordSet::substrings([
                "permutation",
                "permutations",
                "subset",
                "subsets",
                "combination",
                "combinations",
                "generate all",
            ]),
            Outcome::Label(Backtracking),
        ),
        // The last two rules only catch what would otherwise hit the fallback:
        // a bare "substring" still implies a window over a string, and
        // scheduling-style problems are greedy without an optimization word.
        Rule::new(
            "substring-window",
            KeywordSet::substrings(["substring"]),
            Outcome::Label(SlidingWindow),
        ),
        Rule::new("local-choice", greedy_signals(), Outcome::Label(Greedy)),
    ];

    Ok(RuleChain::new(rules, BruteForce))
}

fn greedy_signals() -> KeywordSet {
    KeywordSet::substrings(["interval", "schedule", "activity", "coin change", "jump game"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn chain() -> &'static RuleChain {
        RuleChain::standard()
    }

    #[test]
    fn test_standard_chain_builds() {
        assert!(standard_chain().is_ok());
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<&str> = chain().rules().iter().map(Rule::name).collect();
        assert_eq!(
            names,
            vec![
                "tree-or-graph",
                "linked-list-merge-k",
                "linked-list",
                "array-or-string",
                "optimization",
                "combinatorial-generation",
                "substring-window",
                "local-choice",
            ]
        );
        assert_eq!(chain().fallback(), PatternLabel::BruteForce);
    }

    #[test]
    fn test_tree_graph_branch() {
        assert_eq!(
            chain().classify("Detect cycle in a graph"),
            PatternLabel::UnionFindOrTraversal
        );
        assert_eq!(
            chain().classify("Count connected components of the graph"),
            PatternLabel::UnionFindOrTraversal
        );
        assert_eq!(
            chain().classify("Find the height of a binary tree"),
            PatternLabel::Traversal
        );
        // whole word only
        assert_eq!(chain().classify("Return the subtree sums"), PatternLabel::BruteForce);
    }

    #[test]
    fn test_graph_wins_over_later_vocabulary() {
        let result = chain().explain("Find the longest path in a graph array to maximize subsets");
        assert_eq!(result.label, PatternLabel::Traversal);
        assert_eq!(result.rule, "tree-or-graph");
    }

    #[test]
    fn test_linked_list_rules() {
        assert_eq!(
            chain().classify("Merge k sorted linked lists"),
            PatternLabel::Heap
        );
        assert_eq!(
            chain().classify("Given a linked list, remove the nth node from the end."),
            PatternLabel::FastSlowPointers
        );
    }

    #[test]
    fn test_array_family_order() {
        assert_eq!(
            chain().classify("Find two sum in an array"),
            PatternLabel::TwoPointers
        );
        assert_eq!(
            chain().classify("Longest substring of a string"),
            PatternLabel::SlidingWindow
        );
        assert_eq!(
            chain().classify("Top k frequent words in a string"),
            PatternLabel::Heap
        );
        assert_eq!(
            chain().classify("Check if the array contains a duplicate"),
            PatternLabel::HashLookup
        );
        // sorted beats window signals
        assert_eq!(
            chain().classify("Shortest sorted array segment"),
            PatternLabel::TwoPointers
        );
    }

    #[test]
    fn test_array_family_falls_through() {
        let result = chain().explain("Minimize the cost over an array");
        assert_eq!(result.label, PatternLabel::DynamicProgramming);
        assert_eq!(result.rule, "optimization");

        let result = chain().explain("Reverse the array");
        assert_eq!(result.label, PatternLabel::BruteForce);
        assert_eq!(result.rule, RuleChain::FALLBACK_RULE);
    }

    #[test]
    fn test_optimization_rules() {
        assert_eq!(chain().classify("Find optimal path."), PatternLabel::DynamicProgramming);
        assert_eq!(
            chain().classify("Count ways to make coin change"),
            PatternLabel::Greedy
        );
        assert_eq!(chain().classify("Schedule interval tasks."), PatternLabel::Greedy);
        assert_eq!(chain().explain("Schedule interval tasks.").rule, "local-choice");
    }

    #[test]
    fn test_late_rules_only_replace_fallback() {
        let result = chain().explain("Longest substring without repeating characters");
        assert_eq!(result.label, PatternLabel::SlidingWindow);
        assert_eq!(result.rule, "substring-window");

        // Earlier rules keep these
        for (text, label, rule) in [
            (
                "Generate all substrings of a word",
                PatternLabel::Backtracking,
                "combinatorial-generation",
            ),
            (
                "Generate all interval schedules",
                PatternLabel::Backtracking,
                "combinatorial-generation",
            ),
            (
                "Minimize the longest substring length",
                PatternLabel::DynamicProgramming,
                "optimization",
            ),
            (
                "Minimize the shortest subarray cost",
                PatternLabel::DynamicProgramming,
                "optimization",
            ),
        ] {
            let result = chain().explain(text);
            assert_eq!((result.label, result.rule), (label, rule), "{text:?}");
        }
    }

    #[test]
    fn test_combinatorial_generation() {
        assert_eq!(
            chain().classify("Generate all subsets of a set"),
            PatternLabel::Backtracking
        );
    }

    #[test]
    fn test_explain_signals() {
        let result = chain().explain("Detect cycle in a graph");
        assert_eq!(result.matched_signals, vec!["graph".to_string(), "cycle".to_string()]);

        let result = chain().explain("Merge k sorted linked lists");
        assert_eq!(result.rule, "linked-list-merge-k");
        assert_eq!(
            result.matched_signals,
            vec!["linked list".to_string(), "merge k".to_string()]
        );

        let result = chain().explain("");
        assert_eq!(result.rule, RuleChain::FALLBACK_RULE);
        assert!(result.matched_signals.is_empty());
    }

    #[test]
    fn test_reordering_changes_result() {
        let heap = || {
            Rule::new(
                "heap",
                KeywordSet::substrings(["stream"]),
                Outcome::Label(PatternLabel::Heap),
            )
        };
        let window = || {
            Rule::new(
                "window",
                KeywordSet::substrings(["longest"]),
                Outcome::Label(PatternLabel::SlidingWindow),
            )
        };
        let text = "longest stream";

        let first = RuleChain::new(vec![heap(), window()], PatternLabel::BruteForce);
        let second = RuleChain::new(vec![window(), heap()], PatternLabel::BruteForce);

        assert_eq!(first.classify(text), PatternLabel::Heap);
        assert_eq!(second.classify(text), PatternLabel::SlidingWindow);
    }

    #[test]
    fn test_branch_otherwise_stops_evaluation() {
        let branch = |otherwise| {
            Rule::new(
                "branch",
                KeywordSet::substrings(["array"]),
                Outcome::Branch {
                    arms: vec![(KeywordSet::substrings(["sorted"]), PatternLabel::TwoPointers)],
                    otherwise,
                },
            )
        };
        let later = || {
            Rule::new(
                "later",
                KeywordSet::substrings(["optimal"]),
                Outcome::Label(PatternLabel::DynamicProgramming),
            )
        };

        let stopping = RuleChain::new(
            vec![branch(Some(PatternLabel::HashLookup)), later()],
            PatternLabel::BruteForce,
        );
        let falling = RuleChain::new(vec![branch(None), later()], PatternLabel::BruteForce);

        assert_eq!(stopping.classify("optimal array"), PatternLabel::HashLookup);
        assert_eq!(falling.classify("optimal array"), PatternLabel::DynamicProgramming);
        assert_eq!(falling.classify("plain array"), PatternLabel::BruteForce);
    }

    #[test]
    fn test_empty_chain_uses_fallback() {
        let empty = RuleChain::new(Vec::new(), PatternLabel::Greedy);
        assert_eq!(empty.classify("anything at all"), PatternLabel::Greedy);
    }
}

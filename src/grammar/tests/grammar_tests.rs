use diagnostic::{Caret, Diagnostic, Level};
use grammar::{Error, Grammar, GrammarBuilder, Problem, SymbolKind};

const SIMPLE: &str = "\
// S -> A c, A -> a A | b
#NONTERMINALS
S A
#TERMINALS
a b c
#START
S
#PRODUCTIONS
S -> A c
A -> a A | b
";

#[test]
fn load_simple() {
    let grammar = Grammar::load(SIMPLE).unwrap();

    assert_eq!(grammar.start_symbol(), "S");
    assert_eq!(grammar.nonterminals(), ["S", "A"]);
    assert_eq!(grammar.terminals(), ["a", "b", "c"]);
    assert_eq!(grammar.kind("A"), Some(SymbolKind::Nonterminal));
    assert_eq!(grammar.kind("c"), Some(SymbolKind::Terminal));
    assert_eq!(grammar.kind("z"), None);

    let a = grammar.productions_for("A");
    assert_eq!(a.len(), 2);
    assert!(a[0].matches(&["a", "A"]));
    assert!(a[1].matches(&["b"]));
    assert!(grammar.productions_for("c").is_empty());
    assert!(grammar.validate().is_empty());
}

#[test]
fn from_str_matches_load() {
    let grammar: Grammar = SIMPLE.parse().unwrap();
    assert_eq!(grammar, Grammar::load(SIMPLE).unwrap());
}

#[test]
fn display_loads_back() {
    let grammar = Grammar::load(SIMPLE).unwrap();
    let printed = grammar.to_string();
    assert_eq!(Grammar::load(&printed).unwrap(), grammar);
    assert!(printed.contains("A -> a A | b\n"));
}

#[test]
fn sections_in_any_order_and_repeated_lhs() {
    let grammar = Grammar::load(
        "#PRODUCTIONS\nA -> a A\n#START\nA\n#TERMINALS\na\nb\n\
         #NONTERMINALS\nA\n#PRODUCTIONS\nA -> b\n",
    )
    .unwrap();

    assert_eq!(grammar.terminals(), ["a", "b"]);
    let a = grammar.productions_for("A");
    assert!(a[0].matches(&["a", "A"]));
    assert!(a[1].matches(&["b"]));
}

#[test]
fn productions_iterate_in_declaration_order() {
    let grammar = Grammar::load(SIMPLE).unwrap();
    let all: Vec<String> = grammar
        .productions()
        .map(|(lhs, p)| format!("{lhs} -> {p}"))
        .collect();
    assert_eq!(all, ["S -> A c", "A -> a A", "A -> b"]);
}

#[test]
fn errors_know_their_line() {
    let e = Grammar::load("#NONTERMINALS\nS\n#START\nS\n#PRODUCTIONS\nS a\n")
        .unwrap_err();
    assert_eq!(e.error(), &Error::MissingArrow);
    assert_eq!(e.line(), Some(Caret::new(5, 0)));
    assert_eq!(e.to_string(), "line 6: expected `->` in a production");

    let e = Grammar::load("S A\n").unwrap_err();
    assert_eq!(e.error(), &Error::NoSection);

    let e = Grammar::load("#RULES\n").unwrap_err();
    assert_eq!(e.error(), &Error::UnknownSection("#RULES".into()));

    let e = Grammar::load("#NONTERMINALS\nS\n#TERMINALS\nS\n").unwrap_err();
    assert_eq!(e.error(), &Error::Overlap("S".into()));
    assert_eq!(e.line(), Some(Caret::new(3, 0)));
}

#[test]
fn start_section() {
    let e = Grammar::load("#NONTERMINALS\nS\n").unwrap_err();
    assert_eq!(e.error(), &Error::MissingStart);
    assert_eq!(e.line(), None);

    let e = Grammar::load("#START\nS T\n").unwrap_err();
    assert_eq!(e.error(), &Error::BadStart);

    let e = Grammar::load("#START\nS\nT\n").unwrap_err();
    assert_eq!(e.error(), &Error::DuplicateStart);
}

#[test]
fn validate_finds_problems() {
    let grammar = Grammar::load(
        "#NONTERMINALS\nS A B\n#TERMINALS\na\n#START\nS\n\
         #PRODUCTIONS\nS -> a x\nB -> a\n",
    )
    .unwrap();

    assert_eq!(
        grammar.validate(),
        vec![
            Problem::UndeclaredSymbol {
                lhs: "S".into(),
                symbol: "x".into()
            },
            Problem::NoProductions("A".into()),
            Problem::Unreachable("A".into()),
            Problem::Unreachable("B".into()),
        ]
    );
    assert!(!grammar.is_valid());
}

#[test]
fn validate_start_symbol() {
    let grammar = GrammarBuilder::default()
        .terminal("a")
        .unwrap()
        .start("a")
        .build()
        .unwrap();

    assert_eq!(
        grammar.validate(),
        vec![Problem::StartNotNonterminal("a".into())]
    );
}

#[test]
fn left_recursion_is_a_warning() {
    let grammar = Grammar::load(
        "#NONTERMINALS\nE T\n#TERMINALS\n+ x\n#START\nE\n\
         #PRODUCTIONS\nE -> T + E | T\nT -> E x | x\n",
    )
    .unwrap();

    let problems = grammar.validate();
    assert_eq!(
        problems,
        vec![
            Problem::LeftRecursive("E".into()),
            Problem::LeftRecursive("T".into()),
        ]
    );
    assert!(grammar.is_valid());

    let d = Diagnostic::from(problems[0].clone());
    assert_eq!(d.get_level(), Level::Warning);
}

#[test]
fn load_error_diagnostic_has_location() {
    let e = Grammar::load("#NONTERMINALS\nS\n#START\nS\n#PRODUCTIONS\nS -> \n")
        .unwrap_err();
    assert_eq!(e.error(), &Error::EmptyAlternative("S".into()));

    let d = Diagnostic::from(e);
    assert_eq!(d.get_location(), Some(Caret::new(5, 0)));
    assert!(d.get_text().starts_with("invalid grammar:"));
}

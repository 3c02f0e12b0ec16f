use diagnostic::Diagnostic;
use grammar::{Grammar, GrammarBuilder};
use parser::*;

const SIMPLE: &str = "\
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

fn simple() -> Grammar {
    Grammar::load(SIMPLE).unwrap()
}

fn rejection(outcome: Outcome) -> Rejection {
    match outcome {
        Outcome::Rejected(rejection) => rejection,
        Outcome::Accepted(_) => panic!("expected the input to be rejected"),
    }
}

#[derive(Default)]
struct Recorder {
    actions: Vec<Action>,
}

impl Observer for Recorder {
    fn observe(&mut self, action: Action, _: &Parser) {
        self.actions.push(action);
    }
}

#[test]
fn accept_aabc() {
    let grammar = simple();
    let outcome = parse(&grammar, &["a", "a", "b", "c"]).unwrap();

    assert!(outcome.is_accepted());
    let tree = outcome.tree().unwrap();
    assert_eq!(tree.leaves(), ["a", "a", "b", "c"]);
    assert_eq!(tree.nodes()[0].symbol(), "S");
    assert_eq!(tree.nodes()[0].parent(), None);
}

#[test]
fn accept_bc() {
    let grammar = simple();
    let outcome = parse(&grammar, &["b", "c"]).unwrap();
    let tree = outcome.tree().unwrap();

    let symbols: Vec<&str> = tree.nodes().iter().map(Node::symbol).collect();
    assert_eq!(symbols, ["S", "A", "c", "b"]);
    assert_eq!(tree.leaves(), ["b", "c"]);

    // The `a A` attempt was truncated, so `b` took its place.
    let root = tree.root().unwrap();
    let a = tree.children(root)[0];
    let b: Vec<&str> = tree
        .children(a)
        .into_iter()
        .map(|n| tree.nodes()[n.as_usize()].symbol())
        .collect();
    assert_eq!(b, ["b"]);
}

#[test]
fn reject_ac() {
    let grammar = simple();
    let rejection = rejection(parse(&grammar, &["a", "c"]).unwrap());

    assert_eq!(rejection.first_exhausted(), Some("A"));
    assert_eq!(rejection.furthest(), 1);
    assert_eq!(rejection.found(), Some("c"));
    assert_eq!(rejection.expected(), ["a", "b"]);
    assert_eq!(
        rejection.to_string(),
        "unexpected `c` at token 2, expected one of `a`, `b`"
    );
}

#[test]
fn reject_empty() {
    let grammar = simple();
    let tokens: [&str; 0] = [];
    let rejection = rejection(parse(&grammar, &tokens).unwrap());

    assert_eq!(rejection.furthest(), 0);
    assert_eq!(rejection.found(), None);
    assert_eq!(rejection.expected(), ["a", "b"]);
    assert_eq!(
        rejection.to_string(),
        "unexpected end of input, expected one of `a`, `b`"
    );
}

#[test]
fn reject_trailing_tokens() {
    let grammar = simple();
    let rejection = rejection(parse(&grammar, &["b", "c", "c"]).unwrap());

    assert_eq!(rejection.furthest(), 2);
    assert_eq!(rejection.found(), Some("c"));
    assert!(rejection.expected().is_empty());
    assert_eq!(rejection.to_string(), "unexpected `c` at token 3");
}

#[test]
fn rejection_diagnostic() {
    let grammar = simple();
    let rejection = rejection(parse(&grammar, &["a", "c"]).unwrap());
    let d = Diagnostic::from(rejection);

    assert!(d.get_text().starts_with("rejected: unexpected `c`"));
    assert_eq!(d.get_notes().len(), 1);
}

#[test]
fn deterministic() {
    let grammar = simple();
    let tokens = ["a", "a", "a", "b", "c"];

    let first = parse(&grammar, &tokens).unwrap();
    let second = parse(&grammar, &tokens).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first.tree().unwrap().to_string(),
        second.tree().unwrap().to_string()
    );
}

#[test]
fn tokens_can_be_strings() {
    let grammar = simple();
    let tokens: Vec<String> = "a b c".split(' ').map(String::from).collect();
    assert!(parse(&grammar, &tokens).unwrap().is_accepted());
}

#[test]
fn prefix_alternative_is_retried() {
    let grammar = Grammar::load(
        "#NONTERMINALS\nS\n#TERMINALS\na b\n#START\nS\n#PRODUCTIONS\nS -> a | a b\n",
    )
    .unwrap();

    assert_eq!(
        parse(&grammar, &["a"]).unwrap().tree().unwrap().leaves(),
        ["a"]
    );
    assert_eq!(
        parse(&grammar, &["a", "b"]).unwrap().tree().unwrap().leaves(),
        ["a", "b"]
    );
}

#[test]
fn exhaustion_moves_to_the_enclosing_alternative() {
    let grammar = Grammar::load(
        "#NONTERMINALS\nS A\n#TERMINALS\na b c\n#START\nS\n\
         #PRODUCTIONS\nS -> A b | a c\nA -> a\n",
    )
    .unwrap();

    let outcome = parse(&grammar, &["a", "c"]).unwrap();
    let tree = outcome.tree().unwrap();

    // Nothing from the `A b` attempt is left behind.
    let symbols: Vec<&str> = tree.nodes().iter().map(Node::symbol).collect();
    assert_eq!(symbols, ["S", "a", "c"]);
}

#[test]
fn deep_derivations() {
    let grammar = Grammar::load(
        "#NONTERMINALS\nS\n#TERMINALS\na\n#START\nS\n#PRODUCTIONS\nS -> a S | a\n",
    )
    .unwrap();
    let tokens = vec!["a"; 10_000];

    let outcome = parse(&grammar, &tokens).unwrap();
    assert_eq!(outcome.tree().unwrap().leaves().len(), 10_000);
}

#[test]
fn observer_sees_every_step() {
    let grammar = simple();
    let mut recorder = Recorder::default();
    let outcome = parse_with(&grammar, &["b", "c"], Config::default(), &mut recorder).unwrap();

    assert_eq!(
        recorder.actions,
        [
            Action::Expand,
            Action::Expand,
            Action::MomentaryInsuccess,
            Action::AnotherTry,
            Action::Advance,
            Action::Advance,
            Action::Success,
        ]
    );
    assert_eq!(outcome.steps(), 7);
}

#[test]
fn observers_dont_change_the_outcome() {
    let grammar = simple();
    let tokens = ["a", "b", "c"];

    let mut trace = Trace::new(Vec::new());
    let traced = parse_with(&grammar, &tokens, Config::default(), &mut trace).unwrap();
    assert_eq!(traced, parse(&grammar, &tokens).unwrap());

    let written = String::from_utf8(trace.into_inner()).unwrap();
    assert_eq!(written.lines().count(), traced.steps());
    assert!(written.lines().last().unwrap().contains("success"));
}

#[test]
fn fault_empty_grammar() {
    let grammar = GrammarBuilder::default()
        .nonterminal("S")
        .unwrap()
        .start("S")
        .build()
        .unwrap();

    assert_eq!(parse(&grammar, &["a"]), Err(Fault::EmptyGrammar));
}

#[test]
fn fault_start_not_nonterminal() {
    let grammar = GrammarBuilder::default()
        .nonterminal("S")
        .unwrap()
        .terminal("a")
        .unwrap()
        .production("S", ["a"])
        .unwrap()
        .start("a")
        .build()
        .unwrap();

    assert_eq!(
        parse(&grammar, &["a"]),
        Err(Fault::StartNotNonterminal("a".into()))
    );
}

#[test]
fn fault_no_productions() {
    let grammar = Grammar::load(
        "#NONTERMINALS\nS A\n#TERMINALS\na\n#START\nS\n#PRODUCTIONS\nS -> A a\n",
    )
    .unwrap();

    assert_eq!(
        parse(&grammar, &["a"]),
        Err(Fault::NoProductions("A".into()))
    );
}

#[test]
fn fault_undeclared_symbol() {
    let grammar = Grammar::load(
        "#NONTERMINALS\nS\n#TERMINALS\na\n#START\nS\n#PRODUCTIONS\nS -> a | x\n",
    )
    .unwrap();

    let fault = parse(&grammar, &["a"]).unwrap_err();
    assert_eq!(fault, Fault::UndeclaredSymbol("x".into()));
    assert_eq!(
        Diagnostic::from(fault).get_text(),
        "`x` is neither a terminal nor a nonterminal"
    );
}

#[test]
fn fault_step_limit() {
    let grammar = Grammar::load(
        "#NONTERMINALS\nS\n#TERMINALS\na\n#START\nS\n#PRODUCTIONS\nS -> S a | a\n",
    )
    .unwrap();
    let config = Config::default().step_limit(1_000);

    assert_eq!(
        parse_with(&grammar, &["a", "a"], config, &mut ()),
        Err(Fault::StepLimitExceeded(1_000))
    );
}

#[test]
fn step_limit_is_not_hit_by_short_parses() {
    let grammar = simple();
    let config = Config::default().step_limit(7);
    assert!(parse_with(&grammar, &["b", "c"], config, &mut ())
        .unwrap()
        .is_accepted());
}

#[test]
fn links_point_backwards() {
    let grammar = simple();
    let outcome = parse(&grammar, &["b", "c"]).unwrap();
    let tree = outcome.tree().unwrap();

    // Parent and sibling links point back into the node list.
    for (i, node) in tree.nodes().iter().enumerate().skip(1) {
        assert!(node.parent().unwrap().as_usize() < i);
        if let Some(sibling) = node.previous_sibling() {
            assert_eq!(tree.nodes()[sibling.as_usize()].parent(), node.parent());
        }
    }
}

#[test]
fn serializes_to_json() {
    let grammar = Grammar::load(
        "#NONTERMINALS\nS\n#TERMINALS\na\n#START\nS\n#PRODUCTIONS\nS -> a\n",
    )
    .unwrap();
    let outcome = parse(&grammar, &["a"]).unwrap();

    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        serde_json::json!({
            "outcome": "accepted",
            "tree": {
                "nodes": [
                    { "symbol": "S", "parent": null, "previous_sibling": null },
                    { "symbol": "a", "parent": 0, "previous_sibling": null },
                ]
            },
            "steps": 3,
        })
    );

    let rejected = parse(&grammar, &["a", "a"]).unwrap();
    let value = serde_json::to_value(&rejected).unwrap();
    assert_eq!(value["outcome"], "rejected");
    assert_eq!(value["furthest"], 1);
    assert_eq!(value["found"], "a");
}

#[test]
fn parses_what_the_lexer_produces() {
    let grammar = Grammar::load(
        "#NONTERMINALS\nprogram statement value\n\
         #TERMINALS\nidentifier number = ;\n\
         #START\nprogram\n\
         #PRODUCTIONS\n\
         program -> statement ; program | statement ;\n\
         statement -> identifier = value\n\
         value -> identifier | number\n",
    )
    .unwrap();
    let vocabulary = lexer::Vocabulary::load("=\n;\n").unwrap();
    let mut symbols = lexer::SymbolTable::default();

    let pif = lexer::scan("x = 1;\ny = x;", &vocabulary, &mut symbols).unwrap();
    let outcome = parse(&grammar, &pif.terminals()).unwrap();
    assert_eq!(outcome.tree().unwrap().leaves(), pif.terminals());

    let pif = lexer::scan("x = ;", &vocabulary, &mut symbols).unwrap();
    let rejection = rejection(parse(&grammar, &pif.terminals()).unwrap());
    assert_eq!(rejection.furthest(), 2);
    assert_eq!(rejection.expected(), ["identifier", "number"]);
}

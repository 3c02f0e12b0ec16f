//! The backtracking parser.
//!
//! The parser is a state machine. Each step looks at the state, the front of
//! the input stack and the top of the working stack, and picks exactly one
//! [`Action`] to take. Nothing recurses, so deep derivations only cost heap.
//!
//! In the [`State::Normal`] state the parser derives forward. Nonterminals at
//! the front of the input stack are expanded with their first alternative, and
//! terminals which match the token at the cursor are moved to the working
//! stack. A terminal which doesn't match switches to [`State::Backtrack`].
//!
//! While backtracking, matched terminals are put back on the input stack, and
//! the first nonterminal found is expanded again with its next alternative.
//! When a nonterminal runs out of alternatives its name goes back on the input
//! stack and backtracking carries on past it. Running out at the start symbol
//! means the input is rejected.

use common::Index;
use grammar::{Grammar, Problem, Production, SymbolKind};

use crate::{
    stack::{Entry, InputStack, Pending, WorkingStack},
    tree::Node,
    Action,
    Config,
    Derivation,
    DerivationTree,
    Fault,
    Observer,
    Outcome,
    Rejection,
    State,
    Symbol,
};

/// A parse in progress.
///
/// Most of the time [`parse`][crate::parse] is all that's needed. A parser is
/// useful for stepping through a parse one [`Action`] at a time.
#[derive(Debug)]
pub struct Parser<'g, 't> {
    grammar: &'g Grammar,
    tokens: Vec<&'t str>,
    config: Config,
    state: State,
    cursor: usize,
    input: InputStack<'g>,
    working: WorkingStack<'g>,
    tree: DerivationTree<'g>,
    steps: usize,
    furthest: usize,
    expected: Vec<&'g str>,
    first_exhausted: Option<&'g str>,
}

impl<'g, 't> Parser<'g, 't> {
    /// Get ready to parse `tokens`.
    ///
    /// The grammar is checked first, any error [`Grammar::validate`] would
    /// find is a [`Fault`] here. Warnings are fine, but a left-recursive
    /// grammar can keep the parser busy forever unless there's a
    /// [step limit][Config::step_limit].
    pub fn new<S: AsRef<str>>(
        grammar: &'g Grammar,
        tokens: &'t [S],
        config: Config,
    ) -> Result<Self, Fault> {
        if grammar.production_count() == 0 {
            return Err(Fault::EmptyGrammar);
        }

        for problem in grammar.validate() {
            match problem {
                Problem::StartNotNonterminal(start) => {
                    return Err(Fault::StartNotNonterminal(start))
                }
                Problem::NoProductions(nonterminal) => {
                    return Err(Fault::NoProductions(nonterminal))
                }
                Problem::UndeclaredSymbol { symbol, .. } => {
                    return Err(Fault::UndeclaredSymbol(symbol))
                }
                Problem::Unreachable(_) | Problem::LeftRecursive(_) => {}
            }
        }

        let start = grammar.start_symbol();
        let mut input = InputStack::default();
        input.push_front(Pending {
            symbol: start,
            node: Index::START,
        });

        Ok(Parser {
            grammar,
            tokens: tokens.iter().map(|t| t.as_ref()).collect(),
            config,
            state: State::Normal,
            cursor: 0,
            input,
            working: WorkingStack::default(),
            tree: DerivationTree::new(start),
            steps: 0,
            furthest: 0,
            expected: Vec::new(),
            first_exhausted: None,
        })
    }

    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// The position of the next token to match.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn tokens(&self) -> &[&'t str] {
        &self.tokens
    }

    /// The token at the cursor, if there are any left.
    pub fn current_token(&self) -> Option<&'t str> {
        self.tokens.get(self.cursor).copied()
    }

    /// The symbols still to be derived, front first.
    pub fn input_stack(&self) -> impl Iterator<Item = &'g str> + '_ {
        self.input.iter()
    }

    /// What's been done so far, from the bottom of the working stack up.
    pub fn working_stack(&self) -> impl Iterator<Item = Symbol<'g>> + '_ {
        self.working.iter()
    }

    pub fn tree(&self) -> &DerivationTree<'g> {
        &self.tree
    }

    /// The number of actions taken so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Run the parse to the end, showing each step to `observer`.
    pub fn run<O>(mut self, observer: &mut O) -> Result<Outcome<'g>, Fault>
    where
        O: Observer + ?Sized,
    {
        while !self.state.is_halted() {
            let action = self.step()?;

            #[cfg(feature = "trace")]
            self.trace(action);

            observer.observe(action, &self);
        }

        Ok(self.finish())
    }

    /// Take the next action, and say which it was.
    pub fn step(&mut self) -> Result<Action, Fault> {
        if let Some(limit) = self.config.get_step_limit() {
            if self.steps >= limit {
                return Err(Fault::StepLimitExceeded(limit));
            }
        }

        let action = self.next_action()?;
        self.apply(action)?;
        Ok(action)
    }

    /// The action the parser would take next.
    pub fn next_action(&self) -> Result<Action, Fault> {
        match self.state {
            State::Normal => self.next_forward(),
            State::Backtrack => match self.working.last() {
                Some(Entry::Matched { .. }) => Ok(Action::Back),
                Some(Entry::Expanded { .. }) => Ok(Action::AnotherTry),
                None => Err(Fault::NothingToUndo),
            },
            state => Err(Fault::Halted(state)),
        }
    }

    fn next_forward(&self) -> Result<Action, Fault> {
        let head = match self.input.front() {
            Some(head) => head,
            None if self.cursor == self.tokens.len() => return Ok(Action::Success),
            // Only a prefix of the tokens was derived.
            None => return Ok(Action::MomentaryInsuccess),
        };

        match self.grammar.kind(head.symbol) {
            Some(SymbolKind::Nonterminal) => Ok(Action::Expand),
            Some(SymbolKind::Terminal) if self.current_token() == Some(head.symbol) => {
                Ok(Action::Advance)
            }
            Some(SymbolKind::Terminal) => Ok(Action::MomentaryInsuccess),
            None => Err(Fault::UndeclaredSymbol(head.symbol.into())),
        }
    }

    /// Take a specific action.
    ///
    /// This checks the action makes sense for the parser's state and stacks,
    /// but not that it's the action [`Parser::next_action`] would pick.
    pub fn apply(&mut self, action: Action) -> Result<(), Fault> {
        if self.state.is_halted() {
            return Err(Fault::Halted(self.state));
        }

        if action.from_state() != self.state {
            return Err(Fault::WrongState {
                action,
                state: self.state,
            });
        }

        match action {
            Action::Expand => self.expand()?,
            Action::Advance => self.advance()?,
            Action::MomentaryInsuccess => self.momentary_insuccess(),
            Action::Back => self.back()?,
            Action::AnotherTry => self.another_try()?,
            Action::Success => self.success()?,
        }

        self.steps += 1;
        Ok(())
    }

    fn expand(&mut self) -> Result<(), Fault> {
        let grammar = self.grammar;
        let head = self
            .input
            .front()
            .ok_or(Fault::NothingToDerive(Action::Expand))?;

        match grammar.kind(head.symbol) {
            Some(SymbolKind::Nonterminal) => {}
            Some(SymbolKind::Terminal) => return Err(Fault::ExpandTerminal(head.symbol.into())),
            None => return Err(Fault::UndeclaredSymbol(head.symbol.into())),
        }

        let first = grammar
            .productions_for(head.symbol)
            .first()
            .ok_or_else(|| Fault::NoProductions(head.symbol.into()))?;

        self.input.pop_front();
        let children = self.tree.next_index();
        self.derive(head.node, first);
        self.working.push(Entry::Expanded {
            nonterminal: head.symbol,
            alternative: 1,
            node: head.node,
            children,
        });

        Ok(())
    }

    fn advance(&mut self) -> Result<(), Fault> {
        let head = self
            .input
            .front()
            .ok_or(Fault::NothingToDerive(Action::Advance))?;
        let token = self.current_token();

        if !self.grammar.is_terminal(head.symbol) || token != Some(head.symbol) {
            return Err(Fault::AdvanceMismatch {
                expected: head.symbol.into(),
                found: token.map(String::from),
            });
        }

        self.input.pop_front();
        self.working.push(Entry::Matched {
            terminal: head.symbol,
            node: head.node,
        });
        self.cursor += 1;

        if self.cursor > self.furthest {
            self.furthest = self.cursor;
            self.expected.clear();
        }

        Ok(())
    }

    fn momentary_insuccess(&mut self) {
        if let Some(head) = self.input.front() {
            if self.cursor == self.furthest
                && self.grammar.is_terminal(head.symbol)
                && !self.expected.contains(&head.symbol)
            {
                self.expected.push(head.symbol);
            }
        }

        self.state = State::Backtrack;
    }

    fn back(&mut self) -> Result<(), Fault> {
        let (terminal, node) = match self.working.last() {
            Some(Entry::Matched { terminal, node }) => (terminal, node),
            Some(Entry::Expanded { nonterminal, .. }) => {
                return Err(Fault::BackOnNonterminal(nonterminal.into()))
            }
            None => return Err(Fault::NothingToUndo),
        };

        let cursor = self.cursor.checked_sub(1).ok_or(Fault::CursorUnderflow)?;

        self.working.pop();
        self.input.push_front(Pending {
            symbol: terminal,
            node,
        });
        self.cursor = cursor;
        Ok(())
    }

    fn another_try(&mut self) -> Result<(), Fault> {
        let grammar = self.grammar;
        let (nonterminal, alternative, node, children) = match self.working.last() {
            Some(Entry::Expanded {
                nonterminal,
                alternative,
                node,
                children,
            }) => (nonterminal, alternative, node, children),
            Some(Entry::Matched { terminal, .. }) => {
                return Err(Fault::AnotherTryOnTerminal(terminal.into()))
            }
            None => return Err(Fault::NothingToUndo),
        };

        let alternatives = grammar.productions_for(nonterminal);
        let tried = alternative
            .checked_sub(1)
            .and_then(|i| alternatives.get(i))
            .ok_or_else(|| Fault::CorruptFrontier(nonterminal.into()))?;

        self.working.pop();
        self.discard(nonterminal, tried, children)?;

        // Alternatives count from 1, so this is the one after `tried`.
        match alternatives.get(alternative) {
            Some(next) => {
                self.derive(node, next);
                self.working.push(Entry::Expanded {
                    nonterminal,
                    alternative: alternative + 1,
                    node,
                    children,
                });
                self.state = State::Normal;
            }

            None => {
                self.first_exhausted.get_or_insert(nonterminal);

                if self.working.is_empty() {
                    self.state = State::Error;
                } else {
                    self.input.push_front(Pending {
                        symbol: nonterminal,
                        node,
                    });
                }
            }
        }

        Ok(())
    }

    fn success(&mut self) -> Result<(), Fault> {
        if !self.input.is_empty() || self.cursor != self.tokens.len() {
            return Err(Fault::PrematureSuccess);
        }

        self.state = State::Final;
        Ok(())
    }

    /// Add the children for `production` under `node`, and put them on the
    /// front of the input stack.
    fn derive(&mut self, node: Index<Node<'g>>, production: &'g Production) {
        let symbols = production.symbols().iter().map(String::as_str);
        let nodes = self.tree.append_children(node, symbols.clone());

        self.input.prepend(
            symbols
                .zip(nodes)
                .map(|(symbol, node)| Pending { symbol, node }),
        );
    }

    /// Take back the children an alternative added, off the input stack and
    /// out of the tree.
    fn discard(
        &mut self,
        nonterminal: &'g str,
        tried: &Production,
        children: Index<Node<'g>>,
    ) -> Result<(), Fault> {
        for offset in 0..tried.len() {
            match self.input.pop_front() {
                Some(pending) if pending.node.as_usize() == children.as_usize() + offset => {}
                _ => return Err(Fault::CorruptFrontier(nonterminal.into())),
            }
        }

        self.tree.truncate_from(children);
        Ok(())
    }

    fn finish(self) -> Outcome<'g> {
        if self.state == State::Final {
            return Outcome::Accepted(Derivation {
                tree: self.tree,
                steps: self.steps,
            });
        }

        Outcome::Rejected(Rejection {
            first_exhausted: self.first_exhausted.map(String::from),
            furthest: self.furthest,
            found: self.tokens.get(self.furthest).map(|t| t.to_string()),
            expected: self.expected.iter().map(|t| t.to_string()).collect(),
            steps: self.steps,
        })
    }
}

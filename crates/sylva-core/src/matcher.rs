//! The recursive matcher: derives raw item bundles from text and binds them
//! into nodes.
//!
//! Matching has PEG semantics: quantifiers are greedy and a sequence never
//! re-enters an earlier element once a later one fails. Backtracking happens
//! only between choice alternatives, between list separators, and at
//! optional boundaries. Whitespace is skipped before every terminal and
//! never appears in the output items.

use regex_automata::{Anchored, Input};

use crate::grammar::{Grammar, RuleDef};
use crate::pattern::{ChoiceMode, Pattern};
use crate::terminal::{self, Terminal};
use crate::tree::{Item, NodeKind, ParseNode};
use crate::{Error, MAX_RULE_DEPTH};

/// Output of a pattern match before binding: literal text, or a finished
/// child node with the label its context assigned.
enum RawItem {
    Text(String),
    Node {
        label: Option<&'static str>,
        node: ParseNode,
    },
}

/// Match failure. `Mismatch` is an ordinary dead end the caller may
/// backtrack over; `Fatal` aborts the whole parse.
enum Fail {
    Mismatch,
    Fatal(Error),
}

type MatchResult = Result<usize, Fail>;

pub(crate) struct Matcher<'g, 's> {
    grammar: &'g Grammar,
    src: &'s str,
    depth: u32,
    /// Furthest byte offset any terminal failed at; reported in errors.
    furthest: usize,
}

impl<'g, 's> Matcher<'g, 's> {
    pub(crate) fn new(grammar: &'g Grammar, src: &'s str) -> Self {
        Self {
            grammar,
            src,
            depth: 0,
            furthest: 0,
        }
    }

    /// Matches the rule against the entire input (trailing whitespace
    /// tolerated) and binds the result.
    pub(crate) fn parse_to_end(&mut self, def: &RuleDef) -> crate::Result<ParseNode> {
        match self.match_rule(def, 0) {
            Ok((end, node)) => {
                let end = self.skip_ws(end);
                if end == self.src.len() {
                    Ok(node)
                } else {
                    Err(self.syntax_error(def.name, end))
                }
            }
            Err(Fail::Mismatch) => Err(self.syntax_error(def.name, self.furthest)),
            Err(Fail::Fatal(e)) => Err(e),
        }
    }

    fn syntax_error(&self, rule: &str, position: usize) -> Error {
        Error::Syntax {
            rule: rule.to_owned(),
            text: self.src.to_owned(),
            position: position.max(self.furthest),
        }
    }

    fn match_rule(
        &mut self,
        def: &RuleDef,
        pos: usize,
    ) -> Result<(usize, ParseNode), Fail> {
        if self.depth >= MAX_RULE_DEPTH {
            return Err(Fail::Fatal(Error::RecursionLimitExceeded));
        }
        self.depth += 1;
        let mut raw = Vec::new();
        let result = self.match_pattern(&def.pattern, pos, &mut raw);
        self.depth -= 1;
        Ok((result?, bind(def.kind, raw)))
    }

    fn match_pattern(
        &mut self,
        pattern: &Pattern,
        pos: usize,
        out: &mut Vec<RawItem>,
    ) -> MatchResult {
        match pattern {
            Pattern::Terminal(t) => self.match_terminal(t, pos, out),

            Pattern::Rule(name) => {
                let def = self
                    .grammar
                    .get(name)
                    .expect("rule references are validated when the grammar is bound");
                let (end, node) = self.match_rule(def, pos)?;
                out.push(RawItem::Node { label: None, node });
                Ok(end)
            }

            Pattern::Sequence(items) => {
                let mut pos = pos;
                for item in items {
                    pos = self.match_pattern(item, pos, out)?;
                }
                Ok(pos)
            }

            Pattern::Choice {
                mode: ChoiceMode::First,
                alts,
            } => {
                for alt in alts {
                    let mark = out.len();
                    match self.match_pattern(alt, pos, out) {
                        Ok(end) => return Ok(end),
                        Err(Fail::Mismatch) => out.truncate(mark),
                        Err(fatal) => return Err(fatal),
                    }
                }
                Err(Fail::Mismatch)
            }

            Pattern::Choice {
                mode: ChoiceMode::Longest,
                alts,
            } => {
                // Every alternative is evaluated; the earliest of the
                // longest matches wins.
                let mut best: Option<(usize, Vec<RawItem>)> = None;
                for alt in alts {
                    let mut attempt = Vec::new();
                    match self.match_pattern(alt, pos, &mut attempt) {
                        Ok(end) => {
                            if best.as_ref().is_none_or(|(b, _)| end > *b) {
                                best = Some((end, attempt));
                            }
                        }
                        Err(Fail::Mismatch) => {}
                        Err(fatal) => return Err(fatal),
                    }
                }
                match best {
                    Some((end, items)) => {
                        out.extend(items);
                        Ok(end)
                    }
                    None => Err(Fail::Mismatch),
                }
            }

            Pattern::Optional(inner) => {
                let mark = out.len();
                match self.match_pattern(inner, pos, out) {
                    Ok(end) => Ok(end),
                    Err(Fail::Mismatch) => {
                        out.truncate(mark);
                        Ok(pos)
                    }
                    Err(fatal) => Err(fatal),
                }
            }

            Pattern::Repeat { min, max, pattern } => {
                let mut pos = pos;
                let mut count: u32 = 0;
                loop {
                    if max.is_some_and(|m| count >= m) {
                        break;
                    }
                    let mark = out.len();
                    match self.match_pattern(pattern, pos, out) {
                        Ok(end) => {
                            if end == pos && out.len() == mark {
                                break;
                            }
                            let stalled = end == pos;
                            pos = end;
                            count += 1;
                            // A zero-width iteration that produced items is
                            // counted once, then the loop stops.
                            if stalled {
                                break;
                            }
                        }
                        Err(Fail::Mismatch) => {
                            out.truncate(mark);
                            break;
                        }
                        Err(fatal) => return Err(fatal),
                    }
                }
                if count < *min {
                    Err(Fail::Mismatch)
                } else {
                    Ok(pos)
                }
            }

            Pattern::SeparatedList { item, sep } => {
                let mut pos = self.match_pattern(item, pos, out)?;
                loop {
                    let mark = out.len();
                    let sep_pos = self.skip_ws(pos);
                    let Some(len) = terminal::match_literal(sep, &self.src[sep_pos..]) else {
                        break;
                    };
                    out.push(RawItem::Text((*sep).to_owned()));
                    match self.match_pattern(item, sep_pos + len, out) {
                        Ok(end) => pos = end,
                        Err(Fail::Mismatch) => {
                            // The separator belongs to whatever follows the
                            // list (e.g. a trailing '.' after a triples
                            // block), so give it back.
                            out.truncate(mark);
                            break;
                        }
                        Err(fatal) => return Err(fatal),
                    }
                }
                Ok(pos)
            }

            Pattern::Label { name, pattern } => {
                let mark = out.len();
                let end = self.match_pattern(pattern, pos, out)?;
                for item in &mut out[mark..] {
                    if let RawItem::Node { label, node } = item {
                        if let Some(existing) = *label {
                            assert!(
                                existing == *name,
                                "conflicting labels {existing:?} and {name:?} on a {} node",
                                node.kind()
                            );
                        }
                        *label = Some(*name);
                    }
                }
                Ok(end)
            }

            Pattern::NotFollowedBy(inner) => {
                let mut scratch = Vec::new();
                match self.match_pattern(inner, pos, &mut scratch) {
                    Ok(_) => Err(Fail::Mismatch),
                    Err(Fail::Mismatch) => Ok(pos),
                    Err(fatal) => Err(fatal),
                }
            }
        }
    }

    fn match_terminal(
        &mut self,
        t: &Terminal,
        pos: usize,
        out: &mut Vec<RawItem>,
    ) -> MatchResult {
        let pos = self.skip_ws(pos);
        let rest = &self.src[pos..];
        let hit = match t {
            Terminal::Literal(text) => {
                terminal::match_literal(text, rest).map(|len| (len, (*text).to_owned()))
            }
            Terminal::Keyword { text, caseless } => {
                terminal::match_keyword(text, *caseless, rest).map(|len| (len, (*text).to_owned()))
            }
            Terminal::Regex(src_pattern) => {
                let input = Input::new(self.src)
                    .span(pos..self.src.len())
                    .anchored(Anchored::Yes);
                self.grammar
                    .regex(src_pattern)
                    .find(input)
                    .map(|m| (m.end() - pos, self.src[m.range()].to_owned()))
            }
        };
        match hit {
            Some((len, text)) => {
                out.push(RawItem::Text(text));
                Ok(pos + len)
            }
            None => {
                self.furthest = self.furthest.max(pos);
                Err(Fail::Mismatch)
            }
        }
    }

    fn skip_ws(&self, mut pos: usize) -> usize {
        let bytes = self.src.as_bytes();
        while pos < bytes.len() && matches!(bytes[pos], b' ' | b'\t' | b'\r' | b'\n') {
            pos += 1;
        }
        pos
    }
}

/// Converts a raw item bundle into the canonical node for `kind`. Literal
/// matches become terminal items; nested matches become children, with the
/// context-assigned label recorded both on the item and on the child.
fn bind(kind: NodeKind, raw: Vec<RawItem>) -> ParseNode {
    let items = raw
        .into_iter()
        .map(|item| match item {
            RawItem::Text(text) => Item::Terminal(text),
            RawItem::Node { label, mut node } => {
                let label = label.map(str::to_owned);
                node.set_label(label.clone());
                Item::Child { label, node }
            }
        })
        .collect();
    ParseNode::new(kind, items)
}

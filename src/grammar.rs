//! The LL(1) grammar driving the parser: symbols, productions and the predictive table.
//!
//! The table is constructed once, on first use, and is immutable afterwards; concurrent
//! parses share it freely since every parse keeps its own stacks.
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::lexer::TokenKind;

/// Enumeration of the nonterminals of the grammar
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NonTerminal {
    Start,
    Value,
    Object,
    Members,
    MoreMembers,
    Array,
    Elements,
    MoreElements,
}

/// A grammar symbol: a terminal identified by its [TokenKind], a [NonTerminal], or the
/// empty production marker
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Symbol {
    Terminal(TokenKind),
    NonTerminal(NonTerminal),
    Epsilon,
}

/// A production with its left-hand nonterminal and right-hand symbol sequence
#[derive(Debug)]
pub struct Production {
    pub lhs: NonTerminal,
    pub rhs: &'static [Symbol],
}

use NonTerminal::*;
use Symbol::{Epsilon, NonTerminal as N, Terminal as T};

static START_VALUE: Production = Production {
    lhs: Start,
    rhs: &[N(Value)],
};
static VALUE_NULL: Production = Production {
    lhs: Value,
    rhs: &[T(TokenKind::Null)],
};
static VALUE_BOOL: Production = Production {
    lhs: Value,
    rhs: &[T(TokenKind::Bool)],
};
static VALUE_NUM: Production = Production {
    lhs: Value,
    rhs: &[T(TokenKind::Num)],
};
static VALUE_STR: Production = Production {
    lhs: Value,
    rhs: &[T(TokenKind::Str)],
};
static VALUE_OBJECT: Production = Production {
    lhs: Value,
    rhs: &[N(Object)],
};
static VALUE_ARRAY: Production = Production {
    lhs: Value,
    rhs: &[N(Array)],
};
static OBJECT: Production = Production {
    lhs: Object,
    rhs: &[T(TokenKind::StartObject), N(Members), T(TokenKind::EndObject)],
};
static MEMBERS_PAIR: Production = Production {
    lhs: Members,
    rhs: &[
        T(TokenKind::Str),
        T(TokenKind::Colon),
        N(Value),
        N(MoreMembers),
    ],
};
static MEMBERS_EMPTY: Production = Production {
    lhs: Members,
    rhs: &[Epsilon],
};
static MORE_MEMBERS_PAIR: Production = Production {
    lhs: MoreMembers,
    rhs: &[
        T(TokenKind::Comma),
        T(TokenKind::Str),
        T(TokenKind::Colon),
        N(Value),
        N(MoreMembers),
    ],
};
static MORE_MEMBERS_EMPTY: Production = Production {
    lhs: MoreMembers,
    rhs: &[Epsilon],
};
static ARRAY: Production = Production {
    lhs: Array,
    rhs: &[T(TokenKind::StartArray), N(Elements), T(TokenKind::EndArray)],
};
static ELEMENTS_VALUE: Production = Production {
    lhs: Elements,
    rhs: &[N(Value), N(MoreElements)],
};
static ELEMENTS_EMPTY: Production = Production {
    lhs: Elements,
    rhs: &[Epsilon],
};
static MORE_ELEMENTS_VALUE: Production = Production {
    lhs: MoreElements,
    rhs: &[T(TokenKind::Comma), N(Value), N(MoreElements)],
};
static MORE_ELEMENTS_EMPTY: Production = Production {
    lhs: MoreElements,
    rhs: &[Epsilon],
};

/// The terminals that can begin a value - the first set of `Value`
const VALUE_STARTS: &[TokenKind] = &[
    TokenKind::Null,
    TokenKind::Bool,
    TokenKind::Num,
    TokenKind::Str,
    TokenKind::StartObject,
    TokenKind::StartArray,
];

/// The predictive parse table. Each `(nonterminal, terminal)` cell holds at most one
/// production; a missing cell is a parse error.
pub struct PTable {
    cells: HashMap<(NonTerminal, TokenKind), &'static Production>,
}

impl PTable {
    fn add(&mut self, nonterminal: NonTerminal, terminal: TokenKind, production: &'static Production) {
        let previous = self.cells.insert((nonterminal, terminal), production);
        assert!(previous.is_none(), "conflicting parse table cell");
    }

    /// Select the unique production for `(nonterminal, terminal)`, if any
    pub fn lookup(&self, nonterminal: NonTerminal, terminal: TokenKind) -> Option<&'static Production> {
        self.cells.get(&(nonterminal, terminal)).copied()
    }

    fn build() -> Self {
        let mut table = PTable {
            cells: HashMap::new(),
        };
        for &kind in VALUE_STARTS {
            table.add(Start, kind, &START_VALUE);
            table.add(Elements, kind, &ELEMENTS_VALUE);
        }
        table.add(Value, TokenKind::Null, &VALUE_NULL);
        table.add(Value, TokenKind::Bool, &VALUE_BOOL);
        table.add(Value, TokenKind::Num, &VALUE_NUM);
        table.add(Value, TokenKind::Str, &VALUE_STR);
        table.add(Value, TokenKind::StartObject, &VALUE_OBJECT);
        table.add(Value, TokenKind::StartArray, &VALUE_ARRAY);
        table.add(Object, TokenKind::StartObject, &OBJECT);
        table.add(Members, TokenKind::Str, &MEMBERS_PAIR);
        table.add(Members, TokenKind::EndObject, &MEMBERS_EMPTY);
        table.add(MoreMembers, TokenKind::Comma, &MORE_MEMBERS_PAIR);
        table.add(MoreMembers, TokenKind::EndObject, &MORE_MEMBERS_EMPTY);
        table.add(Array, TokenKind::StartArray, &ARRAY);
        table.add(Elements, TokenKind::EndArray, &ELEMENTS_EMPTY);
        table.add(MoreElements, TokenKind::Comma, &MORE_ELEMENTS_VALUE);
        table.add(MoreElements, TokenKind::EndArray, &MORE_ELEMENTS_EMPTY);
        table
    }
}

/// Get the process-wide parse table, constructing it on first use
pub fn ptable() -> &'static PTable {
    static TABLE: OnceLock<PTable> = OnceLock::new();
    TABLE.get_or_init(PTable::build)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_populate_every_value_start_cell() {
        for &kind in VALUE_STARTS {
            assert!(ptable().lookup(Start, kind).is_some());
            assert!(ptable().lookup(Value, kind).is_some());
            assert!(ptable().lookup(Elements, kind).is_some());
        }
    }

    #[test]
    fn should_leave_error_cells_empty() {
        assert!(ptable().lookup(Start, TokenKind::EndOfInput).is_none());
        assert!(ptable().lookup(Start, TokenKind::EndArray).is_none());
        assert!(ptable().lookup(Value, TokenKind::Comma).is_none());
        assert!(ptable().lookup(Members, TokenKind::Comma).is_none());
        assert!(ptable().lookup(MoreMembers, TokenKind::Str).is_none());
        assert!(ptable().lookup(Elements, TokenKind::EndObject).is_none());
        assert!(ptable().lookup(MoreElements, TokenKind::EndObject).is_none());
    }

    #[test]
    fn should_select_epsilon_on_closing_delimiters() {
        let members = ptable().lookup(Members, TokenKind::EndObject).unwrap();
        assert_eq!(members.rhs, &[Symbol::Epsilon]);
        let elements = ptable().lookup(Elements, TokenKind::EndArray).unwrap();
        assert_eq!(elements.rhs, &[Symbol::Epsilon]);
    }

    #[test]
    fn should_keep_production_heads_consistent() {
        for ((nonterminal, _), production) in ptable().cells.iter() {
            assert_eq!(*nonterminal, production.lhs);
        }
    }
}

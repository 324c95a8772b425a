//! Python expression grammar
//!
//! Every function here is generic over [`ExpressionParser`], so the same
//! rules drive both the statement parser and any future embedded use.
//! Parsing functions return the kind of the outermost node they completed,
//! or `None` when no expression starts at the current token. Callers decide
//! how to report the missing expression.
//!
//! Binary operators are wrapped lazily through rowan checkpoints: an operand
//! is parsed first and only becomes the child of a `BIN_EXPR` once an
//! operator follows it.

use rowan::Checkpoint;

use crate::parser::errors::{ErrorCode, ParseContext};
use crate::parser::syntax_kind::SyntaxKind;

/// Trait for parsers that can parse Python expressions
pub trait ExpressionParser {
    /// Kind of the current significant token
    fn current_kind(&self) -> SyntaxKind;

    /// Text of the current significant token
    fn current_text(&self) -> &str;

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == kind
    }

    fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        kinds.contains(&self.current_kind())
    }

    /// Kinds of the significant tokens from the current one onwards
    fn lookahead(&self) -> impl Iterator<Item = SyntaxKind> + '_;

    /// Peek at the kind of the nth significant token ahead (0 is current)
    fn peek_kind(&self, n: usize) -> SyntaxKind {
        self.lookahead().nth(n).unwrap_or(SyntaxKind::EOF)
    }

    /// Position in the raw token stream, used for progress checks
    fn get_pos(&self) -> usize;

    /// Consume the current token, flushing any trivia in front of it
    fn bump(&mut self);

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume `kind` or report that it was expected
    fn expect(&mut self, kind: SyntaxKind) -> bool;

    fn start_node(&mut self, kind: SyntaxKind);
    fn finish_node(&mut self);
    fn checkpoint(&mut self) -> Checkpoint;
    fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind);

    /// Go one bracket, block or prefix operand deeper.
    ///
    /// Returns `false` without changing the depth once
    /// [`MAX_NESTING_DEPTH`](super::MAX_NESTING_DEPTH) levels are open.
    fn enter_nesting(&mut self) -> bool;

    fn exit_nesting(&mut self);

    /// Report an error at the current token without consuming it
    fn error(&mut self, message: impl Into<String>, code: ErrorCode);

    /// Report an error and skip tokens into an `ERROR` node
    ///
    /// Always consumes at least one token unless the parser sits on a
    /// logical line boundary, then stops before any token in `recovery`.
    fn error_recover(&mut self, message: impl Into<String>, code: ErrorCode, recovery: &[SyntaxKind]);
}

// =============================================================================
// Lookahead helpers
// =============================================================================

/// Check for a token that ends the logical line or the block
pub fn at_line_end<P: ExpressionParser>(p: &P) -> bool {
    p.at_any(&[
        SyntaxKind::NEWLINE,
        SyntaxKind::INDENT,
        SyntaxKind::DEDENT,
        SyntaxKind::EOF,
    ])
}

/// Check for a token that can begin an expression
pub fn at_expression_start<P: ExpressionParser>(p: &P) -> bool {
    let kind = p.current_kind();
    kind.is_literal()
        || matches!(
            kind,
            SyntaxKind::IDENT
                | SyntaxKind::NONE_KW
                | SyntaxKind::TRUE_KW
                | SyntaxKind::FALSE_KW
                | SyntaxKind::ELLIPSIS
                | SyntaxKind::L_PAREN
                | SyntaxKind::L_BRACKET
                | SyntaxKind::L_BRACE
                | SyntaxKind::MINUS
                | SyntaxKind::PLUS
                | SyntaxKind::TILDE
                | SyntaxKind::NOT_KW
                | SyntaxKind::LAMBDA_KW
                | SyntaxKind::AWAIT_KW
        )
}

/// Check for an expression start, including a leading `*`
pub fn at_star_expression_start<P: ExpressionParser>(p: &P) -> bool {
    p.at(SyntaxKind::STAR) || at_expression_start(p)
}

/// Check for `for` or `async for` in a comprehension
pub fn at_comprehension_start<P: ExpressionParser>(p: &P) -> bool {
    p.at(SyntaxKind::FOR_KW) || (p.at(SyntaxKind::ASYNC_KW) && p.peek_kind(1) == SyntaxKind::FOR_KW)
}

/// Parse one nesting level deeper.
///
/// Past the nesting limit the rest of the logical line is skipped into a
/// flat `ERROR` node instead, and `ERROR` is returned so callers do not
/// report a missing operand on top.
fn nested<P: ExpressionParser>(
    p: &mut P,
    parse: impl FnOnce(&mut P) -> Option<SyntaxKind>,
) -> Option<SyntaxKind> {
    if !p.enter_nesting() {
        tracing::debug!("expression nesting limit reached");
        p.error_recover(
            ErrorCode::E0408.default_message(),
            ErrorCode::E0408,
            &[],
        );
        return Some(SyntaxKind::ERROR);
    }
    let kind = parse(p);
    p.exit_nesting();
    kind
}

/// Consume a closing delimiter
///
/// A line boundary inside brackets only appears after the lexer abandoned
/// the bracket and already reported it, so no second error is emitted.
pub fn expect_closing<P: ExpressionParser>(p: &mut P, kind: SyntaxKind) -> bool {
    if p.eat(kind) {
        return true;
    }
    if !at_line_end(p) {
        let found = p.current_kind().describe();
        p.error(format!("expected {}, found {}", kind.describe(), found), ErrorCode::E0902);
    }
    false
}

// =============================================================================
// Names
// =============================================================================

/// Name = IDENT (a declared name)
pub fn parse_name<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::NAME);
    p.bump();
    p.finish_node();
}

/// NameRef = IDENT (a referenced name)
pub fn parse_name_ref<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::NAME_REF);
    p.bump();
    p.finish_node();
}

// =============================================================================
// Expression lists
// =============================================================================

/// StarExpressions = StarExpression (',' StarExpression)* ','?
///
/// Produces a `TUPLE_EXPR` as soon as a comma follows the first element.
pub fn parse_star_expressions<P: ExpressionParser>(p: &mut P) -> Option<SyntaxKind> {
    let checkpoint = p.checkpoint();
    let first = parse_star_expression(p)?;
    if !p.at(SyntaxKind::COMMA) {
        return Some(first);
    }
    p.start_node_at(checkpoint, SyntaxKind::TUPLE_EXPR);
    while p.eat(SyntaxKind::COMMA) {
        if !at_star_expression_start(p) {
            break;
        }
        parse_star_expression(p);
    }
    p.finish_node();
    Some(SyntaxKind::TUPLE_EXPR)
}

/// StarExpression = '*' BitwiseOr | NamedExpression
pub fn parse_star_expression<P: ExpressionParser>(p: &mut P) -> Option<SyntaxKind> {
    if p.at(SyntaxKind::STAR) {
        parse_starred(p);
        return Some(SyntaxKind::STARRED_EXPR);
    }
    parse_named_expression(p)
}

fn parse_starred<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::STARRED_EXPR);
    p.bump();
    if parse_bitwise_or(p).is_none() {
        p.error("expected expression after '*'", ErrorCode::E0402);
    }
    p.finish_node();
}

/// TargetList = Target (',' Target)* ','?
/// Target = '*'? BitwiseOr
///
/// Targets stop below comparisons so `for x in y` leaves `in` unconsumed.
pub fn parse_target_list<P: ExpressionParser>(p: &mut P) -> Option<SyntaxKind> {
    let checkpoint = p.checkpoint();
    let first = parse_target(p)?;
    if !p.at(SyntaxKind::COMMA) {
        return Some(first);
    }
    p.start_node_at(checkpoint, SyntaxKind::TUPLE_EXPR);
    while p.eat(SyntaxKind::COMMA) {
        if !at_star_expression_start(p) {
            break;
        }
        parse_target(p);
    }
    p.finish_node();
    Some(SyntaxKind::TUPLE_EXPR)
}

/// Target = '*' BitwiseOr | BitwiseOr
pub fn parse_target<P: ExpressionParser>(p: &mut P) -> Option<SyntaxKind> {
    if p.at(SyntaxKind::STAR) {
        parse_starred(p);
        return Some(SyntaxKind::STARRED_EXPR);
    }
    parse_bitwise_or(p)
}

// =============================================================================
// Precedence chain
// =============================================================================

/// NamedExpression = IDENT ':=' Expression | Expression
pub fn parse_named_expression<P: ExpressionParser>(p: &mut P) -> Option<SyntaxKind> {
    if p.at(SyntaxKind::IDENT) && p.peek_kind(1) == SyntaxKind::COLON_EQ {
        p.start_node(SyntaxKind::NAMED_EXPR);
        parse_name_ref(p);
        p.bump();
        if parse_expression(p).is_none() {
            p.error("expected expression after ':='", ErrorCode::E0406);
        }
        p.finish_node();
        return Some(SyntaxKind::NAMED_EXPR);
    }
    parse_expression(p)
}

/// Expression = Lambda | Disjunction ('if' Disjunction 'else' Expression)?
pub fn parse_expression<P: ExpressionParser>(p: &mut P) -> Option<SyntaxKind> {
    if p.at(SyntaxKind::LAMBDA_KW) {
        return nested(p, |p| Some(parse_lambda(p)));
    }
    let checkpoint = p.checkpoint();
    let kind = parse_disjunction(p)?;
    if !p.at(SyntaxKind::IF_KW) {
        return Some(kind);
    }

    p.start_node_at(checkpoint, SyntaxKind::CONDITIONAL_EXPR);
    p.bump();
    if parse_disjunction(p).is_none() {
        p.error("expected condition after 'if'", ErrorCode::E0402);
    }
    if p.expect(SyntaxKind::ELSE_KW) && nested(p, parse_expression).is_none() {
        p.error("expected expression after 'else'", ErrorCode::E0402);
    }
    p.finish_node();
    Some(SyntaxKind::CONDITIONAL_EXPR)
}

/// Disjunction = Conjunction ('or' Conjunction)*
pub fn parse_disjunction<P: ExpressionParser>(p: &mut P) -> Option<SyntaxKind> {
    parse_boolean_chain(p, SyntaxKind::OR_KW, parse_conjunction::<P>)
}

/// Conjunction = Inversion ('and' Inversion)*
fn parse_conjunction<P: ExpressionParser>(p: &mut P) -> Option<SyntaxKind> {
    parse_boolean_chain(p, SyntaxKind::AND_KW, parse_inversion::<P>)
}

fn parse_boolean_chain<P: ExpressionParser>(
    p: &mut P,
    operator: SyntaxKind,
    operand: fn(&mut P) -> Option<SyntaxKind>,
) -> Option<SyntaxKind> {
    let checkpoint = p.checkpoint();
    let mut kind = operand(p)?;
    while p.at(operator) {
        p.start_node_at(checkpoint, SyntaxKind::BIN_EXPR);
        p.bump();
        if operand(p).is_none() {
            p.error(
                format!("expected expression after {}", operator.describe()),
                ErrorCode::E0402,
            );
        }
        p.finish_node();
        kind = SyntaxKind::BIN_EXPR;
    }
    Some(kind)
}

/// Inversion = 'not' Inversion | Comparison
fn parse_inversion<P: ExpressionParser>(p: &mut P) -> Option<SyntaxKind> {
    if !p.at(SyntaxKind::NOT_KW) {
        return parse_comparison(p);
    }
    p.start_node(SyntaxKind::UNARY_EXPR);
    p.bump();
    if nested(p, parse_inversion).is_none() {
        p.error("expected expression after 'not'", ErrorCode::E0402);
    }
    p.finish_node();
    Some(SyntaxKind::UNARY_EXPR)
}

/// Comparison = BitwiseOr (CompareOp BitwiseOr)*
/// CompareOp = '<' | '>' | '==' | '>=' | '<=' | '!=' | 'in' | 'not' 'in' | 'is' | 'is' 'not'
fn parse_comparison<P: ExpressionParser>(p: &mut P) -> Option<SyntaxKind> {
    let checkpoint = p.checkpoint();
    let mut kind = parse_bitwise_or(p)?;
    loop {
        let operator_len = match p.current_kind() {
            SyntaxKind::LT
            | SyntaxKind::GT
            | SyntaxKind::EQ_EQ
            | SyntaxKind::GT_EQ
            | SyntaxKind::LT_EQ
            | SyntaxKind::BANG_EQ
            | SyntaxKind::IN_KW => 1,
            SyntaxKind::LT_GT => {
                p.error("'<>' is not a valid operator, use '!='", ErrorCode::E0403);
                1
            }
            SyntaxKind::NOT_KW if p.peek_kind(1) == SyntaxKind::IN_KW => 2,
            SyntaxKind::IS_KW if p.peek_kind(1) == SyntaxKind::NOT_KW => 2,
            SyntaxKind::IS_KW => 1,
            _ => break,
        };
        p.start_node_at(checkpoint, SyntaxKind::BIN_EXPR);
        for _ in 0..operator_len {
            p.bump();
        }
        if parse_bitwise_or(p).is_none() {
            p.error("expected expression after comparison operator", ErrorCode::E0402);
        }
        p.finish_node();
        kind = SyntaxKind::BIN_EXPR;
    }
    Some(kind)
}

/// Binding power of the arithmetic and bitwise binary operators
fn binary_power(kind: SyntaxKind) -> Option<u8> {
    let power = match kind {
        SyntaxKind::PIPE => 1,
        SyntaxKind::CARET => 2,
        SyntaxKind::AMP => 3,
        SyntaxKind::SHL | SyntaxKind::SHR => 4,
        SyntaxKind::PLUS | SyntaxKind::MINUS => 5,
        SyntaxKind::STAR
        | SyntaxKind::SLASH
        | SyntaxKind::SLASH_SLASH
        | SyntaxKind::PERCENT
        | SyntaxKind::AT => 6,
        _ => return None,
    };
    Some(power)
}

/// BitwiseOr = Factor (BinaryOp Factor)*, resolved by precedence climbing
///
/// Precedence, loosest first: `|`, `^`, `&`, shifts, `+ -`, `* / // % @`.
pub fn parse_bitwise_or<P: ExpressionParser>(p: &mut P) -> Option<SyntaxKind> {
    parse_binary(p, 1)
}

fn parse_binary<P: ExpressionParser>(p: &mut P, min_power: u8) -> Option<SyntaxKind> {
    let checkpoint = p.checkpoint();
    let mut kind = parse_factor(p)?;
    while let Some(power) = binary_power(p.current_kind()) {
        if power < min_power {
            break;
        }
        p.start_node_at(checkpoint, SyntaxKind::BIN_EXPR);
        let operator = p.current_kind();
        p.bump();
        if parse_binary(p, power + 1).is_none() {
            p.error(
                format!("expected expression after {}", operator.describe()),
                ErrorCode::E0402,
            );
        }
        p.finish_node();
        kind = SyntaxKind::BIN_EXPR;
    }
    Some(kind)
}

/// Factor = ('+' | '-' | '~') Factor | Power
fn parse_factor<P: ExpressionParser>(p: &mut P) -> Option<SyntaxKind> {
    if !p.at_any(&[SyntaxKind::PLUS, SyntaxKind::MINUS, SyntaxKind::TILDE]) {
        return parse_power(p);
    }
    p.start_node(SyntaxKind::UNARY_EXPR);
    p.bump();
    if nested(p, parse_factor).is_none() {
        p.error("expected operand after unary operator", ErrorCode::E0402);
    }
    p.finish_node();
    Some(SyntaxKind::UNARY_EXPR)
}

/// Power = AwaitPrimary ('**' Factor)?
fn parse_power<P: ExpressionParser>(p: &mut P) -> Option<SyntaxKind> {
    let checkpoint = p.checkpoint();
    let kind = parse_await_primary(p)?;
    if !p.at(SyntaxKind::STAR_STAR) {
        return Some(kind);
    }
    p.start_node_at(checkpoint, SyntaxKind::BIN_EXPR);
    p.bump();
    if nested(p, parse_factor).is_none() {
        p.error("expected exponent after '**'", ErrorCode::E0402);
    }
    p.finish_node();
    Some(SyntaxKind::BIN_EXPR)
}

/// AwaitPrimary = 'await' Primary | Primary
fn parse_await_primary<P: ExpressionParser>(p: &mut P) -> Option<SyntaxKind> {
    if !p.at(SyntaxKind::AWAIT_KW) {
        return parse_primary(p);
    }
    p.start_node(SyntaxKind::AWAIT_EXPR);
    p.bump();
    if parse_primary(p).is_none() {
        p.error("expected expression after 'await'", ErrorCode::E0402);
    }
    p.finish_node();
    Some(SyntaxKind::AWAIT_EXPR)
}

/// Primary = Atom (ArgList | '.' Name | Subscript)*
pub fn parse_primary<P: ExpressionParser>(p: &mut P) -> Option<SyntaxKind> {
    let checkpoint = p.checkpoint();
    let mut kind = parse_atom(p)?;
    loop {
        match p.current_kind() {
            SyntaxKind::L_PAREN => {
                p.start_node_at(checkpoint, SyntaxKind::CALL_EXPR);
                nested(p, |p| {
                    parse_arg_list(p);
                    Some(SyntaxKind::ARG_LIST)
                });
                p.finish_node();
                kind = SyntaxKind::CALL_EXPR;
            }
            SyntaxKind::DOT => {
                p.start_node_at(checkpoint, SyntaxKind::ATTR_EXPR);
                p.bump();
                if p.at(SyntaxKind::IDENT) {
                    parse_name(p);
                } else {
                    p.error("expected attribute name after '.'", ErrorCode::E0301);
                }
                p.finish_node();
                kind = SyntaxKind::ATTR_EXPR;
            }
            SyntaxKind::L_BRACKET => {
                p.start_node_at(checkpoint, SyntaxKind::SUBSCRIPT_EXPR);
                nested(p, |p| {
                    parse_subscript(p);
                    Some(SyntaxKind::SUBSCRIPT_EXPR)
                });
                p.finish_node();
                kind = SyntaxKind::SUBSCRIPT_EXPR;
            }
            _ => break,
        }
    }
    Some(kind)
}

// =============================================================================
// Atoms
// =============================================================================

/// Atom = NameRef | Literal | Paren | List | Brace
///
/// Adjacent string tokens form a single implicitly concatenated literal.
fn parse_atom<P: ExpressionParser>(p: &mut P) -> Option<SyntaxKind> {
    match p.current_kind() {
        SyntaxKind::IDENT => {
            parse_name_ref(p);
            Some(SyntaxKind::NAME_REF)
        }
        kind if kind.is_string() => {
            p.start_node(SyntaxKind::LITERAL);
            while p.current_kind().is_string() {
                p.bump();
            }
            p.finish_node();
            Some(SyntaxKind::LITERAL)
        }
        SyntaxKind::INT_NUMBER
        | SyntaxKind::FLOAT_NUMBER
        | SyntaxKind::IMAGINARY_NUMBER
        | SyntaxKind::NONE_KW
        | SyntaxKind::TRUE_KW
        | SyntaxKind::FALSE_KW
        | SyntaxKind::ELLIPSIS => {
            p.start_node(SyntaxKind::LITERAL);
            p.bump();
            p.finish_node();
            Some(SyntaxKind::LITERAL)
        }
        SyntaxKind::L_PAREN => nested(p, |p| Some(parse_paren(p))),
        SyntaxKind::L_BRACKET => nested(p, |p| Some(parse_list(p))),
        SyntaxKind::L_BRACE => nested(p, |p| Some(parse_brace(p))),
        _ => None,
    }
}

/// Paren = '(' ')' | '(' YieldExpr ')' | '(' StarExpression (Comprehension | (',' StarExpression)* ','?) ')'
fn parse_paren<P: ExpressionParser>(p: &mut P) -> SyntaxKind {
    let checkpoint = p.checkpoint();
    p.bump();
    let kind = if p.at(SyntaxKind::R_PAREN) {
        SyntaxKind::TUPLE_EXPR
    } else if p.at(SyntaxKind::YIELD_KW) {
        parse_yield(p);
        SyntaxKind::PAREN_EXPR
    } else {
        parse_sequence_body(p, SyntaxKind::PAREN_EXPR, SyntaxKind::TUPLE_EXPR)
    };
    expect_closing(p, SyntaxKind::R_PAREN);
    p.start_node_at(checkpoint, kind);
    p.finish_node();
    kind
}

/// List = '[' ']' | '[' StarExpression (Comprehension | (',' StarExpression)* ','?) ']'
fn parse_list<P: ExpressionParser>(p: &mut P) -> SyntaxKind {
    let checkpoint = p.checkpoint();
    p.bump();
    let kind = if p.at(SyntaxKind::R_BRACKET) {
        SyntaxKind::LIST_EXPR
    } else {
        parse_sequence_body(p, SyntaxKind::LIST_EXPR, SyntaxKind::LIST_EXPR)
    };
    expect_closing(p, SyntaxKind::R_BRACKET);
    p.start_node_at(checkpoint, kind);
    p.finish_node();
    kind
}

/// Elements of a parenthesized or bracketed display after the opener
///
/// Returns `single` for one element without a comma, `multiple` once a
/// comma appears, and `COMPREHENSION` when a `for` clause follows.
fn parse_sequence_body<P: ExpressionParser>(
    p: &mut P,
    single: SyntaxKind,
    multiple: SyntaxKind,
) -> SyntaxKind {
    if parse_star_expression(p).is_none() {
        p.error_recover(
            "expected expression",
            ErrorCode::E0406,
            ParseContext::Expression.recovery_tokens(),
        );
        return single;
    }
    if at_comprehension_start(p) {
        parse_comprehension_clauses(p);
        return SyntaxKind::COMPREHENSION;
    }
    if !p.at(SyntaxKind::COMMA) {
        return single;
    }
    while p.eat(SyntaxKind::COMMA) {
        if !at_star_expression_start(p) {
            break;
        }
        parse_star_expression(p);
    }
    multiple
}

/// Brace = '{' '}' | '{' DictItems '}' | '{' SetItems '}' | '{' (DictEntry | Expression) Comprehension '}'
fn parse_brace<P: ExpressionParser>(p: &mut P) -> SyntaxKind {
    let checkpoint = p.checkpoint();
    p.bump();

    let kind = if p.at(SyntaxKind::R_BRACE) {
        SyntaxKind::DICT_EXPR
    } else if p.at(SyntaxKind::STAR_STAR) {
        parse_dict_item(p);
        parse_remaining_dict_items(p);
        SyntaxKind::DICT_EXPR
    } else {
        let item = p.checkpoint();
        if parse_star_expression(p).is_none() {
            p.error_recover(
                "expected expression",
                ErrorCode::E0406,
                ParseContext::Expression.recovery_tokens(),
            );
            SyntaxKind::SET_EXPR
        } else if p.at(SyntaxKind::COLON) {
            p.start_node_at(item, SyntaxKind::DICT_ENTRY);
            p.bump();
            if parse_expression(p).is_none() {
                p.error("expected value after ':'", ErrorCode::E0406);
            }
            p.finish_node();
            if at_comprehension_start(p) {
                parse_comprehension_clauses(p);
                SyntaxKind::COMPREHENSION
            } else {
                parse_remaining_dict_items(p);
                SyntaxKind::DICT_EXPR
            }
        } else if at_comprehension_start(p) {
            parse_comprehension_clauses(p);
            SyntaxKind::COMPREHENSION
        } else {
            while p.eat(SyntaxKind::COMMA) {
                if !at_star_expression_start(p) {
                    break;
                }
                parse_star_expression(p);
            }
            SyntaxKind::SET_EXPR
        }
    };

    expect_closing(p, SyntaxKind::R_BRACE);
    p.start_node_at(checkpoint, kind);
    p.finish_node();
    kind
}

fn parse_remaining_dict_items<P: ExpressionParser>(p: &mut P) {
    while p.eat(SyntaxKind::COMMA) {
        if p.at(SyntaxKind::R_BRACE) || at_line_end(p) {
            break;
        }
        parse_dict_item(p);
    }
}

/// DictItem = '**' BitwiseOr | Expression ':' Expression
fn parse_dict_item<P: ExpressionParser>(p: &mut P) {
    if p.at(SyntaxKind::STAR_STAR) {
        p.start_node(SyntaxKind::STARRED_EXPR);
        p.bump();
        if parse_bitwise_or(p).is_none() {
            p.error("expected mapping after '**'", ErrorCode::E0402);
        }
        p.finish_node();
        return;
    }

    if !at_expression_start(p) {
        p.error_recover(
            "expected dictionary key",
            ErrorCode::E0406,
            ParseContext::Expression.recovery_tokens(),
        );
        return;
    }
    p.start_node(SyntaxKind::DICT_ENTRY);
    parse_expression(p);
    if p.expect(SyntaxKind::COLON) && parse_expression(p).is_none() {
        p.error("expected value after ':'", ErrorCode::E0406);
    }
    p.finish_node();
}

/// Comprehension = (CompFor CompIf*)+
/// CompFor = 'async'? 'for' TargetList 'in' Disjunction
/// CompIf = 'if' Disjunction
pub fn parse_comprehension_clauses<P: ExpressionParser>(p: &mut P) {
    while at_comprehension_start(p) {
        p.start_node(SyntaxKind::COMP_FOR);
        p.eat(SyntaxKind::ASYNC_KW);
        p.bump();
        if parse_target_list(p).is_none() {
            p.error("expected loop target after 'for'", ErrorCode::E0406);
        }
        if p.expect(SyntaxKind::IN_KW) && parse_disjunction(p).is_none() {
            p.error("expected iterable after 'in'", ErrorCode::E0406);
        }
        p.finish_node();

        while p.at(SyntaxKind::IF_KW) {
            p.start_node(SyntaxKind::COMP_IF);
            p.bump();
            if parse_disjunction(p).is_none() {
                p.error("expected condition after 'if'", ErrorCode::E0406);
            }
            p.finish_node();
        }
    }
}

// =============================================================================
// Trailers
// =============================================================================

/// ArgList = '(' (Argument (',' Argument)* ','?)? ')'
pub fn parse_arg_list<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::ARG_LIST);
    p.bump();
    loop {
        if p.at(SyntaxKind::R_PAREN) || at_line_end(p) {
            break;
        }
        if !parse_argument(p) {
            let found = p.current_kind().describe();
            p.error_recover(
                format!("unexpected {found} in argument list"),
                ErrorCode::E0405,
                ParseContext::ArgumentList.recovery_tokens(),
            );
        }
        if p.eat(SyntaxKind::COMMA) {
            continue;
        }
        if p.at(SyntaxKind::R_PAREN) || at_line_end(p) {
            break;
        }
        p.error_recover(
            "expected ',' or ')' in argument list",
            ErrorCode::E0902,
            ParseContext::ArgumentList.recovery_tokens(),
        );
    }
    expect_closing(p, SyntaxKind::R_PAREN);
    p.finish_node();
}

/// Argument = ('*' | '**') Expression | Name '=' Expression | NamedExpression Comprehension?
fn parse_argument<P: ExpressionParser>(p: &mut P) -> bool {
    match p.current_kind() {
        SyntaxKind::STAR | SyntaxKind::STAR_STAR => {
            p.start_node(SyntaxKind::STARRED_EXPR);
            p.bump();
            if parse_expression(p).is_none() {
                p.error("expected expression after unpacking operator", ErrorCode::E0405);
            }
            p.finish_node();
            true
        }
        SyntaxKind::IDENT if p.peek_kind(1) == SyntaxKind::EQ => {
            p.start_node(SyntaxKind::KEYWORD_ARG);
            parse_name(p);
            p.bump();
            if parse_expression(p).is_none() {
                p.error("expected value for keyword argument", ErrorCode::E0405);
            }
            p.finish_node();
            true
        }
        _ => {
            let checkpoint = p.checkpoint();
            if parse_named_expression(p).is_none() {
                return false;
            }
            if at_comprehension_start(p) {
                p.start_node_at(checkpoint, SyntaxKind::COMPREHENSION);
                parse_comprehension_clauses(p);
                p.finish_node();
            }
            true
        }
    }
}

/// Subscript = '[' SliceItem (',' SliceItem)* ','? ']'
fn parse_subscript<P: ExpressionParser>(p: &mut P) {
    p.bump();
    loop {
        if p.at(SyntaxKind::R_BRACKET) || at_line_end(p) {
            break;
        }
        if !parse_slice_item(p) {
            p.error_recover(
                "expected index or slice",
                ErrorCode::E0406,
                ParseContext::Subscript.recovery_tokens(),
            );
        }
        if !p.eat(SyntaxKind::COMMA) {
            break;
        }
    }
    expect_closing(p, SyntaxKind::R_BRACKET);
}

/// SliceItem = '*' BitwiseOr | Expression? ':' Expression? (':' Expression?)? | NamedExpression
fn parse_slice_item<P: ExpressionParser>(p: &mut P) -> bool {
    if p.at(SyntaxKind::STAR) {
        parse_starred(p);
        return true;
    }
    let checkpoint = p.checkpoint();
    let has_lower = !p.at(SyntaxKind::COLON) && parse_named_expression(p).is_some();
    if !p.at(SyntaxKind::COLON) {
        return has_lower;
    }
    p.start_node_at(checkpoint, SyntaxKind::SLICE);
    p.bump();
    if at_expression_start(p) {
        parse_expression(p);
    }
    if p.eat(SyntaxKind::COLON) && at_expression_start(p) {
        parse_expression(p);
    }
    p.finish_node();
    true
}

// =============================================================================
// Lambda, yield and parameters
// =============================================================================

/// Lambda = 'lambda' Params? ':' Expression
fn parse_lambda<P: ExpressionParser>(p: &mut P) -> SyntaxKind {
    p.start_node(SyntaxKind::LAMBDA_EXPR);
    p.bump();
    p.start_node(SyntaxKind::PARAM_LIST);
    parse_params(p, ParamStyle::Lambda, SyntaxKind::COLON);
    p.finish_node();
    if p.expect(SyntaxKind::COLON) && parse_expression(p).is_none() {
        p.error("expected lambda body", ErrorCode::E0406);
    }
    p.finish_node();
    SyntaxKind::LAMBDA_EXPR
}

/// YieldExpr = 'yield' 'from' Expression | 'yield' StarExpressions?
pub fn parse_yield<P: ExpressionParser>(p: &mut P) -> SyntaxKind {
    p.start_node(SyntaxKind::YIELD_EXPR);
    p.bump();
    if p.eat(SyntaxKind::FROM_KW) {
        if parse_expression(p).is_none() {
            p.error("expected expression after 'yield from'", ErrorCode::E0406);
        }
    } else if at_star_expression_start(p) {
        parse_star_expressions(p);
    }
    p.finish_node();
    SyntaxKind::YIELD_EXPR
}

/// Whether parameters may carry annotations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamStyle {
    /// `def` parameters: `name: annotation = default`
    Def,
    /// `lambda` parameters: `name = default`
    Lambda,
}

/// ParamList = '(' Params ')'
pub fn parse_param_list<P: ExpressionParser>(p: &mut P) {
    p.start_node(SyntaxKind::PARAM_LIST);
    p.bump();
    parse_params(p, ParamStyle::Def, SyntaxKind::R_PAREN);
    expect_closing(p, SyntaxKind::R_PAREN);
    p.finish_node();
}

/// Params = Param (',' Param)* ','?
fn parse_params<P: ExpressionParser>(p: &mut P, style: ParamStyle, terminator: SyntaxKind) {
    loop {
        if p.at(terminator) || at_line_end(p) {
            break;
        }
        if !parse_param(p, style) {
            let found = p.current_kind().describe();
            p.error_recover(
                format!("expected parameter, found {found}"),
                ErrorCode::E0305,
                ParseContext::ParameterList.recovery_tokens(),
            );
        }
        if p.eat(SyntaxKind::COMMA) {
            continue;
        }
        if p.at(terminator) || at_line_end(p) {
            break;
        }
        p.error_recover(
            format!("expected ',' or {} after parameter", terminator.describe()),
            ErrorCode::E0305,
            ParseContext::ParameterList.recovery_tokens(),
        );
    }
}

/// Param = '/' | '*' (Name Annotation?)? | '**' Name Annotation? | Name Annotation? ('=' Expression)?
fn parse_param<P: ExpressionParser>(p: &mut P, style: ParamStyle) -> bool {
    match p.current_kind() {
        SyntaxKind::SLASH => {
            p.start_node(SyntaxKind::PARAM);
            p.bump();
            p.finish_node();
        }
        SyntaxKind::STAR => {
            p.start_node(SyntaxKind::PARAM);
            p.bump();
            if p.at(SyntaxKind::IDENT) {
                parse_name(p);
                parse_param_annotation(p, style);
            }
            p.finish_node();
        }
        SyntaxKind::STAR_STAR => {
            p.start_node(SyntaxKind::PARAM);
            p.bump();
            if p.at(SyntaxKind::IDENT) {
                parse_name(p);
                parse_param_annotation(p, style);
            } else {
                p.error("expected parameter name after '**'", ErrorCode::E0301);
            }
            p.finish_node();
        }
        SyntaxKind::IDENT => {
            p.start_node(SyntaxKind::PARAM);
            parse_name(p);
            parse_param_annotation(p, style);
            if p.at(SyntaxKind::EQ) {
                p.start_node(SyntaxKind::PARAM_DEFAULT);
                p.bump();
                if parse_expression(p).is_none() {
                    p.error("expected default value after '='", ErrorCode::E0406);
                }
                p.finish_node();
            }
            p.finish_node();
        }
        _ => return false,
    }
    true
}

fn parse_param_annotation<P: ExpressionParser>(p: &mut P, style: ParamStyle) {
    if style == ParamStyle::Lambda || !p.at(SyntaxKind::COLON) {
        return;
    }
    p.start_node(SyntaxKind::TYPE_ANNOTATION);
    p.bump();
    if parse_star_expression(p).is_none() {
        p.error("expected type annotation after ':'", ErrorCode::E0406);
    }
    p.finish_node();
}

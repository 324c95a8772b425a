//! Python statement grammar
//!
//! This module contains functions for parsing Python statements:
//! - Definitions (`def`, `class`, decorators)
//! - Compound statements (`if`, `while`, `for`, `try`, `with`)
//! - Simple statements (assignments, imports, `return`, `pass`, ...)
//! - Blocks and the recovery rules that keep a broken file parseable
//!
//! Recovery never crosses a logical line boundary, so one bad statement
//! cannot swallow the definitions that follow it.

use rowan::{Checkpoint, TextRange, TextSize};

use super::expressions::{
    ExpressionParser, at_expression_start, at_line_end, at_star_expression_start,
    expect_closing, parse_arg_list, parse_expression, parse_name, parse_named_expression,
    parse_param_list, parse_star_expressions, parse_target, parse_target_list, parse_yield,
};
use crate::parser::errors::{ErrorCode, ParseContext, SyntaxError};
use crate::parser::syntax_kind::SyntaxKind;

/// Keywords that continue a compound statement
pub const CLAUSE_KEYWORDS: &[SyntaxKind] = &[
    SyntaxKind::ELIF_KW,
    SyntaxKind::ELSE_KW,
    SyntaxKind::EXCEPT_KW,
    SyntaxKind::FINALLY_KW,
];

/// Expression kinds that may be assigned to
const ASSIGNMENT_TARGETS: &[SyntaxKind] = &[
    SyntaxKind::NAME_REF,
    SyntaxKind::ATTR_EXPR,
    SyntaxKind::SUBSCRIPT_EXPR,
    SyntaxKind::TUPLE_EXPR,
    SyntaxKind::LIST_EXPR,
    SyntaxKind::PAREN_EXPR,
    SyntaxKind::STARRED_EXPR,
];

/// Expression kinds that may carry an annotation
const ANNOTATION_TARGETS: &[SyntaxKind] = &[
    SyntaxKind::NAME_REF,
    SyntaxKind::ATTR_EXPR,
    SyntaxKind::SUBSCRIPT_EXPR,
    SyntaxKind::PAREN_EXPR,
];

/// Trait for statement-level parsing operations
///
/// Extends ExpressionParser with context tracking and the offsets
/// needed to report diagnostics spanning several tokens.
pub trait StatementParser: ExpressionParser {
    /// Enter a parse context used for error messages
    fn push_context(&mut self, context: ParseContext);

    fn pop_context(&mut self);

    /// Innermost active parse context
    fn context(&self) -> ParseContext;

    /// Start offset of the current significant token
    fn current_offset(&self) -> TextSize;

    /// End offset of the last consumed significant token
    fn last_end(&self) -> TextSize;

    /// Record a fully built diagnostic
    fn push_error(&mut self, error: SyntaxError);
}

/// Whether a statement consumed its own line terminator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineEnd {
    Open,
    Closed,
}

// =============================================================================
// Statement sequences
// =============================================================================

/// Statements = Statement* (until DEDENT or EOF)
pub fn parse_statements<P: StatementParser>(p: &mut P) {
    while !p.at_any(&[SyntaxKind::DEDENT, SyntaxKind::EOF]) {
        let start = p.get_pos();
        parse_statement(p);
        if p.get_pos() == start {
            let found = p.current_kind().describe();
            tracing::debug!(found = %found, "parser stuck, forcing progress");
            p.error_recover(format!("unexpected {found}"), ErrorCode::E0999, &[]);
            if p.get_pos() == start {
                break;
            }
        }
    }
}

/// Statement = CompoundStatement | SimpleStatements
pub fn parse_statement<P: StatementParser>(p: &mut P) {
    match p.current_kind() {
        // Empty logical line left behind by bracket recovery
        SyntaxKind::NEWLINE => p.bump(),
        SyntaxKind::INDENT => parse_unexpected_indent(p),
        SyntaxKind::AT => parse_decorated(p),
        SyntaxKind::DEF_KW => {
            let checkpoint = p.checkpoint();
            parse_function_def(p, checkpoint);
        }
        SyntaxKind::CLASS_KW => {
            let checkpoint = p.checkpoint();
            parse_class_def(p, checkpoint);
        }
        SyntaxKind::ASYNC_KW => match p.peek_kind(1) {
            SyntaxKind::DEF_KW => {
                let checkpoint = p.checkpoint();
                parse_function_def(p, checkpoint);
            }
            SyntaxKind::FOR_KW => parse_for(p),
            SyntaxKind::WITH_KW => parse_with(p),
            _ => parse_simple_statements(p),
        },
        SyntaxKind::IF_KW => parse_if(p),
        SyntaxKind::WHILE_KW => parse_while(p),
        SyntaxKind::FOR_KW => parse_for(p),
        SyntaxKind::TRY_KW => parse_try(p),
        SyntaxKind::WITH_KW => parse_with(p),
        kind if CLAUSE_KEYWORDS.contains(&kind) => parse_orphan_clause(p),
        _ => parse_simple_statements(p),
    }
}

/// Suite = NEWLINE INDENT Statements DEDENT | SimpleStatements
///
/// The suite is always wrapped in a `BLOCK`, even when it is empty.
pub fn parse_suite<P: StatementParser>(p: &mut P, context: ParseContext) {
    p.push_context(context);
    p.start_node(SyntaxKind::BLOCK);
    if p.eat(SyntaxKind::NEWLINE) {
        if p.eat(SyntaxKind::INDENT) {
            parse_indented_statements(p);
            p.eat(SyntaxKind::DEDENT);
        } else {
            p.error(
                format!("expected an indented block {}", context.description()),
                ErrorCode::E0206,
            );
        }
    } else if at_line_end(p) {
        p.error(
            format!("expected an indented block {}", context.description()),
            ErrorCode::E0206,
        );
    } else {
        parse_simple_statements(p);
    }
    p.finish_node();
    p.pop_context();
}

/// A block indented deeper than its context, parsed as a nested `BLOCK`
fn parse_unexpected_indent<P: StatementParser>(p: &mut P) {
    p.error("unexpected indent", ErrorCode::E0208);
    p.start_node(SyntaxKind::BLOCK);
    p.bump();
    parse_indented_statements(p);
    p.eat(SyntaxKind::DEDENT);
    p.finish_node();
}

/// The statements after an INDENT, one nesting level deeper
///
/// Past the nesting limit the block is kept as a flat `ERROR` node that
/// ends before its closing DEDENT.
fn parse_indented_statements<P: StatementParser>(p: &mut P) {
    if p.enter_nesting() {
        parse_statements(p);
        p.exit_nesting();
        return;
    }

    let start = p.current_offset();
    p.start_node(SyntaxKind::ERROR);
    let mut open = 1usize;
    loop {
        match p.current_kind() {
            SyntaxKind::EOF => break,
            SyntaxKind::INDENT => open += 1,
            SyntaxKind::DEDENT => {
                open -= 1;
                if open == 0 {
                    break;
                }
            }
            _ => {}
        }
        p.bump();
    }
    p.finish_node();

    let range = TextRange::new(start, p.last_end().max(start));
    tracing::debug!(?range, "block nesting limit reached");
    p.push_error(
        SyntaxError::from_code(ErrorCode::E0210, range)
            .with_hint("the block is kept as unparsed text"),
    );
}

/// Consume the ':' ending a compound statement header
///
/// Stray tokens before the ':' are skipped so the body still parses.
fn expect_block_colon<P: StatementParser>(p: &mut P, header: &str) {
    if p.eat(SyntaxKind::COLON) {
        return;
    }
    let message = format!("expected ':' after {header}");
    if at_line_end(p) {
        p.error(message, ErrorCode::E0307);
        return;
    }
    p.error_recover(message, ErrorCode::E0307, &[SyntaxKind::COLON, SyntaxKind::NEWLINE]);
    p.eat(SyntaxKind::COLON);
}

/// Skip the rest of a statement that does not parse
fn recover_statement<P: StatementParser>(p: &mut P) {
    let found = p.current_kind().describe();
    let error = SyntaxError::unexpected(&found, p.context(), TextRange::empty(p.last_end()));
    p.error_recover(error.message, error.code, &[SyntaxKind::NEWLINE]);
}

// =============================================================================
// Definitions
// =============================================================================

/// Decorated = Decorator+ (FunctionDef | ClassDef)
fn parse_decorated<P: StatementParser>(p: &mut P) {
    let checkpoint = p.checkpoint();
    while p.at(SyntaxKind::AT) {
        parse_decorator(p);
    }
    match p.current_kind() {
        SyntaxKind::DEF_KW => parse_function_def(p, checkpoint),
        SyntaxKind::ASYNC_KW if p.peek_kind(1) == SyntaxKind::DEF_KW => {
            parse_function_def(p, checkpoint)
        }
        SyntaxKind::CLASS_KW => parse_class_def(p, checkpoint),
        _ => {
            p.error(
                "decorator must be followed by a function or class definition",
                ErrorCode::E0303,
            );
            p.start_node_at(checkpoint, SyntaxKind::ERROR);
            p.finish_node();
        }
    }
}

/// Decorator = '@' NamedExpression NEWLINE
fn parse_decorator<P: StatementParser>(p: &mut P) {
    p.push_context(ParseContext::Decorator);
    p.start_node(SyntaxKind::DECORATOR);
    p.bump();
    if parse_named_expression(p).is_none() {
        p.error("expected decorator expression after '@'", ErrorCode::E0406);
    }
    if !p.eat(SyntaxKind::NEWLINE) {
        if !at_line_end(p) {
            p.error_recover(
                "expected newline after decorator",
                ErrorCode::E0209,
                &[SyntaxKind::NEWLINE],
            );
        }
        p.eat(SyntaxKind::NEWLINE);
    }
    p.finish_node();
    p.pop_context();
}

/// FunctionDef = Decorator* 'async'? 'def' Name TypeParams? ParamList ('->' Expression)? ':' Suite
///
/// The node starts at `checkpoint` so preceding decorators become children.
pub fn parse_function_def<P: StatementParser>(p: &mut P, checkpoint: Checkpoint) {
    p.start_node_at(checkpoint, SyntaxKind::FUNCTION_DEF);
    p.push_context(ParseContext::FunctionHeader);
    p.eat(SyntaxKind::ASYNC_KW);
    p.bump();

    if p.at(SyntaxKind::IDENT) {
        parse_name(p);
    } else {
        p.error("expected function name after 'def'", ErrorCode::E0301);
    }
    if p.at(SyntaxKind::L_BRACKET) {
        parse_type_params(p);
    }
    if p.at(SyntaxKind::L_PAREN) {
        parse_param_list(p);
    } else {
        p.error("expected '(' to start the parameter list", ErrorCode::E0304);
    }
    if p.at(SyntaxKind::ARROW) {
        p.start_node(SyntaxKind::RETURN_TYPE);
        p.bump();
        if parse_expression(p).is_none() {
            p.error("expected return annotation after '->'", ErrorCode::E0406);
        }
        p.finish_node();
    }
    expect_block_colon(p, "function signature");
    p.pop_context();

    parse_suite(p, ParseContext::FunctionBody);
    p.finish_node();
}

/// ClassDef = Decorator* 'class' Name TypeParams? ArgList? ':' Suite
pub fn parse_class_def<P: StatementParser>(p: &mut P, checkpoint: Checkpoint) {
    p.start_node_at(checkpoint, SyntaxKind::CLASS_DEF);
    p.push_context(ParseContext::ClassHeader);
    p.bump();

    if p.at(SyntaxKind::IDENT) {
        parse_name(p);
    } else {
        p.error("expected class name after 'class'", ErrorCode::E0301);
    }
    if p.at(SyntaxKind::L_BRACKET) {
        parse_type_params(p);
    }
    if p.at(SyntaxKind::L_PAREN) {
        parse_arg_list(p);
    }
    expect_block_colon(p, "class header");
    p.pop_context();

    parse_suite(p, ParseContext::ClassBody);
    p.finish_node();
}

/// TypeParams = '[' TypeParam (',' TypeParam)* ','? ']'
/// TypeParam = ('*' | '**')? Name (':' Expression)? ('=' Expression)?
fn parse_type_params<P: StatementParser>(p: &mut P) {
    p.start_node(SyntaxKind::TYPE_PARAMS);
    p.bump();
    loop {
        if p.at(SyntaxKind::R_BRACKET) || at_line_end(p) {
            break;
        }
        if !p.eat(SyntaxKind::STAR) {
            p.eat(SyntaxKind::STAR_STAR);
        }
        if p.at(SyntaxKind::IDENT) {
            parse_name(p);
            if p.eat(SyntaxKind::COLON) && parse_expression(p).is_none() {
                p.error("expected bound after ':'", ErrorCode::E0406);
            }
            if p.eat(SyntaxKind::EQ) && parse_expression(p).is_none() {
                p.error("expected default after '='", ErrorCode::E0406);
            }
        } else {
            p.error_recover(
                "expected type parameter",
                ErrorCode::E0305,
                ParseContext::Subscript.recovery_tokens(),
            );
        }
        if !p.eat(SyntaxKind::COMMA) {
            break;
        }
    }
    expect_closing(p, SyntaxKind::R_BRACKET);
    p.finish_node();
}

// =============================================================================
// Compound statements
// =============================================================================

/// IfStmt = 'if' NamedExpression ':' Suite ElifClause* ElseClause?
fn parse_if<P: StatementParser>(p: &mut P) {
    p.start_node(SyntaxKind::IF_STMT);
    p.bump();
    parse_condition(p, "'if'");
    expect_block_colon(p, "'if' condition");
    parse_suite(p, ParseContext::Block);

    while p.at(SyntaxKind::ELIF_KW) {
        p.start_node(SyntaxKind::ELIF_CLAUSE);
        p.bump();
        parse_condition(p, "'elif'");
        expect_block_colon(p, "'elif' condition");
        parse_suite(p, ParseContext::Block);
        p.finish_node();
    }
    if p.at(SyntaxKind::ELSE_KW) {
        parse_else_clause(p);
    }
    p.finish_node();
}

/// WhileStmt = 'while' NamedExpression ':' Suite ElseClause?
fn parse_while<P: StatementParser>(p: &mut P) {
    p.start_node(SyntaxKind::WHILE_STMT);
    p.bump();
    parse_condition(p, "'while'");
    expect_block_colon(p, "'while' condition");
    parse_suite(p, ParseContext::Block);
    if p.at(SyntaxKind::ELSE_KW) {
        parse_else_clause(p);
    }
    p.finish_node();
}

/// ForStmt = 'async'? 'for' TargetList 'in' StarExpressions ':' Suite ElseClause?
fn parse_for<P: StatementParser>(p: &mut P) {
    p.start_node(SyntaxKind::FOR_STMT);
    p.eat(SyntaxKind::ASYNC_KW);
    p.bump();
    if parse_target_list(p).is_none() {
        p.error("expected loop target after 'for'", ErrorCode::E0406);
    }
    if p.expect(SyntaxKind::IN_KW) && parse_star_expressions(p).is_none() {
        p.error("expected iterable after 'in'", ErrorCode::E0406);
    }
    expect_block_colon(p, "'for' clause");
    parse_suite(p, ParseContext::Block);
    if p.at(SyntaxKind::ELSE_KW) {
        parse_else_clause(p);
    }
    p.finish_node();
}

/// TryStmt = 'try' ':' Suite ExceptClause* ElseClause? FinallyClause?
fn parse_try<P: StatementParser>(p: &mut P) {
    p.start_node(SyntaxKind::TRY_STMT);
    p.bump();
    expect_block_colon(p, "'try'");
    parse_suite(p, ParseContext::Block);

    let mut has_handler = false;
    while p.at(SyntaxKind::EXCEPT_KW) {
        has_handler = true;
        p.start_node(SyntaxKind::EXCEPT_CLAUSE);
        parse_except_header(p);
        parse_suite(p, ParseContext::Block);
        p.finish_node();
    }
    if p.at(SyntaxKind::ELSE_KW) {
        parse_else_clause(p);
    }
    if p.at(SyntaxKind::FINALLY_KW) {
        has_handler = true;
        p.start_node(SyntaxKind::FINALLY_CLAUSE);
        p.bump();
        expect_block_colon(p, "'finally'");
        parse_suite(p, ParseContext::Block);
        p.finish_node();
    }
    if !has_handler {
        p.error("expected 'except' or 'finally' block", ErrorCode::E0902);
    }
    p.finish_node();
}

/// ExceptHeader = 'except' '*'? (Expression ('as' Name)?)? ':'
fn parse_except_header<P: StatementParser>(p: &mut P) {
    p.bump();
    p.eat(SyntaxKind::STAR);
    if at_expression_start(p) {
        parse_expression(p);
        if p.eat(SyntaxKind::AS_KW) {
            if p.at(SyntaxKind::IDENT) {
                parse_name(p);
            } else {
                p.error("expected name after 'as'", ErrorCode::E0301);
            }
        }
    }
    expect_block_colon(p, "'except' clause");
}

/// WithStmt = 'async'? 'with' ('(' WithItems ')' | WithItems) ':' Suite
fn parse_with<P: StatementParser>(p: &mut P) {
    p.start_node(SyntaxKind::WITH_STMT);
    p.eat(SyntaxKind::ASYNC_KW);
    p.bump();
    if p.at(SyntaxKind::L_PAREN) && at_parenthesized_with_items(p) {
        p.bump();
        parse_with_items(p);
        expect_closing(p, SyntaxKind::R_PAREN);
    } else {
        parse_with_items(p);
    }
    expect_block_colon(p, "'with' items");
    parse_suite(p, ParseContext::Block);
    p.finish_node();
}

/// Distinguish `with (a as b, c):` from `with (a, b)[0]:`
///
/// Items are parenthesized when the matching ')' is directly followed by
/// ':' and the parentheses hold an `as` or a comma at their top level.
fn at_parenthesized_with_items<P: StatementParser>(p: &P) -> bool {
    let mut depth = 0usize;
    let mut separated = false;
    let mut kinds = p.lookahead();
    while let Some(kind) = kinds.next() {
        match kind {
            SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET | SyntaxKind::L_BRACE => depth += 1,
            SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET | SyntaxKind::R_BRACE => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return separated && kinds.next() == Some(SyntaxKind::COLON);
                }
            }
            SyntaxKind::AS_KW | SyntaxKind::COMMA if depth == 1 => separated = true,
            SyntaxKind::NEWLINE | SyntaxKind::EOF => return false,
            _ => {}
        }
    }
    false
}

/// WithItems = WithItem (',' WithItem)* ','?
fn parse_with_items<P: StatementParser>(p: &mut P) {
    loop {
        p.start_node(SyntaxKind::WITH_ITEM);
        if parse_expression(p).is_none() {
            p.error("expected context manager after 'with'", ErrorCode::E0406);
        }
        if p.eat(SyntaxKind::AS_KW) && parse_target(p).is_none() {
            p.error("expected target after 'as'", ErrorCode::E0406);
        }
        p.finish_node();
        if !p.eat(SyntaxKind::COMMA) || !at_expression_start(p) {
            break;
        }
    }
}

/// ElseClause = 'else' ':' Suite
fn parse_else_clause<P: StatementParser>(p: &mut P) {
    p.start_node(SyntaxKind::ELSE_CLAUSE);
    p.bump();
    expect_block_colon(p, "'else'");
    parse_suite(p, ParseContext::Block);
    p.finish_node();
}

fn parse_condition<P: StatementParser>(p: &mut P, keyword: &str) {
    if parse_named_expression(p).is_none() {
        p.error(format!("expected condition after {keyword}"), ErrorCode::E0406);
    }
}

/// A clause keyword with no statement to attach to
///
/// The clause body is still parsed so the definitions inside survive.
fn parse_orphan_clause<P: StatementParser>(p: &mut P) {
    let keyword = p.current_kind();
    p.error(
        format!("{} without a matching statement", keyword.describe()),
        ErrorCode::E0306,
    );
    p.start_node(SyntaxKind::ERROR);
    p.bump();
    p.eat(SyntaxKind::STAR);
    if at_expression_start(p) {
        parse_named_expression(p);
        if p.eat(SyntaxKind::AS_KW) && p.at(SyntaxKind::IDENT) {
            parse_name(p);
        }
    }
    expect_block_colon(p, &keyword.describe());
    parse_suite(p, ParseContext::Block);
    p.finish_node();
}

// =============================================================================
// Simple statements
// =============================================================================

/// SimpleStatements = SimpleStatement (';' SimpleStatement)* ';'? NEWLINE
pub fn parse_simple_statements<P: StatementParser>(p: &mut P) {
    loop {
        if parse_simple_statement(p) == LineEnd::Closed {
            return;
        }
        if !p.eat(SyntaxKind::SEMICOLON) || at_line_end(p) {
            break;
        }
    }
    finish_statement_line(p);
}

fn finish_statement_line<P: StatementParser>(p: &mut P) {
    if p.eat(SyntaxKind::NEWLINE) || at_line_end(p) {
        return;
    }
    let found = p.current_kind().describe();
    p.error_recover(
        format!("expected end of statement, found {found}"),
        ErrorCode::E0209,
        &[SyntaxKind::NEWLINE],
    );
    p.eat(SyntaxKind::NEWLINE);
}

fn parse_simple_statement<P: StatementParser>(p: &mut P) -> LineEnd {
    match p.current_kind() {
        SyntaxKind::PASS_KW => parse_keyword_statement(p, SyntaxKind::PASS_STMT),
        SyntaxKind::BREAK_KW => parse_keyword_statement(p, SyntaxKind::BREAK_STMT),
        SyntaxKind::CONTINUE_KW => parse_keyword_statement(p, SyntaxKind::CONTINUE_STMT),
        SyntaxKind::RETURN_KW => parse_return(p),
        SyntaxKind::RAISE_KW => parse_raise(p),
        SyntaxKind::GLOBAL_KW => parse_name_list_statement(p, SyntaxKind::GLOBAL_STMT),
        SyntaxKind::NONLOCAL_KW => parse_name_list_statement(p, SyntaxKind::NONLOCAL_STMT),
        SyntaxKind::DEL_KW => parse_del(p),
        SyntaxKind::ASSERT_KW => parse_assert(p),
        SyntaxKind::IMPORT_KW => parse_import(p),
        SyntaxKind::FROM_KW => parse_from_import(p),
        _ => return parse_expression_statement(p),
    }
    LineEnd::Open
}

fn parse_keyword_statement<P: StatementParser>(p: &mut P, kind: SyntaxKind) {
    p.start_node(kind);
    p.bump();
    p.finish_node();
}

/// ReturnStmt = 'return' StarExpressions?
fn parse_return<P: StatementParser>(p: &mut P) {
    p.start_node(SyntaxKind::RETURN_STMT);
    p.bump();
    if at_star_expression_start(p) {
        parse_star_expressions(p);
    }
    p.finish_node();
}

/// RaiseStmt = 'raise' (Expression ('from' Expression)?)?
fn parse_raise<P: StatementParser>(p: &mut P) {
    p.start_node(SyntaxKind::RAISE_STMT);
    p.bump();
    if at_expression_start(p) {
        parse_expression(p);
        if p.eat(SyntaxKind::FROM_KW) && parse_expression(p).is_none() {
            p.error("expected exception cause after 'from'", ErrorCode::E0406);
        }
    }
    p.finish_node();
}

/// GlobalStmt = 'global' Name (',' Name)*
/// NonlocalStmt = 'nonlocal' Name (',' Name)*
fn parse_name_list_statement<P: StatementParser>(p: &mut P, kind: SyntaxKind) {
    p.start_node(kind);
    p.bump();
    loop {
        if !p.at(SyntaxKind::IDENT) {
            p.error("expected a name", ErrorCode::E0301);
            break;
        }
        parse_name(p);
        if !p.eat(SyntaxKind::COMMA) {
            break;
        }
    }
    p.finish_node();
}

/// DelStmt = 'del' TargetList
fn parse_del<P: StatementParser>(p: &mut P) {
    p.start_node(SyntaxKind::DEL_STMT);
    p.bump();
    if parse_target_list(p).is_none() {
        p.error("expected target after 'del'", ErrorCode::E0406);
    }
    p.finish_node();
}

/// AssertStmt = 'assert' Expression (',' Expression)?
fn parse_assert<P: StatementParser>(p: &mut P) {
    p.start_node(SyntaxKind::ASSERT_STMT);
    p.bump();
    if parse_expression(p).is_none() {
        p.error("expected condition after 'assert'", ErrorCode::E0406);
    }
    if p.eat(SyntaxKind::COMMA) && parse_expression(p).is_none() {
        p.error("expected message after ','", ErrorCode::E0406);
    }
    p.finish_node();
}

/// ExpressionStatement = Target ':' Expression ('=' Value)?
///                     | Target ('=' Value)+
///                     | Target AugAssignOp Value
///                     | StarExpressions
///
/// A call followed by ':' is a function header missing its `def`; its
/// body is parsed inside an `ERROR` node so nested definitions survive.
fn parse_expression_statement<P: StatementParser>(p: &mut P) -> LineEnd {
    let checkpoint = p.checkpoint();
    let start = p.current_offset();
    let target = if p.at(SyntaxKind::YIELD_KW) {
        Some(parse_yield(p))
    } else {
        parse_star_expressions(p)
    };
    let Some(target) = target else {
        recover_statement(p);
        return LineEnd::Open;
    };

    match p.current_kind() {
        SyntaxKind::COLON if target == SyntaxKind::CALL_EXPR => {
            parse_missing_def(p, checkpoint, start);
            return LineEnd::Closed;
        }
        SyntaxKind::COLON => {
            p.start_node_at(checkpoint, SyntaxKind::ASSIGNMENT);
            if !ANNOTATION_TARGETS.contains(&target) {
                p.error("only a single name, attribute or subscript can be annotated", ErrorCode::E0407);
            }
            p.push_context(ParseContext::TypeAnnotation);
            p.start_node(SyntaxKind::TYPE_ANNOTATION);
            p.bump();
            if parse_expression(p).is_none() {
                p.error("expected type annotation after ':'", ErrorCode::E0406);
            }
            p.finish_node();
            p.pop_context();
            if p.eat(SyntaxKind::EQ) {
                parse_assigned_value(p);
            }
            p.finish_node();
        }
        SyntaxKind::EQ => {
            p.start_node_at(checkpoint, SyntaxKind::ASSIGNMENT);
            if !ASSIGNMENT_TARGETS.contains(&target) {
                p.error("cannot assign to this expression", ErrorCode::E0407);
            }
            while p.eat(SyntaxKind::EQ) {
                parse_assigned_value(p);
            }
            p.finish_node();
        }
        kind if kind.is_aug_assign() => {
            p.start_node_at(checkpoint, SyntaxKind::AUG_ASSIGN);
            p.bump();
            parse_assigned_value(p);
            p.finish_node();
        }
        _ => {
            p.start_node_at(checkpoint, SyntaxKind::EXPR_STMT);
            p.finish_node();
        }
    }
    LineEnd::Open
}

/// Value = YieldExpr | StarExpressions
fn parse_assigned_value<P: StatementParser>(p: &mut P) {
    if p.at(SyntaxKind::YIELD_KW) {
        parse_yield(p);
    } else if parse_star_expressions(p).is_none() {
        p.error("expected value after '='", ErrorCode::E0406);
    }
}

fn parse_missing_def<P: StatementParser>(p: &mut P, checkpoint: Checkpoint, start: TextSize) {
    p.start_node_at(checkpoint, SyntaxKind::ERROR);
    p.bump();
    let range = TextRange::new(start, p.last_end());
    tracing::debug!(?range, "function header without 'def'");
    p.push_error(
        SyntaxError::new("function definition is missing 'def'", range, ErrorCode::E0302)
            .with_hint("add 'def' before the function name"),
    );
    parse_suite(p, ParseContext::FunctionBody);
    p.finish_node();
}

// =============================================================================
// Imports
// =============================================================================

/// ImportStmt = 'import' ImportAlias (',' ImportAlias)*
/// ImportAlias = DottedName ('as' Name)?
fn parse_import<P: StatementParser>(p: &mut P) {
    p.push_context(ParseContext::Import);
    p.start_node(SyntaxKind::IMPORT_STMT);
    p.bump();
    loop {
        if !p.at(SyntaxKind::IDENT) {
            p.error("expected module name after 'import'", ErrorCode::E0501);
            break;
        }
        p.start_node(SyntaxKind::IMPORT_ALIAS);
        parse_dotted_name(p);
        parse_alias_suffix(p);
        p.finish_node();
        if !p.eat(SyntaxKind::COMMA) {
            break;
        }
    }
    p.finish_node();
    p.pop_context();
}

/// ImportFromStmt = 'from' ('.' | '...')* DottedName? 'import' ('*' | '(' ImportNames ')' | ImportNames)
fn parse_from_import<P: StatementParser>(p: &mut P) {
    p.push_context(ParseContext::Import);
    p.start_node(SyntaxKind::IMPORT_FROM_STMT);
    p.bump();

    let mut has_module = false;
    while p.at_any(&[SyntaxKind::DOT, SyntaxKind::ELLIPSIS]) {
        p.bump();
        has_module = true;
    }
    if p.at(SyntaxKind::IDENT) {
        parse_dotted_name(p);
        has_module = true;
    }
    if !has_module {
        p.error("expected module path after 'from'", ErrorCode::E0501);
    }

    if p.eat(SyntaxKind::IMPORT_KW) {
        if !p.eat(SyntaxKind::STAR) {
            if p.eat(SyntaxKind::L_PAREN) {
                parse_import_names(p, true);
                expect_closing(p, SyntaxKind::R_PAREN);
            } else {
                parse_import_names(p, false);
            }
        }
    } else {
        p.error("expected 'import' after module path", ErrorCode::E0502);
    }

    p.finish_node();
    p.pop_context();
}

/// ImportNames = Name ('as' Name)? (',' Name ('as' Name)?)* ','?
fn parse_import_names<P: StatementParser>(p: &mut P, parenthesized: bool) {
    loop {
        if parenthesized && p.at(SyntaxKind::R_PAREN) {
            break;
        }
        if !p.at(SyntaxKind::IDENT) {
            p.error("expected name to import", ErrorCode::E0501);
            break;
        }
        p.start_node(SyntaxKind::IMPORT_ALIAS);
        parse_name(p);
        parse_alias_suffix(p);
        p.finish_node();
        if !p.eat(SyntaxKind::COMMA) {
            break;
        }
    }
}

fn parse_alias_suffix<P: StatementParser>(p: &mut P) {
    if !p.eat(SyntaxKind::AS_KW) {
        return;
    }
    if p.at(SyntaxKind::IDENT) {
        parse_name(p);
    } else {
        p.error("expected alias name after 'as'", ErrorCode::E0503);
    }
}

/// DottedName = IDENT ('.' IDENT)*
fn parse_dotted_name<P: StatementParser>(p: &mut P) {
    p.start_node(SyntaxKind::DOTTED_NAME);
    p.bump();
    while p.at(SyntaxKind::DOT) && p.peek_kind(1) == SyntaxKind::IDENT {
        p.bump();
        p.bump();
    }
    p.finish_node();
}

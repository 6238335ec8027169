//! Nom parsers used to split Monty source lines into statements.

pub mod error;
pub mod types;

use nom::IResult;
use nom::bytes::complete::{take_till1, take_while};
use nom::character::complete::{char, digit1};
use nom::combinator::{all_consuming, opt, recognize};
use nom::sequence::{pair, preceded};
use crate::config::{Value, LineNumber};
use crate::bytecode::opcodes::OpCode;
use types::{Mode, Statement};
use error::{ParseResult, ParseError, ParseErrorKind};

/// Prefix marking a comment token.
const COMMENT: char = '#';

/// returns true if given character separates tokens
fn is_whitespace(chr: char) -> bool {
    chr == ' ' || chr == '\t' || chr == '\r' || chr == '\n' || chr == '\x0b' || chr == '\x0c'
}

// whitespace

fn space0(i: &str) -> IResult<&str, &str> {
    take_while(is_whitespace)(i)
}

// token (any run of non-whitespace)

fn token(i: &str) -> IResult<&str, &str> {
    take_till1(is_whitespace)(i)
}

// line (opcode [operand] ...), content after the operand is ignored

fn tokens(i: &str) -> IResult<&str, Option<(&str, Option<&str>)>> {
    preceded(space0, opt(pair(token, opt(preceded(space0, token)))))(i)
}

// integer operand (-?[0-9]+)

/// Parses an integer operand. The whole input must be an optional `-` followed by decimal digits.
/// Magnitudes beyond the range of `Value` wrap around.
pub(crate) fn integer(i: &str) -> Option<Value> {
    let parsed: IResult<&str, &str> = all_consuming(recognize(pair(opt(char('-')), digit1)))(i);
    parsed.ok().map(|(_, numerical)| {
        let (negative, digits) = match numerical.strip_prefix('-') {
            Some(digits) => (true, digits),
            None => (false, numerical),
        };
        let magnitude = digits.bytes().fold(0 as Value, |acc, digit| acc.wrapping_mul(10).wrapping_add((digit - b'0') as Value));
        if negative { magnitude.wrapping_neg() } else { magnitude }
    })
}

/// Parses a single source line into a statement.
pub fn parse_line(line: LineNumber, input: &str) -> ParseResult<Statement> {
    let (opcode, operand) = match tokens(input) {
        Ok((_, Some(tokens))) => tokens,
        _ => return Ok(Statement::Empty),
    };
    match opcode {
        "stack" => Ok(Statement::Mode(Mode::Stack)),
        "queue" => Ok(Statement::Mode(Mode::Queue)),
        _ if opcode.starts_with(COMMENT) => Ok(Statement::Comment),
        _ => {
            let opcode = OpCode::from_name(opcode).ok_or_else(|| ParseError::new(line, ParseErrorKind::UnknownInstruction(opcode.to_string())))?;
            let instruction = opcode.decode(operand).map_err(|kind| ParseError::new(line, kind))?;
            Ok(Statement::Instruction(instruction))
        }
    }
}

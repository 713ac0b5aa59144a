use nom::{
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::multispace0,
    combinator::{opt, value},
    multi::many0,
    sequence::{pair, preceded},
    IResult,
};

use crate::ast::{BinOp, Expr};
use crate::error::ParseError;

// Parser for numeric literals
// Supports: 123, 8.2, .5, 8.
fn parse_number(input: &str) -> IResult<&str, Expr> {
    fn is_digit(c: char) -> bool {
        c.is_ascii_digit()
    }

    let (remaining, (int_part, maybe_frac)) = pair(
        take_while(is_digit),
        opt(pair(tag("."), take_while(is_digit))),
    )(input)?;

    let frac_part = maybe_frac.map(|(_, frac)| frac).unwrap_or("");

    // A lone "." (or nothing at all) is not a number
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Digit,
        )));
    }

    // Rebuild as "A.B" with both halves present so ".5" and "8." parse the same way
    let literal = format!(
        "{}.{}",
        if int_part.is_empty() { "0" } else { int_part },
        if frac_part.is_empty() { "0" } else { frac_part },
    );
    let value: f64 = literal.parse().map_err(|_| {
        nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Float))
    })?;

    Ok((remaining, Expr::Number(value)))
}

/// Deepest nesting of parentheses, unary minus and exponents accepted.
/// Each level costs a handful of stack frames while parsing and evaluating.
pub const MAX_DEPTH: usize = 64;

// Step one level down, or fail hard so `alt` does not try other branches.
fn enter(input: &str, depth: usize) -> Result<usize, nom::Err<nom::error::Error<&str>>> {
    if depth >= MAX_DEPTH {
        return Err(nom::Err::Failure(nom::error::Error::new(
            input,
            nom::error::ErrorKind::TooLarge,
        )));
    }
    Ok(depth + 1)
}

// Parser for parentheses
fn parse_parens(input: &str, depth: usize) -> IResult<&str, Expr> {
    let (input, _) = tag::<_, _, nom::error::Error<&str>>("(")(input)?;
    let depth = enter(input, depth)?;
    let (input, expr) = parse_expr(input, depth)?;
    let (input, _) = preceded(multispace0, tag::<_, _, nom::error::Error<&str>>(")"))(input)?;
    Ok((input, expr))
}

// Atom
fn parse_atom(input: &str, depth: usize) -> IResult<&str, Expr> {
    preceded(
        multispace0,
        alt((parse_number, |i| parse_parens(i, depth))),
    )(input)
}

// Power - right associative: 2^3^2 = 2^(3^2), not (2^3)^2
// Also allows signed exponents: 2^-1, 2^-(1+1)
fn parse_power(input: &str, depth: usize) -> IResult<&str, Expr> {
    let (input, base) = parse_atom(input, depth)?;

    let try_caret = preceded::<_, _, _, nom::error::Error<&str>, _, _>(
        multispace0::<_, nom::error::Error<&str>>,
        tag::<_, _, nom::error::Error<&str>>("^"),
    )(input);

    if let Ok((input, _)) = try_caret {
        let depth = enter(input, depth)?;
        let (input, exp) = parse_power_exponent(input, depth)?;
        Ok((input, Expr::pow(base, exp)))
    } else {
        Ok((input, base))
    }
}

// Parser for exponents: allows sign prefix (-2, +3) then recurses for chained powers
fn parse_power_exponent(input: &str, depth: usize) -> IResult<&str, Expr> {
    let (input, _) = multispace0::<_, nom::error::Error<&str>>(input)?;

    let sign = alt((
        tag::<_, _, nom::error::Error<&str>>("-"),
        tag::<_, _, nom::error::Error<&str>>("+"),
    ))(input);

    match sign {
        Ok((rest, sign)) => {
            let depth = enter(rest, depth)?;
            let (rest, expr) = parse_power_exponent(rest, depth)?;
            let expr = if sign == "-" { Expr::neg(expr) } else { expr };
            Ok((rest, expr))
        }
        Err(_) => parse_power(input, depth),
    }
}

// Unary minus binds looser than ^, so -2^2 = -(2^2).
// There is no unary plus: "5 + + 3" must not parse.
fn parse_unary(input: &str, depth: usize) -> IResult<&str, Expr> {
    let minus = preceded::<_, _, _, nom::error::Error<&str>, _, _>(
        multispace0::<_, nom::error::Error<&str>>,
        tag::<_, _, nom::error::Error<&str>>("-"),
    )(input);

    match minus {
        Ok((rest, _)) => {
            let depth = enter(rest, depth)?;
            let (rest, expr) = parse_unary(rest, depth)?;
            Ok((rest, Expr::neg(expr)))
        }
        Err(_) => parse_power(input, depth),
    }
}

// Term - explicit * and / only, no implicit multiplication
fn parse_term(input: &str, depth: usize) -> IResult<&str, Expr> {
    let (input, first) = parse_unary(input, depth)?;
    let (input, rest) = many0(pair(
        preceded(
            multispace0,
            alt((value(BinOp::Mul, tag("*")), value(BinOp::Div, tag("/")))),
        ),
        |i| parse_unary(i, depth),
    ))(input)?;
    Ok((input, Expr::chain(first, rest)))
}

// Expr - a flat chain, so long sums stay shallow
fn parse_expr(input: &str, depth: usize) -> IResult<&str, Expr> {
    let (input, first) = parse_term(input, depth)?;
    let (input, rest) = many0(pair(
        preceded(
            multispace0,
            alt((value(BinOp::Add, tag("+")), value(BinOp::Sub, tag("-")))),
        ),
        |i| parse_term(i, depth),
    ))(input)?;
    Ok((input, Expr::chain(first, rest)))
}

/// Parse a complete arithmetic expression.
///
/// The whole input must be consumed; anything left over (a second number
/// after a space, an implicit product like `2(3+4)`, a stray `)`) is
/// reported as [`ParseError::UnconsumedInput`]. Nesting past [`MAX_DEPTH`]
/// is [`ParseError::TooDeep`].
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let (remaining, expr) = parse_expr(input, 0).map_err(|e| match e {
        nom::Err::Failure(err) if err.code == nom::error::ErrorKind::TooLarge => {
            ParseError::TooDeep(MAX_DEPTH)
        }
        e => ParseError::NomError(format!("{}", e)),
    })?;

    let remaining = remaining.trim();
    if !remaining.is_empty() {
        return Err(ParseError::UnconsumedInput(remaining.to_string()));
    }

    Ok(expr)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(input: &str) -> String {
        parse(input).unwrap().to_string()
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse("123").unwrap(), Expr::num(123));
    }

    #[test]
    fn test_parse_decimal_literals() {
        let cases = [("8.2", 8.2), (".5", 0.5), ("8.", 8.0), ("0.25", 0.25)];
        for (input, expected) in cases {
            assert_eq!(parse(input).unwrap(), Expr::Number(expected), "input: {}", input);
        }
    }

    #[test]
    fn test_lone_dot_is_not_a_number() {
        assert!(parse(".").is_err());
        assert!(parse("1 + .").is_err());
    }

    #[test]
    fn test_parse_arithmetic_precedence() {
        assert_eq!(shape("1 + 2 * 3"), "(1 + (2 * 3))");
        assert_eq!(shape("8 / 4 / 2"), "(8 / 4 / 2)");
        assert_eq!(shape("10 - 4 - 3"), "(10 - 4 - 3)");
        assert_eq!(shape("1 - 2 * 3 + 4"), "(1 - (2 * 3) + 4)");
    }

    #[test]
    fn test_parse_parens() {
        assert_eq!(shape("(1 + 2) * 3"), "((1 + 2) * 3)");
        assert_eq!(shape("( ( 4 ) )"), "4");
    }

    #[test]
    fn test_power_right_associativity() {
        assert_eq!(shape("2^3^2"), "(2 ^ (3 ^ 2))");
    }

    #[test]
    fn test_unary_minus_binds_looser_than_power() {
        assert_eq!(shape("-2^2"), "(-(2 ^ 2))");
        assert_eq!(shape("5 * -3"), "(5 * (-3))");
        assert_eq!(shape("5 - - 3"), "(5 - (-3))");
    }

    #[test]
    fn test_signed_exponents() {
        assert_eq!(shape("2^-1"), "(2 ^ (-1))");
        assert_eq!(shape("2 ^ +3"), "(2 ^ 3)");
        assert_eq!(shape("2^-(1+1)"), "(2 ^ (-(1 + 1)))");
    }

    #[test]
    fn test_double_plus_is_rejected() {
        assert!(matches!(
            parse("5 + + 3"),
            Err(ParseError::UnconsumedInput(_))
        ));
        assert!(parse("+5").is_err());
    }

    #[test]
    fn test_no_implicit_multiplication() {
        assert_eq!(
            parse("2(3+4)"),
            Err(ParseError::UnconsumedInput("(3+4)".to_string()))
        );
        assert!(matches!(parse("2 3"), Err(ParseError::UnconsumedInput(_))));
    }

    #[test]
    fn test_unbalanced_parens() {
        assert!(matches!(parse("(2 + 3"), Err(ParseError::NomError(_))));
        assert!(matches!(parse("2 + 3)"), Err(ParseError::UnconsumedInput(_))));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(""), Err(ParseError::EmptyInput));
        assert_eq!(parse("   "), Err(ParseError::EmptyInput));
    }

    #[test]
    fn test_equality_sign_is_not_part_of_the_grammar() {
        assert!(matches!(parse("1 = 1"), Err(ParseError::UnconsumedInput(_))));
    }

    #[test]
    fn test_display_round_trips() {
        for input in ["1 + 2 * 3", "-2^2", "2^-1", "(1 - 2) / (3 + 4)", "5 - - 3"] {
            let expr = parse(input).unwrap();
            let reparsed = parse(&expr.to_string()).unwrap();
            assert_eq!(expr, reparsed, "input: {}", input);
        }
    }

    #[test]
    fn test_nesting_limit() {
        let ok = format!("{}1{}", "(".repeat(MAX_DEPTH - 1), ")".repeat(MAX_DEPTH - 1));
        assert_eq!(parse(&ok), Ok(Expr::num(1)));

        let deep = format!("{}1 + 1{}", "(".repeat(10_000), ")".repeat(10_000));
        assert_eq!(parse(&deep), Err(ParseError::TooDeep(MAX_DEPTH)));
    }

    #[test]
    fn test_long_unary_and_power_runs_are_limited() {
        let minuses = format!("1 {}1", "- ".repeat(20_000));
        assert_eq!(parse(&minuses), Err(ParseError::TooDeep(MAX_DEPTH)));

        let powers = format!("2{}", "^2".repeat(20_000));
        assert_eq!(parse(&powers), Err(ParseError::TooDeep(MAX_DEPTH)));
    }

    #[test]
    fn test_long_flat_sum_stays_shallow() {
        let sum = vec!["1"; 200_000].join(" + ");
        match parse(&sum).unwrap() {
            Expr::Chain(first, rest) => {
                assert_eq!(*first, Expr::num(1));
                assert_eq!(rest.len(), 199_999);
                assert!(rest.iter().all(|(op, e)| *op == BinOp::Add && *e == Expr::num(1)));
            }
            other => panic!("expected a chain, got {:?}", other),
        }
    }
}

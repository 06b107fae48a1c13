use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::satisfy,
    combinator::recognize,
    sequence::terminated,
};

/// Characters that end a line on their own.  `\r\n` is also a single break.
pub fn is_line_break(c: char) -> bool {
    matches!(c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' |
        '\u{85}' | '\u{2028}' | '\u{2029}')
}

/// Takes a single line, consuming its terminator if there is one.
pub fn parse_line(input: &str) -> IResult<&str, &str> {
    terminated(
        take_while(|c: char| !is_line_break(c)),
        alt((tag("\r\n"), recognize(satisfy(is_line_break)), tag(""))))
        (input)
}

/// Splits a blob into lines.  A trailing terminator does not start a new
/// (empty) line, so `"a\n"` and `"a"` both give `["a"]`.
pub fn parse_lines(mut input: &str) -> IResult<&str, Vec<&str>> {
    let mut out = Vec::new();
    while !input.is_empty() {
        let (input_, line) = parse_line(input)?;
        out.push(line);
        input = input_;
    }

    Ok((input, out))
}

////////////////////////////////////////////////////////////////////////////////

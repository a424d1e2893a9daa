//! Character-level matchers for the terminals named in [`super::TerminalTag`].
//!
//! Each matcher takes the full input and a starting byte offset and returns
//! the offset just past the longest prefix it accepts, or `None` if the
//! terminal does not start at that offset. Matchers never look behind the
//! start offset and never consume past the input's length.

use super::TerminalTag;

pub type TerminalFn = fn(&str, usize) -> Option<usize>;

fn char_at(s: &str, pos: usize) -> Option<(char, usize)> {
    let c = s[pos..].chars().next()?;
    Some((c, pos + c.len_utf8()))
}

fn eat_if(s: &str, pos: usize, pred: impl Fn(char) -> bool) -> Option<usize> {
    let (c, next) = char_at(s, pos)?;
    pred(c).then_some(next)
}

fn eat_while(s: &str, mut pos: usize, pred: impl Fn(char) -> bool) -> usize {
    while let Some((c, next)) = char_at(s, pos) {
        if !pred(c) {
            break;
        }
        pos = next;
    }
    pos
}

fn eat_one_or_more(s: &str, pos: usize, pred: impl Fn(char) -> bool) -> Option<usize> {
    let next = eat_if(s, pos, &pred)?;
    Some(eat_while(s, next, pred))
}

// --- PN_CHARS_BASE ::= [A-Z] | [a-z] | [#x00C0-#x00D6] | ... ---
pub fn is_pn_chars_base(c: char) -> bool {
    let cp = c as u32;
    c.is_ascii_alphabetic()
        || (0x00C0..=0x00D6).contains(&cp)
        || (0x00D8..=0x00F6).contains(&cp)
        || (0x00F8..=0x02FF).contains(&cp)
        || (0x0370..=0x037D).contains(&cp)
        || (0x037F..=0x1FFF).contains(&cp)
        || (0x200C..=0x200D).contains(&cp)
        || (0x2070..=0x218F).contains(&cp)
        || (0x2C00..=0x2FEF).contains(&cp)
        || (0x3001..=0xD7FF).contains(&cp)
        || (0xF900..=0xFDCF).contains(&cp)
        || (0xFDF0..=0xFFFD).contains(&cp)
        || (0x10000..=0xEFFFF).contains(&cp)
}

pub fn is_pn_chars_u(c: char) -> bool {
    is_pn_chars_base(c) || c == '_'
}

pub fn is_pn_chars(c: char) -> bool {
    let cp = c as u32;
    is_pn_chars_u(c)
        || c == '-'
        || c.is_ascii_digit()
        || cp == 0x00B7
        || (0x0300..=0x036F).contains(&cp)
        || (0x203F..=0x2040).contains(&cp)
}

pub fn is_ws(c: char) -> bool {
    matches!(c, '\u{20}' | '\u{9}' | '\u{D}' | '\u{A}')
}

// --- IRIREF ::= '<' ([^<>"{}|^`\]-[#x00-#x20])* '>' ---
fn terminal_iriref(s: &str, pos: usize) -> Option<usize> {
    let pos = eat_if(s, pos, |c| c == '<')?;
    let pos = eat_while(s, pos, |c| {
        !matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\') && (c as u32) > 0x20
    });
    eat_if(s, pos, |c| c == '>')
}

// --- PN_PREFIX ::= PN_CHARS_BASE ((PN_CHARS|'.')* PN_CHARS)? ---
fn terminal_pn_prefix(s: &str, pos: usize) -> Option<usize> {
    let start = eat_if(s, pos, is_pn_chars_base)?;
    let mut end = eat_while(s, start, |c| is_pn_chars(c) || c == '.');
    // The final PN_CHARS shall be read above; give back a trailing dot.
    if end > start && s.as_bytes()[end - 1] == b'.' {
        end -= 1;
    }
    Some(end)
}

// --- PNAME_NS ::= PN_PREFIX? ':' ---
fn terminal_pname_ns(s: &str, pos: usize) -> Option<usize> {
    let pos = terminal_pn_prefix(s, pos).unwrap_or(pos);
    eat_if(s, pos, |c| c == ':')
}

// --- PERCENT ::= '%' HEX HEX ---
fn terminal_percent(s: &str, pos: usize) -> Option<usize> {
    let pos = eat_if(s, pos, |c| c == '%')?;
    let pos = eat_if(s, pos, |c| c.is_ascii_hexdigit())?;
    eat_if(s, pos, |c| c.is_ascii_hexdigit())
}

// --- PN_LOCAL_ESC ::= '\' ( '_' | '~' | '.' | '-' | '!' | '$' | '&' | "'" | '(' | ')' | '*' | '+' | ',' | ';' | '=' | '/' | '?' | '#' | '@' | '%' ) ---
fn terminal_pn_local_esc(s: &str, pos: usize) -> Option<usize> {
    let pos = eat_if(s, pos, |c| c == '\\')?;
    eat_if(s, pos, |c| {
        matches!(
            c,
            '_' | '~'
                | '.'
                | '-'
                | '!'
                | '$'
                | '&'
                | '\''
                | '('
                | ')'
                | '*'
                | '+'
                | ','
                | ';'
                | '='
                | '/'
                | '?'
                | '#'
                | '@'
                | '%'
        )
    })
}

// --- PLX ::= PERCENT | PN_LOCAL_ESC ---
fn terminal_plx(s: &str, pos: usize) -> Option<usize> {
    terminal_percent(s, pos).or_else(|| terminal_pn_local_esc(s, pos))
}

// --- PN_LOCAL ::= (PN_CHARS_U | ':' | [0-9] | PLX ) ((PN_CHARS | '.' | ':' | PLX)* (PN_CHARS | ':' | PLX) )? ---
fn terminal_pn_local(s: &str, pos: usize) -> Option<usize> {
    let mut pos = match terminal_plx(s, pos) {
        Some(p) => p,
        None => eat_if(s, pos, |c| is_pn_chars_u(c) || c.is_ascii_digit() || c == ':')?,
    };
    loop {
        if let Some(p) = terminal_plx(s, pos) {
            pos = p;
            continue;
        }
        match eat_if(s, pos, |c| is_pn_chars(c) || c == '.' || c == ':') {
            Some(p) => pos = p,
            None => break,
        }
    }
    // A trailing dot does not belong to PN_LOCAL; give it back.
    if pos > 0 && s.as_bytes()[pos - 1] == b'.' {
        pos -= 1;
    }
    Some(pos)
}

// --- PNAME_LN ::= PNAME_NS PN_LOCAL ---
fn terminal_pname_ln(s: &str, pos: usize) -> Option<usize> {
    let pos = terminal_pname_ns(s, pos)?;
    terminal_pn_local(s, pos)
}

// --- BLANK_NODE_LABEL ::= '_:' ( PN_CHARS_U | [0-9] ) ((PN_CHARS|'.')* PN_CHARS)? ---
fn terminal_blank_node_label(s: &str, pos: usize) -> Option<usize> {
    let pos = eat_if(s, pos, |c| c == '_')?;
    let pos = eat_if(s, pos, |c| c == ':')?;
    let pos = eat_if(s, pos, |c| is_pn_chars_u(c) || c.is_ascii_digit())?;
    let pos = eat_while(s, pos, |c| is_pn_chars(c) || c == '.');
    Some(eat_if(s, pos, is_pn_chars).unwrap_or(pos))
}

// --- VARNAME ::= ( PN_CHARS_U | [0-9] ) ( PN_CHARS_U | [0-9] | #x00B7 | [#x0300-#x036F] | [#x203F-#x2040] )* ---
fn terminal_varname(s: &str, pos: usize) -> Option<usize> {
    let pos = eat_if(s, pos, |c| is_pn_chars_u(c) || c.is_ascii_digit())?;
    Some(eat_while(s, pos, |c| {
        let cp = c as u32;
        is_pn_chars_u(c)
            || c.is_ascii_digit()
            || cp == 0x00B7
            || (0x0300..=0x036F).contains(&cp)
            || (0x203F..=0x2040).contains(&cp)
    }))
}

fn terminal_var1(s: &str, pos: usize) -> Option<usize> {
    terminal_varname(s, eat_if(s, pos, |c| c == '?')?)
}

fn terminal_var2(s: &str, pos: usize) -> Option<usize> {
    terminal_varname(s, eat_if(s, pos, |c| c == '$')?)
}

// Vendor extension: `~name` parameterized variable, substituted client-side
// before execution (see GLOSSARY).
fn terminal_parameterized_var(s: &str, pos: usize) -> Option<usize> {
    terminal_varname(s, eat_if(s, pos, |c| c == '~')?)
}

// --- LANGTAG ::= '@' [a-zA-Z]+ ('-' [a-zA-Z0-9]+)* ---
fn terminal_langtag(s: &str, pos: usize) -> Option<usize> {
    let pos = eat_if(s, pos, |c| c == '@')?;
    let mut pos = eat_one_or_more(s, pos, |c| c.is_ascii_alphabetic())?;
    while let Some(p) = eat_if(s, pos, |c| c == '-') {
        pos = eat_one_or_more(s, p, |c| c.is_ascii_alphanumeric())?;
    }
    Some(pos)
}

// --- INTEGER ::= [0-9]+ ---
fn terminal_integer(s: &str, pos: usize) -> Option<usize> {
    eat_one_or_more(s, pos, |c| c.is_ascii_digit())
}

// --- DECIMAL ::= [0-9]* '.' [0-9]+ ---
fn terminal_decimal(s: &str, pos: usize) -> Option<usize> {
    let pos = eat_while(s, pos, |c| c.is_ascii_digit());
    let pos = eat_if(s, pos, |c| c == '.')?;
    eat_one_or_more(s, pos, |c| c.is_ascii_digit())
}

// --- EXPONENT ::= [eE] [+-]? [0-9]+ ---
fn terminal_exponent(s: &str, pos: usize) -> Option<usize> {
    let pos = eat_if(s, pos, |c| c == 'e' || c == 'E')?;
    let pos = eat_if(s, pos, |c| c == '+' || c == '-').unwrap_or(pos);
    eat_one_or_more(s, pos, |c| c.is_ascii_digit())
}

// --- DOUBLE ::= [0-9]+ '.' [0-9]* EXPONENT | '.' ([0-9])+ EXPONENT | ([0-9])+ EXPONENT ---
fn terminal_double(s: &str, pos: usize) -> Option<usize> {
    let start = pos;
    let mut cur = eat_while(s, pos, |c| c.is_ascii_digit());
    cur = eat_if(s, cur, |c| c == '.').unwrap_or(cur);
    cur = eat_while(s, cur, |c| c.is_ascii_digit());

    if cur == start {
        return None;
    }
    // A lone '.' with no digits on either side is not a valid mantissa.
    if cur == start + 1 && s.as_bytes()[start] == b'.' {
        return None;
    }
    terminal_exponent(s, cur)
}

fn terminal_integer_positive(s: &str, pos: usize) -> Option<usize> {
    terminal_integer(s, eat_if(s, pos, |c| c == '+')?)
}

fn terminal_decimal_positive(s: &str, pos: usize) -> Option<usize> {
    terminal_decimal(s, eat_if(s, pos, |c| c == '+')?)
}

fn terminal_double_positive(s: &str, pos: usize) -> Option<usize> {
    terminal_double(s, eat_if(s, pos, |c| c == '+')?)
}

fn terminal_integer_negative(s: &str, pos: usize) -> Option<usize> {
    terminal_integer(s, eat_if(s, pos, |c| c == '-')?)
}

fn terminal_decimal_negative(s: &str, pos: usize) -> Option<usize> {
    terminal_decimal(s, eat_if(s, pos, |c| c == '-')?)
}

fn terminal_double_negative(s: &str, pos: usize) -> Option<usize> {
    terminal_double(s, eat_if(s, pos, |c| c == '-')?)
}

// --- ECHAR ::= '\' [tbnrf\"'] ---
fn terminal_echar(s: &str, pos: usize) -> Option<usize> {
    let pos = eat_if(s, pos, |c| c == '\\')?;
    eat_if(s, pos, |c| {
        matches!(c, 't' | 'b' | 'n' | 'r' | 'f' | '\\' | '"' | '\'')
    })
}

// --- STRING_LITERAL1 ::= "'" ( ([^#x27#x5C#xA#xD]) | ECHAR )* "'" ---
fn terminal_string_literal1(s: &str, pos: usize) -> Option<usize> {
    let mut pos = eat_if(s, pos, |c| c == '\'')?;
    while pos < s.len() {
        match terminal_echar(s, pos) {
            Some(p) => pos = p,
            None => match eat_if(s, pos, |c| !matches!(c, '\'' | '\\' | '\n' | '\r')) {
                Some(p) => pos = p,
                None => break,
            },
        }
    }
    eat_if(s, pos, |c| c == '\'')
}

// --- STRING_LITERAL2 ::= '"' ( ([^#x22#x5C#xA#xD]) | ECHAR )* '"' ---
fn terminal_string_literal2(s: &str, pos: usize) -> Option<usize> {
    let mut pos = eat_if(s, pos, |c| c == '"')?;
    while pos < s.len() {
        match terminal_echar(s, pos) {
            Some(p) => pos = p,
            None => match eat_if(s, pos, |c| !matches!(c, '"' | '\\' | '\n' | '\r')) {
                Some(p) => pos = p,
                None => break,
            },
        }
    }
    eat_if(s, pos, |c| c == '"')
}

// --- STRING_LITERAL_LONG1 ::= "'''" ( ( "'" | "''" )? ( [^'\] | ECHAR ) )* "'''" ---
fn terminal_string_literal_long1(s: &str, pos: usize) -> Option<usize> {
    terminal_string_literal_long(s, pos, '\'')
}

// --- STRING_LITERAL_LONG2 ::= '"""' ( ( '"' | '""' )? ( [^"\] | ECHAR ) )* '"""' ---
fn terminal_string_literal_long2(s: &str, pos: usize) -> Option<usize> {
    terminal_string_literal_long(s, pos, '"')
}

fn terminal_string_literal_long(s: &str, pos: usize, quote: char) -> Option<usize> {
    let mut pos = eat_if(s, pos, |c| c == quote)?;
    pos = eat_if(s, pos, |c| c == quote)?;
    pos = eat_if(s, pos, |c| c == quote)?;

    while pos < s.len() {
        let rest = &s[pos..];
        if rest.starts_with('\\') && rest[1..].starts_with(quote) {
            pos += 1 + quote.len_utf8();
        } else if rest.starts_with(&quote.to_string().repeat(3)) {
            return Some(pos + 3 * quote.len_utf8());
        } else {
            let (_, next) = char_at(s, pos)?;
            pos = next;
        }
    }
    None
}

// --- NIL ::= '(' WS* ')' ---
fn terminal_nil(s: &str, pos: usize) -> Option<usize> {
    let pos = eat_if(s, pos, |c| c == '(')?;
    let pos = eat_while(s, pos, is_ws);
    eat_if(s, pos, |c| c == ')')
}

// --- ANON ::= '[' WS* ']' ---
fn terminal_anon(s: &str, pos: usize) -> Option<usize> {
    let pos = eat_if(s, pos, |c| c == '[')?;
    let pos = eat_while(s, pos, is_ws);
    eat_if(s, pos, |c| c == ']')
}

/// Order matches [`TerminalTag`]'s declaration order.
pub static TERMINAL_FUNCS: [TerminalFn; TerminalTag::COUNT] = [
    terminal_iriref,
    terminal_pname_ns,
    terminal_pname_ln,
    terminal_blank_node_label,
    terminal_var1,
    terminal_var2,
    terminal_langtag,
    terminal_integer,
    terminal_decimal,
    terminal_double,
    terminal_integer_positive,
    terminal_decimal_positive,
    terminal_double_positive,
    terminal_integer_negative,
    terminal_decimal_negative,
    terminal_double_negative,
    terminal_string_literal1,
    terminal_string_literal2,
    terminal_string_literal_long1,
    terminal_string_literal_long2,
    terminal_nil,
    terminal_anon,
    terminal_parameterized_var,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iriref_rejects_control_chars_and_reserved_punctuation() {
        assert_eq!(terminal_iriref("<http://example/>", 0), Some(18));
        assert_eq!(terminal_iriref("<a b>", 0), Some(5));
        assert_eq!(terminal_iriref("<a<b>", 0), None);
    }

    #[test]
    fn pn_prefix_gives_back_trailing_dot() {
        assert_eq!(terminal_pn_prefix("ex.", 0), Some(2));
        assert_eq!(terminal_pn_prefix("ex", 0), Some(2));
    }

    #[test]
    fn double_rejects_lone_dot_but_accepts_bare_exponent() {
        assert_eq!(terminal_double(".e1", 0), None);
        assert_eq!(terminal_double("1e1", 0), Some(3));
        assert_eq!(terminal_double("1.5e-10", 0), Some(7));
        assert_eq!(terminal_double(".5e1", 0), Some(4));
    }

    #[test]
    fn string_literal_long_scans_for_matching_triple_quote() {
        assert_eq!(terminal_string_literal_long2("\"\"\"a\\\"b\"\"\"", 0), Some(10));
    }

    #[test]
    fn parameterized_var_matches_tilde_varname() {
        assert_eq!(terminal_parameterized_var("~lim", 0), Some(4));
    }
}

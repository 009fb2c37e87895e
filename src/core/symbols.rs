use crate::utils::error::{FractalError, Result};

/// Splits an L-string into plain symbols (`0`) and modules (`F(10)`).
///
/// A module starts at a character followed by `(` and runs to the next `)`.
/// A `(` in the last position never opens a module, so `F(` is two symbols.
pub fn split_symbols(input: &str) -> Result<Vec<&str>> {
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let len = chars.len();
    let mut symbols = Vec::with_capacity(len);

    let mut start_of_module = 0;
    let mut reading_module = false;

    let mut i = 0;
    while i < len {
        if !reading_module && i + 2 < len && chars[i + 1].1 == '(' {
            reading_module = true;
            start_of_module = i;
            i += 1;
        } else if !reading_module {
            let (offset, c) = chars[i];
            symbols.push(&input[offset..offset + c.len_utf8()]);
        }

        if reading_module && chars[i].1 == ')' {
            let begin = chars[start_of_module].0;
            let end = chars[i].0 + 1;
            symbols.push(&input[begin..end]);
            reading_module = false;
        }

        i += 1;
    }

    if reading_module {
        return Err(FractalError::MalformedModuleError {
            position: start_of_module,
            input: input.to_string(),
        });
    }

    Ok(symbols)
}

/// Parameters of a module, `None` for plain symbols.
pub fn split_parameters(symbol: &str) -> Option<Vec<&str>> {
    let mut chars = symbol.char_indices();
    let (_, head) = chars.next()?;
    let open = head.len_utf8();

    // 最短的模組是 F()
    if symbol.chars().count() < 3 || !symbol[open..].starts_with('(') || !symbol.ends_with(')') {
        return None;
    }

    Some(symbol[open + 1..symbol.len() - 1].split(',').collect())
}

/// Leading character of a symbol or module.
pub fn head(symbol: &str) -> Option<char> {
    symbol.chars().next()
}

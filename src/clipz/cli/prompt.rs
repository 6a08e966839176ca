use std::io::{self, BufRead, Write};

/// Asks a yes/no question on stderr and reads the answer from stdin.
/// Anything but `y`/`yes` is a no, including end of input.
pub fn confirm(question: &str) -> io::Result<bool> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stderr();
    confirm_with(&mut input, &mut output, question)
}

pub fn confirm_with<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<bool> {
    write!(output, "{} [y/N] ", question)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

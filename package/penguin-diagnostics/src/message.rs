//! Beginner-facing wording, one function per [`ErrorKind`](crate::ErrorKind).

use penguin_ast::IdentifierRejection;

pub fn unterminated_string(quote: char) -> String {
    format!(
        "Missing closing quote. This line opens text with {quote} but never closes it. \
         Make sure all your text has matching quotes.\n\
         Example: \"hello\" not \"hello"
    )
}

pub fn invalid_identifier(name: &str, reason: IdentifierRejection) -> String {
    let why = match reason {
        IdentifierRejection::Empty => "there is no variable name before the =".to_string(),
        IdentifierRejection::StartsWithDigit => format!("\"{name}\" starts with a number. A variable name must start with a letter"),
        IdentifierRejection::IllegalCharacter(' ') => format!("\"{name}\" has a space in it. Use an underscore instead, like my_name"),
        IdentifierRejection::IllegalCharacter(c) => format!("\"{name}\" contains \"{c}\". Only letters, numbers and _ are allowed"),
        IdentifierRejection::ReservedWord => format!("\"{name}\" is a word Python keeps for itself. Pick another name"),
    };

    format!("That's not a valid variable name: {why}.\nExample: player_name = \"Alex\"")
}

/// `allowed` lists the statement forms the current lesson accepts.
pub fn unsupported_statement(raw: &str, allowed: &[&str]) -> String {
    if allowed.is_empty() {
        return format!("I don't recognize this command: {raw}")
    }

    format!("I don't recognize this command: {raw}\nIn this lesson you can use: {}", allowed.join(", "))
}

pub fn case_sensitivity(written: &str) -> String {
    format!("Python is case-sensitive. Use lowercase print, not {written}.\nExample: print(\"hello\")")
}

pub fn missing_parentheses() -> String {
    "Remember the parentheses! print needs ( and ) around what it shows.\nExample: print(\"hello\")".to_string()
}

pub fn undefined_variable(name: &str) -> String {
    format!(
        "Variable \"{name}\" doesn't exist yet. Did you create it first?\n\
         Hint: Use {name} = \"some value\" to create it."
    )
}

/// `word` is the offending text when it looks like something the learner
/// meant as text.
pub fn invalid_expression(text: &str, word: Option<&str>) -> String {
    word.map_or_else(
        || format!(
            "Python doesn't understand {text}\n\
             If it is text, it needs quotes around it. Check your spelling and punctuation."
        ),
        |word| format!("Text needs quotes around it. Try \"{word}\" instead of {word}."),
    )
}

pub fn invalid_input_syntax() -> String {
    "input() needs a question in quotes.\nExample: name = input(\"What is your name? \")".to_string()
}

pub fn empty_source() -> String {
    "There is no code to run yet. Try writing print(\"Hello!\")".to_string()
}

pub fn source_too_long(detail: &str) -> String {
    format!("This program is too long to run here ({detail}). Try a shorter one.")
}

/// Fallback for failures no other kind describes.
pub fn unclassified() -> String {
    "Something went wrong with your code. Check for:\n\
     • Spelling mistakes\n\
     • Missing quotes around text\n\
     • Indentation (this playground does not check it, but every line should start at the left edge)"
        .to_string()
}

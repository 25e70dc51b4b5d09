//! Help text for the scribe's commands.

/// Help text for `-h`. `{t}` is replaced with the configured trigger.
const HELP_TEXT: &str = r#"Scribe commands:
  {t}                          - A random quote card
  {t} <author> [date]          - A random card by that author (and date)
  {t} -s <author> [date] <text> - Search an author's quotes for some text
  {t} -a <author> <date> <text> - Draft a new quote for the quotebook
  {t} -y                       - Inscribe your drafted quote
  {t} -n                       - Discard your drafted quote
  {t} -h                       - Show this help message

Wrap multi-word arguments in quotes, e.g. {t} "Jane Doe" 2021"#;

/// Returns the help text for the given trigger.
pub fn help_text(trigger: &str) -> String {
    HELP_TEXT.replace("{t}", trigger)
}

//! Instruction templates for the two analysis tasks.
//!
//! The excerpt is appended verbatim after the instructions; braces or other
//! template-looking characters inside it are left untouched.

pub const CHARACTER_INSTRUCTIONS: &str = r#"Given the following book text, extract a list of characters and their interactions.
Return a JSON object like this:
{
  "characters": [
    {
      "name": "Character Name",
      "interacts_with": [
        { "name": "Another Character", "count": 3 }
      ]
    }
  ]
}"#;

pub const QUOTE_INSTRUCTIONS: &str = r#"From the following book text, extract exactly 3 important quotes between characters and describe the sentiment of each.
Return a JSON array in this format:
[
  {
    "quote": "...",
    "sentiment": "positive",
    "speaker": "Character A",
    "target": "Character B"
  }
]"#;

pub fn build_character_prompt(excerpt: &str) -> String {
    embed(CHARACTER_INSTRUCTIONS, excerpt)
}

pub fn build_quote_prompt(excerpt: &str) -> String {
    embed(QUOTE_INSTRUCTIONS, excerpt)
}

fn embed(instructions: &str, excerpt: &str) -> String {
    format!("{instructions}\n\nTEXT:\n{excerpt}\n")
}

#![allow(dead_code)]

use serde_json::{Value, json};

pub const CHARACTER_REPLY: &str =
    r#"{"characters": [{"name": "Victor", "interacts_with": [{"name": "Elizabeth", "count": 3}]}]}"#;

pub const QUOTE_REPLY: &str = r#"[{"quote": "Beware; for I am fearless", "sentiment": "negative", "speaker": "The Creature", "target": "Victor"}]"#;

pub fn sample_completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test-1",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "test-model",
        "choices": [
            {
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }
        ],
        "usage": {"prompt_tokens": 1200, "completion_tokens": 80, "total_tokens": 1280}
    })
}

pub fn empty_choices_completion() -> Value {
    json!({
        "id": "chatcmpl-test-2",
        "object": "chat.completion",
        "created": 1700000000,
        "model": "test-model",
        "choices": []
    })
}

/// 5001 characters: a marker, then 5000 characters of body.
pub fn text_of_5001_chars() -> String {
    let mut text = String::from("#");
    text.push_str(&"a".repeat(4999));
    text.push('$');
    text
}

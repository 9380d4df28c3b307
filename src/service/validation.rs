//! Request payload validation for comment creation and vote patches.

use crate::error::AppError;
use serde_json::Value;

const INC_VOTES: &str = "inc_votes";

/// Validated comment body; `author` comes from the payload's `username`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub author: String,
    pub body: String,
}

/// Signed vote increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VotePatch {
    pub delta: i32,
}

pub struct PayloadValidator;

impl PayloadValidator {
    /// `username` and `body` must both be strings. Whether the user exists is left to the store.
    pub fn new_comment(payload: &Value) -> Result<NewComment, AppError> {
        let obj = payload.as_object().ok_or(AppError::MalformedInput)?;
        let author = required_str(obj, "username")?;
        let body = required_str(obj, "body")?;
        Ok(NewComment {
            author: author.to_string(),
            body: body.to_string(),
        })
    }

    /// Exactly `{ "inc_votes": <integer> }`.
    pub fn vote_patch(payload: &Value) -> Result<VotePatch, AppError> {
        let obj = payload.as_object().ok_or(AppError::MalformedInput)?;
        if obj.len() != 1 {
            return Err(AppError::MalformedInput);
        }
        let delta = obj
            .get(INC_VOTES)
            .and_then(Value::as_i64)
            .ok_or(AppError::MalformedInput)?;
        let delta = i32::try_from(delta).map_err(|_| AppError::MalformedInput)?;
        Ok(VotePatch { delta })
    }
}

fn required_str<'a>(obj: &'a serde_json::Map<String, Value>, key: &str) -> Result<&'a str, AppError> {
    obj.get(key).and_then(Value::as_str).ok_or(AppError::MalformedInput)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_username_and_body() {
        let c = PayloadValidator::new_comment(&json!({ "username": "lurker", "body": "Test Comment" })).unwrap();
        assert_eq!(c.author, "lurker");
        assert_eq!(c.body, "Test Comment");
    }

    #[test]
    fn extra_comment_keys_are_ignored() {
        let c = PayloadValidator::new_comment(&json!({ "username": "lurker", "body": "x", "votes": 10 }));
        assert!(c.is_ok());
    }

    #[test]
    fn comment_requires_both_fields_as_strings() {
        for payload in [
            json!({ "body": "no author" }),
            json!({ "username": "lurker" }),
            json!({ "username": 7, "body": "x" }),
            json!({ "username": "lurker", "body": null }),
            json!(["lurker", "x"]),
            json!({}),
        ] {
            assert_eq!(
                PayloadValidator::new_comment(&payload),
                Err(AppError::MalformedInput),
                "{}",
                payload
            );
        }
    }

    #[test]
    fn vote_patch_accepts_signed_integer() {
        assert_eq!(
            PayloadValidator::vote_patch(&json!({ "inc_votes": 100 })),
            Ok(VotePatch { delta: 100 })
        );
        assert_eq!(
            PayloadValidator::vote_patch(&json!({ "inc_votes": -50 })),
            Ok(VotePatch { delta: -50 })
        );
    }

    #[test]
    fn vote_patch_rejects_other_shapes() {
        for payload in [
            json!({ "topic": "cats" }),
            json!({ "inc_votes": "oops" }),
            json!({ "inc_votes": 1.5 }),
            json!({ "inc_votes": 1, "topic": "cats" }),
            json!({ "inc_votes": 4_000_000_000i64 }),
            json!({}),
            json!(5),
        ] {
            assert_eq!(
                PayloadValidator::vote_patch(&payload),
                Err(AppError::MalformedInput),
                "{}",
                payload
            );
        }
    }
}

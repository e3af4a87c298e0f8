//! Identifier parsing: raw query elements to typed keys.
//!
//! Parsers are pure. They look only at the JSON element and never touch
//! a provider.

use orbis_types::LinkType;
use serde_json::{Map, Value};

use crate::error::QueryError;
use crate::key::{LinkKey, LookupKey, SkillQuery, SkillSelection};

/// Parse a bare string identifier (player, town, or nation).
pub fn parse_identifier(raw: &Value) -> Result<LookupKey, QueryError> {
    raw.as_str()
        .map(LookupKey::from_identifier)
        .ok_or(QueryError::NotAString)
}

/// Parse a `{"type": ..., "target": ...}` link query.
///
/// `type` is matched case-insensitively against the known link types.
pub fn parse_link(raw: &Value) -> Result<LinkKey, QueryError> {
    let object = as_object(raw)?;
    let kind: LinkType = required_str(object, "type")?.parse()?;
    let target = required_str(object, "target")?.to_owned();
    Ok(LinkKey { kind, target })
}

/// Parse a `{"player": ..., "all_skills": ...}` skill query.
///
/// A missing or non-boolean `all_skills` selects the default skill set.
pub fn parse_skill_query(raw: &Value) -> Result<SkillQuery, QueryError> {
    let object = as_object(raw)?;
    let player = LookupKey::from_identifier(required_str(object, "player")?);
    let all_skills = object
        .get("all_skills")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let selection = if all_skills {
        SkillSelection::All
    } else {
        SkillSelection::NonChild
    };

    Ok(SkillQuery { player, selection })
}

fn as_object(raw: &Value) -> Result<&Map<String, Value>, QueryError> {
    raw.as_object().ok_or(QueryError::NotAnObject)
}

fn required_str<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, QueryError> {
    object
        .get(field)
        .ok_or(QueryError::MissingField(field))?
        .as_str()
        .ok_or(QueryError::InvalidField(field))
}

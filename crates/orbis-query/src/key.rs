//! Validated lookup keys.
//!
//! A key exists only once raw input has passed the parser. Keys are
//! immutable and carry no provider state.

use orbis_types::LinkType;
use uuid::Uuid;

/// Length of the canonical hyphenated UUID form.
const HYPHENATED_LEN: usize = 36;

/// Parse a UUID in the canonical 8-4-4-4-12 hyphenated form only.
///
/// The simple, braced, and `urn:uuid:` spellings are rejected, so a name
/// made of 32 hex digits stays a name.
pub fn parse_hyphenated_uuid(raw: &str) -> Option<Uuid> {
    let hyphens_in_place = raw.len() == HYPHENATED_LEN
        && raw
            .char_indices()
            .all(|(i, c)| matches!(i, 8 | 13 | 18 | 23) == (c == '-'));
    if hyphens_in_place {
        Uuid::try_parse(raw).ok()
    } else {
        None
    }
}

/// A name-or-UUID identifier for a resident, town, or nation.
///
/// Classification happens once, at construction: anything in hyphenated
/// UUID form is a UUID, even if some entity happens to carry that string
/// as its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LookupKey {
    /// Look up by UUID.
    Uuid(Uuid),
    /// Look up by name, case-insensitive.
    Name(String),
}

impl LookupKey {
    /// Classify a raw identifier string.
    pub fn from_identifier(raw: &str) -> Self {
        parse_hyphenated_uuid(raw).map_or_else(|| Self::Name(raw.to_owned()), Self::Uuid)
    }
}

/// One side of a Discord/Minecraft account link.
///
/// The target is kept raw; its format is checked by the resolver, since
/// what counts as valid depends on `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkKey {
    /// Which side the target names.
    pub kind: LinkType,
    /// Discord snowflake or Minecraft UUID, unvalidated.
    pub target: String,
}

/// Which skills a skill lookup reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SkillSelection {
    /// Every skill that is not derived from another.
    #[default]
    NonChild,
    /// Every skill.
    All,
    /// Every skill with at least one level.
    Leveled,
}

/// A skill lookup for one player.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SkillQuery {
    /// The player.
    pub player: LookupKey,
    /// Which skills to report.
    pub selection: SkillSelection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_strings_become_uuid_keys() {
        let key = LookupKey::from_identifier("00000000-0000-0000-0000-000000000001");
        assert_eq!(key, LookupKey::Uuid(Uuid::from_u128(1)));
    }

    #[test]
    fn other_strings_become_name_keys() {
        let key = LookupKey::from_identifier("Notch");
        assert_eq!(key, LookupKey::Name(String::from("Notch")));
    }

    #[test]
    fn only_the_hyphenated_form_is_a_uuid() {
        for raw in [
            "deadbeefdeadbeefdeadbeefdeadbeef",
            "{00000000-0000-0000-0000-000000000001}",
            "urn:uuid:00000000-0000-0000-0000-000000000001",
            "0000000-00000-0000-0000-000000000001",
        ] {
            assert_eq!(
                LookupKey::from_identifier(raw),
                LookupKey::Name(raw.to_owned())
            );
        }
        assert_eq!(
            parse_hyphenated_uuid("DEADBEEF-DEAD-BEEF-DEAD-BEEFDEADBEEF"),
            Some(Uuid::from_u128(0xdead_beef_dead_beef_dead_beef_dead_beef))
        );
    }

    #[test]
    fn almost_uuids_are_names() {
        let key = LookupKey::from_identifier("00000000-0000-0000-0000-00000000000z");
        assert!(matches!(key, LookupKey::Name(_)));
    }
}

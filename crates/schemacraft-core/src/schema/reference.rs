use std::fmt;

#[cfg(feature = "schema")]
use std::borrow::Cow;

#[cfg(feature = "schema")]
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};

/// `ON DELETE` action of a relationship, spelled the way SQL spells it.
/// Unrecognised tokens are carried through verbatim.
///
/// Values compare by their SQL spelling, so `Other("CASCADE")` equals
/// `Cascade`. Deserializing always yields the named variant.
#[derive(Debug, Clone, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReferenceAction {
    #[default]
    Cascade,
    Restrict,
    SetNull,
    SetDefault,
    NoAction,
    Other(String),
}

impl ReferenceAction {
    pub fn as_sql(&self) -> &str {
        match self {
            ReferenceAction::Cascade => "CASCADE",
            ReferenceAction::Restrict => "RESTRICT",
            ReferenceAction::SetNull => "SET NULL",
            ReferenceAction::SetDefault => "SET DEFAULT",
            ReferenceAction::NoAction => "NO ACTION",
            ReferenceAction::Other(raw) => raw,
        }
    }
}

impl From<String> for ReferenceAction {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "CASCADE" => ReferenceAction::Cascade,
            "RESTRICT" => ReferenceAction::Restrict,
            "SET NULL" => ReferenceAction::SetNull,
            "SET DEFAULT" => ReferenceAction::SetDefault,
            "NO ACTION" => ReferenceAction::NoAction,
            _ => ReferenceAction::Other(raw),
        }
    }
}

impl From<ReferenceAction> for String {
    fn from(action: ReferenceAction) -> Self {
        match action {
            ReferenceAction::Other(raw) => raw,
            known => known.as_sql().to_string(),
        }
    }
}

impl PartialEq for ReferenceAction {
    fn eq(&self, other: &Self) -> bool {
        self.as_sql() == other.as_sql()
    }
}

// Any string is accepted; the known actions are listed as examples.
#[cfg(feature = "schema")]
impl JsonSchema for ReferenceAction {
    fn schema_name() -> Cow<'static, str> {
        "ReferenceAction".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "examples": ["CASCADE", "RESTRICT", "SET NULL", "SET DEFAULT", "NO ACTION"]
        })
    }
}

impl fmt::Display for ReferenceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#""CASCADE""#, ReferenceAction::Cascade)]
    #[case(r#""RESTRICT""#, ReferenceAction::Restrict)]
    #[case(r#""SET NULL""#, ReferenceAction::SetNull)]
    #[case(r#""SET DEFAULT""#, ReferenceAction::SetDefault)]
    #[case(r#""NO ACTION""#, ReferenceAction::NoAction)]
    #[case(r#""cascade""#, ReferenceAction::Other("cascade".into()))]
    fn deserialize_reference_action(#[case] json: &str, #[case] expected: ReferenceAction) {
        let parsed: ReferenceAction = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn unknown_action_round_trips_verbatim() {
        let action = ReferenceAction::Other("DO NOTHING".into());
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(json, r#""DO NOTHING""#);
        assert_eq!(action.to_string(), "DO NOTHING");
    }

    #[rstest]
    #[case("CASCADE", ReferenceAction::Cascade)]
    #[case("SET NULL", ReferenceAction::SetNull)]
    #[case("NO ACTION", ReferenceAction::NoAction)]
    fn other_with_known_spelling_is_the_named_action(
        #[case] raw: &str,
        #[case] named: ReferenceAction,
    ) {
        let spelled = ReferenceAction::Other(raw.into());
        assert_eq!(spelled, named);
        let back: ReferenceAction =
            serde_json::from_str(&serde_json::to_string(&spelled).unwrap()).unwrap();
        assert_eq!(back, spelled);
        assert!(!matches!(back, ReferenceAction::Other(_)));
    }

    #[test]
    fn other_actions_compare_by_text() {
        assert_ne!(ReferenceAction::Other("cascade".into()), ReferenceAction::Cascade);
        assert_ne!(ReferenceAction::Restrict, ReferenceAction::Cascade);
    }

    #[test]
    fn default_is_cascade() {
        assert_eq!(ReferenceAction::default().as_sql(), "CASCADE");
    }
}

//! Access decisions for protected regions

use crate::Session;

/// Outcome of evaluating a navigation into a protected region
///
/// Derived and never cached: recompute it from a fresh snapshot on every
/// navigation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AccessDecision {
    /// The protected view may render
    Render,
    /// Redirect (replacing history) to the given path
    RedirectTo(String),
}

impl AccessDecision {
    #[inline]
    pub fn is_render(&self) -> bool {
        matches!(self, AccessDecision::Render)
    }

    /// Redirect target, if any
    pub fn redirect_path(&self) -> Option<&str> {
        match self {
            AccessDecision::Render => None,
            AccessDecision::RedirectTo(path) => Some(path),
        }
    }
}

/// Decide whether `session` may enter a protected region
///
/// Total over all sessions: `Render` iff identity and room membership are both
/// non-empty, otherwise `RedirectTo(fallback_path)`.
pub fn evaluate(session: &Session, fallback_path: &str) -> AccessDecision {
    if session.is_authorized() {
        AccessDecision::Render
    } else {
        AccessDecision::RedirectTo(fallback_path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field() -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            Just(None::<String>),
            Just(Some(String::new())),
            "[a-z@.]{1,12}".prop_map(Some),
        ]
    }

    #[test]
    fn test_truth_table() {
        let cases = [
            (None, None, false),
            (Some("a@b.com"), None, false),
            (None, Some("room1"), false),
            (Some("a@b.com"), Some("room1"), true),
        ];

        for (identity, room, allowed) in cases {
            let session = Session {
                identity: identity.map(str::to_string),
                room_membership: room.map(str::to_string),
            };
            let decision = evaluate(&session, "");
            assert_eq!(decision.is_render(), allowed, "{session:?}");
        }
    }

    #[test]
    fn test_empty_room_redirects() {
        let session = Session::new().with_identity("a@b.com").with_room("");
        assert_eq!(
            evaluate(&session, "/entry"),
            AccessDecision::RedirectTo("/entry".to_string())
        );
    }

    #[test]
    fn test_redirect_path() {
        assert_eq!(AccessDecision::Render.redirect_path(), None);
        assert_eq!(
            AccessDecision::RedirectTo("home".into()).redirect_path(),
            Some("home")
        );
    }

    proptest! {
        #[test]
        fn prop_evaluate_is_pure(identity in field(), room in field(), fallback in "[a-z/]{0,8}") {
            let session = Session { identity: identity.clone(), room_membership: room.clone() };
            let first = evaluate(&session, &fallback);
            prop_assert_eq!(&evaluate(&session, &fallback), &first);

            let both_present = identity.map_or(false, |s| !s.is_empty())
                && room.map_or(false, |s| !s.is_empty());
            if both_present {
                prop_assert_eq!(first, AccessDecision::Render);
            } else {
                prop_assert_eq!(first, AccessDecision::RedirectTo(fallback));
            }
        }
    }
}

//! The identity of the person making a request.
//!
//! Every page on the browsing surface works for signed-in and anonymous
//! visitors alike; only the personalized fragments (cart badge, view
//! history) differ. Modeling the identity as a sum type forces each
//! call site to decide what anonymity means for it instead of passing a
//! nullable user id around.

/// Identifier of a registered account, assigned by the accounts service.
pub type UserId = i64;

/// Who is making the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visitor {
    /// A signed-in user with a verified session cookie.
    Authenticated(UserId),
    /// No session cookie, or one that failed verification.
    Anonymous,
}

impl Visitor {
    /// Returns the user id for authenticated visitors.
    pub fn user_id(self) -> Option<UserId> {
        match self {
            Visitor::Authenticated(user_id) => Some(user_id),
            Visitor::Anonymous => None,
        }
    }

    pub fn is_authenticated(self) -> bool {
        matches!(self, Visitor::Authenticated(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticated_exposes_user_id() {
        let visitor = Visitor::Authenticated(42);
        assert!(visitor.is_authenticated());
        assert_eq!(visitor.user_id(), Some(42));
    }

    #[test]
    fn test_anonymous_has_no_user_id() {
        let visitor = Visitor::Anonymous;
        assert!(!visitor.is_authenticated());
        assert_eq!(visitor.user_id(), None);
    }
}

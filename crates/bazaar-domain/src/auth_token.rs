//! Auth-token choice enumerations.

use crate::choice_enum;

choice_enum! {
    /// Purpose of a one-time token. Stored as a small integer on `auth_tokens.type`.
    pub enum AuthTokenType: i16 {
        // Legacy label kept for wire compatibility with existing admin tooling.
        ResetToken = 0 => "TRANSFER",
        LoginToken = 1 => "LOGIN TOKEN",
        NumberVerification = 2 => "NUMBER VERIFICATION",
        AuthorizationToken = 3 => "AUTHORIZATION TOKEN",
    }
}

choice_enum! {
    pub enum AuthTokenStatus: i16 {
        Pending = 0 => "PENDING",
        Used = 1 => "USED",
    }
    transitions {
        Used <= [Pending],
    }
}

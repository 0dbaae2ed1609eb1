//! User-related choice enumerations.

use crate::choice_enum;

choice_enum! {
    /// Account category. Stored as a small integer on `users.type`.
    pub enum UserType: i16 {
        Customer = 0 => "CUSTOMER",
        Staff = 1 => "STAFF",
        Dealer = 2 => "DEALER",
        Agent = 3 => "AGENT",
        Investor = 4 => "INVESTOR",
    }
}

choice_enum! {
    /// Permission group names. Membership in `Staff` gates staff-only endpoints.
    pub enum UserGroup: &'static str {
        Buyer = "buyer" => "BUYER",
        Staff = "staff" => "STAFF",
        Dealer = "dealer" => "DEALER",
        Agent = "facilitator" => "AGENT",
        Investor = "investor" => "INVESTOR",
    }
}

choice_enum! {
    pub enum StaffType: &'static str {
        Waiter = "waiter" => "WAITER",
        BarTender = "bar tender" => "BAR_TENDER",
        Manager = "manager" => "MANAGER",
    }
}

choice_enum! {
    pub enum DisabilityType: &'static str {
        Disable = "disable" => "DISABLE",
        NotDisable = "not_" => "NOT DISABLE",
    }
}

choice_enum! {
    pub enum MaritalType: &'static str {
        Married = "MARRIED" => "MARRIED",
        Single = "SINGLE" => "SINGLE",
        Divorsed = "DIVORSED" => "DIVORSED",
    }
}

choice_enum! {
    pub enum GenderType: &'static str {
        Male = "male" => "Male",
        Female = "female" => "Female",
    }
}

/// Group name reported for users that belong to no group.
pub const DEFAULT_GROUP_NAME: &str = "customer";
